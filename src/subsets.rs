//! A lazy enumeration of all subsets of a finite sequence of elements.
//!
//! The enumeration keeps a single working subset that is mutated in place between steps,
//! instead of allocating a fresh container for each of the `2^n` subsets.
//! Consumers that want to keep a subset must copy it before advancing further,
//! which the borrow checker enforces for the borrowing [Subsets::current] access.
//! The [Iterator] implementation copies the working subset on every step instead,
//! trading one allocation per subset for not having to think about the above.

/// An enumeration of all subsets of a sequence of elements.
///
/// An input of `n` elements produces exactly `2^n` subsets, each exactly once,
/// in binary counting order: element `i` of the input toggles like bit `i` of a counter,
/// so the empty subset comes first and the full set comes last.
/// The enumeration cannot be restarted, create a new instance instead.
///
/// The input is treated as a set, so its elements are assumed to be pairwise distinct.
/// Duplicated input elements are not detected and yield subsets that repeat by value.
pub struct Subsets<Element> {
    elements: Vec<Element>,
    /// Positions of the current subset within `elements`, in decreasing order.
    indices: Vec<usize>,
    /// The working subset, kept parallel to `indices`.
    subset: Vec<Element>,
    started: bool,
    exhausted: bool,
}

impl<Element: Clone> Subsets<Element> {
    /// Creates an enumeration of all subsets of the given elements.
    pub fn new(elements: impl IntoIterator<Item = Element>) -> Self {
        let elements: Vec<_> = elements.into_iter().collect();
        let capacity = elements.len();
        Self {
            elements,
            indices: Vec::with_capacity(capacity),
            subset: Vec::with_capacity(capacity),
            started: false,
            exhausted: false,
        }
    }

    /// Steps the working subset to the next subset, returning true on success
    /// and false if all subsets have been produced.
    /// The first call lands on the empty subset.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if !self.started {
            self.started = true;
            return true;
        }

        // The next subset in counting order removes the maximal run of elements
        // 0, 1, ..., r-1 at the tail of the index stack and inserts element r.
        let mut run_length = 0;
        while run_length < self.indices.len()
            && self.indices[self.indices.len() - 1 - run_length] == run_length
        {
            run_length += 1;
        }

        if run_length == self.elements.len() {
            self.exhausted = true;
            return false;
        }

        self.indices.truncate(self.indices.len() - run_length);
        self.subset.truncate(self.indices.len());
        self.indices.push(run_length);
        self.subset.push(self.elements[run_length].clone());
        true
    }

    /// Returns the current subset as a borrowed view of the working buffer.
    ///
    /// The view is only valid until the next call to [Subsets::advance];
    /// copy it before advancing if it needs to be retained.
    /// Before the first call to `advance`, the working subset is empty
    /// and does not represent a produced subset.
    pub fn current(&self) -> &[Element] {
        &self.subset
    }
}

impl<Element: Clone> Iterator for Subsets<Element> {
    type Item = Vec<Element>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.subset.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Subsets;
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn test_subsets_of_three_elements() {
        let subsets: Vec<_> = Subsets::new(vec![1, 2, 3]).collect();
        assert_eq!(
            subsets,
            vec![
                vec![],
                vec![1],
                vec![2],
                vec![2, 1],
                vec![3],
                vec![3, 1],
                vec![3, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_subsets_of_empty_sequence() {
        let subsets: Vec<_> = Subsets::<u32>::new(vec![]).collect();
        assert_eq!(subsets, vec![Vec::<u32>::new()]);
    }

    #[test]
    fn test_subset_count_and_distinctness() {
        let elements: Vec<_> = (0..10u32).collect();
        let mut subset_count = 0usize;
        let mut distinct_subsets = HashSet::new();
        for subset in Subsets::new(elements.clone()) {
            subset_count += 1;
            distinct_subsets.insert(subset.into_iter().collect::<BTreeSet<_>>());
        }
        assert_eq!(subset_count, 1 << elements.len());
        assert_eq!(distinct_subsets.len(), 1 << elements.len());
        assert!(distinct_subsets.contains(&BTreeSet::new()));
        assert!(distinct_subsets.contains(&elements.into_iter().collect::<BTreeSet<_>>()));
    }

    #[test]
    fn test_copied_views_match_owned_subsets() {
        let elements: Vec<_> = (0..7u32).collect();
        let mut streaming = Subsets::new(elements.clone());
        let mut copied_views = Vec::new();
        while streaming.advance() {
            // Copying immediately after each step is the documented usage of the view.
            copied_views.push(streaming.current().to_vec());
        }
        let owned: Vec<_> = Subsets::new(elements).collect();
        assert_eq!(copied_views, owned);
    }

    #[test]
    fn test_working_subset_is_reused() {
        let mut subsets = Subsets::new(vec![8, 9]);
        assert!(subsets.advance());
        assert_eq!(subsets.current(), &[] as &[i32]);
        assert!(subsets.advance());
        assert_eq!(subsets.current(), &[8]);
        assert!(subsets.advance());
        assert_eq!(subsets.current(), &[9]);
        assert!(subsets.advance());
        assert_eq!(subsets.current(), &[9, 8]);
        assert!(!subsets.advance());
        assert!(!subsets.advance());
    }
}
