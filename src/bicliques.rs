//! The enumeration of maximal bicliques in undirected graphs, following the algorithm of
//! Eppstein: "Arboricity and bipartite subgraph listing algorithms", Information Processing
//! Letters 51 (1994).
//!
//! A biclique is a pair of disjoint vertex sets such that every vertex of one side is
//! adjacent to every vertex of the other side. It is maximal if no vertex can be added
//! to either side. Only bicliques with at least two vertices on both sides are listed,
//! as those with a single vertex on one side are plain neighborhood subsets.
//!
//! The algorithm enumerates all subsets of the out-neighborhoods of a degeneracy
//! orientation of the graph. Each such subset is one side of a potential biclique, and
//! is extended to its closure, the set of all vertices adjacent to the complete subset.
//! A pair is listed if its two sides are closures of each other.

use crate::degeneracy::{degeneracy_orientation, DegeneracyOrientation};
use crate::error::{ErrorKind, Result};
use crate::index::GraphIndex;
use crate::interface::StaticGraph;
use crate::subsets::Subsets;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A set of vertices, stored as a sorted and deduplicated sequence of node indices.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexSet<NodeIndex> {
    vertices: Vec<NodeIndex>,
}

impl<NodeIndex: GraphIndex> VertexSet<NodeIndex> {
    /// Creates a vertex set from the given vertices, sorting and deduplicating them.
    pub fn new(vertices: impl IntoIterator<Item = NodeIndex>) -> Self {
        let mut vertices: Vec<_> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    /// Returns true if the given vertex is part of this set.
    pub fn contains(&self, node_id: NodeIndex) -> bool {
        self.vertices.binary_search(&node_id).is_ok()
    }

    /// Returns the amount of vertices in this set.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if this set contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns an iterator over the vertices in this set, in ascending order.
    pub fn iter(&self) -> std::slice::Iter<NodeIndex> {
        self.vertices.iter()
    }

    /// Returns the vertices in this set as a slice, in ascending order.
    pub fn as_slice(&self) -> &[NodeIndex] {
        &self.vertices
    }
}

impl<NodeIndex: fmt::Debug> fmt::Debug for VertexSet<NodeIndex> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "VertexSet{:?}", self.vertices)
    }
}

/// A complete bipartite subgraph, given as its two disjoint sides.
///
/// The sides are unordered. They are normalized on construction such that two bicliques
/// compare equal whenever they consist of the same pair of vertex sets.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Biclique<NodeIndex> {
    left: VertexSet<NodeIndex>,
    right: VertexSet<NodeIndex>,
}

impl<NodeIndex: GraphIndex> Biclique<NodeIndex> {
    /// Creates a biclique from its two sides.
    pub fn new(first: VertexSet<NodeIndex>, second: VertexSet<NodeIndex>) -> Self {
        debug_assert!(
            first.iter().all(|vertex| !second.contains(*vertex)),
            "the sides of a biclique must be disjoint: {:?}, {:?}",
            first,
            second
        );
        if second < first {
            Self {
                left: second,
                right: first,
            }
        } else {
            Self {
                left: first,
                right: second,
            }
        }
    }

    /// Returns one side of this biclique.
    pub fn left(&self) -> &VertexSet<NodeIndex> {
        &self.left
    }

    /// Returns the other side of this biclique.
    pub fn right(&self) -> &VertexSet<NodeIndex> {
        &self.right
    }

    /// Decomposes this biclique into its two sides.
    pub fn into_sides(self) -> (VertexSet<NodeIndex>, VertexSet<NodeIndex>) {
        (self.left, self.right)
    }
}

/// An iterator over the maximal bicliques of an undirected graph.
///
/// The candidate sides and their closures are computed eagerly on construction, while
/// the maximality and duplication checks run lazily during iteration. Each maximal
/// biclique with at least two vertices on both sides is returned exactly once, in
/// unspecified order.
#[derive(Debug)]
pub struct MaximalBicliques<NodeIndex> {
    keyed_closures: std::vec::IntoIter<(VertexSet<NodeIndex>, VertexSet<NodeIndex>)>,
    closures: HashMap<VertexSet<NodeIndex>, VertexSet<NodeIndex>>,
    emitted: HashMap<VertexSet<NodeIndex>, VertexSet<NodeIndex>>,
}

impl<NodeIndex: GraphIndex> MaximalBicliques<NodeIndex> {
    /// Prepares the enumeration of the maximal bicliques of the given graph,
    /// computing a degeneracy orientation of the graph first.
    ///
    /// Fails if the graph contains a self loop.
    pub fn compute<Graph: StaticGraph<NodeIndex = NodeIndex>>(graph: &Graph) -> Result<Self> {
        let orientation = degeneracy_orientation(graph)?;
        Self::compute_with_orientation(graph, &orientation)
    }

    /// Prepares the enumeration of the maximal bicliques of the given graph, using
    /// the given precomputed orientation of its edges.
    ///
    /// The orientation must cover each edge of the graph in exactly one direction and
    /// must be acyclic, as orientations built by [degeneracy_orientation] are. Only the
    /// amounts of nodes are checked to match, adjacency is taken from the orientation
    /// without further validation. The out-degrees of the orientation bound the running
    /// time, which is why a degeneracy orientation should be used.
    pub fn compute_with_orientation<Graph: StaticGraph<NodeIndex = NodeIndex>>(
        graph: &Graph,
        orientation: &DegeneracyOrientation<NodeIndex>,
    ) -> Result<Self> {
        if graph.node_count() != orientation.node_count() {
            bail!(ErrorKind::OrientationSizeMismatch(
                graph.node_count(),
                orientation.node_count()
            ));
        }

        // Each subset of an out-neighborhood is one potential side of a biclique.
        // Its closure members are collected in a plain vector first and frozen into
        // a vertex set once complete.
        info!("Enumerating out-neighborhood subsets");
        let mut closure_members: HashMap<VertexSet<NodeIndex>, Vec<NodeIndex>> = HashMap::new();
        for node_id in orientation.node_indices() {
            let out_neighbors = orientation.out_neighbors(node_id);
            if out_neighbors.len() < 2 {
                continue;
            }

            let mut subsets = Subsets::new(out_neighbors.iter().copied());
            while subsets.advance() {
                let subset = subsets.current();
                if subset.len() < 2 {
                    continue;
                }

                closure_members
                    .entry(VertexSet::new(subset.iter().copied()))
                    .or_default()
                    .push(node_id);
            }
        }

        // A vertex adjacent to a complete subset either contains the subset in its
        // out-neighborhood, in which case it was collected above, or it is an
        // out-neighbor of at least one subset member. Checking all out-neighbors of
        // all members therefore completes each member list to the exact closure.
        info!(
            "Extending {} candidate sides to their closures",
            closure_members.len()
        );
        for (side, members) in closure_members.iter_mut() {
            let mut checked: HashSet<NodeIndex> = members.iter().copied().collect();
            for vertex in side.iter().copied() {
                for candidate in orientation.out_neighbors(vertex).iter().copied() {
                    if !checked.insert(candidate) {
                        continue;
                    }
                    if side.iter().all(|member| orientation.adjacent(candidate, *member)) {
                        members.push(candidate);
                    }
                }
            }
        }

        // Both sides of a maximal biclique are closures of each other, but only one of
        // them is guaranteed to occur as an out-neighborhood subset. Linking each closure
        // back to its largest preimage makes the closures of both sides available: the
        // largest preimage of a closure is the closure of that closure.
        info!("Linking closures to their largest preimages");
        let keyed_closures: Vec<_> = closure_members
            .into_iter()
            .map(|(side, members)| (side, VertexSet::new(members)))
            .collect();
        let mut closures: HashMap<_, _> = keyed_closures.iter().cloned().collect();
        for (side, closure) in keyed_closures.iter() {
            match closures.entry(closure.clone()) {
                Entry::Occupied(mut entry) => {
                    if entry.get().len() < side.len() {
                        entry.insert(side.clone());
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(side.clone());
                }
            }
        }

        Ok(Self {
            keyed_closures: keyed_closures.into_iter(),
            closures,
            emitted: HashMap::new(),
        })
    }
}

impl<NodeIndex: GraphIndex> Iterator for MaximalBicliques<NodeIndex> {
    type Item = Biclique<NodeIndex>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((side, closure)) = self.keyed_closures.next() {
            if side.len() < 2 || closure.len() < 2 {
                continue;
            }
            // The pair is maximal exactly if its sides are closures of each other.
            // A side that is a proper subset of the closure of its closure is extendable
            // and must not be listed.
            if self.closures.get(&closure) != Some(&side) {
                continue;
            }
            if self.emitted.get(&closure) == Some(&side) {
                continue;
            }

            self.emitted.insert(side.clone(), closure.clone());
            return Some(Biclique::new(side, closure));
        }

        None
    }
}
