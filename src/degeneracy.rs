//! Degeneracy orientations of undirected graphs.
//!
//! A graph has degeneracy `d` if its nodes can be ordered such that every node has
//! at most `d` neighbors later in the order. Orienting each edge from its earlier
//! to its later endpoint then bounds every out-degree by `d`.
//! Such orientations are computed by repeatedly removing a node of minimum degree.

use crate::error::{ErrorKind, Result};
use crate::index::{GraphIndex, GraphIndices};
use crate::interface::StaticGraph;
use bitvector::BitVector;

/// A degeneracy orientation of an undirected graph.
///
/// Every undirected edge `{a, b}` is recorded in exactly one direction, i.e. exactly one of
/// `a ∈ out_neighbors(b)` and `b ∈ out_neighbors(a)` holds, and no node is its own out-neighbor.
/// Instances built by [degeneracy_orientation] additionally bound every out-degree
/// by the degeneracy of the graph and are acyclic, since they orient all edges along
/// a single total order of the nodes.
#[derive(Debug)]
pub struct DegeneracyOrientation<NodeIndex> {
    /// The out-neighbors of each node, sorted ascendingly.
    out_neighbors: Vec<Vec<NodeIndex>>,
    degeneracy: usize,
}

impl<NodeIndex: GraphIndex> DegeneracyOrientation<NodeIndex> {
    /// Creates an orientation from precomputed out-neighbor lists, where entry `i`
    /// holds the out-neighbors of node `i`.
    ///
    /// The lists are sorted and deduplicated, out-of-range entries and self loops are
    /// reported as errors. It is not checked that each undirected edge occurs in only
    /// one direction, nor that the orientation is acyclic or that its out-degrees are
    /// bounded by the degeneracy of any particular graph; callers violating those
    /// contracts get unspecified enumeration results downstream.
    pub fn from_out_neighbors(
        out_neighbors: impl IntoIterator<Item = Vec<NodeIndex>>,
    ) -> Result<Self> {
        let mut sorted_out_neighbors: Vec<_> = out_neighbors.into_iter().collect();
        let node_count = sorted_out_neighbors.len();
        let mut degeneracy = 0;

        for (node_id, neighbors) in sorted_out_neighbors.iter_mut().enumerate() {
            neighbors.sort_unstable();
            neighbors.dedup();
            for neighbor in neighbors.iter() {
                if neighbor.as_usize() >= node_count {
                    bail!(ErrorKind::UnknownVertex(neighbor.as_usize(), node_count));
                }
                if neighbor.as_usize() == node_id {
                    bail!(ErrorKind::SelfLoop(node_id));
                }
            }
            degeneracy = degeneracy.max(neighbors.len());
        }

        Ok(Self {
            out_neighbors: sorted_out_neighbors,
            degeneracy,
        })
    }

    /// Returns the amount of nodes this orientation covers.
    pub fn node_count(&self) -> usize {
        self.out_neighbors.len()
    }

    /// Returns an iterator over the node indices covered by this orientation.
    pub fn node_indices(&self) -> GraphIndices<NodeIndex> {
        GraphIndices::from((0, self.node_count()))
    }

    /// Returns the maximum out-degree of this orientation.
    /// For orientations built by [degeneracy_orientation] this is exactly
    /// the degeneracy of the underlying graph.
    pub fn degeneracy(&self) -> usize {
        self.degeneracy
    }

    /// Returns the out-neighbors of the given node, sorted ascendingly.
    pub fn out_neighbors(&self, node_id: NodeIndex) -> &[NodeIndex] {
        &self.out_neighbors[node_id.as_usize()]
    }

    /// Returns true if the two given nodes are adjacent in the underlying undirected graph,
    /// i.e. if the edge between them is recorded in either direction.
    pub fn adjacent(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.out_neighbors(a).binary_search(&b).is_ok()
            || self.out_neighbors(b).binary_search(&a).is_ok()
    }
}

/// Computes a degeneracy orientation of the given graph by repeatedly removing
/// a node of minimum remaining degree, orienting every edge from its earlier
/// to its later removed endpoint.
///
/// Parallel edges are collapsed. A self loop is reported as an error, since a node
/// adjacent to itself has no meaningful side in a biclique.
pub fn degeneracy_orientation<Graph: StaticGraph>(
    graph: &Graph,
) -> Result<DegeneracyOrientation<Graph::NodeIndex>> {
    let node_count = graph.node_count();
    let mut adjacency: Vec<Vec<Graph::NodeIndex>> = Vec::with_capacity(node_count);
    for node_id in graph.node_indices() {
        let mut neighbors: Vec<_> = graph.neighbors(node_id).collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        if neighbors.binary_search(&node_id).is_ok() {
            bail!(ErrorKind::SelfLoop(node_id.as_usize()));
        }
        adjacency.push(neighbors);
    }

    // Bucket queue over remaining degrees with lazy deletion: decrementing a degree
    // pushes a new bin entry, and entries that no longer match the current degree
    // of their node are skipped when popped.
    let mut degrees: Vec<usize> = adjacency.iter().map(Vec::len).collect();
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let mut degree_bins: Vec<Vec<Graph::NodeIndex>> = vec![Vec::new(); max_degree + 1];
    for node_id in graph.node_indices() {
        degree_bins[degrees[node_id.as_usize()]].push(node_id);
    }

    let mut removed = BitVector::new(node_count);
    let mut removal_positions = vec![0; node_count];
    let mut removal_count = 0;
    let mut degeneracy = 0;
    let mut current_degree = 0;

    while removal_count < node_count {
        let node_id = loop {
            if let Some(node_id) = degree_bins[current_degree].pop() {
                if removed.contains(node_id.as_usize())
                    || degrees[node_id.as_usize()] != current_degree
                {
                    continue;
                }
                break node_id;
            }
            current_degree += 1;
        };

        removed.insert(node_id.as_usize());
        removal_positions[node_id.as_usize()] = removal_count;
        removal_count += 1;
        degeneracy = degeneracy.max(current_degree);

        for neighbor in adjacency[node_id.as_usize()].iter() {
            if !removed.contains(neighbor.as_usize()) {
                let degree = degrees[neighbor.as_usize()] - 1;
                degrees[neighbor.as_usize()] = degree;
                degree_bins[degree].push(*neighbor);
            }
        }

        // Removing a node lowers the degrees of its neighbors by at most one,
        // so the minimum remaining degree cannot drop further than that.
        current_degree = current_degree.saturating_sub(1);
    }

    let mut out_neighbors = Vec::with_capacity(node_count);
    for (node_id, neighbors) in adjacency.into_iter().enumerate() {
        let position = removal_positions[node_id];
        let out: Vec<_> = neighbors
            .into_iter()
            .filter(|neighbor| removal_positions[neighbor.as_usize()] > position)
            .collect();
        debug_assert!(out.len() <= degeneracy);
        out_neighbors.push(out);
    }

    info!(
        "Computed a degeneracy orientation with degeneracy {} for a graph with {} nodes",
        degeneracy, node_count
    );
    Ok(DegeneracyOrientation {
        out_neighbors,
        degeneracy,
    })
}
