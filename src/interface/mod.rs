//! The graph traits.
//!
//! The traits are roughly split up by different access types:
//!  - immutable reference (`ImmutableGraphContainer`)
//!  - mutable reference (`MutableGraphContainer`)
//!  - immutable reference that must outlive the return value (`NavigableGraph`)
//!
//! All graphs are undirected. Edge directions only enter the picture as degeneracy
//! orientations, which are separate values computed from a graph rather than part of it.

use crate::index::{GraphIndex, GraphIndices};

/// Contains the associated types of a graph.
pub trait GraphBase {
    /// The data type associated with each node.
    type NodeData;
    /// The data type associated with each edge.
    type EdgeData;
    /// The index type used for nodes.
    type NodeIndex: GraphIndex;
}

/// A container that contains a set of nodes and edges.
///
/// Graphs that implement this trait must have their nodes indexed consecutively.
pub trait ImmutableGraphContainer: GraphBase {
    /// Returns an iterator over the node indices in this graph.
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex>;

    /// Returns the amount of nodes in this graph.
    fn node_count(&self) -> usize;

    /// Returns the amount of edges in this graph.
    fn edge_count(&self) -> usize;

    /// Returns true if the graph contains an edge between the two given nodes.
    fn contains_edge_between(&self, a: Self::NodeIndex, b: Self::NodeIndex) -> bool;
}

/// A container that allows adding nodes and edges.
pub trait MutableGraphContainer: ImmutableGraphContainer {
    /// Adds a new node with the given `NodeData` to the graph.
    fn add_node(&mut self, node_data: Self::NodeData) -> Self::NodeIndex;

    /// Adds a new undirected edge with the given `EdgeData` between the two given nodes.
    fn add_edge(&mut self, a: Self::NodeIndex, b: Self::NodeIndex, edge_data: Self::EdgeData);
}

/// A graph that can be navigated, i.e. that can iterate the neighbors of its nodes.
pub trait NavigableGraph<'a>: ImmutableGraphContainer + Sized {
    /// The iterator type used to iterate over the neighbors of a node.
    type Neighbors: Iterator<Item = Self::NodeIndex>;

    /// Returns an iterator over the neighbors of the given node.
    /// A node with a self loop is its own neighbor, and parallel edges repeat the neighbor.
    fn neighbors(&'a self, node_id: Self::NodeIndex) -> Self::Neighbors;

    /// Returns the amount of edges incident to the given node.
    fn degree(&'a self, node_id: Self::NodeIndex) -> usize {
        self.neighbors(node_id).count()
    }
}

/// A graph implementing all common graph traits that do not require mutable access.
/// This is a useful shortcut for generic type bounds when the graph should not be mutated.
pub trait StaticGraph: ImmutableGraphContainer + for<'a> NavigableGraph<'a> {}
impl<T: ImmutableGraphContainer + for<'a> NavigableGraph<'a>> StaticGraph for T {}

/// A graph implementing all common graph traits, including those requiring mutable access.
/// This is a useful shortcut for generic type bounds when the graph should be mutated.
pub trait DynamicGraph: StaticGraph + MutableGraphContainer {}
impl<T: StaticGraph + MutableGraphContainer> DynamicGraph for T {}
