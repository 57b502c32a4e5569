use crate::index::{GraphIndex, GraphIndices};
use crate::interface::{
    DynamicGraph, GraphBase, ImmutableGraphContainer, MutableGraphContainer, NavigableGraph,
};
use num_traits::{PrimInt, ToPrimitive};
use petgraph::graph::Graph;
use petgraph::Undirected;
use std::iter::Map;

pub use petgraph;

/// Create a new undirected graph implemented through petgraph.
pub fn new<NodeData: 'static + Clone, EdgeData: 'static + Clone>(
) -> impl DynamicGraph<NodeData = NodeData, EdgeData = EdgeData> + Default + Clone {
    Graph::<NodeData, EdgeData, Undirected, usize>::default()
}

impl<NodeData, EdgeData> GraphBase for Graph<NodeData, EdgeData, Undirected, usize> {
    type NodeData = NodeData;
    type EdgeData = EdgeData;
    type NodeIndex = crate::index::NodeIndex<usize>;
}

impl<NodeData, EdgeData> ImmutableGraphContainer for Graph<NodeData, EdgeData, Undirected, usize> {
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex> {
        GraphIndices::from((0, self.node_count()))
    }

    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count()
    }

    fn contains_edge_between(&self, a: Self::NodeIndex, b: Self::NodeIndex) -> bool {
        self.edges_connecting(a.into(), b.into()).next().is_some()
    }
}

impl<NodeData, EdgeData> MutableGraphContainer for Graph<NodeData, EdgeData, Undirected, usize> {
    fn add_node(&mut self, node_data: NodeData) -> Self::NodeIndex {
        self.add_node(node_data).index().into()
    }

    fn add_edge(&mut self, a: Self::NodeIndex, b: Self::NodeIndex, edge_data: EdgeData) {
        self.add_edge(a.into(), b.into(), edge_data);
    }
}

type PetgraphNeighborTranslator<'a, EdgeData, NodeIndex> = Map<
    petgraph::graph::Neighbors<'a, EdgeData, usize>,
    fn(petgraph::graph::NodeIndex<usize>) -> NodeIndex,
>;

impl<'a, NodeData, EdgeData: 'a> NavigableGraph<'a>
    for Graph<NodeData, EdgeData, Undirected, usize>
{
    type Neighbors = PetgraphNeighborTranslator<'a, EdgeData, <Self as GraphBase>::NodeIndex>;

    fn neighbors(&'a self, node_id: <Self as GraphBase>::NodeIndex) -> Self::Neighbors {
        debug_assert!(node_id < self.node_count().into());
        self.neighbors(node_id.into())
            .map(|neighbor| <Self as GraphBase>::NodeIndex::from(neighbor.index()))
    }
}

impl<IndexType: PrimInt + ToPrimitive + petgraph::graph::IndexType>
    From<crate::index::NodeIndex<IndexType>> for petgraph::graph::NodeIndex<IndexType>
{
    fn from(index: crate::index::NodeIndex<IndexType>) -> Self {
        petgraph::graph::NodeIndex::new(index.as_usize())
    }
}
