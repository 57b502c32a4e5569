//! Functions to create graphs with predefined structures.

use crate::interface::DynamicGraph;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Adds a complete graph with the given amount of nodes to the given graph.
/// Assumes that the graph is empty.
pub fn create_complete_graph<Graph: DynamicGraph>(graph: &mut Graph, node_amount: usize)
where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    for _ in 0..node_amount {
        graph.add_node(Default::default());
    }

    for (offset, n1) in graph.node_indices().enumerate() {
        for n2 in graph.node_indices().skip(offset + 1) {
            graph.add_edge(n1, n2, Default::default());
        }
    }
}

/// Adds a grid graph with the given amount of rows and columns to the given graph,
/// connecting each node to its horizontal and vertical neighbors.
/// Assumes that the graph is empty.
pub fn create_grid_graph<Graph: DynamicGraph>(graph: &mut Graph, rows: usize, columns: usize)
where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    let nodes: Vec<_> = (0..rows * columns)
        .map(|_| graph.add_node(Default::default()))
        .collect();

    for row in 0..rows {
        for column in 0..columns {
            let node = nodes[row * columns + column];
            if column + 1 < columns {
                graph.add_edge(node, nodes[row * columns + column + 1], Default::default());
            }
            if row + 1 < rows {
                graph.add_edge(node, nodes[(row + 1) * columns + column], Default::default());
            }
        }
    }
}

/// Adds a complete bipartite graph to the given graph and returns the node indices
/// of its two sides.
/// Assumes that the graph is empty.
pub fn create_complete_bipartite_graph<Graph: DynamicGraph>(
    graph: &mut Graph,
    left_amount: usize,
    right_amount: usize,
) -> (Vec<Graph::NodeIndex>, Vec<Graph::NodeIndex>)
where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    let left: Vec<_> = (0..left_amount)
        .map(|_| graph.add_node(Default::default()))
        .collect();
    let right: Vec<_> = (0..right_amount)
        .map(|_| graph.add_node(Default::default()))
        .collect();

    for n1 in left.iter() {
        for n2 in right.iter() {
            graph.add_edge(*n1, *n2, Default::default());
        }
    }

    (left, right)
}

/// Creates a random simple graph with the given amounts of nodes and edges.
/// Assumes that the graph is empty.
pub fn create_random_graph<Graph: DynamicGraph, Random: Rng>(
    graph: &mut Graph,
    node_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    if node_amount == 0 {
        return;
    }
    debug_assert!(
        edge_amount <= node_amount * (node_amount - 1) / 2,
        "edge_amount <= node_amount * (node_amount - 1) / 2: {} <= {}",
        edge_amount,
        node_amount * (node_amount - 1) / 2,
    );

    for _ in 0..node_amount {
        graph.add_node(Default::default());
    }

    while graph.edge_count() < edge_amount {
        let n1 = graph.node_indices().choose(random).unwrap();
        let n2 = graph.node_indices().choose(random).unwrap();

        if n1 != n2 && !graph.contains_edge_between(n1, n2) {
            graph.add_edge(n1, n2, Default::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        create_complete_bipartite_graph, create_complete_graph, create_grid_graph,
        create_random_graph,
    };
    use crate::implementation::petgraph_impl;
    use crate::interface::ImmutableGraphContainer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_create_complete_graph_5() {
        let mut graph = petgraph_impl::new::<(), ()>();
        create_complete_graph(&mut graph, 5);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 10);
    }

    #[test]
    fn test_create_grid_graph_3_4() {
        let mut graph = petgraph_impl::new::<(), ()>();
        create_grid_graph(&mut graph, 3, 4);
        assert_eq!(graph.node_count(), 12);
        assert_eq!(graph.edge_count(), 3 * 3 + 2 * 4);
    }

    #[test]
    fn test_create_complete_bipartite_graph_3_2() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let (left, right) = create_complete_bipartite_graph(&mut graph, 3, 2);
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 2);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 6);
        for n1 in left.iter() {
            for n2 in right.iter() {
                debug_assert!(graph.contains_edge_between(*n1, *n2));
            }
        }
    }

    #[test]
    fn test_create_random_graph_has_requested_size() {
        let mut random = StdRng::seed_from_u64(0);
        let mut graph = petgraph_impl::new::<(), ()>();
        create_random_graph(&mut graph, 10, 20, &mut random);
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 20);
        for node in graph.node_indices() {
            debug_assert!(!graph.contains_edge_between(node, node));
        }
    }
}
