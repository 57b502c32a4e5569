error_chain! {
    errors {
        /// A vertex is recorded as its own neighbor.
        SelfLoop(node_id: usize) {
            description("the graph contains a self loop")
            display("the graph contains a self loop at node {}", node_id)
        }

        /// An orientation does not have an entry for every node of the graph it is used with.
        OrientationSizeMismatch(graph_nodes: usize, orientation_nodes: usize) {
            description("the orientation does not match the node set of the graph")
            display(
                "the orientation covers {} nodes, but the graph has {} nodes",
                orientation_nodes,
                graph_nodes
            )
        }

        /// An out-neighbor list refers to a node that does not exist.
        UnknownVertex(node_id: usize, node_count: usize) {
            description("an out-neighbor list refers to a node that does not exist")
            display(
                "node {} is referred to as an out-neighbor, but only {} nodes exist",
                node_id,
                node_count
            )
        }
    }
}
