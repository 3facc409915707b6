use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::model::graph::edge::Edge;
use crate::model::graph::graph_error::GraphError;
use crate::model::graph::graph_loader::graph_snapshot_from_files;
use crate::model::graph::node::Node;
use crate::model::graph::node_id::NodeId;
use crate::model::stop::StopId;

/// One fully populated, immutable instance of the routing graph.
///
/// Adjacency is stored CSR-style: `edges` is one contiguous array and `offsets[i]..offsets[i+1]`
/// is the slice of outgoing edges for node `i`. This keeps traversal during search to two
/// array reads per node instead of a hash lookup.
#[derive(Debug)]
pub struct GraphSnapshot {
    pub nodes: Box<[Node]>,
    pub edges: Box<[Edge]>,
    pub offsets: Box<[usize]>,
    pub stop_index: HashMap<StopId, Vec<NodeId>>,
}

impl GraphSnapshot {
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn get_node(&self, node_id: NodeId) -> Result<&Node, GraphError> {
        self.nodes
            .get(node_id.0)
            .ok_or(GraphError::UnknownNode { node_id })
    }

    /// The precomputed outgoing-edge slice for `node_id`; empty if the node is a sink.
    pub fn outgoing(&self, node_id: NodeId) -> Result<&[Edge], GraphError> {
        let start = *self
            .offsets
            .get(node_id.0)
            .ok_or(GraphError::UnknownNode { node_id })?;
        let end = *self
            .offsets
            .get(node_id.0 + 1)
            .ok_or(GraphError::UnknownNode { node_id })?;
        Ok(&self.edges[start..end])
    }

    /// Every `(stop, route)` node registered under `stop_id`.
    pub fn nodes_at_stop(&self, stop_id: &StopId) -> &[NodeId] {
        self.stop_index
            .get(stop_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

/// Read-mostly handle to the current [`GraphSnapshot`]. `load` swaps the pointer
/// atomically; in-flight searches hold their own `Arc` clone and keep running
/// against the old snapshot until they finish.
#[derive(Debug)]
pub struct GraphStore {
    current: RwLock<Arc<GraphSnapshot>>,
}

impl GraphStore {
    pub fn new(snapshot: GraphSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn from_files<P: AsRef<Path>>(
        node_list_csv: &P,
        edge_list_csv: &P,
    ) -> Result<Self, GraphError> {
        let snapshot = graph_snapshot_from_files(node_list_csv, edge_list_csv)?;
        Ok(Self::new(snapshot))
    }

    /// A cheap `Arc` clone of the snapshot currently in effect. Callers should take
    /// this once per search and operate on the clone rather than re-reading the lock.
    pub fn snapshot(&self) -> Arc<GraphSnapshot> {
        Arc::clone(&self.current.read().expect("graph store lock poisoned"))
    }

    /// Atomically replaces the snapshot in effect. Readers already
    /// holding a clone of the previous snapshot are unaffected.
    pub fn load(&self, snapshot: GraphSnapshot) {
        let mut guard = self.current.write().expect("graph store lock poisoned");
        *guard = Arc::new(snapshot);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::route::TransitMode;
    use crate::testing::MockGraphBuilder;

    fn small_snapshot() -> GraphSnapshot {
        let mut builder = MockGraphBuilder::new();
        let a = builder.add_node("A", "Stop A", 0.0, 0.0, "R1", "Route 1", TransitMode::Bus);
        let b = builder.add_node("B", "Stop B", 0.0, 1.0, "R1", "Route 1", TransitMode::Bus);
        builder.add_ride(a, b, 120.0);
        builder.build()
    }

    #[test]
    fn outgoing_returns_edges_for_origin_node() {
        let snapshot = small_snapshot();
        let edges = snapshot.outgoing(NodeId(0)).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to_node, NodeId(1));
    }

    #[test]
    fn outgoing_is_empty_for_sink_node() {
        let snapshot = small_snapshot();
        let edges = snapshot.outgoing(NodeId(1)).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn get_node_rejects_out_of_range_id() {
        let snapshot = small_snapshot();
        assert!(snapshot.get_node(NodeId(99)).is_err());
    }

    #[test]
    fn nodes_at_stop_finds_registered_nodes() {
        let snapshot = small_snapshot();
        let nodes = snapshot.nodes_at_stop(&StopId("A".to_string()));
        assert_eq!(nodes, &[NodeId(0)]);
    }

    #[test]
    fn nodes_at_stop_is_empty_for_unknown_stop() {
        let snapshot = small_snapshot();
        let nodes = snapshot.nodes_at_stop(&StopId("Z".to_string()));
        assert!(nodes.is_empty());
    }

    #[test]
    fn load_swaps_snapshot_atomically_for_future_readers() {
        let store = GraphStore::new(small_snapshot());
        let before = store.snapshot();
        assert_eq!(before.n_nodes(), 2);

        store.load(small_snapshot());
        let after = store.snapshot();
        assert_eq!(after.n_nodes(), 2);
        assert!(!Arc::ptr_eq(&before, &after));
    }
}
