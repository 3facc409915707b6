use std::collections::HashMap;

use crate::model::graph::{Edge, EdgeKind, GraphSnapshot, Node, NodeId};
use crate::model::route::{RouteId, TransitMode};
use crate::model::stop::StopId;
use crate::model::unit::{Meters, Seconds};

/// Hand-assembles a small [`GraphSnapshot`] for unit and scenario tests, mirroring
/// how a real snapshot is built from CSV rows but without touching the filesystem.
#[derive(Default)]
pub struct MockGraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl MockGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// registers a `(stop, route)` node and returns its dense id.
    #[allow(clippy::too_many_arguments)]
    pub fn add_node(
        &mut self,
        stop_id: &str,
        stop_name: &str,
        lat: f64,
        lon: f64,
        route_id: &str,
        route_name: &str,
        mode: TransitMode,
    ) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            stop_id: StopId(stop_id.to_string()),
            stop_name: stop_name.to_string(),
            lat,
            lon,
            route_id: RouteId(route_id.to_string()),
            route_name: route_name.to_string(),
            mode,
        });
        node_id
    }

    pub fn add_ride(&mut self, from: NodeId, to: NodeId, cost_time_seconds: f64) -> &mut Self {
        self.edges.push(Edge::new(
            from,
            to,
            EdgeKind::Ride,
            Seconds::new(cost_time_seconds),
            Meters::ZERO,
        ));
        self
    }

    pub fn add_transfer(&mut self, from: NodeId, to: NodeId, cost_time_seconds: f64) -> &mut Self {
        self.edges.push(Edge::new(
            from,
            to,
            EdgeKind::Transfer,
            Seconds::new(cost_time_seconds),
            Meters::ZERO,
        ));
        self
    }

    pub fn add_walk(&mut self, from: NodeId, to: NodeId, cost_walk_meters: f64) -> &mut Self {
        self.edges.push(Edge::new(
            from,
            to,
            EdgeKind::Walk,
            Seconds::new(cost_walk_meters / crate::model::unit::WALKING_SPEED_MPS),
            Meters::new(cost_walk_meters),
        ));
        self
    }

    pub fn build(self) -> GraphSnapshot {
        let mut by_origin: Vec<Vec<Edge>> = vec![Vec::new(); self.nodes.len()];
        for edge in self.edges {
            by_origin[edge.from_node.0].push(edge);
        }
        let mut offsets = Vec::with_capacity(self.nodes.len() + 1);
        let mut edges = Vec::new();
        offsets.push(0);
        for bucket in by_origin {
            edges.extend(bucket);
            offsets.push(edges.len());
        }

        let mut stop_index: HashMap<StopId, Vec<NodeId>> = HashMap::new();
        for (idx, node) in self.nodes.iter().enumerate() {
            stop_index
                .entry(node.stop_id.clone())
                .or_default()
                .push(NodeId(idx));
        }

        GraphSnapshot {
            nodes: self.nodes.into_boxed_slice(),
            edges: edges.into_boxed_slice(),
            offsets: offsets.into_boxed_slice(),
            stop_index,
        }
    }
}
