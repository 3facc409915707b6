use crate::model::graph::{Edge, EdgeKind};
use crate::model::unit::Cost;
use crate::strategy::Strategy;

/// Makes any transfer dominate any non-transfer path; in practice only returns
/// journeys reachable on a single route.
pub struct NoTransfer;

impl Strategy for NoTransfer {
    fn name(&self) -> &'static str {
        "no_transfer"
    }

    fn edge_cost(&self, edge: &Edge, _transfers_so_far: u32) -> Cost {
        match edge.kind {
            EdgeKind::Transfer => Cost::new(999_999_999),
            EdgeKind::Walk => Cost::new((edge.cost_time.as_f64() * 5.0).round() as u64),
            EdgeKind::Ride => Cost::new(edge.cost_time.as_f64().round() as u64),
        }
    }

    fn max_transfers(&self) -> u32 {
        0
    }

    fn max_explored_nodes(&self) -> usize {
        3_000
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::graph::NodeId;
    use crate::model::unit::{Meters, Seconds};

    fn edge(kind: EdgeKind, cost_time: f64) -> Edge {
        Edge::new(NodeId(0), NodeId(1), kind, Seconds::new(cost_time), Meters::ZERO)
    }

    #[test]
    fn transfer_edges_are_effectively_forbidden() {
        let cost = NoTransfer.edge_cost(&edge(EdgeKind::Transfer, 10.0), 0);
        assert!(cost.0 >= 999_999_999);
    }

    #[test]
    fn ride_cost_is_raw_time() {
        let cost = NoTransfer.edge_cost(&edge(EdgeKind::Ride, 120.0), 0);
        assert_eq!(cost, Cost::new(120));
    }

    #[test]
    fn max_transfers_is_zero() {
        assert_eq!(NoTransfer.max_transfers(), 0);
    }
}
