use crate::model::graph::{Edge, EdgeKind};
use crate::model::unit::Cost;
use crate::strategy::Strategy;

const TRANSFER_PENALTY_BASE: f64 = 180.0;

/// The recommended default: balances time, walking, and transfer count.
///
/// A TRANSFER edge's `cost_transfer` is always exactly 1, so the penalty is a
/// flat 180s per transfer rather than progressive in the cumulative transfer count.
pub struct Simple;

impl Strategy for Simple {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn edge_cost(&self, edge: &Edge, _transfers_so_far: u32) -> Cost {
        match edge.kind {
            EdgeKind::Transfer => {
                let cost = edge.cost_time.as_f64() + TRANSFER_PENALTY_BASE * edge.cost_transfer as f64;
                Cost::new(cost.round() as u64)
            }
            EdgeKind::Walk => {
                let cost = edge.cost_time.as_f64() + edge.cost_walk.as_f64() * 2.0;
                Cost::new(cost.round() as u64)
            }
            EdgeKind::Ride => Cost::new(edge.cost_time.as_f64().round() as u64),
        }
    }

    fn max_transfers(&self) -> u32 {
        2
    }

    fn max_explored_nodes(&self) -> usize {
        10_000
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::graph::NodeId;
    use crate::model::unit::{Meters, Seconds};

    #[test]
    fn transfer_penalty_is_flat_180_seconds() {
        let edge = Edge::new(NodeId(0), NodeId(1), EdgeKind::Transfer, Seconds::new(30.0), Meters::ZERO);
        let cost = Simple.edge_cost(&edge, 0);
        assert_eq!(cost, Cost::new(210));
    }

    #[test]
    fn transfer_penalty_does_not_scale_with_transfers_so_far() {
        let edge = Edge::new(NodeId(0), NodeId(1), EdgeKind::Transfer, Seconds::new(30.0), Meters::ZERO);
        let first = Simple.edge_cost(&edge, 0);
        let third = Simple.edge_cost(&edge, 2);
        assert_eq!(first, third);
    }

    #[test]
    fn walk_cost_adds_distance_penalty() {
        let edge = Edge::new(NodeId(0), NodeId(1), EdgeKind::Walk, Seconds::new(100.0), Meters::new(50.0));
        let cost = Simple.edge_cost(&edge, 0);
        assert_eq!(cost, Cost::new(200));
    }

    #[test]
    fn max_transfers_is_two() {
        assert_eq!(Simple.max_transfers(), 2);
    }
}
