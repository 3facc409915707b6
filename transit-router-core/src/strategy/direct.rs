use crate::model::graph::{Edge, EdgeKind};
use crate::model::unit::Cost;
use crate::strategy::Strategy;

/// Like `no_transfer`, forbids transfers outright; distinguished by a steep (but
/// not `no_transfer`-grade) transfer edge cost and a shallower walk-time multiplier.
pub struct Direct;

impl Strategy for Direct {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn edge_cost(&self, edge: &Edge, _transfers_so_far: u32) -> Cost {
        match edge.kind {
            EdgeKind::Transfer => Cost::new(999_999),
            EdgeKind::Walk => Cost::new((edge.cost_time.as_f64() * 10.0).round() as u64),
            EdgeKind::Ride => Cost::new(edge.cost_time.as_f64().round() as u64),
        }
    }

    fn max_transfers(&self) -> u32 {
        // hard-capped at zero, same as `no_transfer`: on a graph where every path
        // crosses at least one transfer, `direct` is absent just like `no_transfer`
        // (scenario S2). the steep transfer cost still distinguishes it from
        // `no_transfer` wherever candidate generation or tie-breaking touches a
        // transfer edge before it is filtered out.
        0
    }

    fn max_explored_nodes(&self) -> usize {
        5_000
    }
}
