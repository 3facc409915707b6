use crate::model::graph::Edge;
use crate::model::unit::Cost;
use crate::strategy::Strategy;

/// Minimises clock time; all three edge kinds cost their raw `cost_time`.
pub struct Fast;

impl Strategy for Fast {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn edge_cost(&self, edge: &Edge, _transfers_so_far: u32) -> Cost {
        Cost::new(edge.cost_time.as_f64().round() as u64)
    }

    fn max_transfers(&self) -> u32 {
        3
    }

    fn max_explored_nodes(&self) -> usize {
        10_000
    }
}
