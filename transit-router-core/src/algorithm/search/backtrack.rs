use crate::algorithm::search::search_state::{RawRoute, SearchState};
use crate::model::graph::NodeId;

/// Walks parent pointers from `goal` back to the (parentless) origin node and
/// reverses the result into origin-to-goal order.
pub fn backtrack(state: &[SearchState], goal: NodeId, expanded_nodes: usize) -> RawRoute {
    let mut nodes = vec![goal];
    let mut edges = Vec::new();
    let mut current = goal;
    while let Some((parent, edge)) = &state[current.0].parent {
        edges.push(*edge);
        nodes.push(*parent);
        current = *parent;
    }
    nodes.reverse();
    edges.reverse();
    let goal_state = &state[goal.0];
    RawRoute {
        nodes,
        edges,
        total_cost: goal_state.g,
        transfers: goal_state.transfers,
        expanded_nodes,
    }
}
