use std::cmp::Reverse;
use std::collections::HashSet;

use priority_queue::PriorityQueue;

use crate::algorithm::search::backtrack::backtrack;
use crate::algorithm::search::heuristic::heuristic;
use crate::algorithm::search::search_error::SearchError;
use crate::algorithm::search::search_state::{RawRoute, SearchState};
use crate::map::BoardingCandidate;
use crate::model::graph::{Edge, EdgeKind, GraphSnapshot, NodeId};
use crate::model::stop::StopId;
use crate::model::unit::{Cost, Seconds, WALKING_SPEED_MPS};
use crate::strategy::Strategy;

/// costs at or above this are treated as an unreachable branch rather than a
/// legitimately expensive one; `no_transfer`'s 999_999_999 transfer sentinel stays
/// well under it.
const SEARCH_COST_CEILING: u64 = 10_000_000_000;

/// A* best-first search over `(stop, route)` nodes, generic over [`Strategy`].
///
/// Returns `Ok(None)` for `NoPath` (open set exhausted, or the exploration budget was
/// reached) and `Err` only for a corrupt graph snapshot, never for an unreachable
/// destination, which is an expected outcome, not a failure.
pub fn search(
    snapshot: &GraphSnapshot,
    origins: &[BoardingCandidate],
    destination_stops: &HashSet<StopId>,
    goal_coord: (f64, f64),
    strategy: &dyn Strategy,
) -> Result<Option<RawRoute>, SearchError> {
    let n = snapshot.n_nodes();
    let mut state: Vec<SearchState> = vec![SearchState::unvisited(); n];
    let mut open: PriorityQueue<NodeId, Reverse<(Cost, Cost, NodeId)>> = PriorityQueue::new();

    for candidate in origins {
        let node = snapshot.get_node(candidate.node_id)?;
        let virtual_walk = Edge::new(
            candidate.node_id,
            candidate.node_id,
            EdgeKind::Walk,
            Seconds::new(candidate.walk_distance.as_f64() / WALKING_SPEED_MPS),
            candidate.walk_distance,
        );
        let g = strategy.edge_cost(&virtual_walk, 0);
        let slot = &mut state[candidate.node_id.0];
        if g < slot.g {
            slot.g = g;
            slot.parent = None;
            slot.transfers = 0;
            let h = heuristic(node.coord(), goal_coord);
            open.push(candidate.node_id, Reverse((g + h, h, candidate.node_id)));
        }
    }

    let mut expanded_nodes: usize = 0;

    while let Some((current_id, _)) = open.pop() {
        let current = &mut state[current_id.0];
        if current.closed {
            continue;
        }
        current.closed = true;
        expanded_nodes += 1;

        let current_node = snapshot.get_node(current_id)?;
        if destination_stops.contains(&current_node.stop_id) {
            log::debug!(
                "{} search reached destination after expanding {} nodes",
                strategy.name(),
                expanded_nodes
            );
            return Ok(Some(backtrack(&state, current_id, expanded_nodes)));
        }

        if expanded_nodes >= strategy.max_explored_nodes() {
            log::debug!(
                "{} search exhausted exploration budget ({} nodes)",
                strategy.name(),
                expanded_nodes
            );
            return Ok(None);
        }

        let current_g = state[current_id.0].g;
        let current_transfers = state[current_id.0].transfers;

        for edge in snapshot.outgoing(current_id)? {
            snapshot.get_node(edge.to_node)?;

            let edge_cost = strategy.edge_cost(edge, current_transfers);
            if edge_cost.0 >= SEARCH_COST_CEILING {
                continue;
            }

            let new_transfers = current_transfers + u32::from(edge.kind == EdgeKind::Transfer);
            if new_transfers > strategy.max_transfers() || strategy.should_stop(new_transfers) {
                continue;
            }

            let tentative_g = current_g + edge_cost;
            let successor = &mut state[edge.to_node.0];
            if tentative_g < successor.g {
                successor.g = tentative_g;
                successor.parent = Some((current_id, *edge));
                successor.transfers = new_transfers;

                let successor_node = snapshot.get_node(edge.to_node)?;
                let h = heuristic(successor_node.coord(), goal_coord);
                open.push(edge.to_node, Reverse((tentative_g + h, h, edge.to_node)));
            }
        }
    }

    Ok(None)
}
