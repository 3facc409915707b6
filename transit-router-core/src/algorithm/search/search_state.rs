use crate::model::graph::{Edge, NodeId};
use crate::model::unit::Cost;

/// Per-node search bookkeeping for one A* run: best-known `g`, a parent pointer for
/// backtracking, and the transfer count along the best-known path to this node.
/// Lives for the duration of one search.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub g: Cost,
    pub parent: Option<(NodeId, Edge)>,
    pub transfers: u32,
    pub closed: bool,
}

impl SearchState {
    pub fn unvisited() -> Self {
        Self {
            g: Cost::INFINITY,
            parent: None,
            transfers: 0,
            closed: false,
        }
    }
}

/// The raw result of one [`super::a_star`] run before [`crate::assemble`] turns it
/// into user-visible steps: the node/edge sequence and aggregate search-internal stats.
#[derive(Clone, Debug)]
pub struct RawRoute {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
    pub total_cost: Cost,
    pub transfers: u32,
    pub expanded_nodes: usize,
}
