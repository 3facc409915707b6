use crate::model::graph::node_id::NodeId;
use crate::model::unit::{Meters, Seconds};
use serde::{Deserialize, Serialize};

/// The kind of transition an [`Edge`] represents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EdgeKind {
    /// Same route, adjacent served stops.
    Ride,
    /// Same stop, different route.
    Transfer,
    /// Different stops, close enough to cover on foot.
    Walk,
}

/// A directed transition between two [`NodeId`]s, carrying the three scalar
/// costs strategies weigh differently.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub from_node: NodeId,
    pub to_node: NodeId,
    pub kind: EdgeKind,
    pub cost_time: Seconds,
    pub cost_walk: Meters,
    pub cost_transfer: u8,
}

impl Edge {
    pub fn new(
        from_node: NodeId,
        to_node: NodeId,
        kind: EdgeKind,
        cost_time: Seconds,
        cost_walk: Meters,
    ) -> Self {
        let cost_transfer = match kind {
            EdgeKind::Transfer => 1,
            _ => 0,
        };
        Self {
            from_node,
            to_node,
            kind,
            cost_time,
            cost_walk,
            cost_transfer,
        }
    }
}
