use crate::model::graph::NodeId;
use crate::model::unit::Meters;

/// One node offered as a boarding (origin side) or alighting (destination side)
/// candidate, annotated with the straight-line walk from/to the query coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoardingCandidate {
    pub node_id: NodeId,
    pub walk_distance: Meters,
}
