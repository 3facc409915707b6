use serde::{Deserialize, Serialize};

use crate::model::route::{RouteId, TransitMode};
use crate::model::stop::StopId;

/// One stop in a collapsed RIDE step's intermediate-stop list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StopRef {
    pub id: StopId,
    pub name: String,
}

/// A single user-visible leg of a journey, serialised with a `type` tag.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Step {
    Walk {
        from_stop: StopId,
        to_stop: StopId,
        from_stop_name: String,
        to_stop_name: String,
        duration_seconds: u32,
        distance_meters: u32,
    },
    Ride {
        from_stop: StopId,
        to_stop: StopId,
        from_stop_name: String,
        to_stop_name: String,
        route: RouteId,
        route_name: String,
        mode: TransitMode,
        duration_seconds: u32,
        num_stops: u32,
        stops: Vec<StopRef>,
    },
    Transfer {
        from_stop: StopId,
        to_stop: StopId,
        from_stop_name: String,
        to_stop_name: String,
        duration_seconds: u32,
    },
}

impl Step {
    pub fn duration_seconds(&self) -> u32 {
        match self {
            Step::Walk {
                duration_seconds, ..
            } => *duration_seconds,
            Step::Ride {
                duration_seconds, ..
            } => *duration_seconds,
            Step::Transfer {
                duration_seconds, ..
            } => *duration_seconds,
        }
    }

    pub fn to_stop(&self) -> &StopId {
        match self {
            Step::Walk { to_stop, .. } => to_stop,
            Step::Ride { to_stop, .. } => to_stop,
            Step::Transfer { to_stop, .. } => to_stop,
        }
    }

    pub fn from_stop(&self) -> &StopId {
        match self {
            Step::Walk { from_stop, .. } => from_stop,
            Step::Ride { from_stop, .. } => from_stop,
            Step::Transfer { from_stop, .. } => from_stop,
        }
    }
}

/// A complete journey for one strategy: the assembled steps plus the
/// aggregate totals the `RouteResult` DTO reports to the caller.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Path {
    pub strategy_name: String,
    pub duration_seconds: u32,
    pub walk_distance_meters: u32,
    pub transfers: u8,
    pub steps: Vec<Step>,
}
