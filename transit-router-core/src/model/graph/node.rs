use crate::model::route::{RouteId, TransitMode};
use crate::model::stop::StopId;
use serde::{Deserialize, Serialize};

/// A `(stop, route)` pair, the atomic vertex of the routing graph. A stop served
/// by *k* routes produces *k* nodes. Stop coordinates, stop name, route name, and
/// mode are denormalised onto the node for hot-path access during search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub stop_id: StopId,
    pub stop_name: String,
    pub lat: f64,
    pub lon: f64,
    pub route_id: RouteId,
    pub route_name: String,
    pub mode: TransitMode,
}

impl Node {
    pub fn coord(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}
