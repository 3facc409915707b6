use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use transit_router_core::assemble::{Path, Step};

/// A single `route_search` query: two coordinates, lat/lon order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RouteRequest {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl RouteRequest {
    /// `lat ∈ [-90, 90]`, `lon ∈ [-180, 180]`, checked before any cache or graph access.
    pub fn validate(&self) -> Result<(), super::error::AppError> {
        for (lat, lon) in [self.from, self.to] {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                return Err(super::error::AppError::InvalidCoordinates { lat, lon });
            }
        }
        Ok(())
    }
}

/// The wire shape for a single strategy's result. Deliberately narrower than
/// [`Path`]: the strategy name is already the map key under which this sits, so it
/// is dropped rather than duplicated on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RouteResult {
    pub duration_seconds: u32,
    pub walk_distance_meters: u32,
    pub transfers: u8,
    pub steps: Vec<Step>,
}

impl From<Path> for RouteResult {
    fn from(path: Path) -> Self {
        RouteResult {
            duration_seconds: path.duration_seconds,
            walk_distance_meters: path.walk_distance_meters,
            transfers: path.transfers,
            steps: path.steps,
        }
    }
}

/// `{ strategy_name → RouteResult? }`, where a strategy producing `NoPath` is omitted
/// entirely rather than represented as `null`.
pub type RouteResponse = HashMap<String, RouteResult>;
