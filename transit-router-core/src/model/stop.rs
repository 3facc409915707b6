use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque stop identifier, as assigned by the upstream transit-feed ingestion pipeline.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, PartialOrd, Ord)]
pub struct StopId(pub String);

impl Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StopId {
    fn from(value: &str) -> Self {
        StopId(value.to_string())
    }
}

/// A transit stop. Immutable after the graph snapshot is loaded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stop {
    pub stop_id: StopId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Stop {
    pub fn new(stop_id: impl Into<String>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            stop_id: StopId(stop_id.into()),
            name: name.into(),
            lat,
            lon,
        }
    }
}
