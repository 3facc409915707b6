use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque transit line identifier.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RouteId(pub String);

impl Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RouteId {
    fn from(value: &str) -> Self {
        RouteId(value.to_string())
    }
}

/// Transit mode a [`Route`] operates under. Determines spatial-index eligibility radius:
/// BRT and TER stops get the wider "mass-transit" radius.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransitMode {
    Bus,
    Brt,
    Ter,
    Ferry,
    Tram,
}

impl TransitMode {
    /// mass-transit stops (BRT, TER) get a wider walking-candidate radius than regular stops.
    pub fn is_mass_transit(&self) -> bool {
        matches!(self, TransitMode::Brt | TransitMode::Ter)
    }
}

impl Display for TransitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransitMode::Bus => "BUS",
            TransitMode::Brt => "BRT",
            TransitMode::Ter => "TER",
            TransitMode::Ferry => "FERRY",
            TransitMode::Tram => "TRAM",
        };
        write!(f, "{}", s)
    }
}

/// A transit line. Immutable after the graph snapshot is loaded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub route_id: RouteId,
    pub name: String,
    pub mode: TransitMode,
    pub agency: String,
}
