mod cost;
mod meters;
mod seconds;

pub use cost::Cost;
pub use meters::Meters;
pub use seconds::Seconds;

/// Fixed walking speed used by the heuristic and WALK edge costing.
pub const WALKING_SPEED_MPS: f64 = 1.4;
