use derive_more::{Add, Div, Mul, Neg, Sub, Sum};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A distance in metres. Used for `cost_walk` on edges and for walk-step distances.
#[derive(
    Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
    Add, Sub, Mul, Div, Sum, Neg,
)]
pub struct Meters(pub OrderedFloat<f64>);

impl Meters {
    pub const ZERO: Meters = Meters(OrderedFloat(0.0));

    pub fn new(value: f64) -> Meters {
        Meters(OrderedFloat(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0 .0
    }
}

impl Display for Meters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Meters {
    fn from(value: f64) -> Self {
        Meters::new(value)
    }
}
