use derive_more::{Add, Div, Mul, Neg, Sub, Sum};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A duration in seconds. Used for `cost_time` on edges and for step/aggregate durations.
#[derive(
    Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
    Add, Sub, Mul, Div, Sum, Neg,
)]
pub struct Seconds(pub OrderedFloat<f64>);

impl Seconds {
    pub const ZERO: Seconds = Seconds(OrderedFloat(0.0));

    pub fn new(value: f64) -> Seconds {
        Seconds(OrderedFloat(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0 .0
    }
}

impl Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Seconds {
    fn from(value: f64) -> Self {
        Seconds::new(value)
    }
}
