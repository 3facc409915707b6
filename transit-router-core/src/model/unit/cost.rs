use serde::{Deserialize, Serialize};
use std::{fmt::Display, ops::Add};

/// The scalar cost produced by a [`crate::strategy::Strategy`]'s edge-cost function and
/// accumulated as the `g`/`f` score during search. Always a nonnegative integer.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(pub u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const INFINITY: Cost = Cost(u64::MAX);

    pub fn new(value: u64) -> Cost {
        Cost(value)
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Self) -> Self::Output {
        Cost(self.0.saturating_add(rhs.0))
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
