#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pair of `(x, y)` values in **graph** units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphPoint(pub f64, pub f64);

impl From<(f64, f64)> for GraphPoint {
    fn from((x, y): (f64, f64)) -> GraphPoint {
        GraphPoint(x, y)
    }
}

impl GraphPoint {
    /// Returns the distance of the point from the origin.
    pub fn norm(self) -> f64 {
        self.0.hypot(self.1)
    }
}
