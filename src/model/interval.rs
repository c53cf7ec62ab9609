use serde::Serialize;

use crate::model::score::{clip01, in_unit_range};

/// Bounds around an observed score. Wilson bounds are not clipped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// `(score - lower, upper - score)`, the asymmetric error bar of a score.
    pub fn half_widths(&self, score: f64) -> (f64, f64) {
        (score - self.lower, self.upper - score)
    }

    pub fn clamped(&self) -> Self {
        Self {
            lower: clip01(self.lower),
            upper: clip01(self.upper),
        }
    }

    pub fn is_within_unit(&self) -> bool {
        in_unit_range(self.lower) && in_unit_range(self.upper)
    }
}
