use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Confidence score clamped to [0.0, 1.0].
///
/// Used for individual facts, per-type iteration scores, and the
/// investigation-level aggregate. Construction clamps, so a `Confidence`
/// can never hold an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Add for Confidence {
    type Output = Confidence;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl Mul<f64> for Confidence {
    type Output = Confidence;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn always_clamped(v in -10.0f64..10.0) {
            let c = Confidence::new(v);
            prop_assert!((0.0..=1.0).contains(&c.value()));
        }
    }

    #[test]
    fn arithmetic_stays_in_range() {
        let c = Confidence::new(0.9) + Confidence::new(0.9);
        assert_eq!(c.value(), 1.0);
        let d = Confidence::new(0.5) * 3.0;
        assert_eq!(d.value(), 1.0);
    }
}
