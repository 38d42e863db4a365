use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds driving the per-type continue/stop decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IterationConfig {
    /// Hard iteration budget per information type.
    pub max_iterations_per_type: u32,
    /// Base confidence threshold for declaring a type done.
    pub confidence_threshold: f64,
    /// Added to the threshold for foundation types, which gate every later
    /// phase, so they must clear a higher bar.
    pub foundation_threshold_boost: f64,
    /// Minimum new-facts-per-query below which iterating stops paying off.
    pub min_gain_threshold: f64,
}

impl IterationConfig {
    /// The threshold a given type must reach.
    pub fn effective_threshold(&self, foundation: bool) -> f64 {
        if foundation {
            (self.confidence_threshold + self.foundation_threshold_boost).min(1.0)
        } else {
            self.confidence_threshold
        }
    }
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            max_iterations_per_type: defaults::DEFAULT_MAX_ITERATIONS_PER_TYPE,
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            foundation_threshold_boost: defaults::DEFAULT_FOUNDATION_THRESHOLD_BOOST,
            min_gain_threshold: defaults::DEFAULT_MIN_GAIN_THRESHOLD,
        }
    }
}
