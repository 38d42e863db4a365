use serde::{Deserialize, Serialize};

use super::defaults;

/// Query planning and refinement limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Cap on total first-iteration queries for one type.
    pub max_queries_per_iteration: usize,
    /// Cap on refinement queries generated per gap.
    pub max_queries_per_gap: usize,
    /// Cap on total refinement queries per iteration.
    pub max_total_queries: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_queries_per_iteration: defaults::DEFAULT_MAX_QUERIES_PER_ITERATION,
            max_queries_per_gap: defaults::DEFAULT_MAX_QUERIES_PER_GAP,
            max_total_queries: defaults::DEFAULT_MAX_TOTAL_QUERIES,
        }
    }
}
