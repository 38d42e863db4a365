use serde::{Deserialize, Serialize};

use super::defaults;

/// Loop-level orchestration behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Isolate a type's failure and keep going (true) or abort the whole
    /// investigation on first type error (false).
    pub continue_on_type_error: bool,
    /// Types processed at once. Stays 1 unless knowledge-base commits are
    /// externally serialized; see the concurrency notes on KnowledgeBase.
    pub max_concurrent_types: usize,
    /// Bound of the progress event channel.
    pub progress_channel_capacity: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            continue_on_type_error: defaults::DEFAULT_CONTINUE_ON_TYPE_ERROR,
            max_concurrent_types: defaults::DEFAULT_MAX_CONCURRENT_TYPES,
            progress_channel_capacity: defaults::DEFAULT_PROGRESS_CHANNEL_CAPACITY,
        }
    }
}
