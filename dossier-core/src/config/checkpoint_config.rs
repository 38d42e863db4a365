use serde::{Deserialize, Serialize};

use super::defaults;

/// Checkpoint retention and cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointConfig {
    /// Newest-N retention per investigation. Review-required and ACTIVE
    /// checkpoints never count against deletion.
    pub max_checkpoints_per_investigation: usize,
    /// Run retention cleanup automatically after each save.
    pub auto_cleanup: bool,
    /// Checkpoint after every N completed types.
    pub checkpoint_interval_types: usize,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            max_checkpoints_per_investigation:
                defaults::DEFAULT_MAX_CHECKPOINTS_PER_INVESTIGATION,
            auto_cleanup: defaults::DEFAULT_AUTO_CLEANUP,
            checkpoint_interval_types: defaults::DEFAULT_CHECKPOINT_INTERVAL_TYPES,
        }
    }
}
