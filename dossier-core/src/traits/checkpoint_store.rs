use async_trait::async_trait;

use crate::errors::CheckpointError;
use crate::models::checkpoint::CheckpointData;

/// Pluggable durable storage for checkpoints.
///
/// Implementations are dumb stores: the one-ACTIVE-per-investigation
/// invariant is enforced by the manager, which serializes its
/// supersede-and-save sequence around these calls.
#[async_trait]
pub trait ICheckpointStore: Send + Sync {
    async fn save(&self, checkpoint: &CheckpointData) -> Result<(), CheckpointError>;

    async fn load(&self, checkpoint_id: &str) -> Result<Option<CheckpointData>, CheckpointError>;

    /// Newest non-superseded checkpoint for an investigation.
    async fn load_latest(
        &self,
        investigation_id: &str,
    ) -> Result<Option<CheckpointData>, CheckpointError>;

    /// All checkpoints for an investigation, newest first.
    async fn list_checkpoints(
        &self,
        investigation_id: &str,
    ) -> Result<Vec<CheckpointData>, CheckpointError>;

    async fn delete(&self, checkpoint_id: &str) -> Result<(), CheckpointError>;

    async fn mark_superseded(&self, checkpoint_id: &str) -> Result<(), CheckpointError>;
}
