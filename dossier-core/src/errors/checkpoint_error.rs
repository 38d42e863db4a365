/// Checkpoint subsystem errors. Not-found and invalid-strategy surface to
/// the caller explicitly; they are never silently defaulted.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("checkpoint {checkpoint_id} not found")]
    NotFound { checkpoint_id: String },

    #[error("no checkpoint exists for investigation {investigation_id}")]
    NoneForInvestigation { investigation_id: String },

    #[error("checkpoint {checkpoint_id} failed integrity verification")]
    IntegrityMismatch { checkpoint_id: String },

    #[error("branch must use a new investigation id, got the source's own {investigation_id}")]
    BranchNeedsNewInvestigation { investigation_id: String },

    #[error("storage operation failed: {reason}")]
    StorageFailed { reason: String },

    #[error("checkpoint serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
