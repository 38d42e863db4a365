use crate::types::InformationType;

/// Orchestrator-level failures.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("query execution failed for {info_type}: {reason}")]
    ExecutionFailed {
        info_type: InformationType,
        reason: String,
    },

    #[error("investigation cancelled")]
    Cancelled,

    #[error("type {info_type} failed and continue_on_type_error is off: {reason}")]
    Aborted {
        info_type: InformationType,
        reason: String,
    },
}
