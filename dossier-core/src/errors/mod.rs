//! Per-subsystem error enums aggregated into one top-level error.

pub mod checkpoint_error;
pub mod orchestrator_error;
pub mod state_error;

pub use checkpoint_error::CheckpointError;
pub use orchestrator_error::OrchestratorError;
pub use state_error::StateError;

/// Top-level error for the Dossier engine.
#[derive(Debug, thiserror::Error)]
pub enum DossierError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DossierResult<T> = Result<T, DossierError>;
