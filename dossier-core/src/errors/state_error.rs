use crate::types::InformationType;

/// State-machine contract violations. These fail loud: a double terminal
/// transition is a bug in the caller, not a retryable condition.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("type {info_type} was never initialized")]
    TypeNotInitialized { info_type: InformationType },

    #[error("type {info_type} is already terminal; mark_complete called twice")]
    AlreadyComplete { info_type: InformationType },

    #[error("no iteration in flight for type {info_type}")]
    NoActiveIteration { info_type: InformationType },

    #[error("iteration already in flight for type {info_type}")]
    IterationInFlight { info_type: InformationType },
}
