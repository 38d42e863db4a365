//! # dossier-core
//!
//! Foundation crate for the Dossier background-investigation engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod knowledge;
pub mod models;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{DossierError, DossierResult};
pub use knowledge::KnowledgeBase;
pub use types::{Confidence, InformationType, InvestigationPhase, Locale, ServiceTier};
