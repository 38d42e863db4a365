//! Identity of "what is being investigated": information types, phases,
//! the static dependency table, service tiers, and the confidence newtype.

pub mod confidence;
pub mod dependency;
pub mod info_type;
pub mod phase;
pub mod tier;

pub use confidence::Confidence;
pub use dependency::{dependency_for, TypeDependency, DEPENDENCY_TABLE};
pub use info_type::InformationType;
pub use phase::InvestigationPhase;
pub use tier::{Locale, ServiceTier};
