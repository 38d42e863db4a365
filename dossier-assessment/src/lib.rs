//! # dossier-assessment
//!
//! Turns raw provider results into scored knowledge: fact extraction per
//! payload shape, the 5-factor confidence formula, gap heuristics,
//! source-disjoint inconsistency detection, and entity discovery.
//! `ResultAssessor` runs the whole assessment for one iteration;
//! `ConfidenceScorer` exposes the scoring math standalone.

pub mod engine;
pub mod entities;
pub mod extraction;
pub mod factors;
pub mod gaps;
pub mod inconsistency;
pub mod scorer;

pub use engine::ResultAssessor;
pub use scorer::ConfidenceScorer;
