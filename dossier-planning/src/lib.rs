//! # dossier-planning
//!
//! Query generation for the SAR loop. `QueryPlanner` builds the first
//! iteration's batch from the knowledge base; `QueryRefiner` builds
//! gap-targeted batches for every iteration after that. Both deduplicate
//! on (provider, check type, params) and cap batch size.

pub mod planner;
pub mod refiner;
pub mod strategies;

mod dedup;

pub use planner::QueryPlanner;
pub use refiner::QueryRefiner;
pub use strategies::{strategy_for, GapStrategy};
