//! # dossier-engine
//!
//! The investigation driver. `TypeManager` schedules information types
//! through the fixed phase order under the dependency DAG and service
//! tier; `InvestigationStateMachine` tracks per-type SAR state with
//! write-once terminal transitions; `IterationController` owns the
//! continue/stop decision; `InvestigationOrchestrator` runs the whole
//! loop against the pluggable executor, compliance, and checkpoint seams.

pub mod controller;
pub mod orchestrator;
pub mod progress;
pub mod state_machine;
pub mod type_manager;

pub use controller::{Decision, IterationController};
pub use orchestrator::InvestigationOrchestrator;
pub use progress::ProgressReporter;
pub use state_machine::InvestigationStateMachine;
pub use type_manager::{TypeManager, TypeSchedule};
