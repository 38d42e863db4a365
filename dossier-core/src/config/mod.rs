//! Typed configuration, one struct per subsystem, defaults in one place.

pub mod checkpoint_config;
pub mod defaults;
pub mod iteration_config;
pub mod orchestrator_config;
pub mod planner_config;

pub use checkpoint_config::CheckpointConfig;
pub use iteration_config::IterationConfig;
pub use orchestrator_config::OrchestratorConfig;
pub use planner_config::PlannerConfig;

use serde::{Deserialize, Serialize};

use crate::models::assessment::FactorWeights;

/// Aggregate configuration for a whole engine instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub planner: PlannerConfig,
    pub iteration: IterationConfig,
    pub checkpoint: CheckpointConfig,
    pub orchestrator: OrchestratorConfig,
    pub weights: FactorWeights,
}
