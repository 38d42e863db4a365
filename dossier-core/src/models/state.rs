//! Per-type, per-iteration SAR state. The iteration list is append-only
//! history; terminal fields on the type state are write-once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InformationType;

use super::gap::Gap;

/// Where a type currently sits inside its SAR loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SarPhase {
    Search,
    Assess,
    Refine,
}

/// Why a type's loop ended. `Failed` is a first-class outcome distinct
/// from completing with low confidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    /// Confidence reached the effective threshold.
    Success,
    /// Iteration budget exhausted.
    Exhausted,
    /// Information gain fell below the minimum.
    NoGain,
    /// No queryable gaps remain; best available coverage reached.
    Partial,
    /// The type's loop raised an error.
    Failed { error: String },
}

/// Counters for one iteration. Appended to the type's history when the
/// iteration completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SarIterationState {
    pub iteration_number: u32,
    pub queries_generated: usize,
    pub queries_executed: usize,
    pub queries_successful: usize,
    pub results_found: usize,
    pub facts_extracted: usize,
    pub new_facts: usize,
    pub confidence_score: f64,
    pub info_gain_rate: f64,
    pub gaps: Vec<Gap>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Aggregate state for one information type across its whole loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarTypeState {
    pub info_type: InformationType,
    /// Completed iterations, oldest first.
    pub iterations: Vec<SarIterationState>,
    /// The iteration currently in flight, if any.
    pub current_iteration: Option<SarIterationState>,
    pub current_phase: SarPhase,
    /// Write-once: set exactly once when the loop terminates.
    pub completion_reason: Option<CompletionReason>,
    /// Write-once alongside `completion_reason`.
    pub final_confidence: Option<f64>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SarTypeState {
    pub fn new(info_type: InformationType) -> Self {
        Self {
            info_type,
            iterations: Vec::new(),
            current_iteration: None,
            current_phase: SarPhase::Search,
            completion_reason: None,
            final_confidence: None,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completion_reason.is_some()
    }

    /// Number of completed iterations.
    pub fn iteration_count(&self) -> u32 {
        self.iterations.len() as u32
    }

    /// Confidence from the most recent completed iteration, 0.0 before any.
    pub fn latest_confidence(&self) -> f64 {
        self.iterations
            .last()
            .map(|i| i.confidence_score)
            .unwrap_or(0.0)
    }

}
