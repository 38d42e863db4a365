use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InformationType;

use super::state::SarPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressEventKind {
    InvestigationStarted,
    TypeStarted,
    IterationStarted,
    QueriesDispatched,
    AssessmentComplete,
    TypeCompleted,
    TypeFailed,
    CheckpointSaved,
    InvestigationCompleted,
}

/// Observational progress event. Delivered on a bounded channel to a
/// separate observer task; never gates control flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub event_type: ProgressEventKind,
    pub info_type: Option<InformationType>,
    pub phase: Option<SarPhase>,
    pub iteration_number: Option<u32>,
    pub message: String,
    /// Rough fraction of the investigation finished, in [0.0, 100.0].
    pub progress_percent: f64,
    pub timestamp: DateTime<Utc>,
}

impl ProgressEvent {
    pub fn new(event_type: ProgressEventKind, message: impl Into<String>) -> Self {
        Self {
            event_type,
            info_type: None,
            phase: None,
            iteration_number: None,
            message: message.into(),
            progress_percent: 0.0,
            timestamp: Utc::now(),
        }
    }

    pub fn for_type(mut self, info_type: InformationType) -> Self {
        self.info_type = Some(info_type);
        self
    }

    pub fn at_phase(mut self, phase: SarPhase, iteration: u32) -> Self {
        self.phase = Some(phase);
        self.iteration_number = Some(iteration);
        self
    }

    pub fn percent(mut self, percent: f64) -> Self {
        self.progress_percent = percent.clamp(0.0, 100.0);
        self
    }
}
