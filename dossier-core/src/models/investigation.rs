use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InformationType;

use super::state::CompletionReason;

/// How one type's loop ended, from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TypeOutcome {
    Completed {
        reason: CompletionReason,
        confidence: f64,
        iterations: u32,
    },
    Failed {
        error: String,
    },
    Skipped {
        reason: String,
    },
}

impl TypeOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TypeOutcome::Completed { .. })
    }
}

/// Final report of an investigation run. Always describes every type that
/// was considered, whether it completed, failed, or was skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestigationResult {
    pub investigation_id: String,
    pub outcomes: BTreeMap<InformationType, TypeOutcome>,
    pub completed_count: usize,
    pub failed_count: usize,
    pub skipped_count: usize,
    /// Weighted investigation-level confidence across completed types.
    pub overall_confidence: f64,
    /// The completed type with the lowest confidence, if any completed.
    pub lowest_confidence_type: Option<(InformationType, f64)>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl InvestigationResult {
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
