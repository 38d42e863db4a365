//! Durable checkpoint snapshot. This field set is the wire contract:
//! JSON-compatible primitives only (strings, numbers, booleans,
//! string-keyed maps, ISO-8601 timestamps).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::knowledge::KnowledgeBase;
use crate::types::{InformationType, InvestigationPhase};

use super::state::SarTypeState;

/// Lifecycle of a stored checkpoint. At most one ACTIVE checkpoint per
/// investigation unless a branch exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointStatus {
    Active,
    Superseded,
    Restored,
    Expired,
}

/// How to reconstruct state when resuming from a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStrategy {
    /// Restore active and completed types unchanged.
    Continue,
    /// Drop active types, keep completed, restart the current phase.
    RestartPhase,
    /// Advance to the next phase; stays put on the terminal phase.
    SkipToNext,
}

/// Running totals carried through checkpoints.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CheckpointCounters {
    pub total_queries_executed: usize,
    pub total_facts_extracted: usize,
    pub total_iterations: usize,
}

/// A durable snapshot of investigation progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointData {
    pub checkpoint_id: String,
    pub investigation_id: String,
    /// Set when this checkpoint was branched from another.
    pub parent_checkpoint_id: Option<String>,
    pub current_phase: InvestigationPhase,
    pub active_types: Vec<InformationType>,
    pub completed_types: Vec<InformationType>,
    /// Per-type SAR state, keyed deterministically.
    pub type_states: BTreeMap<InformationType, SarTypeState>,
    pub knowledge: KnowledgeBase,
    pub counters: CheckpointCounters,
    pub confidence_map: BTreeMap<InformationType, f64>,
    /// Why this checkpoint was taken ("periodic", "cancellation", ...).
    pub reason: String,
    pub status: CheckpointStatus,
    pub requires_review: bool,
    pub review_notes: Option<String>,
    /// blake3 hex digest of the snapshot fields, set on save.
    pub content_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CheckpointData {
    /// A fresh ACTIVE checkpoint with a new id.
    pub fn new(investigation_id: impl Into<String>, reason: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            checkpoint_id: Uuid::new_v4().to_string(),
            investigation_id: investigation_id.into(),
            parent_checkpoint_id: None,
            current_phase: InvestigationPhase::Foundation,
            active_types: Vec::new(),
            completed_types: Vec::new(),
            type_states: BTreeMap::new(),
            knowledge: KnowledgeBase::default(),
            counters: CheckpointCounters::default(),
            confidence_map: BTreeMap::new(),
            reason: reason.into(),
            status: CheckpointStatus::Active,
            requires_review: false,
            review_notes: None,
            content_hash: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// blake3 hash over the snapshot content, excluding the hash field
    /// itself and the mutable status/review metadata.
    pub fn compute_content_hash(&self) -> crate::errors::DossierResult<String> {
        #[derive(Serialize)]
        struct Hashed<'a> {
            investigation_id: &'a str,
            current_phase: InvestigationPhase,
            active_types: &'a [InformationType],
            completed_types: &'a [InformationType],
            type_states: &'a BTreeMap<InformationType, SarTypeState>,
            knowledge: &'a KnowledgeBase,
            counters: &'a CheckpointCounters,
            confidence_map: &'a BTreeMap<InformationType, f64>,
        }
        let serialized = serde_json::to_string(&Hashed {
            investigation_id: &self.investigation_id,
            current_phase: self.current_phase,
            active_types: &self.active_types,
            completed_types: &self.completed_types,
            type_states: &self.type_states,
            knowledge: &self.knowledge,
            counters: &self.counters,
            confidence_map: &self.confidence_map,
        })?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }
}
