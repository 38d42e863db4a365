//! Resumption planning: turn a stored checkpoint plus a strategy into
//! the state the orchestrator should restart from.

use std::collections::BTreeMap;

use dossier_core::models::{CheckpointData, ResumeStrategy, SarTypeState};
use dossier_core::types::{InformationType, InvestigationPhase};
use dossier_core::KnowledgeBase;

/// What an investigation should look like after resuming.
#[derive(Debug, Clone)]
pub struct ResumptionPlan {
    pub checkpoint_id: String,
    pub investigation_id: String,
    pub strategy: ResumeStrategy,
    /// The phase the orchestrator restarts in.
    pub resume_phase: InvestigationPhase,
    /// Type states carried forward. Strategies other than `Continue`
    /// drop in-flight types; completed states always survive.
    pub type_states: BTreeMap<InformationType, SarTypeState>,
    pub completed_types: Vec<InformationType>,
    /// Types whose partial state was discarded by the strategy.
    pub dropped_types: Vec<InformationType>,
    pub knowledge: KnowledgeBase,
}

impl ResumptionPlan {
    /// Build a plan from a verified checkpoint.
    pub fn build(checkpoint: &CheckpointData, strategy: ResumeStrategy) -> Self {
        let mut type_states = checkpoint.type_states.clone();
        let mut dropped_types = Vec::new();

        match strategy {
            ResumeStrategy::Continue => {}
            ResumeStrategy::RestartPhase | ResumeStrategy::SkipToNext => {
                // In-flight state is discarded; the type begins its loop
                // fresh when the orchestrator reaches it again.
                type_states.retain(|info_type, state| {
                    if state.is_complete() {
                        true
                    } else {
                        dropped_types.push(*info_type);
                        false
                    }
                });
            }
        }

        let resume_phase = match strategy {
            ResumeStrategy::SkipToNext => checkpoint
                .current_phase
                .next()
                .unwrap_or(checkpoint.current_phase),
            _ => checkpoint.current_phase,
        };

        Self {
            checkpoint_id: checkpoint.checkpoint_id.clone(),
            investigation_id: checkpoint.investigation_id.clone(),
            strategy,
            resume_phase,
            type_states,
            completed_types: checkpoint.completed_types.clone(),
            dropped_types,
            knowledge: checkpoint.knowledge.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::models::CompletionReason;

    fn checkpoint_with_states() -> CheckpointData {
        let mut cp = CheckpointData::new("inv-1", "periodic");
        cp.current_phase = InvestigationPhase::Foundation;

        let mut done = SarTypeState::new(InformationType::Identity);
        done.completion_reason = Some(CompletionReason::Success);
        done.final_confidence = Some(0.9);
        cp.type_states.insert(InformationType::Identity, done);
        cp.completed_types.push(InformationType::Identity);

        let in_flight = SarTypeState::new(InformationType::Employment);
        cp.type_states.insert(InformationType::Employment, in_flight);
        cp.active_types.push(InformationType::Employment);
        cp
    }

    #[test]
    fn continue_keeps_in_flight_state() {
        let plan = ResumptionPlan::build(&checkpoint_with_states(), ResumeStrategy::Continue);
        assert_eq!(plan.resume_phase, InvestigationPhase::Foundation);
        assert_eq!(plan.type_states.len(), 2);
        assert!(plan.dropped_types.is_empty());
    }

    #[test]
    fn restart_phase_drops_in_flight_but_keeps_completed() {
        let plan = ResumptionPlan::build(&checkpoint_with_states(), ResumeStrategy::RestartPhase);
        assert_eq!(plan.resume_phase, InvestigationPhase::Foundation);
        assert!(plan.type_states.contains_key(&InformationType::Identity));
        assert!(!plan.type_states.contains_key(&InformationType::Employment));
        assert_eq!(plan.dropped_types, vec![InformationType::Employment]);
    }

    #[test]
    fn skip_to_next_advances_the_phase() {
        let plan = ResumptionPlan::build(&checkpoint_with_states(), ResumeStrategy::SkipToNext);
        assert_eq!(plan.resume_phase, InvestigationPhase::Records);
    }

    #[test]
    fn skip_to_next_stays_put_on_the_terminal_phase() {
        let mut cp = checkpoint_with_states();
        cp.current_phase = InvestigationPhase::Reconciliation;
        let plan = ResumptionPlan::build(&cp, ResumeStrategy::SkipToNext);
        assert_eq!(plan.resume_phase, InvestigationPhase::Reconciliation);
    }
}
