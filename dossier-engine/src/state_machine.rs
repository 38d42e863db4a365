//! Per-type SAR lifecycle tracking.
//!
//! Terminal transitions are write-once: `mark_complete` on an already
//! terminal type is a `StateError`, never a silent overwrite. Iteration
//! history is append-only.

use std::collections::BTreeMap;

use chrono::Utc;
use dossier_core::errors::StateError;
use dossier_core::models::{
    AssessmentResult, CompletionReason, SarIterationState, SarPhase, SarTypeState,
};
use dossier_core::types::InformationType;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct InvestigationStateMachine {
    states: BTreeMap<InformationType, SarTypeState>,
}

impl InvestigationStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from checkpointed state.
    pub fn from_states(states: BTreeMap<InformationType, SarTypeState>) -> Self {
        Self { states }
    }

    /// Register a type before its first iteration. Re-initializing a
    /// type that already has state is a no-op.
    pub fn initialize_type(&mut self, info_type: InformationType) {
        self.states
            .entry(info_type)
            .or_insert_with(|| SarTypeState::new(info_type));
    }

    pub fn state(&self, info_type: InformationType) -> Option<&SarTypeState> {
        self.states.get(&info_type)
    }

    fn state_mut(&mut self, info_type: InformationType) -> Result<&mut SarTypeState, StateError> {
        self.states
            .get_mut(&info_type)
            .ok_or(StateError::TypeNotInitialized { info_type })
    }

    /// Begin the next iteration and return its number.
    pub fn start_iteration(&mut self, info_type: InformationType) -> Result<u32, StateError> {
        let state = self.state_mut(info_type)?;
        if state.is_complete() {
            return Err(StateError::AlreadyComplete { info_type });
        }
        if state.current_iteration.is_some() {
            return Err(StateError::IterationInFlight { info_type });
        }
        let iteration_number = state.iteration_count() + 1;
        state.current_iteration = Some(SarIterationState {
            iteration_number,
            started_at: Some(Utc::now()),
            ..Default::default()
        });
        state.current_phase = SarPhase::Search;
        debug!(info_type = %info_type, iteration = iteration_number, "iteration started");
        Ok(iteration_number)
    }

    pub fn set_phase(
        &mut self,
        info_type: InformationType,
        phase: SarPhase,
    ) -> Result<(), StateError> {
        self.state_mut(info_type)?.current_phase = phase;
        Ok(())
    }

    /// Fold one iteration's results into history and clear the in-flight
    /// slot.
    pub fn complete_iteration(
        &mut self,
        info_type: InformationType,
        assessment: &AssessmentResult,
        queries_generated: usize,
        queries_executed: usize,
        queries_successful: usize,
    ) -> Result<(), StateError> {
        let state = self.state_mut(info_type)?;
        let mut iteration = state
            .current_iteration
            .take()
            .ok_or(StateError::NoActiveIteration { info_type })?;
        iteration.queries_generated = queries_generated;
        iteration.queries_executed = queries_executed;
        iteration.queries_successful = queries_successful;
        iteration.results_found = queries_successful;
        iteration.facts_extracted = assessment.facts.len();
        iteration.new_facts = assessment.new_fact_count;
        iteration.confidence_score = assessment.overall_confidence;
        iteration.info_gain_rate = assessment.info_gain_rate;
        iteration.gaps = assessment.gaps.clone();
        iteration.completed_at = Some(Utc::now());
        state.iterations.push(iteration);
        Ok(())
    }

    /// Terminal transition. Write-once: calling this on a terminal type
    /// fails with `AlreadyComplete`.
    pub fn mark_complete(
        &mut self,
        info_type: InformationType,
        reason: CompletionReason,
        final_confidence: f64,
    ) -> Result<(), StateError> {
        let state = self.state_mut(info_type)?;
        if state.is_complete() {
            return Err(StateError::AlreadyComplete { info_type });
        }
        state.current_iteration = None;
        state.completion_reason = Some(reason.clone());
        state.final_confidence = Some(final_confidence);
        state.completed_at = Some(Utc::now());
        info!(
            info_type = %info_type,
            reason = ?reason,
            confidence = final_confidence,
            iterations = state.iteration_count(),
            "type loop terminal"
        );
        Ok(())
    }

    /// Snapshot of all per-type states, for checkpointing.
    pub fn snapshot(&self) -> BTreeMap<InformationType, SarTypeState> {
        self.states.clone()
    }

    /// (type, terminal?, latest confidence) for every tracked type.
    pub fn summary(&self) -> Vec<(InformationType, bool, f64)> {
        self.states
            .values()
            .map(|s| {
                (
                    s.info_type,
                    s.is_complete(),
                    s.final_confidence.unwrap_or_else(|| s.latest_confidence()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::models::ConfidenceFactors;

    fn assessment(info_type: InformationType, iteration: u32) -> AssessmentResult {
        AssessmentResult {
            info_type,
            iteration_number: iteration,
            facts: Vec::new(),
            new_fact_count: 0,
            total_fact_count: 0,
            factors: ConfidenceFactors::default(),
            overall_confidence: 0.5,
            gaps: Vec::new(),
            info_gain_rate: 0.0,
            discovered_entities: Vec::new(),
            inconsistencies: Vec::new(),
            should_continue: false,
        }
    }

    #[test]
    fn uninitialized_type_errors() {
        let mut machine = InvestigationStateMachine::new();
        let err = machine.start_iteration(InformationType::Identity).unwrap_err();
        assert!(matches!(err, StateError::TypeNotInitialized { .. }));
    }

    #[test]
    fn double_start_without_completion_errors() {
        let mut machine = InvestigationStateMachine::new();
        machine.initialize_type(InformationType::Identity);
        assert_eq!(machine.start_iteration(InformationType::Identity).unwrap(), 1);
        let err = machine.start_iteration(InformationType::Identity).unwrap_err();
        assert!(matches!(err, StateError::IterationInFlight { .. }));
    }

    #[test]
    fn iteration_numbers_are_sequential() {
        let mut machine = InvestigationStateMachine::new();
        machine.initialize_type(InformationType::Identity);
        for expected in 1..=3 {
            let n = machine.start_iteration(InformationType::Identity).unwrap();
            assert_eq!(n, expected);
            machine
                .complete_iteration(
                    InformationType::Identity,
                    &assessment(InformationType::Identity, n),
                    4,
                    4,
                    4,
                )
                .unwrap();
        }
        let state = machine.state(InformationType::Identity).unwrap();
        assert_eq!(state.iteration_count(), 3);
    }

    #[test]
    fn terminal_transition_is_write_once() {
        let mut machine = InvestigationStateMachine::new();
        machine.initialize_type(InformationType::Identity);
        machine
            .mark_complete(InformationType::Identity, CompletionReason::Success, 0.9)
            .unwrap();

        let err = machine
            .mark_complete(InformationType::Identity, CompletionReason::Partial, 0.5)
            .unwrap_err();
        assert!(matches!(err, StateError::AlreadyComplete { .. }));

        // The first terminal state is untouched.
        let state = machine.state(InformationType::Identity).unwrap();
        assert_eq!(state.completion_reason, Some(CompletionReason::Success));
        assert_eq!(state.final_confidence, Some(0.9));
    }

    #[test]
    fn starting_after_terminal_errors() {
        let mut machine = InvestigationStateMachine::new();
        machine.initialize_type(InformationType::Identity);
        machine
            .mark_complete(InformationType::Identity, CompletionReason::Exhausted, 0.4)
            .unwrap();
        let err = machine.start_iteration(InformationType::Identity).unwrap_err();
        assert!(matches!(err, StateError::AlreadyComplete { .. }));
    }

    #[test]
    fn summary_reports_terminal_and_in_flight_confidence() {
        let mut machine = InvestigationStateMachine::new();
        machine.initialize_type(InformationType::Identity);
        machine
            .mark_complete(InformationType::Identity, CompletionReason::Success, 0.9)
            .unwrap();

        machine.initialize_type(InformationType::Employment);
        machine.start_iteration(InformationType::Employment).unwrap();
        machine
            .complete_iteration(
                InformationType::Employment,
                &assessment(InformationType::Employment, 1),
                4,
                4,
                4,
            )
            .unwrap();

        let summary = machine.summary();
        assert_eq!(summary.len(), 2);
        assert!(summary.contains(&(InformationType::Identity, true, 0.9)));
        // In-flight types report their latest iteration's score.
        assert!(summary.contains(&(InformationType::Employment, false, 0.5)));
    }
}
