//! The continue/stop decision for one type's SAR loop.
//!
//! Sole authority on termination; the assessor's `should_continue` flag
//! is advisory and never consulted here. Checks run in fixed order:
//! budget, threshold, diminishing returns, then gap exhaustion.

use dossier_core::config::IterationConfig;
use dossier_core::models::{AssessmentResult, CompletionReason};
use dossier_core::types::InformationType;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Continue,
    Stop(CompletionReason),
}

#[derive(Debug, Clone, Default)]
pub struct IterationController {
    config: IterationConfig,
}

impl IterationController {
    pub fn new(config: IterationConfig) -> Self {
        Self { config }
    }

    /// Decide after `completed_iterations` iterations have run, the last
    /// of which produced `assessment`.
    pub fn decide(
        &self,
        info_type: InformationType,
        completed_iterations: u32,
        assessment: &AssessmentResult,
    ) -> Decision {
        let threshold = self.config.effective_threshold(info_type.is_foundation());

        let decision = if completed_iterations >= self.config.max_iterations_per_type {
            Decision::Stop(CompletionReason::Exhausted)
        } else if assessment.overall_confidence >= threshold {
            Decision::Stop(CompletionReason::Success)
        } else if completed_iterations > 1
            && assessment.info_gain_rate < self.config.min_gain_threshold
        {
            Decision::Stop(CompletionReason::NoGain)
        } else if !assessment.gaps.iter().any(|g| g.can_query) {
            Decision::Stop(CompletionReason::Partial)
        } else {
            Decision::Continue
        };

        debug!(
            info_type = %info_type,
            iterations = completed_iterations,
            confidence = assessment.overall_confidence,
            threshold,
            gain = assessment.info_gain_rate,
            decision = ?decision,
            "iteration decision"
        );
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::models::{ConfidenceFactors, Gap, GapKind, GapPriority};

    fn assessment(confidence: f64, gain: f64, gaps: Vec<Gap>) -> AssessmentResult {
        AssessmentResult {
            info_type: InformationType::Criminal,
            iteration_number: 1,
            facts: Vec::new(),
            new_fact_count: 0,
            total_fact_count: 0,
            factors: ConfidenceFactors::default(),
            overall_confidence: confidence,
            gaps,
            info_gain_rate: gain,
            discovered_entities: Vec::new(),
            inconsistencies: Vec::new(),
            should_continue: true,
        }
    }

    fn queryable_gap() -> Gap {
        Gap::new(
            GapKind::NoRecordsFound,
            InformationType::Criminal,
            GapPriority::Medium,
            "nothing found",
        )
    }

    #[test]
    fn budget_exhaustion_beats_everything() {
        let controller = IterationController::default();
        // Confidence above threshold, but the budget is spent: Exhausted
        // wins because the check order is fixed.
        let decision = controller.decide(
            InformationType::Criminal,
            4,
            &assessment(0.95, 1.0, vec![queryable_gap()]),
        );
        assert_eq!(decision, Decision::Stop(CompletionReason::Exhausted));
    }

    #[test]
    fn threshold_met_stops_with_success() {
        let controller = IterationController::default();
        let decision = controller.decide(
            InformationType::Criminal,
            1,
            &assessment(0.85, 1.0, vec![queryable_gap()]),
        );
        assert_eq!(decision, Decision::Stop(CompletionReason::Success));
    }

    #[test]
    fn foundation_types_need_the_boosted_threshold() {
        let controller = IterationController::default();
        // 0.82 clears the base 0.80 but not the boosted 0.85.
        let decision = controller.decide(
            InformationType::Identity,
            1,
            &assessment(0.82, 1.0, vec![queryable_gap()]),
        );
        assert_eq!(decision, Decision::Continue);
    }

    #[test]
    fn low_gain_never_stops_the_first_iteration() {
        let controller = IterationController::default();
        let decision = controller.decide(
            InformationType::Criminal,
            1,
            &assessment(0.5, 0.0, vec![queryable_gap()]),
        );
        assert_eq!(decision, Decision::Continue);
    }

    #[test]
    fn low_gain_stops_from_the_second_iteration() {
        let controller = IterationController::default();
        let decision = controller.decide(
            InformationType::Criminal,
            2,
            &assessment(0.5, 0.1, vec![queryable_gap()]),
        );
        assert_eq!(decision, Decision::Stop(CompletionReason::NoGain));
    }

    #[test]
    fn no_queryable_gaps_ends_partial() {
        let controller = IterationController::default();
        let gap = queryable_gap().non_queryable();
        let decision =
            controller.decide(InformationType::Criminal, 1, &assessment(0.5, 1.0, vec![gap]));
        assert_eq!(decision, Decision::Stop(CompletionReason::Partial));
    }
}
