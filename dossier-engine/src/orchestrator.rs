//! The investigation driver: phases in fixed order, dependency-gated
//! types within each phase, and one SAR loop per type.
//!
//! One type runs at a time. The knowledge base is held by `&mut` through
//! the whole run, so assessment commits are serialized by construction;
//! raising `max_concurrent_types` requires an external commit lock first.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use dossier_assessment::{ConfidenceScorer, ResultAssessor};
use dossier_checkpoint::CheckpointManager;
use dossier_core::config::EngineConfig;
use dossier_core::errors::{DossierResult, OrchestratorError};
use dossier_core::models::{
    CheckpointData, CompletionReason, Fact, Gap, InvestigationResult, ProgressEvent,
    ProgressEventKind, ProviderQuery, SarPhase, SubjectIdentifiers, TypeOutcome,
};
use dossier_core::traits::{ICompliancePolicy, IQueryExecutor};
use dossier_core::types::{Confidence, InformationType, InvestigationPhase, Locale, ServiceTier};
use dossier_core::KnowledgeBase;
use dossier_planning::{QueryPlanner, QueryRefiner};
use tracing::{info, instrument, warn};

use crate::controller::{Decision, IterationController};
use crate::progress::ProgressReporter;
use crate::state_machine::InvestigationStateMachine;
use crate::type_manager::TypeManager;

pub struct InvestigationOrchestrator {
    config: EngineConfig,
    executor: Arc<dyn IQueryExecutor>,
    compliance: Option<Arc<dyn ICompliancePolicy>>,
    checkpoints: Option<Arc<CheckpointManager>>,
    planner: QueryPlanner,
    refiner: QueryRefiner,
    assessor: ResultAssessor,
    controller: IterationController,
    scorer: ConfidenceScorer,
    type_manager: TypeManager,
    progress: ProgressReporter,
    cancel: Arc<AtomicBool>,
}

impl InvestigationOrchestrator {
    pub fn new(config: EngineConfig, executor: Arc<dyn IQueryExecutor>) -> Self {
        Self {
            planner: QueryPlanner::new(config.planner.clone()),
            refiner: QueryRefiner::new(config.planner.clone()),
            assessor: ResultAssessor::new(config.weights, config.iteration.clone()),
            controller: IterationController::new(config.iteration.clone()),
            scorer: ConfidenceScorer::new(config.weights, config.iteration.clone()),
            type_manager: TypeManager::new(),
            progress: ProgressReporter::disabled(),
            cancel: Arc::new(AtomicBool::new(false)),
            compliance: None,
            checkpoints: None,
            config,
            executor,
        }
    }

    pub fn with_compliance(mut self, policy: Arc<dyn ICompliancePolicy>) -> Self {
        self.compliance = Some(policy);
        self
    }

    pub fn with_checkpoints(mut self, manager: Arc<CheckpointManager>) -> Self {
        self.checkpoints = Some(manager);
        self
    }

    pub fn with_progress(mut self, reporter: ProgressReporter) -> Self {
        self.progress = reporter;
        self
    }

    /// Attach a progress channel sized from config and hand back the
    /// receiving end for an observer task.
    pub fn with_progress_channel(
        mut self,
    ) -> (Self, tokio::sync::mpsc::Receiver<ProgressEvent>) {
        let (tx, rx) =
            tokio::sync::mpsc::channel(self.config.orchestrator.progress_channel_capacity);
        self.progress = ProgressReporter::new(tx);
        (self, rx)
    }

    /// Shared flag a caller can flip to request cancellation. Checked
    /// between iterations and between types, never mid-batch.
    pub fn cancellation_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Run a full investigation for one subject.
    #[instrument(skip_all, fields(investigation_id))]
    pub async fn execute_investigation(
        &self,
        investigation_id: &str,
        subject: &SubjectIdentifiers,
        locale: &Locale,
        tier: ServiceTier,
    ) -> DossierResult<InvestigationResult> {
        let started_at = Utc::now();
        let mut knowledge = KnowledgeBase::from_subject(subject);
        let mut machine = InvestigationStateMachine::new();
        let mut outcomes: BTreeMap<InformationType, TypeOutcome> = BTreeMap::new();
        let mut completed: BTreeSet<InformationType> = BTreeSet::new();
        let mut confidence_map: BTreeMap<InformationType, f64> = BTreeMap::new();
        let mut counters = Counters::default();

        let policy = self.compliance.as_deref();
        let total_types = self
            .type_manager
            .all_eligible(tier, locale, policy)
            .len()
            .max(1);
        self.progress.emit(
            ProgressEvent::new(
                ProgressEventKind::InvestigationStarted,
                format!("investigation {investigation_id} started"),
            )
            .percent(0.0),
        );
        info!(subject_known = subject.has_name(), ?tier, "investigation started");

        'phases: for phase in InvestigationPhase::ORDER {
            loop {
                if self.cancelled() {
                    self.checkpoint_now(
                        investigation_id,
                        phase,
                        &machine,
                        &knowledge,
                        &counters,
                        &completed,
                        "cancellation",
                    )
                    .await;
                    return Err(OrchestratorError::Cancelled.into());
                }

                let schedule = self
                    .type_manager
                    .schedule(phase, &completed, tier, locale, policy);
                if schedule.phase_complete {
                    break;
                }
                // A failed type keeps its outcome but never joins
                // `completed`, so it must not be offered again.
                let next = schedule
                    .ready
                    .iter()
                    .copied()
                    .find(|t| !outcomes.contains_key(t));
                let Some(info_type) = next else {
                    // Everything left in this phase already ran or is
                    // blocked on a type that failed or was skipped.
                    for (blocked_type, missing) in schedule.blocked {
                        if outcomes.contains_key(&blocked_type) {
                            continue;
                        }
                        let reason = format!(
                            "prerequisite {} did not complete",
                            missing
                                .iter()
                                .map(|t| t.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        );
                        warn!(info_type = %blocked_type, %reason, "type skipped");
                        outcomes.insert(blocked_type, TypeOutcome::Skipped { reason });
                    }
                    continue 'phases;
                };

                self.progress.emit(
                    ProgressEvent::new(
                        ProgressEventKind::TypeStarted,
                        format!("{info_type} started"),
                    )
                    .for_type(info_type)
                    .percent(percent(outcomes.len(), total_types)),
                );

                match self
                    .execute_single_type(
                        info_type,
                        subject,
                        locale,
                        tier,
                        &mut knowledge,
                        &mut machine,
                        &mut counters,
                    )
                    .await
                {
                    Ok((reason, confidence, iterations)) => {
                        completed.insert(info_type);
                        confidence_map.insert(info_type, confidence);
                        outcomes.insert(
                            info_type,
                            TypeOutcome::Completed {
                                reason,
                                confidence,
                                iterations,
                            },
                        );
                        self.progress.emit(
                            ProgressEvent::new(
                                ProgressEventKind::TypeCompleted,
                                format!("{info_type} completed"),
                            )
                            .for_type(info_type)
                            .percent(percent(outcomes.len(), total_types)),
                        );

                        if self.due_for_checkpoint(completed.len()) {
                            self.checkpoint_now(
                                investigation_id,
                                phase,
                                &machine,
                                &knowledge,
                                &counters,
                                &completed,
                                "periodic",
                            )
                            .await;
                        }
                    }
                    Err(error) => {
                        if matches!(error, OrchestratorError::Cancelled) {
                            self.checkpoint_now(
                                investigation_id,
                                phase,
                                &machine,
                                &knowledge,
                                &counters,
                                &completed,
                                "cancellation",
                            )
                            .await;
                            return Err(error.into());
                        }
                        let reason = error.to_string();
                        warn!(info_type = %info_type, %reason, "type failed");
                        // Terminal failure is still a write-once transition.
                        let _ = machine.mark_complete(
                            info_type,
                            CompletionReason::Failed {
                                error: reason.clone(),
                            },
                            0.0,
                        );
                        self.progress.emit(
                            ProgressEvent::new(
                                ProgressEventKind::TypeFailed,
                                format!("{info_type} failed: {reason}"),
                            )
                            .for_type(info_type),
                        );
                        outcomes.insert(info_type, TypeOutcome::Failed { error: reason.clone() });
                        if !self.config.orchestrator.continue_on_type_error {
                            return Err(OrchestratorError::Aborted { info_type, reason }.into());
                        }
                    }
                }
            }
        }

        let confidences: BTreeMap<InformationType, Confidence> = confidence_map
            .iter()
            .map(|(t, c)| (*t, Confidence::new(*c)))
            .collect();
        let overall_confidence = self
            .scorer
            .aggregate(&confidences)
            .map(|c| c.value())
            .unwrap_or(0.0);
        let lowest_confidence_type = self
            .scorer
            .lowest(&confidences)
            .map(|(t, c)| (t, c.value()));

        self.checkpoint_now(
            investigation_id,
            InvestigationPhase::Reconciliation,
            &machine,
            &knowledge,
            &counters,
            &completed,
            "final",
        )
        .await;

        let result = InvestigationResult {
            investigation_id: investigation_id.to_string(),
            completed_count: outcomes.values().filter(|o| o.is_completed()).count(),
            failed_count: outcomes
                .values()
                .filter(|o| matches!(o, TypeOutcome::Failed { .. }))
                .count(),
            skipped_count: outcomes
                .values()
                .filter(|o| matches!(o, TypeOutcome::Skipped { .. }))
                .count(),
            outcomes,
            overall_confidence,
            lowest_confidence_type,
            started_at,
            finished_at: Utc::now(),
        };
        self.progress.emit(
            ProgressEvent::new(
                ProgressEventKind::InvestigationCompleted,
                format!(
                    "investigation {investigation_id} finished: {} completed, {} failed, {} skipped",
                    result.completed_count, result.failed_count, result.skipped_count
                ),
            )
            .percent(100.0),
        );
        info!(
            completed = result.completed_count,
            failed = result.failed_count,
            skipped = result.skipped_count,
            overall_confidence,
            duration_ms = result.duration_ms(),
            "investigation finished"
        );
        Ok(result)
    }

    /// One type's full SAR loop. Returns (reason, final confidence,
    /// iterations run).
    #[allow(clippy::too_many_arguments)]
    async fn execute_single_type(
        &self,
        info_type: InformationType,
        subject: &SubjectIdentifiers,
        locale: &Locale,
        tier: ServiceTier,
        knowledge: &mut KnowledgeBase,
        machine: &mut InvestigationStateMachine,
        counters: &mut Counters,
    ) -> Result<(CompletionReason, f64, u32), OrchestratorError> {
        machine.initialize_type(info_type);
        let mut all_facts: Vec<Fact> = Vec::new();
        let mut open_gaps: Vec<Gap> = Vec::new();

        loop {
            if self.cancelled() {
                return Err(OrchestratorError::Cancelled);
            }

            let iteration = machine
                .start_iteration(info_type)
                .map_err(|e| state_bug(info_type, e))?;
            self.progress.emit(
                ProgressEvent::new(
                    ProgressEventKind::IterationStarted,
                    format!("{info_type} iteration {iteration}"),
                )
                .for_type(info_type)
                .at_phase(SarPhase::Search, iteration),
            );

            // Search: first iteration plans broad, later ones target gaps.
            let mut queries = if iteration == 1 {
                self.planner.plan_queries(info_type, knowledge, subject, tier)
            } else {
                self.refiner
                    .refine_queries(info_type, &open_gaps, knowledge, tier, iteration - 1)
            };
            if let Some(policy) = &self.compliance {
                queries.retain(|q: &ProviderQuery| {
                    policy.evaluate_check(
                        locale,
                        q.check_type,
                        subject.role_category.as_deref(),
                        tier,
                    )
                });
            }
            let generated = queries.len();

            self.progress.emit(
                ProgressEvent::new(
                    ProgressEventKind::QueriesDispatched,
                    format!("{info_type}: {generated} queries dispatched"),
                )
                .for_type(info_type)
                .at_phase(SarPhase::Search, iteration),
            );

            let results = if queries.is_empty() {
                // No queries to run; assessing the empty batch still
                // drives the loop to a terminal decision.
                Vec::new()
            } else {
                self.executor
                    .execute_batch(&queries, subject, locale, tier)
                    .await
                    .map_err(|e| OrchestratorError::ExecutionFailed {
                        info_type,
                        reason: e.to_string(),
                    })?
            };
            let successful = results.iter().filter(|r| r.status.is_success()).count();
            counters.total_queries_executed += results.len();

            machine
                .set_phase(info_type, SarPhase::Assess)
                .map_err(|e| state_bug(info_type, e))?;
            let assessment =
                self.assessor
                    .assess(info_type, &results, iteration, &all_facts, knowledge);
            counters.total_facts_extracted += assessment.new_fact_count;
            counters.total_iterations += 1;

            machine
                .complete_iteration(info_type, &assessment, generated, results.len(), successful)
                .map_err(|e| state_bug(info_type, e))?;
            self.progress.emit(
                ProgressEvent::new(
                    ProgressEventKind::AssessmentComplete,
                    format!(
                        "{info_type} iteration {iteration}: confidence {:.3}",
                        assessment.overall_confidence
                    ),
                )
                .for_type(info_type)
                .at_phase(SarPhase::Assess, iteration),
            );

            match self.controller.decide(info_type, iteration, &assessment) {
                Decision::Stop(reason) => {
                    let confidence = assessment.overall_confidence;
                    machine
                        .mark_complete(info_type, reason.clone(), confidence)
                        .map_err(|e| state_bug(info_type, e))?;
                    return Ok((reason, confidence, iteration));
                }
                Decision::Continue => {
                    machine
                        .set_phase(info_type, SarPhase::Refine)
                        .map_err(|e| state_bug(info_type, e))?;
                    open_gaps = assessment.gaps.clone();
                    merge_new_facts(&mut all_facts, assessment.facts);
                }
            }
        }
    }

    fn due_for_checkpoint(&self, completed_types: usize) -> bool {
        let interval = self.config.checkpoint.checkpoint_interval_types;
        self.checkpoints.is_some() && interval > 0 && completed_types % interval == 0
    }

    /// Best-effort checkpoint save; a storage failure is logged, never
    /// fatal to the investigation.
    #[allow(clippy::too_many_arguments)]
    async fn checkpoint_now(
        &self,
        investigation_id: &str,
        phase: InvestigationPhase,
        machine: &InvestigationStateMachine,
        knowledge: &KnowledgeBase,
        counters: &Counters,
        completed: &BTreeSet<InformationType>,
        reason: &str,
    ) {
        let Some(manager) = &self.checkpoints else {
            return;
        };
        let mut checkpoint = CheckpointData::new(investigation_id, reason);
        checkpoint.current_phase = phase;
        checkpoint.type_states = machine.snapshot();
        checkpoint.completed_types = completed.iter().copied().collect();
        checkpoint.active_types = checkpoint
            .type_states
            .values()
            .filter(|s| !s.is_complete())
            .map(|s| s.info_type)
            .collect();
        checkpoint.knowledge = knowledge.clone();
        checkpoint.counters = dossier_core::models::CheckpointCounters {
            total_queries_executed: counters.total_queries_executed,
            total_facts_extracted: counters.total_facts_extracted,
            total_iterations: counters.total_iterations,
        };
        checkpoint.confidence_map = machine
            .summary()
            .into_iter()
            .map(|(info_type, _, confidence)| (info_type, confidence))
            .collect();

        match manager.create_checkpoint(checkpoint).await {
            Ok(saved) => self.progress.emit(ProgressEvent::new(
                ProgressEventKind::CheckpointSaved,
                format!("checkpoint {} saved ({reason})", saved.checkpoint_id),
            )),
            Err(e) => warn!(investigation_id, error = %e, "checkpoint save failed"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Counters {
    total_queries_executed: usize,
    total_facts_extracted: usize,
    total_iterations: usize,
}

fn percent(done: usize, total: usize) -> f64 {
    (done as f64 / total as f64) * 100.0
}

/// Append batch facts that are not already on record. Providers often
/// re-return an unchanged payload on a later iteration; carrying the
/// repeat forward would count the same fact again in every later
/// completeness score.
fn merge_new_facts(all_facts: &mut Vec<Fact>, batch: Vec<Fact>) {
    for fact in batch {
        let known = all_facts.iter().any(|f| {
            f.fact_type == fact.fact_type
                && f.value == fact.value
                && f.source_provider == fact.source_provider
        });
        if !known {
            all_facts.push(fact);
        }
    }
}

/// State-machine errors inside the orchestrator are bugs in the loop
/// itself; surface them as execution failures with full context.
fn state_bug(
    info_type: InformationType,
    error: dossier_core::errors::StateError,
) -> OrchestratorError {
    OrchestratorError::ExecutionFailed {
        info_type,
        reason: format!("state machine violation: {error}"),
    }
}
