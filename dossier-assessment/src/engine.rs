//! The per-iteration assessment pipeline.
//!
//! `assess` runs the full sequence for one type's iteration:
//! extract → dedupe against prior facts → score → analyze gaps →
//! detect inconsistencies → discover entities → commit to the
//! knowledge base. The caller (the orchestrator) holds the knowledge
//! base by `&mut`, so commits are serialized by construction.

use std::collections::HashSet;

use dossier_core::config::IterationConfig;
use dossier_core::models::{
    AssessmentResult, Fact, FactorWeights, QueryResult, QueryStatus,
};
use dossier_core::types::InformationType;
use dossier_core::KnowledgeBase;
use tracing::{debug, info};

use crate::{entities, extraction, factors, gaps, inconsistency};
use crate::scorer::ConfidenceScorer;

#[derive(Debug, Clone, Default)]
pub struct ResultAssessor {
    scorer: ConfidenceScorer,
}

impl ResultAssessor {
    pub fn new(weights: FactorWeights, iteration: IterationConfig) -> Self {
        Self {
            scorer: ConfidenceScorer::new(weights, iteration),
        }
    }

    /// Assess one iteration's results for a type.
    ///
    /// `prior_facts` is everything previous iterations of this type
    /// produced. Novelty is judged by `(kind, value)` group key: a fact
    /// re-asserted by a second provider is corroboration, not news.
    pub fn assess(
        &self,
        info_type: InformationType,
        results: &[QueryResult],
        iteration_number: u32,
        prior_facts: &[Fact],
        knowledge: &mut KnowledgeBase,
    ) -> AssessmentResult {
        let batch: Vec<Fact> = results
            .iter()
            .filter(|r| r.status == QueryStatus::Success)
            .flat_map(extraction::extract_facts)
            .collect();

        let prior_keys: HashSet<(_, String)> = prior_facts
            .iter()
            .map(|f| (f.fact_type, f.value.clone()))
            .collect();
        let mut new_keys = HashSet::new();
        let mut novel: Vec<&Fact> = Vec::new();
        for fact in &batch {
            let key = (fact.fact_type, fact.value.clone());
            if !prior_keys.contains(&key) && new_keys.insert(key) {
                novel.push(fact);
            }
        }
        let new_fact_count = novel.len();

        // Cumulative view for scoring: prior facts plus this batch, with
        // exact (kind, value, provider) repeats dropped.
        let mut seen: HashSet<(_, String, String)> = prior_facts
            .iter()
            .map(|f| (f.fact_type, f.value.clone(), f.source_provider.clone()))
            .collect();
        let mut cumulative: Vec<Fact> = prior_facts.to_vec();
        for fact in &batch {
            let key = (
                fact.fact_type,
                fact.value.clone(),
                fact.source_provider.clone(),
            );
            if seen.insert(key) {
                cumulative.push(fact.clone());
            }
        }

        let computed = factors::compute(info_type, &cumulative, results);
        let overall_confidence = self.scorer.overall(&computed);
        let found_gaps = gaps::analyze(info_type, &cumulative);
        let inconsistencies = inconsistency::detect(&cumulative);
        let discovered = entities::discover(&batch);

        let info_gain_rate = if results.is_empty() {
            0.0
        } else {
            new_fact_count as f64 / results.len() as f64
        };

        for fact in &novel {
            knowledge.merge_fact(fact);
        }
        for entity in &discovered {
            knowledge.add_entity(entity.clone());
        }

        let threshold = self.scorer.threshold_for(info_type);
        let has_queryable_gap = found_gaps.iter().any(|g| g.can_query);
        let should_continue =
            !self.scorer.meets_threshold(info_type, overall_confidence) && has_queryable_gap;

        debug!(
            info_type = %info_type,
            iteration = iteration_number,
            batch = batch.len(),
            new_facts = new_fact_count,
            inconsistencies = inconsistencies.len(),
            "assessment pipeline complete"
        );
        info!(
            info_type = %info_type,
            iteration = iteration_number,
            confidence = overall_confidence,
            threshold,
            gaps = found_gaps.len(),
            gain = info_gain_rate,
            "iteration assessed"
        );

        AssessmentResult {
            info_type,
            iteration_number,
            total_fact_count: cumulative.len(),
            facts: batch,
            new_fact_count,
            factors: computed,
            overall_confidence,
            gaps: found_gaps,
            info_gain_rate,
            discovered_entities: discovered,
            inconsistencies,
            should_continue,
        }
    }
}
