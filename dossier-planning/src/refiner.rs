//! Gap-targeted query refinement for iterations ≥ 2.

use std::cmp::Reverse;

use tracing::debug;

use dossier_core::config::PlannerConfig;
use dossier_core::constants::{PRIORITY_GAP_INCOMPLETE, PRIORITY_GAP_MISSING};
use dossier_core::models::{Gap, GapCategory, ProviderQuery};
use dossier_core::types::{InformationType, ServiceTier};
use dossier_core::KnowledgeBase;

use crate::dedup::dedup_and_cap;
use crate::strategies::strategy_for;

pub struct QueryRefiner {
    config: PlannerConfig,
}

impl QueryRefiner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Build the refinement batch for the iteration after `previous_iteration`.
    ///
    /// Gaps are ranked by category first ("nothing found at all" beats
    /// "partial/incomplete" regardless of declared priority), then by
    /// priority. Non-queryable gaps and gap kinds with no strategy are
    /// skipped. Every generated query carries `targeting_gap` and
    /// `iteration_number = previous_iteration + 1`.
    pub fn refine_queries(
        &self,
        info_type: InformationType,
        gaps: &[Gap],
        knowledge: &KnowledgeBase,
        tier: ServiceTier,
        previous_iteration: u32,
    ) -> Vec<ProviderQuery> {
        let Some(name) = knowledge.primary_name() else {
            debug!(info_type = %info_type, "no subject name known; empty refinement");
            return Vec::new();
        };
        let iteration_number = previous_iteration + 1;

        let mut ranked: Vec<&Gap> = gaps.iter().filter(|g| g.can_query).collect();
        ranked.sort_by_key(|g| (g.gap_type.category(), Reverse(g.priority)));

        let mut queries = Vec::new();
        for gap in ranked {
            let Some(strategy) = strategy_for(gap.gap_type) else {
                debug!(gap = %gap.gap_type, "no refinement strategy; skipping gap");
                continue;
            };

            let priority = match gap.gap_type.category() {
                GapCategory::MissingEntirely => PRIORITY_GAP_MISSING,
                GapCategory::Incomplete => PRIORITY_GAP_INCOMPLETE,
            };

            for check in strategy
                .check_types
                .iter()
                .filter(|c| c.allowed_for(tier))
                .take(self.config.max_queries_per_gap)
            {
                let mut q = ProviderQuery::new(info_type, *check, priority)
                    .with_param("name", name)
                    .with_param("search_focus", strategy.search_focus);
                if let Some(dob) = knowledge.date_of_birth.as_deref() {
                    q.params.insert("dob".to_string(), dob.to_string());
                }
                q.iteration_number = iteration_number;
                q.targeting_gap = Some(gap.gap_type.as_str().to_string());
                queries.push(q);
            }
        }

        let queries = dedup_and_cap(queries, self.config.max_total_queries);
        debug!(
            info_type = %info_type,
            iteration = iteration_number,
            count = queries.len(),
            "built refinement batch"
        );
        queries
    }
}

impl Default for QueryRefiner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
