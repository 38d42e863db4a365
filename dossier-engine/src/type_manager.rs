//! Dependency-aware type scheduling.
//!
//! Phases run in fixed order; inside a phase, a type is ready once every
//! prerequisite has completed. Prerequisites can sit in the same phase
//! (employment needs identity, both Foundation), so the orchestrator
//! re-asks for a schedule after each completion until nothing new comes
//! ready.

use std::collections::BTreeSet;

use dossier_core::models::CheckType;
use dossier_core::traits::ICompliancePolicy;
use dossier_core::types::dependency::{dependency_for, DEPENDENCY_TABLE};
use dossier_core::types::{InformationType, InvestigationPhase, Locale, ServiceTier};

/// One phase's scheduling snapshot.
#[derive(Debug, Clone)]
pub struct TypeSchedule {
    pub phase: InvestigationPhase,
    /// Types that can start now, in declaration order.
    pub ready: Vec<InformationType>,
    /// Types still waiting, with the prerequisites they are missing.
    pub blocked: Vec<(InformationType, Vec<InformationType>)>,
    /// Every eligible type in the phase has completed.
    pub phase_complete: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TypeManager;

impl TypeManager {
    pub fn new() -> Self {
        Self
    }

    /// Types belonging to a phase under the given tier and locale.
    /// Enhanced-only types simply do not exist for the standard tier,
    /// and a type whose representative check the compliance policy
    /// forbids in this locale never becomes eligible at all. Without a
    /// policy everything is permitted.
    pub fn types_for_phase(
        &self,
        phase: InvestigationPhase,
        tier: ServiceTier,
        locale: &Locale,
        policy: Option<&dyn ICompliancePolicy>,
    ) -> Vec<InformationType> {
        DEPENDENCY_TABLE
            .iter()
            .filter(|row| row.phase == phase)
            .filter(|row| !row.enhanced_only || tier == ServiceTier::Enhanced)
            .filter(|row| match policy {
                // Role-specific restrictions stay at the query level.
                Some(p) => {
                    p.evaluate_check(locale, CheckType::representative(row.info_type), None, tier)
                }
                None => true,
            })
            .map(|row| row.info_type)
            .collect()
    }

    /// Every type the investigation will consider under the tier and
    /// locale, across all phases.
    pub fn all_eligible(
        &self,
        tier: ServiceTier,
        locale: &Locale,
        policy: Option<&dyn ICompliancePolicy>,
    ) -> Vec<InformationType> {
        InvestigationPhase::ORDER
            .iter()
            .flat_map(|phase| self.types_for_phase(*phase, tier, locale, policy))
            .collect()
    }

    /// Schedule one phase against the set of completed types.
    ///
    /// `completed` holds every type that reached a terminal state other
    /// than failure. A failed or skipped prerequisite keeps its
    /// dependents blocked permanently; the orchestrator turns leftover
    /// blocked types into skips when the phase winds down.
    pub fn schedule(
        &self,
        phase: InvestigationPhase,
        completed: &BTreeSet<InformationType>,
        tier: ServiceTier,
        locale: &Locale,
        policy: Option<&dyn ICompliancePolicy>,
    ) -> TypeSchedule {
        let mut ready = Vec::new();
        let mut blocked = Vec::new();
        let mut remaining = 0;

        for info_type in self.types_for_phase(phase, tier, locale, policy) {
            if completed.contains(&info_type) {
                continue;
            }
            remaining += 1;
            let missing: Vec<InformationType> = dependency_for(info_type)
                .prerequisites
                .iter()
                .filter(|p| !completed.contains(p))
                .copied()
                .collect();
            if missing.is_empty() {
                ready.push(info_type);
            } else {
                blocked.push((info_type, missing));
            }
        }

        TypeSchedule {
            phase,
            ready,
            blocked,
            phase_complete: remaining == 0,
        }
    }
}
