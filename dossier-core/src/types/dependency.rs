//! Static fact table mapping each information type to its phase, its
//! prerequisite types, and whether it needs the enhanced service tier.
//!
//! Prerequisites may reach across phases (regulatory needs employment);
//! phase ordering already guarantees anything in an earlier phase ran
//! first, so prerequisites only name the types whose *facts* feed this
//! type's queries.

use super::info_type::InformationType;
use super::phase::InvestigationPhase;

/// One row of the dependency table.
#[derive(Debug, Clone, Copy)]
pub struct TypeDependency {
    pub info_type: InformationType,
    pub phase: InvestigationPhase,
    pub prerequisites: &'static [InformationType],
    pub enhanced_only: bool,
}

/// The full dependency DAG, one row per information type.
pub const DEPENDENCY_TABLE: [TypeDependency; 14] = [
    TypeDependency {
        info_type: InformationType::Identity,
        phase: InvestigationPhase::Foundation,
        prerequisites: &[],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::Employment,
        phase: InvestigationPhase::Foundation,
        prerequisites: &[InformationType::Identity],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::Education,
        phase: InvestigationPhase::Foundation,
        prerequisites: &[InformationType::Identity],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::Criminal,
        phase: InvestigationPhase::Records,
        prerequisites: &[InformationType::Identity],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::Civil,
        phase: InvestigationPhase::Records,
        prerequisites: &[InformationType::Identity],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::Financial,
        phase: InvestigationPhase::Records,
        prerequisites: &[InformationType::Identity],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::Licenses,
        phase: InvestigationPhase::Records,
        prerequisites: &[InformationType::Identity, InformationType::Employment],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::Regulatory,
        phase: InvestigationPhase::Intelligence,
        prerequisites: &[InformationType::Employment],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::Sanctions,
        phase: InvestigationPhase::Intelligence,
        prerequisites: &[InformationType::Identity],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::AdverseMedia,
        phase: InvestigationPhase::Intelligence,
        prerequisites: &[InformationType::Identity],
        enhanced_only: false,
    },
    TypeDependency {
        info_type: InformationType::DigitalFootprint,
        phase: InvestigationPhase::Intelligence,
        prerequisites: &[InformationType::Identity],
        enhanced_only: true,
    },
    TypeDependency {
        info_type: InformationType::NetworkD2,
        phase: InvestigationPhase::Network,
        prerequisites: &[InformationType::Identity, InformationType::Employment],
        enhanced_only: true,
    },
    TypeDependency {
        info_type: InformationType::NetworkD3,
        phase: InvestigationPhase::Network,
        prerequisites: &[InformationType::NetworkD2],
        enhanced_only: true,
    },
    TypeDependency {
        info_type: InformationType::Reconciliation,
        phase: InvestigationPhase::Reconciliation,
        prerequisites: &[InformationType::Identity, InformationType::Sanctions],
        enhanced_only: false,
    },
];

/// Look up the dependency row for a type.
pub fn dependency_for(info_type: InformationType) -> &'static TypeDependency {
    // The table covers every variant, so the lookup cannot fail.
    DEPENDENCY_TABLE
        .iter()
        .find(|d| d.info_type == info_type)
        .expect("dependency table covers all information types")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_type() {
        for t in InformationType::ALL {
            assert_eq!(dependency_for(t).info_type, t);
        }
    }

    #[test]
    fn prerequisites_never_point_forward() {
        // A prerequisite must live in the same or an earlier phase.
        for row in DEPENDENCY_TABLE {
            for prereq in row.prerequisites {
                let prereq_phase = dependency_for(*prereq).phase;
                assert!(
                    prereq_phase <= row.phase,
                    "{} depends on {} from a later phase",
                    row.info_type,
                    prereq
                );
            }
        }
    }
}
