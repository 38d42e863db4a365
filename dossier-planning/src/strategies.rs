//! Gap-kind → refinement strategy lookup table.
//!
//! Data-driven on purpose: adding a new gap kind means adding a table row,
//! not another branch in the refiner.

use dossier_core::models::{CheckType, GapKind};

/// Candidate check types and a focus label for one gap kind.
#[derive(Debug, Clone, Copy)]
pub struct GapStrategy {
    pub check_types: &'static [CheckType],
    pub search_focus: &'static str,
}

/// Strategy for a queryable gap kind. `None` for kinds that no further
/// query can address.
pub fn strategy_for(kind: GapKind) -> Option<GapStrategy> {
    let strategy = match kind {
        GapKind::NoIdentityFound => GapStrategy {
            check_types: &[CheckType::SsnTrace, CheckType::AddressHistory],
            search_focus: "identity_recheck",
        },
        GapKind::NoEmploymentFound => GapStrategy {
            check_types: &[
                CheckType::EmploymentVerification,
                CheckType::CorporateRegistry,
            ],
            search_focus: "employment_discovery",
        },
        GapKind::NoEducationFound => GapStrategy {
            check_types: &[CheckType::EducationVerification],
            search_focus: "education_discovery",
        },
        GapKind::NoRecordsFound => GapStrategy {
            check_types: &[CheckType::CivilRecords, CheckType::BankruptcySearch],
            search_focus: "records_sweep",
        },
        GapKind::MissingAddressHistory => GapStrategy {
            check_types: &[CheckType::AddressHistory],
            search_focus: "address_backfill",
        },
        GapKind::MissingDateOfBirth => GapStrategy {
            check_types: &[CheckType::IdentityVerification, CheckType::SsnTrace],
            search_focus: "dob_confirmation",
        },
        GapKind::MissingEndDate => GapStrategy {
            check_types: &[CheckType::EmploymentVerification],
            search_focus: "employment_dates",
        },
        GapKind::MissingDegreeDetail => GapStrategy {
            check_types: &[CheckType::EducationVerification],
            search_focus: "degree_detail",
        },
        GapKind::PartialRecords => GapStrategy {
            check_types: &[CheckType::CountyCriminal, CheckType::CivilRecords],
            search_focus: "jurisdiction_expansion",
        },
        GapKind::SingleSourceOnly => GapStrategy {
            check_types: &[CheckType::IdentityVerification, CheckType::MediaSearch],
            search_focus: "corroboration",
        },
        // A clear criminal result is a legitimate outcome; there is no
        // query that "fixes" it.
        GapKind::NoCriminalData => return None,
    };
    Some(strategy)
}
