use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::InformationType;

/// Coarse category of a gap. Refinement ranks missing-entirely gaps ahead
/// of incomplete ones regardless of declared priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapCategory {
    /// Nothing was found at all for this area.
    MissingEntirely,
    /// Something was found but coverage is partial.
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    Low,
    Medium,
    High,
}

/// Identified shortfall kinds. The refinement strategy table keys on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    NoIdentityFound,
    NoEmploymentFound,
    NoEducationFound,
    NoCriminalData,
    NoRecordsFound,
    MissingAddressHistory,
    MissingDateOfBirth,
    MissingEndDate,
    MissingDegreeDetail,
    PartialRecords,
    SingleSourceOnly,
}

impl GapKind {
    pub fn category(self) -> GapCategory {
        match self {
            GapKind::NoIdentityFound
            | GapKind::NoEmploymentFound
            | GapKind::NoEducationFound
            | GapKind::NoCriminalData
            | GapKind::NoRecordsFound => GapCategory::MissingEntirely,
            GapKind::MissingAddressHistory
            | GapKind::MissingDateOfBirth
            | GapKind::MissingEndDate
            | GapKind::MissingDegreeDetail
            | GapKind::PartialRecords
            | GapKind::SingleSourceOnly => GapCategory::Incomplete,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GapKind::NoIdentityFound => "no_identity_found",
            GapKind::NoEmploymentFound => "no_employment_found",
            GapKind::NoEducationFound => "no_education_found",
            GapKind::NoCriminalData => "no_criminal_data",
            GapKind::NoRecordsFound => "no_records_found",
            GapKind::MissingAddressHistory => "missing_address_history",
            GapKind::MissingDateOfBirth => "missing_date_of_birth",
            GapKind::MissingEndDate => "missing_end_date",
            GapKind::MissingDegreeDetail => "missing_degree_detail",
            GapKind::PartialRecords => "partial_records",
            GapKind::SingleSourceOnly => "single_source_only",
        }
    }
}

impl fmt::Display for GapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A missing-coverage area found during assessment. May or may not be
/// addressable by another query (`can_query`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gap {
    pub id: String,
    pub gap_type: GapKind,
    pub description: String,
    pub info_type: InformationType,
    pub priority: GapPriority,
    pub can_query: bool,
}

impl Gap {
    pub fn new(
        gap_type: GapKind,
        info_type: InformationType,
        priority: GapPriority,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gap_type,
            description: description.into(),
            info_type,
            priority,
            can_query: true,
        }
    }

    pub fn non_queryable(mut self) -> Self {
        self.can_query = false;
        self
    }
}
