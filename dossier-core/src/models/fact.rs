use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Confidence;

/// What kind of datum a fact asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    Name,
    DateOfBirth,
    SsnLast4,
    Address,
    Phone,
    Employer,
    JobTitle,
    School,
    Degree,
    CriminalRecord,
    CriminalClear,
    CivilFiling,
    CreditScore,
    Bankruptcy,
    Lien,
    License,
    RegulatoryDisclosure,
    SanctionsMatch,
    SanctionsClear,
    MediaArticle,
    OnlineProfile,
    Associate,
    Colleague,
    Supervisor,
    Generic,
}

impl FactKind {
    /// Kinds that name a person in the subject's network.
    pub fn is_person_relation(self) -> bool {
        matches!(
            self,
            FactKind::Associate | FactKind::Colleague | FactKind::Supervisor
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FactKind::Name => "name",
            FactKind::DateOfBirth => "date_of_birth",
            FactKind::SsnLast4 => "ssn_last4",
            FactKind::Address => "address",
            FactKind::Phone => "phone",
            FactKind::Employer => "employer",
            FactKind::JobTitle => "job_title",
            FactKind::School => "school",
            FactKind::Degree => "degree",
            FactKind::CriminalRecord => "criminal_record",
            FactKind::CriminalClear => "criminal_clear",
            FactKind::CivilFiling => "civil_filing",
            FactKind::CreditScore => "credit_score",
            FactKind::Bankruptcy => "bankruptcy",
            FactKind::Lien => "lien",
            FactKind::License => "license",
            FactKind::RegulatoryDisclosure => "regulatory_disclosure",
            FactKind::SanctionsMatch => "sanctions_match",
            FactKind::SanctionsClear => "sanctions_clear",
            FactKind::MediaArticle => "media_article",
            FactKind::OnlineProfile => "online_profile",
            FactKind::Associate => "associate",
            FactKind::Colleague => "colleague",
            FactKind::Supervisor => "supervisor",
            FactKind::Generic => "generic",
        }
    }
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An atomic extracted datum. Immutable once created.
///
/// `value` is the stringified form used for novelty and corroboration
/// grouping; structured detail, when a payload carries more than a
/// string, rides along in `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub id: String,
    pub fact_type: FactKind,
    pub value: String,
    pub source_provider: String,
    pub confidence: Confidence,
    pub discovered_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Fact {
    pub fn new(
        fact_type: FactKind,
        value: impl Into<String>,
        source_provider: impl Into<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fact_type,
            value: value.into(),
            source_provider: source_provider.into(),
            confidence,
            discovered_at: Utc::now(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Grouping key for novelty and corroboration: kind plus stringified value.
    pub fn group_key(&self) -> (FactKind, &str) {
        (self.fact_type, self.value.as_str())
    }
}
