//! Normalized provider payloads.
//!
//! Providers return loosely-shaped data ("records", "matches", "items"...).
//! The execution service normalizes each result into one of these
//! well-known per-check-type shapes; anything it cannot model arrives as
//! `Generic` and goes through the fallback extraction path. Tagged enum so
//! fact extraction stays exhaustive instead of stringly-typed.

use serde::{Deserialize, Serialize};

/// Normalized payload union, tagged by `kind` in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckPayload {
    Identity(IdentityRecord),
    Employment { employers: Vec<EmploymentRecord> },
    Education { schools: Vec<EducationRecord> },
    Criminal { records: Vec<CriminalRecord>, clear: bool },
    Civil { filings: Vec<FilingRecord> },
    Financial {
        credit_score: Option<u16>,
        bankruptcies: Vec<FilingRecord>,
        liens: Vec<FilingRecord>,
    },
    Licenses { licenses: Vec<LicenseRecord> },
    Regulatory { disclosures: Vec<FilingRecord> },
    Sanctions { matches: Vec<SanctionsHit>, clear: bool },
    Media { articles: Vec<MediaArticle> },
    Network { contacts: Vec<NetworkContact> },
    /// Fallback for payloads the normalizer does not model.
    Generic { data: serde_json::Value },
}

impl CheckPayload {
    /// An empty payload for failed/timeout results.
    pub fn empty() -> Self {
        CheckPayload::Generic {
            data: serde_json::Value::Null,
        }
    }
}

/// Identity attributes verified by a provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub ssn_last4: Option<String>,
    pub addresses: Vec<AddressRecord>,
    pub phones: Vec<String>,
}

/// A known address with jurisdiction fields for criminal targeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub line: String,
    pub county: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmploymentRecord {
    pub employer: String,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Provider marked this as the subject's current position.
    pub current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationRecord {
    pub school: String,
    pub degree: Option<String>,
    pub graduation_year: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriminalRecord {
    pub jurisdiction: String,
    pub offense: String,
    pub disposition: Option<String>,
    pub date: Option<String>,
}

/// Civil filing, bankruptcy, lien, or regulatory disclosure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilingRecord {
    pub description: String,
    pub jurisdiction: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub license_type: String,
    pub issuer: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SanctionsHit {
    pub list_name: String,
    pub matched_name: String,
    pub match_strength: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaArticle {
    pub headline: String,
    pub source: Option<String>,
    pub published: Option<String>,
    pub sentiment: Option<f64>,
}

/// A person discovered in the subject's network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkContact {
    pub name: String,
    /// associate / colleague / supervisor.
    pub relation: String,
    pub via: Option<String>,
}
