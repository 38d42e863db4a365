use serde::{Deserialize, Serialize};

use super::fact::FactKind;

/// How an inconsistency is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistencyKind {
    NameMismatch,
    AddressMismatch,
    EmployerMismatch,
    CredentialMismatch,
    DobMismatch,
    SsnMismatch,
    ValueMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistencySeverity {
    Minor,
    Moderate,
    Significant,
}

/// Two sources disagreeing on the same field.
///
/// `deception_score` is the table-assigned weight this mismatch
/// contributes to deception analysis; it is not a probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedInconsistency {
    pub field: FactKind,
    pub claimed_value: String,
    pub found_value: String,
    pub source_a: String,
    pub source_b: String,
    pub severity: InconsistencySeverity,
    pub inconsistency_type: InconsistencyKind,
    pub deception_score: f64,
}

/// Fixed classification table: field kind → (type, severity, deception score).
///
/// Name/address collisions are common data-entry noise; identity-anchor
/// fields (dob, ssn) disagreeing is a strong deception signal.
pub fn classify(field: FactKind) -> (InconsistencyKind, InconsistencySeverity, f64) {
    match field {
        FactKind::Name => (
            InconsistencyKind::NameMismatch,
            InconsistencySeverity::Minor,
            0.10,
        ),
        FactKind::Address => (
            InconsistencyKind::AddressMismatch,
            InconsistencySeverity::Minor,
            0.10,
        ),
        FactKind::Employer => (
            InconsistencyKind::EmployerMismatch,
            InconsistencySeverity::Moderate,
            0.40,
        ),
        FactKind::Degree => (
            InconsistencyKind::CredentialMismatch,
            InconsistencySeverity::Moderate,
            0.45,
        ),
        FactKind::DateOfBirth => (
            InconsistencyKind::DobMismatch,
            InconsistencySeverity::Significant,
            0.75,
        ),
        FactKind::SsnLast4 => (
            InconsistencyKind::SsnMismatch,
            InconsistencySeverity::Significant,
            0.85,
        ),
        _ => (
            InconsistencyKind::ValueMismatch,
            InconsistencySeverity::Minor,
            0.10,
        ),
    }
}
