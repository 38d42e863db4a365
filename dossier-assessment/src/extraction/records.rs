//! Extraction for records-phase payloads: criminal, civil, financial,
//! licenses, regulatory disclosures.

use dossier_core::models::{CriminalRecord, Fact, FactKind, FilingRecord, LicenseRecord};
use dossier_core::types::Confidence;

const RECORD_CONFIDENCE: f64 = 0.85;
/// A "clear" flag is the provider's explicit no-record assertion.
const CLEAR_CONFIDENCE: f64 = 0.9;

pub fn extract_criminal(records: &[CriminalRecord], clear: bool, provider: &str) -> Vec<Fact> {
    if records.is_empty() && clear {
        return vec![Fact::new(
            FactKind::CriminalClear,
            "clear",
            provider,
            Confidence::new(CLEAR_CONFIDENCE),
        )];
    }

    let c = Confidence::new(RECORD_CONFIDENCE);
    records
        .iter()
        .map(|r| {
            let value = format!("{}: {}", r.jurisdiction, r.offense);
            let fact = Fact::new(FactKind::CriminalRecord, value, provider, c);
            match serde_json::to_value(r) {
                Ok(details) => fact.with_details(details),
                Err(_) => fact,
            }
        })
        .collect()
}

pub fn extract_civil(filings: &[FilingRecord], provider: &str) -> Vec<Fact> {
    let c = Confidence::new(RECORD_CONFIDENCE);
    filings
        .iter()
        .map(|f| Fact::new(FactKind::CivilFiling, &f.description, provider, c))
        .collect()
}

pub fn extract_financial(
    credit_score: Option<u16>,
    bankruptcies: &[FilingRecord],
    liens: &[FilingRecord],
    provider: &str,
) -> Vec<Fact> {
    let c = Confidence::new(RECORD_CONFIDENCE);
    let mut facts = Vec::new();

    if let Some(score) = credit_score {
        facts.push(Fact::new(
            FactKind::CreditScore,
            score.to_string(),
            provider,
            c,
        ));
    }
    for b in bankruptcies {
        facts.push(Fact::new(FactKind::Bankruptcy, &b.description, provider, c));
    }
    for l in liens {
        facts.push(Fact::new(FactKind::Lien, &l.description, provider, c));
    }

    facts
}

pub fn extract_licenses(licenses: &[LicenseRecord], provider: &str) -> Vec<Fact> {
    let c = Confidence::new(RECORD_CONFIDENCE);
    licenses
        .iter()
        .map(|l| Fact::new(FactKind::License, &l.license_type, provider, c))
        .collect()
}

pub fn extract_regulatory(disclosures: &[FilingRecord], provider: &str) -> Vec<Fact> {
    let c = Confidence::new(RECORD_CONFIDENCE);
    disclosures
        .iter()
        .map(|d| Fact::new(FactKind::RegulatoryDisclosure, &d.description, provider, c))
        .collect()
}
