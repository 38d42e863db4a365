use dossier_core::models::{Fact, FactKind, IdentityRecord};
use dossier_core::types::Confidence;

/// Provider-verified identity attributes carry high confidence.
const VERIFIED_CONFIDENCE: f64 = 0.9;

pub fn extract(record: &IdentityRecord, provider: &str) -> Vec<Fact> {
    let c = Confidence::new(VERIFIED_CONFIDENCE);
    let mut facts = Vec::new();

    if let Some(name) = record.full_name.as_deref() {
        facts.push(Fact::new(FactKind::Name, name, provider, c));
    }
    if let Some(dob) = record.date_of_birth.as_deref() {
        facts.push(Fact::new(FactKind::DateOfBirth, dob, provider, c));
    }
    if let Some(ssn) = record.ssn_last4.as_deref() {
        facts.push(Fact::new(FactKind::SsnLast4, ssn, provider, c));
    }
    for address in &record.addresses {
        let fact = Fact::new(FactKind::Address, &address.line, provider, c);
        match serde_json::to_value(address) {
            Ok(details) => facts.push(fact.with_details(details)),
            Err(_) => facts.push(fact),
        }
    }
    for phone in &record.phones {
        facts.push(Fact::new(FactKind::Phone, phone, provider, c));
    }

    facts
}
