use dossier_core::models::{EmploymentRecord, Fact, FactKind};
use dossier_core::types::Confidence;

const RECORD_CONFIDENCE: f64 = 0.85;

pub fn extract(employers: &[EmploymentRecord], provider: &str) -> Vec<Fact> {
    let c = Confidence::new(RECORD_CONFIDENCE);
    let mut facts = Vec::new();

    for record in employers {
        let employer = Fact::new(FactKind::Employer, &record.employer, provider, c);
        // Gap heuristics read the raw record back out of the details.
        match serde_json::to_value(record) {
            Ok(details) => facts.push(employer.with_details(details)),
            Err(_) => facts.push(employer),
        }
        if let Some(title) = record.title.as_deref() {
            facts.push(Fact::new(FactKind::JobTitle, title, provider, c));
        }
    }

    facts
}
