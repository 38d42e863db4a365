use dossier_core::models::{EducationRecord, Fact, FactKind};
use dossier_core::types::Confidence;

const RECORD_CONFIDENCE: f64 = 0.85;

pub fn extract(schools: &[EducationRecord], provider: &str) -> Vec<Fact> {
    let c = Confidence::new(RECORD_CONFIDENCE);
    let mut facts = Vec::new();

    for record in schools {
        facts.push(Fact::new(FactKind::School, &record.school, provider, c));
        if let Some(degree) = record.degree.as_deref() {
            facts.push(Fact::new(FactKind::Degree, degree, provider, c));
        }
    }

    facts
}
