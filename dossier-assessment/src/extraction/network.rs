use dossier_core::models::{Fact, FactKind, NetworkContact};
use dossier_core::types::Confidence;

const CONTACT_CONFIDENCE: f64 = 0.6;

/// Network contacts become relation-typed person facts; entity discovery
/// later turns those into network-phase targets.
pub fn extract(contacts: &[NetworkContact], provider: &str) -> Vec<Fact> {
    let c = Confidence::new(CONTACT_CONFIDENCE);
    contacts
        .iter()
        .map(|contact| {
            let kind = match contact.relation.as_str() {
                "colleague" => FactKind::Colleague,
                "supervisor" => FactKind::Supervisor,
                _ => FactKind::Associate,
            };
            Fact::new(kind, &contact.name, provider, c)
        })
        .collect()
}
