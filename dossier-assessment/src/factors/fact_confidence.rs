//! Fact confidence factor: the mean of the per-fact confidence values
//! assigned at extraction time.

use dossier_core::models::Fact;

pub fn calculate(facts: &[Fact]) -> f64 {
    if facts.is_empty() {
        return 0.0;
    }
    let sum: f64 = facts.iter().map(|f| f.confidence.value()).sum();
    sum / facts.len() as f64
}
