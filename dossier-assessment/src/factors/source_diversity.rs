//! Source diversity factor: distinct providers contributing facts,
//! scaled so that two or more independent sources scores full marks.

use std::collections::BTreeSet;

use dossier_core::constants::FULL_DIVERSITY_SOURCES;
use dossier_core::models::Fact;

pub fn calculate(facts: &[Fact]) -> f64 {
    let distinct: BTreeSet<&str> = facts.iter().map(|f| f.source_provider.as_str()).collect();
    (distinct.len() as f64 / FULL_DIVERSITY_SOURCES as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::models::FactKind;
    use dossier_core::types::Confidence;

    fn fact(provider: &str) -> Fact {
        Fact::new(FactKind::Name, "Jane Doe", provider, Confidence::new(0.8))
    }

    #[test]
    fn single_source_is_half() {
        assert_eq!(calculate(&[fact("a"), fact("a")]), 0.5);
    }

    #[test]
    fn two_or_more_sources_saturate() {
        assert_eq!(calculate(&[fact("a"), fact("b")]), 1.0);
        assert_eq!(calculate(&[fact("a"), fact("b"), fact("c")]), 1.0);
    }
}
