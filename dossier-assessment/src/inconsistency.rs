//! Cross-source inconsistency detection.
//!
//! Two providers conflict on a field when the value sets they each
//! assert for that field kind are non-empty and fully disjoint. Overlap
//! means at least one value is shared, so disagreement on the rest is
//! treated as extra coverage (an old address, a prior employer) rather
//! than a conflict.

use std::collections::{BTreeMap, BTreeSet};

use dossier_core::models::{classify, DetectedInconsistency, Fact, FactKind};
use tracing::warn;

pub fn detect(facts: &[Fact]) -> Vec<DetectedInconsistency> {
    // kind → provider → asserted values
    let mut by_kind: BTreeMap<FactKind, BTreeMap<&str, BTreeSet<&str>>> = BTreeMap::new();
    for fact in facts {
        by_kind
            .entry(fact.fact_type)
            .or_default()
            .entry(fact.source_provider.as_str())
            .or_default()
            .insert(fact.value.as_str());
    }

    let mut found = Vec::new();
    for (kind, by_provider) in &by_kind {
        let providers: Vec<(&&str, &BTreeSet<&str>)> = by_provider.iter().collect();
        for (i, (provider_a, values_a)) in providers.iter().enumerate() {
            for (provider_b, values_b) in providers.iter().skip(i + 1) {
                if values_a.is_disjoint(values_b) {
                    let (inconsistency_type, severity, deception_score) = classify(*kind);
                    // Disjointness is guaranteed over non-empty sets, so
                    // first() cannot fail here.
                    let claimed = values_a.first().copied().unwrap_or_default();
                    let observed = values_b.first().copied().unwrap_or_default();
                    warn!(
                        field = %kind,
                        source_a = %provider_a,
                        source_b = %provider_b,
                        severity = ?severity,
                        "sources disagree on field value"
                    );
                    found.push(DetectedInconsistency {
                        field: *kind,
                        claimed_value: claimed.to_string(),
                        found_value: observed.to_string(),
                        source_a: provider_a.to_string(),
                        source_b: provider_b.to_string(),
                        severity,
                        inconsistency_type,
                        deception_score,
                    });
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::models::{InconsistencyKind, InconsistencySeverity};
    use dossier_core::types::Confidence;

    fn fact(kind: FactKind, value: &str, provider: &str) -> Fact {
        Fact::new(kind, value, provider, Confidence::new(0.8))
    }

    #[test]
    fn disjoint_dob_values_are_significant() {
        let facts = vec![
            fact(FactKind::DateOfBirth, "1985-03-12", "a"),
            fact(FactKind::DateOfBirth, "1987-03-12", "b"),
        ];
        let found = detect(&facts);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].inconsistency_type, InconsistencyKind::DobMismatch);
        assert_eq!(found[0].severity, InconsistencySeverity::Significant);
        assert!((found[0].deception_score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn overlapping_value_sets_do_not_conflict() {
        // Provider b knows an extra address; both agree on the first.
        let facts = vec![
            fact(FactKind::Address, "1 Main St, Springfield", "a"),
            fact(FactKind::Address, "1 Main St, Springfield", "b"),
            fact(FactKind::Address, "9 Elm Ave, Shelbyville", "b"),
        ];
        assert!(detect(&facts).is_empty());
    }

    #[test]
    fn different_kinds_never_conflict() {
        let facts = vec![
            fact(FactKind::Name, "Jane Doe", "a"),
            fact(FactKind::Employer, "Initech", "b"),
        ];
        assert!(detect(&facts).is_empty());
    }

    #[test]
    fn employer_conflict_is_moderate() {
        let facts = vec![
            fact(FactKind::Employer, "Initech", "a"),
            fact(FactKind::Employer, "Initrode", "b"),
        ];
        let found = detect(&facts);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, InconsistencySeverity::Moderate);
    }

    #[test]
    fn three_way_disagreement_yields_a_pair_per_conflict() {
        let facts = vec![
            fact(FactKind::SsnLast4, "1234", "a"),
            fact(FactKind::SsnLast4, "5678", "b"),
            fact(FactKind::SsnLast4, "9012", "c"),
        ];
        assert_eq!(detect(&facts).len(), 3);
    }
}
