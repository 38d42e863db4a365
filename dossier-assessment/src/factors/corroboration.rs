//! Corroboration factor: the fraction of fact groups confirmed by at
//! least two distinct providers.
//!
//! Facts are grouped by `(kind, value)`. Two facts agree only when both
//! the kind and the exact value string match; providers are compared by
//! identity, so two data products from the same vendor do not count as
//! independent confirmation of each other.

use std::collections::{BTreeMap, BTreeSet};

use dossier_core::constants::CORROBORATION_MIN_SOURCES;
use dossier_core::models::Fact;

pub fn calculate(facts: &[Fact]) -> f64 {
    if facts.is_empty() {
        return 0.0;
    }

    let mut providers_by_group: BTreeMap<_, BTreeSet<&str>> = BTreeMap::new();
    for fact in facts {
        providers_by_group
            .entry(fact.group_key())
            .or_default()
            .insert(fact.source_provider.as_str());
    }

    let corroborated = providers_by_group
        .values()
        .filter(|providers| providers.len() >= CORROBORATION_MIN_SOURCES)
        .count();

    corroborated as f64 / providers_by_group.len() as f64
}
