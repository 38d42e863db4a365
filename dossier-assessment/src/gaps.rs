//! Gap analysis: per-type heuristics that inspect the cumulative fact
//! set and flag missing or partial coverage.
//!
//! Gaps are what drive refinement. Each heuristic is deliberately cheap
//! and string-level; the refiner decides whether a gap is worth another
//! query via the strategy table, so a heuristic here only needs to be
//! honest about what is absent.

use std::collections::BTreeSet;

use dossier_core::models::{Fact, FactKind, Gap, GapKind, GapPriority};
use dossier_core::types::InformationType;
use tracing::debug;

/// Analyze the cumulative fact set for one type and return its gaps.
pub fn analyze(info_type: InformationType, facts: &[Fact]) -> Vec<Gap> {
    let mut gaps = match info_type {
        InformationType::Identity => identity_gaps(facts),
        InformationType::Employment => employment_gaps(facts),
        InformationType::Education => education_gaps(facts),
        InformationType::Criminal => criminal_gaps(facts),
        _ => default_gaps(info_type, facts),
    };

    if let Some(gap) = single_source_gap(info_type, facts) {
        gaps.push(gap);
    }

    if !gaps.is_empty() {
        debug!(
            info_type = %info_type,
            gap_count = gaps.len(),
            "gap analysis flagged shortfalls"
        );
    }
    gaps
}

fn has_kind(facts: &[Fact], kind: FactKind) -> bool {
    facts.iter().any(|f| f.fact_type == kind)
}

fn identity_gaps(facts: &[Fact]) -> Vec<Gap> {
    if facts.is_empty() {
        return vec![Gap::new(
            GapKind::NoIdentityFound,
            InformationType::Identity,
            GapPriority::High,
            "no identity facts found for the subject",
        )];
    }

    let mut gaps = Vec::new();
    if !has_kind(facts, FactKind::Address) {
        gaps.push(Gap::new(
            GapKind::MissingAddressHistory,
            InformationType::Identity,
            GapPriority::High,
            "identity verified but no address history on file",
        ));
    }
    if !has_kind(facts, FactKind::DateOfBirth) {
        gaps.push(Gap::new(
            GapKind::MissingDateOfBirth,
            InformationType::Identity,
            GapPriority::High,
            "date of birth not confirmed by any source",
        ));
    }
    gaps
}

fn employment_gaps(facts: &[Fact]) -> Vec<Gap> {
    let employers: Vec<&Fact> = facts
        .iter()
        .filter(|f| f.fact_type == FactKind::Employer)
        .collect();

    if employers.is_empty() {
        return vec![Gap::new(
            GapKind::NoEmploymentFound,
            InformationType::Employment,
            GapPriority::High,
            "no employment history found",
        )];
    }

    // An employer with no end date that is not marked current reads as
    // an unverified span rather than a present-day job.
    let mut gaps = Vec::new();
    for fact in employers {
        let Some(details) = &fact.details else { continue };
        let end_missing = details.get("end_date").map_or(true, |v| v.is_null());
        let current = details
            .get("current")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if end_missing && !current {
            gaps.push(Gap::new(
                GapKind::MissingEndDate,
                InformationType::Employment,
                GapPriority::Medium,
                format!("employment span at {} has no end date", fact.value),
            ));
        }
    }
    gaps
}

fn education_gaps(facts: &[Fact]) -> Vec<Gap> {
    let has_school = has_kind(facts, FactKind::School);
    if !has_school {
        return vec![Gap::new(
            GapKind::NoEducationFound,
            InformationType::Education,
            GapPriority::Medium,
            "no education history found",
        )];
    }
    if !has_kind(facts, FactKind::Degree) {
        return vec![Gap::new(
            GapKind::MissingDegreeDetail,
            InformationType::Education,
            GapPriority::Medium,
            "school attendance found but no degree detail",
        )];
    }
    Vec::new()
}

/// Absence of criminal records is usually the expected, good outcome.
/// Flagged low-priority and non-queryable so refinement never burns
/// budget chasing it.
fn criminal_gaps(facts: &[Fact]) -> Vec<Gap> {
    if facts.is_empty() {
        return vec![Gap::new(
            GapKind::NoCriminalData,
            InformationType::Criminal,
            GapPriority::Low,
            "no criminal data returned by any jurisdiction searched",
        )
        .non_queryable()];
    }
    Vec::new()
}

fn default_gaps(info_type: InformationType, facts: &[Fact]) -> Vec<Gap> {
    if facts.is_empty() {
        return vec![Gap::new(
            GapKind::NoRecordsFound,
            info_type,
            GapPriority::Medium,
            format!("no {info_type} records found"),
        )];
    }
    Vec::new()
}

fn single_source_gap(info_type: InformationType, facts: &[Fact]) -> Option<Gap> {
    if facts.is_empty() {
        return None;
    }
    let providers: BTreeSet<&str> = facts.iter().map(|f| f.source_provider.as_str()).collect();
    if providers.len() > 1 {
        return None;
    }
    Some(Gap::new(
        GapKind::SingleSourceOnly,
        info_type,
        GapPriority::Low,
        format!("all {info_type} facts come from a single provider"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::types::Confidence;
    use serde_json::json;

    fn fact(kind: FactKind, value: &str, provider: &str) -> Fact {
        Fact::new(kind, value, provider, Confidence::new(0.8))
    }

    #[test]
    fn empty_identity_flags_missing_entirely() {
        let gaps = analyze(InformationType::Identity, &[]);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_type, GapKind::NoIdentityFound);
        assert!(gaps[0].can_query);
    }

    #[test]
    fn identity_without_address_or_dob_flags_both() {
        let facts = vec![fact(FactKind::Name, "Jane Doe", "a")];
        let kinds: Vec<GapKind> = analyze(InformationType::Identity, &facts)
            .into_iter()
            .map(|g| g.gap_type)
            .collect();
        assert!(kinds.contains(&GapKind::MissingAddressHistory));
        assert!(kinds.contains(&GapKind::MissingDateOfBirth));
    }

    #[test]
    fn open_ended_employment_flags_missing_end_date() {
        let facts = vec![fact(FactKind::Employer, "Initech", "a")
            .with_details(json!({"end_date": null, "current": false}))];
        let gaps = analyze(InformationType::Employment, &facts);
        assert!(gaps.iter().any(|g| g.gap_type == GapKind::MissingEndDate));
    }

    #[test]
    fn current_employment_is_not_a_gap() {
        let facts = vec![
            fact(FactKind::Employer, "Initech", "a")
                .with_details(json!({"end_date": null, "current": true})),
            fact(FactKind::Employer, "Initech", "b")
                .with_details(json!({"end_date": null, "current": true})),
        ];
        let gaps = analyze(InformationType::Employment, &facts);
        assert!(gaps.is_empty());
    }

    #[test]
    fn empty_criminal_is_low_priority_and_not_queryable() {
        let gaps = analyze(InformationType::Criminal, &[]);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_type, GapKind::NoCriminalData);
        assert_eq!(gaps[0].priority, GapPriority::Low);
        assert!(!gaps[0].can_query);
    }

    #[test]
    fn single_provider_coverage_flags_diversity_gap() {
        let facts = vec![
            fact(FactKind::SanctionsClear, "clear", "a"),
            fact(FactKind::SanctionsClear, "clear", "a"),
        ];
        let gaps = analyze(InformationType::Sanctions, &facts);
        assert!(gaps.iter().any(|g| g.gap_type == GapKind::SingleSourceOnly));
    }

    #[test]
    fn school_without_degree_flags_detail_gap() {
        let facts = vec![
            fact(FactKind::School, "State University", "a"),
            fact(FactKind::School, "State University", "b"),
        ];
        let gaps = analyze(InformationType::Education, &facts);
        assert!(gaps
            .iter()
            .any(|g| g.gap_type == GapKind::MissingDegreeDetail));
    }
}
