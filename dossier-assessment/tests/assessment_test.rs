//! End-to-end assessment pipeline tests: extraction through scoring,
//! gap analysis, and knowledge-base commits.

use dossier_assessment::{ConfidenceScorer, ResultAssessor};
use dossier_core::models::{
    AddressRecord, CheckPayload, CheckType, EmploymentRecord, FactKind, GapKind,
    IdentityRecord, InconsistencyKind, QueryResult, QueryStatus, SanctionsHit,
};
use dossier_core::types::InformationType;
use dossier_core::KnowledgeBase;
use uuid::Uuid;

fn success(provider: &str, check_type: CheckType, payload: CheckPayload) -> QueryResult {
    QueryResult {
        query_id: Uuid::new_v4().to_string(),
        provider_id: provider.to_string(),
        check_type,
        status: QueryStatus::Success,
        normalized_data: payload,
        cache_hit: false,
        latency_ms: 40,
    }
}

fn failed(provider: &str, check_type: CheckType) -> QueryResult {
    QueryResult {
        query_id: Uuid::new_v4().to_string(),
        provider_id: provider.to_string(),
        check_type,
        status: QueryStatus::Timeout,
        normalized_data: CheckPayload::empty(),
        cache_hit: false,
        latency_ms: 5000,
    }
}

fn identity_payload() -> CheckPayload {
    CheckPayload::Identity(IdentityRecord {
        full_name: Some("Jane Doe".to_string()),
        date_of_birth: Some("1985-03-12".to_string()),
        ssn_last4: Some("1234".to_string()),
        addresses: vec![AddressRecord {
            line: "1 Main St, Springfield".to_string(),
            county: Some("Greene".to_string()),
            state: Some("MO".to_string()),
        }],
        phones: vec!["555-0100".to_string()],
    })
}

#[test]
fn corroborated_identity_clears_foundation_threshold() {
    // Two independent providers confirm the same five identity facts.
    let assessor = ResultAssessor::default();
    let mut kb = KnowledgeBase::default();
    let results = vec![
        success("acme", CheckType::IdentityVerification, identity_payload()),
        success("veritas", CheckType::IdentityVerification, identity_payload()),
    ];

    let outcome = assessor.assess(InformationType::Identity, &results, 1, &[], &mut kb);

    assert_eq!(outcome.new_fact_count, 5);
    assert_eq!(outcome.total_fact_count, 10);
    assert_eq!(outcome.factors.corroboration, 1.0);
    assert_eq!(outcome.factors.source_diversity, 1.0);
    let scorer = ConfidenceScorer::default();
    assert!(outcome.overall_confidence >= scorer.threshold_for(InformationType::Identity));
    assert!(!outcome.should_continue || outcome.gaps.iter().all(|g| !g.can_query));
}

#[test]
fn single_source_identity_stays_below_threshold() {
    let assessor = ResultAssessor::default();
    let mut kb = KnowledgeBase::default();
    let results = vec![success(
        "acme",
        CheckType::IdentityVerification,
        identity_payload(),
    )];

    let outcome = assessor.assess(InformationType::Identity, &results, 1, &[], &mut kb);

    assert_eq!(outcome.factors.corroboration, 0.0);
    assert_eq!(outcome.factors.source_diversity, 0.5);
    let scorer = ConfidenceScorer::default();
    assert!(outcome.overall_confidence < scorer.threshold_for(InformationType::Identity));
    assert!(outcome
        .gaps
        .iter()
        .any(|g| g.gap_type == GapKind::SingleSourceOnly));
    assert!(outcome.should_continue);
}

#[test]
fn no_results_scores_zero_and_flags_missing_entirely() {
    let assessor = ResultAssessor::default();
    let mut kb = KnowledgeBase::default();

    let outcome = assessor.assess(InformationType::Identity, &[], 1, &[], &mut kb);

    assert_eq!(outcome.overall_confidence, 0.0);
    assert_eq!(outcome.info_gain_rate, 0.0);
    assert_eq!(outcome.gaps.len(), 1);
    assert_eq!(outcome.gaps[0].gap_type, GapKind::NoIdentityFound);
}

#[test]
fn reasserted_facts_are_corroboration_not_news() {
    let assessor = ResultAssessor::default();
    let mut kb = KnowledgeBase::default();
    let first = vec![success(
        "acme",
        CheckType::IdentityVerification,
        identity_payload(),
    )];
    let round_one = assessor.assess(InformationType::Identity, &first, 1, &[], &mut kb);
    assert_eq!(round_one.new_fact_count, 5);

    // A second provider repeats the same five facts: zero novelty, but
    // corroboration jumps from 0 to 1.
    let second = vec![success(
        "veritas",
        CheckType::IdentityVerification,
        identity_payload(),
    )];
    let round_two = assessor.assess(
        InformationType::Identity,
        &second,
        2,
        &round_one.facts,
        &mut kb,
    );
    assert_eq!(round_two.new_fact_count, 0);
    assert_eq!(round_two.info_gain_rate, 0.0);
    assert_eq!(round_two.factors.corroboration, 1.0);
    assert!(round_two.overall_confidence > round_one.overall_confidence);
}

#[test]
fn failed_queries_drag_query_success_only_for_their_iteration() {
    let assessor = ResultAssessor::default();
    let mut kb = KnowledgeBase::default();
    let results = vec![
        success("acme", CheckType::IdentityVerification, identity_payload()),
        failed("veritas", CheckType::IdentityVerification),
    ];

    let outcome = assessor.assess(InformationType::Identity, &results, 1, &[], &mut kb);

    assert_eq!(outcome.factors.query_success, 0.5);
    // The failed result contributed no facts.
    assert_eq!(outcome.new_fact_count, 5);
}

#[test]
fn assessment_commits_facts_and_entities_to_knowledge() {
    let assessor = ResultAssessor::default();
    let mut kb = KnowledgeBase::default();
    let results = vec![success(
        "acme",
        CheckType::EmploymentVerification,
        CheckPayload::Employment {
            employers: vec![EmploymentRecord {
                employer: "Initech".to_string(),
                title: Some("Engineer".to_string()),
                start_date: Some("2019-01".to_string()),
                end_date: None,
                current: true,
            }],
        },
    )];

    let outcome = assessor.assess(InformationType::Employment, &results, 1, &[], &mut kb);

    assert!(kb.employers.contains("Initech"));
    assert_eq!(outcome.discovered_entities.len(), 1);
    assert_eq!(kb.entities.len(), 1);
    assert_eq!(kb.entities[0].relation.as_deref(), Some("employer"));
}

#[test]
fn conflicting_dob_across_providers_is_detected() {
    let assessor = ResultAssessor::default();
    let mut kb = KnowledgeBase::default();
    let mut other = identity_payload();
    if let CheckPayload::Identity(record) = &mut other {
        record.date_of_birth = Some("1987-03-12".to_string());
    }
    let results = vec![
        success("acme", CheckType::IdentityVerification, identity_payload()),
        success("veritas", CheckType::IdentityVerification, other),
    ];

    let outcome = assessor.assess(InformationType::Identity, &results, 1, &[], &mut kb);

    assert_eq!(outcome.inconsistencies.len(), 1);
    assert_eq!(
        outcome.inconsistencies[0].inconsistency_type,
        InconsistencyKind::DobMismatch
    );
    assert!((outcome.inconsistencies[0].deception_score - 0.75).abs() < 1e-12);
}

#[test]
fn clear_sanctions_screen_produces_a_clear_fact() {
    let assessor = ResultAssessor::default();
    let mut kb = KnowledgeBase::default();
    let results = vec![
        success(
            "worldcheck",
            CheckType::SanctionsScreen,
            CheckPayload::Sanctions {
                matches: vec![],
                clear: true,
            },
        ),
        success(
            "ofac",
            CheckType::SanctionsScreen,
            CheckPayload::Sanctions {
                matches: vec![],
                clear: true,
            },
        ),
    ];

    let outcome = assessor.assess(InformationType::Sanctions, &results, 1, &[], &mut kb);

    assert_eq!(outcome.new_fact_count, 1);
    assert!(outcome
        .facts
        .iter()
        .all(|f| f.fact_type == FactKind::SanctionsClear));
    assert_eq!(outcome.factors.completeness, 1.0);
}

#[test]
fn sanctions_hit_confidence_tracks_match_strength() {
    let assessor = ResultAssessor::default();
    let mut kb = KnowledgeBase::default();
    let results = vec![success(
        "worldcheck",
        CheckType::SanctionsScreen,
        CheckPayload::Sanctions {
            matches: vec![SanctionsHit {
                list_name: "OFAC SDN".to_string(),
                matched_name: "Jane Doe".to_string(),
                match_strength: 0.65,
            }],
            clear: false,
        },
    )];

    let outcome = assessor.assess(InformationType::Sanctions, &results, 1, &[], &mut kb);

    let hit = outcome
        .facts
        .iter()
        .find(|f| f.fact_type == FactKind::SanctionsMatch)
        .expect("sanctions match fact");
    assert!((hit.confidence.value() - 0.65).abs() < 1e-12);
}
