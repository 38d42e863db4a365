//! Tests for dossier-planning: first-iteration plans and gap refinement.

use dossier_core::config::PlannerConfig;
use dossier_core::constants::PRIORITY_SANCTIONS;
use dossier_core::models::{
    AddressRecord, CheckType, Gap, GapKind, GapPriority, SubjectIdentifiers,
};
use dossier_core::types::{InformationType, ServiceTier};
use dossier_core::KnowledgeBase;
use dossier_planning::{QueryPlanner, QueryRefiner};

fn knowledge_with_name() -> KnowledgeBase {
    KnowledgeBase::from_subject(&SubjectIdentifiers::named("Jane Doe"))
}

// ─── Planner ───

#[test]
fn empty_knowledge_base_plans_nothing() {
    let planner = QueryPlanner::default();
    let kb = KnowledgeBase::default();
    let queries = planner.plan_queries(
        InformationType::Identity,
        &kb,
        &SubjectIdentifiers::default(),
        ServiceTier::Standard,
    );
    assert!(queries.is_empty(), "no subject name must yield zero queries");
}

#[test]
fn sanctions_queries_always_get_top_priority() {
    let planner = QueryPlanner::default();
    let kb = knowledge_with_name();
    let queries = planner.plan_queries(
        InformationType::Sanctions,
        &kb,
        &SubjectIdentifiers::named("Jane Doe"),
        ServiceTier::Standard,
    );
    assert!(!queries.is_empty());
    for q in &queries {
        assert_eq!(q.priority, PRIORITY_SANCTIONS, "{} lost its priority", q.check_type);
    }
    assert!(queries.iter().any(|q| q.check_type == CheckType::SanctionsScreen));
    assert!(queries.iter().any(|q| q.check_type == CheckType::WatchlistScreen));
}

#[test]
fn criminal_plan_targets_known_jurisdictions() {
    let planner = QueryPlanner::default();
    let mut kb = knowledge_with_name();
    kb.addresses.push(AddressRecord {
        line: "12 Oak St, Travis".to_string(),
        county: Some("Travis".to_string()),
        state: Some("TX".to_string()),
    });

    let queries = planner.plan_queries(
        InformationType::Criminal,
        &kb,
        &SubjectIdentifiers::named("Jane Doe"),
        ServiceTier::Standard,
    );

    assert!(queries.iter().any(|q| q.check_type == CheckType::FederalCriminal));
    assert!(queries
        .iter()
        .any(|q| q.check_type == CheckType::CountyCriminal
            && q.params.get("county").map(String::as_str) == Some("Travis")));
    assert!(queries
        .iter()
        .any(|q| q.check_type == CheckType::StateCriminal
            && q.params.get("state").map(String::as_str) == Some("TX")));
}

#[test]
fn standard_tier_drops_enhanced_check_types() {
    let planner = QueryPlanner::default();
    let kb = knowledge_with_name();

    let standard = planner.plan_queries(
        InformationType::DigitalFootprint,
        &kb,
        &SubjectIdentifiers::named("Jane Doe"),
        ServiceTier::Standard,
    );
    assert!(standard.is_empty(), "social media scan needs enhanced tier");

    let enhanced = planner.plan_queries(
        InformationType::DigitalFootprint,
        &kb,
        &SubjectIdentifiers::named("Jane Doe"),
        ServiceTier::Enhanced,
    );
    assert_eq!(enhanced.len(), 1);
}

#[test]
fn plan_respects_per_iteration_cap_and_dedups() {
    let config = PlannerConfig {
        max_queries_per_iteration: 3,
        ..Default::default()
    };
    let planner = QueryPlanner::new(config);
    let mut kb = knowledge_with_name();
    for n in 0..10 {
        kb.employers.insert(format!("Employer {n}"));
    }

    let queries = planner.plan_queries(
        InformationType::AdverseMedia,
        &kb,
        &SubjectIdentifiers::named("Jane Doe"),
        ServiceTier::Standard,
    );
    assert!(queries.len() <= 3, "cap must hold, got {}", queries.len());

    // Identical (provider, check_type, params) tuples never repeat.
    for (i, a) in queries.iter().enumerate() {
        for b in &queries[i + 1..] {
            assert!(
                !(a.check_type == b.check_type && a.params == b.params),
                "duplicate query survived dedup"
            );
        }
    }
}

// ─── Refiner ───

#[test]
fn refinement_tags_gap_and_iteration() {
    let refiner = QueryRefiner::default();
    let kb = knowledge_with_name();
    let gaps = vec![Gap::new(
        GapKind::NoEmploymentFound,
        InformationType::Employment,
        GapPriority::High,
        "no employer facts after first pass",
    )];

    let queries = refiner.refine_queries(
        InformationType::Employment,
        &gaps,
        &kb,
        ServiceTier::Standard,
        1,
    );

    assert!(!queries.is_empty(), "queryable gap must produce queries");
    for q in &queries {
        assert_eq!(q.targeting_gap.as_deref(), Some("no_employment_found"));
        assert_eq!(q.iteration_number, 2);
    }
}

#[test]
fn missing_entirely_gaps_rank_above_incomplete() {
    let refiner = QueryRefiner::new(PlannerConfig {
        max_total_queries: 2,
        max_queries_per_gap: 2,
        ..Default::default()
    });
    let kb = knowledge_with_name();
    // Incomplete gap listed first with the highest priority; the
    // missing-entirely gap must still win the capped slots.
    let gaps = vec![
        Gap::new(
            GapKind::MissingEndDate,
            InformationType::Employment,
            GapPriority::High,
            "open-ended employment record",
        ),
        Gap::new(
            GapKind::NoEmploymentFound,
            InformationType::Employment,
            GapPriority::Medium,
            "nothing found",
        ),
    ];

    let queries = refiner.refine_queries(
        InformationType::Employment,
        &gaps,
        &kb,
        ServiceTier::Standard,
        1,
    );

    assert_eq!(queries.len(), 2);
    assert_eq!(
        queries[0].targeting_gap.as_deref(),
        Some("no_employment_found"),
        "missing-entirely gap must rank first"
    );
}

#[test]
fn non_queryable_gaps_are_skipped() {
    let refiner = QueryRefiner::default();
    let kb = knowledge_with_name();
    let gaps = vec![Gap::new(
        GapKind::NoCriminalData,
        InformationType::Criminal,
        GapPriority::Low,
        "clear result",
    )
    .non_queryable()];

    let queries = refiner.refine_queries(
        InformationType::Criminal,
        &gaps,
        &kb,
        ServiceTier::Standard,
        1,
    );
    assert!(queries.is_empty());
}

#[test]
fn refinement_respects_total_cap() {
    let refiner = QueryRefiner::new(PlannerConfig {
        max_total_queries: 3,
        ..Default::default()
    });
    let kb = knowledge_with_name();
    let gaps: Vec<Gap> = [
        GapKind::NoEmploymentFound,
        GapKind::MissingAddressHistory,
        GapKind::MissingDateOfBirth,
        GapKind::SingleSourceOnly,
    ]
    .into_iter()
    .map(|kind| Gap::new(kind, InformationType::Identity, GapPriority::Medium, "gap"))
    .collect();

    let queries =
        refiner.refine_queries(InformationType::Identity, &gaps, &kb, ServiceTier::Standard, 2);
    assert!(queries.len() <= 3);
    for q in &queries {
        assert_eq!(q.iteration_number, 3);
    }
}
