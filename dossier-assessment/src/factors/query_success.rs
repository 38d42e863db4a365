//! Query success factor: successful queries over queries executed this
//! iteration. Unlike the other factors this one is per-batch, so a run
//! of provider outages drags the score for the iteration it happened in
//! without poisoning later iterations.

use dossier_core::models::{QueryResult, QueryStatus};

pub fn calculate(results: &[QueryResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let successes = results
        .iter()
        .filter(|r| r.status == QueryStatus::Success)
        .count();
    successes as f64 / results.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::models::{CheckPayload, CheckType};
    use uuid::Uuid;

    fn result(status: QueryStatus) -> QueryResult {
        QueryResult {
            query_id: Uuid::new_v4().to_string(),
            provider_id: "acme".into(),
            check_type: CheckType::IdentityVerification,
            status,
            normalized_data: CheckPayload::empty(),
            cache_hit: false,
            latency_ms: 12,
        }
    }

    #[test]
    fn mixed_batch() {
        let results = vec![
            result(QueryStatus::Success),
            result(QueryStatus::Timeout),
            result(QueryStatus::Success),
            result(QueryStatus::Failed),
        ];
        assert_eq!(calculate(&results), 0.5);
    }

    #[test]
    fn no_queries_is_zero() {
        assert_eq!(calculate(&[]), 0.0);
    }
}
