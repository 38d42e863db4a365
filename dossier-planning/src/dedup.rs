use std::collections::HashSet;

use dossier_core::models::ProviderQuery;

/// Drop queries whose (provider, check_type, params) tuple repeats,
/// keeping first occurrence, then cap the batch at `max`, preferring
/// higher-priority queries. The sort is stable so equal priorities keep
/// their generation order.
pub fn dedup_and_cap(mut queries: Vec<ProviderQuery>, max: usize) -> Vec<ProviderQuery> {
    let mut seen = HashSet::new();
    queries.retain(|q| {
        let key = (
            q.provider.clone(),
            q.check_type,
            // BTreeMap iteration order is deterministic, so this key is stable.
            q.params
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&"),
        );
        seen.insert(key)
    });

    queries.sort_by(|a, b| b.priority.cmp(&a.priority));
    queries.truncate(max);
    queries
}
