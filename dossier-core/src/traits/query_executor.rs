use async_trait::async_trait;

use crate::models::query::{ProviderQuery, QueryResult};
use crate::models::subject::SubjectIdentifiers;
use crate::types::{Locale, ServiceTier};

/// External query execution service.
///
/// Owns provider routing, circuit breaking, rate limiting, retries,
/// caching, and timeouts. The engine dispatches each iteration's queries
/// as one batch and suspends until the full batch returns; per-query
/// failure and timeout come back as `QueryResult::status` data, never as
/// an `Err`. An `Err` here means the batch as a whole could not run.
#[async_trait]
pub trait IQueryExecutor: Send + Sync {
    async fn execute_batch(
        &self,
        queries: &[ProviderQuery],
        subject: &SubjectIdentifiers,
        locale: &Locale,
        tier: ServiceTier,
    ) -> Result<Vec<QueryResult>, Box<dyn std::error::Error + Send + Sync>>;
}
