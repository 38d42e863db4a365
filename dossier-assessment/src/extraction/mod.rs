//! Fact extraction registry.
//!
//! One module per payload family. Dispatch is an exhaustive match on the
//! normalized payload union, so a new payload shape fails to compile
//! until it gets an extraction rule; payloads the normalizer could not
//! model fall through to the generic list-scanning path.

pub mod education;
pub mod employment;
pub mod generic;
pub mod identity;
pub mod network;
pub mod records;
pub mod screening;

use dossier_core::models::{CheckPayload, Fact, QueryResult};

/// Extract facts from one successful result.
pub fn extract_facts(result: &QueryResult) -> Vec<Fact> {
    let provider = result.provider_id.as_str();
    match &result.normalized_data {
        CheckPayload::Identity(record) => identity::extract(record, provider),
        CheckPayload::Employment { employers } => employment::extract(employers, provider),
        CheckPayload::Education { schools } => education::extract(schools, provider),
        CheckPayload::Criminal { records, clear } => {
            records::extract_criminal(records, *clear, provider)
        }
        CheckPayload::Civil { filings } => records::extract_civil(filings, provider),
        CheckPayload::Financial {
            credit_score,
            bankruptcies,
            liens,
        } => records::extract_financial(*credit_score, bankruptcies, liens, provider),
        CheckPayload::Licenses { licenses } => records::extract_licenses(licenses, provider),
        CheckPayload::Regulatory { disclosures } => {
            records::extract_regulatory(disclosures, provider)
        }
        CheckPayload::Sanctions { matches, clear } => {
            screening::extract_sanctions(matches, *clear, provider)
        }
        CheckPayload::Media { articles } => screening::extract_media(articles, provider),
        CheckPayload::Network { contacts } => network::extract(contacts, provider),
        CheckPayload::Generic { data } => generic::extract(data, provider),
    }
}
