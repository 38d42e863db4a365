//! Extraction for screening payloads: sanctions/watchlist and media.

use dossier_core::models::{Fact, FactKind, MediaArticle, SanctionsHit};
use dossier_core::types::Confidence;

const CLEAR_CONFIDENCE: f64 = 0.9;
const ARTICLE_CONFIDENCE: f64 = 0.7;

pub fn extract_sanctions(matches: &[SanctionsHit], clear: bool, provider: &str) -> Vec<Fact> {
    if matches.is_empty() && clear {
        return vec![Fact::new(
            FactKind::SanctionsClear,
            "clear",
            provider,
            Confidence::new(CLEAR_CONFIDENCE),
        )];
    }

    matches
        .iter()
        .map(|hit| {
            let value = format!("{}: {}", hit.list_name, hit.matched_name);
            // A sanctions hit is only as good as its name-match strength.
            Fact::new(
                FactKind::SanctionsMatch,
                value,
                provider,
                Confidence::new(hit.match_strength),
            )
        })
        .collect()
}

pub fn extract_media(articles: &[MediaArticle], provider: &str) -> Vec<Fact> {
    let c = Confidence::new(ARTICLE_CONFIDENCE);
    articles
        .iter()
        .map(|a| {
            let fact = Fact::new(FactKind::MediaArticle, &a.headline, provider, c);
            match serde_json::to_value(a) {
                Ok(details) => fact.with_details(details),
                Err(_) => fact,
            }
        })
        .collect()
}
