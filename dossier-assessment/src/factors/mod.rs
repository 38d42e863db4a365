//! The 5-factor confidence formula.
//!
//! ```text
//! overall = completeness    × 0.30
//!         + corroboration   × 0.25
//!         + query_success   × 0.20
//!         + fact_confidence × 0.15
//!         + source_diversity× 0.10
//! ```
//!
//! One module per factor; each returns a value in [0.0, 1.0]. Weights
//! live in `FactorWeights` and must sum to 1.0, which keeps the overall
//! score inside [0.0, 1.0] for any input.

pub mod completeness;
pub mod corroboration;
pub mod fact_confidence;
pub mod query_success;
pub mod source_diversity;

use dossier_core::models::{ConfidenceFactors, Fact, QueryResult};
use dossier_core::types::InformationType;

/// Compute all five factors for one iteration.
///
/// `all_facts` is the cumulative fact set for the type (prior iterations
/// plus this one); completeness and corroboration measure total
/// coverage, not one batch. `results` is this iteration's batch only.
pub fn compute(
    info_type: InformationType,
    all_facts: &[Fact],
    results: &[QueryResult],
) -> ConfidenceFactors {
    ConfidenceFactors {
        completeness: completeness::calculate(info_type, all_facts.len()),
        corroboration: corroboration::calculate(all_facts),
        query_success: query_success::calculate(results),
        fact_confidence: fact_confidence::calculate(all_facts),
        source_diversity: source_diversity::calculate(all_facts),
    }
}
