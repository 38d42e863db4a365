use serde::{Deserialize, Serialize};

use crate::types::InformationType;

use super::entity::DiscoveredEntity;
use super::fact::Fact;
use super::gap::Gap;
use super::inconsistency::DetectedInconsistency;

/// The five confidence factors, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ConfidenceFactors {
    /// Recognized facts vs the expected count for the type, capped at 1.0.
    pub completeness: f64,
    /// Fraction of distinct (kind, value) groups confirmed by ≥2 providers.
    pub corroboration: f64,
    /// Successful queries / total queries.
    pub query_success: f64,
    /// Mean per-fact confidence.
    pub fact_confidence: f64,
    /// Distinct source providers / 2, capped at 1.0.
    pub source_diversity: f64,
}

impl ConfidenceFactors {
    /// Weighted overall score. Always in [0.0, 1.0] when the weights sum
    /// to 1.0, which `FactorWeights::validate` guarantees.
    pub fn overall(&self, weights: &FactorWeights) -> f64 {
        let score = self.completeness * weights.completeness
            + self.corroboration * weights.corroboration
            + self.query_success * weights.query_success
            + self.fact_confidence * weights.fact_confidence
            + self.source_diversity * weights.source_diversity;
        score.clamp(0.0, 1.0)
    }
}

/// Weights for the five factors. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub completeness: f64,
    pub corroboration: f64,
    pub query_success: f64,
    pub fact_confidence: f64,
    pub source_diversity: f64,
}

impl FactorWeights {
    pub fn sum(&self) -> f64 {
        self.completeness
            + self.corroboration
            + self.query_success
            + self.fact_confidence
            + self.source_diversity
    }

    /// Whether the weights sum to 1.0 within floating-point tolerance.
    pub fn validate(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-9
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            completeness: 0.30,
            corroboration: 0.25,
            query_success: 0.20,
            fact_confidence: 0.15,
            source_diversity: 0.10,
        }
    }
}

/// Everything one iteration's assessment produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub info_type: InformationType,
    pub iteration_number: u32,
    pub facts: Vec<Fact>,
    /// Facts not seen in any prior iteration (same kind + equal value).
    pub new_fact_count: usize,
    /// Total facts known for the type after this iteration.
    pub total_fact_count: usize,
    pub factors: ConfidenceFactors,
    pub overall_confidence: f64,
    pub gaps: Vec<Gap>,
    /// New facts per executed query.
    pub info_gain_rate: f64,
    pub discovered_entities: Vec<DiscoveredEntity>,
    pub inconsistencies: Vec<DetectedInconsistency>,
    /// Advisory heuristic only. The iteration controller is the sole
    /// authority on continue/stop; nothing gates control flow on this.
    pub should_continue: bool,
}
