//! Standalone confidence math: per-type overall score, the effective
//! threshold a type must clear, and the investigation-wide aggregate.

use std::collections::BTreeMap;

use dossier_core::config::IterationConfig;
use dossier_core::constants::{DEFAULT_AGGREGATE_WEIGHT, FOUNDATION_AGGREGATE_WEIGHT};
use dossier_core::models::{ConfidenceFactors, FactorWeights};
use dossier_core::types::{Confidence, InformationType};

#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer {
    pub weights: FactorWeights,
    pub iteration: IterationConfig,
}

impl ConfidenceScorer {
    pub fn new(weights: FactorWeights, iteration: IterationConfig) -> Self {
        Self { weights, iteration }
    }

    /// Weighted overall score for one iteration's factors.
    pub fn overall(&self, factors: &ConfidenceFactors) -> f64 {
        factors.overall(&self.weights)
    }

    /// The confidence bar this type must reach. Foundation types carry a
    /// boosted threshold because every later phase builds on them.
    pub fn threshold_for(&self, info_type: InformationType) -> f64 {
        self.iteration.effective_threshold(info_type.is_foundation())
    }

    pub fn meets_threshold(&self, info_type: InformationType, confidence: f64) -> bool {
        confidence >= self.threshold_for(info_type)
    }

    /// Investigation-wide aggregate: the weighted mean of per-type final
    /// confidences, foundation types weighted heavier.
    pub fn aggregate(
        &self,
        per_type: &BTreeMap<InformationType, Confidence>,
    ) -> Option<Confidence> {
        if per_type.is_empty() {
            return None;
        }
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for (info_type, confidence) in per_type {
            let weight = if info_type.is_foundation() {
                FOUNDATION_AGGREGATE_WEIGHT
            } else {
                DEFAULT_AGGREGATE_WEIGHT
            };
            weighted_sum += confidence.value() * weight;
            weight_total += weight;
        }
        Some(Confidence::new(weighted_sum / weight_total))
    }

    /// The weakest type in the set, for reporting.
    pub fn lowest(
        &self,
        per_type: &BTreeMap<InformationType, Confidence>,
    ) -> Option<(InformationType, Confidence)> {
        per_type
            .iter()
            .min_by(|a, b| a.1.value().total_cmp(&b.1.value()))
            .map(|(t, c)| (*t, *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foundation_threshold_is_boosted() {
        let scorer = ConfidenceScorer::default();
        assert!((scorer.threshold_for(InformationType::Identity) - 0.85).abs() < 1e-12);
        assert!((scorer.threshold_for(InformationType::Criminal) - 0.80).abs() < 1e-12);
        assert!(scorer.meets_threshold(InformationType::Criminal, 0.80));
        assert!(!scorer.meets_threshold(InformationType::Identity, 0.80));
    }

    #[test]
    fn aggregate_weighs_foundation_heavier() {
        let scorer = ConfidenceScorer::default();
        let mut per_type = BTreeMap::new();
        per_type.insert(InformationType::Identity, Confidence::new(0.9));
        per_type.insert(InformationType::Criminal, Confidence::new(0.4));
        // (0.9 * 1.5 + 0.4 * 1.0) / 2.5 = 0.70
        let aggregate = scorer.aggregate(&per_type).unwrap();
        assert!((aggregate.value() - 0.70).abs() < 1e-12);
    }

    #[test]
    fn aggregate_of_nothing_is_none() {
        let scorer = ConfidenceScorer::default();
        assert!(scorer.aggregate(&BTreeMap::new()).is_none());
    }

    #[test]
    fn lowest_picks_the_weakest_type() {
        let scorer = ConfidenceScorer::default();
        let mut per_type = BTreeMap::new();
        per_type.insert(InformationType::Identity, Confidence::new(0.9));
        per_type.insert(InformationType::Employment, Confidence::new(0.3));
        let (info_type, confidence) = scorer.lowest(&per_type).unwrap();
        assert_eq!(info_type, InformationType::Employment);
        assert!((confidence.value() - 0.3).abs() < 1e-12);
    }
}
