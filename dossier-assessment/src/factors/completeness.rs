//! Completeness factor: found facts against the expected count for the
//! type, capped at 1.0.

use dossier_core::types::InformationType;

/// How many facts a reasonably thorough investigation of one type is
/// expected to surface. Deliberately modest: hitting the expectation
/// means "covered", not "exhaustive".
pub fn expected_fact_count(info_type: InformationType) -> usize {
    match info_type {
        InformationType::Identity => 5,
        InformationType::Employment => 3,
        InformationType::Education => 2,
        InformationType::Criminal
        | InformationType::Civil
        | InformationType::Licenses
        | InformationType::Regulatory
        | InformationType::Sanctions
        | InformationType::Reconciliation => 1,
        InformationType::Financial
        | InformationType::AdverseMedia
        | InformationType::DigitalFootprint => 2,
        InformationType::NetworkD2 | InformationType::NetworkD3 => 3,
    }
}

pub fn calculate(info_type: InformationType, fact_count: usize) -> f64 {
    let expected = expected_fact_count(info_type);
    (fact_count as f64 / expected as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_at_one() {
        assert_eq!(calculate(InformationType::Sanctions, 10), 1.0);
    }

    #[test]
    fn partial_coverage_is_fractional() {
        assert_eq!(calculate(InformationType::Identity, 2), 0.4);
    }

    #[test]
    fn zero_facts_zero_score() {
        for info_type in InformationType::ALL {
            assert_eq!(calculate(info_type, 0), 0.0);
        }
    }
}
