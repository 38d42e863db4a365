use std::fmt;

use serde::{Deserialize, Serialize};

/// A category of background-check data. Immutable identity of what a
/// single SAR loop investigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InformationType {
    Identity,
    Employment,
    Education,
    Criminal,
    Civil,
    Financial,
    Licenses,
    Regulatory,
    Sanctions,
    AdverseMedia,
    DigitalFootprint,
    NetworkD2,
    NetworkD3,
    Reconciliation,
}

impl InformationType {
    /// Every information type, in declaration order.
    pub const ALL: [InformationType; 14] = [
        InformationType::Identity,
        InformationType::Employment,
        InformationType::Education,
        InformationType::Criminal,
        InformationType::Civil,
        InformationType::Financial,
        InformationType::Licenses,
        InformationType::Regulatory,
        InformationType::Sanctions,
        InformationType::AdverseMedia,
        InformationType::DigitalFootprint,
        InformationType::NetworkD2,
        InformationType::NetworkD3,
        InformationType::Reconciliation,
    ];

    /// Foundation types gate every later phase and get a stricter
    /// confidence threshold plus extra weight in the investigation aggregate.
    pub fn is_foundation(self) -> bool {
        matches!(
            self,
            InformationType::Identity | InformationType::Employment | InformationType::Education
        )
    }

    /// Snake-case label, stable across serialization and display.
    pub fn as_str(self) -> &'static str {
        match self {
            InformationType::Identity => "identity",
            InformationType::Employment => "employment",
            InformationType::Education => "education",
            InformationType::Criminal => "criminal",
            InformationType::Civil => "civil",
            InformationType::Financial => "financial",
            InformationType::Licenses => "licenses",
            InformationType::Regulatory => "regulatory",
            InformationType::Sanctions => "sanctions",
            InformationType::AdverseMedia => "adverse_media",
            InformationType::DigitalFootprint => "digital_footprint",
            InformationType::NetworkD2 => "network_d2",
            InformationType::NetworkD3 => "network_d3",
            InformationType::Reconciliation => "reconciliation",
        }
    }
}

impl fmt::Display for InformationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
