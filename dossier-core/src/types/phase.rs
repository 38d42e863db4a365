use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered group of information types. Phases are always processed in
/// declaration order; there is no way to run `Network` before `Records`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestigationPhase {
    Foundation,
    Records,
    Intelligence,
    Network,
    Reconciliation,
}

impl InvestigationPhase {
    /// All phases in processing order.
    pub const ORDER: [InvestigationPhase; 5] = [
        InvestigationPhase::Foundation,
        InvestigationPhase::Records,
        InvestigationPhase::Intelligence,
        InvestigationPhase::Network,
        InvestigationPhase::Reconciliation,
    ];

    /// The phase after this one, or `None` on the terminal phase.
    pub fn next(self) -> Option<InvestigationPhase> {
        let idx = Self::ORDER.iter().position(|p| *p == self)?;
        Self::ORDER.get(idx + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InvestigationPhase::Foundation => "foundation",
            InvestigationPhase::Records => "records",
            InvestigationPhase::Intelligence => "intelligence",
            InvestigationPhase::Network => "network",
            InvestigationPhase::Reconciliation => "reconciliation",
        }
    }
}

impl fmt::Display for InvestigationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_in_fixed_order() {
        assert_eq!(
            InvestigationPhase::Foundation.next(),
            Some(InvestigationPhase::Records)
        );
        assert_eq!(
            InvestigationPhase::Network.next(),
            Some(InvestigationPhase::Reconciliation)
        );
    }

    #[test]
    fn terminal_phase_has_no_next() {
        assert_eq!(InvestigationPhase::Reconciliation.next(), None);
    }
}
