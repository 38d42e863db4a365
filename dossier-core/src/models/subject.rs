use serde::{Deserialize, Serialize};

/// What the caller knows about the subject when the investigation starts.
/// Seeds the knowledge base and travels with every query batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectIdentifiers {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub ssn_last4: Option<String>,
    pub email: Option<String>,
    pub current_address: Option<String>,
    /// Role category for compliance evaluation (e.g. "finance", "driver").
    pub role_category: Option<String>,
}

impl SubjectIdentifiers {
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            ..Default::default()
        }
    }

    /// Whether there is enough here to plan any query at all.
    pub fn has_name(&self) -> bool {
        self.full_name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}
