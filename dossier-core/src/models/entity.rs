use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Organization,
    Person,
}

/// An entity discovered during assessment: employers and schools become
/// organizations; associate/colleague/supervisor facts become people.
/// These feed the network phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredEntity {
    pub id: String,
    pub name: String,
    pub entity_kind: EntityKind,
    /// Relation to the subject, when known (e.g. "employer", "supervisor").
    pub relation: Option<String>,
    /// The fact this entity was derived from.
    pub source_fact_id: String,
}

impl DiscoveredEntity {
    pub fn new(
        name: impl Into<String>,
        entity_kind: EntityKind,
        relation: Option<String>,
        source_fact_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            entity_kind,
            relation,
            source_fact_id: source_fact_id.into(),
        }
    }
}
