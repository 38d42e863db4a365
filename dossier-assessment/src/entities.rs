//! Entity discovery: lift organizations and people out of newly
//! extracted facts so later phases can expand the subject's network.

use dossier_core::models::{DiscoveredEntity, EntityKind, Fact, FactKind};

/// Derive entities from a batch of new facts. Only facts from this
/// iteration are scanned; entities found in previous iterations are
/// already in the knowledge base.
pub fn discover(new_facts: &[Fact]) -> Vec<DiscoveredEntity> {
    let mut entities = Vec::new();
    for fact in new_facts {
        match fact.fact_type {
            FactKind::Employer => entities.push(DiscoveredEntity::new(
                &fact.value,
                EntityKind::Organization,
                Some("employer".to_string()),
                &fact.id,
            )),
            FactKind::School => entities.push(DiscoveredEntity::new(
                &fact.value,
                EntityKind::Organization,
                Some("school".to_string()),
                &fact.id,
            )),
            kind if kind.is_person_relation() => entities.push(DiscoveredEntity::new(
                &fact.value,
                EntityKind::Person,
                Some(kind.as_str().to_string()),
                &fact.id,
            )),
            _ => {}
        }
    }
    entities
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::types::Confidence;

    fn fact(kind: FactKind, value: &str) -> Fact {
        Fact::new(kind, value, "acme", Confidence::new(0.8))
    }

    #[test]
    fn employers_and_schools_become_organizations() {
        let facts = vec![
            fact(FactKind::Employer, "Initech"),
            fact(FactKind::School, "State University"),
        ];
        let entities = discover(&facts);
        assert_eq!(entities.len(), 2);
        assert!(entities
            .iter()
            .all(|e| e.entity_kind == EntityKind::Organization));
    }

    #[test]
    fn relation_facts_become_people() {
        let facts = vec![fact(FactKind::Supervisor, "Bill Lumbergh")];
        let entities = discover(&facts);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].entity_kind, EntityKind::Person);
        assert_eq!(entities[0].relation.as_deref(), Some("supervisor"));
    }

    #[test]
    fn plain_facts_produce_no_entities() {
        let facts = vec![fact(FactKind::Name, "Jane Doe")];
        assert!(discover(&facts).is_empty());
    }
}
