//! The investigation's single shared mutable store of verified subject
//! data and discovered entities.
//!
//! Created once per investigation. Planner and refiner read it; the
//! assessor is the only writer, and assessment commits are serialized by
//! the orchestrator (single-writer discipline; the engine holds the base
//! by `&mut` and never shares it across concurrent type loops). Never a
//! global: every component call takes it explicitly.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::entity::{DiscoveredEntity, EntityKind};
use crate::models::fact::{Fact, FactKind};
use crate::models::payload::AddressRecord;
use crate::models::subject::SubjectIdentifiers;

/// Accumulated verified knowledge about the subject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Verified name variants; the first seeded name is primary.
    pub name_variants: Vec<String>,
    pub date_of_birth: Option<String>,
    pub ssn_last4: Option<String>,
    pub addresses: Vec<AddressRecord>,
    pub employers: BTreeSet<String>,
    pub schools: BTreeSet<String>,
    pub entities: Vec<DiscoveredEntity>,
}

impl KnowledgeBase {
    /// Seed from the caller-supplied identifiers.
    pub fn from_subject(subject: &SubjectIdentifiers) -> Self {
        let mut kb = Self::default();
        if let Some(name) = subject.full_name.as_deref() {
            if !name.trim().is_empty() {
                kb.name_variants.push(name.trim().to_string());
            }
        }
        kb.date_of_birth = subject.date_of_birth.clone();
        kb.ssn_last4 = subject.ssn_last4.clone();
        if let Some(addr) = subject.current_address.as_deref() {
            kb.addresses.push(AddressRecord {
                line: addr.to_string(),
                county: None,
                state: None,
            });
        }
        kb
    }

    /// The best-known subject name, if any.
    pub fn primary_name(&self) -> Option<&str> {
        self.name_variants.first().map(String::as_str)
    }

    /// Distinct (county, state) jurisdictions from known addresses, for
    /// criminal query targeting.
    pub fn known_jurisdictions(&self) -> (BTreeSet<String>, BTreeSet<String>) {
        let counties = self
            .addresses
            .iter()
            .filter_map(|a| a.county.clone())
            .collect();
        let states = self
            .addresses
            .iter()
            .filter_map(|a| a.state.clone())
            .collect();
        (counties, states)
    }

    /// Merge a recognized fact. Idempotent: merging the same fact twice
    /// leaves the base unchanged.
    pub fn merge_fact(&mut self, fact: &Fact) {
        match fact.fact_type {
            FactKind::Name => {
                if !self.name_variants.iter().any(|n| n == &fact.value) {
                    self.name_variants.push(fact.value.clone());
                }
            }
            FactKind::DateOfBirth => {
                if self.date_of_birth.is_none() {
                    self.date_of_birth = Some(fact.value.clone());
                }
            }
            FactKind::SsnLast4 => {
                if self.ssn_last4.is_none() {
                    self.ssn_last4 = Some(fact.value.clone());
                }
            }
            FactKind::Address => {
                let record = fact
                    .details
                    .as_ref()
                    .and_then(|d| serde_json::from_value::<AddressRecord>(d.clone()).ok())
                    .unwrap_or_else(|| AddressRecord {
                        line: fact.value.clone(),
                        county: None,
                        state: None,
                    });
                if !self.addresses.iter().any(|a| a.line == record.line) {
                    self.addresses.push(record);
                }
            }
            FactKind::Employer => {
                self.employers.insert(fact.value.clone());
            }
            FactKind::School => {
                self.schools.insert(fact.value.clone());
            }
            // Other kinds carry no subject-profile data.
            _ => {}
        }
    }

    /// Record a discovered entity, deduplicated on (name, kind).
    pub fn add_entity(&mut self, entity: DiscoveredEntity) {
        let exists = self
            .entities
            .iter()
            .any(|e| e.name == entity.name && e.entity_kind == entity.entity_kind);
        if !exists {
            self.entities.push(entity);
        }
    }

    /// Discovered people, for network-phase query targeting.
    pub fn known_people(&self) -> Vec<&DiscoveredEntity> {
        self.entities
            .iter()
            .filter(|e| e.entity_kind == EntityKind::Person)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Confidence;

    #[test]
    fn merge_is_idempotent() {
        let mut kb = KnowledgeBase::default();
        let fact = Fact::new(FactKind::Employer, "Initech", "prov-a", Confidence::new(0.9));
        kb.merge_fact(&fact);
        kb.merge_fact(&fact);
        assert_eq!(kb.employers.len(), 1);

        let name = Fact::new(FactKind::Name, "Jane Doe", "prov-a", Confidence::new(0.9));
        kb.merge_fact(&name);
        kb.merge_fact(&name);
        assert_eq!(kb.name_variants, vec!["Jane Doe".to_string()]);
    }

    #[test]
    fn seeded_name_stays_primary() {
        let mut kb = KnowledgeBase::from_subject(&SubjectIdentifiers::named("Jane Doe"));
        let variant = Fact::new(FactKind::Name, "J. Doe", "prov-b", Confidence::new(0.7));
        kb.merge_fact(&variant);
        assert_eq!(kb.primary_name(), Some("Jane Doe"));
        assert_eq!(kb.name_variants.len(), 2);
    }
}
