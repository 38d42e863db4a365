//! First-iteration query planning, enriched from the knowledge base:
//! name variants, date of birth, SSN trace, known jurisdictions for
//! criminal targeting, known employers/schools for media search terms.

use tracing::debug;

use dossier_core::config::PlannerConfig;
use dossier_core::constants::{PRIORITY_DEFAULT, PRIORITY_SANCTIONS};
use dossier_core::models::{CheckType, ProviderQuery, SubjectIdentifiers};
use dossier_core::types::{InformationType, ServiceTier};
use dossier_core::KnowledgeBase;

use crate::dedup::dedup_and_cap;

pub struct QueryPlanner {
    config: PlannerConfig,
}

impl QueryPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Build the first iteration's batch for one information type.
    ///
    /// Returns an empty batch (not an error) when no subject name is
    /// known; there is nothing meaningful to ask a provider.
    pub fn plan_queries(
        &self,
        info_type: InformationType,
        knowledge: &KnowledgeBase,
        subject: &SubjectIdentifiers,
        tier: ServiceTier,
    ) -> Vec<ProviderQuery> {
        let Some(name) = knowledge.primary_name() else {
            debug!(info_type = %info_type, "no subject name known; empty plan");
            return Vec::new();
        };

        let mut queries = match info_type {
            InformationType::Identity => self.plan_identity(name, knowledge),
            InformationType::Employment => self.plan_employment(name, knowledge),
            InformationType::Education => self.plan_education(name, knowledge),
            InformationType::Criminal => self.plan_criminal(name, knowledge),
            InformationType::Civil => self.plan_civil(name, knowledge),
            InformationType::Financial => self.plan_financial(name, knowledge),
            InformationType::Licenses => self.plan_licenses(name, knowledge),
            InformationType::Regulatory => self.plan_regulatory(name, knowledge),
            InformationType::Sanctions => self.plan_sanctions(knowledge),
            InformationType::AdverseMedia => self.plan_adverse_media(name, knowledge),
            InformationType::DigitalFootprint => self.plan_digital_footprint(name),
            InformationType::NetworkD2 => self.plan_network_d2(name, knowledge),
            InformationType::NetworkD3 => self.plan_network_d3(knowledge),
            InformationType::Reconciliation => self.plan_reconciliation(name, knowledge),
        };

        // Role-specific circumstances the subject supplied ride along.
        if let Some(role) = subject.role_category.as_deref() {
            for q in &mut queries {
                q.params.insert("role_category".to_string(), role.to_string());
            }
        }

        // Tier gating: enhanced-only check types vanish for standard tier.
        queries.retain(|q| q.check_type.allowed_for(tier));

        let queries = dedup_and_cap(queries, self.config.max_queries_per_iteration);
        debug!(
            info_type = %info_type,
            count = queries.len(),
            "planned first-iteration queries"
        );
        queries
    }

    fn base(
        &self,
        info_type: InformationType,
        check: CheckType,
        name: &str,
        priority: u8,
    ) -> ProviderQuery {
        ProviderQuery::new(info_type, check, priority).with_param("name", name)
    }

    fn plan_identity(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Identity;
        let mut out = vec![self.base(t, CheckType::IdentityVerification, name, PRIORITY_DEFAULT)];
        if let Some(dob) = kb.date_of_birth.as_deref() {
            out[0].params.insert("dob".to_string(), dob.to_string());
        }
        if let Some(ssn) = kb.ssn_last4.as_deref() {
            out.push(
                self.base(t, CheckType::SsnTrace, name, PRIORITY_DEFAULT)
                    .with_param("ssn_last4", ssn),
            );
        }
        out.push(self.base(t, CheckType::AddressHistory, name, PRIORITY_DEFAULT));
        out
    }

    fn plan_employment(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Employment;
        if kb.employers.is_empty() {
            return vec![self.base(t, CheckType::EmploymentVerification, name, PRIORITY_DEFAULT)];
        }
        kb.employers
            .iter()
            .map(|employer| {
                self.base(t, CheckType::EmploymentVerification, name, PRIORITY_DEFAULT)
                    .with_param("employer", employer.clone())
            })
            .collect()
    }

    fn plan_education(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Education;
        if kb.schools.is_empty() {
            return vec![self.base(t, CheckType::EducationVerification, name, PRIORITY_DEFAULT)];
        }
        kb.schools
            .iter()
            .map(|school| {
                self.base(t, CheckType::EducationVerification, name, PRIORITY_DEFAULT)
                    .with_param("school", school.clone())
            })
            .collect()
    }

    /// Criminal queries target the jurisdictions the identity phase
    /// established. Federal always runs; county/state fan out per known
    /// address jurisdiction.
    fn plan_criminal(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Criminal;
        let (counties, states) = kb.known_jurisdictions();
        let mut out = vec![self.base(t, CheckType::FederalCriminal, name, PRIORITY_DEFAULT)];
        for county in counties {
            out.push(
                self.base(t, CheckType::CountyCriminal, name, PRIORITY_DEFAULT)
                    .with_param("county", county),
            );
        }
        for state in states {
            out.push(
                self.base(t, CheckType::StateCriminal, name, PRIORITY_DEFAULT)
                    .with_param("state", state),
            );
        }
        if let Some(dob) = kb.date_of_birth.as_deref() {
            for q in &mut out {
                q.params.insert("dob".to_string(), dob.to_string());
            }
        }
        out
    }

    fn plan_civil(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Civil;
        let (_, states) = kb.known_jurisdictions();
        if states.is_empty() {
            return vec![self.base(t, CheckType::CivilRecords, name, PRIORITY_DEFAULT)];
        }
        states
            .into_iter()
            .map(|state| {
                self.base(t, CheckType::CivilRecords, name, PRIORITY_DEFAULT)
                    .with_param("state", state)
            })
            .collect()
    }

    fn plan_financial(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Financial;
        let mut credit = self.base(t, CheckType::CreditHeader, name, PRIORITY_DEFAULT);
        if let Some(ssn) = kb.ssn_last4.as_deref() {
            credit.params.insert("ssn_last4".to_string(), ssn.to_string());
        }
        vec![
            credit,
            self.base(t, CheckType::BankruptcySearch, name, PRIORITY_DEFAULT),
        ]
    }

    fn plan_licenses(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Licenses;
        let (_, states) = kb.known_jurisdictions();
        let mut out = vec![self.base(t, CheckType::ProfessionalLicense, name, PRIORITY_DEFAULT)];
        for state in states {
            out.push(
                self.base(t, CheckType::ProfessionalLicense, name, PRIORITY_DEFAULT)
                    .with_param("state", state),
            );
        }
        out
    }

    fn plan_regulatory(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Regulatory;
        if kb.employers.is_empty() {
            return vec![self.base(t, CheckType::RegulatoryDisclosure, name, PRIORITY_DEFAULT)];
        }
        kb.employers
            .iter()
            .map(|employer| {
                self.base(t, CheckType::RegulatoryDisclosure, name, PRIORITY_DEFAULT)
                    .with_param("employer", employer.clone())
            })
            .collect()
    }

    /// Sanctions and watchlist screens always run at fixed top priority
    /// and screen every known name variant.
    fn plan_sanctions(&self, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Sanctions;
        kb.name_variants
            .iter()
            .flat_map(|variant| {
                [
                    self.base(t, CheckType::SanctionsScreen, variant, PRIORITY_SANCTIONS),
                    self.base(t, CheckType::WatchlistScreen, variant, PRIORITY_SANCTIONS),
                ]
            })
            .collect()
    }

    /// Adverse-media search terms pair the subject's name with each known
    /// employer and school to cut down on false positives.
    fn plan_adverse_media(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::AdverseMedia;
        let mut out = vec![self.base(t, CheckType::MediaSearch, name, PRIORITY_DEFAULT)];
        for org in kb.employers.iter().chain(kb.schools.iter()) {
            out.push(
                self.base(t, CheckType::MediaSearch, name, PRIORITY_DEFAULT)
                    .with_param("context_term", org.clone()),
            );
        }
        out
    }

    fn plan_digital_footprint(&self, name: &str) -> Vec<ProviderQuery> {
        vec![self.base(
            InformationType::DigitalFootprint,
            CheckType::SocialMediaScan,
            name,
            PRIORITY_DEFAULT,
        )]
    }

    fn plan_network_d2(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::NetworkD2;
        let mut out = vec![self.base(t, CheckType::AssociateSearch, name, PRIORITY_DEFAULT)];
        for employer in &kb.employers {
            out.push(
                self.base(t, CheckType::CorporateRegistry, name, PRIORITY_DEFAULT)
                    .with_param("organization", employer.clone()),
            );
        }
        out
    }

    /// Degree-3 network fans out from the people degree-2 discovered.
    fn plan_network_d3(&self, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::NetworkD3;
        kb.known_people()
            .into_iter()
            .map(|person| {
                self.base(t, CheckType::AssociateSearch, &person.name, PRIORITY_DEFAULT)
                    .with_param("via_subject", person.relation.clone().unwrap_or_default())
            })
            .collect()
    }

    /// Reconciliation re-verifies the identity anchors against what the
    /// investigation accumulated.
    fn plan_reconciliation(&self, name: &str, kb: &KnowledgeBase) -> Vec<ProviderQuery> {
        let t = InformationType::Reconciliation;
        let mut q = self
            .base(t, CheckType::IdentityVerification, name, PRIORITY_DEFAULT)
            .with_param("mode", "reverify");
        if let Some(dob) = kb.date_of_birth.as_deref() {
            q.params.insert("dob".to_string(), dob.to_string());
        }
        vec![q]
    }
}

impl Default for QueryPlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
