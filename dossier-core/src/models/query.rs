use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{InformationType, ServiceTier};

use super::payload::CheckPayload;

/// The kind of provider check a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    IdentityVerification,
    SsnTrace,
    AddressHistory,
    CountyCriminal,
    StateCriminal,
    FederalCriminal,
    CivilRecords,
    CreditHeader,
    BankruptcySearch,
    ProfessionalLicense,
    RegulatoryDisclosure,
    SanctionsScreen,
    WatchlistScreen,
    MediaSearch,
    SocialMediaScan,
    EmploymentVerification,
    EducationVerification,
    CorporateRegistry,
    AssociateSearch,
}

impl CheckType {
    /// Check types only available on the enhanced tier.
    pub fn requires_enhanced(self) -> bool {
        matches!(
            self,
            CheckType::SocialMediaScan | CheckType::CorporateRegistry | CheckType::AssociateSearch
        )
    }

    /// Whether `tier` is allowed to run this check.
    pub fn allowed_for(self, tier: ServiceTier) -> bool {
        !self.requires_enhanced() || tier == ServiceTier::Enhanced
    }

    /// The check a compliance policy is asked about when gating a whole
    /// information type: the broadest check the planner always emits for
    /// that type. A locale that forbids it forbids the type.
    pub fn representative(info_type: InformationType) -> CheckType {
        match info_type {
            InformationType::Identity => CheckType::IdentityVerification,
            InformationType::Employment => CheckType::EmploymentVerification,
            InformationType::Education => CheckType::EducationVerification,
            InformationType::Criminal => CheckType::CountyCriminal,
            InformationType::Civil => CheckType::CivilRecords,
            InformationType::Financial => CheckType::CreditHeader,
            InformationType::Licenses => CheckType::ProfessionalLicense,
            InformationType::Regulatory => CheckType::RegulatoryDisclosure,
            InformationType::Sanctions => CheckType::SanctionsScreen,
            InformationType::AdverseMedia => CheckType::MediaSearch,
            InformationType::DigitalFootprint => CheckType::SocialMediaScan,
            InformationType::NetworkD2 | InformationType::NetworkD3 => CheckType::AssociateSearch,
            InformationType::Reconciliation => CheckType::IdentityVerification,
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(s.trim_matches('"'))
    }
}

/// One query destined for the external execution service.
///
/// `params` is a BTreeMap so the (provider, check_type, params) dedup key
/// and the serialized form are deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderQuery {
    pub id: String,
    pub info_type: InformationType,
    pub check_type: CheckType,
    /// Preferred provider, if the planner has a reason to pick one.
    /// `None` lets the execution service route freely.
    pub provider: Option<String>,
    pub params: BTreeMap<String, String>,
    /// Batch ordering hint; higher runs means more urgent.
    pub priority: u8,
    /// 1 for planned queries, previous + 1 for refinements.
    pub iteration_number: u32,
    /// The gap kind this query targets, for refinement queries only.
    pub targeting_gap: Option<String>,
}

impl ProviderQuery {
    pub fn new(info_type: InformationType, check_type: CheckType, priority: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            info_type,
            check_type,
            provider: None,
            params: BTreeMap::new(),
            priority,
            iteration_number: 1,
            targeting_gap: None,
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Identity used for batch deduplication.
    pub fn dedup_key(&self) -> (Option<&str>, CheckType, &BTreeMap<String, String>) {
        (self.provider.as_deref(), self.check_type, &self.params)
    }
}

/// Terminal status of a dispatched query. Failures are data, not errors;
/// they fold into query-success scoring and are never thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Success,
    Failed,
    Timeout,
    RateLimited,
    NoProvider,
}

impl QueryStatus {
    pub fn is_success(self) -> bool {
        self == QueryStatus::Success
    }
}

/// One result returned by the execution service for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub query_id: String,
    pub provider_id: String,
    pub check_type: CheckType,
    pub status: QueryStatus,
    /// Normalized provider payload. `CheckPayload::Generic` for providers
    /// the normalizer does not model.
    pub normalized_data: CheckPayload,
    pub cache_hit: bool,
    pub latency_ms: u64,
}
