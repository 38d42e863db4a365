use crate::models::query::CheckType;
use crate::types::{Locale, ServiceTier};

/// Optional compliance/permission collaborator. When absent, everything
/// is permitted; the type manager and planner only restrict what a
/// supplied policy forbids.
pub trait ICompliancePolicy: Send + Sync {
    fn evaluate_check(
        &self,
        locale: &Locale,
        check_type: CheckType,
        role_category: Option<&str>,
        tier: ServiceTier,
    ) -> bool;
}
