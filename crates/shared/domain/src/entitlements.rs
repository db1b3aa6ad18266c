//! Entitlement records carried inside license artifacts.
//!
//! The two kinds share a shape convention, not a supertype: both start with
//! the system identifier, followed by the limits the license grants.

use crate::environment::EnvironmentName;
use crate::identifiers::SystemId;
use crate::region::Region;

/// Entitlements granted by a system-scoped license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemEntitlements {
    /// Installation the license belongs to.
    pub system_id: SystemId,
    /// Deployment environment the license is valid for.
    pub environment_name: EnvironmentName,
    /// Upper bound on companies hosted by the installation.
    pub maximum_company_count: i32,
    /// Regions the installation may operate in. A valid record always names
    /// at least one.
    pub countries: Vec<Region>,
}

/// Entitlements granted by a company-scoped license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyEntitlements {
    /// Installation the company lives in.
    pub system_id: SystemId,
    /// Positive 64-bit company identifier; the extreme values of the space
    /// are reserved.
    pub company_id: i64,
    /// Upper bound on branches.
    pub maximum_branch_count: i32,
    /// Upper bound on employees.
    pub maximum_employee_count: i32,
    /// Upper bound on departments.
    pub maximum_department_count: i32,
}
