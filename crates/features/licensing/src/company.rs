//! Company entitlements converter.

use crate::validation::{Defect, Defects, Validation};
use crate::{CompanyLicenseEntitlements, EntitlementsConverter, codes, validators};
use fossa_domain::entitlements::CompanyEntitlements;
use fossa_domain::identifiers::{COMPANY_ID_SENTINELS, SystemId};

/// Converts company-scoped entitlements between domain and wire form.
///
/// Stateless; construct once and share freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyEntitlementsConverter;

impl CompanyEntitlementsConverter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// The reserved extremes and the non-positive range collapse into one
/// condition: the record does not carry a usable company identifier.
fn check_company_id(company_id: i64, defects: &mut Defects) {
    if COMPANY_ID_SENTINELS.contains(&company_id) || company_id <= 0 {
        defects.push(Defect::new(codes::COMPANY_ID_INVALID, "Invalid Company ID"));
    }
}

impl EntitlementsConverter for CompanyEntitlementsConverter {
    type Domain = CompanyEntitlements;
    type Wire = CompanyLicenseEntitlements;

    fn to_wire(&self, entitlements: Option<&CompanyEntitlements>) -> Validation<Self::Wire> {
        let mut defects = Defects::new();
        let Some(entitlements) = entitlements else {
            defects.push(Defect::new(codes::ENTITLEMENTS_MISSING, "Value must not be NULL"));
            return defects.fail();
        };

        validators::reject_sentinel(
            &entitlements.system_id,
            &SystemId::RESERVED,
            Defect::new(codes::SYSTEM_ID_INVALID, "Invalid System ID"),
            &mut defects,
        );

        check_company_id(entitlements.company_id, &mut defects);

        validators::require_positive(
            i64::from(entitlements.maximum_branch_count),
            Defect::new(codes::MAXIMUM_BRANCH_COUNT_INVALID, "Maximum Branch Count is invalid"),
            &mut defects,
        );
        validators::require_positive(
            i64::from(entitlements.maximum_employee_count),
            Defect::new(codes::MAXIMUM_EMPLOYEE_COUNT_INVALID, "Maximum Employee Count is invalid"),
            &mut defects,
        );
        validators::require_positive(
            i64::from(entitlements.maximum_department_count),
            Defect::new(
                codes::MAXIMUM_DEPARTMENT_COUNT_INVALID,
                "Maximum Department Count is invalid",
            ),
            &mut defects,
        );

        // Every field is copied regardless of the defects above; a failed
        // validation discards the record as a whole.
        let result = CompanyLicenseEntitlements {
            system_id: entitlements.system_id.to_bytes().to_vec(),
            company_id: entitlements.company_id,
            maximum_branch_count: entitlements.maximum_branch_count,
            maximum_employee_count: entitlements.maximum_employee_count,
            maximum_department_count: entitlements.maximum_department_count,
        };

        defects.finish(result)
    }

    fn from_wire(&self, entitlements: Option<&CompanyLicenseEntitlements>) -> Validation<Self::Domain> {
        let mut defects = Defects::new();
        let Some(data) = entitlements else {
            defects.push(Defect::new(codes::ENTITLEMENTS_DATA_MISSING, "Value must not be NULL"));
            return defects.fail();
        };

        let system_id = validators::derive_system_id(
            &data.system_id,
            Defect::new(codes::SYSTEM_ID_DATA_INVALID, "Invalid System ID"),
            &mut defects,
        );

        check_company_id(data.company_id, &mut defects);

        validators::require_positive(
            i64::from(data.maximum_branch_count),
            Defect::new(codes::MAXIMUM_BRANCH_COUNT_INVALID, "Maximum Branch Count is invalid"),
            &mut defects,
        );
        validators::require_positive(
            i64::from(data.maximum_employee_count),
            Defect::new(codes::MAXIMUM_EMPLOYEE_COUNT_INVALID, "Maximum Employee Count is invalid"),
            &mut defects,
        );
        validators::require_positive(
            i64::from(data.maximum_department_count),
            Defect::new(
                codes::MAXIMUM_DEPARTMENT_COUNT_DATA_INVALID,
                "Maximum Department Count is invalid",
            ),
            &mut defects,
        );

        match system_id {
            Some(system_id) if defects.is_empty() => Validation::Success(CompanyEntitlements {
                system_id,
                company_id: data.company_id,
                maximum_branch_count: data.maximum_branch_count,
                maximum_employee_count: data.maximum_employee_count,
                maximum_department_count: data.maximum_department_count,
            }),
            _ => defects.fail(),
        }
    }
}
