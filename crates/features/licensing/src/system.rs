//! System entitlements converter.

use crate::region::RegionCodeValidator;
use crate::validation::{Defect, Defects, Validation};
use crate::{EntitlementsConverter, SystemLicenseEntitlements, codes, validators};
use fossa_domain::entitlements::SystemEntitlements;
use fossa_domain::environment::{EnvironmentName, ParseOptions};
use fossa_domain::identifiers::SystemId;
use fossa_domain::region::{Region, RegionRegistry};
use std::fmt;
use std::sync::Arc;

/// Converts system-scoped entitlements between domain and wire form.
///
/// Holds the injected region registry and the environment-name parse
/// options; both are read-only for the converter's lifetime, so one
/// instance is freely shared across threads.
pub struct SystemEntitlementsConverter {
    regions: Arc<dyn RegionRegistry>,
    environment_options: ParseOptions,
}

impl fmt::Debug for SystemEntitlementsConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemEntitlementsConverter")
            .field("environment_options", &self.environment_options)
            .finish_non_exhaustive()
    }
}

impl SystemEntitlementsConverter {
    /// Builds a converter with the default environment-name options
    /// (ASCII-only tokens, invariant culture).
    #[must_use]
    pub fn new(regions: Arc<dyn RegionRegistry>) -> Self {
        Self::with_options(regions, ParseOptions { ascii_only: true, ..ParseOptions::default() })
    }

    #[must_use]
    pub fn with_options(regions: Arc<dyn RegionRegistry>, options: ParseOptions) -> Self {
        Self { regions, environment_options: options }
    }
}

impl EntitlementsConverter for SystemEntitlementsConverter {
    type Domain = SystemEntitlements;
    type Wire = SystemLicenseEntitlements;

    fn to_wire(&self, entitlements: Option<&SystemEntitlements>) -> Validation<Self::Wire> {
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

        // The environment field is a parsed token and cannot be blank.

        validators::require_positive(
            i64::from(entitlements.maximum_company_count),
            Defect::new(codes::MAXIMUM_COMPANY_COUNT_INVALID, "Maximum Company Count is invalid"),
            &mut defects,
        );

        let country_codes: Vec<&str> =
            entitlements.countries.iter().map(Region::two_letter_code).collect();
        let validator = RegionCodeValidator::new(self.regions.as_ref());
        let _ = validator.validate_list(&country_codes, &mut defects);

        // Every field is copied regardless of the defects above; a failed
        // validation discards the record as a whole.
        let result = SystemLicenseEntitlements {
            system_id: entitlements.system_id.to_bytes().to_vec(),
            environment_name: entitlements.environment_name.to_string(),
            maximum_company_count: entitlements.maximum_company_count,
            country_codes: country_codes.into_iter().map(str::to_owned).collect(),
        };

        defects.finish(result)
    }

    fn from_wire(&self, entitlements: Option<&SystemLicenseEntitlements>) -> Validation<Self::Domain> {
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

        let blank = Defect::new(codes::ENVIRONMENT_NAME_DATA_MISSING, "Environment Name is missing");
        let environment_name = if validators::require_non_blank(
            Some(data.environment_name.as_str()),
            blank,
            &mut defects,
        ) {
            let parsed = EnvironmentName::parse(&data.environment_name, &self.environment_options);
            if parsed.is_none() {
                defects.push(Defect::new(
                    codes::ENVIRONMENT_NAME_INVALID,
                    "Environment Name is invalid",
                ));
            }
            parsed
        } else {
            None
        };

        validators::require_positive(
            i64::from(data.maximum_company_count),
            Defect::new(
                codes::MAXIMUM_COMPANY_COUNT_DATA_INVALID,
                "Maximum Company Count is invalid",
            ),
            &mut defects,
        );

        let validator = RegionCodeValidator::new(self.regions.as_ref());
        let countries = validator.validate_list(&data.country_codes, &mut defects);

        match (system_id, environment_name) {
            (Some(system_id), Some(environment_name)) if defects.is_empty() => {
                Validation::Success(SystemEntitlements {
                    system_id,
                    environment_name,
                    maximum_company_count: data.maximum_company_count,
                    countries,
                })
            },
            _ => defects.fail(),
        }
    }
}
