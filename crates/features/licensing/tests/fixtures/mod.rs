#![allow(dead_code)]

use fossa_domain::entitlements::{CompanyEntitlements, SystemEntitlements};
use fossa_domain::environment::{EnvironmentName, ParseOptions};
use fossa_domain::identifiers::{SystemId, Ulid};
use fossa_domain::region::Region;
use fossa_licensing::SystemEntitlementsConverter;
use fossa_licensing::region::InMemoryRegionRegistry;
use std::sync::Arc;

/// Regions the test registry recognizes.
pub const REGION_ENTRIES: [(&str, &str); 5] = [
    ("US", "United States"),
    ("DE", "Germany"),
    ("UA", "Ukraine"),
    ("JP", "Japan"),
    ("BR", "Brazil"),
];

#[must_use]
pub fn regions() -> Arc<InMemoryRegionRegistry> {
    Arc::new(InMemoryRegionRegistry::from_entries(REGION_ENTRIES))
}

#[must_use]
pub fn system_converter() -> SystemEntitlementsConverter {
    SystemEntitlementsConverter::new(regions())
}

#[must_use]
pub fn sample_system_id() -> SystemId {
    SystemId::from_ulid(Ulid(0x0184_b5c7_2f91_33d0_8a6e_54f2_07c1_9b3a))
}

/// Parses an environment token with the converter's default options.
/// # Panics
/// * If the name is not a valid token.
#[must_use]
pub fn environment(name: &str) -> EnvironmentName {
    let options = ParseOptions { ascii_only: true, ..ParseOptions::default() };
    EnvironmentName::parse(name, &options).expect("environment token")
}

/// Region metadata matching the test registry entry for `code`.
/// # Panics
/// * If the code is not one of [`REGION_ENTRIES`].
#[must_use]
pub fn region(code: &str) -> Region {
    let (_, name) = REGION_ENTRIES
        .iter()
        .find(|(entry, _)| *entry == code)
        .expect("code registered in the test registry");
    Region::new(code, *name)
}

#[must_use]
pub fn sample_system_entitlements() -> SystemEntitlements {
    SystemEntitlements {
        system_id: sample_system_id(),
        environment_name: environment("Development"),
        maximum_company_count: 10,
        countries: vec![region("US")],
    }
}

#[must_use]
pub fn sample_company_entitlements() -> CompanyEntitlements {
    CompanyEntitlements {
        system_id: sample_system_id(),
        company_id: 74,
        maximum_branch_count: 5,
        maximum_employee_count: 250,
        maximum_department_count: 12,
    }
}
