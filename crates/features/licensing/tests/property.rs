mod fixtures;

use fossa_domain::entitlements::{CompanyEntitlements, SystemEntitlements};
use fossa_domain::environment::{EnvironmentName, ParseOptions};
use fossa_domain::identifiers::{SystemId, Ulid};
use fossa_licensing::{CompanyEntitlementsConverter, EntitlementsConverter};
use proptest::prelude::*;

fn arb_system_id() -> impl Strategy<Value = SystemId> {
    any::<u128>()
        .prop_filter("reserved values never identify an installation", |raw| {
            *raw != u128::MIN && *raw != u128::MAX
        })
        .prop_map(|raw| SystemId::from_ulid(Ulid(raw)))
}

fn arb_environment_name() -> impl Strategy<Value = EnvironmentName> {
    "[A-Za-z][A-Za-z0-9]{0,15}".prop_map(|raw| {
        let options = ParseOptions { ascii_only: true, ..ParseOptions::default() };
        EnvironmentName::parse(&raw, &options).expect("alphanumeric token")
    })
}

fn arb_countries() -> impl Strategy<Value = Vec<fossa_domain::region::Region>> {
    proptest::sample::subsequence(fixtures::REGION_ENTRIES.to_vec(), 1..=fixtures::REGION_ENTRIES.len())
        .prop_map(|entries| {
            entries.into_iter().map(|(code, _)| fixtures::region(code)).collect()
        })
}

fn arb_system_entitlements() -> impl Strategy<Value = SystemEntitlements> {
    (arb_system_id(), arb_environment_name(), 1..=i32::MAX, arb_countries()).prop_map(
        |(system_id, environment_name, maximum_company_count, countries)| SystemEntitlements {
            system_id,
            environment_name,
            maximum_company_count,
            countries,
        },
    )
}

fn arb_company_entitlements() -> impl Strategy<Value = CompanyEntitlements> {
    (arb_system_id(), 1..i64::MAX, 1..=i32::MAX, 1..=i32::MAX, 1..=i32::MAX).prop_map(
        |(system_id, company_id, branches, employees, departments)| CompanyEntitlements {
            system_id,
            company_id,
            maximum_branch_count: branches,
            maximum_employee_count: employees,
            maximum_department_count: departments,
        },
    )
}

proptest! {
    #[test]
    fn system_round_trip_restores_the_original(original in arb_system_entitlements()) {
        let converter = fixtures::system_converter();

        let wire = converter.to_wire(Some(&original));
        prop_assert!(wire.is_success(), "defects: {:?}", wire.defects());

        let wire = wire.into_result().unwrap();
        let restored = converter.from_wire(Some(&wire));
        prop_assert!(restored.is_success(), "defects: {:?}", restored.defects());
        prop_assert_eq!(restored.into_result().unwrap(), original);
    }

    #[test]
    fn company_round_trip_restores_the_original(original in arb_company_entitlements()) {
        let converter = CompanyEntitlementsConverter::new();

        let wire = converter.to_wire(Some(&original));
        prop_assert!(wire.is_success(), "defects: {:?}", wire.defects());

        let wire = wire.into_result().unwrap();
        let restored = converter.from_wire(Some(&wire));
        prop_assert!(restored.is_success(), "defects: {:?}", restored.defects());
        prop_assert_eq!(restored.into_result().unwrap(), original);
    }

    #[test]
    fn environment_parse_is_idempotent(raw in "\\s{0,3}[A-Za-z][A-Za-z0-9]{0,15}\\s{0,3}") {
        let options = ParseOptions { ascii_only: true, ..ParseOptions::default() };
        let first = EnvironmentName::parse(&raw, &options).expect("alphanumeric token");
        let second = EnvironmentName::parse(&first.to_string(), &options).expect("canonical token");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn non_positive_counts_always_fail(count in i32::MIN..=0) {
        let converter = CompanyEntitlementsConverter::new();
        let mut domain = fixtures::sample_company_entitlements();
        domain.maximum_employee_count = count;

        let validation = converter.to_wire(Some(&domain));
        prop_assert!(!validation.is_success());
        prop_assert_eq!(validation.defects().len(), 1);
    }
}
