mod fixtures;

use fixtures::{environment, region, sample_system_entitlements, system_converter};
use fossa_domain::identifiers::SystemId;
use fossa_licensing::{EntitlementsConverter, SystemLicenseEntitlements, codes};

fn sample_wire() -> SystemLicenseEntitlements {
    SystemLicenseEntitlements {
        system_id: fixtures::sample_system_id().to_bytes().to_vec(),
        environment_name: "Development".to_owned(),
        maximum_company_count: 10,
        country_codes: vec!["US".to_owned()],
    }
}

fn defect_codes<T>(validation: &fossa_licensing::Validation<T>) -> Vec<i32> {
    validation.defects().iter().map(fossa_licensing::Defect::code).collect()
}

#[test]
fn absent_domain_value_short_circuits() {
    let validation = system_converter().to_wire(None);
    assert_eq!(defect_codes(&validation), vec![codes::ENTITLEMENTS_MISSING]);
}

#[test]
fn absent_wire_value_short_circuits() {
    let validation = system_converter().from_wire(None);
    assert_eq!(defect_codes(&validation), vec![codes::ENTITLEMENTS_DATA_MISSING]);
}

#[test]
fn valid_entitlements_produce_the_wire_record() {
    let converter = system_converter();
    let validation = converter.to_wire(Some(&sample_system_entitlements()));

    assert!(validation.is_success());
    validation.on_success(|wire| {
        assert_eq!(wire.country_codes, vec!["US".to_owned()]);
        assert_eq!(wire.maximum_company_count, 10);
        assert_eq!(wire.environment_name, "Development");
    });
}

#[test]
fn wire_round_trip_restores_the_domain_value() {
    let converter = system_converter();
    let original = sample_system_entitlements();

    let wire = converter.to_wire(Some(&original)).into_result().expect("wire record");
    let restored = converter.from_wire(Some(&wire)).into_result().expect("domain value");

    assert_eq!(restored, original);
}

#[test]
fn reserved_system_ids_are_rejected_on_both_sides() {
    let converter = system_converter();

    for reserved in SystemId::RESERVED {
        let mut domain = sample_system_entitlements();
        domain.system_id = reserved;
        let validation = converter.to_wire(Some(&domain));
        assert_eq!(defect_codes(&validation), vec![codes::SYSTEM_ID_INVALID]);

        let mut wire = sample_wire();
        wire.system_id = reserved.to_bytes().to_vec();
        let validation = converter.from_wire(Some(&wire));
        assert_eq!(defect_codes(&validation), vec![codes::SYSTEM_ID_DATA_INVALID]);
    }
}

#[test]
fn truncated_system_id_bytes_are_rejected() {
    let converter = system_converter();
    let mut wire = sample_wire();
    wire.system_id = vec![1, 2, 3];

    let validation = converter.from_wire(Some(&wire));
    assert_eq!(defect_codes(&validation), vec![codes::SYSTEM_ID_DATA_INVALID]);
}

#[test]
fn country_code_lexical_and_registry_rules() {
    let converter = system_converter();
    let cases: [(&str, Vec<i32>); 4] = [
        ("US", vec![]),
        ("001", vec![codes::COUNTRY_CODE_TOO_LONG, codes::COUNTRY_CODE_NOT_UPPERCASE]),
        ("us", vec![codes::COUNTRY_CODE_NOT_UPPERCASE]),
        ("FR", vec![codes::COUNTRY_CODE_UNKNOWN]),
    ];

    for (code, expected) in cases {
        let mut wire = sample_wire();
        wire.country_codes = vec![code.to_owned()];
        let validation = converter.from_wire(Some(&wire));
        assert_eq!(defect_codes(&validation), expected, "code {code:?}");
    }
}

#[test]
fn blank_country_code_reports_missing_not_too_short() {
    let converter = system_converter();
    let mut wire = sample_wire();
    wire.country_codes = vec![String::new()];

    let validation = converter.from_wire(Some(&wire));
    assert_eq!(defect_codes(&validation), vec![codes::COUNTRY_CODE_MISSING]);
}

#[test]
fn empty_country_list_fails_the_structural_check_alone() {
    let converter = system_converter();
    let mut wire = sample_wire();
    wire.country_codes = Vec::new();

    let validation = converter.from_wire(Some(&wire));
    assert_eq!(defect_codes(&validation), vec![codes::COUNTRIES_EMPTY]);

    let mut domain = sample_system_entitlements();
    domain.countries = Vec::new();
    let validation = converter.to_wire(Some(&domain));
    assert_eq!(defect_codes(&validation), vec![codes::COUNTRIES_EMPTY]);
}

#[test]
fn unvalidated_regions_are_rejected_on_the_domain_side() {
    let converter = system_converter();
    let mut domain = sample_system_entitlements();
    domain.countries = vec![region("US"), fossa_domain::region::Region::new("001", "World")];

    let validation = converter.to_wire(Some(&domain));
    assert_eq!(
        defect_codes(&validation),
        vec![codes::COUNTRY_CODE_TOO_LONG, codes::COUNTRY_CODE_NOT_UPPERCASE],
    );
}

#[test]
fn blank_environment_name_is_missing() {
    let converter = system_converter();
    let mut wire = sample_wire();
    wire.environment_name = "   ".to_owned();

    let validation = converter.from_wire(Some(&wire));
    assert_eq!(defect_codes(&validation), vec![codes::ENVIRONMENT_NAME_DATA_MISSING]);
}

#[test]
fn unparseable_environment_name_is_invalid() {
    let converter = system_converter();
    for name in ["Dev Env", "Prod!", "Développement"] {
        let mut wire = sample_wire();
        wire.environment_name = name.to_owned();
        let validation = converter.from_wire(Some(&wire));
        assert_eq!(defect_codes(&validation), vec![codes::ENVIRONMENT_NAME_INVALID], "{name:?}");
    }
}

#[test]
fn independent_defects_accumulate_in_field_order() {
    let converter = system_converter();
    let mut wire = sample_wire();
    wire.environment_name = String::new();
    wire.maximum_company_count = 0;

    let validation = converter.from_wire(Some(&wire));
    assert_eq!(
        defect_codes(&validation),
        vec![codes::ENVIRONMENT_NAME_DATA_MISSING, codes::MAXIMUM_COMPANY_COUNT_DATA_INVALID],
    );
}

#[test]
fn every_field_is_checked_even_when_the_first_one_fails() {
    let converter = system_converter();
    let wire = SystemLicenseEntitlements {
        system_id: SystemId::NIL.to_bytes().to_vec(),
        environment_name: String::new(),
        maximum_company_count: -3,
        country_codes: Vec::new(),
    };

    let validation = converter.from_wire(Some(&wire));
    assert_eq!(
        defect_codes(&validation),
        vec![
            codes::SYSTEM_ID_DATA_INVALID,
            codes::ENVIRONMENT_NAME_DATA_MISSING,
            codes::MAXIMUM_COMPANY_COUNT_DATA_INVALID,
            codes::COUNTRIES_EMPTY,
        ],
    );
}

#[test]
fn environment_token_comparison_is_exact() {
    let converter = system_converter();
    let mut wire = sample_wire();
    wire.environment_name = " Development ".to_owned();

    let restored = converter.from_wire(Some(&wire)).into_result().expect("domain value");
    assert_eq!(restored.environment_name, environment("Development"));
}
