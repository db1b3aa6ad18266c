//! Entitlement wire record tooling.
//!
//! Local development commands for the record format: validate a JSON record
//! against the converter, pack a clean record into the binary payload form,
//! and inspect a packed payload. The region registry here is a small
//! built-in set; deployed services inject a full ISO dataset.

use crate::models::args::Kind;
use anyhow::{Context, Result, bail};
use fossa::domain::entitlements::{CompanyEntitlements, SystemEntitlements};
use fossa::licensing::region::InMemoryRegionRegistry;
use fossa::licensing::{
    CompanyLicenseEntitlements, EntitlementsConverter, LicenseTypeRegistry,
    SystemLicenseEntitlements, Validation, WireRecord,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Regions recognized by local tooling runs.
const DEV_REGIONS: [(&str, &str); 24] = [
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("IE", "Ireland"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("MX", "Mexico"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("UA", "Ukraine"),
    ("US", "United States"),
];

fn registry() -> LicenseTypeRegistry {
    fossa::license_registry(Arc::new(InMemoryRegionRegistry::from_entries(DEV_REGIONS)))
}

/// Validates a JSON wire record and lists every defect.
///
/// # Errors
/// Returns an error if the file cannot be read, is not a record of the
/// given kind, or fails validation.
pub fn validate(kind: Kind, path: &Path) -> Result<()> {
    let registry = registry();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match kind {
        Kind::System => {
            let record = SystemLicenseEntitlements::from_json(&json)?;
            report(kind, &registry.system().from_wire(Some(&record)))
        },
        Kind::Company => {
            let record = CompanyLicenseEntitlements::from_json(&json)?;
            report(kind, &registry.company().from_wire(Some(&record)))
        },
    }
}

/// Validates a JSON wire record and packs it into the binary payload form.
///
/// # Errors
/// Returns an error if reading, validation, or writing fails.
pub fn pack(kind: Kind, path: &Path, out: Option<&Path>) -> Result<()> {
    let registry = registry();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let bytes = match kind {
        Kind::System => {
            let record = SystemLicenseEntitlements::from_json(&json)?;
            report(kind, &registry.system().from_wire(Some(&record)))?;
            record.encode_bin()?
        },
        Kind::Company => {
            let record = CompanyLicenseEntitlements::from_json(&json)?;
            report(kind, &registry.company().from_wire(Some(&record)))?;
            record.encode_bin()?
        },
    };

    let out = out.map_or_else(|| default_out(path), Path::to_path_buf);
    fs::write(&out, bytes).with_context(|| format!("Failed to write {}", out.display()))?;
    println!("📦 Packed record written to {}", out.display());

    Ok(())
}

/// Decodes a packed binary record and prints a readable summary.
///
/// # Errors
/// Returns an error if the payload cannot be read, decoded, or validated.
pub fn inspect(kind: Kind, path: &Path) -> Result<()> {
    let registry = registry();
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    match kind {
        Kind::System => {
            let record = SystemLicenseEntitlements::decode_bin(&bytes)?;
            let validation = registry.system().from_wire(Some(&record));
            validation.on_success(print_system);
            report(kind, &validation)
        },
        Kind::Company => {
            let record = CompanyLicenseEntitlements::decode_bin(&bytes)?;
            let validation = registry.company().from_wire(Some(&record));
            validation.on_success(print_company);
            report(kind, &validation)
        },
    }
}

fn default_out(path: &Path) -> PathBuf {
    let mut out = path.to_path_buf();
    out.set_extension("bin");
    out
}

fn report<T>(kind: Kind, validation: &Validation<T>) -> Result<()> {
    if validation.is_success() {
        println!("✅ {} record is valid", kind_name(kind));
        return Ok(());
    }

    for defect in validation.defects() {
        eprintln!("  ✗ {defect}");
    }
    bail!("{} record has {} defect(s)", kind_name(kind), validation.defects().len());
}

const fn kind_name(kind: Kind) -> &'static str {
    match kind {
        Kind::System => fossa::licensing::LicenseKind::System.name(),
        Kind::Company => fossa::licensing::LicenseKind::Company.name(),
    }
}

fn print_system(entitlements: &SystemEntitlements) {
    println!("System ID:             {}", entitlements.system_id);
    println!("Environment:           {}", entitlements.environment_name);
    println!("Maximum companies:     {}", entitlements.maximum_company_count);
    let countries: Vec<&str> =
        entitlements.countries.iter().map(fossa::domain::region::Region::name).collect();
    println!("Countries:             {}", countries.join(", "));
}

fn print_company(entitlements: &CompanyEntitlements) {
    println!("System ID:             {}", entitlements.system_id);
    println!("Company ID:            {}", entitlements.company_id);
    println!("Maximum branches:      {}", entitlements.maximum_branch_count);
    println!("Maximum employees:     {}", entitlements.maximum_employee_count);
    println!("Maximum departments:   {}", entitlements.maximum_department_count);
}
