//! Facade crate for the Fossa workspace.
//! Re-exports domain and licensing modules and composes them at process
//! start. Keep this crate thin: it should compose other crates, not
//! implement business logic.

pub use fossa_domain as domain;
pub use fossa_licensing as licensing;

use fossa_domain::region::RegionRegistry;
use fossa_licensing::LicenseTypeRegistry;
use std::sync::Arc;

/// Builds the process-wide license type registry around the injected region
/// registry. Call once at startup and hand the result to the issuance
/// service.
#[must_use]
pub fn license_registry(regions: Arc<dyn RegionRegistry>) -> LicenseTypeRegistry {
    LicenseTypeRegistry::new(regions)
}
