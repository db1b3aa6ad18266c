//! License kind descriptors and the converter routing surface.
//!
//! The issuance service embeds a kind discriminator in every license
//! artifact and routes the payload back through the matching converter. The
//! registry here is built explicitly once at process start and handed to
//! that service; there is no container wiring.

use crate::company::CompanyEntitlementsConverter;
use crate::system::SystemEntitlementsConverter;
use fossa_domain::entitlements::{CompanyEntitlements, SystemEntitlements};
use fossa_domain::region::RegionRegistry;
use fxhash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Discriminator of system-scoped licenses. Fixed for the life of the
/// format; artifacts in the field carry it.
pub const SYSTEM_LICENSE_DISCRIMINATOR: Uuid =
    Uuid::from_u128(0x09e6_0634_5eac_4b7a_8ffd_8f90_0cde_7a8e);

/// Discriminator of company-scoped licenses.
pub const COMPANY_LICENSE_DISCRIMINATOR: Uuid =
    Uuid::from_u128(0x6619_279b_50da_4138_924c_a971_c02a_9c5f);

/// Pairs an entitlement kind with its routing identity: a fixed 128-bit
/// discriminator and a display name.
pub trait LicenseDescriptor {
    /// Domain entitlement kind the descriptor identifies.
    type Entitlements;

    /// Fixed discriminator; never changes once licenses are in the field.
    fn discriminator(&self) -> Uuid;

    /// Human-readable kind name.
    fn name(&self) -> &'static str;
}

/// Descriptor for system-scoped licenses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLicenseDescriptor;

impl LicenseDescriptor for SystemLicenseDescriptor {
    type Entitlements = SystemEntitlements;

    fn discriminator(&self) -> Uuid {
        SYSTEM_LICENSE_DISCRIMINATOR
    }

    fn name(&self) -> &'static str {
        "Fossa/System"
    }
}

/// Descriptor for company-scoped licenses.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyLicenseDescriptor;

impl LicenseDescriptor for CompanyLicenseDescriptor {
    type Entitlements = CompanyEntitlements;

    fn discriminator(&self) -> Uuid {
        COMPANY_LICENSE_DISCRIMINATOR
    }

    fn name(&self) -> &'static str {
        "Fossa/Company"
    }
}

/// Entitlement kinds known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseKind {
    /// System-scoped entitlements.
    System,
    /// Company-scoped entitlements.
    Company,
}

impl LicenseKind {
    /// Routing discriminator of the kind.
    #[must_use]
    pub const fn discriminator(self) -> Uuid {
        match self {
            Self::System => SYSTEM_LICENSE_DISCRIMINATOR,
            Self::Company => COMPANY_LICENSE_DISCRIMINATOR,
        }
    }

    /// Display name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::System => "Fossa/System",
            Self::Company => "Fossa/Company",
        }
    }
}

/// Explicitly constructed converter registry.
///
/// Built once at process start around the injected region registry and
/// passed to the issuance service. Read-only afterwards, so it is shared
/// across threads without coordination.
pub struct LicenseTypeRegistry {
    system: SystemEntitlementsConverter,
    company: CompanyEntitlementsConverter,
    kinds: FxHashMap<Uuid, LicenseKind>,
}

impl fmt::Debug for LicenseTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LicenseTypeRegistry").field("kinds", &self.kinds).finish_non_exhaustive()
    }
}

impl LicenseTypeRegistry {
    /// Builds the registry around the injected region registry.
    #[must_use]
    pub fn new(regions: Arc<dyn RegionRegistry>) -> Self {
        let mut kinds = FxHashMap::default();
        kinds.insert(SYSTEM_LICENSE_DISCRIMINATOR, LicenseKind::System);
        kinds.insert(COMPANY_LICENSE_DISCRIMINATOR, LicenseKind::Company);
        tracing::debug!(kinds = kinds.len(), "license type registry initialized");

        Self {
            system: SystemEntitlementsConverter::new(regions),
            company: CompanyEntitlementsConverter::new(),
            kinds,
        }
    }

    /// Converter for system-scoped entitlements.
    #[must_use]
    pub const fn system(&self) -> &SystemEntitlementsConverter {
        &self.system
    }

    /// Converter for company-scoped entitlements.
    #[must_use]
    pub const fn company(&self) -> &CompanyEntitlementsConverter {
        &self.company
    }

    /// Resolves a discriminator coming out of a license artifact.
    #[must_use]
    pub fn kind_of(&self, discriminator: &Uuid) -> Option<LicenseKind> {
        self.kinds.get(discriminator).copied()
    }
}
