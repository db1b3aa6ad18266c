//! # Licensing Entitlements
//!
//! This crate converts licensing entitlements between their strongly typed
//! domain representation and the loosely typed wire records embedded inside
//! signed license artifacts, enforcing every structural and semantic
//! constraint a valid record must satisfy.
//!
//! ## Architecture
//!
//! The crate is divided into two primary parts:
//!
//! 1. **Validation core ([`validation`], [`region`]):** an error-accumulating
//!    result type plus the reusable field and region-code checks. A
//!    conversion never stops at the first defect; every independent check
//!    runs and the complete defect list comes back in field order.
//! 2. **Converters ([`system`], [`company`]) and routing ([`registry`]):**
//!    one bidirectional converter per entitlement kind, composed from the
//!    validation core, plus the descriptor surface the external issuance
//!    service routes on.
//!
//! Converters are pure and hold no mutable state; the one injected
//! collaborator is the read-only region registry, so instances are safe to
//! share across threads without coordination.

pub mod codes;
pub mod company;
mod error;
pub mod region;
pub mod registry;
pub mod system;
pub mod validation;
pub(crate) mod validators;

pub use crate::company::CompanyEntitlementsConverter;
pub use crate::error::EntitlementsError;
pub use crate::registry::{LicenseKind, LicenseTypeRegistry};
pub use crate::system::SystemEntitlementsConverter;
pub use crate::validation::{Defect, Validation};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Bidirectional mapping between a domain entitlement kind and its wire
/// record.
///
/// `to_wire` treats the domain value as validated-on-construction but still
/// runs the full field check list before handing the record to the issuance
/// service; `from_wire` treats the wire record as untrusted input and
/// re-derives every typed field. Neither direction stops at the first
/// defect; the one short-circuit is an absent input value, where no
/// field-level work is meaningful.
pub trait EntitlementsConverter {
    /// Strongly typed domain shape.
    type Domain;
    /// Loosely typed serialized shape.
    type Wire;

    /// Maps a domain value to its wire record, or reports every defect
    /// found. On failure the partially populated record is discarded.
    fn to_wire(&self, entitlements: Option<&Self::Domain>) -> Validation<Self::Wire>;

    /// Validates a wire record and rebuilds the domain value, or reports
    /// every defect found.
    fn from_wire(&self, entitlements: Option<&Self::Wire>) -> Validation<Self::Domain>;
}

/// Wire record for system-scoped entitlements.
///
/// Untrusted on the way in: every field must pass
/// [`SystemEntitlementsConverter::from_wire`] before it becomes a domain
/// value. Derived on the way out and assumed correct once produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SystemLicenseEntitlements {
    /// System identifier as its 16-byte form, carried as Base64 in JSON.
    #[serde(with = "bytes_as_base64")]
    pub system_id: Vec<u8>,
    /// Deployment environment name.
    pub environment_name: String,
    /// Upper bound on companies hosted by the installation.
    pub maximum_company_count: i32,
    /// Two-letter codes of the supported regions.
    pub country_codes: Vec<String>,
}

/// Wire record for company-scoped entitlements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyLicenseEntitlements {
    /// System identifier as its 16-byte form, carried as Base64 in JSON.
    #[serde(with = "bytes_as_base64")]
    pub system_id: Vec<u8>,
    /// Company identifier.
    pub company_id: i64,
    /// Upper bound on branches.
    pub maximum_branch_count: i32,
    /// Upper bound on employees.
    pub maximum_employee_count: i32,
    /// Upper bound on departments.
    pub maximum_department_count: i32,
}

/// Serialization surface shared by every wire record.
///
/// The binary form is the payload embedded in signed license artifacts; the
/// JSON form is for configuration files and tooling, with byte fields
/// encoded as Base64.
pub trait WireRecord: Serialize + DeserializeOwned {
    /// Serializes the record into its compact binary form.
    ///
    /// # Errors
    /// Returns [`EntitlementsError::Postcard`] if serialization fails.
    fn encode_bin(&self) -> Result<Vec<u8>, EntitlementsError> {
        postcard::to_stdvec(self).map_err(EntitlementsError::from)
    }

    /// Deserializes a record from its binary form.
    ///
    /// # Errors
    /// Returns [`EntitlementsError::Postcard`] if the buffer is corrupted or
    /// truncated.
    fn decode_bin(bytes: &[u8]) -> Result<Self, EntitlementsError> {
        postcard::from_bytes(bytes).map_err(EntitlementsError::from)
    }

    /// Serializes the record into a human-readable JSON string.
    ///
    /// # Errors
    /// Returns [`EntitlementsError::Json`] if serialization fails.
    fn to_json(&self) -> Result<String, EntitlementsError> {
        serde_json::to_string(self).map_err(EntitlementsError::from)
    }

    /// Deserializes a record from a JSON string.
    ///
    /// # Errors
    /// Returns [`EntitlementsError::Json`] if the JSON is malformed, carries
    /// unknown fields, or holds invalid Base64 byte data.
    fn from_json(json: &str) -> Result<Self, EntitlementsError> {
        serde_json::from_str(json).map_err(EntitlementsError::from)
    }
}

impl WireRecord for SystemLicenseEntitlements {}
impl WireRecord for CompanyLicenseEntitlements {}

/// Helper module for transparently serializing byte fields to Base64 strings.
pub mod bytes_as_base64 {
    use base64::{Engine as _, engine::general_purpose};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes a byte buffer into a Base64 string without padding.
    pub(crate) fn serialize<S: Serializer>(v: &[u8], s: S) -> Result<S::Ok, S::Error> {
        String::serialize(&general_purpose::STANDARD_NO_PAD.encode(v), s)
    }

    /// Deserializes a Base64 string back into a byte vector.
    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        general_purpose::STANDARD_NO_PAD
            .decode(String::deserialize(d)?)
            .map_err(|e| serde::de::Error::custom(format!("Invalid Base64: {e}")))
    }
}
