//! Country/region metadata and the registry seam.

use thiserror::Error;

/// Metadata for a single region, keyed by its two-letter ISO 3166-1 code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    two_letter_code: String,
    name: String,
}

impl Region {
    /// Builds region metadata. The code is stored as given; registries hand
    /// out canonical upper-case codes.
    pub fn new(two_letter_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { two_letter_code: two_letter_code.into(), name: name.into() }
    }

    /// Two-letter ISO 3166-1 code, e.g. `US`.
    #[must_use]
    pub fn two_letter_code(&self) -> &str {
        &self.two_letter_code
    }

    /// Human-readable region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Raised by a [`RegionRegistry`] when a code is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("region code {code:?} is not recognized")]
pub struct RegionLookupError {
    /// The code that failed to resolve.
    pub code: String,
}

/// Resolves two-letter region codes to region metadata.
///
/// This is the one collaborator the entitlement converters depend on. It is
/// injected at construction and treated as read-only for the converter's
/// lifetime; implementations must therefore be shareable across threads.
pub trait RegionRegistry: Send + Sync {
    /// Resolves `code`, or reports it unknown.
    fn resolve(&self, code: &str) -> Result<Region, RegionLookupError>;
}
