//! Region code validation and the in-memory registry.

use crate::codes;
use crate::validation::{Defect, Defects};
use crate::validators;
use fossa_domain::region::{Region, RegionLookupError, RegionRegistry};
use fxhash::FxHashMap;
use std::fmt;

/// Expected length of a two-letter ISO region code.
const CODE_LENGTH: usize = 2;

/// Validates candidate region codes against lexical rules and the injected
/// registry.
///
/// A blank code reports only "missing" and nothing else. The length and
/// letter-class checks are independent of each other and both run. Registry
/// resolution is value-dependent: it runs only when both lexical checks
/// pass, so an unknown-code defect never piggybacks on a malformed one.
#[derive(Clone, Copy)]
pub struct RegionCodeValidator<'a> {
    registry: &'a dyn RegionRegistry,
}

impl fmt::Debug for RegionCodeValidator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionCodeValidator").finish_non_exhaustive()
    }
}

impl<'a> RegionCodeValidator<'a> {
    #[must_use]
    pub fn new(registry: &'a dyn RegionRegistry) -> Self {
        Self { registry }
    }

    /// Runs the full check sequence for one candidate code. Defects go to
    /// the sink; the resolved region comes back only for a fully clean code.
    pub fn validate(&self, code: Option<&str>, defects: &mut Defects) -> Option<Region> {
        let missing = Defect::new(codes::COUNTRY_CODE_MISSING, "Country Code is missing");
        if !validators::require_non_blank(code, missing, defects) {
            return None;
        }
        let code = code?;

        let length_ok = validators::require_exact_length(
            code,
            CODE_LENGTH,
            Defect::new(codes::COUNTRY_CODE_TOO_SHORT, "Country Code is too short"),
            Defect::new(codes::COUNTRY_CODE_TOO_LONG, "Country Code is too long"),
            defects,
        );

        let letters_ok = code.chars().all(|c| c.is_ascii_uppercase());
        if !letters_ok {
            defects.push(Defect::new(
                codes::COUNTRY_CODE_NOT_UPPERCASE,
                "Country Code must be upper-case ASCII letters",
            ));
        }

        if length_ok && letters_ok {
            match self.registry.resolve(code) {
                Ok(region) => return Some(region),
                Err(RegionLookupError { .. }) => defects
                    .push(Defect::new(codes::COUNTRY_CODE_UNKNOWN, "Country Code is unknown")),
            }
        }
        None
    }

    /// Applies the per-element checks to a full country list. An empty list
    /// fails the structural check and skips per-element validation.
    pub fn validate_list<S: AsRef<str>>(
        &self,
        country_codes: &[S],
        defects: &mut Defects,
    ) -> Vec<Region> {
        if country_codes.is_empty() {
            defects.push(Defect::new(codes::COUNTRIES_EMPTY, "Countries must not be empty"));
            return Vec::new();
        }
        country_codes
            .iter()
            .filter_map(|code| self.validate(Some(code.as_ref()), defects))
            .collect()
    }
}

/// Map-backed [`RegionRegistry`] for tests, tooling, and small deployments.
///
/// Production services inject a registry backed by a full ISO 3166 dataset;
/// the converter core relies only on the trait.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegionRegistry {
    regions: FxHashMap<String, String>,
}

impl InMemoryRegionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `(code, name)` entries. Codes are expected in
    /// canonical upper-case two-letter form.
    pub fn from_entries<C, N>(entries: impl IntoIterator<Item = (C, N)>) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        let regions =
            entries.into_iter().map(|(code, name)| (code.into(), name.into())).collect();
        Self { regions }
    }

    /// Registers one region, replacing any previous entry for the code.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.regions.insert(code.into(), name.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl RegionRegistry for InMemoryRegionRegistry {
    fn resolve(&self, code: &str) -> Result<Region, RegionLookupError> {
        self.regions
            .get(code)
            .map(|name| Region::new(code, name.clone()))
            .ok_or_else(|| RegionLookupError { code: code.to_owned() })
    }
}
