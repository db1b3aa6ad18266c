//! Deployment environment names.

use std::fmt;

/// Text culture used for environment-name normalization.
///
/// Rust has no ambient culture, so the invariant culture is the only
/// recognized value today; the enum keeps the knob in the configuration
/// surface for registries that one day need locale-aware folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Culture {
    /// Culture-independent trimming and character classification.
    #[default]
    Invariant,
}

/// Options recognized by [`EnvironmentName::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject any non-ASCII character instead of accepting the full Unicode
    /// alphanumeric classes.
    pub ascii_only: bool,
    /// Culture used for whitespace trimming and case classification.
    pub culture: Culture,
}

/// A canonical deployment environment name such as `Development` or
/// `Production`.
///
/// Instances exist only through [`EnvironmentName::parse`], so the inner
/// token is always a trimmed, non-empty alphanumeric string. Parsing is
/// total over its own output: feeding the stringified form back through
/// `parse` with the same options yields an equal token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvironmentName(String);

impl EnvironmentName {
    /// Parses a raw string into a canonical token.
    ///
    /// Returns `None` when the trimmed input is empty, contains a
    /// non-alphanumeric character, or contains a non-ASCII character while
    /// `options.ascii_only` is set. Absence is the only failure mode; callers
    /// decide whether it is a defect.
    #[must_use]
    pub fn parse(raw: &str, options: &ParseOptions) -> Option<Self> {
        // Invariant culture: Unicode trim, no locale-specific folding.
        let Culture::Invariant = options.culture;
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        let valid = if options.ascii_only {
            token.chars().all(|c| c.is_ascii_alphanumeric())
        } else {
            token.chars().all(char::is_alphanumeric)
        };
        valid.then(|| Self(token.to_owned()))
    }

    /// The `Development` environment.
    #[must_use]
    pub fn development() -> Self {
        Self("Development".to_owned())
    }

    /// The `Staging` environment.
    #[must_use]
    pub fn staging() -> Self {
        Self("Staging".to_owned())
    }

    /// The `Production` environment.
    #[must_use]
    pub fn production() -> Self {
        Self("Production".to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EnvironmentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
