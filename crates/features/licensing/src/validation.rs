//! Error-accumulating validation results.
//!
//! Conversions report defects, they do not throw them: a run collects every
//! failed check into an ordered list and the caller gets the whole list at
//! once. [`Validation`] is the result shape; [`Defects`] is the explicit
//! "collect all, short-circuit none" sink that converters push into while
//! walking their field list in declaration order.

use std::borrow::Cow;
use std::fmt;

/// One validation failure: a stable numeric code paired with a message.
///
/// Codes identify the failed condition across releases (see
/// [`crate::codes`]); messages are for humans and free to evolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    code: i32,
    message: Cow<'static, str>,
}

impl Defect {
    #[must_use]
    pub const fn new(code: i32, message: &'static str) -> Self {
        Self { code, message: Cow::Borrowed(message) }
    }

    /// Stable numeric code of the failed condition.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

/// Ordered defect sink for running a full check list before judging the
/// result.
///
/// Ordinary [`Validation::and_then`] chaining stops at the first failure;
/// a converter instead pushes into a `Defects` list so every independent
/// check runs and defects come out in field-declaration order. Only
/// genuinely value-dependent checks get skipped, and the skipped step never
/// adds a second defect of its own.
#[derive(Debug, Default)]
pub struct Defects(Vec<Defect>);

impl Defects {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records one failed check.
    pub fn push(&mut self, defect: Defect) {
        self.0.push(defect);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Resolves the accumulation: the value when no check failed, otherwise
    /// the collected defect list.
    #[must_use]
    pub fn finish<T>(self, value: T) -> Validation<T> {
        if self.0.is_empty() { Validation::Success(value) } else { Validation::Failure(self.0) }
    }

    /// Resolves a failed accumulation where no value could be produced.
    /// At least one defect must have been recorded by then.
    #[must_use]
    pub fn fail<T>(self) -> Validation<T> {
        debug_assert!(!self.0.is_empty(), "failing a validation with no recorded defect");
        Validation::Failure(self.0)
    }
}

/// Outcome of a conversion: the produced value, or every defect found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    /// The value passed every check.
    Success(T),
    /// At least one check failed. The list is never empty and preserves
    /// field-declaration order.
    Failure(Vec<Defect>),
}

impl<T> Validation<T> {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Collected defects; empty on success.
    #[must_use]
    pub fn defects(&self) -> &[Defect] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(defects) => defects,
        }
    }

    /// Applies `f` to the value; a failure passes through untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U> {
        match self {
            Self::Success(value) => Validation::Success(f(value)),
            Self::Failure(defects) => Validation::Failure(defects),
        }
    }

    /// Chains a dependent computation; a failure passes through untouched.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Validation<U>) -> Validation<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(defects) => Validation::Failure(defects),
        }
    }

    /// Merges two independent results, concatenating defect lists in
    /// argument order; succeeds only when both sides do.
    pub fn zip_with<U, V>(
        self,
        other: Validation<U>,
        f: impl FnOnce(T, U) -> V,
    ) -> Validation<V> {
        match (self, other) {
            (Self::Success(a), Validation::Success(b)) => Validation::Success(f(a, b)),
            (Self::Failure(mut a), Validation::Failure(b)) => {
                a.extend(b);
                Validation::Failure(a)
            },
            (Self::Failure(a), Validation::Success(_)) => Validation::Failure(a),
            (Self::Success(_), Validation::Failure(b)) => Validation::Failure(b),
        }
    }

    /// Terminal inspection: runs `f` against the value on success.
    pub fn on_success(&self, f: impl FnOnce(&T)) {
        if let Self::Success(value) = self {
            f(value);
        }
    }

    /// Converts into a plain `Result`, surrendering the non-empty guarantee.
    pub fn into_result(self) -> Result<T, Vec<Defect>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(defects) => Err(defects),
        }
    }
}
