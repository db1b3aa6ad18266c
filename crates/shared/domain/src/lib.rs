//! # Domain Models
//!
//! Pure domain types for licensing entitlements. Keep this crate lean: no I/O,
//! no networking, no heavy logic. Data and small helpers only.
//!
//! Everything here is an immutable value object: constructed once, compared by
//! field values, no mutation API. Validation of untrusted input lives in the
//! licensing feature crate; this crate only encodes the invariants a value
//! carries once it exists (a parsed [`environment::EnvironmentName`] is always
//! a canonical token, a [`identifiers::SystemId`] knows its reserved values).

pub mod entitlements;
pub mod environment;
pub mod identifiers;
pub mod region;
