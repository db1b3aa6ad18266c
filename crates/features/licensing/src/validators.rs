//! Atomic field validators.
//!
//! Each validator inspects one field and appends at most one defect to the
//! sink, so a converter can run its whole check list in declaration order
//! and still report everything that is wrong.

use crate::validation::{Defect, Defects};
use fossa_domain::identifiers::SystemId;

/// Rejects values from a configured forbidden set.
pub(crate) fn reject_sentinel<T: PartialEq>(
    value: &T,
    sentinels: &[T],
    defect: Defect,
    defects: &mut Defects,
) {
    if sentinels.contains(value) {
        defects.push(defect);
    }
}

/// Requires a strictly positive count.
pub(crate) fn require_positive(value: i64, defect: Defect, defects: &mut Defects) {
    if value <= 0 {
        defects.push(defect);
    }
}

/// Requires a present, non-blank string. Returns whether the value is usable
/// so dependent checks can be skipped without emitting a second, misleading
/// defect.
pub(crate) fn require_non_blank(
    value: Option<&str>,
    defect: Defect,
    defects: &mut Defects,
) -> bool {
    match value {
        Some(s) if !s.trim().is_empty() => true,
        _ => {
            defects.push(defect);
            false
        },
    }
}

/// Requires an exact character count, with a distinct defect per side.
/// Returns whether the length matched.
pub(crate) fn require_exact_length(
    value: &str,
    length: usize,
    too_short: Defect,
    too_long: Defect,
    defects: &mut Defects,
) -> bool {
    let count = value.chars().count();
    if count < length {
        defects.push(too_short);
        false
    } else if count > length {
        defects.push(too_long);
        false
    } else {
        true
    }
}

/// Re-derives a system identifier from its 16-byte wire form. A wrong-length
/// sequence and a reserved identifier report the same defect: neither
/// carries a usable identifier.
pub(crate) fn derive_system_id(
    bytes: &[u8],
    defect: Defect,
    defects: &mut Defects,
) -> Option<SystemId> {
    let Ok(raw) = <[u8; 16]>::try_from(bytes) else {
        defects.push(defect);
        return None;
    };
    let id = SystemId::from_bytes(raw);
    if id.is_reserved() {
        defects.push(defect);
        return None;
    }
    Some(id)
}
