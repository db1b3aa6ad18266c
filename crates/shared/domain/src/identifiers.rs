//! Identifier types shared by every entitlement kind.

use std::fmt;

pub use ulid::Ulid;

/// Company identifier values that never belong to a real company.
///
/// Together with the strictly-positive rule this leaves the open interval
/// `1..i64::MAX` as the valid identifier space.
pub const COMPANY_ID_SENTINELS: [i64; 2] = [i64::MIN, i64::MAX];

/// Unique identifier of a licensed system installation.
///
/// Backed by a ULID: 128 bits, lexicographically sortable in both its
/// canonical text form and its big-endian byte form. The all-zero value
/// (which doubles as the lexical minimum) and the lexical maximum are
/// reserved and never identify a real installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SystemId(Ulid);

impl SystemId {
    /// The all-zero value; also the lexical minimum of the space.
    pub const NIL: Self = Self(Ulid(u128::MIN));
    /// The lexical maximum of the space.
    pub const MAX: Self = Self(Ulid(u128::MAX));
    /// Values that never identify a real installation.
    pub const RESERVED: [Self; 2] = [Self::NIL, Self::MAX];

    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Rebuilds an identifier from its big-endian 16-byte form.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Ulid(u128::from_be_bytes(bytes)))
    }

    /// Big-endian 16-byte form; byte order matches lexicographic order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0.0.to_be_bytes()
    }

    #[must_use]
    pub const fn as_ulid(self) -> Ulid {
        self.0
    }

    /// Whether this is one of the reserved values of the space.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        self.0.0 == u128::MIN || self.0.0 == u128::MAX
    }
}

impl From<Ulid> for SystemId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
