use std::{fmt, str::FromStr};

use crate::domain::error::DomainError;

/// Namespace tag every derived identifier starts with
pub const IDENTIFIER_PREFIX: &str = "TWOL_";

/// Largest value a derived identifier can carry (53 bits)
pub const MAX_IDENTIFIER_VALUE: u64 = (1 << 53) - 1;

/// Deterministic short identifier, rendered as `TWOL_<decimal>`.
///
/// This is a fingerprint for cache keys and dedup ids. It is not
/// collision resistant and must never stand in for a cryptographic hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DerivedIdentifier(u64);

impl DerivedIdentifier {
    pub(crate) fn from_value(value: u64) -> Self {
        debug_assert!(value <= MAX_IDENTIFIER_VALUE);
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DerivedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", IDENTIFIER_PREFIX, self.0)
    }
}

impl FromStr for DerivedIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(IDENTIFIER_PREFIX)
            .ok_or_else(|| DomainError::InvalidIdentifier(s.to_string()))?;

        // u64::from_str would accept a leading '+'
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidIdentifier(s.to_string()));
        }

        match digits.parse::<u64>() {
            Ok(value) if value <= MAX_IDENTIFIER_VALUE => Ok(Self(value)),
            _ => Err(DomainError::InvalidIdentifier(s.to_string())),
        }
    }
}
