//! Password character-class policies.
//!
//! A policy names a predetermined set of acceptable output bytes. The
//! short wire codes are what the command line and the defaults file use.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while resolving a policy code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("unknown policy flag {0:?} (expected one of p, a, n, an)")]
    Unknown(String),
}

/// Character-class policy for generated passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Any printable ASCII character in `[33, 127)`.
    #[default]
    Printable,
    /// Mixed-case roman alphabet letters.
    Alpha,
    /// Decimal digits `0`-`9`.
    Numeric,
    /// Union of [`Policy::Alpha`] and [`Policy::Numeric`].
    Alphanumeric,
}

impl Policy {
    /// All policies, in wire-code order.
    pub const ALL: [Policy; 4] = [
        Policy::Printable,
        Policy::Alpha,
        Policy::Numeric,
        Policy::Alphanumeric,
    ];

    /// Returns the wire identifier used on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Policy::Printable => "p",
            Policy::Alpha => "a",
            Policy::Numeric => "n",
            Policy::Alphanumeric => "an",
        }
    }

    /// Resolves a wire identifier.
    pub fn from_code(code: &str) -> Result<Self, PolicyError> {
        match code {
            "p" => Ok(Policy::Printable),
            "a" => Ok(Policy::Alpha),
            "n" => Ok(Policy::Numeric),
            "an" => Ok(Policy::Alphanumeric),
            other => Err(PolicyError::Unknown(other.to_string())),
        }
    }

    /// Calls `mark` for every byte this policy accepts.
    pub(crate) fn populate(self, mark: &mut impl FnMut(u8)) {
        match self {
            Policy::Printable => (33u8..127).for_each(&mut *mark),
            Policy::Alpha => {
                (b'A'..=b'Z').for_each(&mut *mark);
                (b'a'..=b'z').for_each(&mut *mark);
            }
            Policy::Numeric => (b'0'..=b'9').for_each(&mut *mark),
            Policy::Alphanumeric => {
                Policy::Alpha.populate(mark);
                Policy::Numeric.populate(mark);
            }
        }
    }
}

impl FromStr for Policy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
