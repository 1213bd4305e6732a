//! Generated password container.

use std::fmt;
use zeroize::Zeroize;

/// A generated password.
///
/// Holds only bytes from the printable ASCII range. The backing buffer is
/// allocated once at full size and wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn with_capacity(size: usize) -> Self {
        Self(String::with_capacity(size))
    }

    /// Appends an ASCII byte.
    pub(crate) fn push(&mut self, c: u8) {
        debug_assert!(c.is_ascii());
        self.0.push(char::from(c));
    }

    /// The password text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The password as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes (equal to characters).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length password.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
