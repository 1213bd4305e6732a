//! Byte-indexed acceptance table.

use super::policy::Policy;
use std::fmt;

/// Lowest byte the generator's candidate mapping can produce.
pub const CANDIDATE_FIRST: u8 = 33;

/// Number of candidate bytes, `[33, 127)`.
pub const CANDIDATE_SPAN: u8 = 94;

/// Dense acceptance table over all 256 byte values.
///
/// `accept` is a single indexed load, so its cost does not depend on
/// the policy or on the byte being tested. The table holds no references
/// and is freely copyable between threads.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    table: [bool; 256],
}

impl Filter {
    /// Builds a filter from a policy plus extra allowed bytes.
    ///
    /// The extra bytes are applied verbatim. Bytes outside the printable
    /// range are marked too, but the generator can never draw them.
    pub fn new(policy: Policy, extra: &[u8]) -> Self {
        let mut table = [false; 256];
        policy.populate(&mut |c: u8| table[c as usize] = true);
        for &c in extra {
            table[c as usize] = true;
        }
        Self { table }
    }

    /// Returns true if `c` is an acceptable output byte.
    #[inline]
    pub fn accept(&self, c: u8) -> bool {
        self.table[c as usize]
    }

    /// Iterates over every accepted byte in ascending order.
    pub fn accepted(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&c| self.accept(c))
    }

    /// Number of accepted bytes.
    pub fn len(&self) -> usize {
        self.table.iter().filter(|&&ok| ok).count()
    }

    /// Returns true if no byte is accepted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of accepted bytes the generator can actually draw.
    pub fn candidate_count(&self) -> usize {
        let first = CANDIDATE_FIRST as usize;
        let last = first + CANDIDATE_SPAN as usize;
        self.table[first..last].iter().filter(|&&ok| ok).count()
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("accepted", &self.len())
            .field("candidates", &self.candidate_count())
            .finish()
    }
}
