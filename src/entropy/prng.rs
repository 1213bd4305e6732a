//! 64-bit linear congruential generator.
//!
//! This is the non-cryptographic PRNG behind the seeded source. Its output
//! is never used directly: each draw is hashed with SHA-512 before any byte
//! reaches the generator.

use rand_core::{impls, Error, RngCore};

/// Knuth's MMIX multiplier.
const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
/// Knuth's MMIX increment.
const INCREMENT: u64 = 1_442_695_040_888_963_407;

/// A 64-bit linear congruential PRNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearRng {
    state: u64,
}

impl LinearRng {
    /// Creates a generator from a signed 64-bit seed.
    pub fn new(seed: i64) -> Self {
        Self { state: seed as u64 }
    }

    /// Returns a non-negative 63-bit integer.
    ///
    /// Takes the high bits of the state, which have the longest period.
    pub fn int63(&mut self) -> i64 {
        (self.next_u64() >> 1) as i64
    }
}

impl RngCore for LinearRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
