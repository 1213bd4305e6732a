//! Entropy sources.
//!
//! The generator treats its entropy source as a plain byte stream read
//! one byte at a time. Two concrete sources exist: the operating system's
//! blocking random device, and a seed-phrase driven pool that hashes PRNG
//! output mixed with the wall clock. [`Source`] picks between them from the
//! seed phrase; [`MockSource`] is a scripted stand-in for tests.

mod clock;
mod mock;
mod os;
mod prng;
mod seeded;

pub use clock::{Clock, FixedClock, SystemClock};
pub use mock::MockSource;
pub use os::{OsSource, DEFAULT_DEVICE};
pub use prng::LinearRng;
pub use seeded::{derive_seed, SeededSource, MIN_SEED_LEN, POOL_SIZE};

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening or reading an entropy source.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("seed phrase must be at least {min} characters, got {len}", min = MIN_SEED_LEN)]
    SeedTooShort { len: usize },
    #[error("failed to open entropy device {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unexpected error reading from random source: {0}")]
    Read(#[source] io::Error),
    #[error("random source exhausted")]
    Exhausted,
    #[error("random source is closed")]
    Closed,
    #[error("BUG - per-byte read called with a {len}-byte buffer")]
    Usage { len: usize },
}

/// A byte stream used as the generator's sole randomness input.
pub trait EntropySource {
    /// Reads the next byte.
    fn read_one(&mut self) -> Result<u8, EntropyError>;

    /// Releases any resources held by the source. Calling it again is a no-op.
    fn close(&mut self);

    /// Returns true until the source has been closed.
    fn is_open(&self) -> bool;

    /// Fills a one-byte buffer.
    ///
    /// Any other buffer length is a caller bug and yields
    /// [`EntropyError::Usage`] without consuming entropy.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, EntropyError> {
        match buf {
            [slot] => {
                *slot = self.read_one()?;
                Ok(1)
            }
            _ => Err(EntropyError::Usage { len: buf.len() }),
        }
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn read_one(&mut self) -> Result<u8, EntropyError> {
        (**self).read_one()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn read_one(&mut self) -> Result<u8, EntropyError> {
        (**self).read_one()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

/// Which concrete source backs a [`Source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Operating system random device.
    Os,
    /// Seed-phrase derived pool.
    Seeded,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Os => f.write_str("os"),
            SourceKind::Seeded => f.write_str("seeded"),
        }
    }
}

/// The entropy source selected for a generator.
#[derive(Debug)]
pub enum Source {
    /// Empty seed phrase.
    Os(OsSource),
    /// Non-empty seed phrase.
    Seeded(SeededSource),
}

impl Source {
    /// Opens the OS device when `seed_phrase` is empty, otherwise builds a
    /// seeded pool from it.
    pub fn from_seed_phrase(seed_phrase: &str) -> Result<Self, EntropyError> {
        if seed_phrase.is_empty() {
            OsSource::open().map(Source::Os)
        } else {
            SeededSource::new(seed_phrase.as_bytes()).map(Source::Seeded)
        }
    }

    /// Returns which variant this is.
    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Os(_) => SourceKind::Os,
            Source::Seeded(_) => SourceKind::Seeded,
        }
    }
}

impl EntropySource for Source {
    fn read_one(&mut self) -> Result<u8, EntropyError> {
        match self {
            Source::Os(source) => source.read_one(),
            Source::Seeded(source) => source.read_one(),
        }
    }

    fn close(&mut self) {
        match self {
            Source::Os(source) => source.close(),
            Source::Seeded(source) => source.close(),
        }
    }

    fn is_open(&self) -> bool {
        match self {
            Source::Os(source) => source.is_open(),
            Source::Seeded(source) => source.is_open(),
        }
    }
}
