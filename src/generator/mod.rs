//! Password generation by rejection sampling.
//!
//! A [`Generator`] owns a [`Filter`] and an entropy source. Each raw byte
//! is folded into the printable range with `byte % 94 + 33` and kept only
//! if the filter accepts it (and, with no-repeat on, it differs from the
//! previous character). Rejected candidates are simply redrawn.

mod password;
mod spec;

pub use password::Password;
pub use spec::Spec;

use crate::entropy::{EntropyError, EntropySource, Source, SourceKind};
use crate::filter::{Filter, PolicyError, CANDIDATE_FIRST, CANDIDATE_SPAN};
use thiserror::Error;

/// Previous-character marker at the start of every password.
///
/// 127 lies outside the candidate range, so the first character is never
/// suppressed by the no-repeat check.
const SENTINEL: u8 = CANDIDATE_FIRST + CANDIDATE_SPAN;

/// Errors returned by [`Generator`].
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("filter init - {0}")]
    Policy(#[from] PolicyError),
    #[error("entropy source - {0}")]
    Entropy(#[from] EntropyError),
}

impl GeneratorError {
    /// Returns true if the error indicates a programming bug rather than an
    /// environmental fault.
    pub fn is_usage(&self) -> bool {
        matches!(self, GeneratorError::Entropy(EntropyError::Usage { .. }))
    }
}

/// Policy-conforming password generator.
///
/// The generator exclusively owns its entropy source and closes it when
/// disposed or dropped. It is not meant to be shared: every call to
/// [`generate`](Generator::generate) consumes from the same stream.
pub struct Generator<S: EntropySource = Source> {
    filter: Filter,
    no_repeat: bool,
    source: S,
}

impl Generator {
    /// Builds a generator for `spec`, opening the OS device when the seed
    /// phrase is empty and a seeded source otherwise.
    ///
    /// The filter is built before any source is opened.
    pub fn new(spec: &Spec) -> Result<Self, GeneratorError> {
        let filter = Filter::new(spec.policy, spec.special_chars.as_bytes());
        let source = Source::from_seed_phrase(&spec.seed_phrase)?;

        tracing::debug!(
            policy = %spec.policy,
            source = %source.kind(),
            no_repeat = spec.no_repeat,
            accepted = filter.len(),
            "Generator created"
        );

        Ok(Self::from_parts(filter, spec.no_repeat, source))
    }

    /// Which entropy source backs this generator.
    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }
}

impl<S: EntropySource> Generator<S> {
    /// Builds a generator for `spec` over a caller-supplied source.
    ///
    /// The seed phrase in `spec` is ignored.
    pub fn with_source(spec: &Spec, source: S) -> Self {
        let filter = Filter::new(spec.policy, spec.special_chars.as_bytes());
        Self::from_parts(filter, spec.no_repeat, source)
    }

    fn from_parts(filter: Filter, no_repeat: bool, source: S) -> Self {
        debug_assert!(
            filter.candidate_count() > 0,
            "filter accepts no drawable byte"
        );
        Self {
            filter,
            no_repeat,
            source,
        }
    }

    /// The acceptance filter in use.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// The underlying entropy source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generates a password of exactly `size` characters.
    ///
    /// `size == 0` returns immediately without touching the source. A read
    /// failure aborts this call only; the generator stays usable and must
    /// still be disposed.
    pub fn generate(&mut self, size: usize) -> Result<Password, GeneratorError> {
        let mut password = Password::with_capacity(size);
        let mut last = SENTINEL;
        let mut rejected: u64 = 0;
        let mut byte = [0u8; 1];

        while password.len() < size {
            self.source.read_into(&mut byte)?;
            let c = byte[0] % CANDIDATE_SPAN + CANDIDATE_FIRST;

            if !self.filter.accept(c) || (self.no_repeat && c == last) {
                rejected += 1;
                continue;
            }

            password.push(c);
            last = c;
        }

        tracing::debug!(size, rejected, "Password generated");
        Ok(password)
    }

    /// Closes the entropy source and consumes the generator.
    pub fn dispose(mut self) {
        self.source.close();
    }
}

impl<S: EntropySource> Drop for Generator<S> {
    fn drop(&mut self) {
        self.source.close();
    }
}

impl<S: EntropySource> std::fmt::Debug for Generator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("filter", &self.filter)
            .field("no_repeat", &self.no_repeat)
            .field("source_open", &self.source.is_open())
            .finish()
    }
}
