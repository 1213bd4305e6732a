//! Generator request description.

use crate::filter::{Policy, PolicyError};
use std::fmt;
use zeroize::Zeroize;

/// What the caller wants generated.
///
/// An empty seed phrase selects the OS entropy device; a non-empty one
/// selects the seeded source and must be at least
/// [`MIN_SEED_LEN`](crate::entropy::MIN_SEED_LEN) bytes. The seed phrase
/// is wiped when the `Spec` is dropped.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Spec {
    /// Character-class policy.
    pub policy: Policy,
    /// Seed phrase for the seeded source, or empty for the OS device.
    pub seed_phrase: String,
    /// Extra characters allowed on top of the policy, used verbatim.
    pub special_chars: String,
    /// Suppress adjacent duplicate characters.
    pub no_repeat: bool,
}

impl Spec {
    /// Creates a spec for `policy` with no modifiers.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            seed_phrase: String::new(),
            special_chars: String::new(),
            no_repeat: false,
        }
    }

    /// Resolves a policy wire code into a spec.
    pub fn from_code(code: &str) -> Result<Self, PolicyError> {
        code.parse().map(Self::new)
    }

    /// Sets the seed phrase, wiping the previous one.
    pub fn with_seed_phrase(mut self, seed_phrase: impl Into<String>) -> Self {
        self.seed_phrase.zeroize();
        self.seed_phrase = seed_phrase.into();
        self
    }

    /// Sets extra accepted characters.
    pub fn with_special_chars(mut self, special_chars: impl Into<String>) -> Self {
        self.special_chars = special_chars.into();
        self
    }

    /// Enables or disables adjacent-duplicate suppression.
    pub fn with_no_repeat(mut self, no_repeat: bool) -> Self {
        self.no_repeat = no_repeat;
        self
    }
}

impl Drop for Spec {
    fn drop(&mut self) {
        self.seed_phrase.zeroize();
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("policy", &self.policy)
            .field("seeded", &!self.seed_phrase.is_empty())
            .field("special_chars", &self.special_chars)
            .field("no_repeat", &self.no_repeat)
            .finish()
    }
}
