//! Run configuration.
//!
//! Settings come from three layers: command-line flags, an optional TOML
//! defaults file, and built-in defaults, in that order of precedence.

use super::args::Args;
use crate::filter::PolicyError;
use crate::generator::Spec;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use zeroize::Zeroize;

/// Default policy code.
pub const DEFAULT_POLICY: &str = "p";
/// Default password length.
pub const DEFAULT_SIZE: usize = 64;
/// Default number of passwords.
pub const DEFAULT_COUNT: usize = 1;
/// Largest accepted password length.
pub const MAX_SIZE: usize = 1 << 20;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(String),
    #[error("password length {size} exceeds maximum {max}")]
    InvalidSize { size: usize, max: usize },
}

/// Defaults file format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// The `[defaults]` table. Every key is optional.
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Policy wire code.
    pub policy: Option<String>,
    /// Password length.
    pub size: Option<usize>,
    /// Number of passwords.
    pub count: Option<usize>,
    /// Seed phrase.
    pub seed: Option<String>,
    /// Extra characters.
    pub extra: Option<String>,
    /// Suppress adjacent duplicates.
    pub no_repeat: Option<bool>,
}

impl fmt::Debug for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaults")
            .field("policy", &self.policy)
            .field("size", &self.size)
            .field("count", &self.count)
            .field("seeded", &self.seed.is_some())
            .field("extra", &self.extra)
            .field("no_repeat", &self.no_repeat)
            .finish()
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Fully resolved settings for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Policy wire code, resolved by [`RunConfig::spec`].
    pub policy: String,
    /// Password length.
    pub size: usize,
    /// Number of passwords to print.
    pub count: usize,
    /// Seed phrase, or empty for the OS device.
    pub seed: String,
    /// Extra accepted characters.
    pub extra: String,
    /// Suppress adjacent duplicates.
    pub no_repeat: bool,
}

impl RunConfig {
    /// Resolves parsed arguments, loading the defaults file if one was given.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        let config = Self::merge(args, file.defaults);
        config.validate()?;
        Ok(config)
    }

    /// Layers flags over file defaults over built-in defaults.
    pub fn merge(args: &Args, defaults: Defaults) -> Self {
        Self {
            policy: args
                .policy
                .clone()
                .or(defaults.policy)
                .unwrap_or_else(|| DEFAULT_POLICY.to_string()),
            size: args.size.or(defaults.size).unwrap_or(DEFAULT_SIZE),
            count: args.count.or(defaults.count).unwrap_or(DEFAULT_COUNT),
            seed: args.seed.clone().or(defaults.seed).unwrap_or_default(),
            extra: args.extra.clone().or(defaults.extra).unwrap_or_default(),
            no_repeat: args.no_repeat || defaults.no_repeat.unwrap_or(false),
        }
    }

    /// Checks limits that the generator itself does not impose.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size > MAX_SIZE {
            return Err(ConfigError::InvalidSize {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        Ok(())
    }

    /// Builds the generator spec. Fails on an unknown policy code.
    pub fn spec(&self) -> Result<Spec, PolicyError> {
        Ok(Spec::from_code(&self.policy)?
            .with_seed_phrase(self.seed.clone())
            .with_special_chars(self.extra.clone())
            .with_no_repeat(self.no_repeat))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            policy: DEFAULT_POLICY.to_string(),
            size: DEFAULT_SIZE,
            count: DEFAULT_COUNT,
            seed: String::new(),
            extra: String::new(),
            no_repeat: false,
        }
    }
}

impl Drop for RunConfig {
    fn drop(&mut self) {
        self.seed.zeroize();
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("policy", &self.policy)
            .field("size", &self.size)
            .field("count", &self.count)
            .field("seeded", &!self.seed.is_empty())
            .field("extra", &self.extra)
            .field("no_repeat", &self.no_repeat)
            .finish()
    }
}
