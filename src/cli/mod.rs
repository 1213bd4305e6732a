//! Command-line front end.
//!
//! This module turns arguments and an optional defaults file into a
//! [`RunConfig`], then drives a [`Generator`] to print passwords. The
//! binary in `main.rs` only sets up logging and maps errors to exit codes.

mod args;
mod config;

pub use args::{normalize_args, Args};
pub use config::{
    ConfigError, Defaults, FileConfig, RunConfig, DEFAULT_COUNT, DEFAULT_POLICY, DEFAULT_SIZE,
    MAX_SIZE,
};

use crate::generator::{Generator, GeneratorError};
use std::io::{self, Write};
use thiserror::Error;

/// Errors from a complete run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("new generator - {0}")]
    Create(#[source] GeneratorError),
    #[error("generate - {0}")]
    Generate(#[source] GeneratorError),
    #[error("write - {0}")]
    Output(#[from] io::Error),
}

impl RunError {
    /// Returns true for programming bugs surfaced by the generator.
    pub fn is_usage(&self) -> bool {
        match self {
            RunError::Create(e) | RunError::Generate(e) => e.is_usage(),
            RunError::Output(_) => false,
        }
    }
}

/// Generates `config.count` passwords, one per line, into `out`.
///
/// The generator is created once and disposed after the last password.
/// An unknown policy code fails before any entropy source is opened.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<(), RunError> {
    let spec = config
        .spec()
        .map_err(|e| RunError::Create(GeneratorError::from(e)))?;
    let mut generator = Generator::new(&spec).map_err(RunError::Create)?;

    tracing::info!(
        policy = %spec.policy,
        source = %generator.source_kind(),
        size = config.size,
        count = config.count,
        "Generating passwords"
    );

    for _ in 0..config.count {
        let password = generator.generate(config.size).map_err(RunError::Generate)?;
        writeln!(out, "{password}")?;
    }
    out.flush()?;

    generator.dispose();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::EntropyError;
    use crate::filter::PolicyError;

    fn seeded_config() -> RunConfig {
        let mut config = RunConfig::default();
        config.seed = "testseed".to_string();
        config
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_run_prints_count_lines() {
        let mut config = seeded_config();
        config.policy = "n".to_string();
        config.size = 10;
        config.count = 3;

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let lines = lines(&out);
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.len(), 10);
            assert!(line.bytes().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_run_default_size() {
        let mut out = Vec::new();
        run(&seeded_config(), &mut out).unwrap();
        let lines = lines(&out);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), DEFAULT_SIZE);
    }

    #[test]
    fn test_run_zero_count_prints_nothing() {
        let mut config = seeded_config();
        config.count = 0;
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_unknown_policy() {
        let mut config = seeded_config();
        config.policy = "q".to_string();
        let mut out = Vec::new();

        let err = run(&config, &mut out).unwrap_err();
        assert!(matches!(
            err,
            RunError::Create(GeneratorError::Policy(PolicyError::Unknown(_)))
        ));
        assert!(!err.is_usage());
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_short_seed() {
        let mut config = RunConfig::default();
        config.seed = "short".to_string();
        let mut out = Vec::new();

        let err = run(&config, &mut out).unwrap_err();
        assert!(matches!(
            err,
            RunError::Create(GeneratorError::Entropy(EntropyError::SeedTooShort { len: 5 }))
        ));
        assert_eq!(
            err.to_string(),
            "new generator - entropy source - seed phrase must be at least 8 characters, got 5"
        );
    }

    #[test]
    fn test_usage_error_classified() {
        let err = RunError::Generate(GeneratorError::Entropy(EntropyError::Usage { len: 2 }));
        assert!(err.is_usage());
    }
}
