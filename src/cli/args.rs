//! Command-line arguments.

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may also be spelled with a single dash.
const LONG_FLAGS: &[&str] = &[
    "policy",
    "size",
    "count",
    "seed",
    "input",
    "extra",
    "norep",
    "no-repeat",
    "config",
    "verbose",
];

/// Long flags whose value is the following argument.
const LONG_TAKES_VALUE: &[&str] = &[
    "--policy", "--size", "--count", "--seed", "--input", "--extra", "--config",
];

/// Short flags that take a value, either attached or as the next argument.
const SHORT_TAKES_VALUE: &[char] = &['p', 's', 'n', 'x', 'c'];

/// Generate random passwords conforming to a character-class policy.
#[derive(Debug, Parser)]
#[command(name = "passgen", version, about)]
pub struct Args {
    /// Policy: {p:printable a:alpha n:num an:alphanum} [default: p]
    #[arg(short = 'p', long = "policy", value_name = "CODE")]
    pub policy: Option<String>,

    /// Password length [default: 64]
    #[arg(short = 's', long = "size", value_name = "LEN")]
    pub size: Option<usize>,

    /// Number of passwords to generate [default: 1]
    #[arg(short = 'n', long = "count", value_name = "N")]
    pub count: Option<usize>,

    /// Seed phrase for the OS agnostic random source (8+ characters)
    #[arg(long = "seed", visible_alias = "input", value_name = "PHRASE", allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Extra characters to allow, used verbatim
    #[arg(short = 'x', long = "extra", value_name = "CHARS", allow_hyphen_values = true)]
    pub extra: Option<String>,

    /// Disallow adjacent duplicate characters
    #[arg(long = "norep", visible_alias = "no-repeat")]
    pub no_repeat: bool,

    /// TOML file with a [defaults] table
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Rewrites single-dash long flags (`-seed`, `-norep`, ...) to their
/// double-dash form so clap accepts the classic spelling.
///
/// Values that follow a flag (including a short cluster such as `-vx`
/// ending in a value flag) and everything after `--` pass through
/// untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();
        if passthrough || expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let rewritten = match text.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') => {
                let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                if LONG_FLAGS.contains(&name) {
                    format!("-{text}")
                } else {
                    text.to_string()
                }
            }
            _ => text.to_string(),
        };

        expect_value = takes_next(&rewritten);
        normalized.push(rewritten.into());
    }

    normalized
}

/// Whether `arg` leaves its flag waiting for the next argument as a value.
fn takes_next(arg: &str) -> bool {
    if let Some(long) = arg.strip_prefix("--") {
        return !long.contains('=') && LONG_TAKES_VALUE.contains(&arg);
    }
    let Some(cluster) = arg.strip_prefix('-') else {
        return false;
    };
    // In a cluster the first value flag takes the rest as its value
    match cluster.find(SHORT_TAKES_VALUE) {
        Some(i) => i + 1 == cluster.len(),
        None => false,
    }
}
