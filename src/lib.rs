//! Policy-driven Password Generator
//!
//! Turns raw entropy into passwords that satisfy a character-class
//! policy, optionally extended with extra characters and with adjacent
//! duplicates suppressed.
//!
//! # Architecture
//!
//! ```text
//! entropy source ──byte──► byte % 94 + 33 ──► filter ──► no-repeat ──► password
//!      ▲                                         │           │
//!      └──────────────── redraw on reject ◄──────┴───────────┘
//! ```
//!
//! - [`filter`]: 256-entry acceptance table built from a [`Policy`]
//! - [`entropy`]: the OS random device, or a seed-phrase driven SHA-512 pool
//! - [`generator`]: rejection sampling over the two
//! - [`cli`]: argument parsing and the defaults file for the binary
//!
//! # Design Principles
//!
//! - **OS entropy by default**: the seeded source is a portable fallback,
//!   not a cryptographic equal
//! - **Exclusive ownership**: a generator owns its source and closes it on
//!   dispose or drop
//! - **Secrets are wiped**: passwords, seed phrases and the seeded pool are
//!   zeroed on drop
//!
//! # Example
//!
//! ```no_run
//! use passgen::{Generator, Policy, Spec};
//!
//! let spec = Spec::new(Policy::Alphanumeric).with_no_repeat(true);
//! let mut generator = Generator::new(&spec).unwrap();
//!
//! for _ in 0..3 {
//!     let password = generator.generate(20).unwrap();
//!     println!("{password}");
//! }
//!
//! generator.dispose();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod cli;
pub mod entropy;
pub mod filter;
pub mod generator;

// Re-export commonly used types at crate root
pub use entropy::{EntropyError, EntropySource, MockSource, OsSource, SeededSource, Source};
pub use filter::{Filter, Policy, PolicyError};
pub use generator::{Generator, GeneratorError, Password, Spec};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
