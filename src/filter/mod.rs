//! Character-class filtering.
//!
//! This module maps a [`Policy`] plus a set of extra characters onto a
//! dense acceptance table. The generator draws candidate bytes from the
//! entropy source and keeps only those the filter accepts.

mod policy;
mod table;

pub use policy::{Policy, PolicyError};
pub use table::{Filter, CANDIDATE_FIRST, CANDIDATE_SPAN};
