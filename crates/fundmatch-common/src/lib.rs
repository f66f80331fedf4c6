//! fundmatch-common — Shared error types used across all Fundmatch crates.

pub mod error;

pub use error::{FundmatchError, Result};
