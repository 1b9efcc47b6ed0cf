//! Shared utilities.
//!
//! Test helpers used across the crate's unit tests.

#[cfg(test)]
pub mod testutil;
