//! Shared test utilities used across phat crates.
//!
//! Fixtures are plain `(dimension, rows)` column lists so this crate does not
//! depend on `phat-core`; callers build whichever matrix type they need.

pub mod complex;
pub mod files;
pub mod tracing;
