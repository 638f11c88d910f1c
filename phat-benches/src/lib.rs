//! Benchmark support crate for phat.
//!
//! Provides seeded synthetic boundary matrices and parameter labels used by
//! the Criterion benchmarks comparing representations, reduction algorithms
//! and ansaetze.

pub mod error;
pub mod params;
pub mod source;
