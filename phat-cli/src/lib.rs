//! Support library for the `benchmark` binary.
//!
//! Exposes the argument parser, strategy space, dispatcher and reporter so
//! doctests and integration tests can drive a sweep without spawning a
//! subprocess.

pub mod cli;
pub mod logging;
