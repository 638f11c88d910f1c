//! Benchmark orchestration: argument scan, strategy space, registry dispatch
//! and reporting.
//!
//! A sweep parses the command line into a [`RunConfiguration`], enumerates
//! every `(path, algorithm, representation, ansatz)` tuple through
//! [`StrategySpace`], resolves each tuple via the [`Registry`] and streams one
//! report line per completed run.

mod commands;
mod config;
mod dispatch;
mod report;
mod strategy;

pub use commands::{CliError, render_failure, run_benchmark};
pub use config::{
    AlgorithmKind, AnsatzKind, RepresentationKind, RunConfiguration, UsageError,
    parse_arguments, usage,
};
pub use dispatch::{Dispatcher, Registry, RunResult};
pub use report::render_result;
pub use strategy::{RunTuple, StrategySpace};

#[cfg(test)]
mod test_helpers;
