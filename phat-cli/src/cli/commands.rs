//! The benchmark sweep and its failure modes.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use phat_core::{MatrixIoError, MatrixIoErrorCode};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::{
    config::{AlgorithmKind, RepresentationKind, RunConfiguration, UsageError, usage},
    dispatch::Dispatcher,
    report::render_result,
    strategy::StrategySpace,
};

/// Errors that end a benchmark invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line was rejected or help was requested.
    #[error(transparent)]
    Usage(#[from] UsageError),
    /// An input file could not be loaded.
    #[error("Error opening file {}", .path.display())]
    Load {
        /// File named on the command line.
        path: PathBuf,
        /// Loader failure.
        #[source]
        source: MatrixIoError,
    },
    /// The registry has no computation for the requested cell.
    #[error(
        "no computation registered for {} with {}",
        .representation.label(),
        .algorithm.label()
    )]
    Unregistered {
        /// Requested representation.
        representation: RepresentationKind,
        /// Requested algorithm.
        algorithm: AlgorithmKind,
    },
    /// Writing a report line failed.
    #[error("failed to write report")]
    Report {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Stable loader code when the failure came from reading a matrix.
    #[must_use]
    pub const fn matrix_io_code(&self) -> Option<MatrixIoErrorCode> {
        match self {
            Self::Load { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}

/// Runs every tuple of `config` in order, writing one report line per
/// completed run to `writer`. Returns the number of completed runs.
///
/// The sweep stops at the first failure; lines already written stand.
///
/// # Errors
/// Returns [`CliError::Load`] for an unreadable input,
/// [`CliError::Unregistered`] for a registry gap and [`CliError::Report`]
/// when `writer` fails.
///
/// # Examples
/// ```
/// use phat_cli::cli::{parse_arguments, run_benchmark};
///
/// // Flags without inputs describe an empty sweep.
/// let config = parse_arguments(["--ascii", "--row"])?;
/// let mut out = Vec::new();
/// assert_eq!(run_benchmark(&config, &mut out)?, 0);
/// assert!(out.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "cli.run",
    err(level = "debug"),
    skip(config, writer),
    fields(format = config.format().as_str(), runs = field::Empty),
)]
pub fn run_benchmark(config: &RunConfiguration, mut writer: impl Write) -> Result<usize, CliError> {
    let space = StrategySpace::new(config);
    Span::current().record("runs", space.len());
    let dispatcher = Dispatcher::new(config.format());

    let mut completed = 0_usize;
    for run in space {
        let result = dispatcher.dispatch(run)?;
        render_result(&result, &mut writer).map_err(|source| CliError::Report { source })?;
        completed += 1;
    }
    info!(completed, "benchmark sweep finished");
    Ok(completed)
}

/// Writes the user-facing diagnostic for `error`: the usage screen for
/// command-line problems, the failing file followed by the usage screen for
/// load failures, and the error message otherwise.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_failure(error: &CliError, mut writer: impl Write) -> io::Result<()> {
    match error {
        CliError::Usage(_) => write!(writer, "{}", usage())?,
        CliError::Load { .. } => write!(writer, "\n {error}\n{}", usage())?,
        CliError::Unregistered { .. } | CliError::Report { .. } => writeln!(writer, "{error}")?,
    }
    writer.flush()
}
