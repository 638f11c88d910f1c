//! `benchmark`: times every selected combination of representation,
//! reduction algorithm and ansatz on each input boundary matrix.
//!
//! Report lines go to stdout as runs complete. Usage text, load diagnostics
//! and logs go to stderr, and any failure exits with a non-zero status.

use std::{env, io, process::ExitCode};

use anyhow::{Context, Result};

use phat_cli::{
    cli::{CliError, parse_arguments, render_failure, run_benchmark},
    logging::{self, LoggingError},
};
use tracing::{debug, error, field};

/// Parse the command line and run the sweep, streaming report lines.
fn try_main() -> Result<()> {
    let config = parse_arguments(env::args_os().skip(1))
        .map_err(CliError::from)
        .context("invalid command line")?;
    let stdout = io::stdout();
    run_benchmark(&config, stdout.lock()).context("benchmark sweep failed")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let message = format!("{err:#}");
        let cli_error = err.downcast_ref::<CliError>();
        match cli_error {
            Some(CliError::Usage(_)) => debug!(error = %message, "printing usage"),
            _ => {
                let code = cli_error
                    .and_then(CliError::matrix_io_code)
                    .map(|code| field::display(code.as_str()));
                error!(error = %message, code, "benchmark failed");
            }
        }
        if let Some(cli_error) = cli_error {
            if let Err(write_err) = render_failure(cli_error, io::stderr().lock()) {
                error!(error = %write_err, "failed to write diagnostics");
            }
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
