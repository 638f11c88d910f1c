//! Report lines for completed runs.

use std::io::{self, Write};

use super::dispatch::RunResult;

/// Writes `result` as `<path> <representation> <algorithm> <ansatz> <secs>s`
/// and flushes so each line appears as soon as its run finishes.
///
/// # Errors
/// Returns [`io::Error`] if writing or flushing fails.
///
/// # Examples
/// ```
/// use std::{path::PathBuf, time::Duration};
///
/// use phat_cli::cli::{AlgorithmKind, AnsatzKind, RepresentationKind, RunResult, render_result};
///
/// let result = RunResult {
///     input_path: PathBuf::from("torus.bin"),
///     representation: RepresentationKind::BitTreePivotColumn,
///     algorithm: AlgorithmKind::Twist,
///     ansatz: AnsatzKind::Dual,
///     elapsed: Duration::from_millis(1_260),
/// };
/// let mut out = Vec::new();
/// render_result(&result, &mut out)?;
/// assert_eq!(out, b"torus.bin bit_tree_pivot_column twist_reduction dual 1.3s\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_result(result: &RunResult, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} {} {} {:.1}s",
        result.input_path.display(),
        result.representation.label(),
        result.algorithm.label(),
        result.ansatz.label(),
        result.elapsed_seconds(),
    )?;
    writer.flush()
}
