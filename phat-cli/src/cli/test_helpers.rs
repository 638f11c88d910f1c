//! Small helpers shared across CLI tests.

use std::path::{Path, PathBuf};

use phat_test_support::{
    complex::single_triangle,
    files::{write_ascii, write_binary},
};
use tempfile::TempDir;

use super::{CliError, parse_arguments, run_benchmark};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn triangle_binary(dir: &TempDir, name: &str) -> PathBuf {
    match write_binary(dir.path(), name, &single_triangle()) {
        Ok(path) => path,
        Err(err) => panic!("failed to write {name}: {err}"),
    }
}

pub(super) fn triangle_ascii(dir: &TempDir, name: &str) -> PathBuf {
    match write_ascii(dir.path(), name, &single_triangle()) {
        Ok(path) => path,
        Err(err) => panic!("failed to write {name}: {err}"),
    }
}

pub(super) fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

/// Parses `args`, runs the sweep into a buffer and returns the outcome with
/// the report lines written before it ended.
pub(super) fn sweep(args: &[String]) -> (Result<usize, CliError>, Vec<String>) {
    let config = match parse_arguments(args) {
        Ok(config) => config,
        Err(err) => panic!("arguments should parse: {err}"),
    };
    let mut out = Vec::new();
    let outcome = run_benchmark(&config, &mut out);
    let text = String::from_utf8_lossy(&out).into_owned();
    (outcome, text.lines().map(ToOwned::to_owned).collect())
}
