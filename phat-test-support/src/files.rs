//! Writers for boundary matrix files in both on-disk encodings.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::complex::Column;

/// Renders `columns` in the ascii format.
#[must_use]
pub fn ascii_text(columns: &[Column]) -> String {
    let mut text = String::new();
    for (dim, rows) in columns {
        text.push_str(&dim.to_string());
        for row in rows {
            text.push(' ');
            text.push_str(&row.to_string());
        }
        text.push('\n');
    }
    text
}

/// Renders `columns` in the little-endian `i64` binary format.
#[must_use]
pub fn binary_bytes(columns: &[Column]) -> Vec<u8> {
    let mut words: Vec<i64> = vec![to_word(columns.len())];
    for (dim, rows) in columns {
        words.push(i64::from(*dim));
        words.push(to_word(rows.len()));
        words.extend(rows.iter().map(|&row| to_word(row)));
    }
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}

fn to_word(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Writes `columns` as ascii to `dir/name` and returns the path.
///
/// # Errors
/// Propagates the filesystem error.
pub fn write_ascii(dir: &Path, name: &str, columns: &[Column]) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, ascii_text(columns))?;
    Ok(path)
}

/// Writes `columns` as binary to `dir/name` and returns the path.
///
/// # Errors
/// Propagates the filesystem error.
pub fn write_binary(dir: &Path, name: &str, columns: &[Column]) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, binary_bytes(columns))?;
    Ok(path)
}
