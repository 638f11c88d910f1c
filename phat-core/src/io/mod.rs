//! Loading and saving boundary matrices.
//!
//! Two formats are supported. The ascii format holds one column per line as
//! `dim row row ...`, skipping blank lines and lines starting with `#`. The
//! binary format is a little-endian `i64` stream: the column count, then per
//! column its dimension, entry count and entries.
//!
//! Loaders sort each column and reject duplicate or out-of-range rows, so a
//! loaded matrix always satisfies the [`BoundaryMatrix`] invariants.

mod ascii;
mod binary;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use tracing::instrument;

use crate::{
    error::MatrixIoError,
    index::{Dimension, Index},
    matrix::BoundaryMatrix,
    representation::Representation,
};

/// On-disk encoding of a boundary matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatrixFormat {
    /// Whitespace-separated text, one column per line.
    Ascii,
    /// Little-endian `i64` stream.
    #[default]
    Binary,
}

impl MatrixFormat {
    /// Returns the lowercase name of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Binary => "binary",
        }
    }
}

/// A column as read from disk, before validation.
struct RawColumn {
    dim: i64,
    rows: Vec<i64>,
}

fn validate(raw: Vec<RawColumn>) -> Result<Vec<(Dimension, Vec<Index>)>, MatrixIoError> {
    let num_cols = raw.len();
    raw.into_iter()
        .enumerate()
        .map(|(column, RawColumn { dim, rows })| {
            let dim = Dimension::try_from(dim)
                .map_err(|_| MatrixIoError::DimensionOutOfRange { column, value: dim })?;
            let mut rows = rows
                .into_iter()
                .map(|index| {
                    Index::try_from(index)
                        .ok()
                        .filter(|&row| row < num_cols)
                        .ok_or(MatrixIoError::IndexOutOfRange {
                            column,
                            index,
                            num_cols,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.sort_unstable();
            if let Some(pair) = rows.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(MatrixIoError::DuplicateIndex {
                    column,
                    index: pair[0],
                });
            }
            Ok((dim, rows))
        })
        .collect()
}

impl<R: Representation> BoundaryMatrix<R> {
    /// Loads a matrix from `path` in the given `format`.
    ///
    /// # Errors
    /// Returns [`MatrixIoError::Open`] when the file cannot be opened and the
    /// format-specific errors of [`Self::read_ascii`] or
    /// [`Self::read_binary`] when its contents are malformed.
    #[instrument(
        level = "debug",
        skip(path, format),
        fields(path = %path.display(), format = format.as_str(), representation = R::NAME),
        err(level = "debug"),
    )]
    pub fn load(path: &Path, format: MatrixFormat) -> Result<Self, MatrixIoError> {
        let file = File::open(path).map_err(|source| MatrixIoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        match format {
            MatrixFormat::Ascii => Self::read_ascii(reader),
            MatrixFormat::Binary => Self::read_binary(reader),
        }
    }

    /// Loads an ascii matrix from `path`.
    ///
    /// # Errors
    /// See [`Self::load`].
    pub fn load_ascii(path: &Path) -> Result<Self, MatrixIoError> {
        Self::load(path, MatrixFormat::Ascii)
    }

    /// Loads a binary matrix from `path`.
    ///
    /// # Errors
    /// See [`Self::load`].
    pub fn load_binary(path: &Path) -> Result<Self, MatrixIoError> {
        Self::load(path, MatrixFormat::Binary)
    }

    /// Saves the matrix to `path` in the given `format`, replacing any
    /// existing file.
    ///
    /// # Errors
    /// Returns [`MatrixIoError::Write`] when the file cannot be created or
    /// written.
    #[instrument(
        level = "debug",
        skip(self, path, format),
        fields(path = %path.display(), format = format.as_str()),
        err(level = "debug"),
    )]
    pub fn save(&self, path: &Path, format: MatrixFormat) -> Result<(), MatrixIoError> {
        let write_error = |source| MatrixIoError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
        match format {
            MatrixFormat::Ascii => self.write_ascii(&mut writer),
            MatrixFormat::Binary => self.write_binary(&mut writer),
        }
        .and_then(|()| writer.flush())
        .map_err(write_error)
    }

    /// Saves the matrix to `path` as ascii.
    ///
    /// # Errors
    /// See [`Self::save`].
    pub fn save_ascii(&self, path: &Path) -> Result<(), MatrixIoError> {
        self.save(path, MatrixFormat::Ascii)
    }

    /// Saves the matrix to `path` as binary.
    ///
    /// # Errors
    /// See [`Self::save`].
    pub fn save_binary(&self, path: &Path) -> Result<(), MatrixIoError> {
        self.save(path, MatrixFormat::Binary)
    }

    fn from_validated(raw: Vec<RawColumn>) -> Result<Self, MatrixIoError> {
        Ok(Self::from_columns(validate(raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn raw(dim: i64, rows: &[i64]) -> RawColumn {
        RawColumn {
            dim,
            rows: rows.to_vec(),
        }
    }

    #[test]
    fn validate_sorts_rows() {
        let columns = validate(vec![raw(0, &[]), raw(0, &[]), raw(1, &[1, 0])])
            .expect("columns should validate");
        assert_eq!(columns[2], (1, vec![0, 1]));
    }

    #[rstest]
    #[case::negative_dimension(vec![raw(-1, &[])], "MATRIX_IO_DIMENSION_OUT_OF_RANGE")]
    #[case::huge_dimension(vec![raw(256, &[])], "MATRIX_IO_DIMENSION_OUT_OF_RANGE")]
    #[case::negative_row(vec![raw(0, &[]), raw(1, &[-1])], "MATRIX_IO_INDEX_OUT_OF_RANGE")]
    #[case::row_past_end(vec![raw(0, &[]), raw(1, &[2])], "MATRIX_IO_INDEX_OUT_OF_RANGE")]
    #[case::duplicate_row(vec![raw(0, &[]), raw(1, &[0, 0])], "MATRIX_IO_DUPLICATE_INDEX")]
    fn validate_rejects_malformed_columns(#[case] columns: Vec<RawColumn>, #[case] code: &str) {
        let err = validate(columns).expect_err("columns should be rejected");
        assert_eq!(err.code().as_str(), code);
    }

    #[rstest]
    #[case(MatrixFormat::Ascii, "ascii")]
    #[case(MatrixFormat::Binary, "binary")]
    fn format_names_are_lowercase(#[case] format: MatrixFormat, #[case] expected: &str) {
        assert_eq!(format.as_str(), expected);
    }

    #[test]
    fn binary_is_the_default_format() {
        assert_eq!(MatrixFormat::default(), MatrixFormat::Binary);
    }
}
