//! Little-endian `i64` stream encoding.

use std::io::{self, ErrorKind, Read, Write};

use super::RawColumn;
use crate::{error::MatrixIoError, matrix::BoundaryMatrix, representation::Representation};

/// Upper bound on speculative allocation driven by counts read from disk.
const MAX_PREALLOCATION: usize = 1 << 16;

fn read_i64<Rd: Read>(reader: &mut Rd, what: &'static str) -> Result<i64, MatrixIoError> {
    let mut buf = [0_u8; 8];
    reader.read_exact(&mut buf).map_err(|source| {
        if source.kind() == ErrorKind::UnexpectedEof {
            MatrixIoError::Truncated { what }
        } else {
            MatrixIoError::Read { source }
        }
    })?;
    Ok(i64::from_le_bytes(buf))
}

fn read_count<Rd: Read>(reader: &mut Rd, what: &'static str) -> Result<usize, MatrixIoError> {
    let value = read_i64(reader, what)?;
    usize::try_from(value).map_err(|_| MatrixIoError::InvalidLength { what, value })
}

fn write_i64<W: Write>(writer: &mut W, value: usize) -> io::Result<()> {
    let value = i64::try_from(value).map_err(|err| io::Error::new(ErrorKind::InvalidInput, err))?;
    writer.write_all(&value.to_le_bytes())
}

impl<R: Representation> BoundaryMatrix<R> {
    /// Reads a binary matrix from `reader`.
    ///
    /// # Errors
    /// Returns [`MatrixIoError::Truncated`] when the stream ends early,
    /// [`MatrixIoError::InvalidLength`] for negative counts, and the
    /// validation errors described in [`Self::load`].
    pub fn read_binary<Rd: Read>(mut reader: Rd) -> Result<Self, MatrixIoError> {
        let num_cols = read_count(&mut reader, "column count")?;
        let mut raw = Vec::with_capacity(num_cols.min(MAX_PREALLOCATION));
        for _ in 0..num_cols {
            let dim = read_i64(&mut reader, "column dimension")?;
            let num_entries = read_count(&mut reader, "entry count")?;
            let mut rows = Vec::with_capacity(num_entries.min(MAX_PREALLOCATION));
            for _ in 0..num_entries {
                rows.push(read_i64(&mut reader, "row index")?);
            }
            raw.push(RawColumn { dim, rows });
        }
        Self::from_validated(raw)
    }

    /// Writes the matrix as a little-endian `i64` stream.
    ///
    /// # Errors
    /// Propagates failures from `writer`.
    pub fn write_binary<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write_i64(&mut writer, self.num_cols())?;
        for col in 0..self.num_cols() {
            let rows = self.col(col);
            write_i64(&mut writer, usize::from(self.dim(col)))?;
            write_i64(&mut writer, rows.len())?;
            for row in rows {
                write_i64(&mut writer, row)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoundaryMatrix, MatrixIoErrorCode, VectorSet};

    use rstest::rstest;

    type Matrix = BoundaryMatrix<VectorSet>;

    fn encode(values: &[i64]) -> Vec<u8> {
        values.iter().flat_map(|value| value.to_le_bytes()).collect()
    }

    #[test]
    fn reads_columns_in_order() {
        let bytes = encode(&[3, 0, 0, 0, 0, 1, 2, 1, 0]);
        let matrix = Matrix::read_binary(bytes.as_slice()).expect("stream should parse");
        assert_eq!(matrix.num_cols(), 3);
        assert_eq!(matrix.col(2), vec![0, 1]);
        assert_eq!(matrix.dim(2), 1);
    }

    #[test]
    fn writer_emits_little_endian_words() {
        let matrix = Matrix::from_columns(vec![(0, vec![]), (1, vec![0])]);
        let mut out = Vec::new();
        matrix.write_binary(&mut out).expect("write to vec");
        assert_eq!(out, encode(&[2, 0, 0, 1, 1, 0]));
    }

    #[rstest]
    #[case::empty_stream(&[], MatrixIoErrorCode::Truncated)]
    #[case::missing_column(&[2, 0, 0], MatrixIoErrorCode::Truncated)]
    #[case::missing_entry(&[2, 0, 0, 1, 2, 0], MatrixIoErrorCode::Truncated)]
    #[case::negative_columns(&[-4], MatrixIoErrorCode::InvalidLength)]
    #[case::negative_entries(&[1, 0, -1], MatrixIoErrorCode::InvalidLength)]
    #[case::row_out_of_range(&[1, 1, 1, 5], MatrixIoErrorCode::IndexOutOfRange)]
    fn malformed_streams_are_rejected(#[case] values: &[i64], #[case] code: MatrixIoErrorCode) {
        let bytes = encode(values);
        let err = Matrix::read_binary(bytes.as_slice()).expect_err("stream should be rejected");
        assert_eq!(err.code(), code);
    }

    #[test]
    fn partial_word_counts_as_truncation() {
        let mut bytes = encode(&[1, 0]);
        bytes.extend_from_slice(&[0, 0, 0]);
        let err = Matrix::read_binary(bytes.as_slice()).expect_err("stream should be rejected");
        assert_eq!(err.code(), MatrixIoErrorCode::Truncated);
    }
}
