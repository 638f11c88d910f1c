//! Text encoding: one `dim row row ...` line per column.

use std::io::{self, BufRead, Write};

use super::RawColumn;
use crate::{error::MatrixIoError, matrix::BoundaryMatrix, representation::Representation};

fn parse_token(token: &str, line: usize) -> Result<i64, MatrixIoError> {
    token.parse().map_err(|_| MatrixIoError::InvalidToken {
        line,
        token: token.to_owned(),
    })
}

impl<R: Representation> BoundaryMatrix<R> {
    /// Reads an ascii matrix from `reader`.
    ///
    /// # Errors
    /// Returns [`MatrixIoError::Read`] on I/O failure,
    /// [`MatrixIoError::InvalidToken`] for anything that is not an integer,
    /// and the validation errors described in [`Self::load`].
    pub fn read_ascii<B: BufRead>(reader: B) -> Result<Self, MatrixIoError> {
        let mut raw = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| MatrixIoError::Read { source })?;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            let line_number = idx + 1;
            let mut tokens = content.split_whitespace();
            let dim = tokens
                .next()
                .map_or(Ok(0), |token| parse_token(token, line_number))?;
            let rows = tokens
                .map(|token| parse_token(token, line_number))
                .collect::<Result<Vec<_>, _>>()?;
            raw.push(RawColumn { dim, rows });
        }
        Self::from_validated(raw)
    }

    /// Writes the matrix as ascii, one column per line.
    ///
    /// # Errors
    /// Propagates failures from `writer`.
    pub fn write_ascii<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for col in 0..self.num_cols() {
            write!(writer, "{}", self.dim(col))?;
            for row in self.col(col) {
                write!(writer, " {row}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
