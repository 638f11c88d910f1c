//! Error types for the phat core library.
//!
//! Loader and writer failures are reported through [`MatrixIoError`], each
//! variant carrying a stable [`MatrixIoErrorCode`] for structured logs.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error raised while reading or writing a boundary matrix file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MatrixIoError {
    /// The file could not be opened.
    #[error("failed to open `{}`", .path.display())]
    Open {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading from an opened stream failed.
    #[error("failed to read boundary matrix")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Writing a boundary matrix failed.
    #[error("failed to write `{}`", .path.display())]
    Write {
        /// Destination that triggered the failure.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// An ascii line held something other than an integer.
    #[error("line {line}: `{token}` is not an integer")]
    InvalidToken {
        /// One-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// A column dimension did not fit the supported range.
    #[error("column {column}: dimension {value} is out of range")]
    DimensionOutOfRange {
        /// Column whose dimension was rejected.
        column: usize,
        /// Raw dimension value.
        value: i64,
    },
    /// A column referenced a row outside the matrix.
    #[error("column {column}: row index {index} is outside a matrix with {num_cols} columns")]
    IndexOutOfRange {
        /// Column holding the entry.
        column: usize,
        /// Raw row index.
        index: i64,
        /// Number of columns in the matrix.
        num_cols: usize,
    },
    /// A column listed the same row twice.
    #[error("column {column}: row index {index} appears more than once")]
    DuplicateIndex {
        /// Column holding the entry.
        column: usize,
        /// Repeated row index.
        index: usize,
    },
    /// A binary column count or entry count was negative.
    #[error("binary stream declares a negative {what} ({value})")]
    InvalidLength {
        /// Which count was rejected.
        what: &'static str,
        /// Raw value.
        value: i64,
    },
    /// A binary stream ended before the declared data was read.
    #[error("binary stream ended while reading {what}")]
    Truncated {
        /// Which field was being read.
        what: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`MatrixIoError`] variants.
    enum MatrixIoErrorCode for MatrixIoError {
        /// The file could not be opened.
        Open => Open { .. } => "MATRIX_IO_OPEN",
        /// Reading from an opened stream failed.
        Read => Read { .. } => "MATRIX_IO_READ",
        /// Writing a boundary matrix failed.
        Write => Write { .. } => "MATRIX_IO_WRITE",
        /// An ascii token was not an integer.
        InvalidToken => InvalidToken { .. } => "MATRIX_IO_INVALID_TOKEN",
        /// A column dimension was out of range.
        DimensionOutOfRange => DimensionOutOfRange { .. } => "MATRIX_IO_DIMENSION_OUT_OF_RANGE",
        /// A row index was outside the matrix.
        IndexOutOfRange => IndexOutOfRange { .. } => "MATRIX_IO_INDEX_OUT_OF_RANGE",
        /// A row index was repeated within one column.
        DuplicateIndex => DuplicateIndex { .. } => "MATRIX_IO_DUPLICATE_INDEX",
        /// A binary count was negative.
        InvalidLength => InvalidLength { .. } => "MATRIX_IO_INVALID_LENGTH",
        /// A binary stream was truncated.
        Truncated => Truncated { .. } => "MATRIX_IO_TRUNCATED",
    }
}
