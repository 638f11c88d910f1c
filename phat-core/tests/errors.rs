use std::{io, path::PathBuf};

use phat_core::{MatrixIoError, MatrixIoErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    MatrixIoError::Open { path: PathBuf::from("missing.bin"), source: io::ErrorKind::NotFound.into() },
    MatrixIoErrorCode::Open,
    "MATRIX_IO_OPEN",
)]
#[case(
    MatrixIoError::Read { source: io::ErrorKind::Interrupted.into() },
    MatrixIoErrorCode::Read,
    "MATRIX_IO_READ",
)]
#[case(
    MatrixIoError::Write { path: PathBuf::from("out.bin"), source: io::ErrorKind::PermissionDenied.into() },
    MatrixIoErrorCode::Write,
    "MATRIX_IO_WRITE",
)]
#[case(
    MatrixIoError::InvalidToken { line: 3, token: "x".to_owned() },
    MatrixIoErrorCode::InvalidToken,
    "MATRIX_IO_INVALID_TOKEN",
)]
#[case(
    MatrixIoError::DimensionOutOfRange { column: 0, value: -2 },
    MatrixIoErrorCode::DimensionOutOfRange,
    "MATRIX_IO_DIMENSION_OUT_OF_RANGE",
)]
#[case(
    MatrixIoError::IndexOutOfRange { column: 1, index: 9, num_cols: 2 },
    MatrixIoErrorCode::IndexOutOfRange,
    "MATRIX_IO_INDEX_OUT_OF_RANGE",
)]
#[case(
    MatrixIoError::DuplicateIndex { column: 1, index: 0 },
    MatrixIoErrorCode::DuplicateIndex,
    "MATRIX_IO_DUPLICATE_INDEX",
)]
#[case(
    MatrixIoError::InvalidLength { what: "entry count", value: -1 },
    MatrixIoErrorCode::InvalidLength,
    "MATRIX_IO_INVALID_LENGTH",
)]
#[case(
    MatrixIoError::Truncated { what: "row index" },
    MatrixIoErrorCode::Truncated,
    "MATRIX_IO_TRUNCATED",
)]
fn returns_expected_matrix_io_code(
    #[case] error: MatrixIoError,
    #[case] expected: MatrixIoErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), text);
    assert_eq!(expected.to_string(), text);
}

#[test]
fn open_errors_name_the_path() {
    let error = MatrixIoError::Open {
        path: PathBuf::from("data/missing.bin"),
        source: io::ErrorKind::NotFound.into(),
    };
    assert!(error.to_string().contains("data/missing.bin"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn index_errors_describe_the_matrix_size() {
    let error = MatrixIoError::IndexOutOfRange {
        column: 4,
        index: 12,
        num_cols: 5,
    };
    assert_eq!(
        error.to_string(),
        "column 4: row index 12 is outside a matrix with 5 columns"
    );
}

#[rstest]
#[case::open(
    MatrixIoError::Open { path: PathBuf::from("missing.bin"), source: io::Error::other("disk gone") },
    "failed to open `missing.bin`",
)]
#[case::read(
    MatrixIoError::Read { source: io::Error::other("disk gone") },
    "failed to read boundary matrix",
)]
#[case::write(
    MatrixIoError::Write { path: PathBuf::from("out.bin"), source: io::Error::other("disk gone") },
    "failed to write `out.bin`",
)]
fn io_messages_leave_the_cause_to_the_source_chain(
    #[case] error: MatrixIoError,
    #[case] message: &str,
) {
    assert_eq!(error.to_string(), message);
    let cause = std::error::Error::source(&error).map(ToString::to_string);
    assert_eq!(cause.as_deref(), Some("disk gone"));
}

#[test]
fn invalid_tokens_are_reported_as_non_integers() {
    let error = MatrixIoError::InvalidToken {
        line: 2,
        token: "1.5".to_owned(),
    };
    assert_eq!(error.to_string(), "line 2: `1.5` is not an integer");
}
