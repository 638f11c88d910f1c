use std::path::Path;

use phat_core::{
    BitTreePivotColumn, BoundaryMatrix, FullPivotColumn, MatrixFormat, MatrixIoError,
    MatrixIoErrorCode, Representation, SparsePivotColumn, VectorList, VectorSet, VectorVector,
};
use phat_test_support::{
    complex::{lower_star_complex, single_triangle},
    files::{write_ascii, write_binary},
};
use rstest::rstest;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn loads_like_fixture<R: Representation>(path: &Path, format: MatrixFormat) -> TestResult {
    let loaded = BoundaryMatrix::<R>::load(path, format)?;
    let expected = BoundaryMatrix::<VectorVector>::from_columns(single_triangle());
    assert!(loaded.same_as(&expected), "{} differs", R::NAME);
    Ok(())
}

#[rstest]
#[case::vector_vector(loads_like_fixture::<VectorVector>)]
#[case::vector_set(loads_like_fixture::<VectorSet>)]
#[case::vector_list(loads_like_fixture::<VectorList>)]
#[case::full_pivot_column(loads_like_fixture::<FullPivotColumn>)]
#[case::bit_tree_pivot_column(loads_like_fixture::<BitTreePivotColumn>)]
#[case::sparse_pivot_column(loads_like_fixture::<SparsePivotColumn>)]
fn every_representation_loads_both_formats(
    #[case] check: fn(&Path, MatrixFormat) -> TestResult,
) -> TestResult {
    let dir = TempDir::new()?;
    let ascii = write_ascii(dir.path(), "triangle.txt", &single_triangle())?;
    let binary = write_binary(dir.path(), "triangle.bin", &single_triangle())?;
    check(&ascii, MatrixFormat::Ascii)?;
    check(&binary, MatrixFormat::Binary)?;
    Ok(())
}

#[rstest]
#[case(MatrixFormat::Ascii)]
#[case(MatrixFormat::Binary)]
fn saved_files_load_back(#[case] format: MatrixFormat) -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("complex");
    let original = BoundaryMatrix::<VectorSet>::from_columns(lower_star_complex(&[1, 0, 2, 2], 3));
    original.save(&path, format)?;
    let loaded = BoundaryMatrix::<SparsePivotColumn>::load(&path, format)?;
    assert!(loaded.same_as(&original));
    Ok(())
}

#[test]
fn helper_writers_match_library_writers() -> TestResult {
    let dir = TempDir::new()?;
    let columns = lower_star_complex(&[0, 3, 1], 2);
    let matrix = BoundaryMatrix::<VectorVector>::from_columns(columns.clone());

    let ours = dir.path().join("ours.bin");
    matrix.save_binary(&ours)?;
    let theirs = write_binary(dir.path(), "theirs.bin", &columns)?;
    assert_eq!(std::fs::read(ours)?, std::fs::read(theirs)?);

    let ours = dir.path().join("ours.txt");
    matrix.save_ascii(&ours)?;
    let theirs = write_ascii(dir.path(), "theirs.txt", &columns)?;
    assert_eq!(std::fs::read(ours)?, std::fs::read(theirs)?);
    Ok(())
}

#[test]
fn missing_file_reports_open_error_with_path() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("absent.bin");
    let err = BoundaryMatrix::<VectorList>::load_binary(&path).expect_err("file is absent");
    assert_eq!(err.code(), MatrixIoErrorCode::Open);
    match err {
        MatrixIoError::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn ascii_file_read_as_binary_is_rejected() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_ascii(dir.path(), "triangle.txt", &single_triangle())?;
    // The text bytes decode to an absurd column count or run out early.
    assert!(BoundaryMatrix::<VectorVector>::load_binary(&path).is_err());
    Ok(())
}

#[test]
fn save_into_missing_directory_reports_write_error() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("no-such-dir").join("out.bin");
    let matrix = BoundaryMatrix::<VectorVector>::from_columns(single_triangle());
    let err = matrix.save_binary(&path).expect_err("parent directory is absent");
    assert_eq!(err.code(), MatrixIoErrorCode::Write);
    Ok(())
}
