//! Anti-transposition of boundary matrices.

use tracing::instrument;

use crate::{index::Index, matrix::BoundaryMatrix, representation::Representation};

/// Replaces `matrix` with its anti-transpose, the coboundary matrix read
/// backwards.
///
/// Entry `(i, j)` moves to `(n - 1 - j, n - 1 - i)` and column `n - 1 - j`
/// takes dimension `max_dim - dim(j)`. Applying it twice restores the input.
///
/// # Examples
/// ```
/// use phat_core::{BoundaryMatrix, VectorSet, dualize};
///
/// let mut matrix = BoundaryMatrix::<VectorSet>::from_columns(vec![
///     (0, vec![]),
///     (0, vec![]),
///     (1, vec![0, 1]),
/// ]);
/// dualize(&mut matrix);
/// assert_eq!(matrix.col(0), Vec::<usize>::new());
/// assert_eq!(matrix.col(1), vec![0]);
/// assert_eq!(matrix.col(2), vec![0]);
/// assert_eq!(matrix.dim(0), 0);
/// assert_eq!(matrix.dim(2), 1);
/// ```
#[instrument(level = "trace", skip(matrix), fields(num_cols = matrix.num_cols()))]
pub fn dualize<R: Representation>(matrix: &mut BoundaryMatrix<R>) {
    let num_cols = matrix.num_cols();
    let max_dim = matrix.max_dim();

    let mut dual_columns: Vec<Vec<Index>> = vec![Vec::new(); num_cols];
    let mut dual_dims = vec![0; num_cols];
    for col in 0..num_cols {
        let mirrored = num_cols - 1 - col;
        dual_dims[mirrored] = max_dim - matrix.dim(col);
        for row in matrix.col(col) {
            dual_columns[num_cols - 1 - row].push(mirrored);
        }
    }

    for (col, (mut rows, dim)) in dual_columns.into_iter().zip(dual_dims).enumerate() {
        // Rows arrive in decreasing order.
        rows.reverse();
        matrix.set_dim(col, dim);
        matrix.set_col(col, &rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representation::{BitTreePivotColumn, VectorVector};

    use phat_test_support::complex::{lower_star_complex, single_triangle};

    #[test]
    fn triangle_dual_is_cellular_coboundary() {
        let mut matrix = BoundaryMatrix::<VectorVector>::from_columns(single_triangle());
        dualize(&mut matrix);
        // The face becomes the lone top-left column; vertices become faces.
        assert_eq!(matrix.col(0), Vec::<usize>::new());
        assert_eq!(matrix.dim(0), 0);
        assert_eq!(matrix.col(1), vec![0]);
        assert_eq!(matrix.col(4), vec![1, 2]);
        assert_eq!(matrix.col(5), vec![2, 3]);
        assert_eq!(matrix.col(6), vec![1, 3]);
        assert_eq!(matrix.dim(6), 2);
    }

    #[test]
    fn dualizing_twice_restores_the_matrix() {
        let columns = lower_star_complex(&[2, 0, 3, 1, 1], 3);
        let original = BoundaryMatrix::<VectorVector>::from_columns(columns.clone());
        let mut matrix = BoundaryMatrix::<BitTreePivotColumn>::from_columns(columns);
        dualize(&mut matrix);
        assert!(!matrix.same_as(&original));
        dualize(&mut matrix);
        assert!(matrix.same_as(&original));
    }
}
