//! Two-phase chunked reduction.
//!
//! Phase one splits the columns into contiguous chunks of roughly `√n`
//! columns and reduces each chunk on its own, using only pivots owned inside
//! the chunk. Any pivot found this way belongs to a left-to-right combination
//! of columns, so the column it names is positive and can be cleared
//! immediately. Phase two finishes with a global twist pass; the local work
//! only ever added columns into later ones, so the global pass sees a valid
//! intermediate state.

use super::{Reduction, reduce_column};
use crate::{index::Index, matrix::BoundaryMatrix, representation::Representation};

/// Local per-chunk reduction with clearing, then a global pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkReduction;

impl ChunkReduction {
    fn chunk_len(num_cols: usize) -> usize {
        num_cols.isqrt().max(1)
    }
}

impl Reduction for ChunkReduction {
    const NAME: &'static str = "chunk_reduction";

    fn reduce<R: Representation>(matrix: &mut BoundaryMatrix<R>) {
        let num_cols = matrix.num_cols();
        let max_dim = matrix.max_dim();
        let chunk_len = Self::chunk_len(num_cols);

        let mut local_owner: Vec<Option<Index>> = vec![None; num_cols];
        for start in (0..num_cols).step_by(chunk_len) {
            let end = (start + chunk_len).min(num_cols);
            for dim in (1..=max_dim).rev() {
                for col in start..end {
                    if matrix.dim(col) != dim {
                        continue;
                    }
                    let pivot = reduce_column(matrix, col, &local_owner, |owner| owner >= start);
                    if let Some(pivot) = pivot {
                        local_owner[pivot] = Some(col);
                        matrix.clear(pivot);
                    }
                    matrix.finalize(col);
                }
            }
        }

        let mut owner_of: Vec<Option<Index>> = vec![None; num_cols];
        for dim in (1..=max_dim).rev() {
            for col in 0..num_cols {
                if matrix.dim(col) != dim || matrix.is_empty(col) {
                    continue;
                }
                if let Some(pivot) = reduce_column(matrix, col, &owner_of, |_| true) {
                    owner_of[pivot] = Some(col);
                    matrix.clear(pivot);
                }
                matrix.finalize(col);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(3, 1)]
    #[case(4, 2)]
    #[case(99, 9)]
    #[case(100, 10)]
    fn chunk_len_is_integer_square_root(#[case] num_cols: usize, #[case] expected: usize) {
        assert_eq!(ChunkReduction::chunk_len(num_cols), expected);
    }
}
