//! Standard reduction with clearing, highest dimension first.

use super::{Reduction, reduce_column};
use crate::{matrix::BoundaryMatrix, representation::Representation};

/// Processes dimensions from highest to lowest. Once a column obtains pivot
/// `p`, column `p` is known to reduce to zero and is cleared before its own
/// dimension is visited.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwistReduction;

impl Reduction for TwistReduction {
    const NAME: &'static str = "twist_reduction";

    fn reduce<R: Representation>(matrix: &mut BoundaryMatrix<R>) {
        let num_cols = matrix.num_cols();
        let mut owner_of = vec![None; num_cols];
        for dim in (1..=matrix.max_dim()).rev() {
            for col in 0..num_cols {
                if matrix.dim(col) != dim {
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
