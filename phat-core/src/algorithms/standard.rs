//! Left-to-right standard reduction.

use super::{Reduction, reduce_column};
use crate::{matrix::BoundaryMatrix, representation::Representation};

/// Reduces columns left to right, eliminating each pivot already owned by an
/// earlier column.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReduction;

impl Reduction for StandardReduction {
    const NAME: &'static str = "standard_reduction";

    fn reduce<R: Representation>(matrix: &mut BoundaryMatrix<R>) {
        let num_cols = matrix.num_cols();
        let mut owner_of = vec![None; num_cols];
        for col in 0..num_cols {
            if let Some(pivot) = reduce_column(matrix, col, &owner_of, |_| true) {
                owner_of[pivot] = Some(col);
            }
            matrix.finalize(col);
        }
    }
}
