//! Right-to-left row reduction.

use std::mem;

use super::Reduction;
use crate::{index::Index, matrix::BoundaryMatrix, representation::Representation};

/// Sweeps rows from the bottom up. For each row, the leftmost column having
/// that row as pivot is added to every other such column, and each updated
/// column is re-bucketed under its new pivot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowReduction;

impl Reduction for RowReduction {
    const NAME: &'static str = "row_reduction";

    fn reduce<R: Representation>(matrix: &mut BoundaryMatrix<R>) {
        let num_cols = matrix.num_cols();
        let mut columns_with_pivot: Vec<Vec<Index>> = vec![Vec::new(); num_cols];

        for row in (0..num_cols).rev() {
            let bucket = mem::take(&mut columns_with_pivot[row]);
            let Some(&source) = bucket.iter().min() else {
                if let Some(pivot) = matrix.max_index(row) {
                    columns_with_pivot[pivot].push(row);
                }
                continue;
            };
            // `source` keeps pivot `row` from here on, so column `row`
            // reduces to zero.
            matrix.clear(row);
            matrix.finalize(row);

            for &target in bucket.iter().filter(|&&target| target != source) {
                matrix.add_to(source, target);
                if let Some(pivot) = matrix.max_index(target) {
                    columns_with_pivot[pivot].push(target);
                }
            }
        }
    }
}
