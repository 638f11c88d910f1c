//! Ordered-set pivot column.

use std::collections::BTreeSet;

use super::PivotColumn;
use crate::index::Index;

/// Working column backed by a `BTreeSet`.
#[derive(Debug, Default, Clone)]
pub struct SparseColumn {
    rows: BTreeSet<Index>,
}

impl PivotColumn for SparseColumn {
    const NAME: &'static str = "sparse_pivot_column";

    fn init(&mut self, _num_rows: usize) {
        self.rows.clear();
    }

    fn add_col(&mut self, col: &[Index]) {
        for &row in col {
            if !self.rows.insert(row) {
                self.rows.remove(&row);
            }
        }
    }

    fn max_index(&self) -> Option<Index> {
        self.rows.last().copied()
    }

    fn remove_max(&mut self) {
        self.rows.pop_last();
    }

    fn col(&self) -> Vec<Index> {
        self.rows.iter().copied().collect()
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}
