//! Columns stored as ordered sets.

use std::{collections::BTreeSet, mem};

use super::Representation;
use crate::index::{Dimension, Index};

/// Each column is a `BTreeSet`; additions toggle the source's rows in place.
#[derive(Debug, Default, Clone)]
pub struct VectorSet {
    columns: Vec<BTreeSet<Index>>,
    dims: Vec<Dimension>,
}

impl Representation for VectorSet {
    const NAME: &'static str = "vector_set";

    fn num_cols(&self) -> usize {
        self.columns.len()
    }

    fn set_num_cols(&mut self, num_cols: usize) {
        self.columns.resize_with(num_cols, BTreeSet::new);
        self.dims.resize(num_cols, 0);
    }

    fn dim(&self, idx: Index) -> Dimension {
        self.dims[idx]
    }

    fn set_dim(&mut self, idx: Index, dim: Dimension) {
        self.dims[idx] = dim;
    }

    fn col(&self, idx: Index) -> Vec<Index> {
        self.columns[idx].iter().copied().collect()
    }

    fn set_col(&mut self, idx: Index, col: &[Index]) {
        self.columns[idx] = col.iter().copied().collect();
    }

    fn is_empty(&self, idx: Index) -> bool {
        self.columns[idx].is_empty()
    }

    fn max_index(&self, idx: Index) -> Option<Index> {
        self.columns[idx].last().copied()
    }

    fn remove_max(&mut self, idx: Index) {
        self.columns[idx].pop_last();
    }

    fn clear(&mut self, idx: Index) {
        self.columns[idx].clear();
    }

    fn add_to(&mut self, source: Index, target: Index) {
        let mut column = mem::take(&mut self.columns[target]);
        for &row in &self.columns[source] {
            if !column.insert(row) {
                column.remove(&row);
            }
        }
        self.columns[target] = column;
    }
}
