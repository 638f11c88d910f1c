//! Columns stored as sorted vectors.

use std::mem;

use super::{Representation, merge::SymmetricDifference};
use crate::index::{Dimension, Index};

/// Each column is a sorted `Vec`; additions merge into a scratch buffer.
#[derive(Debug, Default, Clone)]
pub struct VectorVector {
    columns: Vec<Vec<Index>>,
    dims: Vec<Dimension>,
    scratch: Vec<Index>,
}

impl Representation for VectorVector {
    const NAME: &'static str = "vector_vector";

    fn num_cols(&self) -> usize {
        self.columns.len()
    }

    fn set_num_cols(&mut self, num_cols: usize) {
        self.columns.resize_with(num_cols, Vec::new);
        self.dims.resize(num_cols, 0);
    }

    fn dim(&self, idx: Index) -> Dimension {
        self.dims[idx]
    }

    fn set_dim(&mut self, idx: Index, dim: Dimension) {
        self.dims[idx] = dim;
    }

    fn col(&self, idx: Index) -> Vec<Index> {
        self.columns[idx].clone()
    }

    fn set_col(&mut self, idx: Index, col: &[Index]) {
        let column = &mut self.columns[idx];
        column.clear();
        column.extend_from_slice(col);
    }

    fn is_empty(&self, idx: Index) -> bool {
        self.columns[idx].is_empty()
    }

    fn max_index(&self, idx: Index) -> Option<Index> {
        self.columns[idx].last().copied()
    }

    fn remove_max(&mut self, idx: Index) {
        self.columns[idx].pop();
    }

    fn clear(&mut self, idx: Index) {
        self.columns[idx].clear();
    }

    fn add_to(&mut self, source: Index, target: Index) {
        let mut merged = mem::take(&mut self.scratch);
        merged.clear();
        merged.extend(SymmetricDifference::new(
            self.columns[source].iter().copied(),
            self.columns[target].iter().copied(),
        ));
        // The old target buffer becomes the next scratch space.
        self.scratch = mem::replace(&mut self.columns[target], merged);
    }
}
