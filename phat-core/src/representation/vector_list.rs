//! Columns stored as sorted linked lists.

use std::collections::LinkedList;

use super::{Representation, merge::SymmetricDifference};
use crate::index::{Dimension, Index};

/// Each column is a sorted `LinkedList`.
#[derive(Debug, Default, Clone)]
pub struct VectorList {
    columns: Vec<LinkedList<Index>>,
    dims: Vec<Dimension>,
}

impl Representation for VectorList {
    const NAME: &'static str = "vector_list";

    fn num_cols(&self) -> usize {
        self.columns.len()
    }

    fn set_num_cols(&mut self, num_cols: usize) {
        self.columns.resize_with(num_cols, LinkedList::new);
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
        self.columns[idx].back().copied()
    }

    fn remove_max(&mut self, idx: Index) {
        self.columns[idx].pop_back();
    }

    fn clear(&mut self, idx: Index) {
        self.columns[idx].clear();
    }

    fn add_to(&mut self, source: Index, target: Index) {
        let merged: LinkedList<Index> = SymmetricDifference::new(
            self.columns[source].iter().copied(),
            self.columns[target].iter().copied(),
        )
        .collect();
        self.columns[target] = merged;
    }
}
