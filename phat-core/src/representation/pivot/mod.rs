//! Representations that keep one active column in a fast pivot structure.
//!
//! Reduction algorithms add many columns into the same target before moving
//! on. [`PivotColumnRepresentation`] stores columns as sorted vectors and
//! loads the current target into a [`PivotColumn`], where toggling a row and
//! locating the maximum are cheap. The active column is written back when
//! another column becomes a target, on [`Representation::finalize`], or on
//! [`Representation::sync`].

mod bit_tree;
mod full;
mod sparse;

pub use bit_tree::BitTreeColumn;
pub use full::FullColumn;
pub use sparse::SparseColumn;

use std::mem;

use super::Representation;
use crate::index::{Dimension, Index};

/// Working column supporting fast Z/2 accumulation.
///
/// Row indices must stay below the capacity passed to [`PivotColumn::init`].
pub trait PivotColumn: Default {
    /// Label of the representation built on this column.
    const NAME: &'static str;

    /// Prepares the column for rows `0..num_rows` and empties it.
    fn init(&mut self, num_rows: usize);

    /// Toggles every row of `col`.
    fn add_col(&mut self, col: &[Index]);

    /// Returns the largest row present.
    fn max_index(&self) -> Option<Index>;

    /// Removes the largest row present, if any.
    fn remove_max(&mut self);

    /// Returns the rows present in increasing order.
    fn col(&self) -> Vec<Index>;

    /// Removes every row.
    fn clear(&mut self);

    /// Replaces the contents with `col`.
    fn set_col(&mut self, col: &[Index]) {
        self.clear();
        self.add_col(col);
    }

    /// Returns whether no row is present.
    fn is_empty(&self) -> bool {
        self.max_index().is_none()
    }
}

/// Vector-backed columns plus one active [`PivotColumn`].
#[derive(Debug, Default, Clone)]
pub struct PivotColumnRepresentation<P> {
    columns: Vec<Vec<Index>>,
    dims: Vec<Dimension>,
    pivot: P,
    pivot_idx: Option<Index>,
}

/// Pivot representation over a dense flag array and a max-heap.
pub type FullPivotColumn = PivotColumnRepresentation<FullColumn>;
/// Pivot representation over an ordered set.
pub type SparsePivotColumn = PivotColumnRepresentation<SparseColumn>;
/// Pivot representation over a 64-ary bit tree.
pub type BitTreePivotColumn = PivotColumnRepresentation<BitTreeColumn>;

impl<P: PivotColumn> PivotColumnRepresentation<P> {
    fn is_pivot(&self, idx: Index) -> bool {
        self.pivot_idx == Some(idx)
    }

    fn release_pivot(&mut self) {
        if let Some(idx) = self.pivot_idx.take() {
            self.columns[idx] = self.pivot.col();
            self.pivot.clear();
        }
    }

    fn make_pivot(&mut self, idx: Index) {
        if self.is_pivot(idx) {
            return;
        }
        self.release_pivot();
        let column = mem::take(&mut self.columns[idx]);
        self.pivot.set_col(&column);
        self.pivot_idx = Some(idx);
    }
}

impl<P: PivotColumn> Representation for PivotColumnRepresentation<P> {
    const NAME: &'static str = P::NAME;

    fn num_cols(&self) -> usize {
        self.columns.len()
    }

    fn set_num_cols(&mut self, num_cols: usize) {
        self.release_pivot();
        self.columns.resize_with(num_cols, Vec::new);
        self.dims.resize(num_cols, 0);
        self.pivot.init(num_cols);
    }

    fn dim(&self, idx: Index) -> Dimension {
        self.dims[idx]
    }

    fn set_dim(&mut self, idx: Index, dim: Dimension) {
        self.dims[idx] = dim;
    }

    fn col(&self, idx: Index) -> Vec<Index> {
        if self.is_pivot(idx) {
            self.pivot.col()
        } else {
            self.columns[idx].clone()
        }
    }

    fn set_col(&mut self, idx: Index, col: &[Index]) {
        if self.is_pivot(idx) {
            self.pivot.set_col(col);
        } else {
            let column = &mut self.columns[idx];
            column.clear();
            column.extend_from_slice(col);
        }
    }

    fn is_empty(&self, idx: Index) -> bool {
        if self.is_pivot(idx) {
            self.pivot.is_empty()
        } else {
            self.columns[idx].is_empty()
        }
    }

    fn max_index(&self, idx: Index) -> Option<Index> {
        if self.is_pivot(idx) {
            self.pivot.max_index()
        } else {
            self.columns[idx].last().copied()
        }
    }

    fn remove_max(&mut self, idx: Index) {
        if self.is_pivot(idx) {
            self.pivot.remove_max();
        } else {
            self.columns[idx].pop();
        }
    }

    fn clear(&mut self, idx: Index) {
        if self.is_pivot(idx) {
            self.pivot.clear();
        } else {
            self.columns[idx].clear();
        }
    }

    fn add_to(&mut self, source: Index, target: Index) {
        self.make_pivot(target);
        self.pivot.add_col(&self.columns[source]);
    }

    fn finalize(&mut self, idx: Index) {
        if self.is_pivot(idx) {
            self.release_pivot();
        }
    }

    fn sync(&mut self) {
        self.release_pivot();
    }
}
