//! Column storage policies for [`crate::BoundaryMatrix`].
//!
//! A representation owns the columns and their dimensions. Columns are sets of
//! row indices over Z/2, always observed in increasing order. The trade-offs
//! between representations are purely about cost: every policy must expose the
//! same column contents after the same sequence of operations.

mod merge;
mod pivot;
mod vector_list;
mod vector_set;
mod vector_vector;

pub use pivot::{
    BitTreeColumn, BitTreePivotColumn, FullColumn, FullPivotColumn, PivotColumn,
    PivotColumnRepresentation, SparseColumn, SparsePivotColumn,
};
pub use vector_list::VectorList;
pub use vector_set::VectorSet;
pub use vector_vector::VectorVector;

use crate::index::{Dimension, Index};

/// Storage policy for the columns of a boundary matrix.
///
/// Methods taking a column index panic when the index is not below
/// [`Representation::num_cols`]. Row indices passed to [`Representation::set_col`]
/// must be strictly increasing and below `num_cols`.
///
/// # Examples
/// ```
/// use phat_core::{Representation, VectorSet};
///
/// let mut rep = VectorSet::default();
/// rep.set_num_cols(3);
/// rep.set_col(2, &[0, 1]);
/// rep.set_col(1, &[1]);
/// rep.add_to(1, 2);
/// assert_eq!(rep.col(2), vec![0]);
/// assert_eq!(rep.max_index(2), Some(0));
/// ```
pub trait Representation: Default {
    /// Label used in reports and benchmark identifiers.
    const NAME: &'static str;

    /// Returns the number of columns.
    fn num_cols(&self) -> usize;

    /// Resizes the matrix to `num_cols` columns.
    ///
    /// New columns are empty with dimension zero.
    fn set_num_cols(&mut self, num_cols: usize);

    /// Returns the dimension of column `idx`.
    fn dim(&self, idx: Index) -> Dimension;

    /// Sets the dimension of column `idx`.
    fn set_dim(&mut self, idx: Index, dim: Dimension);

    /// Returns the row indices of column `idx` in increasing order.
    fn col(&self, idx: Index) -> Vec<Index>;

    /// Replaces the contents of column `idx`.
    fn set_col(&mut self, idx: Index, col: &[Index]);

    /// Returns whether column `idx` has no entries.
    fn is_empty(&self, idx: Index) -> bool;

    /// Returns the largest row index of column `idx` (its pivot).
    fn max_index(&self, idx: Index) -> Option<Index>;

    /// Removes the largest row index of column `idx`, if any.
    fn remove_max(&mut self, idx: Index);

    /// Removes every entry of column `idx`.
    fn clear(&mut self, idx: Index);

    /// Adds column `source` to column `target` over Z/2.
    ///
    /// `source` and `target` must differ.
    fn add_to(&mut self, source: Index, target: Index);

    /// Signals that no further additions into column `idx` are expected.
    ///
    /// Representations that cache a working column write it back here.
    fn finalize(&mut self, _idx: Index) {}

    /// Writes back any cached working state.
    fn sync(&mut self) {}
}
