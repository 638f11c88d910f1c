//! The boundary matrix container.

use crate::{
    index::{Dimension, Index},
    representation::Representation,
};

/// Square Z/2 boundary matrix stored through representation `R`.
///
/// Column `j` lists the faces of cell `j` by their column indices, so every row
/// index is below [`BoundaryMatrix::num_cols`]. Methods taking an index panic
/// when it is out of range.
///
/// # Examples
/// ```
/// use phat_core::{BoundaryMatrix, VectorList};
///
/// let matrix = BoundaryMatrix::<VectorList>::from_columns(vec![
///     (0, vec![]),
///     (0, vec![]),
///     (1, vec![0, 1]),
/// ]);
/// assert_eq!(matrix.num_cols(), 3);
/// assert_eq!(matrix.max_index(2), Some(1));
/// assert_eq!(matrix.max_dim(), 1);
/// assert_eq!(matrix.num_entries(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BoundaryMatrix<R> {
    rep: R,
}

impl<R: Representation> BoundaryMatrix<R> {
    /// Creates an empty matrix with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matrix from `(dimension, rows)` pairs, one per column.
    ///
    /// Row lists must be strictly increasing and reference existing columns.
    #[must_use]
    pub fn from_columns(columns: Vec<(Dimension, Vec<Index>)>) -> Self {
        let mut matrix = Self::new();
        matrix.set_num_cols(columns.len());
        for (idx, (dim, rows)) in columns.into_iter().enumerate() {
            matrix.set_dim(idx, dim);
            matrix.set_col(idx, &rows);
        }
        matrix
    }

    /// Label of the underlying representation.
    #[must_use]
    pub const fn representation_name(&self) -> &'static str {
        R::NAME
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.rep.num_cols()
    }

    /// Resizes the matrix; new columns are empty with dimension zero.
    pub fn set_num_cols(&mut self, num_cols: usize) {
        self.rep.set_num_cols(num_cols);
    }

    /// Returns the dimension of column `idx`.
    #[must_use]
    pub fn dim(&self, idx: Index) -> Dimension {
        self.rep.dim(idx)
    }

    /// Sets the dimension of column `idx`.
    pub fn set_dim(&mut self, idx: Index, dim: Dimension) {
        self.rep.set_dim(idx, dim);
    }

    /// Returns the largest column dimension, or zero for an empty matrix.
    #[must_use]
    pub fn max_dim(&self) -> Dimension {
        (0..self.num_cols())
            .map(|idx| self.dim(idx))
            .max()
            .unwrap_or(0)
    }

    /// Returns the rows of column `idx` in increasing order.
    #[must_use]
    pub fn col(&self, idx: Index) -> Vec<Index> {
        self.rep.col(idx)
    }

    /// Replaces column `idx` with the strictly increasing `rows`.
    pub fn set_col(&mut self, idx: Index, rows: &[Index]) {
        self.rep.set_col(idx, rows);
    }

    /// Returns whether column `idx` is zero.
    #[must_use]
    pub fn is_empty(&self, idx: Index) -> bool {
        self.rep.is_empty(idx)
    }

    /// Returns the pivot (lowest one) of column `idx`.
    #[must_use]
    pub fn max_index(&self, idx: Index) -> Option<Index> {
        self.rep.max_index(idx)
    }

    /// Removes the pivot of column `idx`.
    pub fn remove_max(&mut self, idx: Index) {
        self.rep.remove_max(idx);
    }

    /// Zeroes column `idx`.
    pub fn clear(&mut self, idx: Index) {
        self.rep.clear(idx);
    }

    /// Adds column `source` into column `target` over Z/2.
    pub fn add_to(&mut self, source: Index, target: Index) {
        self.rep.add_to(source, target);
    }

    /// Marks column `idx` as done receiving additions.
    pub fn finalize(&mut self, idx: Index) {
        self.rep.finalize(idx);
    }

    /// Flushes representation-internal working state.
    pub fn sync(&mut self) {
        self.rep.sync();
    }

    /// Returns the total number of non-zero entries.
    #[must_use]
    pub fn num_entries(&self) -> usize {
        (0..self.num_cols()).map(|idx| self.col(idx).len()).sum()
    }

    /// Returns whether `other` holds the same dimensions and columns, whatever
    /// its representation.
    #[must_use]
    pub fn same_as<S: Representation>(&self, other: &BoundaryMatrix<S>) -> bool {
        self.num_cols() == other.num_cols()
            && (0..self.num_cols())
                .all(|idx| self.dim(idx) == other.dim(idx) && self.col(idx) == other.col(idx))
    }
}
