//! Scalar types shared by every matrix representation.

/// Column (and row) position within a boundary matrix.
///
/// Boundary matrices are square: a row index names the column of the face it
/// refers to, so the same type serves both axes.
pub type Index = usize;

/// Dimension of the cell described by a column.
pub type Dimension = u8;
