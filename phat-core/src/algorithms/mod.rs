//! Column reduction algorithms.
//!
//! Each algorithm brings a boundary matrix into reduced form: no two non-empty
//! columns share a pivot. They differ in the order columns are visited and
//! whether known-zero columns are cleared ahead of time, never in the pairs
//! read off the result.

mod chunk;
mod row;
mod standard;
mod twist;

pub use chunk::ChunkReduction;
pub use row::RowReduction;
pub use standard::StandardReduction;
pub use twist::TwistReduction;

use crate::{index::Index, matrix::BoundaryMatrix, representation::Representation};

/// A column reduction strategy applicable to every representation.
pub trait Reduction {
    /// Label used in reports and benchmark identifiers.
    const NAME: &'static str;

    /// Reduces `matrix` in place.
    fn reduce<R: Representation>(matrix: &mut BoundaryMatrix<R>);
}

/// Adds earlier columns into `col` until its pivot is unowned or it is zero.
///
/// `owner_of[p]` names the column currently owning pivot `p`; `accept`
/// restricts which owners may be used. Returns the final pivot.
fn reduce_column<R: Representation>(
    matrix: &mut BoundaryMatrix<R>,
    col: Index,
    owner_of: &[Option<Index>],
    accept: impl Fn(Index) -> bool,
) -> Option<Index> {
    let mut pivot = matrix.max_index(col);
    while let Some(owner) = pivot
        .and_then(|row| owner_of[row])
        .filter(|&owner| accept(owner))
    {
        matrix.add_to(owner, col);
        pivot = matrix.max_index(col);
    }
    pivot
}

#[cfg(test)]
mod tests;
