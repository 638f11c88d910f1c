//! Persistence algorithm toolkit core.
//!
//! Provides a [`BoundaryMatrix`] generic over its column storage
//! [`Representation`], four column [`Reduction`] algorithms, dualization, and
//! the ascii/binary loaders used by the `benchmark` harness.
//!
//! Every representation can be combined with every algorithm; the resulting
//! persistence pairs do not depend on the choice.
//!
//! # Examples
//! ```
//! use phat_core::{
//!     BoundaryMatrix, StandardReduction, VectorVector, compute_persistence_pairs,
//! };
//!
//! // A filled triangle: three vertices, three edges, one face.
//! let mut matrix = BoundaryMatrix::<VectorVector>::from_columns(vec![
//!     (0, vec![]),
//!     (0, vec![]),
//!     (0, vec![]),
//!     (1, vec![0, 1]),
//!     (1, vec![1, 2]),
//!     (1, vec![0, 2]),
//!     (2, vec![3, 4, 5]),
//! ]);
//! let mut pairs = compute_persistence_pairs::<StandardReduction, _>(&mut matrix);
//! pairs.sort();
//! assert_eq!(pairs.len(), 3);
//! ```

mod algorithms;
mod compute;
mod dualize;
mod error;
mod index;
mod io;
mod matrix;
mod pairs;
mod representation;

pub use crate::{
    algorithms::{ChunkReduction, Reduction, RowReduction, StandardReduction, TwistReduction},
    compute::{compute_persistence_pairs, compute_persistence_pairs_dualized},
    dualize::dualize,
    error::{MatrixIoError, MatrixIoErrorCode},
    index::{Dimension, Index},
    io::MatrixFormat,
    matrix::BoundaryMatrix,
    pairs::{PersistencePair, PersistencePairs},
    representation::{
        BitTreeColumn, BitTreePivotColumn, FullColumn, FullPivotColumn, PivotColumn,
        PivotColumnRepresentation, Representation, SparseColumn, SparsePivotColumn, VectorList,
        VectorSet, VectorVector,
    },
};
