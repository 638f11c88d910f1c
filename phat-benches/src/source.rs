//! Seeded synthetic boundary matrices.
//!
//! Each complex is the lower-star filtration of the full simplex on
//! `vertex_count` vertices, truncated above `max_dim`, with vertex heights
//! drawn from a [`SmallRng`] so the same configuration always yields the same
//! matrix.

use phat_core::{BoundaryMatrix, Representation};
use phat_test_support::complex::{Column, lower_star_complex};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Largest supported vertex count; beyond it the column count of a
/// three-dimensional complex grows past what a benchmark sample tolerates.
pub const MAX_VERTICES: usize = 40;

/// Parameters of a synthetic complex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Highest simplex dimension kept.
    pub max_dim: u8,
    /// Heights are drawn from `0..height_levels`; fewer levels mean more ties.
    pub height_levels: u32,
    /// Random seed.
    pub seed: u64,
}

/// Errors raised while generating a synthetic complex.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// `vertex_count` was zero.
    #[error("vertex count must be positive")]
    ZeroVertices,
    /// `vertex_count` exceeded [`MAX_VERTICES`].
    #[error("vertex count {got} exceeds the supported maximum of {max}")]
    TooManyVertices {
        /// Requested count.
        got: usize,
        /// Supported maximum.
        max: usize,
    },
    /// `height_levels` was zero.
    #[error("height levels must be positive")]
    ZeroHeightLevels,
}

/// A generated complex, stored as plain columns so each benchmark iteration
/// can build a fresh matrix in any representation.
#[derive(Clone, Debug)]
pub struct SyntheticComplex {
    columns: Vec<Column>,
}

impl SyntheticComplex {
    /// Generates the complex described by `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when a count is zero or too large.
    ///
    /// # Examples
    /// ```
    /// use phat_benches::source::{SyntheticComplex, SyntheticConfig};
    /// use phat_core::VectorVector;
    ///
    /// let complex = SyntheticComplex::generate(&SyntheticConfig {
    ///     vertex_count: 5,
    ///     max_dim: 2,
    ///     height_levels: 4,
    ///     seed: 1,
    /// })?;
    /// assert_eq!(complex.num_cols(), 5 + 10 + 10);
    /// assert_eq!(complex.matrix::<VectorVector>().max_dim(), 2);
    /// # Ok::<(), phat_benches::source::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if config.vertex_count > MAX_VERTICES {
            return Err(SyntheticError::TooManyVertices {
                got: config.vertex_count,
                max: MAX_VERTICES,
            });
        }
        if config.height_levels == 0 {
            return Err(SyntheticError::ZeroHeightLevels);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let heights: Vec<u32> = (0..config.vertex_count)
            .map(|_| rng.gen_range(0..config.height_levels))
            .collect();
        Ok(Self {
            columns: lower_star_complex(&heights, config.max_dim),
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn num_cols(&self) -> usize {
        self.columns.len()
    }

    /// The generated columns.
    #[must_use]
    pub const fn columns(&self) -> &[Column] {
        self.columns.as_slice()
    }

    /// Builds a fresh matrix in representation `R`.
    #[must_use]
    pub fn matrix<R: Representation>(&self) -> BoundaryMatrix<R> {
        BoundaryMatrix::from_columns(self.columns.clone())
    }
}
