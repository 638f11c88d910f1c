//! Reading persistence pairs off a reduced matrix.

use tracing::instrument;

use crate::{
    algorithms::Reduction, dualize::dualize, matrix::BoundaryMatrix, pairs::PersistencePairs,
    representation::Representation,
};

/// Reduces `matrix` with `A` and returns one pair `(pivot, column)` for every
/// non-empty column, in column order.
#[instrument(
    level = "trace",
    skip(matrix),
    fields(algorithm = A::NAME, representation = R::NAME, num_cols = matrix.num_cols()),
)]
pub fn compute_persistence_pairs<A: Reduction, R: Representation>(
    matrix: &mut BoundaryMatrix<R>,
) -> PersistencePairs {
    A::reduce(matrix);
    matrix.sync();

    let mut pairs = PersistencePairs::new();
    for col in 0..matrix.num_cols() {
        if let Some(pivot) = matrix.max_index(col) {
            pairs.append(pivot, col);
        }
    }
    pairs
}

/// Computes pairs on the anti-transposed matrix and maps them back to the
/// primal column numbering.
///
/// The pair set equals the one [`compute_persistence_pairs`] returns; only
/// the work done differs. `matrix` is left dualized and reduced.
pub fn compute_persistence_pairs_dualized<A: Reduction, R: Representation>(
    matrix: &mut BoundaryMatrix<R>,
) -> PersistencePairs {
    let num_cols = matrix.num_cols();
    dualize(matrix);
    let mut pairs = compute_persistence_pairs::<A, R>(matrix);
    pairs.dualize(num_cols);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::{ChunkReduction, RowReduction, StandardReduction, TwistReduction},
        representation::{SparsePivotColumn, VectorList},
    };

    use phat_test_support::complex::{lower_star_complex, single_triangle, single_triangle_pairs};
    use proptest::prelude::*;

    fn sorted(mut pairs: PersistencePairs) -> Vec<(usize, usize)> {
        pairs.sort();
        pairs.iter().map(|pair| (pair.birth, pair.death)).collect()
    }

    #[test]
    fn pairs_follow_column_order() {
        let mut matrix = BoundaryMatrix::<VectorList>::from_columns(single_triangle());
        let pairs = compute_persistence_pairs::<StandardReduction, _>(&mut matrix);
        let deaths: Vec<_> = pairs.iter().map(|pair| pair.death).collect();
        assert_eq!(deaths, vec![3, 4, 6]);
    }

    #[test]
    fn dual_pairs_match_primal_on_the_triangle() {
        let mut matrix = BoundaryMatrix::<SparsePivotColumn>::from_columns(single_triangle());
        let pairs = compute_persistence_pairs_dualized::<TwistReduction, _>(&mut matrix);
        assert_eq!(sorted(pairs), single_triangle_pairs());
    }

    #[test]
    fn empty_matrix_yields_no_pairs_either_way() {
        let mut primal = BoundaryMatrix::<VectorList>::new();
        let mut dual = BoundaryMatrix::<VectorList>::new();
        assert!(compute_persistence_pairs::<RowReduction, _>(&mut primal).is_empty());
        assert!(compute_persistence_pairs_dualized::<RowReduction, _>(&mut dual).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn primal_and_dual_agree(
            heights in prop::collection::vec(0_u32..5, 1..6),
            max_dim in 1_u8..4,
        ) {
            let columns = lower_star_complex(&heights, max_dim);
            let mut primal = BoundaryMatrix::<VectorList>::from_columns(columns.clone());
            let mut dual = BoundaryMatrix::<VectorList>::from_columns(columns);
            let primal_pairs = compute_persistence_pairs::<StandardReduction, _>(&mut primal);
            let dual_pairs = compute_persistence_pairs_dualized::<ChunkReduction, _>(&mut dual);
            prop_assert_eq!(sorted(primal_pairs), sorted(dual_pairs));
        }
    }
}
