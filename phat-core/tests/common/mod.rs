use phat_core::{
    BoundaryMatrix, Reduction, Representation, compute_persistence_pairs,
    compute_persistence_pairs_dualized,
};

/// Sorted `(birth, death)` tuples for `matrix` reduced with `A`.
pub fn sorted_pairs<A: Reduction, R: Representation>(
    matrix: &mut BoundaryMatrix<R>,
    dualized: bool,
) -> Vec<(usize, usize)> {
    let mut pairs = if dualized {
        compute_persistence_pairs_dualized::<A, R>(matrix)
    } else {
        compute_persistence_pairs::<A, R>(matrix)
    };
    pairs.sort();
    pairs.iter().map(|pair| (pair.birth, pair.death)).collect()
}
