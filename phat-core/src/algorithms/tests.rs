//! Agreement tests across algorithms and representations.

use super::*;
use crate::{
    compute::compute_persistence_pairs,
    representation::{
        BitTreePivotColumn, FullPivotColumn, SparsePivotColumn, VectorList, VectorSet,
        VectorVector,
    },
};

use phat_test_support::complex::{lower_star_complex, single_triangle, single_triangle_pairs};
use proptest::prelude::*;
use rstest::rstest;

fn sorted_pairs<A: Reduction, R: Representation>(columns: Vec<(u8, Vec<usize>)>) -> Vec<(usize, usize)> {
    let mut matrix = BoundaryMatrix::<R>::from_columns(columns);
    let mut pairs = compute_persistence_pairs::<A, R>(&mut matrix);
    pairs.sort();
    pairs.iter().map(|pair| (pair.birth, pair.death)).collect()
}

type PairsFn = fn(Vec<(u8, Vec<usize>)>) -> Vec<(usize, usize)>;

fn all_combinations() -> Vec<(&'static str, PairsFn)> {
    macro_rules! row {
        ($rep:ty) => {
            [
                (concat!(stringify!($rep), "/standard"), sorted_pairs::<StandardReduction, $rep> as PairsFn),
                (concat!(stringify!($rep), "/twist"), sorted_pairs::<TwistReduction, $rep> as PairsFn),
                (concat!(stringify!($rep), "/row"), sorted_pairs::<RowReduction, $rep> as PairsFn),
                (concat!(stringify!($rep), "/chunk"), sorted_pairs::<ChunkReduction, $rep> as PairsFn),
            ]
        };
    }
    [
        row!(VectorVector),
        row!(VectorSet),
        row!(VectorList),
        row!(FullPivotColumn),
        row!(BitTreePivotColumn),
        row!(SparsePivotColumn),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[test]
fn every_combination_pairs_the_single_triangle() {
    for (label, pairs_of) in all_combinations() {
        assert_eq!(pairs_of(single_triangle()), single_triangle_pairs(), "{label}");
    }
}

#[rstest]
#[case::empty(Vec::new())]
#[case::lone_vertex(vec![(0, vec![])])]
#[case::two_vertices(vec![(0, vec![]), (0, vec![])])]
fn matrices_without_boundaries_have_no_pairs(#[case] columns: Vec<(u8, Vec<usize>)>) {
    for (label, pairs_of) in all_combinations() {
        assert!(pairs_of(columns.clone()).is_empty(), "{label}");
    }
}

#[test]
fn hollow_square_leaves_one_cycle_unpaired() {
    // Four vertices joined in a cycle: three edges kill components, the
    // fourth creates a loop that never dies.
    let columns = vec![
        (0, vec![]),
        (0, vec![]),
        (0, vec![]),
        (0, vec![]),
        (1, vec![0, 1]),
        (1, vec![1, 2]),
        (1, vec![2, 3]),
        (1, vec![0, 3]),
    ];
    for (label, pairs_of) in all_combinations() {
        assert_eq!(pairs_of(columns.clone()), vec![(1, 4), (2, 5), (3, 6)], "{label}");
    }
}

#[test]
fn tetrahedron_pairs_count_matches_euler_characteristic() {
    let columns = lower_star_complex(&[0, 0, 0, 0], 3);
    let num_cols = columns.len();
    for (label, pairs_of) in all_combinations() {
        let pairs = pairs_of(columns.clone());
        // A solid tetrahedron has a single essential class: vertex 0.
        assert_eq!(num_cols - 2 * pairs.len(), 1, "{label}");
        assert!(pairs.iter().all(|&(birth, _)| birth != 0), "{label}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn algorithms_agree_on_lower_star_complexes(
        heights in prop::collection::vec(0_u32..6, 1..7),
        max_dim in 1_u8..4,
    ) {
        let columns = lower_star_complex(&heights, max_dim);
        let expected = sorted_pairs::<StandardReduction, VectorVector>(columns.clone());
        for (label, pairs_of) in all_combinations() {
            prop_assert_eq!(pairs_of(columns.clone()), expected.clone(), "{}", label);
        }
    }

    #[test]
    fn each_column_appears_in_at_most_one_pair(
        heights in prop::collection::vec(0_u32..4, 1..7),
    ) {
        let columns = lower_star_complex(&heights, 2);
        let num_cols = columns.len();
        let pairs = sorted_pairs::<TwistReduction, BitTreePivotColumn>(columns);
        let mut seen = vec![false; num_cols];
        for (birth, death) in pairs {
            prop_assert!(birth < death);
            prop_assert!(!seen[birth] && !seen[death]);
            seen[birth] = true;
            seen[death] = true;
        }
    }
}
