//! Sorted symmetric difference shared by the list-backed representations.

use std::iter::Peekable;

use crate::index::Index;

/// Merges two strictly increasing index streams, dropping entries present in
/// both. The output is strictly increasing.
pub(super) struct SymmetricDifference<A: Iterator<Item = Index>, B: Iterator<Item = Index>> {
    left: Peekable<A>,
    right: Peekable<B>,
}

impl<A, B> SymmetricDifference<A, B>
where
    A: Iterator<Item = Index>,
    B: Iterator<Item = Index>,
{
    pub(super) fn new(left: A, right: B) -> Self {
        Self {
            left: left.peekable(),
            right: right.peekable(),
        }
    }
}

impl<A, B> Iterator for SymmetricDifference<A, B>
where
    A: Iterator<Item = Index>,
    B: Iterator<Item = Index>,
{
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        loop {
            match (self.left.peek().copied(), self.right.peek().copied()) {
                (None, None) => return None,
                (Some(_), None) => return self.left.next(),
                (None, Some(_)) => return self.right.next(),
                (Some(l), Some(r)) if l < r => return self.left.next(),
                (Some(l), Some(r)) if r < l => return self.right.next(),
                (Some(_), Some(_)) => {
                    self.left.next();
                    self.right.next();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::disjoint(vec![0, 2], vec![1, 3], vec![0, 1, 2, 3])]
    #[case::overlap(vec![0, 1, 2], vec![1, 2, 5], vec![0, 5])]
    #[case::identical(vec![4, 7], vec![4, 7], vec![])]
    #[case::left_empty(vec![], vec![3], vec![3])]
    #[case::both_empty(vec![], vec![], vec![])]
    fn merges_sorted_streams(
        #[case] left: Vec<Index>,
        #[case] right: Vec<Index>,
        #[case] expected: Vec<Index>,
    ) {
        let merged: Vec<Index> =
            SymmetricDifference::new(left.into_iter(), right.into_iter()).collect();
        assert_eq!(merged, expected);
    }
}
