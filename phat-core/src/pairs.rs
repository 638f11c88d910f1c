//! Persistence pairs read off a reduced boundary matrix.

use crate::index::Index;

/// A `(birth, death)` pair of column indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersistencePair {
    /// Column whose cell creates the feature.
    pub birth: Index,
    /// Column whose cell destroys it.
    pub death: Index,
}

/// Ordered collection of [`PersistencePair`]s.
///
/// # Examples
/// ```
/// use phat_core::PersistencePairs;
///
/// let mut pairs = PersistencePairs::new();
/// pairs.append(2, 4);
/// pairs.append(1, 3);
/// pairs.sort();
/// assert_eq!(pairs.iter().map(|p| p.birth).collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistencePairs {
    pairs: Vec<PersistencePair>,
}

impl PersistencePairs {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends the pair `(birth, death)`.
    pub fn append(&mut self, birth: Index, death: Index) {
        self.pairs.push(PersistencePair { birth, death });
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns whether the collection holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the pairs in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &PersistencePair> {
        self.pairs.iter()
    }

    /// Returns the pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[PersistencePair] {
        &self.pairs
    }

    /// Sorts by birth, then death.
    pub fn sort(&mut self) {
        self.pairs.sort_unstable();
    }

    /// Maps pairs of an anti-transposed `num_cols`-column matrix back to the
    /// original column numbering.
    ///
    /// Every index must be below `num_cols`.
    pub fn dualize(&mut self, num_cols: usize) {
        for pair in &mut self.pairs {
            let birth = num_cols - 1 - pair.death;
            let death = num_cols - 1 - pair.birth;
            *pair = PersistencePair { birth, death };
        }
    }
}

impl<'a> IntoIterator for &'a PersistencePairs {
    type Item = &'a PersistencePair;
    type IntoIter = std::slice::Iter<'a, PersistencePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
