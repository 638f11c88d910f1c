//! Deterministic enumeration of the sweep.

use std::{iter::FusedIterator, path::Path};

use super::config::{AlgorithmKind, AnsatzKind, RepresentationKind, RunConfiguration};

/// One cell of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTuple<'a> {
    /// Input file.
    pub path: &'a Path,
    /// Reduction algorithm.
    pub algorithm: AlgorithmKind,
    /// Matrix representation.
    pub representation: RepresentationKind,
    /// Primal or dual computation.
    pub ansatz: AnsatzKind,
}

/// Lazy iterator over every [`RunTuple`] of a configuration.
///
/// Nesting from outermost to innermost is input path, algorithm,
/// representation, ansatz, each in selection order. Cloning restarts from the
/// clone's position, so [`StrategySpace::new`] always yields the full sweep.
///
/// # Examples
/// ```
/// use phat_cli::cli::{AnsatzKind, StrategySpace, parse_arguments};
///
/// let config = parse_arguments(["--standard", "--vector_set", "a", "b"])?;
/// let space = StrategySpace::new(&config);
/// assert_eq!(space.len(), 4);
/// let ansaetze: Vec<_> = space.map(|run| run.ansatz).collect();
/// assert_eq!(ansaetze, [AnsatzKind::Primal, AnsatzKind::Dual].repeat(2));
/// # Ok::<(), phat_cli::cli::UsageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StrategySpace<'a> {
    config: &'a RunConfiguration,
    cursor: Option<[usize; 4]>,
    remaining: usize,
}

impl<'a> StrategySpace<'a> {
    /// Positions a new sweep at its first tuple.
    #[must_use]
    pub fn new(config: &'a RunConfiguration) -> Self {
        let remaining = Self::limits(config)
            .iter()
            .fold(1_usize, |total, &len| total.saturating_mul(len));
        Self {
            config,
            cursor: (remaining > 0).then_some([0; 4]),
            remaining,
        }
    }

    fn limits(config: &RunConfiguration) -> [usize; 4] {
        [
            config.input_paths().len(),
            config.algorithms().len(),
            config.representations().len(),
            config.ansaetze().len(),
        ]
    }

    fn tuple_at(
        &self,
        [path, algorithm, representation, ansatz]: [usize; 4],
    ) -> Option<RunTuple<'a>> {
        Some(RunTuple {
            path: self.config.input_paths().get(path)?,
            algorithm: *self.config.algorithms().get(algorithm)?,
            representation: *self.config.representations().get(representation)?,
            ansatz: *self.config.ansaetze().get(ansatz)?,
        })
    }

    /// Steps the innermost digit, carrying outwards; `None` past the end.
    fn advance(&self, mut cursor: [usize; 4]) -> Option<[usize; 4]> {
        let limits = Self::limits(self.config);
        for digit in (0..cursor.len()).rev() {
            cursor[digit] += 1;
            if cursor[digit] < limits[digit] {
                return Some(cursor);
            }
            cursor[digit] = 0;
        }
        None
    }
}

impl<'a> Iterator for StrategySpace<'a> {
    type Item = RunTuple<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor?;
        let tuple = self.tuple_at(cursor);
        self.cursor = self.advance(cursor);
        self.remaining = self.remaining.saturating_sub(1);
        tuple
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StrategySpace<'_> {}

impl FusedIterator for StrategySpace<'_> {}
