//! Resolution of sweep tuples to monomorphized computations.

use std::{
    collections::HashMap,
    hint::black_box,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use phat_core::{
    BitTreePivotColumn, BoundaryMatrix, ChunkReduction, FullPivotColumn, MatrixFormat,
    MatrixIoError, Reduction, Representation, RowReduction, SparsePivotColumn, StandardReduction,
    TwistReduction, VectorList, VectorSet, VectorVector, compute_persistence_pairs,
    compute_persistence_pairs_dualized,
};
use tracing::{Span, debug, field, instrument};

use super::{
    commands::CliError,
    config::{AlgorithmKind, AnsatzKind, RepresentationKind},
    strategy::RunTuple,
};

/// Loads a matrix, then times one computation on it.
type RunFn = fn(&Path, MatrixFormat, AnsatzKind) -> Result<Duration, MatrixIoError>;

fn timed_run<R: Representation, A: Reduction>(
    path: &Path,
    format: MatrixFormat,
    ansatz: AnsatzKind,
) -> Result<Duration, MatrixIoError> {
    let mut matrix = BoundaryMatrix::<R>::load(path, format)?;
    let timer = Instant::now();
    let pairs = match ansatz {
        AnsatzKind::Primal => compute_persistence_pairs::<A, R>(&mut matrix),
        AnsatzKind::Dual => compute_persistence_pairs_dualized::<A, R>(&mut matrix),
    };
    let elapsed = timer.elapsed();
    black_box(pairs);
    Ok(elapsed)
}

/// Table from `(representation, algorithm)` to its computation.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: HashMap<(RepresentationKind, AlgorithmKind), RunFn>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Builds the registry covering every representation and algorithm.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_representation::<VectorVector>(RepresentationKind::VectorVector);
        registry.register_representation::<VectorSet>(RepresentationKind::VectorSet);
        registry.register_representation::<VectorList>(RepresentationKind::VectorList);
        registry.register_representation::<FullPivotColumn>(RepresentationKind::FullPivotColumn);
        registry
            .register_representation::<BitTreePivotColumn>(RepresentationKind::BitTreePivotColumn);
        registry
            .register_representation::<SparsePivotColumn>(RepresentationKind::SparsePivotColumn);
        registry
    }

    pub(super) fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn register_representation<R: Representation>(&mut self, kind: RepresentationKind) {
        self.register::<R, StandardReduction>(kind, AlgorithmKind::Standard);
        self.register::<R, TwistReduction>(kind, AlgorithmKind::Twist);
        self.register::<R, RowReduction>(kind, AlgorithmKind::Row);
        self.register::<R, ChunkReduction>(kind, AlgorithmKind::Chunk);
    }

    fn register<R: Representation, A: Reduction>(
        &mut self,
        representation: RepresentationKind,
        algorithm: AlgorithmKind,
    ) {
        self.entries
            .insert((representation, algorithm), timed_run::<R, A>);
    }

    fn lookup(&self, representation: RepresentationKind, algorithm: AlgorithmKind) -> Option<RunFn> {
        self.entries.get(&(representation, algorithm)).copied()
    }

    /// Number of registered cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether the pair has a computation.
    #[must_use]
    pub fn contains(&self, representation: RepresentationKind, algorithm: AlgorithmKind) -> bool {
        self.entries.contains_key(&(representation, algorithm))
    }
}

/// Timing of one completed tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Input file.
    pub input_path: PathBuf,
    /// Matrix representation.
    pub representation: RepresentationKind,
    /// Reduction algorithm.
    pub algorithm: AlgorithmKind,
    /// Primal or dual computation.
    pub ansatz: AnsatzKind,
    /// Wall-clock time of the computation, excluding the load.
    pub elapsed: Duration,
}

impl RunResult {
    /// Elapsed time in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs sweep tuples against a [`Registry`] in a fixed file format.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Registry,
    format: MatrixFormat,
}

impl Dispatcher {
    /// Creates a dispatcher over the full registry.
    #[must_use]
    pub fn new(format: MatrixFormat) -> Self {
        Self::with_registry(Registry::new(), format)
    }

    pub(super) const fn with_registry(registry: Registry, format: MatrixFormat) -> Self {
        Self { registry, format }
    }

    /// Loads the tuple's file into a fresh matrix and times the selected
    /// computation.
    ///
    /// # Errors
    /// Returns [`CliError::Load`] when the file cannot be loaded and
    /// [`CliError::Unregistered`] when the registry lacks the cell.
    #[instrument(
        name = "cli.dispatch",
        err(level = "debug"),
        skip(self, run),
        fields(
            path = %run.path.display(),
            representation = run.representation.label(),
            algorithm = run.algorithm.label(),
            ansatz = run.ansatz.label(),
            elapsed_seconds = field::Empty,
        ),
    )]
    pub fn dispatch(&self, run: RunTuple<'_>) -> Result<RunResult, CliError> {
        let compute = self
            .registry
            .lookup(run.representation, run.algorithm)
            .ok_or(CliError::Unregistered {
                representation: run.representation,
                algorithm: run.algorithm,
            })?;
        let elapsed = compute(run.path, self.format, run.ansatz).map_err(|source| CliError::Load {
            path: run.path.to_path_buf(),
            source,
        })?;

        let result = RunResult {
            input_path: run.path.to_path_buf(),
            representation: run.representation,
            algorithm: run.algorithm,
            ansatz: run.ansatz,
            elapsed,
        };
        Span::current().record("elapsed_seconds", result.elapsed_seconds());
        debug!(elapsed_seconds = result.elapsed_seconds(), "run completed");
        Ok(result)
    }
}
