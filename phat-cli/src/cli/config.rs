//! Strategy kinds and the command-line scan producing a [`RunConfiguration`].

use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use clap::ValueEnum;
use phat_core::{
    BitTreePivotColumn, ChunkReduction, FullPivotColumn, MatrixFormat, Reduction,
    Representation, RowReduction, SparsePivotColumn, StandardReduction, TwistReduction,
    VectorList, VectorSet, VectorVector,
};
use thiserror::Error;
use tracing::{Span, field, instrument};

const PROGRAM_NAME: &str = "benchmark";

/// Sparse column storage used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum RepresentationKind {
    /// Vector of sorted vectors.
    VectorVector,
    /// Vector of ordered sets.
    VectorSet,
    /// Vector of linked lists.
    VectorList,
    /// Vector columns with a dense pivot.
    FullPivotColumn,
    /// Vector columns with a bit-tree pivot.
    BitTreePivotColumn,
    /// Vector columns with an ordered-set pivot.
    SparsePivotColumn,
}

impl RepresentationKind {
    /// Label printed in the report.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VectorVector => VectorVector::NAME,
            Self::VectorSet => VectorSet::NAME,
            Self::VectorList => VectorList::NAME,
            Self::FullPivotColumn => FullPivotColumn::NAME,
            Self::BitTreePivotColumn => BitTreePivotColumn::NAME,
            Self::SparsePivotColumn => SparsePivotColumn::NAME,
        }
    }
}

/// Column reduction algorithm used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Left-to-right standard reduction.
    Standard,
    /// Standard reduction with clearing.
    Twist,
    /// Right-to-left row reduction.
    Row,
    /// Chunked local reduction followed by a global pass.
    Chunk,
}

impl AlgorithmKind {
    /// Label printed in the report.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => StandardReduction::NAME,
            Self::Twist => TwistReduction::NAME,
            Self::Row => RowReduction::NAME,
            Self::Chunk => ChunkReduction::NAME,
        }
    }
}

/// Whether a run reduces the matrix as loaded or its anti-transpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum AnsatzKind {
    /// Reduce the boundary matrix as loaded.
    #[value(help = "use only primal approach")]
    Primal,
    /// Reduce the dualized matrix and map pairs back.
    #[value(help = "use only dualization approach")]
    Dual,
}

impl AnsatzKind {
    /// Label printed in the report.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primal => "primal",
            Self::Dual => "dual",
        }
    }
}

/// Reasons the command line cannot start a sweep. Each one prints the usage
/// screen.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsageError {
    /// No arguments were given.
    #[error("no arguments given")]
    MissingArguments,
    /// `--help` was requested.
    #[error("help requested")]
    HelpRequested,
    /// A `--` token matched no known option.
    #[error("unknown option `{option}`")]
    UnknownOption {
        /// The token as given.
        option: String,
    },
}

/// Validated sweep configuration. Selection lists are never empty and keep
/// duplicates in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    use_binary: bool,
    representations: Vec<RepresentationKind>,
    algorithms: Vec<AlgorithmKind>,
    ansaetze: Vec<AnsatzKind>,
    input_paths: Vec<PathBuf>,
}

impl RunConfiguration {
    /// Whether inputs are read in the binary format.
    #[must_use]
    pub const fn use_binary(&self) -> bool {
        self.use_binary
    }

    /// The file format implied by [`Self::use_binary`].
    #[must_use]
    pub const fn format(&self) -> MatrixFormat {
        if self.use_binary {
            MatrixFormat::Binary
        } else {
            MatrixFormat::Ascii
        }
    }

    /// Selected representations.
    #[must_use]
    pub fn representations(&self) -> &[RepresentationKind] {
        &self.representations
    }

    /// Selected algorithms.
    #[must_use]
    pub fn algorithms(&self) -> &[AlgorithmKind] {
        &self.algorithms
    }

    /// Selected ansaetze.
    #[must_use]
    pub fn ansaetze(&self) -> &[AnsatzKind] {
        &self.ansaetze
    }

    /// Input files in argument order.
    #[must_use]
    pub fn input_paths(&self) -> &[PathBuf] {
        &self.input_paths
    }
}

enum Flag {
    Ascii,
    Binary,
    Help,
    Representation(RepresentationKind),
    Algorithm(AlgorithmKind),
    Ansatz(AnsatzKind),
}

impl Flag {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "ascii" => Some(Self::Ascii),
            "binary" => Some(Self::Binary),
            "help" => Some(Self::Help),
            _ => <RepresentationKind as ValueEnum>::from_str(name, false)
                .map(Self::Representation)
                .or_else(|_| <AlgorithmKind as ValueEnum>::from_str(name, false).map(Self::Algorithm))
                .or_else(|_| <AnsatzKind as ValueEnum>::from_str(name, false).map(Self::Ansatz))
                .ok(),
        }
    }
}

/// A token is an option when it is longer than two bytes and starts with
/// `--`. A bare `--` and single-dash tokens are paths.
fn is_option(token: &OsStr) -> bool {
    let bytes = token.as_encoded_bytes();
    bytes.len() > 2 && bytes.starts_with(b"--")
}

fn or_default<K: ValueEnum + Clone>(selection: Vec<K>) -> Vec<K> {
    if selection.is_empty() {
        K::value_variants().to_vec()
    } else {
        selection
    }
}

/// Scans `args` (program name excluded) left to right.
///
/// `--ascii` and `--binary` overwrite each other; selector flags append on
/// every occurrence; every other token is an input path. Empty selections
/// fall back to all kinds in canonical order.
///
/// # Errors
/// Returns [`UsageError`] for an empty argument list, `--help`, or an
/// unknown option.
///
/// # Examples
/// ```
/// use phat_cli::cli::{AlgorithmKind, AnsatzKind, parse_arguments};
///
/// let config = parse_arguments(["--twist", "--dual", "--ascii", "a.dat"])?;
/// assert_eq!(config.algorithms(), &[AlgorithmKind::Twist]);
/// assert_eq!(config.ansaetze(), &[AnsatzKind::Dual]);
/// assert_eq!(config.representations().len(), 6);
/// assert!(!config.use_binary());
/// # Ok::<(), phat_cli::cli::UsageError>(())
/// ```
#[instrument(
    name = "cli.parse",
    level = "debug",
    err(level = "debug"),
    skip(args),
    fields(arguments = field::Empty, input_paths = field::Empty),
)]
pub fn parse_arguments<I, S>(args: I) -> Result<RunConfiguration, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut use_binary = true;
    let mut representations = Vec::new();
    let mut algorithms = Vec::new();
    let mut ansaetze = Vec::new();
    let mut input_paths = Vec::new();
    let mut arguments = 0_usize;

    for arg in args {
        let token: OsString = arg.into();
        arguments += 1;
        if !is_option(&token) {
            input_paths.push(PathBuf::from(token));
            continue;
        }
        let flag = token
            .to_str()
            .and_then(|text| text.strip_prefix("--"))
            .and_then(Flag::parse)
            .ok_or_else(|| UsageError::UnknownOption {
                option: token.to_string_lossy().into_owned(),
            })?;
        match flag {
            Flag::Ascii => use_binary = false,
            Flag::Binary => use_binary = true,
            Flag::Help => return Err(UsageError::HelpRequested),
            Flag::Representation(kind) => representations.push(kind),
            Flag::Algorithm(kind) => algorithms.push(kind),
            Flag::Ansatz(kind) => ansaetze.push(kind),
        }
    }

    if arguments == 0 {
        return Err(UsageError::MissingArguments);
    }

    let span = Span::current();
    span.record("arguments", arguments);
    span.record("input_paths", input_paths.len());

    Ok(RunConfiguration {
        use_binary,
        representations: or_default(representations),
        algorithms: or_default(algorithms),
        ansaetze: or_default(ansaetze),
        input_paths,
    })
}

fn option_names<K: ValueEnum>() -> Vec<String> {
    K::value_variants()
        .iter()
        .filter_map(ValueEnum::to_possible_value)
        .map(|value| format!("--{}", value.get_name()))
        .collect()
}

fn option_line(names: &str, description: &str) -> String {
    format!("{names}  --  {description}\n")
}

/// Renders the usage screen from the flag vocabulary the parser accepts.
///
/// # Examples
/// ```
/// let usage = phat_cli::cli::usage();
/// assert!(usage.starts_with("Usage: benchmark [options]"));
/// assert!(usage.contains("--bit_tree_pivot_column"));
/// ```
#[must_use]
pub fn usage() -> String {
    let mut text = format!(
        "Usage: {PROGRAM_NAME} [options] input_filename_0 input_filename_1 ... input_filename_N\n\n\
         Options:\n\n"
    );
    text.push_str(&option_line("--ascii", "use ascii file format"));
    text.push_str(&option_line("--binary", "use binary file format (default)"));
    text.push_str(&option_line("--help", "prints this screen"));
    for value in AnsatzKind::value_variants()
        .iter()
        .filter_map(ValueEnum::to_possible_value)
    {
        let help = value
            .get_help()
            .map(ToString::to_string)
            .unwrap_or_default();
        text.push_str(&option_line(&format!("--{}", value.get_name()), &help));
    }
    text.push_str(&option_line(
        &option_names::<RepresentationKind>().join(", "),
        "use only a subset of representation data structures for boundary matrices",
    ));
    text.push_str(&option_line(
        &option_names::<AlgorithmKind>().join(", "),
        "use only a subset of reduction algorithms",
    ));
    text
}

