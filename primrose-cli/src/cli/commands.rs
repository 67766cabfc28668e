//! Command implementations and argument parsing for the primrose CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use primrose_core::{Graph, MinimumSpanningTree, MstError, PrimStrategy};
use primrose_providers_edgelist::{EdgeListError, EdgeListProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "primrose",
    about = "Compute minimum spanning trees with Prim's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the spanning tree of an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the edge-list file (`<V> <E>` header, then `src dst weight` lines).
    pub path: PathBuf,

    /// Which builder(s) to run.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Vertex to grow the tree from (defaults to the first vertex in the file).
    #[arg(long)]
    pub start: Option<u64>,

    /// Print every selected tree edge.
    #[arg(long)]
    pub show_edges: bool,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Builders selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Rescan the frontier on every iteration.
    Naive,
    /// Binary heap with lazy deletion.
    Heap,
    /// Run both and check that their total weights agree.
    Both,
}

impl AlgorithmChoice {
    /// Strategies to run, in execution order.
    #[must_use]
    pub fn strategies(self) -> &'static [PrimStrategy] {
        match self {
            Self::Naive => &[PrimStrategy::Naive],
            Self::Heap => &[PrimStrategy::Heap],
            Self::Both => &PrimStrategy::ALL,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list parsing failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// A spanning-tree builder failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// The two builders disagreed on the total weight.
    #[error("total weights differ: naive={naive}, heap={heap}")]
    WeightMismatch {
        /// Total reported by the naive builder.
        naive: f64,
        /// Total reported by the heap builder.
        heap: f64,
    },
}

impl CliError {
    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::EdgeList(err) => err.code().as_str(),
            Self::Mst(err) => err.code().as_str(),
            Self::WeightMismatch { .. } => "CLI_WEIGHT_MISMATCH",
        }
    }
}

/// Outcome of one builder run.
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    /// Builder that produced the tree.
    pub strategy: PrimStrategy,
    /// The spanning tree.
    pub tree: MinimumSpanningTree<u64>,
    /// Wall-clock time spent in the builder.
    pub elapsed: Duration,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded data source.
    pub data_source: String,
    /// Number of distinct vertices in the graph.
    pub vertices: usize,
    /// Number of edges kept by the graph.
    pub edges: usize,
    /// One entry per builder, in execution order.
    pub runs: Vec<AlgorithmRun>,
    /// Whether [`render_summary`] lists the tree edges.
    pub show_edges: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the file or building the tree fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use primrose_cli::cli::{AlgorithmChoice, Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 2\n1 2 3\n2 3 7\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         algorithm: AlgorithmChoice::Both,
///         start: None,
///         show_edges: false,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.runs.len(), 2);
/// assert_eq!(summary.runs[0].tree.total_weight(), 10.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, algorithm = field::Empty, start = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        algorithm,
        start,
        show_edges,
        name,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("algorithm", field::debug(algorithm));
    if let Some(start) = start {
        span.record("start", start);
    }

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let provider = EdgeListProvider::try_from_reader(chosen_name, open_reader(&path)?)?;
    let graph = provider.graph();

    let runs = algorithm
        .strategies()
        .iter()
        .map(|&strategy| timed_run(graph, strategy, start))
        .collect::<Result<Vec<_>, _>>()?;
    ensure_weights_agree(&runs)?;

    info!(
        data_source = provider.name(),
        vertices = graph.vertex_count(),
        runs = runs.len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: provider.name().to_owned(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        runs,
        show_edges,
    })
}

fn timed_run(
    graph: &Graph<u64>,
    strategy: PrimStrategy,
    start: Option<u64>,
) -> Result<AlgorithmRun, CliError> {
    let started = Instant::now();
    let tree = match start {
        Some(vertex) => strategy.run_from(graph, &vertex)?,
        None => strategy.run(graph)?,
    };
    let elapsed = started.elapsed();
    info!(
        algorithm = strategy.as_str(),
        total_weight = tree.total_weight(),
        elapsed_us = %elapsed.as_micros(),
        "spanning tree built"
    );
    Ok(AlgorithmRun {
        strategy,
        tree,
        elapsed,
    })
}

/// Fails when the naive and heap totals both exist and differ.
pub(super) fn ensure_weights_agree(runs: &[AlgorithmRun]) -> Result<(), CliError> {
    let total = |wanted: PrimStrategy| {
        runs.iter()
            .find(|run| run.strategy == wanted)
            .map(|run| run.tree.total_weight())
    };
    match (total(PrimStrategy::Naive), total(PrimStrategy::Heap)) {
        (Some(naive), Some(heap)) if naive != heap => {
            Err(CliError::WeightMismatch { naive, heap })
        }
        _ => Ok(()),
    }
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "vertices: {}", summary.vertices)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    for run in &summary.runs {
        writeln!(
            writer,
            "{}: total weight {}, tree edges {}, elapsed {}us",
            run.strategy,
            run.tree.total_weight(),
            run.tree.len(),
            run.elapsed.as_micros(),
        )?;
        if summary.show_edges {
            for edge in run.tree.edges() {
                writeln!(
                    writer,
                    "\t{}\t{}\t{}",
                    edge.source(),
                    edge.target(),
                    edge.weight()
                )?;
            }
        }
    }
    Ok(())
}
