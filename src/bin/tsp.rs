use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use log::{Level, LevelFilter, debug, info, log_enabled, warn};
use structopt::StructOpt;
use tsp::{log::build_tsp_logger_for_verbosity, prelude::*, utils::signal_handling};

/// Finds a shortest tour that starts at the first city, visits every other city exactly once
/// and returns to the first city. The search is exhaustive and hence only feasible for about a
/// dozen cities.
#[derive(StructOpt)]
#[structopt(name = "tsp")]
struct Opts {
    /// Input file containing the cities and edges of the graph [default: stdin]
    #[structopt(short, long)]
    input: Option<PathBuf>,

    /// Output file for the tour [default: stdout]
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Treat the edges as directed
    #[structopt(short, long)]
    directed: bool,

    /// Stop after this many seconds and report the best tour found so far
    #[structopt(short = "T", long)]
    timeout: Option<f64>,

    /// Stop after extending this many partial paths
    #[structopt(long)]
    max_expansions: Option<u64>,

    /// Also write the graph in DOT format with the tour highlighted
    #[structopt(long)]
    dot: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn load_graph(path: &Option<PathBuf>, directed: bool) -> anyhow::Result<AdjMatrix> {
    if let Some(path) = path {
        AdjMatrix::try_read_tsp_file(path, directed)
            .with_context(|| format!("Cannot read input file {}", path.display()))
    } else {
        let stdin = std::io::stdin().lock();
        AdjMatrix::try_read_tsp(stdin, directed).context("Cannot read graph from stdin")
    }
}

fn write_solution(
    graph: &AdjMatrix,
    tour: Option<&Path>,
    path: &Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(path) = path {
        graph
            .try_write_tour_file(path, tour)
            .with_context(|| format!("Cannot write output file {}", path.display()))?;
    } else {
        let writer = std::io::stdout().lock();
        graph.try_write_tour(writer, tour)?;
    }

    Ok(())
}

fn search_budget(opts: &Opts) -> anyhow::Result<SearchBudget> {
    let mut budget = SearchBudget::default();
    if let Some(seconds) = opts.timeout {
        let timeout = Duration::try_from_secs_f64(seconds)
            .with_context(|| format!("Invalid timeout {seconds}"))?;
        budget = budget.with_timeout(timeout);
    }
    if let Some(max_expansions) = opts.max_expansions {
        budget = budget.with_max_expansions(max_expansions);
    }
    Ok(budget)
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_tsp_logger_for_verbosity(LevelFilter::Warn, opts.verbose);
    signal_handling::initialize();

    let budget = search_budget(&opts)?;
    let mut graph = load_graph(&opts.input, opts.directed)?;
    info!(
        "Read {} graph with n={} m={}",
        if opts.directed { "directed" } else { "undirected" },
        graph.number_of_nodes(),
        graph.number_of_edges()
    );
    if log_enabled!(Level::Debug) {
        debug!("Weights:\n{graph:?}");
    }

    let (tour, report) = shortest_tour(&mut graph, budget);
    if !report.completed {
        warn!(
            "Search stopped after {} expansions; the tour is the best found so far",
            report.expansions
        );
    }
    if let Some(tour) = &tour {
        info!("Best tour: {}", tour.on(&graph));
    }

    write_solution(&graph, tour.as_ref(), &opts.output)?;

    if let Some(path) = &opts.dot {
        graph
            .try_write_dot_file(path, tour.as_ref())
            .with_context(|| format!("Cannot write DOT file {}", path.display()))?;
    }

    Ok(())
}
