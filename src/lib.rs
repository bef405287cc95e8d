#![deny(clippy::all)]

use anyhow::anyhow;
use clap::{value_t, App, Arg};
use lazy_static::lazy_static;
use thiserror::Error;
use tracing::{debug, info};

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use searcher::{
    Graph, GraphError, GraphResult, InsertionOrder, ReadGraphError, SearchObserver, SearchOptions,
    SearchOutcome,
};

pub mod console;
pub mod report;

use report::RunReport;

type Error = anyhow::Error;
type Runner = fn(&Graph, SearchOptions, &mut dyn SearchObserver) -> GraphResult<SearchOutcome>;

/// A search strategy which can be selected by name.
pub struct Algorithm {
    pub name: &'static str,
    pub title: &'static str,
    runner: Runner,
    order: Option<InsertionOrder>,
}

impl Algorithm {
    /// The neighbour insertion order this algorithm will use.
    pub fn insertion_order(&self, reversed: bool) -> InsertionOrder {
        self.order
            .unwrap_or_else(|| InsertionOrder::from_reversed(reversed))
    }

    pub fn run(
        &self,
        graph: &Graph,
        options: SearchOptions,
        observer: &mut dyn SearchObserver,
    ) -> GraphResult<SearchOutcome> {
        (self.runner)(graph, options, observer)
    }
}

macro_rules! algorithm {
    ($name:expr, $title:expr, $search:path) => {
        algorithm!($name, $title, $search, None)
    };
    ($name:expr, $title:expr, $search:path, $order:expr) => {
        Algorithm {
            name: $name,
            title: $title,
            runner: |graph, options, observer| $search(graph, options, observer),
            order: $order,
        }
    };
}

lazy_static! {
    static ref ALGORITHMS: Vec<Algorithm> = vec![
        algorithm!("dfs", "depth-first search", searcher::dfs),
        algorithm!("bfs", "breadth-first search", searcher::bfs),
        algorithm!("lcfs", "lowest-cost-first search", searcher::lowest_cost_first),
        algorithm!("bestfs", "best-first search", searcher::best_first),
        algorithm!("astar", "A* search", searcher::astar),
        algorithm!("ids", "iterative deepening search", searcher::iterative_deepening),
        algorithm!(
            "bnb",
            "branch and bound search",
            searcher::branch_and_bound,
            Some(InsertionOrder::DescendingF)
        ),
    ];
}

/// All the known algorithms, in the order they are listed in help text.
pub fn algorithms() -> impl Iterator<Item = &'static Algorithm> {
    ALGORITHMS.iter()
}

pub fn algorithm(name: &str) -> Result<&'static Algorithm, RunError> {
    ALGORITHMS.iter().find(|a| a.name == name).ok_or_else(|| {
        let names: Vec<&str> = ALGORITHMS.iter().map(|a| a.name).collect();
        RunError::UnknownAlgorithm(name.to_string(), names.join(", "))
    })
}

/// Where to read the graph from, where to write the report, and
/// how the search should behave.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub limit: usize,
    pub reversed: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("file/input.txt"),
            output: PathBuf::from("file/output.txt"),
            limit: SearchOptions::default().limit,
            reversed: false,
        }
    }
}

impl RunConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions::default()
            .with_limit(self.limit)
            .reversed(self.reversed)
    }

    /// Set the visit limit, which must be positive.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), RunError> {
        if limit == 0 {
            return Err(RunError::InvalidLimit);
        }
        self.limit = limit;
        Ok(())
    }
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(path: &Path) -> Result<BoxedRead, RunError> {
    let reader: BoxedRead = match path.to_str() {
        Some("-") => Box::new(::std::io::stdin()),
        _ => {
            let f = File::open(path).map_err(|e| RunError::InputNotFound(path.to_owned(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

pub fn load_graph(path: &Path) -> Result<Graph, RunError> {
    let graph = Graph::read(get_input_reader(path)?)?;
    info!(nodes = graph.len(), path = %path.display(), "loaded graph");
    Ok(graph)
}

/// Run one algorithm as configured, writing the report to the
/// configured output file.
pub fn run_search(config: &RunConfig, name: &str) -> Result<RunReport, RunError> {
    let algorithm = algorithm(name)?;
    let graph = load_graph(&config.input)?;
    debug!(algorithm = algorithm.name, ?config, "running search");

    let mut report = RunReport::new(
        &graph,
        algorithm.title,
        algorithm.insertion_order(config.reversed),
    );
    let outcome = algorithm.run(&graph, config.options(), &mut report)?;
    report.finish(&outcome);

    report
        .write_to_file(&config.output)
        .map_err(|e| RunError::OutputNotWritten(config.output.clone(), e))?;
    info!(path = %config.output.display(), "wrote report");
    Ok(report)
}

pub fn solver() -> Result<(), Error> {
    let matches = App::new("Graph Search")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Run search algorithms over weighted, directed graphs")
        .arg(
            Arg::with_name("algorithm")
                .value_name("ALGORITHM")
                .help("dfs, bfs, lcfs, bestfs, astar, ids or bnb; omit for the console")
                .required(false)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("graph")
                .value_name("GRAPH")
                .help("Graph file, or - for stdin")
                .required(false)
                .takes_value(true)
                .index(2),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("N")
                .help("Paths to examine before giving up")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reverse")
                .short("r")
                .long("reverse")
                .help("Insert neighbours in reverse order"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Where to write the run report")
                .takes_value(true),
        )
        .get_matches();

    let mut config = RunConfig::default();
    if let Some(path) = matches.value_of("graph") {
        config.input = PathBuf::from(path);
    }
    if let Some(path) = matches.value_of("output") {
        config.output = PathBuf::from(path);
    }
    if matches.is_present("limit") {
        config.set_limit(value_t!(matches, "limit", usize)?)?;
    }
    config.reversed = matches.is_present("reverse");

    match matches.value_of("algorithm") {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            console::Console::new(stdin.lock(), stdout.lock(), config).run()
        }
        Some(name) => {
            let report = run_search(&config, name)?;
            for line in report.result() {
                println!("{}", line);
            }
            match report.outcome() {
                Some(SearchOutcome::Solution(_)) => Ok(()),
                Some(_) => Err(anyhow!("The search ended without a solution")),
                None => Ok(()),
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Unknown algorithm {0:?}, expected one of: {1}")]
    UnknownAlgorithm(String, String),

    #[error("The visit limit must be a positive integer")]
    InvalidLimit,

    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf, #[source] io::Error),

    #[error("Unable to write report to {}", .0.display())]
    OutputNotWritten(PathBuf, #[source] io::Error),

    #[error(transparent)]
    Read(#[from] ReadGraphError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
