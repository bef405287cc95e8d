//! A human readable record of a single search run.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use searcher::{Decimal, Graph, InsertionOrder, PathWithInfo, SearchObserver, SearchOutcome};

fn header(title: &str) -> Vec<String> {
    vec![title.to_string(), "-".repeat(title.len())]
}

/// Collects the frontier traffic of a search, and renders it along with
/// the graph and the result once the search is over.
#[derive(Debug)]
pub struct RunReport {
    graph: Vec<String>,
    algorithm: String,
    order: InsertionOrder,
    visited: Vec<String>,
    frontier: Vec<String>,
    inserted: usize,
    examined: usize,
    outcome: Option<SearchOutcome>,
}

impl RunReport {
    pub fn new<S: Into<String>>(graph: &Graph, algorithm: S, order: InsertionOrder) -> Self {
        Self {
            graph: graph.nodes().map(|n| n.to_string()).collect(),
            algorithm: algorithm.into(),
            order,
            visited: Vec::new(),
            frontier: Vec::new(),
            inserted: 0,
            examined: 0,
            outcome: None,
        }
    }

    pub fn finish(&mut self, outcome: &SearchOutcome) {
        self.outcome = Some(outcome.clone());
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    pub fn inserted(&self) -> usize {
        self.inserted
    }

    pub fn examined(&self) -> usize {
        self.examined
    }

    /// Lines of the RESULT section, empty until the search has finished.
    pub fn result(&self) -> Vec<String> {
        match &self.outcome {
            None => Vec::new(),
            Some(SearchOutcome::CycleDetected(n)) => vec![format!(
                "Algorithm appears to be stuck in a cycle after {} paths have been examined.",
                n
            )],
            Some(SearchOutcome::NoSolution(n)) => vec![format!(
                "No solution path has been found after {} paths have been examined.",
                n
            )],
            Some(SearchOutcome::Solution(path)) => vec![
                format!("Solution path: {}", path.path().compact()),
                format!(
                    "Total length of solution path: {}",
                    Decimal(path.total_length())
                ),
                format!("# of arcs in solution path: {}", path.num_arcs()),
                format!("# of paths inserted to frontier: {}", self.inserted),
                format!(
                    "# of paths removed from frontier and examined: {}",
                    self.examined
                ),
                format!(
                    "# of paths remaining on frontier after solution is found: {}",
                    self.inserted.saturating_sub(self.examined)
                ),
            ],
        }
    }

    fn sections(&self) -> Vec<Vec<String>> {
        let mut graph = header("GRAPH:");
        graph.extend(self.graph.iter().cloned());

        let mut algorithm = header("ALGORITHM:");
        algorithm.push(format!("Algorithm: {}", self.algorithm));
        algorithm.push(format!("Neighbour insertion: {}", self.order));

        let mut visited = header("NODES VISITED:");
        visited.push(self.visited.join(", "));

        let mut frontier = header("FRONTIER:");
        frontier.extend(self.frontier.iter().cloned());

        let mut result = header("RESULT:");
        result.extend(self.result());

        vec![graph, algorithm, visited, frontier, result]
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, filename: P) -> io::Result<()> {
        let filename = filename.as_ref();
        if let Some(dir) = filename.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        self.write_to(BufWriter::new(File::create(filename)?))
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, section) in self.sections().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for line in section {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl SearchObserver for RunReport {
    fn on_insert(&mut self, path: &PathWithInfo, rank: usize) {
        self.inserted = rank;
        self.frontier.push(format!("+   insert {}: {}", rank, path));
    }

    fn on_remove(&mut self, path: &PathWithInfo, rank: usize) {
        self.examined = rank;
        self.visited.push(path.destination().to_string());
        self.frontier.push(format!("  - remove {}: {}", rank, path));
    }

    fn on_depth_increased(&mut self, depth: usize) {
        self.frontier
            .push(format!("*   depth limit increased to {}", depth));
    }

    fn on_better_solution_found(&mut self, path: &PathWithInfo) {
        self.frontier
            .push(format!("*   better solution found: {}", path));
    }

    fn on_path_ignored(&mut self, path: &PathWithInfo) {
        self.frontier.push(format!("x   ignored: {}", path));
    }
}
