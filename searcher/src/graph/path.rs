use std::fmt;

use super::Decimal;

/// A walk through the graph, as the sequence of node names visited.
///
/// Paths are values: extending one produces a fresh path and leaves
/// the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<String>,
}

impl Path {
    pub fn new<S: Into<String>>(origin: S) -> Self {
        Self {
            nodes: vec![origin.into()],
        }
    }

    /// Number of arcs travelled.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// True when the path is still sitting on its origin.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn append_node<S: Into<String>>(&self, node: S) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend(self.nodes.iter().cloned());
        nodes.push(node.into());
        Self { nodes }
    }

    pub fn origin(&self) -> &str {
        &self.nodes[0]
    }

    pub fn destination(&self) -> &str {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Consecutive (from, to) pairs along the path.
    pub fn arcs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// The node names joined into one short token, e.g. `S-A-G`.
    pub fn compact(&self) -> String {
        self.nodes.join("-")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.compact())
    }
}

/// A path along with the metrics the frontiers rank it by.
#[derive(Debug, Clone, PartialEq)]
pub struct PathWithInfo {
    path: Path,
    total_length: f64,
    heuristic: f64,
}

impl PathWithInfo {
    pub(crate) fn new(path: Path, total_length: f64, heuristic: f64) -> Self {
        Self {
            path,
            total_length,
            heuristic,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn destination(&self) -> &str {
        self.path.destination()
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn num_arcs(&self) -> usize {
        self.path.len()
    }

    /// Heuristic of the final node on the path.
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    pub fn f_value(&self) -> f64 {
        self.total_length + self.heuristic
    }
}

impl fmt::Display for PathWithInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (length {}, arcs {}, heuristic {}, f {})",
            self.path,
            Decimal(self.total_length),
            self.num_arcs(),
            Decimal(self.heuristic),
            Decimal(self.f_value())
        )
    }
}
