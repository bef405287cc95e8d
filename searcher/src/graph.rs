//! Graph and path datastructures.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};

use crate::errors::{GraphError, GraphResult};

mod decimal;
mod node;
mod parse;
mod path;

pub use decimal::Decimal;
pub use node::Node;
pub use path::{Path, PathWithInfo};

/// An immutable, directed, weighted graph.
///
/// Nodes keep the order in which they were declared, and can be
/// looked up by name.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl Graph {
    /// Build a graph, rejecting nodes which share a name.
    pub fn new(nodes: Vec<Node>) -> GraphResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.name().to_string(), i).is_some() {
                return Err(GraphError::DuplicateNode(node.name().to_string()));
            }
        }
        Ok(Self { nodes, index })
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node(&self, name: &str) -> GraphResult<&Node> {
        self.index
            .get(name)
            .map(|&i| &self.nodes[i])
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// The single node flagged as the start.
    pub fn starting_node(&self) -> GraphResult<&Node> {
        let mut starts = self.nodes.iter().filter(|n| n.is_start());
        let first = starts.next().ok_or(GraphError::NoStartingNode)?;
        if let Some(second) = starts.next() {
            return Err(GraphError::AmbiguousStartingNode(
                first.name().to_string(),
                second.name().to_string(),
            ));
        }
        Ok(first)
    }

    /// Length of the arc `from -> to`.
    ///
    /// When several arcs connect the same pair, the first declared one wins.
    pub fn arc_length(&self, from: &str, to: &str) -> GraphResult<f64> {
        self.node(from)?
            .arc_length(to)
            .ok_or_else(|| GraphError::NoSuchArc(from.to_string(), to.to_string()))
    }

    pub fn path_length(&self, path: &Path) -> GraphResult<f64> {
        // An empty f64 sum is -0.0, so start from positive zero.
        path.arcs().try_fold(0.0, |total, (from, to)| -> GraphResult<f64> {
            Ok(total + self.arc_length(from, to)?)
        })
    }

    pub fn path_with_info(&self, path: Path) -> GraphResult<PathWithInfo> {
        let total_length = self.path_length(&path)?;
        let heuristic = self.node(path.destination())?.heuristic();
        Ok(PathWithInfo::new(path, total_length, heuristic))
    }

    /// Write the graph out in the line format the loader reads.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)
    }

    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, filename: P) -> io::Result<()> {
        self.write_to(File::create(filename)?)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}", node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn graph() -> Graph {
        Graph::new(vec![
            Node::new("S", 3.0).start().arc("A", 1.0).arc("B", 4.0),
            Node::new("A", 2.0).arc("B", 2.0).arc("B", 9.0),
            Node::new("B", 0.0).goal(),
        ])
        .unwrap()
    }

    #[test]
    fn lookup() {
        let g = graph();
        assert_eq!(g.len(), 3);
        assert_eq!(g.node("A").unwrap().heuristic(), 2.0);
        assert_eq!(
            g.node("Z").unwrap_err(),
            GraphError::UnknownNode("Z".into())
        );
        assert_eq!(g.starting_node().unwrap().name(), "S");
    }

    #[test]
    fn arcs() {
        let g = graph();
        assert_eq!(g.arc_length("S", "B").unwrap(), 4.0);
        assert_eq!(g.arc_length("A", "B").unwrap(), 2.0);
        assert_eq!(
            g.arc_length("B", "S").unwrap_err(),
            GraphError::NoSuchArc("B".into(), "S".into())
        );
    }

    #[test]
    fn path_length() {
        let g = graph();
        let path = Path::new("S").append_node("A").append_node("B");
        assert_eq!(g.path_length(&path).unwrap(), 3.0);

        let info = g.path_with_info(path).unwrap();
        assert_eq!(info.total_length(), 3.0);
        assert_eq!(info.num_arcs(), 2);
        assert_eq!(info.heuristic(), 0.0);

        let broken = Path::new("S").append_node("B").append_node("A");
        assert_eq!(
            g.path_length(&broken).unwrap_err(),
            GraphError::NoSuchArc("B".into(), "A".into())
        );
    }

    #[test]
    fn single_node_path() {
        let g = graph();
        let info = g.path_with_info(Path::new("S")).unwrap();
        assert!(info.total_length().is_sign_positive());
        assert_eq!(
            info.to_string(),
            "S (length 0, arcs 0, heuristic 3, f 3)"
        );
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("graph.txt");
        let g = graph();
        g.write_to_file(&target).unwrap();

        let written = std::fs::read_to_string(&target).unwrap();
        assert_eq!(written, g.to_string());
        let reloaded: Graph = written.parse().unwrap();
        assert_eq!(reloaded.to_string(), written);
    }

    #[test]
    fn starting_node_errors() {
        let none = Graph::new(vec![Node::new("A", 0.0)]).unwrap();
        assert_eq!(none.starting_node().unwrap_err(), GraphError::NoStartingNode);

        let two = Graph::new(vec![
            Node::new("A", 0.0).start(),
            Node::new("B", 0.0).start(),
        ])
        .unwrap();
        assert_eq!(
            two.starting_node().unwrap_err(),
            GraphError::AmbiguousStartingNode("A".into(), "B".into())
        );
    }

    #[test]
    fn duplicate_names() {
        let err = Graph::new(vec![Node::new("A", 0.0), Node::new("A", 1.0)]).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode("A".into()));
    }

    #[test]
    fn display() {
        let g = graph();
        assert_eq!(
            g.to_string(),
            "S 3 S : A 1 B 4\nA 2 : B 2 B 9\nB 0 G : none\n"
        );
    }
}
