//! Reading graphs from their line-oriented text form.
//!
//! Each non-blank line declares one node:
//!
//! ```text
//! <name> <heuristic> [S|G] : <neighbour> <distance> <neighbour> <distance> ...
//! ```
//!
//! A node without outgoing arcs lists `none` after the colon.

use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::{Graph, Node};
use crate::errors::{ParseError, ReadGraphError};

type ParseResult<T> = std::result::Result<T, ParseError>;

fn number(lineno: usize, s: &str) -> ParseResult<f64> {
    s.parse()
        .map_err(|_| ParseError::InvalidNumber(lineno, s.to_string()))
}

/// Parse a single node line. `lineno` is only used for error messages.
pub(crate) fn parse_node(lineno: usize, line: &str) -> ParseResult<Node> {
    lazy_static! {
        static ref RE: Regex = Regex::new(
            r"^(?P<name>[^\s:]+)\s+(?P<heuristic>[^\s:]+)(?:\s+(?P<marker>[^\s:]+))?\s+:\s+(?P<neighbours>\S.*)$"
        )
        .unwrap();
    };

    let line = line.trim();
    let cap = match RE.captures(line) {
        None => return Err(ParseError::InvalidLine(lineno, line.to_string())),
        Some(c) => c,
    };

    let mut node = Node::new(&cap["name"], number(lineno, &cap["heuristic"])?);
    node = match cap.name("marker").map(|m| m.as_str()) {
        None => node,
        Some("S") => node.start(),
        Some("G") => node.goal(),
        Some(other) => return Err(ParseError::InvalidMarker(lineno, other.to_string())),
    };

    let neighbours = cap["neighbours"].trim();
    if neighbours == "none" {
        return Ok(node);
    }

    let mut tokens = neighbours.split_whitespace();
    while let Some(name) = tokens.next() {
        let distance = tokens
            .next()
            .ok_or_else(|| ParseError::MissingDistance(lineno, name.to_string()))?;
        node = node.arc(name, number(lineno, distance)?);
    }
    Ok(node)
}

impl FromStr for Node {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_node(1, s)
    }
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nodes = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| parse_node(i + 1, line))
            .collect::<ParseResult<Vec<Node>>>()?;
        Ok(Graph::new(nodes)?)
    }
}

impl Graph {
    /// Load a graph from any reader, e.g. a file or stdin.
    pub fn read<R: Read>(reader: R) -> Result<Self, ReadGraphError> {
        let mut nodes = Vec::new();
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            nodes.push(parse_node(i + 1, &line)?);
        }
        Ok(Graph::new(nodes).map_err(ParseError::from)?)
    }
}
