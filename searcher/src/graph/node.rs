use std::fmt;

use super::Decimal;

/// A named vertex in the search graph.
///
/// Neighbours keep their declared order, which is the default order in
/// which a search expands them. Several arcs toward the same neighbour are
/// allowed and kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    heuristic: f64,
    start: bool,
    goal: bool,
    neighbours: Vec<(String, f64)>,
}

impl Node {
    pub fn new<S: Into<String>>(name: S, heuristic: f64) -> Self {
        Self {
            name: name.into(),
            heuristic,
            start: false,
            goal: false,
            neighbours: Vec::new(),
        }
    }

    /// Mark this node as the starting node.
    pub fn start(mut self) -> Self {
        self.start = true;
        self
    }

    /// Mark this node as a goal.
    pub fn goal(mut self) -> Self {
        self.goal = true;
        self
    }

    /// Add an outgoing arc after all the existing ones.
    pub fn arc<S: Into<String>>(mut self, neighbour: S, length: f64) -> Self {
        self.neighbours.push((neighbour.into(), length));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    pub fn is_start(&self) -> bool {
        self.start
    }

    pub fn is_goal(&self) -> bool {
        self.goal
    }

    pub fn neighbours(&self) -> &[(String, f64)] {
        &self.neighbours
    }

    /// Length of the first declared arc toward `neighbour`.
    pub fn arc_length(&self, neighbour: &str) -> Option<f64> {
        self.neighbours
            .iter()
            .find(|(name, _)| name == neighbour)
            .map(|(_, length)| *length)
    }
}

/// Prints the node in the same line format the loader reads.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, Decimal(self.heuristic))?;
        if self.start {
            write!(f, " S")?;
        } else if self.goal {
            write!(f, " G")?;
        }
        write!(f, " :")?;

        if self.neighbours.is_empty() {
            return write!(f, " none");
        }
        for (name, length) in &self.neighbours {
            write!(f, " {} {}", name, Decimal(*length))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let node = Node::new("S", 24.0)
            .start()
            .arc("A", 3.0)
            .arc("B", 9.5)
            .arc("C", 4.0);
        assert_eq!(node.to_string(), "S 24 S : A 3 B 9.5 C 4");

        let node = Node::new("G", 0.0).goal();
        assert_eq!(node.to_string(), "G 0 G : none");
    }

    #[test]
    fn duplicate_arcs() {
        let node = Node::new("A", 1.0).arc("B", 2.0).arc("B", 7.0);
        assert_eq!(node.neighbours().len(), 2);
        assert_eq!(node.arc_length("B"), Some(2.0));
        assert_eq!(node.arc_length("C"), None);
    }
}
