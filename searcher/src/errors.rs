use thiserror::Error;

/// Integrity failures raised by graph lookups.
///
/// These abort the current search immediately.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("No arc from {0} to {1}")]
    NoSuchArc(String, String),

    #[error("No starting node found in the graph")]
    NoStartingNode,

    #[error("Multiple starting nodes found: {0} and {1}")]
    AmbiguousStartingNode(String, String),

    #[error("Node {0} is declared more than once")]
    DuplicateNode(String),
}

/// Error produced when a line of graph text can't be understood.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Line {0}: expected `<name> <heuristic> [S|G] : <neighbours>`, got {1:?}")]
    InvalidLine(usize, String),

    #[error("Line {0}: invalid number {1:?}")]
    InvalidNumber(usize, String),

    #[error("Line {0}: unknown node marker {1:?}, expected S or G")]
    InvalidMarker(usize, String),

    #[error("Line {0}: neighbour {1} has no distance")]
    MissingDistance(usize, String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Error produced when loading a graph from a reader.
#[derive(Debug, Error)]
pub enum ReadGraphError {
    #[error("Unable to read graph: {0}")]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error produced when a search fails.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No solution path found")]
    NoResultFound,

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result when a graph lookup might fail.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
