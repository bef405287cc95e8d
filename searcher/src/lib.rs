//! Generalized search algorithms over weighted, directed graphs.
//!
//! Every strategy explores partial paths from the graph's starting node
//! toward any goal node, and they differ only in how the frontier of
//! unexplored paths is ordered and pruned:
//!
//! - [dfs] and [bfs] use a stack and a queue,
//! - [lowest_cost_first], [best_first] and [astar] use priority queues,
//! - [iterative_deepening] and [branch_and_bound] wrap a stack with a
//!   depth bound or a pruning bound.
//!
//! Each returns a [SearchOutcome]. Progress can be followed by passing
//! a [SearchObserver]; use [NoObserver] when nothing is listening.

pub mod algorithm;
mod errors;
pub mod graph;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::{GraphError, GraphResult, ParseError, ReadGraphError, SearchError};
pub use graph::{Decimal, Graph, Node, Path, PathWithInfo};
pub use traits::{NoObserver, SearchObserver};

pub use algorithm::basic::{bfs, dfs};
pub use algorithm::bound::branch_and_bound;
pub use algorithm::deepening::iterative_deepening;
pub use algorithm::priority::{astar, best_first, lowest_cost_first};
pub use algorithm::{InsertionOrder, SearchOptions, SearchOutcome};
