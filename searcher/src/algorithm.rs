//! Provides the building blocks for search algorithms
//!
//! Every strategy runs the same expansion loop in [SearchAlgorithm]. They
//! differ only in the [SearchQueue] which orders the frontier and the
//! [ExpansionPolicy] which decides what happens to each removed path.

use std::fmt;

use tracing::{debug, trace};

use crate::errors::{GraphResult, Result, SearchError};
use crate::graph::{Graph, Node, Path, PathWithInfo};
use crate::traits::SearchObserver;

pub mod basic;
pub mod bound;
pub mod deepening;
pub mod priority;

/// Trait used to implement frontiers of partial paths
/// which should be checked for completion.
pub trait SearchQueue {
    fn pop(&mut self) -> Option<PathWithInfo>;

    fn push(&mut self, item: PathWithInfo);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Order in which the neighbours of an expanded node are pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionOrder {
    /// As declared in the graph.
    Ordinary,
    /// Last declared neighbour first.
    Reversed,
    /// Largest f-value first, so a stack pops the smallest next.
    DescendingF,
}

impl InsertionOrder {
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            InsertionOrder::Reversed
        } else {
            InsertionOrder::Ordinary
        }
    }
}

impl fmt::Display for InsertionOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InsertionOrder::Ordinary => write!(f, "ordinary"),
            InsertionOrder::Reversed => write!(f, "reversed"),
            InsertionOrder::DescendingF => write!(f, "descending f-value"),
        }
    }
}

/// Settings shared by every search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// How many paths may be examined before the search
    /// is declared stuck in a cycle.
    pub limit: usize,

    /// Push neighbours in reverse declaration order.
    pub reversed: bool,
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 1000,
            reversed: false,
        }
    }
}

/// How a search ended, when the graph itself was sound.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A goal was reached along this path.
    Solution(PathWithInfo),

    /// The visit limit was reached after examining this many paths.
    CycleDetected(usize),

    /// The frontier ran dry after examining this many paths.
    NoSolution(usize),
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&PathWithInfo> {
        match self {
            SearchOutcome::Solution(path) => Some(path),
            _ => None,
        }
    }

    /// Treat the two unsuccessful outcomes as errors.
    pub fn into_result(self) -> Result<PathWithInfo> {
        match self {
            SearchOutcome::Solution(path) => Ok(path),
            SearchOutcome::CycleDetected(n) => Err(SearchError::StepLimitExhausted(n)),
            SearchOutcome::NoSolution(_) => Err(SearchError::NoResultFound),
        }
    }
}

/// What to do with a path which was just removed from the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Stop, this path is the answer.
    Solution,
    /// Drop the path without expanding it.
    Discard,
    /// Push the path's children.
    Expand,
}

/// Decides the fate of each examined path.
pub trait ExpansionPolicy {
    fn classify<O: SearchObserver>(
        &mut self,
        path: &PathWithInfo,
        node: &Node,
        observer: &mut O,
    ) -> Verdict;
}

/// Stops at the first goal and expands everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct Plain;

impl ExpansionPolicy for Plain {
    fn classify<O: SearchObserver>(
        &mut self,
        _path: &PathWithInfo,
        node: &Node,
        _observer: &mut O,
    ) -> Verdict {
        if node.is_goal() {
            Verdict::Solution
        } else {
            Verdict::Expand
        }
    }
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn exhausted(&self) -> bool {
        self.current >= self.maximum
    }

    fn increment(&mut self) -> usize {
        self.current += 1;
        self.current
    }
}

/// Result of running the expansion loop until it stops.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Termination {
    Goal(PathWithInfo),
    LimitReached,
    Exhausted,
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic expansion policy (P) to provide
/// a single foundation for multiple search algorithms. Events are
/// reported to the observer (O).
#[derive(Debug)]
pub struct SearchAlgorithm<'g, Q, P, O>
where
    Q: SearchQueue,
    P: ExpansionPolicy,
    O: SearchObserver,
{
    graph: &'g Graph,
    queue: Q,
    policy: P,
    observer: O,
    order: InsertionOrder,
    counter: StepLimit,
    inserted: usize,
}

impl<'g, Q, P, O> SearchAlgorithm<'g, Q, P, O>
where
    Q: SearchQueue,
    P: ExpansionPolicy,
    O: SearchObserver,
{
    pub fn new(graph: &'g Graph, queue: Q, policy: P, observer: O) -> Self {
        let options = SearchOptions::default();
        Self {
            graph,
            queue,
            policy,
            observer,
            order: InsertionOrder::from_reversed(options.reversed),
            counter: StepLimit::new(options.limit),
            inserted: 0,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.order = InsertionOrder::from_reversed(options.reversed);
        self.counter = StepLimit::new(options.limit);
        self
    }

    pub fn with_order(mut self, order: InsertionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn examined(&self) -> usize {
        self.counter.current
    }

    pub fn inserted(&self) -> usize {
        self.inserted
    }

    pub(crate) fn policy(&self) -> &P {
        &self.policy
    }

    pub(crate) fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    pub(crate) fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn insert(&mut self, path: PathWithInfo) {
        self.inserted += 1;
        trace!(rank = self.inserted, path = %path, "insert");
        self.observer.on_insert(&path, self.inserted);
        self.queue.push(path);
    }

    /// Put the singleton path at the starting node on the frontier.
    pub(crate) fn seed(&mut self) -> GraphResult<()> {
        let start = self.graph.starting_node()?;
        let path = self.graph.path_with_info(Path::new(start.name()))?;
        self.insert(path);
        Ok(())
    }

    fn children(&self, path: &PathWithInfo, node: &Node) -> GraphResult<Vec<PathWithInfo>> {
        let extend = |(name, _): &(String, f64)| {
            self.graph
                .path_with_info(path.path().append_node(name.as_str()))
        };

        let neighbours = node.neighbours().iter();
        let mut children = match self.order {
            InsertionOrder::Reversed => neighbours.rev().map(extend).collect::<GraphResult<Vec<_>>>()?,
            _ => neighbours.map(extend).collect::<GraphResult<Vec<_>>>()?,
        };

        if self.order == InsertionOrder::DescendingF {
            children.sort_by(|a, b| b.f_value().total_cmp(&a.f_value()));
        }
        Ok(children)
    }

    /// Run the expansion loop until a goal is accepted, the visit
    /// limit is hit, or the frontier runs dry.
    pub(crate) fn run(&mut self) -> GraphResult<Termination> {
        loop {
            if self.counter.exhausted() {
                debug!(examined = self.counter.current, "visit limit reached");
                return Ok(Termination::LimitReached);
            }

            let path = match self.queue.pop() {
                Some(path) => path,
                None => {
                    debug!(examined = self.counter.current, "frontier exhausted");
                    return Ok(Termination::Exhausted);
                }
            };

            let rank = self.counter.increment();
            trace!(rank, path = %path, "remove");
            self.observer.on_remove(&path, rank);

            let graph = self.graph;
            let node = graph.node(path.destination())?;
            match self.policy.classify(&path, node, &mut self.observer) {
                Verdict::Solution => {
                    debug!(path = %path, examined = rank, "goal found");
                    self.observer.on_goal_found(&path);
                    return Ok(Termination::Goal(path));
                }
                Verdict::Discard => continue,
                Verdict::Expand => {}
            }

            for child in self.children(&path, node)? {
                self.insert(child);
            }
        }
    }

    /// Seed the frontier and search until the loop terminates.
    pub fn search(mut self) -> GraphResult<SearchOutcome> {
        self.seed()?;
        Ok(match self.run()? {
            Termination::Goal(path) => SearchOutcome::Solution(path),
            Termination::LimitReached => SearchOutcome::CycleDetected(self.examined()),
            Termination::Exhausted => SearchOutcome::NoSolution(self.examined()),
        })
    }
}
