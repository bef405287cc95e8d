//! Iterative deepening: repeated depth-first searches with a growing
//! bound on path length.

use tracing::debug;

use crate::algorithm::basic::DepthQueue;
use crate::algorithm::{
    ExpansionPolicy, SearchAlgorithm, SearchOptions, SearchOutcome, Termination, Verdict,
};
use crate::errors::GraphResult;
use crate::graph::{Graph, Node, PathWithInfo};
use crate::traits::SearchObserver;

/// Only expands paths shorter than the current depth bound, and
/// remembers whether anything was cut off by it.
#[derive(Debug, Default)]
pub struct DepthBound {
    depth: usize,
    too_deep_skipped: bool,
}

impl DepthBound {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            too_deep_skipped: false,
        }
    }
}

impl ExpansionPolicy for DepthBound {
    fn classify<O: SearchObserver>(
        &mut self,
        path: &PathWithInfo,
        node: &Node,
        _observer: &mut O,
    ) -> Verdict {
        if node.is_goal() {
            return Verdict::Solution;
        }
        if path.num_arcs() < self.depth {
            return Verdict::Expand;
        }
        if !node.neighbours().is_empty() {
            self.too_deep_skipped = true;
        }
        Verdict::Discard
    }
}

/// How a single depth-bounded pass ended.
#[derive(Debug, Clone, PartialEq)]
enum Pass {
    GoalFound(PathWithInfo),
    CycleHit,
    /// The frontier emptied; carries whether the bound cut anything off.
    DepthExhausted(bool),
}

type Deepener<'g, O> = SearchAlgorithm<'g, DepthQueue, DepthBound, O>;

fn pass<O>(search: &mut Deepener<O>, depth: usize) -> GraphResult<Pass>
where
    O: SearchObserver,
{
    debug!(depth, "deepening");
    *search.policy_mut() = DepthBound::new(depth);
    search.observer_mut().on_depth_increased(depth);
    search.seed()?;

    Ok(match search.run()? {
        Termination::Goal(path) => Pass::GoalFound(path),
        Termination::LimitReached => Pass::CycleHit,
        Termination::Exhausted => Pass::DepthExhausted(search.policy().too_deep_skipped),
    })
}

/// Iterative deepening search.
///
/// Runs depth-first passes with a depth bound of 1, 2, 3, ... until a goal
/// is found, or until a pass finishes without the bound cutting anything
/// off. The visit limit counts examined paths across all passes.
pub fn iterative_deepening<O>(
    graph: &Graph,
    options: SearchOptions,
    observer: O,
) -> GraphResult<SearchOutcome>
where
    O: SearchObserver,
{
    let mut search = SearchAlgorithm::new(graph, DepthQueue::default(), DepthBound::default(), observer)
        .with_options(options);

    let mut depth = 0;
    loop {
        depth += 1;
        match pass(&mut search, depth)? {
            Pass::GoalFound(path) => return Ok(SearchOutcome::Solution(path)),
            Pass::CycleHit => return Ok(SearchOutcome::CycleDetected(search.examined())),
            Pass::DepthExhausted(true) => continue,
            Pass::DepthExhausted(false) => {
                return Ok(SearchOutcome::NoSolution(search.examined()))
            }
        }
    }
}
