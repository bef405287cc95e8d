//! Frontiers which always hand out the path with the smallest key.
//!
//! The three priority disciplines share [PriorityQueue] and differ only in
//! the [Ranking] used to key each path. Paths with equal keys leave the
//! queue in the order they entered it.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::algorithm::{Plain, SearchAlgorithm, SearchOptions, SearchOutcome, SearchQueue};
use crate::errors::GraphResult;
use crate::graph::{Graph, PathWithInfo};
use crate::traits::SearchObserver;

/// Picks the number a priority frontier orders paths by.
pub trait Ranking: Debug {
    fn key(path: &PathWithInfo) -> f64;
}

/// Cost so far, for lowest-cost-first search.
#[derive(Debug)]
pub struct ByCost;

impl Ranking for ByCost {
    fn key(path: &PathWithInfo) -> f64 {
        path.total_length()
    }
}

/// Heuristic of the final node, for greedy best-first search.
#[derive(Debug)]
pub struct ByHeuristic;

impl Ranking for ByHeuristic {
    fn key(path: &PathWithInfo) -> f64 {
        path.heuristic()
    }
}

/// Cost so far plus heuristic, for A*.
#[derive(Debug)]
pub struct ByFValue;

impl Ranking for ByFValue {
    fn key(path: &PathWithInfo) -> f64 {
        path.f_value()
    }
}

/// Wrapper for paths which sorts appropriately for a min-heap.
#[derive(Debug)]
struct Ranked {
    key: f64,
    sequence: usize,
    path: PathWithInfo,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always hands out the path with the
/// smallest key under `R`.
#[derive(Debug)]
pub struct PriorityQueue<R>
where
    R: Ranking,
{
    queue: BinaryHeap<Ranked>,
    sequence: usize,
    ranking: PhantomData<R>,
}

impl<R> Default for PriorityQueue<R>
where
    R: Ranking,
{
    fn default() -> Self {
        PriorityQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
            ranking: PhantomData,
        }
    }
}

impl<R> SearchQueue for PriorityQueue<R>
where
    R: Ranking,
{
    fn pop(&mut self) -> Option<PathWithInfo> {
        self.queue.pop().map(|r| r.path)
    }

    fn push(&mut self, item: PathWithInfo) {
        self.sequence += 1;
        self.queue.push(Ranked {
            key: R::key(&item),
            sequence: self.sequence,
            path: item,
        });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type LowestCostQueue = PriorityQueue<ByCost>;
pub type BestFirstQueue = PriorityQueue<ByHeuristic>;
pub type AStarQueue = PriorityQueue<ByFValue>;

/// Lowest-cost-first search: always examine the cheapest path so far.
///
/// The first goal found is the cheapest reachable one, provided no arc
/// has a negative length.
pub fn lowest_cost_first<O>(
    graph: &Graph,
    options: SearchOptions,
    observer: O,
) -> GraphResult<SearchOutcome>
where
    O: SearchObserver,
{
    SearchAlgorithm::new(graph, LowestCostQueue::default(), Plain, observer)
        .with_options(options)
        .search()
}

/// Greedy best-first search: always examine the path whose final node
/// looks closest to a goal, ignoring the cost so far.
pub fn best_first<O>(graph: &Graph, options: SearchOptions, observer: O) -> GraphResult<SearchOutcome>
where
    O: SearchObserver,
{
    SearchAlgorithm::new(graph, BestFirstQueue::default(), Plain, observer)
        .with_options(options)
        .search()
}

/// A* search, ordering by cost so far plus heuristic.
pub fn astar<O>(graph: &Graph, options: SearchOptions, observer: O) -> GraphResult<SearchOutcome>
where
    O: SearchObserver,
{
    SearchAlgorithm::new(graph, AStarQueue::default(), Plain, observer)
        .with_options(options)
        .search()
}
