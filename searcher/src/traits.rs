use crate::graph::PathWithInfo;

/// Receives notifications as a search runs.
///
/// Every method has an empty default, so an observer only implements
/// the events it cares about. Observers see borrowed views of the
/// search and can't influence its outcome.
pub trait SearchObserver {
    /// A path was pushed onto the frontier; `rank` counts insertions so far.
    fn on_insert(&mut self, _path: &PathWithInfo, _rank: usize) {}

    /// A path was taken off the frontier; `rank` counts examined paths so far.
    fn on_remove(&mut self, _path: &PathWithInfo, _rank: usize) {}

    fn on_goal_found(&mut self, _path: &PathWithInfo) {}

    /// Iterative deepening raised its depth bound.
    fn on_depth_increased(&mut self, _depth: usize) {}

    /// Branch and bound recorded a new best solution.
    fn on_better_solution_found(&mut self, _path: &PathWithInfo) {}

    /// Branch and bound pruned a path which can't beat the best solution.
    fn on_path_ignored(&mut self, _path: &PathWithInfo) {}
}

/// An observer which ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl SearchObserver for NoObserver {}

impl<O> SearchObserver for &mut O
where
    O: SearchObserver + ?Sized,
{
    fn on_insert(&mut self, path: &PathWithInfo, rank: usize) {
        (**self).on_insert(path, rank)
    }

    fn on_remove(&mut self, path: &PathWithInfo, rank: usize) {
        (**self).on_remove(path, rank)
    }

    fn on_goal_found(&mut self, path: &PathWithInfo) {
        (**self).on_goal_found(path)
    }

    fn on_depth_increased(&mut self, depth: usize) {
        (**self).on_depth_increased(depth)
    }

    fn on_better_solution_found(&mut self, path: &PathWithInfo) {
        (**self).on_better_solution_found(path)
    }

    fn on_path_ignored(&mut self, path: &PathWithInfo) {
        (**self).on_path_ignored(path)
    }
}
