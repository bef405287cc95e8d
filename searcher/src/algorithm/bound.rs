//! Depth-first branch and bound.

use tracing::debug;

use crate::algorithm::basic::DepthQueue;
use crate::algorithm::{
    ExpansionPolicy, InsertionOrder, SearchAlgorithm, SearchOptions, SearchOutcome, Termination,
    Verdict,
};
use crate::errors::GraphResult;
use crate::graph::{Graph, Node, PathWithInfo};
use crate::traits::SearchObserver;

/// Keeps the best solution seen so far and prunes any path whose
/// f-value can't beat it.
#[derive(Debug, Default)]
pub struct Pruning {
    best: Option<PathWithInfo>,
}

impl Pruning {
    /// Length of the best solution so far, infinite until one is found.
    pub fn best_length(&self) -> f64 {
        self.best
            .as_ref()
            .map(|p| p.total_length())
            .unwrap_or(f64::INFINITY)
    }

    pub fn best(&self) -> Option<&PathWithInfo> {
        self.best.as_ref()
    }
}

impl ExpansionPolicy for Pruning {
    fn classify<O: SearchObserver>(
        &mut self,
        path: &PathWithInfo,
        node: &Node,
        observer: &mut O,
    ) -> Verdict {
        if path.f_value() >= self.best_length() {
            observer.on_path_ignored(path);
            return Verdict::Discard;
        }

        if node.is_goal() {
            debug!(path = %path, "better solution");
            observer.on_better_solution_found(path);
            self.best = Some(path.clone());
            return Verdict::Discard;
        }

        Verdict::Expand
    }
}

/// Branch and bound over a depth-first frontier.
///
/// Children are pushed largest f-value first, so the most promising
/// sibling is examined next. Reaching a goal doesn't stop the search:
/// it tightens the bound, and the search carries on until the frontier
/// is empty. Each improvement is reported as a better solution, and the
/// final best once more as the goal. The reverse flag in `options` has
/// no effect here.
pub fn branch_and_bound<O>(
    graph: &Graph,
    options: SearchOptions,
    observer: O,
) -> GraphResult<SearchOutcome>
where
    O: SearchObserver,
{
    let mut search = SearchAlgorithm::new(graph, DepthQueue::default(), Pruning::default(), observer)
        .with_options(options)
        .with_order(InsertionOrder::DescendingF);

    search.seed()?;
    Ok(match search.run()? {
        Termination::LimitReached => SearchOutcome::CycleDetected(search.examined()),
        Termination::Exhausted | Termination::Goal(_) => {
            let best = search.policy().best().cloned();
            match best {
                Some(best) => {
                    debug!(path = %best, examined = search.examined(), "best solution");
                    search.observer_mut().on_goal_found(&best);
                    SearchOutcome::Solution(best)
                }
                None => SearchOutcome::NoSolution(search.examined()),
            }
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::test::{assert_valid, example, single_arc, two_cycle, Recorder};
    use crate::traits::NoObserver;

    fn events(recorder: &Recorder, kind: &str) -> Vec<String> {
        let prefix = format!("{} ", kind);
        recorder
            .events
            .iter()
            .filter(|e| e.starts_with(&prefix))
            .map(|e| e[prefix.len()..].to_string())
            .collect()
    }

    #[test]
    fn single_arc_graph() {
        let graph = single_arc();
        let outcome = branch_and_bound(&graph, SearchOptions::default(), NoObserver).unwrap();
        let solution = outcome.solution().unwrap();
        assert_eq!(solution.path().compact(), "S-A");
        assert_eq!(solution.total_length(), 1.0);
    }

    #[test]
    fn example_graph() {
        let graph = example();
        let mut recorder = Recorder::default();
        let outcome = branch_and_bound(&graph, SearchOptions::default(), &mut recorder).unwrap();
        let solution = outcome.solution().unwrap();
        assert_valid(&graph, solution);
        assert_eq!(solution.path().compact(), "S-C-D-G1");
        assert_eq!(solution.total_length(), 13.0);

        assert_eq!(
            recorder.removed(),
            vec!["S", "S-C", "S-C-D", "S-C-D-G1", "S-C-D-G2", "S-C-G1", "S-A", "S-B"]
        );
        assert_eq!(events(&recorder, "better"), vec!["S-C-D-G1"]);
        assert_eq!(
            events(&recorder, "ignored"),
            vec!["S-C-D-G2", "S-C-G1", "S-A", "S-B"]
        );
    }

    #[test]
    fn bound_tightens() {
        let graph = Graph::new(vec![
            Node::new("S", 0.0).start().arc("A", 1.0).arc("B", 2.0),
            Node::new("A", 0.0).arc("G1", 10.0),
            Node::new("B", 0.0).arc("G2", 1.0),
            Node::new("G1", 0.0).goal(),
            Node::new("G2", 0.0).goal(),
        ])
        .unwrap();
        let mut recorder = Recorder::default();
        let outcome = branch_and_bound(&graph, SearchOptions::default(), &mut recorder).unwrap();
        let solution = outcome.solution().unwrap();
        assert_eq!(solution.path().compact(), "S-B-G2");
        assert_eq!(solution.total_length(), 3.0);
        assert_eq!(events(&recorder, "better"), vec!["S-A-G1", "S-B-G2"]);
        assert_eq!(events(&recorder, "goal"), vec!["S-B-G2"]);
        assert_eq!(recorder.events.last().unwrap(), "goal S-B-G2");
    }

    #[test]
    fn pruned_paths_are_not_expanded() {
        let graph = Graph::new(vec![
            Node::new("S", 0.0).start().arc("G", 2.0).arc("A", 3.0),
            Node::new("A", 0.0).arc("B", 1.0),
            Node::new("B", 0.0),
            Node::new("G", 0.0).goal(),
        ])
        .unwrap();
        let mut recorder = Recorder::default();
        let outcome = branch_and_bound(&graph, SearchOptions::default(), &mut recorder).unwrap();
        assert_eq!(outcome.solution().unwrap().path().compact(), "S-G");
        assert_eq!(recorder.removed(), vec!["S", "S-G", "S-A"]);
        assert_eq!(events(&recorder, "ignored"), vec!["S-A"]);
        assert!(!recorder.events.iter().any(|e| e.ends_with("S-A-B")));
    }

    #[test]
    fn reverse_flag_is_ignored() {
        let graph = example();
        let mut plain = Recorder::default();
        let mut reversed = Recorder::default();
        branch_and_bound(&graph, SearchOptions::default(), &mut plain).unwrap();
        branch_and_bound(&graph, SearchOptions::default().reversed(true), &mut reversed).unwrap();
        assert_eq!(plain.events, reversed.events);
    }

    #[test]
    fn no_goal() {
        let graph = Graph::new(vec![
            Node::new("S", 0.0).start().arc("A", 1.0),
            Node::new("A", 0.0),
        ])
        .unwrap();
        let mut recorder = Recorder::default();
        assert_eq!(
            branch_and_bound(&graph, SearchOptions::default(), &mut recorder).unwrap(),
            SearchOutcome::NoSolution(2)
        );
        assert!(events(&recorder, "goal").is_empty());
    }

    #[test]
    fn cycle_limit() {
        let graph = two_cycle();
        let options = SearchOptions::default().with_limit(5);
        assert_eq!(
            branch_and_bound(&graph, options, NoObserver).unwrap(),
            SearchOutcome::CycleDetected(5)
        );
    }
}
