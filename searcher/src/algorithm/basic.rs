pub use bfs::{bfs, BreadthQueue};
pub use dfs::{dfs, DepthQueue};

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::algorithm::{Plain, SearchAlgorithm, SearchOptions, SearchOutcome, SearchQueue};
    use crate::errors::GraphResult;
    use crate::graph::{Graph, PathWithInfo};
    use crate::traits::SearchObserver;

    /// First in, first out.
    #[derive(Debug)]
    pub struct BreadthQueue {
        queue: VecDeque<PathWithInfo>,
    }

    impl SearchQueue for BreadthQueue {
        fn pop(&mut self) -> Option<PathWithInfo> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: PathWithInfo) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl Default for BreadthQueue {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    /// Breadth-first search, where ties within a layer are broken
    /// by the order neighbours are declared in the graph.
    pub fn bfs<O>(graph: &Graph, options: SearchOptions, observer: O) -> GraphResult<SearchOutcome>
    where
        O: SearchObserver,
    {
        SearchAlgorithm::new(graph, BreadthQueue::default(), Plain, observer)
            .with_options(options)
            .search()
    }
}

mod dfs {
    use std::default::Default;

    use crate::algorithm::{Plain, SearchAlgorithm, SearchOptions, SearchOutcome, SearchQueue};
    use crate::errors::GraphResult;
    use crate::graph::{Graph, PathWithInfo};
    use crate::traits::SearchObserver;

    /// Last in, first out.
    #[derive(Debug)]
    pub struct DepthQueue {
        queue: Vec<PathWithInfo>,
    }

    impl Default for DepthQueue {
        fn default() -> Self {
            DepthQueue { queue: Vec::new() }
        }
    }

    impl SearchQueue for DepthQueue {
        fn pop(&mut self) -> Option<PathWithInfo> {
            self.queue.pop()
        }

        fn push(&mut self, item: PathWithInfo) {
            self.queue.push(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    /// Depth-first search. With the ordinary insertion order the last
    /// declared neighbour is explored first.
    pub fn dfs<O>(graph: &Graph, options: SearchOptions, observer: O) -> GraphResult<SearchOutcome>
    where
        O: SearchObserver,
    {
        SearchAlgorithm::new(graph, DepthQueue::default(), Plain, observer)
            .with_options(options)
            .search()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::test::{assert_valid, example, single_arc, two_cycle, Recorder};
    use crate::algorithm::{SearchOptions, SearchOutcome};
    use crate::graph::{Graph, Node};
    use crate::traits::NoObserver;

    #[test]
    fn single_arc_graph() {
        let graph = single_arc();
        for outcome in vec![
            dfs(&graph, SearchOptions::default(), NoObserver).unwrap(),
            bfs(&graph, SearchOptions::default(), NoObserver).unwrap(),
        ] {
            let solution = outcome.solution().unwrap();
            assert_eq!(solution.path().compact(), "S-A");
            assert_eq!(solution.total_length(), 1.0);
            assert_eq!(solution.num_arcs(), 1);
        }
    }

    #[test]
    fn dfs_example() {
        let graph = example();
        let mut recorder = Recorder::default();
        let outcome = dfs(&graph, SearchOptions::default(), &mut recorder).unwrap();
        let solution = outcome.solution().unwrap();
        assert_valid(&graph, solution);
        assert_eq!(solution.path().compact(), "S-C-G1");
        assert_eq!(solution.total_length(), 19.0);
        assert_eq!(recorder.removed(), vec!["S", "S-C", "S-C-G1"]);
        assert_eq!(recorder.events.last().unwrap(), "goal S-C-G1");
    }

    #[test]
    fn dfs_reversed() {
        let graph = example();
        let options = SearchOptions::default().reversed(true);
        let mut recorder = Recorder::default();
        let outcome = dfs(&graph, options, &mut recorder).unwrap();
        let solution = outcome.solution().unwrap();
        assert_valid(&graph, solution);
        assert_eq!(solution.path().compact(), "S-A-C-D-G1");
        assert_eq!(
            recorder.removed(),
            vec!["S", "S-A", "S-A-C", "S-A-C-D", "S-A-C-D-G1"]
        );
    }

    #[test]
    fn bfs_layers() {
        let graph = example();
        let mut recorder = Recorder::default();
        let outcome = bfs(&graph, SearchOptions::default(), &mut recorder).unwrap();
        assert_valid(&graph, outcome.solution().unwrap());

        let depths: Vec<usize> = recorder
            .removed()
            .iter()
            .map(|p| p.matches('-').count())
            .collect();
        let mut sorted = depths.clone();
        sorted.sort();
        assert_eq!(depths, sorted);
        assert_eq!(
            recorder.removed(),
            vec!["S", "S-A", "S-B", "S-C", "S-A-C", "S-A-D", "S-B-E", "S-B-F", "S-C-D", "S-C-G1"]
        );
    }

    #[test]
    fn bfs_reversed() {
        let graph = example();
        let options = SearchOptions::default().reversed(true);
        let mut recorder = Recorder::default();
        let outcome = bfs(&graph, options, &mut recorder).unwrap();
        let solution = outcome.solution().unwrap();
        assert_valid(&graph, solution);
        assert_eq!(solution.path().compact(), "S-C-G1");
        assert_eq!(
            recorder.removed(),
            vec!["S", "S-C", "S-B", "S-A", "S-C-G1"]
        );
    }

    #[test]
    fn cycle_limit() {
        let graph = two_cycle();
        let options = SearchOptions::default().with_limit(5);
        let mut recorder = Recorder::default();
        assert_eq!(
            dfs(&graph, options, &mut recorder).unwrap(),
            SearchOutcome::CycleDetected(5)
        );
        assert_eq!(recorder.removed().len(), 5);

        assert_eq!(
            bfs(&graph, options, NoObserver).unwrap(),
            SearchOutcome::CycleDetected(5)
        );
    }

    #[test]
    fn unreachable_goal() {
        let graph = Graph::new(vec![
            Node::new("S", 0.0).start().arc("A", 1.0).arc("B", 1.0),
            Node::new("A", 0.0).arc("B", 1.0),
            Node::new("B", 0.0),
            Node::new("G", 0.0).goal(),
        ])
        .unwrap();
        assert_eq!(
            dfs(&graph, SearchOptions::default(), NoObserver).unwrap(),
            SearchOutcome::NoSolution(4)
        );
        assert_eq!(
            bfs(&graph, SearchOptions::default(), NoObserver).unwrap(),
            SearchOutcome::NoSolution(4)
        );
    }
}
