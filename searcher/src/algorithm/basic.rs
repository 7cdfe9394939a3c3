//! Depth-first and breadth-first search.

use super::queue;
use super::{Budget, GoalTest, Order, Policy};
use crate::errors::Result;
use crate::frontier::{QueueFrontier, StackFrontier};
use crate::search::{Mode, Solution};
use crate::traits::{NoHeuristic, Problem};

pub(crate) const DEPTH_FIRST: Policy = Policy {
    order: Order::Lifo,
    goal_test: GoalTest::OnExpansion,
    replace_cheaper: false,
    reopen: false,
};

/// Breadth-first search tests each node as it is generated, which stops
/// the search a whole layer earlier than testing on expansion.
pub(crate) const BREADTH_FIRST: Policy = Policy {
    order: Order::Fifo,
    goal_test: GoalTest::OnGeneration,
    replace_cheaper: false,
    reopen: false,
};

/// Depth-first search, where the most recently generated node is expanded
/// next. In tree mode this need not terminate on cyclic problems.
pub(crate) fn depth_first<P>(
    problem: &P,
    mode: Mode,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
{
    queue::dispatch::<P, NoHeuristic, StackFrontier>(problem, &NoHeuristic, DEPTH_FIRST, mode, budget)
}

/// Breadth-first search, where nodes are expanded in the order they were
/// generated.
pub(crate) fn breadth_first<P>(
    problem: &P,
    mode: Mode,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
{
    queue::dispatch::<P, NoHeuristic, QueueFrontier>(problem, &NoHeuristic, BREADTH_FIRST, mode, budget)
}

#[cfg(test)]
mod test {
    use crate::testing::{self, replay, Graph, OpenGrid};
    use crate::{Mode, Search, SearchError, SearchOptions, Strategy};

    fn search(strategy: Strategy, mode: Mode) -> Search<crate::NoHeuristic> {
        Search::new(strategy, mode).unwrap()
    }

    #[test]
    fn breadth_first_grid() {
        let grid = OpenGrid::new(4, 4);
        for mode in Mode::all() {
            let solution = search(Strategy::BreadthFirst, mode).run(&grid).unwrap();
            assert_eq!(solution.len(), 6, "{}", mode);
            assert_eq!(replay(&grid, &solution.actions), ((3, 3), 6));
            assert_eq!(solution.metrics.path_cost, Some(6));
        }
    }

    #[test]
    fn breadth_first_tests_on_generation() {
        let star = Graph::directed(&[("S", "A", 1), ("S", "B", 1), ("S", "G", 1)], "S", "G");

        let bfs = search(Strategy::BreadthFirst, Mode::Graph).run(&star).unwrap();
        let ucs = search(Strategy::UniformCost, Mode::Graph).run(&star).unwrap();

        assert_eq!(bfs.actions, vec!["G"]);
        assert_eq!(ucs.actions, vec!["G"]);
        assert_eq!(bfs.metrics.nodes_expanded, 1);
        assert_eq!(ucs.metrics.nodes_expanded, 3);
    }

    #[test]
    fn breadth_first_fewest_actions() {
        let solution = search(Strategy::BreadthFirst, Mode::Graph)
            .run(&testing::diamond())
            .unwrap();
        assert_eq!(solution.actions, vec!["G"]);
        assert_eq!(solution.metrics.path_cost, Some(10));
    }

    #[test]
    fn initial_state_is_goal() {
        let trivial = Graph::directed(&[("S", "A", 1)], "S", "S");
        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst].iter() {
            let solution = search(*strategy, Mode::Graph).run(&trivial).unwrap();
            assert!(solution.is_empty());
            assert_eq!(solution.state, "S");
            assert_eq!(solution.metrics.path_cost, Some(0));
        }
    }

    #[test]
    fn depth_first_is_lifo() {
        // S lists G before A, so A is on top of the stack.
        let solution = search(Strategy::DepthFirst, Mode::Tree)
            .run(&testing::diamond())
            .unwrap();
        assert_eq!(solution.actions, vec!["A", "B", "G"]);
        assert_eq!(solution.metrics.path_cost, Some(3));

        // In graph mode the second path to G is dropped, since G is
        // already waiting on the stack.
        let solution = search(Strategy::DepthFirst, Mode::Graph)
            .run(&testing::diamond())
            .unwrap();
        assert_eq!(solution.actions, vec!["G"]);
        assert_eq!(solution.metrics.nodes_expanded, 3);
    }

    #[test]
    fn depth_first_graph_terminates_on_cycle() {
        match search(Strategy::DepthFirst, Mode::Graph).run(&testing::cycle()) {
            Err(SearchError::NoSolutionFound(m)) => assert_eq!(m.nodes_expanded, 2),
            other => panic!("Expected no solution, got {:?}", other),
        }
    }

    #[test]
    fn depth_first_tree_needs_a_bound_on_cycle() {
        let options = SearchOptions {
            step_limit: Some(500),
            ..SearchOptions::default()
        };
        let dfs = search(Strategy::DepthFirst, Mode::Tree).with_options(options);
        match dfs.run(&testing::cycle()) {
            Err(SearchError::StepLimitExhausted(m)) => {
                assert_eq!(m.nodes_expanded, 500);
                assert_eq!(m.max_depth, 499);
            }
            other => panic!("Expected step limit, got {:?}", other),
        }
    }

    #[test]
    fn depth_first_skips_queued_states() {
        let grid = OpenGrid::new(3, 3);
        let solution = search(Strategy::DepthFirst, Mode::Graph).run(&grid).unwrap();
        assert_eq!(replay(&grid, &solution.actions).0, (2, 2));
        assert!(solution.metrics.nodes_expanded <= 9);
    }

    #[test]
    fn bidirectional_line() {
        let line = testing::line();
        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst].iter() {
            let solution = search(*strategy, Mode::Bidirectional).run(&line).unwrap();
            assert_eq!(solution.actions, vec!["1", "2", "3", "4", "5", "6"]);
            assert_eq!(solution.metrics.path_cost, Some(6));
            assert_eq!(solution.state, "6");
        }
    }

    #[test]
    fn bidirectional_grid() {
        let grid = OpenGrid::new(4, 4);
        let solution = search(Strategy::BreadthFirst, Mode::Bidirectional)
            .run(&grid)
            .unwrap();
        assert_eq!(replay(&grid, &solution.actions), ((3, 3), 6));
        assert_eq!(solution.metrics.path_cost, Some(6));

        let dfs = search(Strategy::DepthFirst, Mode::Bidirectional)
            .run(&grid)
            .unwrap();
        let (end, cost) = replay(&grid, &dfs.actions);
        assert_eq!(end, (3, 3));
        assert_eq!(dfs.metrics.path_cost, Some(cost));
    }

    #[test]
    fn bidirectional_unreachable() {
        let split = Graph::undirected(&[("S", "A", 1), ("B", "G", 1)], "S", "G");
        assert!(matches!(
            search(Strategy::BreadthFirst, Mode::Bidirectional).run(&split),
            Err(SearchError::NoSolutionFound(_))
        ));
    }
}
