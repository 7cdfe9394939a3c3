//! Selecting and running a search.
//!
//! A [Search] is built from a [Strategy] crossed with a [Mode]. Pairings
//! which can't work are rejected when the search is built, never when it
//! runs.

use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::algorithm::{self, Budget, SearchOptions};
use crate::errors::{Result, SearchError};
use crate::metrics::Metrics;
use crate::traits::{Heuristic, NoHeuristic, Problem};

/// How the frontier is ordered and expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    IterativeDeepening,
    UniformCost,
    GreedyBestFirst,
    AStar,
    RecursiveBestFirst,
    RecursiveBestFirstAvoidingLoops,
    HillClimbing,
}

const STRATEGIES: [Strategy; 9] = [
    Strategy::DepthFirst,
    Strategy::BreadthFirst,
    Strategy::IterativeDeepening,
    Strategy::UniformCost,
    Strategy::GreedyBestFirst,
    Strategy::AStar,
    Strategy::RecursiveBestFirst,
    Strategy::RecursiveBestFirstAvoidingLoops,
    Strategy::HillClimbing,
];

impl Strategy {
    /// Every strategy, uninformed ones first.
    pub fn all() -> impl Iterator<Item = Self> {
        STRATEGIES.iter().cloned()
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "Depth First",
            Strategy::BreadthFirst => "Breadth First",
            Strategy::IterativeDeepening => "Iterative Deepening",
            Strategy::UniformCost => "Uniform Cost",
            Strategy::GreedyBestFirst => "Greedy Best First",
            Strategy::AStar => "A*",
            Strategy::RecursiveBestFirst => "Recursive Best First",
            Strategy::RecursiveBestFirstAvoidingLoops => "Recursive Best First Avoiding Loops",
            Strategy::HillClimbing => "Hill Climbing",
        }
    }

    /// Short identifier, as accepted by [FromStr].
    pub fn id(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::IterativeDeepening => "ids",
            Strategy::UniformCost => "ucs",
            Strategy::GreedyBestFirst => "greedy",
            Strategy::AStar => "astar",
            Strategy::RecursiveBestFirst => "rbfs",
            Strategy::RecursiveBestFirstAvoidingLoops => "rbfs-al",
            Strategy::HillClimbing => "hill",
        }
    }

    pub fn requires_heuristic(&self) -> bool {
        matches!(
            self,
            Strategy::GreedyBestFirst
                | Strategy::AStar
                | Strategy::RecursiveBestFirst
                | Strategy::RecursiveBestFirstAvoidingLoops
                | Strategy::HillClimbing
        )
    }

    /// Why this strategy can't run in a mode, if it can't.
    ///
    /// Greedy and A* are refused bidirectional mode on purpose rather than
    /// run with a heuristic that points the backward half the wrong way.
    fn rejects(&self, mode: Mode) -> Option<&'static str> {
        if mode != Mode::Bidirectional {
            return None;
        }
        match self {
            Strategy::DepthFirst | Strategy::BreadthFirst | Strategy::UniformCost => None,
            Strategy::GreedyBestFirst | Strategy::AStar => {
                Some("the heuristic estimates distance to the goal and can't guide the backward half")
            }
            Strategy::IterativeDeepening
            | Strategy::RecursiveBestFirst
            | Strategy::RecursiveBestFirstAvoidingLoops
            | Strategy::HillClimbing => Some("it does not search with a frontier"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How previously seen states are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every successor is expanded, repeats included.
    Tree,
    /// Explored states are remembered and not expanded again.
    Graph,
    /// Graph searches forward from the start and backward from the goal.
    Bidirectional,
}

const MODES: [Mode; 3] = [Mode::Tree, Mode::Graph, Mode::Bidirectional];

impl Mode {
    pub fn all() -> impl Iterator<Item = Self> {
        MODES.iter().cloned()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Tree => "Tree Search",
            Mode::Graph => "Graph Search",
            Mode::Bidirectional => "Bidirectional Search",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Mode::Tree => "tree",
            Mode::Graph => "graph",
            Mode::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error when parsing a strategy or mode name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseNameError {
    #[error("Unknown search strategy: {0}")]
    Strategy(String),

    #[error("Unknown search mode: {0}")]
    Mode(String),
}

impl FromStr for Strategy {
    type Err = ParseNameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Strategy::all()
            .find(|strategy| strategy.id() == s || strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::Strategy(s.to_string()))
    }
}

impl FromStr for Mode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s == "bidi" {
            return Ok(Mode::Bidirectional);
        }
        Mode::all()
            .find(|mode| mode.id() == s || mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::Mode(s.to_string()))
    }
}

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The final state is a goal.
    Goal,
    /// Hill climbing stopped where no successor improves on the current
    /// state, which is not a goal.
    LocalOptimum,
}

/// The path found by a search.
#[derive(Debug, Clone)]
pub struct Solution<S, A> {
    /// Actions from the initial state, in order.
    pub actions: Vec<A>,

    /// The state the actions lead to.
    pub state: S,

    pub outcome: Outcome,

    pub metrics: Metrics,
}

impl<S, A> Solution<S, A> {
    pub fn is_goal(&self) -> bool {
        self.outcome == Outcome::Goal
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Is the initial state the final state?
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// A configured search, ready to run against any number of problems.
///
/// Runs keep all of their state to themselves, so one search can be run
/// from several threads at once.
#[derive(Debug, Clone)]
pub struct Search<H> {
    strategy: Strategy,
    mode: Mode,
    heuristic: H,
    options: SearchOptions,
}

impl Search<NoHeuristic> {
    /// Build an uninformed search.
    pub fn new(strategy: Strategy, mode: Mode) -> Result<Self> {
        if strategy.requires_heuristic() {
            return Err(SearchError::MissingHeuristic(strategy));
        }
        Search::with_heuristic(strategy, mode, NoHeuristic)
    }
}

impl<H> Search<H> {
    /// Build a search guided by a heuristic. Uninformed strategies accept
    /// one and ignore it.
    ///
    /// An informed strategy given [NoHeuristic] here fails with
    /// [SearchError::MissingHeuristic] when it is run.
    pub fn with_heuristic(strategy: Strategy, mode: Mode, heuristic: H) -> Result<Self> {
        if let Some(reason) = strategy.rejects(mode) {
            return Err(SearchError::InvalidConfiguration {
                strategy,
                mode,
                reason,
            });
        }
        Ok(Self {
            strategy,
            mode,
            heuristic,
            options: SearchOptions::default(),
        })
    }

    /// Replace the limits and reporting options.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Search for a path from the problem's initial state to a goal.
    pub fn run<P>(&self, problem: &P) -> Result<Solution<P::State, P::Action>>
    where
        P: Problem,
        H: Heuristic<P::State>,
    {
        self.run_with(problem, |_| false)
    }

    /// Search, consulting `cancel` before every expansion. The search stops
    /// with [SearchError::Cancelled] as soon as it returns true.
    pub fn run_with<P, C>(&self, problem: &P, mut cancel: C) -> Result<Solution<P::State, P::Action>>
    where
        P: Problem,
        H: Heuristic<P::State>,
        C: FnMut(&Metrics) -> bool,
    {
        use algorithm::{astar, basic, climbing, deepening, recursive, uniform};

        if self.strategy.requires_heuristic() && !self.heuristic.informed() {
            return Err(SearchError::MissingHeuristic(self.strategy));
        }

        debug!("{} ({}) from {:?}", self.strategy, self.mode, problem.initial_state());
        let mut budget = Budget::new(&self.options, &mut cancel);
        let h = &self.heuristic;
        let mode = self.mode;

        let result = match self.strategy {
            Strategy::DepthFirst => basic::depth_first(problem, mode, &mut budget),
            Strategy::BreadthFirst => basic::breadth_first(problem, mode, &mut budget),
            Strategy::IterativeDeepening => deepening::iterative_deepening(problem, &mut budget),
            Strategy::UniformCost => uniform::uniform_cost(problem, mode, &mut budget),
            Strategy::GreedyBestFirst => astar::greedy_best_first(problem, h, mode, &mut budget),
            Strategy::AStar => astar::astar(problem, h, mode, &mut budget),
            Strategy::RecursiveBestFirst => {
                recursive::recursive_best_first(problem, h, false, &mut budget)
            }
            Strategy::RecursiveBestFirstAvoidingLoops => {
                recursive::recursive_best_first(problem, h, true, &mut budget)
            }
            Strategy::HillClimbing => climbing::hill_climbing(problem, h, &mut budget),
        };

        match &result {
            Ok(solution) => debug!(
                "{} found {:?} in {} actions: {}",
                self.strategy,
                solution.outcome,
                solution.len(),
                solution.metrics
            ),
            Err(e) => debug!("{} failed: {}", self.strategy, e),
        }
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{self, OpenGrid};

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::all() {
            assert_eq!(strategy.id().parse::<Strategy>(), Ok(strategy));
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
        for mode in Mode::all() {
            assert_eq!(mode.id().parse::<Mode>(), Ok(mode));
        }
        assert_eq!("a*".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!("graph search".parse::<Mode>(), Ok(Mode::Graph));
        assert_eq!("bidi".parse::<Mode>(), Ok(Mode::Bidirectional));
        assert_eq!(
            "beam".parse::<Strategy>(),
            Err(ParseNameError::Strategy("beam".to_string()))
        );
    }

    #[test]
    fn display_names() {
        let names: Vec<_> = Strategy::all().map(|s| s.to_string()).collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names[5], "A*");
        assert_eq!(Mode::Bidirectional.to_string(), "Bidirectional Search");
    }

    #[test]
    fn missing_heuristic() {
        for strategy in Strategy::all().filter(|s| s.requires_heuristic()) {
            match Search::new(strategy, Mode::Graph) {
                Err(SearchError::MissingHeuristic(s)) => assert_eq!(s, strategy),
                other => panic!("Expected missing heuristic, got {:?}", other),
            }
        }
    }

    #[test]
    fn explicit_no_heuristic_is_missing() {
        let grid = OpenGrid::new(3, 3);
        for strategy in Strategy::all() {
            let result = Search::with_heuristic(strategy, Mode::Graph, NoHeuristic)
                .unwrap()
                .run(&grid);
            match result {
                Err(SearchError::MissingHeuristic(s)) => {
                    assert!(strategy.requires_heuristic());
                    assert_eq!(s, strategy);
                }
                Ok(solution) => {
                    assert!(!strategy.requires_heuristic(), "{}", strategy);
                    assert_eq!(solution.state, (2, 2));
                }
                Err(e) => panic!("{} failed: {}", strategy, e),
            }
        }
    }

    #[test]
    fn bidirectional_pairings() {
        let h = |_: &(i32, i32)| 0usize;
        let accepted: Vec<_> = Strategy::all()
            .filter(|s| Search::with_heuristic(*s, Mode::Bidirectional, h).is_ok())
            .collect();
        assert_eq!(
            accepted,
            vec![
                Strategy::DepthFirst,
                Strategy::BreadthFirst,
                Strategy::UniformCost
            ]
        );

        match Search::with_heuristic(Strategy::RecursiveBestFirst, Mode::Bidirectional, h) {
            Err(SearchError::InvalidConfiguration { strategy, mode, .. }) => {
                assert_eq!(strategy, Strategy::RecursiveBestFirst);
                assert_eq!(mode, Mode::Bidirectional);
            }
            other => panic!("Expected invalid configuration, got {:?}", other.err()),
        }
    }

    #[test]
    fn tree_and_graph_always_accepted() {
        let h = |_: &(i32, i32)| 0usize;
        for strategy in Strategy::all() {
            for mode in [Mode::Tree, Mode::Graph].iter() {
                assert!(Search::with_heuristic(strategy, *mode, h).is_ok());
            }
        }
    }

    #[test]
    fn uninformed_ignores_heuristic() {
        let grid = OpenGrid::new(3, 3);
        let wild = |_: &(i32, i32)| 1_000usize;
        let search = Search::with_heuristic(Strategy::UniformCost, Mode::Graph, wild).unwrap();
        let solution = search.run(&grid).unwrap();
        assert_eq!(solution.metrics.path_cost, Some(4));
    }

    #[test]
    fn reusable() {
        let grid = OpenGrid::new(4, 4);
        let search = Search::with_heuristic(Strategy::AStar, Mode::Graph, grid.manhattan()).unwrap();
        let first = search.run(&grid).unwrap();
        let second = search.run(&grid).unwrap();
        assert_eq!(first.actions, second.actions);
        assert_eq!(first.metrics.nodes_expanded, second.metrics.nodes_expanded);
    }

    #[test]
    fn cancellation() {
        let search = Search::new(Strategy::DepthFirst, Mode::Tree).unwrap();
        match search.run_with(&testing::cycle(), |m| m.nodes_expanded >= 1_000) {
            Err(SearchError::Cancelled(m)) => assert_eq!(m.nodes_expanded, 1_000),
            other => panic!("Expected cancellation, got {:?}", other),
        }
    }

    #[test]
    fn not_invertible() {
        #[derive(Debug)]
        struct OneWay;

        impl Problem for OneWay {
            type State = u8;
            type Action = u8;

            fn initial_state(&self) -> u8 {
                0
            }

            fn actions(&self, state: &u8) -> Vec<u8> {
                if *state < 3 {
                    vec![1]
                } else {
                    Vec::new()
                }
            }

            fn result(&self, state: &u8, action: &u8) -> u8 {
                state + action
            }

            fn is_goal(&self, state: &u8) -> bool {
                *state == 3
            }
        }

        let search = Search::new(Strategy::BreadthFirst, Mode::Bidirectional).unwrap();
        assert!(matches!(search.run(&OneWay), Err(SearchError::NotInvertible)));

        let search = Search::new(Strategy::BreadthFirst, Mode::Graph).unwrap();
        assert_eq!(search.run(&OneWay).unwrap().actions, vec![1, 1, 1]);
    }
}
