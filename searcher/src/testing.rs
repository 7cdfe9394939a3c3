//! Small problems shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::traits::{Cost, Problem};

/// A weighted graph of named nodes, searched from `start` to `goal`.
#[derive(Debug, Clone)]
pub(crate) struct Graph {
    edges: Vec<(&'static str, &'static str, Cost)>,
    start: &'static str,
    goal: &'static str,
}

impl Graph {
    /// A directed graph.
    pub(crate) fn directed(
        edges: &[(&'static str, &'static str, Cost)],
        start: &'static str,
        goal: &'static str,
    ) -> Self {
        Self {
            edges: edges.to_vec(),
            start,
            goal,
        }
    }

    /// An undirected graph, each edge usable in both directions.
    pub(crate) fn undirected(
        edges: &[(&'static str, &'static str, Cost)],
        start: &'static str,
        goal: &'static str,
    ) -> Self {
        let mut both = edges.to_vec();
        both.extend(edges.iter().map(|&(a, b, c)| (b, a, c)));
        Self::directed(&both, start, goal)
    }
}

impl Problem for Graph {
    type State = &'static str;
    type Action = &'static str;

    fn initial_state(&self) -> Self::State {
        self.start
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|(_, to, _)| *to)
            .collect()
    }

    fn result(&self, _state: &Self::State, action: &Self::Action) -> Self::State {
        action
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.goal
    }

    fn step_cost(&self, state: &Self::State, _action: &Self::Action, next: &Self::State) -> Cost {
        self.edges
            .iter()
            .filter(|(from, to, _)| from == state && to == next)
            .map(|(_, _, cost)| *cost)
            .min()
            .unwrap_or(Cost::MAX)
    }

    fn goal_state(&self) -> Option<Self::State> {
        Some(self.goal)
    }

    fn predecessors(&self, state: &Self::State) -> Option<Vec<(Self::Action, Self::State)>> {
        Some(
            self.edges
                .iter()
                .filter(|(_, to, _)| to == state)
                .map(|(from, to, _)| (*to, *from))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Move {
    Up,
    Left,
    Right,
    Down,
}

impl Move {
    fn offset(self) -> (i32, i32) {
        match self {
            Move::Up => (0, -1),
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
            Move::Down => (0, 1),
        }
    }
}

/// An open, unit-cost grid searched from (0, 0) to the far corner.
#[derive(Debug, Clone)]
pub(crate) struct OpenGrid {
    width: i32,
    height: i32,
}

impl OpenGrid {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub(crate) fn goal(&self) -> (i32, i32) {
        (self.width - 1, self.height - 1)
    }

    /// Manhattan distance to the goal corner.
    pub(crate) fn manhattan(&self) -> impl Fn(&(i32, i32)) -> Cost + Send + Sync {
        let (gx, gy) = self.goal();
        move |&(x, y): &(i32, i32)| ((gx - x).abs() + (gy - y).abs()) as Cost
    }

    fn contains(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }
}

impl Problem for OpenGrid {
    type State = (i32, i32);
    type Action = Move;

    fn initial_state(&self) -> Self::State {
        (0, 0)
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        [Move::Up, Move::Left, Move::Right, Move::Down]
            .iter()
            .copied()
            .filter(|m| self.contains(self.result(state, m)))
            .collect()
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        let (dx, dy) = action.offset();
        (state.0 + dx, state.1 + dy)
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.goal()
    }

    fn goal_state(&self) -> Option<Self::State> {
        Some(self.goal())
    }

    fn predecessors(&self, state: &Self::State) -> Option<Vec<(Self::Action, Self::State)>> {
        Some(
            [Move::Up, Move::Left, Move::Right, Move::Down]
                .iter()
                .filter_map(|m| {
                    let (dx, dy) = m.offset();
                    let previous = (state.0 - dx, state.1 - dy);
                    if self.contains(previous) {
                        Some((*m, previous))
                    } else {
                        None
                    }
                })
                .collect(),
        )
    }
}

/// Two states which lead only to each other; the goal is unreachable.
pub(crate) fn cycle() -> Graph {
    Graph::directed(&[("A", "B", 1), ("B", "A", 1)], "A", "Z")
}

/// A chain 0 - 1 - ... - 6 of unit steps, walkable both ways.
pub(crate) fn line() -> Graph {
    Graph::undirected(
        &[
            ("0", "1", 1),
            ("1", "2", 1),
            ("2", "3", 1),
            ("3", "4", 1),
            ("4", "5", 1),
            ("5", "6", 1),
        ],
        "0",
        "6",
    )
}

/// A diamond with a short expensive route and a long cheap one.
///
/// S-G costs 10 directly, S-A-B-G costs 3 in total.
pub(crate) fn diamond() -> Graph {
    Graph::directed(
        &[
            ("S", "G", 10),
            ("S", "A", 1),
            ("A", "B", 1),
            ("B", "G", 1),
        ],
        "S",
        "G",
    )
}

/// Apply actions from the initial state, returning the final state and the
/// total cost.
pub(crate) fn replay<P: Problem>(problem: &P, actions: &[P::Action]) -> (P::State, Cost) {
    let mut state = problem.initial_state();
    let mut cost = 0;
    for action in actions {
        assert!(
            problem
                .actions(&state)
                .iter()
                .any(|a| format!("{:?}", a) == format!("{:?}", action)),
            "{:?} is not applicable in {:?}",
            action,
            state
        );
        let next = problem.result(&state, action);
        cost += problem.step_cost(&state, action, &next);
        state = next;
    }
    (state, cost)
}

/// Wraps a problem to count how many times each state is expanded.
#[derive(Debug)]
pub(crate) struct Counting<P: Problem> {
    inner: P,
    expansions: RefCell<HashMap<P::State, usize>>,
}

impl<P: Problem> Counting<P> {
    pub(crate) fn new(inner: P) -> Self {
        Self {
            inner,
            expansions: RefCell::new(HashMap::new()),
        }
    }

    /// Times the state was expanded.
    pub(crate) fn count(&self, state: &P::State) -> usize {
        self.expansions.borrow().get(state).copied().unwrap_or(0)
    }

    /// The largest number of times any one state was expanded.
    pub(crate) fn most(&self) -> usize {
        self.expansions.borrow().values().copied().max().unwrap_or(0)
    }
}

impl<P: Problem> Problem for Counting<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> Self::State {
        self.inner.initial_state()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        *self.expansions.borrow_mut().entry(state.clone()).or_insert(0) += 1;
        self.inner.actions(state)
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.inner.result(state, action)
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.inner.is_goal(state)
    }

    fn step_cost(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> Cost {
        self.inner.step_cost(state, action, next)
    }
}

/// A one-way corridor of unit steps from 0 to `n`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Corridor(pub(crate) usize);

impl Corridor {
    /// The exact remaining distance.
    pub(crate) fn remaining(&self) -> impl Fn(&usize) -> Cost + Send + Sync {
        let n = self.0;
        move |s: &usize| n - *s
    }
}

impl Problem for Corridor {
    type State = usize;
    type Action = usize;

    fn initial_state(&self) -> Self::State {
        0
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if *state < self.0 {
            vec![1]
        } else {
            Vec::new()
        }
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        state + action
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.0
    }
}
