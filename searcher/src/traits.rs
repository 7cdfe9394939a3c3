use std::fmt::Debug;
use std::hash::Hash;

/// Cost of a step or path.
///
/// Costs are non-negative by construction. `Cost::MAX` stands in for an
/// infinite cost, so sums should saturate rather than wrap.
pub type Cost = usize;

/// Describes a search problem to the engine.
///
/// The engine trusts the problem: it does not check that the successor
/// function terminates, or that the state space is finite when a strategy
/// needs it to be.
pub trait Problem {
    /// Identity of a point in the state space. Graph and bidirectional
    /// searches hash states to recognize repeats.
    type State: Debug + Clone + Eq + Hash;

    /// A move from one state to another.
    type Action: Debug + Clone;

    /// Where every search begins.
    fn initial_state(&self) -> Self::State;

    /// Actions applicable in `state`, in the order they should be tried.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Cost of moving from `state` to `next` with `action`.
    fn step_cost(&self, _state: &Self::State, _action: &Self::Action, _next: &Self::State) -> Cost {
        1
    }

    /// The single goal state a backward search starts from.
    ///
    /// Only bidirectional search uses this. Problems which can't name their
    /// goal leave the default and can't be searched in that mode.
    fn goal_state(&self) -> Option<Self::State> {
        None
    }

    /// The inverse successor relation: every `(action, previous)` pair for
    /// which `result(previous, action) == state`.
    ///
    /// Returns `None` when the relation can't be derived for this problem.
    fn predecessors(&self, _state: &Self::State) -> Option<Vec<(Self::Action, Self::State)>> {
        None
    }
}

/// An estimate of the remaining cost from a state to the goal.
///
/// Informed strategies order their work by this estimate; optimality of A*
/// and recursive best-first search relies on it never overestimating.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> Cost;

    /// Does this heuristic carry any information? Informed strategies
    /// refuse to run with one that doesn't.
    fn informed(&self) -> bool {
        true
    }
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> Cost,
{
    fn estimate(&self, state: &S) -> Cost {
        self(state)
    }
}

/// The heuristic of uninformed searches, which estimates nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHeuristic;

impl<S> Heuristic<S> for NoHeuristic {
    fn estimate(&self, _state: &S) -> Cost {
        0
    }

    fn informed(&self) -> bool {
        false
    }
}
