//! Greedy best-first and A* search.

use super::queue;
use super::{Budget, GoalTest, Order, Policy};
use crate::errors::{Result, SearchError};
use crate::frontier::PriorityFrontier;
use crate::search::{Mode, Solution, Strategy};
use crate::traits::{Heuristic, Problem};

/// Lowest estimate first, path cost ignored. Neither complete nor optimal.
pub(crate) const GREEDY_BEST_FIRST: Policy = Policy {
    order: Order::Estimate,
    goal_test: GoalTest::OnExpansion,
    replace_cheaper: false,
    reopen: false,
};

/// Lowest `f = g + h` first, ties to the lower estimate. A cheaper path to
/// an explored state reopens it, which keeps graph mode optimal under
/// heuristics which are admissible but not consistent. With a consistent
/// heuristic no state is ever reopened.
pub(crate) const ASTAR: Policy = Policy {
    order: Order::Evaluation,
    goal_test: GoalTest::OnExpansion,
    replace_cheaper: true,
    reopen: true,
};

fn informed<P, H>(
    problem: &P,
    heuristic: &H,
    strategy: Strategy,
    policy: Policy,
    mode: Mode,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    if mode == Mode::Bidirectional {
        return Err(SearchError::InvalidConfiguration {
            strategy,
            mode,
            reason: "the heuristic estimates distance to the goal and can't guide the backward half",
        });
    }
    queue::dispatch::<P, H, PriorityFrontier>(problem, heuristic, policy, mode, budget)
}

pub(crate) fn greedy_best_first<P, H>(
    problem: &P,
    heuristic: &H,
    mode: Mode,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    informed(
        problem,
        heuristic,
        Strategy::GreedyBestFirst,
        GREEDY_BEST_FIRST,
        mode,
        budget,
    )
}

pub(crate) fn astar<P, H>(
    problem: &P,
    heuristic: &H,
    mode: Mode,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    informed(problem, heuristic, Strategy::AStar, ASTAR, mode, budget)
}
