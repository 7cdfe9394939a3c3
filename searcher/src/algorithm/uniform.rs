//! Uniform-cost search.

use super::queue;
use super::{Budget, GoalTest, Order, Policy};
use crate::errors::Result;
use crate::frontier::PriorityFrontier;
use crate::search::{Mode, Solution};
use crate::traits::{NoHeuristic, Problem};

/// Cheapest path first. A cheaper path to a waiting state replaces the
/// waiting node; explored states are never reopened, since with
/// non-negative costs they were reached by a cheapest path already.
pub(crate) const UNIFORM_COST: Policy = Policy {
    order: Order::PathCost,
    goal_test: GoalTest::OnExpansion,
    replace_cheaper: true,
    reopen: false,
};

/// Uniform-cost search behaves like a breadth first search, but always
/// expands the cheapest path next even when step costs vary. Equal costs
/// are expanded in the order they were generated.
pub(crate) fn uniform_cost<P>(
    problem: &P,
    mode: Mode,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
{
    queue::dispatch::<P, NoHeuristic, PriorityFrontier>(
        problem,
        &NoHeuristic,
        UNIFORM_COST,
        mode,
        budget,
    )
}
