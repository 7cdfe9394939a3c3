//! Iterative deepening: depth-first searches with a growing depth limit.

use log::debug;

use super::basic::DEPTH_FIRST;
use super::cache::NoCache;
use super::queue::Explorer;
use super::Budget;
use crate::errors::Result;
use crate::frontier::StackFrontier;
use crate::metrics::Metrics;
use crate::search::Solution;
use crate::traits::Problem;

type Pass<P> = Explorer<
    <P as Problem>::State,
    <P as Problem>::Action,
    StackFrontier,
    NoCache<<P as Problem>::State>,
>;

/// How one depth-limited pass ended.
enum Limited<S, A> {
    Found(Solution<S, A>),
    /// Some node at the limit had successors which went unexplored.
    Cutoff,
    /// Every path ended before the limit.
    Exhausted,
}

/// Search with depth limits 0, 1, 2, ... until a pass finds the goal, or
/// a pass ends without cutting off any path.
///
/// Each pass runs in tree mode, so memory stays linear in the depth, and
/// the first solution found has the fewest actions.
pub(crate) fn iterative_deepening<P>(
    problem: &P,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
{
    let mut metrics = Metrics::default();
    let mut limit = 0;

    loop {
        metrics.iterations += 1;
        match depth_limited(problem, limit, budget, &mut metrics)? {
            Limited::Found(solution) => return Ok(solution),
            Limited::Exhausted => return Err(budget.exhausted(metrics)),
            Limited::Cutoff => {
                limit += 1;
                debug!("raising depth limit to {} after {}", limit, metrics);
            }
        }
    }
}

fn depth_limited<P>(
    problem: &P,
    limit: usize,
    budget: &mut Budget,
    metrics: &mut Metrics,
) -> Result<Limited<P::State, P::Action>>
where
    P: Problem,
{
    let mut pass: Pass<P> = Explorer::new(DEPTH_FIRST);
    pass.seed(problem.initial_state(), 0);
    metrics.record_frontier(pass.frontier_len());
    let mut cutoff = false;

    while let Some(id) = pass.pop() {
        let state = pass.arena[id].state().clone();
        if problem.is_goal(&state) {
            return Ok(Limited::Found(pass.solution(id, metrics.clone(), budget)));
        }

        let actions = problem.actions(&state);
        if pass.arena[id].depth() >= limit {
            cutoff |= !actions.is_empty();
            continue;
        }

        budget.step(metrics)?;
        metrics.record_depth(pass.arena[id].depth());

        for action in actions {
            let next = problem.result(&state, &action);
            let cost = problem.step_cost(&state, &action, &next);
            let child = pass.arena.child(id, action, next, cost);
            metrics.nodes_generated += 1;
            pass.offer(child, 0);
        }
        metrics.record_frontier(pass.frontier_len());
    }

    Ok(if cutoff {
        Limited::Cutoff
    } else {
        Limited::Exhausted
    })
}
