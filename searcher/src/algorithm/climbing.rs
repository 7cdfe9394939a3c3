//! Steepest-ascent hill climbing.

use super::Budget;
use crate::errors::Result;
use crate::metrics::Metrics;
use crate::search::{Outcome, Solution};
use crate::traits::{Cost, Heuristic, Problem};

/// Repeatedly move to the successor with the lowest estimate, as long as it
/// is strictly lower than the current one.
///
/// Stops at a goal, or at a state no successor improves on. The latter is
/// still a successful run, reported with [Outcome::LocalOptimum]. Plateaus
/// end the climb, since a move must strictly improve the estimate.
pub(crate) fn hill_climbing<P, H>(
    problem: &P,
    heuristic: &H,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let mut metrics = Metrics::default();
    let mut state = problem.initial_state();
    let mut estimate = heuristic.estimate(&state);
    let mut actions = Vec::new();
    let mut cost: Cost = 0;

    let outcome = loop {
        if problem.is_goal(&state) {
            break Outcome::Goal;
        }

        budget.step(&mut metrics)?;
        metrics.record_depth(actions.len());

        let best = problem
            .actions(&state)
            .into_iter()
            .map(|action| {
                let next = problem.result(&state, &action);
                let h = heuristic.estimate(&next);
                (h, action, next)
            })
            .inspect(|_| metrics.nodes_generated += 1)
            .min_by_key(|(h, _, _)| *h);

        match best {
            Some((h, action, next)) if h < estimate => {
                cost = cost.saturating_add(problem.step_cost(&state, &action, &next));
                actions.push(action);
                state = next;
                estimate = h;
            }
            _ => break Outcome::LocalOptimum,
        }
    };

    metrics.path_cost = Some(cost);
    budget.finish(&mut metrics);
    Ok(Solution {
        actions,
        state,
        outcome,
        metrics,
    })
}
