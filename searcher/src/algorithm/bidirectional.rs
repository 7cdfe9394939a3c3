//! Bidirectional search: a forward search from the initial state and a
//! backward search from the goal, expanded in turn until they meet.
//!
//! Both halves are graph searches with the same frontier ordering. The
//! backward half walks the problem's predecessor relation, and stores in
//! each node the forward action which leads from that node's state to its
//! parent's. The halves meet as soon as one generates a state the other has
//! already explored or queued.

use log::debug;

use super::cache::ExploredSet;
use super::queue::Explorer;
use super::{Budget, Policy};
use crate::errors::{Result, SearchError};
use crate::frontier::Frontier;
use crate::metrics::Metrics;
use crate::node::NodeId;
use crate::search::{Outcome, Solution};
use crate::traits::Problem;

type Half<P, F> = Explorer<
    <P as Problem>::State,
    <P as Problem>::Action,
    F,
    ExploredSet<<P as Problem>::State>,
>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exhausted,
    Met { forward: NodeId, backward: NodeId },
}

pub(crate) fn search<P, F>(
    problem: &P,
    policy: Policy,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
    F: Frontier,
{
    let goal = problem.goal_state().ok_or(SearchError::NotInvertible)?;
    if problem.predecessors(&goal).is_none() {
        return Err(SearchError::NotInvertible);
    }

    let mut metrics = Metrics::default();
    let mut forward: Half<P, F> = Explorer::new(policy);
    let mut backward: Half<P, F> = Explorer::new(policy);

    let start = forward.seed(problem.initial_state(), 0);
    let finish = backward.seed(goal.clone(), 0);
    metrics.record_frontier(2);

    if forward.arena[start].state() == backward.arena[finish].state() {
        return Ok(join::<P, F>(&forward, start, &backward, finish, goal, metrics, budget));
    }

    loop {
        for direction in [Direction::Forward, Direction::Backward].iter() {
            let step = match direction {
                Direction::Forward => {
                    step_forward(problem, &mut forward, &backward, budget, &mut metrics)?
                }
                Direction::Backward => {
                    step_backward(problem, &mut backward, &forward, budget, &mut metrics)?
                }
            };

            match step {
                Step::Continue => {}
                Step::Exhausted => {
                    debug!("{:?} search exhausted before meeting", direction);
                    return Err(budget.exhausted(metrics));
                }
                Step::Met {
                    forward: f,
                    backward: b,
                } => {
                    return Ok(join::<P, F>(&forward, f, &backward, b, goal, metrics, budget));
                }
            }
        }
        metrics.record_frontier(forward.frontier_len() + backward.frontier_len());
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn step_forward<P, F>(
    problem: &P,
    forward: &mut Half<P, F>,
    backward: &Half<P, F>,
    budget: &mut Budget,
    metrics: &mut Metrics,
) -> Result<Step>
where
    P: Problem,
    F: Frontier,
{
    let id = match forward.pop() {
        Some(id) => id,
        None => return Ok(Step::Exhausted),
    };
    budget.step(metrics)?;
    metrics.record_depth(forward.arena[id].depth());

    let state = forward.arena[id].state().clone();
    for action in problem.actions(&state) {
        let next = problem.result(&state, &action);
        let cost = problem.step_cost(&state, &action, &next);
        let child = forward.arena.child(id, action, next, cost);
        metrics.nodes_generated += 1;

        if let Some(other) = backward.seen(forward.arena[child].state()) {
            return Ok(Step::Met {
                forward: child,
                backward: other,
            });
        }
        forward.offer(child, 0);
    }
    Ok(Step::Continue)
}

fn step_backward<P, F>(
    problem: &P,
    backward: &mut Half<P, F>,
    forward: &Half<P, F>,
    budget: &mut Budget,
    metrics: &mut Metrics,
) -> Result<Step>
where
    P: Problem,
    F: Frontier,
{
    let id = match backward.pop() {
        Some(id) => id,
        None => return Ok(Step::Exhausted),
    };
    budget.step(metrics)?;
    metrics.record_depth(backward.arena[id].depth());

    let state = backward.arena[id].state().clone();
    let predecessors = problem
        .predecessors(&state)
        .ok_or(SearchError::NotInvertible)?;
    for (action, previous) in predecessors {
        let cost = problem.step_cost(&previous, &action, &state);
        let child = backward.arena.child(id, action, previous, cost);
        metrics.nodes_generated += 1;

        if let Some(other) = forward.seen(backward.arena[child].state()) {
            return Ok(Step::Met {
                forward: other,
                backward: child,
            });
        }
        backward.offer(child, 0);
    }
    Ok(Step::Continue)
}

/// Splice the forward path to the meeting state onto the backward path
/// from it to the goal.
fn join<P, F>(
    forward: &Half<P, F>,
    f: NodeId,
    backward: &Half<P, F>,
    b: NodeId,
    goal: P::State,
    mut metrics: Metrics,
    budget: &Budget,
) -> Solution<P::State, P::Action>
where
    P: Problem,
    F: Frontier,
{
    debug!("searches met at {:?}", forward.arena[f].state());

    let mut actions = forward.arena.actions(f);
    actions.extend(backward.arena.actions_to_root(b));

    metrics.path_cost = Some(
        forward.arena[f]
            .path_cost()
            .saturating_add(backward.arena[b].path_cost()),
    );
    budget.finish(&mut metrics);

    Solution {
        actions,
        state: goal,
        outcome: Outcome::Goal,
        metrics,
    }
}
