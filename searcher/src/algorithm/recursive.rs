//! Recursive best-first search.
//!
//! A best-first search in linear space: each frame expands one node and
//! descends into its best successor for as long as that successor's `f`
//! value stays within the best alternative found further up. Retiring a
//! frame backs the best `f` value below it up into its parent, so a
//! discarded subtree is only regenerated once it is again the most
//! promising.
//!
//! The recursion is kept on an explicit stack of frames, so the depth of a
//! solution is bounded by memory rather than by the thread's stack.

use std::collections::HashSet;

use super::Budget;
use crate::errors::Result;
use crate::metrics::Metrics;
use crate::search::{Outcome, Solution};
use crate::traits::{Cost, Heuristic, Problem};

/// What the search learned below the initial state.
enum Descent<S, A> {
    /// A goal, with the actions leading to it.
    Found { actions: Vec<A>, state: S, cost: Cost },
    /// No goal within any bound.
    Exhausted,
}

struct Successor<S, A> {
    f: Cost,
    g: Cost,
    action: A,
    state: S,
}

/// One expanded node on the current path. Its chosen successor, once
/// sorted, is always the first.
struct Frame<S, A> {
    state: S,
    successors: Vec<Successor<S, A>>,
    bound: Cost,
    depth: usize,
}

struct Recursion<'p, P, H>
where
    P: Problem,
{
    problem: &'p P,
    heuristic: &'p H,
    /// States on the current path, tracked only when avoiding loops.
    path: Option<HashSet<P::State>>,
    /// Successors held by every frame on the current path.
    retained: usize,
    metrics: Metrics,
}

type Frames<P> = Vec<Frame<<P as Problem>::State, <P as Problem>::Action>>;

impl<'p, P, H> Recursion<'p, P, H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn on_path(&self, state: &P::State) -> bool {
        self.path.as_ref().map_or(false, |path| path.contains(state))
    }

    fn successors(&mut self, state: &P::State, g: Cost, f: Cost) -> Vec<Successor<P::State, P::Action>> {
        let mut successors = Vec::new();
        for action in self.problem.actions(state) {
            let next = self.problem.result(state, &action);
            if self.on_path(&next) {
                continue;
            }
            let g = g.saturating_add(self.problem.step_cost(state, &action, &next));
            let estimate = g.saturating_add(self.heuristic.estimate(&next));
            successors.push(Successor {
                f: estimate.max(f),
                g,
                action,
                state: next,
            });
        }
        self.metrics.nodes_generated += successors.len();
        successors
    }

    /// Expand `state` and push its frame.
    #[allow(clippy::too_many_arguments)]
    fn expand(
        &mut self,
        stack: &mut Frames<P>,
        state: P::State,
        g: Cost,
        f: Cost,
        bound: Cost,
        depth: usize,
        budget: &mut Budget,
    ) -> Result<()> {
        budget.step(&mut self.metrics)?;
        self.metrics.record_depth(depth);

        if let Some(path) = self.path.as_mut() {
            path.insert(state.clone());
        }
        let successors = self.successors(&state, g, f);
        self.retained += successors.len();
        self.metrics.record_frontier(self.retained);
        stack.push(Frame {
            state,
            successors,
            bound,
            depth,
        });
        Ok(())
    }

    /// Pop the top frame, backing `revised` up into its parent's chosen
    /// successor.
    fn retire(&mut self, stack: &mut Frames<P>, revised: Cost) {
        if let Some(frame) = stack.pop() {
            self.retained -= frame.successors.len();
            if let Some(path) = self.path.as_mut() {
                path.remove(&frame.state);
            }
        }
        if let Some(parent) = stack.last_mut() {
            parent.successors[0].f = revised;
        }
    }

    fn search(&mut self, initial: P::State, budget: &mut Budget) -> Result<Descent<P::State, P::Action>> {
        if self.problem.is_goal(&initial) {
            return Ok(Descent::Found {
                actions: Vec::new(),
                state: initial,
                cost: 0,
            });
        }

        let f = self.heuristic.estimate(&initial);
        let mut stack = Vec::new();
        self.expand(&mut stack, initial, 0, f, Cost::MAX, 0, budget)?;

        while let Some(frame) = stack.last_mut() {
            frame.successors.sort_by_key(|s| s.f);
            let revised = match frame.successors.first() {
                None => Some(Cost::MAX),
                Some(best) if best.f == Cost::MAX || best.f > frame.bound => Some(best.f),
                Some(_) => None,
            };
            if let Some(revised) = revised {
                self.retire(&mut stack, revised);
                continue;
            }

            let alternative = frame.successors.get(1).map_or(Cost::MAX, |s| s.f);
            let best = &frame.successors[0];
            let (state, g, f) = (best.state.clone(), best.g, best.f);
            let bound = frame.bound.min(alternative);
            let depth = frame.depth + 1;

            if self.problem.is_goal(&state) {
                let actions = stack
                    .iter()
                    .map(|frame| frame.successors[0].action.clone())
                    .collect();
                return Ok(Descent::Found {
                    actions,
                    state,
                    cost: g,
                });
            }
            self.expand(&mut stack, state, g, f, bound, depth, budget)?;
        }
        Ok(Descent::Exhausted)
    }
}

/// Recursive best-first search, optionally refusing to revisit a state
/// already on the current path.
///
/// Without loop avoidance, a zero-cost cycle can keep the search busy
/// until its budget runs out.
pub(crate) fn recursive_best_first<P, H>(
    problem: &P,
    heuristic: &H,
    avoid_loops: bool,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let initial = problem.initial_state();
    let mut recursion = Recursion {
        problem,
        heuristic,
        path: if avoid_loops {
            Some(std::iter::once(initial.clone()).collect())
        } else {
            None
        },
        retained: 0,
        metrics: Metrics::default(),
    };

    match recursion.search(initial, budget)? {
        Descent::Found {
            actions,
            state,
            cost,
        } => {
            let mut metrics = recursion.metrics;
            metrics.path_cost = Some(cost);
            budget.finish(&mut metrics);
            Ok(Solution {
                actions,
                state,
                outcome: Outcome::Goal,
                metrics,
            })
        }
        Descent::Exhausted => Err(budget.exhausted(recursion.metrics)),
    }
}
