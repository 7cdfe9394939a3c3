//! Frontier-driven search in tree and graph mode.
//!
//! The strategy chooses the frontier type and the [Policy]; the mode
//! chooses the [Cache]. Tree mode uses [NoCache] and inserts every
//! successor, graph mode uses [ExploredSet] and suppresses repeats.

use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use super::bidirectional;
use super::cache::{Cache, ExploredSet, NoCache};
use super::{Budget, GoalTest, Policy};
use crate::errors::Result;
use crate::frontier::Frontier;
use crate::metrics::Metrics;
use crate::node::{Arena, NodeId};
use crate::search::{Mode, Outcome, Solution};
use crate::traits::{Cost, Heuristic, Problem};

/// One direction of a frontier search: the nodes it has generated, the
/// nodes waiting to be expanded, and what it has seen.
#[derive(Debug)]
pub(crate) struct Explorer<S, A, F, C> {
    pub(crate) arena: Arena<S, A>,
    frontier: F,
    cache: C,
    policy: Policy,
}

impl<S, A, F, C> Explorer<S, A, F, C>
where
    S: Debug + Clone + Eq + Hash,
    A: Clone,
    F: Frontier,
    C: Cache<S>,
{
    pub(crate) fn new(policy: Policy) -> Self {
        Self {
            arena: Arena::new(),
            frontier: F::default(),
            cache: C::default(),
            policy,
        }
    }

    pub(crate) fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    fn enqueue(&mut self, id: NodeId, estimate: Cost) {
        let node = &self.arena[id];
        let priority = self.policy.priority(node.path_cost(), estimate);
        self.cache.enqueue(node.state(), id);
        self.frontier.push(id, priority);
    }

    /// Start from a root node holding `state`.
    pub(crate) fn seed(&mut self, state: S, estimate: Cost) -> NodeId {
        let id = self.arena.root(state);
        self.enqueue(id, estimate);
        id
    }

    /// Take the next node to expand, marking its state as explored.
    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        let id = self.frontier.pop()?;
        self.cache.expand(self.arena[id].state(), id);
        Some(id)
    }

    /// Offer a freshly generated node to the frontier. Returns whether it
    /// was accepted.
    pub(crate) fn offer(&mut self, child: NodeId, estimate: Cost) -> bool {
        let node = &self.arena[child];
        let cost = node.path_cost();

        if let Some(previous) = self.cache.explored(node.state()) {
            if !(self.policy.reopen && cost < self.arena[previous].path_cost()) {
                return false;
            }
            debug!(
                "reopening {:?}: cost {} < {}",
                node.state(),
                cost,
                self.arena[previous].path_cost()
            );
            self.cache.reopen(node.state());
        } else if let Some(previous) = self.cache.queued(node.state()) {
            if !(self.policy.replace_cheaper && cost < self.arena[previous].path_cost()) {
                return false;
            }
            self.frontier.remove(previous);
        }

        self.enqueue(child, estimate);
        true
    }

    /// A node holding this state, either explored or waiting.
    pub(crate) fn seen(&self, state: &S) -> Option<NodeId> {
        self.cache.seen(state)
    }

    /// Number of states this explorer has expanded, when it keeps track.
    pub(crate) fn explored(&self) -> usize {
        self.cache.len()
    }

    pub(crate) fn solution(&self, id: NodeId, mut metrics: Metrics, budget: &Budget) -> Solution<S, A> {
        let node = &self.arena[id];
        metrics.path_cost = Some(node.path_cost());
        budget.finish(&mut metrics);
        Solution {
            actions: self.arena.actions(id),
            state: node.state().clone(),
            outcome: Outcome::Goal,
            metrics,
        }
    }
}

/// Run a frontier search in tree or graph mode, depending on the cache.
pub(crate) fn search<P, H, F, C>(
    problem: &P,
    heuristic: &H,
    policy: Policy,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
    H: Heuristic<P::State>,
    F: Frontier,
    C: Cache<P::State>,
{
    let mut explorer: Explorer<P::State, P::Action, F, C> = Explorer::new(policy);
    let mut metrics = Metrics::default();
    let estimate = |state: &P::State| {
        if policy.is_informed() {
            heuristic.estimate(state)
        } else {
            0
        }
    };

    let initial = problem.initial_state();
    let root = explorer.seed(initial.clone(), estimate(&initial));
    metrics.record_frontier(explorer.frontier_len());
    if policy.goal_test == GoalTest::OnGeneration && problem.is_goal(&initial) {
        return Ok(explorer.solution(root, metrics, budget));
    }

    while let Some(id) = explorer.pop() {
        let state = explorer.arena[id].state().clone();
        if policy.goal_test == GoalTest::OnExpansion && problem.is_goal(&state) {
            return Ok(explorer.solution(id, metrics, budget));
        }

        budget.step(&mut metrics)?;
        metrics.record_depth(explorer.arena[id].depth());
        trace!("expanding {:?}", state);

        for action in problem.actions(&state) {
            let next = problem.result(&state, &action);
            let cost = problem.step_cost(&state, &action, &next);
            let h = estimate(&next);
            let child = explorer.arena.child(id, action, next, cost);
            metrics.nodes_generated += 1;

            if policy.goal_test == GoalTest::OnGeneration
                && problem.is_goal(explorer.arena[child].state())
            {
                return Ok(explorer.solution(child, metrics, budget));
            }
            explorer.offer(child, h);
        }
        metrics.record_frontier(explorer.frontier_len());
    }

    debug!(
        "frontier exhausted after exploring {} states",
        explorer.explored()
    );
    Err(budget.exhausted(metrics))
}

/// Run a frontier strategy in the requested mode.
pub(crate) fn dispatch<P, H, F>(
    problem: &P,
    heuristic: &H,
    policy: Policy,
    mode: Mode,
    budget: &mut Budget,
) -> Result<Solution<P::State, P::Action>>
where
    P: Problem,
    H: Heuristic<P::State>,
    F: Frontier,
{
    match mode {
        Mode::Tree => search::<P, H, F, NoCache<P::State>>(problem, heuristic, policy, budget),
        Mode::Graph => search::<P, H, F, ExploredSet<P::State>>(problem, heuristic, policy, budget),
        Mode::Bidirectional => bidirectional::search::<P, F>(problem, policy, budget),
    }
}
