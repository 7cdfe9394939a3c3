//! Provides the building blocks for search algorithms

use std::time;

use log::info;

use crate::errors::{Result, SearchError};
use crate::frontier::Priority;
use crate::metrics::Metrics;
use crate::traits::Cost;

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod bidirectional;
pub(crate) mod cache;
pub(crate) mod climbing;
pub(crate) mod deepening;
pub(crate) mod queue;
pub(crate) mod recursive;
pub(crate) mod uniform;

/// Limits and reporting for a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fail with [SearchError::StepLimitExhausted] after this many
    /// expansions.
    pub step_limit: Option<usize>,

    /// Fail with [SearchError::TimeLimitExhausted] once this much time has
    /// passed.
    pub time_limit: Option<time::Duration>,

    /// Log a progress line every this many expansions.
    pub verbose: Option<usize>,
}

/// Per-run accounting, consulted once before every expansion.
pub(crate) struct Budget<'c> {
    options: &'c SearchOptions,
    started: time::Instant,
    cancel: &'c mut dyn FnMut(&Metrics) -> bool,
}

impl<'c> Budget<'c> {
    pub(crate) fn new(options: &'c SearchOptions, cancel: &'c mut dyn FnMut(&Metrics) -> bool) -> Self {
        Self {
            options,
            started: time::Instant::now(),
            cancel,
        }
    }

    /// Account for one expansion, or stop the search if it has run out of
    /// steps, time, or the caller asked it to stop.
    pub(crate) fn step(&mut self, metrics: &mut Metrics) -> Result<()> {
        metrics.elapsed = self.started.elapsed();

        if (self.cancel)(metrics) {
            return Err(SearchError::Cancelled(metrics.clone()));
        }

        if let Some(limit) = self.options.step_limit {
            if metrics.nodes_expanded >= limit {
                return Err(SearchError::StepLimitExhausted(metrics.clone()));
            }
        }

        if let Some(limit) = self.options.time_limit {
            if metrics.elapsed >= limit {
                return Err(SearchError::TimeLimitExhausted(limit, metrics.clone()));
            }
        }

        metrics.nodes_expanded += 1;
        if let Some(every) = self.options.verbose {
            if every > 0 && metrics.nodes_expanded % every == 0 {
                info!("progress: {}", metrics);
            }
        }
        Ok(())
    }

    /// Stamp the final elapsed time onto a run's metrics.
    pub(crate) fn finish(&self, metrics: &mut Metrics) {
        metrics.elapsed = self.started.elapsed();
    }

    /// The failure for a run which ran out of nodes to expand.
    pub(crate) fn exhausted(&self, mut metrics: Metrics) -> SearchError {
        self.finish(&mut metrics);
        SearchError::NoSolutionFound(metrics)
    }
}

/// How a frontier is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Order {
    Lifo,
    Fifo,
    /// By accumulated path cost.
    PathCost,
    /// By heuristic estimate alone.
    Estimate,
    /// By path cost plus estimate, then by estimate.
    Evaluation,
}

/// When a node is checked against the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GoalTest {
    OnGeneration,
    OnExpansion,
}

/// The parts of a frontier-based strategy which the search modes need to
/// know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Policy {
    pub(crate) order: Order,
    pub(crate) goal_test: GoalTest,

    /// Replace a waiting node when a cheaper path to its state turns up.
    pub(crate) replace_cheaper: bool,

    /// Return an already explored state to the frontier when a cheaper
    /// path to it turns up.
    pub(crate) reopen: bool,
}

impl Policy {
    pub(crate) fn priority(&self, path_cost: Cost, estimate: Cost) -> Priority {
        match self.order {
            Order::Lifo | Order::Fifo => Priority::default(),
            Order::PathCost => Priority::new(path_cost, 0),
            Order::Estimate => Priority::new(estimate, 0),
            Order::Evaluation => Priority::new(path_cost.saturating_add(estimate), estimate),
        }
    }

    /// Does this policy need a heuristic estimate for each node?
    pub(crate) fn is_informed(&self) -> bool {
        matches!(self.order, Order::Estimate | Order::Evaluation)
    }
}
