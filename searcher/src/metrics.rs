//! Counters describing a single search run.

use std::fmt;
use std::time::Duration;

use crate::traits::Cost;

/// Work done by one invocation of a search.
///
/// Each run owns its metrics exclusively; they are handed back to the
/// caller with the solution or inside the error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Nodes whose successors were generated. For recursive best-first
    /// search this counts recursive calls, for hill climbing it counts
    /// evaluated positions.
    pub nodes_expanded: usize,

    /// Successor nodes created.
    pub nodes_generated: usize,

    /// Largest number of nodes held for later expansion at once.
    pub max_frontier_size: usize,

    /// Deepest node expanded.
    pub max_depth: usize,

    /// Depth-limited passes made by iterative deepening.
    pub iterations: usize,

    /// Cost of the returned path, when there is one.
    pub path_cost: Option<Cost>,

    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl Metrics {
    pub(crate) fn record_frontier(&mut self, size: usize) {
        if size > self.max_frontier_size {
            self.max_frontier_size = size;
        }
    }

    pub(crate) fn record_depth(&mut self, depth: usize) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "expanded={} generated={} frontier={} depth={}",
            self.nodes_expanded, self.nodes_generated, self.max_frontier_size, self.max_depth
        )?;
        if self.iterations > 0 {
            write!(f, " iterations={}", self.iterations)?;
        }
        if let Some(cost) = self.path_cost {
            write!(f, " cost={}", cost)?;
        }
        write!(f, " elapsed={:?}", self.elapsed)
    }
}
