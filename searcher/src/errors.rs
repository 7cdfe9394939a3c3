use std::time;
use thiserror::Error;

use crate::metrics::Metrics;
use crate::search::{Mode, Strategy};

/// Error produced when a search can't be built or fails.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("No solution found after expanding {} nodes", .0.nodes_expanded)]
    NoSolutionFound(Metrics),

    #[error("{strategy} can't run as a {mode}: {reason}")]
    InvalidConfiguration {
        strategy: Strategy,
        mode: Mode,
        reason: &'static str,
    },

    #[error("{0} requires a heuristic function")]
    MissingHeuristic(Strategy),

    #[error("Problem has no goal state or predecessor relation to search backwards from")]
    NotInvertible,

    #[error("Step limit exhausted after {} steps", .0.nodes_expanded)]
    StepLimitExhausted(Metrics),

    #[error("Time limit exhausted after {0:?}")]
    TimeLimitExhausted(time::Duration, Metrics),

    #[error("Search cancelled after expanding {} nodes", .0.nodes_expanded)]
    Cancelled(Metrics),
}

impl SearchError {
    /// Counters accumulated by the run which failed, if it started.
    pub fn metrics(&self) -> Option<&Metrics> {
        match self {
            SearchError::NoSolutionFound(m) => Some(m),
            SearchError::StepLimitExhausted(m) => Some(m),
            SearchError::TimeLimitExhausted(_, m) => Some(m),
            SearchError::Cancelled(m) => Some(m),
            SearchError::InvalidConfiguration { .. }
            | SearchError::MissingHeuristic(_)
            | SearchError::NotInvertible => None,
        }
    }
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
