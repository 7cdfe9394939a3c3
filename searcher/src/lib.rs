//! Generalized search algorithms over user-defined problems.
//!
//! To search a problem, implement the trait [Problem], which describes the
//! initial state, the actions available in each state, their results and
//! costs, and the goal. Then build a [Search] from a [Strategy] and a
//! [Mode], adding a [Heuristic] for the informed strategies, and run it.
//!
//! ```
//! use searcher::{Mode, Problem, Search, Strategy};
//!
//! struct Count(u32);
//!
//! impl Problem for Count {
//!     type State = u32;
//!     type Action = u32;
//!
//!     fn initial_state(&self) -> u32 {
//!         0
//!     }
//!
//!     fn actions(&self, _state: &u32) -> Vec<u32> {
//!         vec![1, 2]
//!     }
//!
//!     fn result(&self, state: &u32, action: &u32) -> u32 {
//!         state + action
//!     }
//!
//!     fn is_goal(&self, state: &u32) -> bool {
//!         *state == self.0
//!     }
//! }
//!
//! let search = Search::new(Strategy::BreadthFirst, Mode::Graph).unwrap();
//! let solution = search.run(&Count(5)).unwrap();
//! assert_eq!(solution.len(), 3);
//! ```

pub mod algorithm;
mod errors;
pub mod frontier;
mod metrics;
pub mod node;
mod search;
mod traits;

#[cfg(test)]
mod testing;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::{Cost, Heuristic, NoHeuristic, Problem};

pub use algorithm::SearchOptions;
pub use frontier::{Frontier, Priority, PriorityFrontier, QueueFrontier, StackFrontier};
pub use metrics::Metrics;
pub use node::{Arena, Node, NodeId};
pub use search::{Mode, Outcome, ParseNameError, Search, Solution, Strategy};
