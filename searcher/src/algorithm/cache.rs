//! Bookkeeping of states already seen, to eliminate repeated work.

use std::collections::HashMap;
use std::default::Default;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::node::NodeId;

/// Defines the behavior required of a search cache.
///
/// A cache tracks two things per state: the node which expanded it, and
/// the node currently waiting for it in the frontier.
pub(crate) trait Cache<S>: Default {
    /// The node which expanded this state, if any has.
    fn explored(&self, state: &S) -> Option<NodeId>;

    /// The node waiting in the frontier for this state, if any is.
    fn queued(&self, state: &S) -> Option<NodeId>;

    fn enqueue(&mut self, state: &S, id: NodeId);

    /// Record that `id` was popped from the frontier and is being expanded.
    fn expand(&mut self, state: &S, id: NodeId);

    /// Forget that a state was explored, so it can be expanded again.
    fn reopen(&mut self, state: &S);

    /// Number of explored states.
    fn len(&self) -> usize;

    /// Any node, explored or waiting, which holds this state.
    fn seen(&self, state: &S) -> Option<NodeId> {
        self.explored(state).or_else(|| self.queued(state))
    }
}

/// Provides no-op caching, for tree search.
#[derive(Debug)]
pub(crate) struct NoCache<S>(PhantomData<S>);

impl<S> Default for NoCache<S> {
    fn default() -> Self {
        NoCache(PhantomData)
    }
}

impl<S> Cache<S> for NoCache<S> {
    fn explored(&self, _state: &S) -> Option<NodeId> {
        None
    }

    fn queued(&self, _state: &S) -> Option<NodeId> {
        None
    }

    fn enqueue(&mut self, _state: &S, _id: NodeId) {}

    fn expand(&mut self, _state: &S, _id: NodeId) {}

    fn reopen(&mut self, _state: &S) {}

    fn len(&self) -> usize {
        0
    }
}

/// Provides a simple hashmap cache which will store every state
/// encountered, for graph search.
#[derive(Debug)]
pub(crate) struct ExploredSet<S>
where
    S: Eq + Hash,
{
    explored: HashMap<S, NodeId>,
    queued: HashMap<S, NodeId>,
}

impl<S> Default for ExploredSet<S>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        ExploredSet {
            explored: HashMap::default(),
            queued: HashMap::default(),
        }
    }
}

impl<S> Cache<S> for ExploredSet<S>
where
    S: Clone + Eq + Hash,
{
    fn explored(&self, state: &S) -> Option<NodeId> {
        self.explored.get(state).copied()
    }

    fn queued(&self, state: &S) -> Option<NodeId> {
        self.queued.get(state).copied()
    }

    fn enqueue(&mut self, state: &S, id: NodeId) {
        self.queued.insert(state.clone(), id);
    }

    fn expand(&mut self, state: &S, id: NodeId) {
        // Only the node currently waiting for a state owns its queue entry;
        // replaced nodes never reach here since the frontier skips them.
        if self.queued.get(state) == Some(&id) {
            self.queued.remove(state);
        }
        self.explored.insert(state.clone(), id);
    }

    fn reopen(&mut self, state: &S) {
        self.explored.remove(state);
    }

    fn len(&self) -> usize {
        self.explored.len()
    }
}
