//! Search nodes, stored in an arena owned by a single run.
//!
//! Nodes refer to their parent by [NodeId] rather than by reference, so a
//! chain of nodes is a tree of indices and can't form ownership cycles. The
//! whole arena is dropped when the run finishes; only the actions of the
//! winning path are copied out.

use std::ops::Index;

use crate::traits::Cost;

/// Stable identifier of a node within an [Arena].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A point in the search tree: a state plus the path which generated it.
///
/// Nodes never change after construction.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    state: S,
    parent: Option<NodeId>,
    action: Option<A>,
    path_cost: Cost,
    depth: usize,
}

impl<S, A> Node<S, A> {
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was generated from, `None` for a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The action applied to the parent to produce this node.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Accumulated cost from the root.
    pub fn path_cost(&self) -> Cost {
        self.path_cost
    }

    /// Number of actions from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Owns every node created during a run.
#[derive(Debug)]
pub struct Arena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Default for Arena<S, A> {
    fn default() -> Self {
        Arena { nodes: Vec::new() }
    }
}

impl<S, A> Arena<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root node, with no parent and zero cost.
    pub fn root(&mut self, state: S) -> NodeId {
        self.insert(Node {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            depth: 0,
        })
    }

    /// Create the node reached from `parent` by `action`.
    pub fn child(&mut self, parent: NodeId, action: A, state: S, step_cost: Cost) -> NodeId {
        let (path_cost, depth) = {
            let p = &self[parent];
            (p.path_cost.saturating_add(step_cost), p.depth + 1)
        };
        self.insert(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
            depth,
        })
    }

    fn insert(&mut self, node: Node<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<S, A>> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate from a node up through its ancestors to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &Node<S, A>> {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let node = &self[next?];
            next = node.parent;
            Some(node)
        })
    }
}

impl<S, A> Arena<S, A>
where
    A: Clone,
{
    /// Actions along the path from the root to `id`, in the order they
    /// must be applied.
    pub fn actions(&self, id: NodeId) -> Vec<A> {
        let mut actions = self.actions_to_root(id);
        actions.reverse();
        actions
    }

    /// Actions met while walking from `id` up to the root, in walk order.
    pub fn actions_to_root(&self, id: NodeId) -> Vec<A> {
        self.ancestors(id)
            .filter_map(|n| n.action.clone())
            .collect()
    }
}

impl<S, A> Index<NodeId> for Arena<S, A> {
    type Output = Node<S, A>;

    // Ids are only minted by the arena which holds the node.
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
