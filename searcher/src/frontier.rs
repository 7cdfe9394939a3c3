//! Containers of nodes waiting to be expanded.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt::Debug;

use crate::node::NodeId;
use crate::traits::Cost;

/// Ordering key for prioritized frontiers. Lower sorts first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority {
    pub primary: Cost,
    pub secondary: Cost,
}

impl Priority {
    pub fn new(primary: Cost, secondary: Cost) -> Self {
        Self { primary, secondary }
    }
}

/// Trait used to implement queues of nodes which should be expanded.
///
/// Unordered frontiers ignore the priority they are given.
pub trait Frontier: Debug + Default {
    fn push(&mut self, id: NodeId, priority: Priority);

    fn pop(&mut self) -> Option<NodeId>;

    /// Take a node out of the frontier before it is popped. Returns whether
    /// the node was waiting.
    fn remove(&mut self, id: NodeId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for StackFrontier {
    fn push(&mut self, id: NodeId, _priority: Priority) {
        self.stack.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn remove(&mut self, id: NodeId) -> bool {
        match self.stack.iter().rposition(|n| *n == id) {
            Some(index) => {
                self.stack.remove(index);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for QueueFrontier {
    fn push(&mut self, id: NodeId, _priority: Priority) {
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn remove(&mut self, id: NodeId) -> bool {
        match self.queue.iter().position(|n| *n == id) {
            Some(index) => self.queue.remove(index).is_some(),
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    priority: Priority,
    sequence: u64,
    id: NodeId,
}

/// A priority queue which always yields the lowest [Priority] next.
///
/// Equal priorities come out in insertion order. Removal is lazy: removed
/// entries stay in the heap and are skipped when they surface.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Entry>>,
    live: HashSet<NodeId>,
    sequence: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, priority: Priority) {
        self.heap.push(Reverse(Entry {
            priority,
            sequence: self.sequence,
            id,
        }));
        self.sequence += 1;
        self.live.insert(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.live.remove(&entry.id) {
                return Some(entry.id);
            }
        }
        None
    }

    fn remove(&mut self, id: NodeId) -> bool {
        self.live.remove(&id)
    }

    fn len(&self) -> usize {
        self.live.len()
    }
}
