use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    constants::{NodeId, Weight},
    priority_queue::PriorityQueue,
};

/// Mutable bookkeeping of a single search call. Never shared between calls.
///
/// A node is unseen until it gets a tentative cost, then sits in the frontier
/// (possibly several times with different priorities) until it is settled.
/// Settled nodes never change again.
pub(super) struct SearchState {
    pub(super) queue: PriorityQueue,
    cost: FxHashMap<NodeId, Weight>,
    predecessor: FxHashMap<NodeId, NodeId>,
    closed: FxHashSet<NodeId>,
    settle_order: Vec<NodeId>,
}

impl SearchState {
    pub(super) fn new(start: NodeId, start_priority: Weight) -> Self {
        let mut state = SearchState {
            queue: PriorityQueue::new(),
            cost: FxHashMap::default(),
            predecessor: FxHashMap::default(),
            closed: FxHashSet::default(),
            settle_order: Vec::new(),
        };
        state.cost.insert(start, 0.0);
        state.queue.insert(start_priority, start);
        state
    }

    /// Best known cost from the start, infinity for unseen nodes.
    pub(super) fn cost(&self, node: NodeId) -> Weight {
        self.cost.get(&node).copied().unwrap_or(Weight::INFINITY)
    }

    pub(super) fn is_closed(&self, node: NodeId) -> bool {
        self.closed.contains(&node)
    }

    /// Marks `node` as settled. Returns `false` for a stale queue entry of an
    /// already settled node.
    pub(super) fn settle(&mut self, node: NodeId) -> bool {
        if !self.closed.insert(node) {
            return false;
        }
        self.settle_order.push(node);
        true
    }

    /// Records a better path to `node` via `via` and queues it with `priority`.
    pub(super) fn relax(&mut self, via: NodeId, node: NodeId, cost: Weight, priority: Weight) {
        debug_assert!(!self.is_closed(node));
        self.cost.insert(node, cost);
        self.predecessor.insert(node, via);
        self.queue.insert(priority, node);
    }

    pub(super) fn predecessors(&self) -> &FxHashMap<NodeId, NodeId> {
        &self.predecessor
    }

    pub(super) fn nodes_settled(&self) -> usize {
        self.settle_order.len()
    }

    pub(super) fn into_settle_order(self) -> Vec<NodeId> {
        self.settle_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_queued_with_zero_cost() {
        let state = SearchState::new(7, 12.5);

        assert_eq!(state.cost(7), 0.0);
        assert_eq!(state.cost(8), Weight::INFINITY);
        assert_eq!(state.queue.peek().map(|item| item.distance), Some(12.5));
        assert_eq!(state.nodes_settled(), 0);
    }

    #[test]
    fn settle_discards_stale_entries() {
        let mut state = SearchState::new(1, 0.0);
        state.relax(1, 2, 4.0, 4.0);
        state.relax(1, 2, 3.0, 3.0);

        assert!(state.settle(1));
        assert!(state.settle(2));
        assert!(!state.settle(2));

        assert_eq!(state.cost(2), 3.0);
        assert_eq!(state.predecessors().get(&2), Some(&1));
        assert_eq!(state.into_settle_order(), vec![1, 2]);
    }
}
