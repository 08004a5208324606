use crate::constants::{NodeId, Weight};
use crate::error::QueueError;

/// Priority queue implementation using a binary heap.
/// The heap is a min heap, so the element with the lowest distance is always
/// at the top.
///
/// There is no decrease-key. If a node gets a better distance, a second entry
/// is pushed and the stale one stays in the heap until it is popped. Callers
/// have to skip stale entries themselves (see [`crate::search`]).
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: Vec<HeapItem>,
    pushes: usize,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            heap: Vec::new(),
            pushes: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
            pushes: 0,
        }
    }

    /// **Panics** if `item.distance` is NaN.
    pub fn push(&mut self, item: HeapItem) {
        assert!(
            !item.distance.is_nan(),
            "NaN priority for node {}",
            item.node
        );
        self.pushes += 1;
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    pub fn insert(&mut self, distance: Weight, node: NodeId) {
        self.push(HeapItem::new(distance, node));
    }

    /// Removes and returns the item with the smallest distance.
    pub fn extract_min(&mut self) -> Result<HeapItem, QueueError> {
        self.pop().ok_or(QueueError::Empty)
    }

    pub fn pop(&mut self) -> Option<HeapItem> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        min
    }

    pub fn peek(&self) -> Option<&HeapItem> {
        self.heap.first()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of items pushed since the queue was created.
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[parent].distance <= self.heap[idx].distance {
                break;
            }
            self.heap.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.heap[left].distance < self.heap[smallest].distance {
                smallest = left;
            }
            if right < len && self.heap[right].distance < self.heap[smallest].distance {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeapItem {
    pub distance: Weight,
    pub node: NodeId,
}

impl HeapItem {
    pub fn new(distance: Weight, node: NodeId) -> Self {
        HeapItem { distance, node }
    }
}
