use std::cmp::Ordering;

use crate::error::RoutingError;

/// A binary min-heap ordered by a caller-supplied comparator.
///
/// The item for which the comparator returns `Less` against every other
/// item is popped first. There is no decrease-key: callers push a fresh
/// entry and discard outdated ones when they surface.
pub struct PriorityQueue<T, F = fn(&T, &T) -> Ordering> {
    heap: Vec<T>,
    compare: F,
}

impl<T: Ord> PriorityQueue<T> {
    /// A queue popping items in ascending `Ord` order.
    pub fn ascending() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self {
            heap: Vec::new(),
            compare,
        }
    }

    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The smallest item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the smallest item.
    ///
    /// Popping an empty queue is a caller bug and yields
    /// [`RoutingError::InvalidOperation`].
    pub fn pop(&mut self) -> Result<T, RoutingError> {
        if self.heap.is_empty() {
            return Err(RoutingError::InvalidOperation("pop from an empty priority queue"));
        }
        // Moves the last element into the root slot.
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.heap[a], &self.heap[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.less(idx, parent) {
                break;
            }
            self.heap.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.less(right, left) {
                smallest = right;
            }
            if !self.less(smallest, idx) {
                break;
            }
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}
