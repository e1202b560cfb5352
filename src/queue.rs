use core::cmp::Ordering;

use crate::error::{HuffmanError, Result};
use crate::node::{Node, Symbol};

if_tracing! {
    use tracing::trace;
}

/// A node waiting in the queue, stamped with the order it was inserted in.
#[derive(Debug, Clone)]
struct Entry<S> {
    node: Node<S>,
    sequence: u64,
}

impl<S: Symbol> Entry<S> {
    /// Lighter nodes first; among equal weights the earlier insertion wins.
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.node
            .weight()
            .cmp(&other.node.weight())
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Array-backed binary min-heap of tree nodes keyed by weight.
///
/// Ties are broken by insertion order, so building a tree from the same sequence of
/// inserts always produces the same shape.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<S> {
    heap: Vec<Entry<S>>,
    next_sequence: u64,
}

impl<S: Symbol> MinPriorityQueue<S> {
    pub const fn new() -> Self {
        Self { heap: Vec::new(), next_sequence: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: Vec::with_capacity(capacity), next_sequence: 0 }
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Weight of the node `pop_min` would return next.
    pub fn peek_weight(&self) -> Option<usize> {
        self.heap.first().map(|entry| entry.node.weight())
    }

    pub fn insert(&mut self, node: Node<S>) {
        if self.heap.len() == self.heap.capacity() {
            // double, starting from one slot
            let additional = self.heap.capacity().max(1);
            self.heap.reserve_exact(additional);
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Entry { node, sequence });
        self.swim_up(self.heap.len() - 1);

        if_tracing! {
            trace!(size = self.heap.len(), sequence, "queue insert");
        }
    }

    pub fn pop_min(&mut self) -> Result<Node<S>> {
        if self.heap.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let Some(entry) = self.heap.pop() else {
            return Err(HuffmanError::EmptyQueue);
        };
        self.sink_down(0);

        if_tracing! {
            trace!(size = self.heap.len(), weight = entry.node.weight(), "queue pop");
        }

        Ok(entry.node)
    }

    fn swim_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.heap[parent].cmp_priority(&self.heap[index]) != Ordering::Greater {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sink_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }

            // equal children: stay on the left
            let right = left + 1;
            let smaller = if right < len && self.heap[right].cmp_priority(&self.heap[left]) == Ordering::Less {
                right
            } else {
                left
            };

            if self.heap[index].cmp_priority(&self.heap[smaller]) != Ordering::Greater {
                break;
            }
            self.heap.swap(index, smaller);
            index = smaller;
        }
    }

    /// Checks `weight(parent(i)) <= weight(i)` for every non-root slot.
    pub fn holds_heap_invariant(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[parent(i)].node.weight() <= self.heap[i].node.weight())
    }
}

impl<S: Symbol> Default for MinPriorityQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

const fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights_in_pop_order(queue: &mut MinPriorityQueue<char>) -> Vec<usize> {
        let mut weights = Vec::new();
        while let Ok(node) = queue.pop_min() {
            weights.push(node.weight());
        }
        weights
    }

    #[test]
    fn pop_on_empty_queue_is_an_error() {
        let mut queue = MinPriorityQueue::<char>::new();
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.pop_min(), Err(HuffmanError::EmptyQueue));
    }

    #[test]
    fn pops_in_weight_order() {
        let mut queue = MinPriorityQueue::new();
        queue.insert(Node::leaf('a', 1));
        assert_eq!(queue.size(), 1);
        queue.insert(Node::leaf('b', 2));
        queue.insert(Node::leaf('c', 3));
        assert_eq!(queue.size(), 3);

        assert_eq!(queue.pop_min().map(|n| n.symbol()), Ok(Some('a')));
        assert_eq!(queue.size(), 2);

        for (i, weight) in [9usize, 4, 7, 0, 12, 4, 1].into_iter().enumerate() {
            queue.insert(Node::leaf(char::from(b'd' + i as u8), weight));
        }
        assert_eq!(queue.size(), 9);
        assert_eq!(weights_in_pop_order(&mut queue), vec![0, 1, 2, 3, 4, 4, 7, 9, 12]);
    }

    #[test]
    fn equal_weights_pop_in_insertion_order() {
        let mut queue = MinPriorityQueue::new();
        for symbol in ['q', 'a', 'z', 'm'] {
            queue.insert(Node::leaf(symbol, 5));
        }
        let order: Vec<char> = std::iter::from_fn(|| queue.pop_min().ok())
            .filter_map(|node| node.symbol())
            .collect();
        assert_eq!(order, vec!['q', 'a', 'z', 'm']);
    }

    #[test]
    fn capacity_doubles_when_full() {
        let mut queue = MinPriorityQueue::with_capacity(2);
        while queue.size() < queue.capacity() {
            queue.insert(Node::leaf('a', 1));
        }
        let full = queue.capacity();
        queue.insert(Node::leaf('b', 1));
        assert!(queue.capacity() >= 2 * full);
        assert_eq!(queue.size(), full + 1);
        assert!(queue.holds_heap_invariant());
    }

    #[test]
    fn invariant_survives_mixed_inserts_and_pops() {
        let mut queue = MinPriorityQueue::new();
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        for round in 0..500u32 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            if round % 3 == 2 {
                let _ = queue.pop_min();
            } else {
                queue.insert(Node::leaf(b'x', (state % 1000) as usize));
            }
            assert!(queue.holds_heap_invariant(), "heap broken after round {round}");
        }

        let mut previous = 0;
        while let Ok(node) = queue.pop_min() {
            assert!(node.weight() >= previous);
            previous = node.weight();
            assert!(queue.holds_heap_invariant());
        }
    }

    #[test]
    fn peek_reports_lightest_weight() {
        let mut queue = MinPriorityQueue::new();
        assert_eq!(queue.peek_weight(), None);
        queue.insert(Node::merge(Node::leaf('a', 3), Node::leaf('b', 3)));
        queue.insert(Node::leaf('c', 2));
        assert_eq!(queue.peek_weight(), Some(2));
    }
}
