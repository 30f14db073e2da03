//! A FIFO queue, used by the level-order tree renderer.

use std::collections::VecDeque;

/// A first-in, first-out queue backed by a ring buffer. All operations are
/// amortized `O(1)`.
///
/// # Examples
///
/// ```
/// use searchtree::queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.offer('a');
/// queue.offer('b');
///
/// assert_eq!(queue.size(), 2);
/// assert_eq!(queue.poll(), Some('a'));
/// assert_eq!(queue.poll(), Some('b'));
/// assert_eq!(queue.poll(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds `item` to the back of the queue.
    pub fn offer(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the queue, or `None` if the
    /// queue is empty.
    pub fn poll(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The number of queued items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_in_first_out() {
        let mut queue = Queue::default();
        assert!(queue.is_empty());

        for x in 0..4 {
            queue.offer(x);
        }
        assert_eq!(queue.size(), 4);

        // Interleaving keeps FIFO order.
        assert_eq!(queue.poll(), Some(0));
        queue.offer(4);
        for x in 1..5 {
            assert_eq!(queue.poll(), Some(x));
        }
        assert_eq!(queue.poll(), None);
        assert!(queue.is_empty());
    }
}
