use core::fmt;
use std::collections::vec_deque;
use std::collections::VecDeque;

/// A trait generalizing FIFO containers.
///
/// Implemented for [`Queue`] and for `VecDeque<T>`.
pub trait AnyQueue<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn enqueue(&mut self, item: T);
    fn dequeue(&mut self) -> Option<T>;
    fn peek(&self) -> Option<&T>;
    fn clear(&mut self);
}

impl<T> AnyQueue<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }
    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn peek(&self) -> Option<&T> {
        self.front()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// A FIFO queue with dynamic capacity.
///
/// # Behavior
/// * **Order:** Values dequeue in the exact order they were enqueued.
/// * **Emptiness:** `dequeue`/`peek` on an empty queue return `None`.
/// * **Complexity:** Both ends are O(1) amortized (ring buffer backing).
///
/// # Example
///
/// ```rust
/// use classic_collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
/// assert_eq!(queue.dequeue(), Some("first"));
/// assert_eq!(queue.dequeue(), Some("second"));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    // --- Mutation ---

    /// Appends a value at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front value, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> AnyQueue<T> for Queue<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn enqueue(&mut self, item: T) {
        self.enqueue(item);
    }
    fn dequeue(&mut self) -> Option<T> {
        self.dequeue()
    }
    fn peek(&self) -> Option<&T> {
        self.peek()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: VecDeque::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Renders front-to-back.
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue("first");
        queue.enqueue("second");
        queue.enqueue("third");

        assert_eq!(queue.dequeue(), Some("first"));
        assert_eq!(queue.dequeue(), Some("second"));
        assert_eq!(queue.dequeue(), Some("third"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_queue_peek_is_front() {
        let mut queue = Queue::new();
        assert_eq!(queue.peek(), None);
        queue.enqueue(10);
        queue.enqueue(20);
        assert_eq!(queue.peek(), Some(&10));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_queue_clear() {
        let mut queue: Queue<i32> = (0..4).collect();
        assert_eq!(queue.len(), 4);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_queue_any_queue_interop() {
        fn pump<Q: AnyQueue<i32>>(q: &mut Q) -> Vec<i32> {
            for i in 0..3 {
                q.enqueue(i);
            }
            let mut out = Vec::new();
            while let Some(v) = q.dequeue() {
                out.push(v);
            }
            out
        }

        let mut ours: Queue<i32> = Queue::new();
        let mut std_deque: VecDeque<i32> = VecDeque::new();
        assert_eq!(pump(&mut ours), pump(&mut std_deque));
    }

    #[test]
    fn test_queue_display() {
        let queue: Queue<i32> = (1..=3).collect();
        assert_eq!(queue.to_string(), "[1, 2, 3]");
    }
}
