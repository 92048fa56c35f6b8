use core::cmp::{Ordering, Reverse};
use core::fmt;
use std::collections::BinaryHeap;

/// Internal heap entry: a payload tagged with its priority and an insertion
/// sequence number. Ordering looks at `(priority, Reverse(seq))` only, so the
/// payload type never needs to be comparable and equal priorities dequeue in
/// insertion (FIFO) order.
struct Entry<T, P> {
    priority: P,
    seq: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.priority, Reverse(self.seq)).cmp(&(&other.priority, Reverse(other.seq)))
    }
}

/// A max-priority queue: the highest-priority item dequeues first.
///
/// # Behavior
/// * **Order:** `dequeue`/`peek` always yield an item whose priority is
///   greater than or equal to every other held item's priority. Ties break
///   FIFO by insertion order.
/// * **Emptiness:** `dequeue`/`peek` on an empty queue return `None`.
/// * **Complexity:** Binary-heap backed; `enqueue` and `dequeue` are
///   O(log n), `peek` is O(1).
///
/// # Example
///
/// ```rust
/// use classic_collections::PriorityQueue;
///
/// let mut pq = PriorityQueue::new();
/// pq.enqueue("low", 1);
/// pq.enqueue("medium", 2);
/// pq.enqueue("high", 3);
///
/// assert_eq!(pq.dequeue(), Some("high"));
/// assert_eq!(pq.dequeue(), Some("medium"));
/// assert_eq!(pq.dequeue(), Some("low"));
/// assert_eq!(pq.dequeue(), None);
/// ```
pub struct PriorityQueue<T, P: Ord = i64> {
    heap: BinaryHeap<Entry<T, P>>,
    next_seq: u64,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Creates an empty priority queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the highest-priority payload without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.item)
    }

    /// Returns the highest-priority payload together with its priority.
    pub fn peek_with_priority(&self) -> Option<(&T, &P)> {
        self.heap.peek().map(|entry| (&entry.item, &entry.priority))
    }

    // --- Mutation ---

    /// Inserts `item` with the given priority. Higher priorities dequeue
    /// first; among equal priorities, earlier insertions dequeue first.
    pub fn enqueue(&mut self, item: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    /// Removes and returns the highest-priority payload, or `None` if the
    /// queue is empty. The priority tag is dropped with the entry.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    /// Removes all entries and resets the insertion sequence.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: Ord + fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<&Entry<T, P>> = self.heap.iter().collect();
        entries.sort_by(|a, b| b.cmp(a));
        f.debug_list()
            .entries(entries.iter().map(|e| (&e.priority, &e.item)))
            .finish()
    }
}

/// Renders `(priority, item)` pairs in dequeue order.
impl<T: fmt::Display, P: Ord + fmt::Display> fmt::Display for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<&Entry<T, P>> = self.heap.iter().collect();
        entries.sort_by(|a, b| b.cmp(a));
        write!(f, "[")?;
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", entry.priority, entry.item)?;
        }
        write!(f, "]")
    }
}
