use core::fmt;

use crate::arena::{Arena, NIL};

struct Node<T> {
    value: T,
    next: usize,
}

/// Iterator over list values in forward (next-link) order.
///
/// Bounded by the live node count, so iterating a circular list terminates
/// after exactly one pass around the ring.
pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    current: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 || self.current == NIL {
            return None;
        }
        let node = self.arena.get(self.current)?;
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A singly linked list owning its nodes in an index-linked arena.
///
/// # Overview
/// The list stores the head index only; the tail is found by walking, so
/// `insert_at_tail` is O(n) by design. Nodes carry a value and a `next`
/// link; there is no reverse traversal.
///
/// # Example
///
/// ```rust
/// use classic_collections::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.insert_at_head(1);
/// list.insert_at_tail(2);
/// list.insert_at_tail(3);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// assert!(list.delete(&2));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub struct SinglyLinkedList<T> {
    arena: Arena<Node<T>>,
    head: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: NIL,
        }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == NIL
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            current: self.head,
            remaining: self.arena.len(),
        }
    }

    // --- Mutation ---

    /// Prepends a value; the new node becomes the head. O(1).
    pub fn insert_at_head(&mut self, value: T) {
        let node = self.arena.insert(Node {
            value,
            next: self.head,
        });
        self.head = node;
    }

    /// Appends a value after the current tail. O(n): walks from the head
    /// because no tail link is cached.
    pub fn insert_at_tail(&mut self, value: T) {
        let node = self.arena.insert(Node { value, next: NIL });
        if self.head == NIL {
            self.head = node;
            return;
        }
        let mut current = self.head;
        while self.arena[current].next != NIL {
            current = self.arena[current].next;
        }
        self.arena[current].next = node;
    }

    /// Removes the first node (in head order) whose value equals `value`.
    /// Returns `false` without touching the list when no node matches.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev = NIL;
        let mut current = self.head;
        while current != NIL {
            if self.arena[current].value == *value {
                let next = self.arena[current].next;
                if prev == NIL {
                    self.head = next;
                } else {
                    self.arena[prev].next = next;
                }
                self.arena.remove(current);
                return true;
            }
            prev = current;
            current = self.arena[current].next;
        }
        false
    }

    /// Removes every node, releasing the whole chain at once.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = NIL;
        for value in iter {
            let node = list.arena.insert(Node { value, next: NIL });
            if tail == NIL {
                list.head = node;
            } else {
                list.arena[tail].next = node;
            }
            tail = node;
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders head to tail with diagnostic markers, e.g. `1 (head) -> 2 -> 3 (tail)`.
impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.len();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            if i == 0 {
                write!(f, "{value} (head)")?;
            } else if i == len - 1 {
                write!(f, "{value} (tail)")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

/// A circular singly linked list: the tail's `next` link points back at the
/// head, forming a ring.
///
/// # Invariants
/// * For a non-empty list, following `next` from any node returns to that
///   node after exactly `len` steps.
/// * Every mutation repairs the ring, including removal of the head and of
///   the sole remaining element.
///
/// # Example
///
/// ```rust
/// use classic_collections::CircularSinglyLinkedList;
///
/// let mut ring = CircularSinglyLinkedList::new();
/// ring.insert_at_tail(10);
/// ring.insert_at_tail(20);
/// ring.insert_at_tail(30);
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
/// assert_eq!(ring.to_string(), "10 (head) -> 20 -> 30 (tail) -> (head)");
/// ```
pub struct CircularSinglyLinkedList<T> {
    arena: Arena<Node<T>>,
    head: usize,
}

impl<T> CircularSinglyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: NIL,
        }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == NIL
    }

    /// Iterates exactly one pass around the ring, starting at the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            current: self.head,
            remaining: self.arena.len(),
        }
    }

    /// Index of the node whose `next` is the head. Caller ensures non-empty.
    fn tail(&self) -> usize {
        let mut current = self.head;
        while self.arena[current].next != self.head {
            current = self.arena[current].next;
        }
        current
    }

    // --- Mutation ---

    /// Prepends a value and re-points the tail's wraparound link at it. O(n).
    pub fn insert_at_head(&mut self, value: T) {
        let node = self.arena.insert(Node { value, next: NIL });
        if self.head == NIL {
            self.arena[node].next = node;
        } else {
            let tail = self.tail();
            self.arena[node].next = self.head;
            self.arena[tail].next = node;
        }
        self.head = node;
    }

    /// Appends a value between the current tail and the head. O(n).
    pub fn insert_at_tail(&mut self, value: T) {
        let node = self.arena.insert(Node { value, next: NIL });
        if self.head == NIL {
            self.arena[node].next = node;
            self.head = node;
            return;
        }
        let tail = self.tail();
        self.arena[node].next = self.head;
        self.arena[tail].next = node;
    }

    /// Removes the first node (in head order) whose value equals `value`,
    /// repairing the ring. Returns `false` when no node matches.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        if self.head == NIL {
            return false;
        }
        let mut prev = NIL;
        let mut current = self.head;
        for _ in 0..self.arena.len() {
            if self.arena[current].value == *value {
                let next = self.arena[current].next;
                if next == current {
                    // Sole element: the ring collapses to nothing.
                    self.head = NIL;
                } else {
                    let prev = if prev == NIL { self.tail() } else { prev };
                    self.arena[prev].next = next;
                    if current == self.head {
                        self.head = next;
                    }
                }
                self.arena.remove(current);
                return true;
            }
            prev = current;
            current = self.arena[current].next;
        }
        false
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
    }
}

impl<T> Default for CircularSinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularSinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = NIL;
        for value in iter {
            let node = list.arena.insert(Node { value, next: NIL });
            if tail == NIL {
                list.head = node;
            } else {
                list.arena[tail].next = node;
            }
            tail = node;
        }
        if tail != NIL {
            list.arena[tail].next = list.head;
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularSinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders one full pass with a trailing `-> (head)` loop marker.
impl<T: fmt::Display> fmt::Display for CircularSinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let len = self.len();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            if i == 0 {
                write!(f, "{value} (head)")?;
            } else if i == len - 1 {
                write!(f, "{value} (tail)")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        write!(f, " -> (head)")
    }
}
