use core::fmt;

use crate::arena::{Arena, NIL};

struct Node<T> {
    value: T,
    next: usize,
    prev: usize,
}

/// Forward iterator over doubly linked list values, bounded by the live
/// node count so circular rings terminate after one pass.
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

/// Backward iterator: starts at the tail and follows `prev` links.
pub struct IterRev<'a, T> {
    arena: &'a Arena<Node<T>>,
    current: usize,
    remaining: usize,
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 || self.current == NIL {
            return None;
        }
        let node = self.arena.get(self.current)?;
        self.current = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterRev<'_, T> {}

/// A doubly linked list owning its nodes in an index-linked arena.
///
/// # Overview
/// Each node carries `next` and `prev` links; under the arena model both
/// directions are plain indices with no ownership asymmetry. The list
/// stores the head index only — the tail is discovered by walking, so tail
/// insertion is O(n) by design.
///
/// # Example
///
/// ```rust
/// use classic_collections::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.insert_at_head(5);
/// list.insert_at_tail(10);
/// list.insert_at_tail(15);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 10, 15]);
/// assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![15, 10, 5]);
///
/// assert!(list.delete(&10));
/// assert_eq!(list.to_string(), "5 (head) <-> 15 (tail)");
/// ```
pub struct DoublyLinkedList<T> {
    arena: Arena<Node<T>>,
    head: usize,
}

impl<T> DoublyLinkedList<T> {
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

    /// Iterates tail to head. O(n) to locate the tail first.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev {
            arena: &self.arena,
            current: self.tail(),
            remaining: self.arena.len(),
        }
    }

    /// Index of the last node, or `NIL` for an empty list.
    fn tail(&self) -> usize {
        if self.head == NIL {
            return NIL;
        }
        let mut current = self.head;
        while self.arena[current].next != NIL {
            current = self.arena[current].next;
        }
        current
    }

    // --- Mutation ---

    /// Prepends a value; the new node becomes the head. O(1).
    pub fn insert_at_head(&mut self, value: T) {
        let node = self.arena.insert(Node {
            value,
            next: self.head,
            prev: NIL,
        });
        if self.head != NIL {
            self.arena[self.head].prev = node;
        }
        self.head = node;
    }

    /// Appends a value after the current tail. O(n) walk from the head.
    pub fn insert_at_tail(&mut self, value: T) {
        let node = self.arena.insert(Node {
            value,
            next: NIL,
            prev: NIL,
        });
        if self.head == NIL {
            self.head = node;
            return;
        }
        let tail = self.tail();
        self.arena[tail].next = node;
        self.arena[node].prev = tail;
    }

    /// Removes the first node (in head order) whose value equals `value`,
    /// repairing both neighbor links. Returns `false` when no node matches.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while current != NIL {
            if self.arena[current].value == *value {
                let next = self.arena[current].next;
                let prev = self.arena[current].prev;
                if prev == NIL {
                    self.head = next;
                } else {
                    self.arena[prev].next = next;
                }
                if next != NIL {
                    self.arena[next].prev = prev;
                }
                self.arena.remove(current);
                return true;
            }
            current = self.arena[current].next;
        }
        false
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = NIL;
        for value in iter {
            let node = list.arena.insert(Node {
                value,
                next: NIL,
                prev: tail,
            });
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

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders head to tail with diagnostic markers, e.g. `5 (head) <-> 10 <-> 15 (tail)`.
impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.len();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " <-> ")?;
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

/// A circular doubly linked list: the tail's `next` wraps to the head and
/// the head's `prev` wraps to the tail.
///
/// # Invariants
/// * For a non-empty list, `head.prev` is the tail, so tail insertion is
///   O(1) — no walk needed, unlike the non-circular variants.
/// * Following `next` (or `prev`) from any node returns to it after exactly
///   `len` steps; every mutation repairs both wraparound links.
///
/// # Example
///
/// ```rust
/// use classic_collections::CircularDoublyLinkedList;
///
/// let mut ring = CircularDoublyLinkedList::new();
/// ring.insert_at_tail(100);
/// ring.insert_at_tail(200);
/// ring.insert_at_tail(300);
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![100, 200, 300]);
/// assert_eq!(ring.iter_rev().copied().collect::<Vec<_>>(), vec![300, 200, 100]);
/// ```
pub struct CircularDoublyLinkedList<T> {
    arena: Arena<Node<T>>,
    head: usize,
}

impl<T> CircularDoublyLinkedList<T> {
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

    /// Iterates exactly one pass backward, starting at the tail.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        let tail = if self.head == NIL {
            NIL
        } else {
            self.arena[self.head].prev
        };
        IterRev {
            arena: &self.arena,
            current: tail,
            remaining: self.arena.len(),
        }
    }

    // --- Mutation ---

    /// Prepends a value; the ring gains the node just before the old head,
    /// which then becomes the new head. O(1).
    pub fn insert_at_head(&mut self, value: T) {
        self.insert_at_tail(value);
        self.head = self.arena[self.head].prev;
    }

    /// Appends a value between the tail (`head.prev`) and the head. O(1).
    pub fn insert_at_tail(&mut self, value: T) {
        let node = self.arena.insert(Node {
            value,
            next: NIL,
            prev: NIL,
        });
        if self.head == NIL {
            self.arena[node].next = node;
            self.arena[node].prev = node;
            self.head = node;
            return;
        }
        let tail = self.arena[self.head].prev;
        self.arena[tail].next = node;
        self.arena[node].prev = tail;
        self.arena[node].next = self.head;
        self.arena[self.head].prev = node;
    }

    /// Removes the first node (in head order) whose value equals `value`,
    /// repairing neighbor and wraparound links. Returns `false` when no
    /// node matches.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        if self.head == NIL {
            return false;
        }
        let mut current = self.head;
        for _ in 0..self.arena.len() {
            if self.arena[current].value == *value {
                let next = self.arena[current].next;
                let prev = self.arena[current].prev;
                if next == current {
                    // Sole element: the ring collapses to nothing.
                    self.head = NIL;
                } else {
                    self.arena[prev].next = next;
                    self.arena[next].prev = prev;
                    if current == self.head {
                        self.head = next;
                    }
                }
                self.arena.remove(current);
                return true;
            }
            current = self.arena[current].next;
        }
        false
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
    }
}

impl<T> Default for CircularDoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularDoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert_at_tail(value);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders one full pass with a trailing `<-> (head)` loop marker.
impl<T: fmt::Display> fmt::Display for CircularDoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let len = self.len();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " <-> ")?;
            }
            if i == 0 {
                write!(f, "{value} (head)")?;
            } else if i == len - 1 {
                write!(f, "{value} (tail)")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        write!(f, " <-> (head)")
    }
}
