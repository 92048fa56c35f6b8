use core::cmp::Ordering;
use core::fmt;

use crate::arena::{Arena, NIL};

struct Node<T> {
    value: T,
    left: usize,
    right: usize,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: NIL,
            right: NIL,
        }
    }
}

/// An unbalanced binary search tree.
///
/// # Behavior
/// * **Ordering:** For every node, values in the left subtree are strictly
///   less than the node's value and values in the right subtree are greater
///   or equal. Duplicates are retained, routed to the right — never
///   rejected or counted.
/// * **No balancing:** Operations are O(h); adversarial insertion order
///   degrades the tree to a linked list. That trade-off is deliberate.
/// * **Absence:** `delete` of a missing value is a no-op (returns `false`);
///   `search` reports presence without error.
///
/// # Example
///
/// ```rust
/// use classic_collections::BinarySearchTree;
///
/// let mut bst: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
/// assert_eq!(
///     bst.inorder_traversal(),
///     vec![&20, &30, &40, &50, &60, &70, &80]
/// );
///
/// assert!(bst.search(&40));
/// assert!(!bst.search(&90));
///
/// bst.delete(&30);
/// assert_eq!(bst.inorder_traversal(), vec![&20, &40, &50, &60, &70, &80]);
/// ```
pub struct BinarySearchTree<T: Ord> {
    arena: Arena<Node<T>>,
    root: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: NIL,
        }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Returns whether a node with a value equal to `value` exists. O(h).
    pub fn search(&self, value: &T) -> bool {
        let mut current = self.root;
        while current != NIL {
            let node = &self.arena[current];
            match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        false
    }

    /// Stored values in ascending order.
    pub fn inorder_traversal(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        self.inorder_into(self.root, &mut out);
        out
    }

    fn inorder_into<'a>(&'a self, index: usize, out: &mut Vec<&'a T>) {
        if index == NIL {
            return;
        }
        let node = &self.arena[index];
        self.inorder_into(node.left, out);
        out.push(&node.value);
        self.inorder_into(node.right, out);
    }

    // --- Mutation ---

    /// Inserts `value` as a new leaf: strictly smaller values descend left,
    /// everything else (duplicates included) descends right. O(h).
    pub fn insert(&mut self, value: T) {
        if self.root == NIL {
            self.root = self.arena.insert(Node::leaf(value));
            return;
        }
        let mut current = self.root;
        loop {
            if value < self.arena[current].value {
                if self.arena[current].left == NIL {
                    let node = self.arena.insert(Node::leaf(value));
                    self.arena[current].left = node;
                    return;
                }
                current = self.arena[current].left;
            } else {
                if self.arena[current].right == NIL {
                    let node = self.arena.insert(Node::leaf(value));
                    self.arena[current].right = node;
                    return;
                }
                current = self.arena[current].right;
            }
        }
    }

    /// Deletes the first node found holding a value equal to `value`.
    /// Returns `false` (no-op) when the value is absent.
    ///
    /// A node with two children is not unlinked itself: the minimum of its
    /// right subtree (the in-order successor) is removed instead and its
    /// value moves into the node's slot, which preserves the ordering
    /// invariant.
    pub fn delete(&mut self, value: &T) -> bool {
        let before = self.arena.len();
        self.root = self.delete_at(self.root, value);
        self.arena.len() < before
    }

    fn delete_at(&mut self, index: usize, value: &T) -> usize {
        if index == NIL {
            return NIL;
        }
        match value.cmp(&self.arena[index].value) {
            Ordering::Less => {
                let new_left = self.delete_at(self.arena[index].left, value);
                self.arena[index].left = new_left;
                index
            }
            Ordering::Greater => {
                let new_right = self.delete_at(self.arena[index].right, value);
                self.arena[index].right = new_right;
                index
            }
            Ordering::Equal => {
                let left = self.arena[index].left;
                let right = self.arena[index].right;
                if left == NIL {
                    self.arena.remove(index);
                    right
                } else if right == NIL {
                    self.arena.remove(index);
                    left
                } else {
                    let (new_right, successor) = self.remove_min(right);
                    let node = &mut self.arena[index];
                    node.right = new_right;
                    node.value = successor;
                    index
                }
            }
        }
    }

    /// Removes the leftmost node of the subtree at `index`, splicing its
    /// right child into its place. Returns the subtree's new root and the
    /// removed value.
    fn remove_min(&mut self, index: usize) -> (usize, T) {
        let left = self.arena[index].left;
        if left == NIL {
            let node = self.arena.remove(index);
            return (node.right, node.value);
        }
        let (new_left, min) = self.remove_min(left);
        self.arena[index].left = new_left;
        (index, min)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NIL;
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder_traversal()).finish()
    }
}

/// Renders the inorder (ascending) sequence, e.g. `[20, 30, 40]`.
impl<T: Ord + fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.inorder_traversal().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
