use core::fmt;
use std::collections::VecDeque;

use crate::arena::{Arena, NIL};

struct Node<T> {
    value: T,
    left: usize,
    right: usize,
}

/// A binary tree filled by level-order insertion.
///
/// # Behavior
/// * **Insert:** A new node is attached at the first missing left-or-right
///   child found while scanning breadth-first from the root, keeping the
///   tree shape complete. Values carry no ordering relationship.
/// * **Traversals:** Inorder, preorder, postorder, and level-order; each is
///   a non-destructive snapshot of the stored values.
/// * **Height:** −1 for an empty tree, 0 for a single node.
///
/// # Example
///
/// ```rust
/// use classic_collections::BinaryTree;
///
/// let tree: BinaryTree<i32> = (1..=7).collect();
/// assert_eq!(tree.level_order_traversal(), vec![&1, &2, &3, &4, &5, &6, &7]);
/// assert_eq!(tree.inorder_traversal(), vec![&4, &2, &5, &1, &6, &3, &7]);
/// assert_eq!(tree.height(), 2);
/// ```
pub struct BinaryTree<T> {
    arena: Arena<Node<T>>,
    root: usize,
}

impl<T> BinaryTree<T> {
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

    /// Height of the tree: −1 when empty, 0 for a single node, otherwise
    /// `1 + max(height(left), height(right))`.
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    fn height_of(&self, index: usize) -> i32 {
        if index == NIL {
            return -1;
        }
        let node = &self.arena[index];
        1 + self.height_of(node.left).max(self.height_of(node.right))
    }

    // --- Mutation ---

    /// Inserts `value` at the first vacant child slot in breadth-first
    /// order, keeping the tree level-complete.
    pub fn insert(&mut self, value: T) {
        let node = self.arena.insert(Node {
            value,
            left: NIL,
            right: NIL,
        });
        if self.root == NIL {
            self.root = node;
            return;
        }

        let mut frontier = VecDeque::from([self.root]);
        while let Some(current) = frontier.pop_front() {
            if self.arena[current].left == NIL {
                self.arena[current].left = node;
                return;
            }
            frontier.push_back(self.arena[current].left);

            if self.arena[current].right == NIL {
                self.arena[current].right = node;
                return;
            }
            frontier.push_back(self.arena[current].right);
        }
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NIL;
    }

    // --- Traversals ---

    /// Left subtree, node, right subtree.
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

    /// Node, left subtree, right subtree.
    pub fn preorder_traversal(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        self.preorder_into(self.root, &mut out);
        out
    }

    fn preorder_into<'a>(&'a self, index: usize, out: &mut Vec<&'a T>) {
        if index == NIL {
            return;
        }
        let node = &self.arena[index];
        out.push(&node.value);
        self.preorder_into(node.left, out);
        self.preorder_into(node.right, out);
    }

    /// Left subtree, right subtree, node.
    pub fn postorder_traversal(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        self.postorder_into(self.root, &mut out);
        out
    }

    fn postorder_into<'a>(&'a self, index: usize, out: &mut Vec<&'a T>) {
        if index == NIL {
            return;
        }
        let node = &self.arena[index];
        self.postorder_into(node.left, out);
        self.postorder_into(node.right, out);
        out.push(&node.value);
    }

    /// Breadth-first, level by level from the root.
    pub fn level_order_traversal(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        if self.root == NIL {
            return out;
        }
        let mut frontier = VecDeque::from([self.root]);
        while let Some(current) = frontier.pop_front() {
            let node = &self.arena[current];
            out.push(&node.value);
            if node.left != NIL {
                frontier.push_back(node.left);
            }
            if node.right != NIL {
                frontier.push_back(node.right);
            }
        }
        out
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.level_order_traversal()).finish()
    }
}

/// Renders the level-order sequence, e.g. `[1, 2, 3]`.
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.level_order_traversal().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(refs: Vec<&i32>) -> Vec<i32> {
        refs.into_iter().copied().collect()
    }

    #[test]
    fn test_binary_tree_level_order_insert_shape() {
        let tree: BinaryTree<i32> = (1..=7).collect();

        //         1
        //       /   \
        //      2     3
        //     / \   / \
        //    4   5 6   7
        assert_eq!(values(tree.level_order_traversal()), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(values(tree.inorder_traversal()), vec![4, 2, 5, 1, 6, 3, 7]);
        assert_eq!(values(tree.preorder_traversal()), vec![1, 2, 4, 5, 3, 6, 7]);
        assert_eq!(values(tree.postorder_traversal()), vec![4, 5, 2, 6, 7, 3, 1]);
    }

    #[test]
    fn test_binary_tree_height() {
        let mut tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(tree.height(), -1);

        tree.insert(1);
        assert_eq!(tree.height(), 0);

        tree.insert(2);
        tree.insert(3);
        assert_eq!(tree.height(), 1);

        tree.insert(4);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_binary_tree_empty_traversals() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert!(tree.inorder_traversal().is_empty());
        assert!(tree.preorder_traversal().is_empty());
        assert!(tree.postorder_traversal().is_empty());
        assert!(tree.level_order_traversal().is_empty());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_binary_tree_traversal_is_restartable() {
        let tree: BinaryTree<i32> = (1..=4).collect();
        let first = values(tree.inorder_traversal());
        let second = values(tree.inorder_traversal());
        assert_eq!(first, second);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_binary_tree_display() {
        let tree: BinaryTree<i32> = (1..=3).collect();
        assert_eq!(tree.to_string(), "[1, 2, 3]");
    }
}
