//! # Classic Collections
//!
//! Classic linear and link-based collections with explicit structural
//! invariants: a fixed-capacity array, stack, queue, priority queue, four
//! linked-list variants, a level-complete binary tree, and an unbalanced
//! binary search tree.
//!
//! ## Key Features
//!
//! * **Two failure disciplines:** Bounds and capacity violations on the
//!   fixed array are [`CollectionError`] values; emptiness and absence
//!   everywhere else are plain `Option`/`bool` results, never errors.
//! * **Arena-owned node graphs:** Linked lists and trees keep their nodes
//!   in an index-linked slot arena owned by the container. Links are
//!   indices, circular structures are safe to traverse and free, and no
//!   node is ever reachable from two containers.
//! * **Bounded ring traversal:** Iterating a circular list always
//!   terminates after exactly one pass over the live nodes.
//! * **Diagnostic rendering:** Every container implements `Display` in its
//!   natural traversal order; linked lists annotate head, tail, and loop.
//! * **Single-threaded by contract:** No internal synchronization; wrap a
//!   container in a lock if it must be shared.
//!
//! ## Examples
//!
//! ### Queue and PriorityQueue
//!
//! ```rust
//! use classic_collections::{PriorityQueue, Queue};
//!
//! let mut queue = Queue::new();
//! queue.enqueue("first");
//! queue.enqueue("second");
//! assert_eq!(queue.dequeue(), Some("first"));
//!
//! let mut pq = PriorityQueue::new();
//! pq.enqueue("low", 1);
//! pq.enqueue("high", 3);
//! pq.enqueue("medium", 2);
//! assert_eq!(pq.dequeue(), Some("high"));
//! ```
//!
//! ### Linked lists
//!
//! ```rust
//! use classic_collections::CircularDoublyLinkedList;
//!
//! let mut ring = CircularDoublyLinkedList::new();
//! ring.insert_at_tail(100);
//! ring.insert_at_tail(200);
//! ring.insert_at_tail(300);
//!
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![100, 200, 300]);
//! assert_eq!(ring.iter_rev().copied().collect::<Vec<_>>(), vec![300, 200, 100]);
//! ```
//!
//! ### Binary search tree
//!
//! ```rust
//! use classic_collections::BinarySearchTree;
//!
//! let mut bst: BinarySearchTree<i32> = [50, 30, 70].into_iter().collect();
//! bst.delete(&30);
//! assert_eq!(bst.inorder_traversal(), vec![&50, &70]);
//! ```

// --- Module Declarations ---

mod arena;

pub mod array;
pub mod binary_search_tree;
pub mod binary_tree;
pub mod doubly_linked;
pub mod error;
pub mod priority_queue;
pub mod queue;
pub mod singly_linked;
pub mod stack;

// --- Re-exports ---

pub use array::FixedArray;
pub use binary_search_tree::BinarySearchTree;
pub use binary_tree::BinaryTree;
pub use doubly_linked::{CircularDoublyLinkedList, DoublyLinkedList};
pub use error::{CollectionError, Result};
pub use priority_queue::PriorityQueue;
pub use queue::{AnyQueue, Queue};
pub use singly_linked::{CircularSinglyLinkedList, SinglyLinkedList};
pub use stack::{AnyStack, Stack};
