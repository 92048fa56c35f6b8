//! Property-based tests for the container invariants.
//!
//! Each property drives a container with arbitrary operation sequences and
//! checks the structural contract rather than specific values.

use proptest::prelude::*;
use std::collections::BTreeMap;

use classic_collections::{
    BinarySearchTree, CircularDoublyLinkedList, CircularSinglyLinkedList, CollectionError,
    DoublyLinkedList, FixedArray, PriorityQueue, Queue, SinglyLinkedList, Stack,
};

proptest! {
    #[test]
    fn prop_stack_pop_reverses_push(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut stack = Stack::new();
        for &v in &values {
            stack.push(v);
        }
        prop_assert_eq!(stack.len(), values.len());

        let mut popped = Vec::new();
        while let Some(v) = stack.pop() {
            popped.push(v);
        }
        popped.reverse();
        prop_assert_eq!(popped, values);
        prop_assert_eq!(stack.pop(), None);
    }

    #[test]
    fn prop_queue_preserves_order(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut queue = Queue::new();
        for &v in &values {
            queue.enqueue(v);
        }

        let mut dequeued = Vec::new();
        while let Some(v) = queue.dequeue() {
            dequeued.push(v);
        }
        prop_assert_eq!(dequeued, values);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn prop_priority_queue_drains_non_increasing(
        entries in prop::collection::vec((any::<u8>(), -100i64..100), 0..200)
    ) {
        let mut pq = PriorityQueue::new();
        for &(item, priority) in &entries {
            pq.enqueue(item, priority);
        }

        let mut last: Option<i64> = None;
        let mut drained = 0usize;
        while let Some((_, &priority)) = pq.peek_with_priority() {
            if let Some(prev) = last {
                prop_assert!(priority <= prev);
            }
            last = Some(priority);
            pq.dequeue();
            drained += 1;
        }
        prop_assert_eq!(drained, entries.len());
        prop_assert!(pq.is_empty());
    }

    #[test]
    fn prop_array_size_tracks_net_inserts(ops in prop::collection::vec(any::<(bool, u8, i32)>(), 0..100)) {
        let mut arr: FixedArray<i32, 16> = FixedArray::new();
        let mut model: Vec<i32> = Vec::new();

        for (is_insert, raw_index, value) in ops {
            if is_insert {
                let index = (raw_index as usize) % (model.len() + 1);
                match arr.insert(index, value) {
                    Ok(()) => model.insert(index, value),
                    Err(CollectionError::CapacityExceeded { capacity }) => {
                        prop_assert_eq!(capacity, 16);
                        prop_assert_eq!(model.len(), 16);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                }
            } else if !model.is_empty() {
                let index = (raw_index as usize) % model.len();
                prop_assert_eq!(arr.delete(index), Ok(model.remove(index)));
            }
            prop_assert_eq!(arr.len(), model.len());
        }
        for (i, &expected) in model.iter().enumerate() {
            prop_assert_eq!(arr.get(i), Ok(&expected));
        }
    }

    #[test]
    fn prop_singly_list_length_matches_traversal(
        ops in prop::collection::vec((0u8..3, 0i32..20), 0..100)
    ) {
        let mut list = SinglyLinkedList::new();
        let mut model: Vec<i32> = Vec::new();

        for (op, value) in ops {
            match op {
                0 => {
                    list.insert_at_head(value);
                    model.insert(0, value);
                }
                1 => {
                    list.insert_at_tail(value);
                    model.push(value);
                }
                _ => {
                    let removed = list.delete(&value);
                    if let Some(pos) = model.iter().position(|&v| v == value) {
                        prop_assert!(removed);
                        model.remove(pos);
                    } else {
                        prop_assert!(!removed);
                    }
                }
            }
            prop_assert_eq!(list.iter().count(), list.len());
        }
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);
    }

    #[test]
    fn prop_doubly_list_backward_is_reverse_of_forward(
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let mut list = DoublyLinkedList::new();
        for &v in &values {
            list.insert_at_tail(v);
        }

        let forward: Vec<i32> = list.iter().copied().collect();
        let mut backward: Vec<i32> = list.iter_rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward, values);
    }

    #[test]
    fn prop_circular_lists_terminate_after_one_pass(
        values in prop::collection::vec(0i32..50, 1..60),
        victim in 0i32..50
    ) {
        let mut singly: CircularSinglyLinkedList<i32> = values.iter().copied().collect();
        let mut doubly: CircularDoublyLinkedList<i32> = values.iter().copied().collect();

        prop_assert_eq!(singly.iter().count(), values.len());
        prop_assert_eq!(doubly.iter().count(), values.len());
        prop_assert_eq!(doubly.iter_rev().count(), values.len());

        // The ring stays well formed across deletions, down to empty.
        let expect = values.contains(&victim);
        prop_assert_eq!(singly.delete(&victim), expect);
        prop_assert_eq!(doubly.delete(&victim), expect);
        prop_assert_eq!(singly.iter().count(), singly.len());
        prop_assert_eq!(doubly.iter().count(), doubly.len());

        while let Some(&head) = doubly.iter().next() {
            prop_assert!(doubly.delete(&head));
            prop_assert_eq!(doubly.iter().count(), doubly.len());
        }
        prop_assert!(doubly.is_empty());
    }

    #[test]
    fn prop_bst_inorder_sorted_and_search_consistent(
        inserts in prop::collection::vec(0i32..64, 0..150),
        deletes in prop::collection::vec(0i32..64, 0..150)
    ) {
        let mut bst = BinarySearchTree::new();
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();

        for &v in &inserts {
            bst.insert(v);
            *counts.entry(v).or_insert(0) += 1;
        }
        for &v in &deletes {
            let removed = bst.delete(&v);
            match counts.get_mut(&v) {
                Some(count) if *count > 0 => {
                    prop_assert!(removed);
                    *count -= 1;
                }
                _ => prop_assert!(!removed),
            }
        }

        let inorder: Vec<i32> = bst.inorder_traversal().into_iter().copied().collect();
        prop_assert!(inorder.windows(2).all(|w| w[0] <= w[1]));

        let expected: Vec<i32> = counts
            .iter()
            .flat_map(|(&v, &n)| std::iter::repeat(v).take(n))
            .collect();
        prop_assert_eq!(inorder, expected);

        for v in 0..64 {
            prop_assert_eq!(bst.search(&v), counts.get(&v).is_some_and(|&n| n > 0));
        }
    }
}
