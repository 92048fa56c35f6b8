//! Slot arena backing the link-based containers.
//!
//! Nodes of the linked lists and trees live in a `Vec` of slots owned by
//! their container; links between nodes are plain indices with [`NIL`]
//! standing in for "no node". Freed slots go on a free list and are reused
//! by later insertions, and dropping (or clearing) the arena releases the
//! whole node graph at once, rings included.

use core::ops::{Index, IndexMut};

/// The absent link. Never a valid slot index.
pub(crate) const NIL: usize = usize::MAX;

enum Slot<N> {
    Occupied(N),
    Vacant,
}

pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Vec<usize>,
}

impl<N> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Stores `node`, returning its slot index. Reuses a freed slot when one
    /// is available.
    pub(crate) fn insert(&mut self, node: N) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Removes the node at `index`, freeing the slot for reuse.
    ///
    /// Panics if the slot is vacant; containers only remove indices they
    /// still hold a link to.
    pub(crate) fn remove(&mut self, index: usize) -> N {
        match core::mem::replace(&mut self.slots[index], Slot::Vacant) {
            Slot::Occupied(node) => {
                self.free.push(index);
                node
            }
            Slot::Vacant => panic!("arena: vacant slot {index}"),
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&N> {
        match self.slots.get(index) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Frees every slot, releasing the whole node graph.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

// Containers index the arena only with links they wrote themselves, so a
// vacant hit is a broken structural invariant (same discipline as `slab`).
impl<N> Index<usize> for Arena<N> {
    type Output = N;

    fn index(&self, index: usize) -> &N {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant => panic!("arena: vacant slot {index}"),
        }
    }
}

impl<N> IndexMut<usize> for Arena<N> {
    fn index_mut(&mut self, index: usize) -> &mut N {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant => panic!("arena: vacant slot {index}"),
        }
    }
}
