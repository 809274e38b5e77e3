// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Slot arena backing the node-based lists.
//!
//! Nodes live in a single `Vec` and refer to each other by `NodeIndex`
//! instead of pointers, so there is no shared ownership between neighbours.
//! Freed slots are threaded into an intrusive free list and handed out again
//! by the next `insert`, keeping the vector as large as the peak population.

use registrar_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for arena node handles.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeIndexTag;

impl TypedIndexTag for NodeIndexTag {
    const NAME: &'static str = "NodeIndex";
}

/// A handle to a node stored in a [`NodeArena`].
pub type NodeIndex = TypedIndex<NodeIndexTag>;

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<NodeIndex> },
}

/// Index-addressed node storage with slot reuse.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<NodeIndex>,
    len: usize,
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NodeArena<N> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of slots ever allocated, occupied or not.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Stores `node`, reusing a freed slot when one is available.
    pub(crate) fn insert(&mut self, node: N) -> NodeIndex {
        self.len += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index.get()];
                self.free_head = match slot {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => {
                        panic!("arena free list points at occupied slot {}", index)
                    }
                };
                *slot = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeIndex::new(self.slots.len() - 1)
            }
        }
    }

    /// Removes and returns the node at `index`, freeing its slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot at `index` is not occupied.
    pub(crate) fn remove(&mut self, index: NodeIndex) -> N {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[index.get()], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(index);
                self.len -= 1;
                node
            }
            Slot::Vacant { next_free } => {
                self.slots[index.get()] = Slot::Vacant { next_free };
                panic!("called `NodeArena::remove` on vacant slot {}", index)
            }
        }
    }

    /// Returns the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the slot at `index` is not occupied.
    #[inline]
    pub(crate) fn get(&self, index: NodeIndex) -> &N {
        match &self.slots[index.get()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("called `NodeArena::get` on vacant slot {}", index),
        }
    }

    /// Returns the node at `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if the slot at `index` is not occupied.
    #[inline]
    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> &mut N {
        match &mut self.slots[index.get()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => {
                panic!("called `NodeArena::get_mut` on vacant slot {}", index)
            }
        }
    }

    /// Drops every node and forgets all slots.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}
