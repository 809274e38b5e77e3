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

//! Doubly linked list with a bidirectional cursor.
//!
//! The first two arena slots hold the head and tail sentinels, so every real
//! node always has a predecessor and a successor and linking never has to
//! special-case the ends. Positional lookups walk from whichever sentinel is
//! closer.
//!
//! [`CursorMut`] borrows the list mutably. While a cursor is live the list
//! cannot be modified through any other path, so a cursor never observes a
//! structural change it did not make itself.

use crate::{
    arena::{NodeArena, NodeIndex},
    error::ContainerError,
    list::{
        SequentialList, check_capacity, check_element_index, check_position_index, check_room,
    },
};

const HEAD: NodeIndex = NodeIndex::new(0);
const TAIL: NodeIndex = NodeIndex::new(1);

#[derive(Clone, Debug)]
struct Link<T> {
    /// `None` only for the two sentinels.
    element: Option<T>,
    prev: NodeIndex,
    next: NodeIndex,
}

/// A doubly linked list of distinct elements with an optional size limit.
#[derive(Clone)]
pub struct CursorList<T> {
    nodes: NodeArena<Link<T>>,
    capacity: Option<usize>,
}

impl<T> Default for CursorList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CursorList<T> {
    /// Creates an empty, unbounded list.
    pub fn new() -> Self {
        let mut nodes = NodeArena::new();
        Self::link_sentinels(&mut nodes);
        Self {
            nodes,
            capacity: None,
        }
    }

    /// Creates an empty list holding at most `capacity` elements.
    pub fn bounded(capacity: usize) -> Self {
        let mut list = Self::new();
        list.capacity = Some(capacity);
        list
    }

    fn link_sentinels(nodes: &mut NodeArena<Link<T>>) {
        let head = nodes.insert(Link {
            element: None,
            prev: HEAD,
            next: TAIL,
        });
        let tail = nodes.insert(Link {
            element: None,
            prev: HEAD,
            next: TAIL,
        });
        debug_assert_eq!((head, tail), (HEAD, TAIL));
    }

    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Sets a new size limit.
    ///
    /// Fails with [`ContainerError::InvalidCapacity`] if more than `capacity`
    /// elements are already stored.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), ContainerError> {
        check_capacity(capacity, self.element_count())?;
        self.capacity = Some(capacity);
        Ok(())
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.nodes.len() - 2
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.element_of(self.nodes.get(HEAD).next)
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.element_of(self.nodes.get(TAIL).prev)
    }

    /// Removes every element, keeping the size limit.
    pub fn clear(&mut self) {
        self.nodes.clear();
        Self::link_sentinels(&mut self.nodes);
    }

    /// Returns an iterator over the elements from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.nodes.get(HEAD).next,
            back: self.nodes.get(TAIL).prev,
            remaining: self.element_count(),
        }
    }

    /// Returns a cursor positioned before the first element.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let next = self.nodes.get(HEAD).next;
        CursorMut {
            list: self,
            next,
            next_index: 0,
            last_returned: None,
        }
    }

    /// Returns a cursor whose first call to `next` yields the element at
    /// `index`. An `index` equal to the length positions the cursor at the end.
    pub fn cursor_at_mut(&mut self, index: usize) -> Result<CursorMut<'_, T>, ContainerError> {
        check_position_index(index, self.element_count())?;
        let next = self.node_at(index);
        Ok(CursorMut {
            list: self,
            next,
            next_index: index,
            last_returned: None,
        })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// The caller must not change the element in a way that alters how it
    /// compares to the other stored elements.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        check_element_index(index, self.element_count())?;
        let node = self.node_at(index);
        Ok(self.element_mut(node))
    }

    #[inline]
    fn element_of(&self, node: NodeIndex) -> Option<&T> {
        self.nodes.get(node).element.as_ref()
    }

    /// Returns the node at position `index`, or the tail sentinel when
    /// `index == len`. Walks from the nearer end.
    fn node_at(&self, index: usize) -> NodeIndex {
        let len = self.element_count();
        if index < len / 2 {
            let mut node = self.nodes.get(HEAD).next;
            for _ in 0..index {
                node = self.nodes.get(node).next;
            }
            node
        } else {
            let mut node = TAIL;
            for _ in index..len {
                node = self.nodes.get(node).prev;
            }
            node
        }
    }

    /// Links a new node in front of `next`.
    fn link_before(&mut self, next: NodeIndex, element: T) -> NodeIndex {
        let prev = self.nodes.get(next).prev;
        let node = self.nodes.insert(Link {
            element: Some(element),
            prev,
            next,
        });
        self.nodes.get_mut(prev).next = node;
        self.nodes.get_mut(next).prev = node;
        node
    }

    /// Unlinks `node` and returns its element.
    ///
    /// # Panics
    ///
    /// Panics if `node` is a sentinel.
    fn unlink(&mut self, node: NodeIndex) -> T {
        assert!(
            node != HEAD && node != TAIL,
            "called `CursorList::unlink` on a sentinel"
        );
        let link = self.nodes.remove(node);
        self.nodes.get_mut(link.prev).next = link.next;
        self.nodes.get_mut(link.next).prev = link.prev;
        match link.element {
            Some(element) => element,
            None => panic!("called `CursorList::unlink` on an empty node {}", node),
        }
    }

    fn element_mut(&mut self, node: NodeIndex) -> &mut T {
        match self.nodes.get_mut(node).element.as_mut() {
            Some(element) => element,
            None => panic!("called `CursorList::element_mut` on a sentinel"),
        }
    }
}

impl<T> CursorList<T>
where
    T: PartialEq,
{
    /// Returns `true` if a node other than `skip` holds an element equal to `element`.
    fn holds_other(&self, element: &T, skip: Option<NodeIndex>) -> bool {
        let mut node = self.nodes.get(HEAD).next;
        while node != TAIL {
            let link = self.nodes.get(node);
            if Some(node) != skip && link.element.as_ref() == Some(element) {
                return true;
            }
            node = link.next;
        }
        false
    }

    fn check_insert(&self, element: &T) -> Result<(), ContainerError> {
        if self.holds_other(element, None) {
            return Err(ContainerError::Duplicate);
        }
        Ok(())
    }

    fn check_room(&self) -> Result<(), ContainerError> {
        match self.capacity {
            Some(capacity) => check_room(self.element_count(), capacity),
            None => Ok(()),
        }
    }

    /// Inserts `element` at the front.
    pub fn push_front(&mut self, element: T) -> Result<(), ContainerError> {
        self.check_insert(&element)?;
        self.check_room()?;
        let first = self.nodes.get(HEAD).next;
        self.link_before(first, element);
        Ok(())
    }
}

impl<T> SequentialList<T> for CursorList<T>
where
    T: PartialEq,
{
    #[inline]
    fn len(&self) -> usize {
        self.element_count()
    }

    fn get(&self, index: usize) -> Result<&T, ContainerError> {
        let len = self.element_count();
        check_element_index(index, len)?;
        self.element_of(self.node_at(index))
            .ok_or(ContainerError::OutOfRange { index, len })
    }

    fn add(&mut self, index: usize, element: T) -> Result<(), ContainerError> {
        self.check_insert(&element)?;
        check_position_index(index, self.element_count())?;
        self.check_room()?;
        let next = self.node_at(index);
        self.link_before(next, element);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ContainerError> {
        check_element_index(index, self.element_count())?;
        let node = self.node_at(index);
        Ok(self.unlink(node))
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, ContainerError> {
        check_element_index(index, self.element_count())?;
        let node = self.node_at(index);
        if self.holds_other(&element, Some(node)) {
            return Err(ContainerError::Duplicate);
        }
        Ok(std::mem::replace(self.element_mut(node), element))
    }

    #[inline]
    fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|e| e == element)
    }

    fn push_back(&mut self, element: T) -> Result<(), ContainerError> {
        self.check_insert(&element)?;
        self.check_room()?;
        self.link_before(TAIL, element);
        Ok(())
    }
}

/// A cursor over a [`CursorList`] that can edit the list as it moves.
///
/// The cursor sits between two elements. `next` and `previous` step over an
/// element and return it; `remove` and `replace` act on the element returned
/// last, and only until the next `insert` or `remove`.
pub struct CursorMut<'a, T> {
    list: &'a mut CursorList<T>,
    /// Node `next` would return; the tail sentinel at the end.
    next: NodeIndex,
    next_index: usize,
    last_returned: Option<NodeIndex>,
}

impl<T> CursorMut<'_, T> {
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next != TAIL
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.list.nodes.get(self.next).prev != HEAD
    }

    /// Index of the element the next call to `next` would return.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Index of the element the next call to `previous` would return.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.next_index.checked_sub(1)
    }

    /// Steps forward and returns the element passed over.
    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        let node = self.next;
        self.next = self.list.nodes.get(node).next;
        self.next_index += 1;
        self.last_returned = Some(node);
        self.list.element_of(node)
    }

    /// Steps backward and returns the element passed over.
    pub fn previous(&mut self) -> Option<&T> {
        if !self.has_previous() {
            return None;
        }
        let node = self.list.nodes.get(self.next).prev;
        self.next = node;
        self.next_index -= 1;
        self.last_returned = Some(node);
        self.list.element_of(node)
    }
}

impl<T> CursorMut<'_, T>
where
    T: PartialEq,
{
    /// Inserts `element` in front of the cursor. A following `next` is
    /// unaffected; a following `previous` returns the new element.
    pub fn insert(&mut self, element: T) -> Result<(), ContainerError> {
        self.list.check_insert(&element)?;
        self.list.check_room()?;
        self.list.link_before(self.next, element);
        self.next_index += 1;
        self.last_returned = None;
        Ok(())
    }

    /// Removes the element most recently returned by `next` or `previous`.
    ///
    /// Fails with [`ContainerError::IllegalState`] if nothing was returned
    /// since the last `insert` or `remove`.
    pub fn remove(&mut self) -> Result<T, ContainerError> {
        let node = self
            .last_returned
            .take()
            .ok_or(ContainerError::IllegalState {
                operation: "remove",
            })?;
        if node == self.next {
            self.next = self.list.nodes.get(node).next;
        } else {
            self.next_index -= 1;
        }
        Ok(self.list.unlink(node))
    }

    /// Replaces the element most recently returned by `next` or `previous`.
    ///
    /// Fails with [`ContainerError::IllegalState`] like [`Self::remove`], and
    /// with [`ContainerError::Duplicate`] if another element equals `element`.
    pub fn replace(&mut self, element: T) -> Result<T, ContainerError> {
        let node = self.last_returned.ok_or(ContainerError::IllegalState {
            operation: "replace",
        })?;
        if self.list.holds_other(&element, Some(node)) {
            return Err(ContainerError::Duplicate);
        }
        Ok(std::mem::replace(self.list.element_mut(node), element))
    }
}

impl<T> std::fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorMut")
            .field("next_index", &self.next_index)
            .field("has_last_returned", &self.last_returned.is_some())
            .finish()
    }
}

/// Double-ended iterator over a [`CursorList`].
pub struct Iter<'a, T> {
    nodes: &'a NodeArena<Link<T>>,
    front: NodeIndex,
    back: NodeIndex,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.nodes.get(self.front);
        self.front = link.next;
        self.remaining -= 1;
        link.element.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.nodes.get(self.back);
        self.back = link.prev;
        self.remaining -= 1;
        link.element.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CursorList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::fmt::Debug for CursorList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
