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

//! Singly linked, capacity-bounded list.
//!
//! Nodes live in a [`NodeArena`] and link to their successor by handle. The
//! list tracks both ends, so `push_back` and `pop_front` are O(1) and the
//! type doubles as the storage for FIFO queues. Positional access walks from
//! the head.

use crate::{
    arena::{NodeArena, NodeIndex},
    error::ContainerError,
    list::{
        SequentialList, check_capacity, check_element_index, check_position_index, check_room,
    },
};

#[derive(Clone, Debug)]
struct Link<T> {
    element: T,
    next: Option<NodeIndex>,
}

/// A node-based list of distinct elements holding at most `capacity` of them.
#[derive(Clone)]
pub struct BoundedLinkedList<T> {
    nodes: NodeArena<Link<T>>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    capacity: usize,
}

impl<T> BoundedLinkedList<T> {
    /// Creates an empty list holding at most `capacity` elements.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity.min(16)),
            head: None,
            tail: None,
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the size limit.
    ///
    /// Fails with [`ContainerError::InvalidCapacity`] if more than `capacity`
    /// elements are already stored.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), ContainerError> {
        check_capacity(capacity, self.nodes.len())?;
        self.capacity = capacity;
        Ok(())
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.nodes.len() >= self.capacity
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes.get(head).element)
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|tail| &self.nodes.get(tail).element)
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let link = self.nodes.remove(head);
        self.head = link.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(link.element)
    }

    /// Removes every element, keeping the size limit.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns the number of arena slots allocated so far, including freed
    /// ones awaiting reuse.
    #[inline]
    pub fn allocated_nodes(&self) -> usize {
        self.nodes.slot_count()
    }

    /// Returns an iterator over the elements from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Returns the handle of the node at `index`.
    #[inline]
    fn node_at(&self, index: usize) -> Option<NodeIndex> {
        let mut current = self.head;
        for _ in 0..index {
            current = self.nodes.get(current?).next;
        }
        current
    }

    /// Links a new node after `prev`, or at the front if `prev` is `None`.
    fn link_after(&mut self, prev: Option<NodeIndex>, element: T) {
        let next = match prev {
            Some(prev) => self.nodes.get(prev).next,
            None => self.head,
        };
        let node = self.nodes.insert(Link { element, next });
        match prev {
            Some(prev) => self.nodes.get_mut(prev).next = Some(node),
            None => self.head = Some(node),
        }
        if next.is_none() {
            self.tail = Some(node);
        }
    }
}

impl<T> BoundedLinkedList<T>
where
    T: PartialEq,
{
    fn check_insert(&self, index: usize, element: &T) -> Result<(), ContainerError> {
        if self.contains(element) {
            return Err(ContainerError::Duplicate);
        }
        check_position_index(index, self.nodes.len())?;
        check_room(self.nodes.len(), self.capacity)
    }
}

impl<T> SequentialList<T> for BoundedLinkedList<T>
where
    T: PartialEq,
{
    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn get(&self, index: usize) -> Result<&T, ContainerError> {
        check_element_index(index, self.nodes.len())?;
        self.iter().nth(index).ok_or(ContainerError::OutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    fn add(&mut self, index: usize, element: T) -> Result<(), ContainerError> {
        self.check_insert(index, &element)?;
        let prev = match index {
            0 => None,
            _ => self.node_at(index - 1),
        };
        self.link_after(prev, element);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ContainerError> {
        let len = self.nodes.len();
        check_element_index(index, len)?;
        if index == 0 {
            return self.pop_front().ok_or(ContainerError::OutOfRange { index, len });
        }

        let prev = self
            .node_at(index - 1)
            .ok_or(ContainerError::OutOfRange { index, len })?;
        let target = self
            .nodes
            .get(prev)
            .next
            .ok_or(ContainerError::OutOfRange { index, len })?;
        let link = self.nodes.remove(target);
        self.nodes.get_mut(prev).next = link.next;
        if self.tail == Some(target) {
            self.tail = Some(prev);
        }
        Ok(link.element)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, ContainerError> {
        let len = self.nodes.len();
        check_element_index(index, len)?;
        if self
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && *e == element)
        {
            return Err(ContainerError::Duplicate);
        }

        let node = self
            .node_at(index)
            .ok_or(ContainerError::OutOfRange { index, len })?;
        Ok(std::mem::replace(
            &mut self.nodes.get_mut(node).element,
            element,
        ))
    }

    #[inline]
    fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|e| e == element)
    }

    fn push_back(&mut self, element: T) -> Result<(), ContainerError> {
        self.check_insert(self.nodes.len(), &element)?;
        self.link_after(self.tail, element);
        Ok(())
    }
}

/// Front-to-back iterator over a [`BoundedLinkedList`].
pub struct Iter<'a, T> {
    nodes: &'a NodeArena<Link<T>>,
    current: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.nodes.get(self.current?);
        self.current = link.next;
        self.remaining -= 1;
        Some(&link.element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoundedLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::fmt::Debug for BoundedLinkedList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedLinkedList")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> std::fmt::Display for BoundedLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoundedLinkedList(len: {}, capacity: {})",
            self.nodes.len(),
            self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect<T: Clone>(list: &BoundedLinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let list: BoundedLinkedList<u8> = BoundedLinkedList::new(3);
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(format!("{}", list), "BoundedLinkedList(len: 0, capacity: 3)");
    }

    #[test]
    fn test_add_at_positions_keeps_ends() {
        let mut list = BoundedLinkedList::new(10);
        list.add(0, 'c').unwrap();
        list.add(0, 'a').unwrap();
        list.add(1, 'b').unwrap();
        list.add(3, 'd').unwrap();
        assert_eq!(collect(&list), vec!['a', 'b', 'c', 'd']);
        assert_eq!(list.front(), Some(&'a'));
        assert_eq!(list.back(), Some(&'d'));
    }

    #[test]
    fn test_error_order_duplicate_before_range_before_capacity() {
        let mut list = BoundedLinkedList::new(1);
        list.push_back(1).unwrap();
        assert_eq!(list.add(5, 1), Err(ContainerError::Duplicate));
        assert_eq!(
            list.add(5, 2),
            Err(ContainerError::OutOfRange { index: 5, len: 1 })
        );
        assert_eq!(
            list.add(1, 2),
            Err(ContainerError::CapacityExceeded { capacity: 1 })
        );
    }

    #[test]
    fn test_remove_tail_updates_back() {
        let mut list = BoundedLinkedList::new(5);
        for v in [1, 2, 3] {
            list.push_back(v).unwrap();
        }
        assert_eq!(list.remove(2), Ok(3));
        assert_eq!(list.back(), Some(&2));
        list.push_back(4).unwrap();
        assert_eq!(collect(&list), vec![1, 2, 4]);
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(
            list.remove(2),
            Err(ContainerError::OutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_pop_front_to_empty_resets_tail() {
        let mut list = BoundedLinkedList::new(2);
        list.push_back("x").unwrap();
        assert_eq!(list.pop_front(), Some("x"));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.back(), None);
        list.push_back("y").unwrap();
        assert_eq!(list.front(), Some(&"y"));
        assert_eq!(list.back(), Some(&"y"));
    }

    #[test]
    fn test_freed_nodes_are_reused() {
        let mut list = BoundedLinkedList::new(4);
        for v in 0..4 {
            list.push_back(v).unwrap();
        }
        list.pop_front();
        list.remove(1).unwrap();
        list.push_back(10).unwrap();
        list.push_back(11).unwrap();
        assert_eq!(list.allocated_nodes(), 4);
        assert_eq!(collect(&list), vec![1, 3, 10, 11]);
    }

    #[test]
    fn test_set_and_get() {
        let mut list = BoundedLinkedList::new(4);
        for v in [1, 2, 3] {
            list.push_back(v).unwrap();
        }
        assert_eq!(list.set(0, 1), Ok(1));
        assert_eq!(list.set(0, 2), Err(ContainerError::Duplicate));
        assert_eq!(list.set(2, 9), Ok(3));
        assert_eq!(list.get(2), Ok(&9));
        assert_eq!(
            list.get(3),
            Err(ContainerError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_set_capacity() {
        let mut list = BoundedLinkedList::new(3);
        list.push_back(1).unwrap();
        list.push_back(2).unwrap();
        assert_eq!(
            list.set_capacity(1),
            Err(ContainerError::InvalidCapacity { requested: 1, len: 2 })
        );
        list.set_capacity(2).unwrap();
        assert!(list.is_full());
    }

    #[test]
    fn test_remove_element() {
        let mut list = BoundedLinkedList::new(3);
        for v in ["a", "b", "c"] {
            list.push_back(v).unwrap();
        }
        assert_eq!(list.remove_element(&"c"), Some("c"));
        assert_eq!(list.back(), Some(&"b"));
        assert_eq!(list.remove_element(&"z"), None);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, u8),
        Remove(usize),
        Set(usize, u8),
        PopFront,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..10, 0u8..12).prop_map(|(i, v)| Op::Add(i, v)),
            (0usize..10).prop_map(Op::Remove),
            (0usize..10, 0u8..12).prop_map(|(i, v)| Op::Set(i, v)),
            Just(Op::PopFront),
        ]
    }

    proptest! {
        #[test]
        fn prop_matches_vec_model(ops in proptest::collection::vec(op(), 0..80)) {
            let mut list = BoundedLinkedList::new(6);
            let mut model: Vec<u8> = Vec::new();
            for op in ops {
                match op {
                    Op::Add(i, v) => {
                        let ok = !model.contains(&v) && i <= model.len() && model.len() < 6;
                        prop_assert_eq!(list.add(i, v).is_ok(), ok);
                        if ok { model.insert(i, v); }
                    }
                    Op::Remove(i) => {
                        let expected = (i < model.len()).then(|| model.remove(i));
                        prop_assert_eq!(list.remove(i).ok(), expected);
                    }
                    Op::Set(i, v) => {
                        let ok = i < model.len()
                            && !model.iter().enumerate().any(|(j, e)| j != i && *e == v);
                        let result = list.set(i, v);
                        prop_assert_eq!(result.is_ok(), ok);
                        if ok { model[i] = v; }
                    }
                    Op::PopFront => {
                        let expected = (!model.is_empty()).then(|| model.remove(0));
                        prop_assert_eq!(list.pop_front(), expected);
                    }
                }
                prop_assert_eq!(collect(&list), model.clone());
                prop_assert_eq!(list.back(), model.last());
                prop_assert!(list.len() <= list.capacity());
            }
        }
    }
}
