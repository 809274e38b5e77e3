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

//! Capacity-bounded FIFO queues.
//!
//! Besides the usual enqueue/dequeue pair, queues support looking up and
//! removing an arbitrary element. Course waitlists rely on that when a
//! waitlisted participant drops out before reaching the front.

use crate::{
    bounded_list::BoundedList,
    error::ContainerError,
    linked_list::{self, BoundedLinkedList},
    list::{SequentialList, check_capacity, check_room},
};

/// A first-in, first-out container with a size limit.
pub trait Queue<T> {
    /// Adds `element` at the back.
    ///
    /// Fails with [`ContainerError::CapacityExceeded`] when the queue is full
    /// and [`ContainerError::Duplicate`] when an equal element is queued.
    fn enqueue(&mut self, element: T) -> Result<(), ContainerError>;

    /// Removes and returns the front element, or [`ContainerError::Empty`].
    fn dequeue(&mut self) -> Result<T, ContainerError>;

    /// Returns the front element, or [`ContainerError::Empty`].
    fn front(&self) -> Result<&T, ContainerError>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    /// Changes the size limit; may not drop below the current length.
    fn set_capacity(&mut self, capacity: usize) -> Result<(), ContainerError>;

    /// Returns `true` if an element equal to `element` is queued.
    fn contains(&self, element: &T) -> bool;

    /// Removes the queued element equal to `element`, wherever it sits.
    /// Returns `false` if there was none.
    fn remove_element(&mut self, element: &T) -> bool;
}

/// A queue over a [`BoundedList`]; dequeuing shifts the remaining elements.
#[derive(Clone, Debug)]
pub struct ArrayQueue<T> {
    list: BoundedList<T>,
    capacity: usize,
}

impl<T> ArrayQueue<T> {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            list: BoundedList::new(),
            capacity,
        }
    }

    /// Returns an iterator from front to back.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Queue<T> for ArrayQueue<T>
where
    T: PartialEq,
{
    fn enqueue(&mut self, element: T) -> Result<(), ContainerError> {
        check_room(self.list.len(), self.capacity)?;
        self.list.push_back(element)
    }

    fn dequeue(&mut self) -> Result<T, ContainerError> {
        if self.list.is_empty() {
            return Err(ContainerError::Empty);
        }
        self.list.remove(0)
    }

    fn front(&self) -> Result<&T, ContainerError> {
        self.list.as_slice().first().ok_or(ContainerError::Empty)
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn set_capacity(&mut self, capacity: usize) -> Result<(), ContainerError> {
        check_capacity(capacity, self.list.len())?;
        self.capacity = capacity;
        Ok(())
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.list.contains(element)
    }

    #[inline]
    fn remove_element(&mut self, element: &T) -> bool {
        self.list.remove_element(element).is_some()
    }
}

/// A queue over a [`BoundedLinkedList`] with O(1) enqueue and dequeue.
#[derive(Clone, Debug)]
pub struct LinkedQueue<T> {
    list: BoundedLinkedList<T>,
}

impl<T> LinkedQueue<T> {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            list: BoundedLinkedList::new(capacity),
        }
    }

    /// Returns an iterator from front to back.
    #[inline]
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Queue<T> for LinkedQueue<T>
where
    T: PartialEq,
{
    fn enqueue(&mut self, element: T) -> Result<(), ContainerError> {
        check_room(self.list.len(), self.list.capacity())?;
        self.list.push_back(element)
    }

    #[inline]
    fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.list.pop_front().ok_or(ContainerError::Empty)
    }

    #[inline]
    fn front(&self) -> Result<&T, ContainerError> {
        self.list.front().ok_or(ContainerError::Empty)
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.list.capacity()
    }

    #[inline]
    fn set_capacity(&mut self, capacity: usize) -> Result<(), ContainerError> {
        self.list.set_capacity(capacity)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.list.contains(element)
    }

    #[inline]
    fn remove_element(&mut self, element: &T) -> bool {
        self.list.remove_element(element).is_some()
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = linked_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<Q: Queue<&'static str>>(mut queue: Q) {
        assert_eq!(queue.dequeue(), Err(ContainerError::Empty));
        assert_eq!(queue.front(), Err(ContainerError::Empty));

        queue.enqueue("ann").unwrap();
        queue.enqueue("bob").unwrap();
        queue.enqueue("cy").unwrap();
        assert_eq!(
            queue.enqueue("dee"),
            Err(ContainerError::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(queue.front(), Ok(&"ann"));
        assert!(queue.contains(&"bob"));

        assert!(queue.remove_element(&"bob"));
        assert!(!queue.remove_element(&"bob"));
        assert_eq!(queue.enqueue("cy"), Err(ContainerError::Duplicate));
        queue.enqueue("dee").unwrap();

        assert_eq!(
            queue.set_capacity(2),
            Err(ContainerError::InvalidCapacity { requested: 2, len: 3 })
        );

        assert_eq!(queue.dequeue(), Ok("ann"));
        assert_eq!(queue.dequeue(), Ok("cy"));
        assert_eq!(queue.dequeue(), Ok("dee"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_array_queue() {
        exercise(ArrayQueue::new(3));
    }

    #[test]
    fn test_linked_queue() {
        exercise(LinkedQueue::new(3));
    }

    #[test]
    fn test_linked_queue_iterates_in_fifo_order() {
        let mut queue = LinkedQueue::new(5);
        for v in [3, 1, 2] {
            queue.enqueue(v).unwrap();
        }
        queue.dequeue().unwrap();
        queue.enqueue(9).unwrap();
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 9]);
        assert_eq!((&queue).into_iter().len(), 3);
    }

    #[test]
    fn test_array_queue_iter() {
        let mut queue = ArrayQueue::new(2);
        queue.enqueue('a').unwrap();
        queue.enqueue('b').unwrap();
        assert_eq!(queue.iter().collect::<String>(), "ab");
    }
}
