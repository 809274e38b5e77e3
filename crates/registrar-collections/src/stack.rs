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

//! Capacity-bounded LIFO stacks.

use crate::{
    bounded_list::BoundedList,
    error::ContainerError,
    linked_list::BoundedLinkedList,
    list::{SequentialList, check_capacity, check_room},
};

/// A last-in, first-out container with a size limit.
///
/// Stacks share the content invariant of the lists they are built on: an
/// element equal to one already on the stack is rejected.
pub trait Stack<T> {
    /// Pushes `element` on top.
    ///
    /// Fails with [`ContainerError::CapacityExceeded`] when the stack is full
    /// and [`ContainerError::Duplicate`] when an equal element is stacked.
    fn push(&mut self, element: T) -> Result<(), ContainerError>;

    /// Removes and returns the top element, or [`ContainerError::Empty`].
    fn pop(&mut self) -> Result<T, ContainerError>;

    /// Returns the top element, or [`ContainerError::Empty`].
    fn peek(&self) -> Result<&T, ContainerError>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    /// Changes the size limit; may not drop below the current length.
    fn set_capacity(&mut self, capacity: usize) -> Result<(), ContainerError>;
}

/// A stack whose top is the back of a [`BoundedList`].
#[derive(Clone, Debug)]
pub struct ArrayStack<T> {
    list: BoundedList<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            list: BoundedList::new(),
            capacity,
        }
    }
}

impl<T> Stack<T> for ArrayStack<T>
where
    T: PartialEq,
{
    fn push(&mut self, element: T) -> Result<(), ContainerError> {
        check_room(self.list.len(), self.capacity)?;
        self.list.push_back(element)
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        match self.list.len() {
            0 => Err(ContainerError::Empty),
            len => self.list.remove(len - 1),
        }
    }

    fn peek(&self) -> Result<&T, ContainerError> {
        self.list.as_slice().last().ok_or(ContainerError::Empty)
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
}

/// A stack whose top is the front of a [`BoundedLinkedList`].
#[derive(Clone, Debug)]
pub struct LinkedStack<T> {
    list: BoundedLinkedList<T>,
}

impl<T> LinkedStack<T> {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            list: BoundedLinkedList::new(capacity),
        }
    }
}

impl<T> Stack<T> for LinkedStack<T>
where
    T: PartialEq,
{
    fn push(&mut self, element: T) -> Result<(), ContainerError> {
        check_room(self.list.len(), self.list.capacity())?;
        self.list.add(0, element)
    }

    #[inline]
    fn pop(&mut self) -> Result<T, ContainerError> {
        self.list.pop_front().ok_or(ContainerError::Empty)
    }

    #[inline]
    fn peek(&self) -> Result<&T, ContainerError> {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<S: Stack<u32>>(mut stack: S) {
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(ContainerError::Empty));
        assert_eq!(stack.peek(), Err(ContainerError::Empty));

        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert_eq!(
            stack.push(4),
            Err(ContainerError::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.push(1), Err(ContainerError::Duplicate));

        assert_eq!(
            stack.set_capacity(1),
            Err(ContainerError::InvalidCapacity { requested: 1, len: 2 })
        );
        stack.set_capacity(5).unwrap();
        assert_eq!(stack.capacity(), 5);

        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_array_stack() {
        exercise(ArrayStack::new(3));
    }

    #[test]
    fn test_linked_stack() {
        exercise(LinkedStack::new(3));
    }

    #[test]
    fn test_full_stack_reports_capacity_before_duplicate() {
        let mut stack = LinkedStack::new(1);
        stack.push('a').unwrap();
        assert_eq!(
            stack.push('a'),
            Err(ContainerError::CapacityExceeded { capacity: 1 })
        );
    }
}
