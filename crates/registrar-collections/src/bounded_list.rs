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

//! Array-backed sequential container.
//!
//! `BoundedList` keeps its elements contiguous, so indexed reads are O(1)
//! while positional inserts and removals shift the tail, O(n). Without a
//! capacity limit the backing storage doubles whenever it fills up, which
//! keeps appends amortized O(1). With a limit set, the list refuses to grow
//! past it.

use crate::{
    error::ContainerError,
    list::{
        SequentialList, check_capacity, check_element_index, check_position_index, check_room,
    },
};

/// Storage reserved by the first insertion into an empty list.
const INITIAL_STORAGE: usize = 10;

/// An array-backed list of distinct elements with an optional size limit.
#[derive(Clone)]
pub struct BoundedList<T> {
    elements: Vec<T>,
    capacity: Option<usize>,
}

impl<T> Default for BoundedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoundedList<T> {
    /// Creates an empty list without a size limit.
    #[inline]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            capacity: None,
        }
    }

    /// Creates an empty list that holds at most `capacity` elements.
    #[inline]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity.min(INITIAL_STORAGE)),
            capacity: Some(capacity),
        }
    }

    /// Returns the size limit, or `None` if the list is unbounded.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Sets a new size limit.
    ///
    /// Fails with [`ContainerError::InvalidCapacity`] if more than `capacity`
    /// elements are already stored.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), ContainerError> {
        check_capacity(capacity, self.elements.len())?;
        self.capacity = Some(capacity);
        Ok(())
    }

    /// Removes the size limit.
    #[inline]
    pub fn unbound(&mut self) {
        self.capacity = None;
    }

    /// Returns `true` if the list holds as many elements as its limit allows.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.elements.len() >= capacity)
    }

    /// Returns the number of elements the backing storage can hold before
    /// it has to grow again.
    #[inline]
    pub fn storage_len(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// The caller must not change the element in a way that alters how it
    /// compares to the other stored elements.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(ContainerError::OutOfRange { index, len })
    }

    /// Removes every element, keeping the size limit.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Doubles the backing storage when it is full.
    #[inline]
    fn grow_if_full(&mut self) {
        let storage = self.elements.capacity();
        if self.elements.len() == storage {
            self.elements.reserve_exact(storage.max(INITIAL_STORAGE));
        }
    }
}

impl<T> BoundedList<T>
where
    T: PartialEq,
{
    /// Returns `true` if an element equal to `element` sits at an index other
    /// than `skip`.
    #[inline]
    fn holds_other(&self, element: &T, skip: usize) -> bool {
        self.elements
            .iter()
            .enumerate()
            .any(|(i, e)| i != skip && e == element)
    }
}

impl<T> BoundedList<T>
where
    T: Ord,
{
    /// Inserts `element` at its sorted position and returns that position.
    ///
    /// The list must already be sorted. Equal elements are rejected like any
    /// other duplicate.
    pub fn insert_sorted(&mut self, element: T) -> Result<usize, ContainerError> {
        match self.elements.binary_search(&element) {
            Ok(_) => Err(ContainerError::Duplicate),
            Err(position) => {
                self.add(position, element)?;
                Ok(position)
            }
        }
    }
}

impl<T> SequentialList<T> for BoundedList<T>
where
    T: PartialEq,
{
    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, ContainerError> {
        check_element_index(index, self.elements.len())?;
        Ok(&self.elements[index])
    }

    fn add(&mut self, index: usize, element: T) -> Result<(), ContainerError> {
        if self.elements.contains(&element) {
            return Err(ContainerError::Duplicate);
        }
        check_position_index(index, self.elements.len())?;
        if let Some(capacity) = self.capacity {
            check_room(self.elements.len(), capacity)?;
        }

        self.grow_if_full();
        self.elements.insert(index, element);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ContainerError> {
        check_element_index(index, self.elements.len())?;
        Ok(self.elements.remove(index))
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, ContainerError> {
        check_element_index(index, self.elements.len())?;
        if self.holds_other(&element, index) {
            return Err(ContainerError::Duplicate);
        }
        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    #[inline]
    fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }
}

impl<T> std::fmt::Debug for BoundedList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedList")
            .field("elements", &self.elements)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> std::fmt::Display for BoundedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.capacity {
            Some(capacity) => write!(
                f,
                "BoundedList(len: {}, capacity: {})",
                self.elements.len(),
                capacity
            ),
            None => write!(f, "BoundedList(len: {}, unbounded)", self.elements.len()),
        }
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for BoundedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
