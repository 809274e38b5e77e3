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

use crate::error::ContainerError;

/// Positional access shared by all sequential containers.
///
/// Implementors uphold the content invariant: no two stored elements compare
/// equal. Elements are Rust values, so the "null element" case of the
/// invariant cannot be expressed and needs no runtime check.
pub trait SequentialList<T>
where
    T: PartialEq,
{
    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if no elements are stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// Fails with [`ContainerError::OutOfRange`] when `index >= len()`.
    fn get(&self, index: usize) -> Result<&T, ContainerError>;

    /// Inserts `element` at `index`, shifting later elements back.
    ///
    /// Fails with [`ContainerError::Duplicate`] if an equal element is stored,
    /// [`ContainerError::OutOfRange`] if `index > len()`, and
    /// [`ContainerError::CapacityExceeded`] if the container is full.
    fn add(&mut self, index: usize, element: T) -> Result<(), ContainerError>;

    /// Removes and returns the element at `index`, shifting later elements forward.
    fn remove(&mut self, index: usize) -> Result<T, ContainerError>;

    /// Replaces the element at `index` and returns the old one.
    ///
    /// Replacing an element with an equal value is allowed; the call fails
    /// with [`ContainerError::Duplicate`] only if an equal value is stored at
    /// some other index.
    fn set(&mut self, index: usize, element: T) -> Result<T, ContainerError>;

    /// Returns the index of the element equal to `element`, if any.
    fn index_of(&self, element: &T) -> Option<usize>;

    /// Returns `true` if an element equal to `element` is stored.
    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Appends `element` at the end.
    #[inline]
    fn push_back(&mut self, element: T) -> Result<(), ContainerError> {
        let len = self.len();
        self.add(len, element)
    }

    /// Removes the element equal to `element` and returns it, if present.
    fn remove_element(&mut self, element: &T) -> Option<T> {
        let index = self.index_of(element)?;
        self.remove(index).ok()
    }
}

/// Checks `index < len`, the bound for `get`, `remove` and `set`.
#[inline]
pub(crate) fn check_element_index(index: usize, len: usize) -> Result<(), ContainerError> {
    if index < len {
        Ok(())
    } else {
        Err(ContainerError::OutOfRange { index, len })
    }
}

/// Checks `index <= len`, the bound for `add`.
#[inline]
pub(crate) fn check_position_index(index: usize, len: usize) -> Result<(), ContainerError> {
    if index <= len {
        Ok(())
    } else {
        Err(ContainerError::OutOfRange { index, len })
    }
}

/// Checks that a bounded container with `len` elements can take one more.
#[inline]
pub(crate) fn check_room(len: usize, capacity: usize) -> Result<(), ContainerError> {
    if len < capacity {
        Ok(())
    } else {
        Err(ContainerError::CapacityExceeded { capacity })
    }
}

/// Checks that `requested` can hold the `len` elements already stored.
#[inline]
pub(crate) fn check_capacity(requested: usize, len: usize) -> Result<(), ContainerError> {
    if requested >= len {
        Ok(())
    } else {
        Err(ContainerError::InvalidCapacity { requested, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_checks() {
        assert!(check_element_index(0, 1).is_ok());
        assert_eq!(
            check_element_index(1, 1),
            Err(ContainerError::OutOfRange { index: 1, len: 1 })
        );
        assert!(check_position_index(1, 1).is_ok());
        assert_eq!(
            check_position_index(2, 1),
            Err(ContainerError::OutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn test_capacity_checks() {
        assert!(check_room(2, 3).is_ok());
        assert_eq!(
            check_room(3, 3),
            Err(ContainerError::CapacityExceeded { capacity: 3 })
        );
        assert!(check_capacity(3, 3).is_ok());
        assert_eq!(
            check_capacity(2, 3),
            Err(ContainerError::InvalidCapacity { requested: 2, len: 3 })
        );
    }
}
