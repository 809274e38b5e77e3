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

/// The error type shared by every container in this crate.
///
/// Each variant is a contract violation by the caller; containers never
/// retry or partially apply an operation that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ContainerError {
    /// A positional operation addressed an index outside the valid range.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// The element (or an element equal to it) is already stored.
    #[error("duplicate elements are not allowed")]
    Duplicate,
    /// The container already holds `capacity` elements.
    #[error("container is full: capacity is {capacity}")]
    CapacityExceeded { capacity: usize },
    /// The requested capacity is smaller than the number of stored elements.
    #[error("capacity {requested} is smaller than the current length {len}")]
    InvalidCapacity { requested: usize, len: usize },
    /// `pop` or `dequeue` was called on an empty container.
    #[error("container is empty")]
    Empty,
    /// A cursor operation needs an element returned by `next`/`previous`
    /// since the last structural change.
    #[error("no element has been returned by the cursor to {operation}")]
    IllegalState { operation: &'static str },
}

impl ContainerError {
    /// Returns `true` for errors caused by an invalid index or capacity argument.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::InvalidCapacity { .. }
        )
    }
}
