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

//! # Registrar Collections
//!
//! Sequential containers that refuse duplicate elements and, when bounded,
//! refuse to grow past a configured capacity. Every violation is reported as
//! a [`ContainerError`] instead of a panic.
//!
//! ## Containers
//!
//! - `BoundedList`: array-backed, O(1) indexed access, optional capacity,
//!   doubling growth when unbounded, sorted insertion for `T: Ord`.
//! - `BoundedLinkedList`: singly linked over an index arena, O(1) at both
//!   ends for append and at the front for removal. Backs rosters and queues.
//! - `CursorList`: doubly linked with head/tail sentinels and a mutable,
//!   bidirectional `CursorMut`.
//! - `ArrayStack`/`LinkedStack` and `ArrayQueue`/`LinkedQueue`: LIFO and FIFO
//!   adapters implementing the `Stack` and `Queue` traits.
//!
//! All positional containers implement [`SequentialList`].

mod arena;
pub mod bounded_list;
pub mod cursor_list;
pub mod error;
pub mod linked_list;
pub mod list;
pub mod queue;
pub mod stack;

pub use bounded_list::BoundedList;
pub use cursor_list::{CursorList, CursorMut};
pub use error::ContainerError;
pub use linked_list::BoundedLinkedList;
pub use list::SequentialList;
pub use queue::{ArrayQueue, LinkedQueue, Queue};
pub use stack::{ArrayStack, LinkedStack, Stack};
