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

//! # Registrar Directory
//!
//! The stores that hold the registration data: the course catalog and the
//! student and faculty directories, persisted as comma-separated record
//! files.
//!
//! ## Modules
//!
//! - `records`: record readers and writers for courses, students and faculty.
//! - `catalog`: `CourseCatalog`, sorted by course name and section.
//! - `students`: `StudentDirectory`, which also schedules students promoted
//!   off a course waitlist.
//! - `faculty`: `FacultyDirectory`.
//! - `password`: SHA-256 password hashing.

pub mod catalog;
pub mod error;
pub mod faculty;
pub mod password;
pub mod records;
pub mod students;
