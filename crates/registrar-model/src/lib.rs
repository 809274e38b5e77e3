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

//! # Registrar Model
//!
//! Domain types of the course-registration engine.
//!
//! ## Modules
//!
//! - `roll`: `EnrollmentRoll`, the roster/waitlist engine, and the
//!   `EnrollmentNotifier` port it reports waitlist promotions through.
//! - `meeting`: `MeetingTime`, the weekday/interval conflict predicate and the
//!   `Conflict` trait.
//! - `course`: `CourseInfo` and `Course`, which owns its enrollment roll.
//! - `user`: `UserProfile`, `Student` and `Faculty`.
//! - `schedule`: a student's conflict-free `Schedule`.
//! - `validator`: the course-name state machine.
//! - `policy`: `EnrollmentPolicy`, loaded from JSON and the environment.
//! - `ids`: tagged string identifiers and `CourseKey`.

pub mod course;
pub mod error;
pub mod ids;
pub mod meeting;
pub mod policy;
pub mod roll;
pub mod schedule;
pub mod user;
pub mod validator;
