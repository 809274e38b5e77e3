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

//! Validation failures raised while building model entities.

use crate::roll::RollError;

/// An entity field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid course name")]
    InvalidCourseName,
    #[error("invalid title")]
    InvalidTitle,
    #[error("invalid section")]
    InvalidSection,
    #[error("invalid credits")]
    InvalidCredits,
    #[error("invalid instructor id")]
    InvalidInstructorId,
    #[error("invalid meeting days and times")]
    InvalidMeeting,
    #[error("invalid first name")]
    InvalidFirstName,
    #[error("invalid last name")]
    InvalidLastName,
    #[error("invalid id")]
    InvalidId,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid password")]
    InvalidPassword,
    #[error("invalid max credits")]
    InvalidMaxCredits,
    #[error("invalid max courses")]
    InvalidMaxCourses,
    #[error(transparent)]
    Roll(#[from] RollError),
}
