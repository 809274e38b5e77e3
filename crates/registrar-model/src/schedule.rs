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

//! Student and faculty schedules.
//!
//! A student's [`Schedule`] holds the courses they take; a
//! [`FacultySchedule`] holds the sections a faculty member teaches. Neither
//! admits two courses that meet at the same time.

use crate::{
    course::CourseInfo,
    ids::CourseKey,
    meeting::{Conflict, ConflictError},
};
use registrar_collections::{
    BoundedList, ContainerError, CursorList, SequentialList, cursor_list::Iter as AssignedIter,
};

pub const DEFAULT_TITLE: &str = "My Schedule";

/// Errors raised while editing a [`Schedule`] or [`FacultySchedule`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("invalid schedule title")]
    InvalidTitle,
    #[error("you are already enrolled in {0}")]
    AlreadyScheduled(String),
    #[error("{0} is already assigned")]
    AlreadyAssigned(String),
    #[error("{course} is taught by {instructor}")]
    AssignedToOther { course: String, instructor: String },
    #[error("the course cannot be added due to a conflict")]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    Container(#[from] ContainerError),
}

/// A titled list of courses that neither repeat nor overlap in time.
#[derive(Clone, Debug)]
pub struct Schedule {
    title: String,
    courses: BoundedList<CourseInfo>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            courses: BoundedList::new(),
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ScheduleError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ScheduleError::InvalidTitle);
        }
        self.title = title;
        Ok(())
    }

    /// Adds `course` at the end of the schedule.
    ///
    /// Fails if another section of the same course is scheduled or if the
    /// course meets at the same time as a scheduled one.
    pub fn add_course(&mut self, course: CourseInfo) -> Result<(), ScheduleError> {
        for scheduled in self.courses.iter() {
            if scheduled.is_duplicate(&course) {
                return Err(ScheduleError::AlreadyScheduled(course.name().to_string()));
            }
            scheduled.check_conflict(&course)?;
        }
        self.courses.push_back(course)?;
        Ok(())
    }

    /// Removes the offering named by `key`. Returns `false` if it was not
    /// scheduled.
    pub fn remove_course(&mut self, key: &CourseKey) -> bool {
        match self.courses.iter().position(|c| c.matches(key)) {
            Some(index) => self.courses.remove(index).is_ok(),
            None => false,
        }
    }

    /// Restores the default title and removes every course.
    pub fn reset(&mut self) {
        self.title = DEFAULT_TITLE.to_string();
        self.courses.clear();
    }

    /// Returns `true` if [`Self::add_course`] would accept `course`.
    pub fn can_add(&self, course: &CourseInfo) -> bool {
        self.courses
            .iter()
            .all(|c| !c.is_duplicate(course) && c.check_conflict(course).is_ok())
    }

    /// Total credits of the scheduled courses.
    pub fn credits(&self) -> u32 {
        self.courses.iter().map(|c| u32::from(c.credits())).sum()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &CourseKey) -> bool {
        self.courses.iter().any(|c| c.matches(key))
    }

    #[inline]
    pub fn courses(&self) -> std::slice::Iter<'_, CourseInfo> {
        self.courses.iter()
    }

    /// Name, section, title and meeting of each scheduled course.
    pub fn scheduled_courses(&self) -> Vec<[String; 4]> {
        self.courses.iter().map(display_row).collect()
    }
}

/// The sections a faculty member is assigned to teach, in assignment order.
///
/// The schedule itself does not cap the number of sections; exceeding the
/// faculty member's limit is reported by `Faculty::is_overloaded`. Several
/// sections of one course may be assigned as long as they do not overlap.
#[derive(Clone, Debug, Default)]
pub struct FacultySchedule {
    courses: CursorList<CourseInfo>,
}

impl FacultySchedule {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `course`.
    ///
    /// Fails if the same section is already assigned or if it meets at the
    /// same time as an assigned section.
    pub fn assign(&mut self, course: CourseInfo) -> Result<(), ScheduleError> {
        let key = course.key();
        for assigned in self.courses.iter() {
            if assigned.matches(&key) {
                return Err(ScheduleError::AlreadyAssigned(key.to_string()));
            }
            assigned.check_conflict(&course)?;
        }
        self.courses.push_back(course)?;
        Ok(())
    }

    /// Removes the section named by `key` and returns it, if it was assigned.
    pub fn unassign(&mut self, key: &CourseKey) -> Option<CourseInfo> {
        let mut cursor = self.courses.cursor_front_mut();
        while let Some(found) = cursor.next().map(|c| c.matches(key)) {
            if found {
                return cursor.remove().ok();
            }
        }
        None
    }

    /// Removes every assignment and returns the keys that were assigned.
    pub fn reset(&mut self) -> Vec<CourseKey> {
        let keys = self.courses.iter().map(CourseInfo::key).collect();
        self.courses.clear();
        keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &CourseKey) -> bool {
        self.courses.iter().any(|c| c.matches(key))
    }

    #[inline]
    pub fn courses(&self) -> AssignedIter<'_, CourseInfo> {
        self.courses.iter()
    }

    /// Name, section, title and meeting of each assigned section.
    pub fn scheduled_courses(&self) -> Vec<[String; 4]> {
        self.courses.iter().map(display_row).collect()
    }
}

fn display_row(c: &CourseInfo) -> [String; 4] {
    [
        c.name().to_string(),
        c.section().to_string(),
        c.title().to_string(),
        c.meeting().to_string(),
    ]
}
