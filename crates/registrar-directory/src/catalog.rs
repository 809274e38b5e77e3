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

//! The course catalog.

use crate::{
    error::DirectoryError,
    records::{CourseRecordReader, RecordReader, save_records, write_records},
};
use registrar_collections::{BoundedList, ContainerError, SequentialList};
use registrar_model::{course::Course, ids::CourseKey, policy::EnrollmentPolicy};
use std::{io::Write, path::Path};
use tracing::info;

/// Every offered course, kept sorted by name and section.
#[derive(Clone, Debug, Default)]
pub struct CourseCatalog {
    courses: BoundedList<Course>,
    policy: EnrollmentPolicy,
}

impl CourseCatalog {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog whose loaded courses are validated against
    /// `policy`.
    #[inline]
    pub fn with_policy(policy: EnrollmentPolicy) -> Self {
        Self {
            courses: BoundedList::new(),
            policy,
        }
    }

    /// Creates an empty catalog under the policy read from `path`, with
    /// `REGISTRAR_*` environment overrides applied.
    pub fn from_policy_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let policy = EnrollmentPolicy::load(path)?;
        info!(?policy, "loaded enrollment policy");
        Ok(Self::with_policy(policy))
    }

    #[inline]
    pub fn policy(&self) -> &EnrollmentPolicy {
        &self.policy
    }

    /// Removes every course.
    pub fn new_catalog(&mut self) {
        info!(removed = self.courses.len(), "cleared course catalog");
        self.courses.clear();
    }

    /// Replaces the catalog with the courses read from `path`.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DirectoryError> {
        let path = path.as_ref();
        self.courses = CourseRecordReader::with_policy(self.policy).from_path(path)?;
        info!(?path, courses = self.courses.len(), "loaded course catalog");
        Ok(())
    }

    /// Adds `course` at its sorted position. Returns `false` if a course
    /// with the same name and section is already listed.
    pub fn add_course(&mut self, course: Course) -> Result<bool, DirectoryError> {
        let key = course.key();
        match self.courses.insert_sorted(course) {
            Ok(_) => {
                info!(course = %key, "added course");
                Ok(true)
            }
            Err(ContainerError::Duplicate) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the course named by `key`. Returns `false` if it is not
    /// listed.
    pub fn remove_course(&mut self, key: &CourseKey) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };
        let removed = self.courses.remove(index).is_ok();
        if removed {
            info!(course = %key, "removed course");
        }
        removed
    }

    pub fn get(&self, key: &CourseKey) -> Option<&Course> {
        self.position(key).and_then(|i| self.courses.get(i).ok())
    }

    /// Mutable lookup, used to enroll in and drop from a course's roll.
    pub fn get_mut(&mut self, key: &CourseKey) -> Option<&mut Course> {
        let index = self.position(key)?;
        self.courses.get_mut(index).ok()
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
    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Name, section, title, meeting and open seats of every course.
    pub fn course_catalog(&self) -> Vec<[String; 5]> {
        self.courses.iter().map(Course::short_display).collect()
    }

    /// Writes the catalog to `path`, one record per course.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DirectoryError> {
        save_records(path, &self.courses)?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), DirectoryError> {
        write_records(writer, &self.courses)?;
        Ok(())
    }

    fn position(&self, key: &CourseKey) -> Option<usize> {
        self.courses.iter().position(|c| c.info().matches(key))
    }
}

impl<'a> IntoIterator for &'a CourseCatalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
