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

//! The faculty directory.

use crate::{
    error::DirectoryError,
    password::confirm_password,
    records::{FacultyRecordReader, RecordReader, save_records},
};
use registrar_collections::{CursorList, SequentialList};
use registrar_model::{
    course::Course,
    ids::FacultyId,
    user::{Faculty, UserProfile},
};
use std::path::Path;
use tracing::info;

/// Faculty members in the order they were added.
#[derive(Clone, Debug, Default)]
pub struct FacultyDirectory {
    faculty: CursorList<Faculty>,
}

impl FacultyDirectory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_directory(&mut self) {
        info!(removed = self.faculty.len(), "cleared faculty directory");
        self.faculty.clear();
    }

    /// Replaces the directory with the faculty read from `path`.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DirectoryError> {
        let path = path.as_ref();
        self.faculty = FacultyRecordReader.from_path(path)?;
        info!(?path, faculty = self.faculty.len(), "loaded faculty directory");
        Ok(())
    }

    /// Registers a new faculty member with a confirmed password. Returns
    /// `false` if someone with `id` is already listed.
    #[allow(clippy::too_many_arguments)]
    pub fn add_faculty(
        &mut self,
        first_name: &str,
        last_name: &str,
        id: &str,
        email: &str,
        password: &str,
        repeat: &str,
        max_courses: u8,
    ) -> Result<bool, DirectoryError> {
        let hash = confirm_password(password, repeat)?;
        let profile = UserProfile::new(first_name, last_name, id.parse()?, email, hash)?;
        let faculty = Faculty::new(profile, max_courses)?;
        if self.get(faculty.id()).is_some() {
            return Ok(false);
        }
        info!(faculty = %faculty.id(), "added faculty");
        self.faculty.push_back(faculty)?;
        Ok(true)
    }

    /// Removes the faculty member with `id`. Returns `false` if there is
    /// none.
    pub fn remove_faculty(&mut self, id: &FacultyId) -> bool {
        let mut cursor = self.faculty.cursor_front_mut();
        while let Some(found) = cursor.next().map(|f| f.id() == id) {
            if found {
                let removed = cursor.remove().is_ok();
                if removed {
                    info!(faculty = %id, "removed faculty");
                }
                return removed;
            }
        }
        false
    }

    pub fn get(&self, id: &FacultyId) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.id() == id)
    }

    pub fn get_mut(&mut self, id: &FacultyId) -> Option<&mut Faculty> {
        let index = self.faculty.iter().position(|f| f.id() == id)?;
        self.faculty.get_mut(index).ok()
    }

    /// Makes the faculty member with `id` the instructor of `course`.
    /// Returns `false` if there is no such faculty member.
    pub fn assign_course(
        &mut self,
        id: &FacultyId,
        course: &mut Course,
    ) -> Result<bool, DirectoryError> {
        let Some(faculty) = self.get_mut(id) else {
            return Ok(false);
        };
        faculty.assign_course(course)?;
        info!(
            faculty = %id,
            course = %course.key(),
            overloaded = faculty.is_overloaded(),
            "assigned course"
        );
        Ok(true)
    }

    /// Takes `course` off the schedule of the faculty member with `id`.
    /// Returns `false` if they are unknown or do not teach it.
    pub fn unassign_course(&mut self, id: &FacultyId, course: &mut Course) -> bool {
        let removed = self
            .get_mut(id)
            .is_some_and(|faculty| faculty.unassign_course(course));
        if removed {
            info!(faculty = %id, course = %course.key(), "unassigned course");
        }
        removed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faculty.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faculty.is_empty()
    }

    /// First name, last name and id of every faculty member.
    pub fn faculty_directory(&self) -> Vec<[String; 3]> {
        self.faculty
            .iter()
            .map(|f| {
                [
                    f.profile().first_name().to_string(),
                    f.profile().last_name().to_string(),
                    f.id().to_string(),
                ]
            })
            .collect()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DirectoryError> {
        save_records(path, &self.faculty)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> FacultyDirectory {
        let mut dir = FacultyDirectory::new();
        assert!(dir.add_faculty("Ashely", "Witt", "awitt", "a@witt.net", "pw", "pw", 2).unwrap());
        assert!(dir.add_faculty("Fiona", "Meadows", "fmeadow", "f@m.org", "pw", "pw", 3).unwrap());
        assert!(dir.add_faculty("Brent", "Brewer", "bbrewer", "b@b.co.uk", "pw", "pw", 1).unwrap());
        dir
    }

    fn id(raw: &str) -> FacultyId {
        raw.parse().unwrap()
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let rows = directory().faculty_directory();
        let ids: Vec<&str> = rows.iter().map(|r| r[2].as_str()).collect();
        assert_eq!(ids, vec!["awitt", "fmeadow", "bbrewer"]);
    }

    #[test]
    fn test_add_rejections() {
        let mut dir = directory();
        assert!(!dir.add_faculty("Other", "Witt", "awitt", "o@w.net", "pw", "pw", 1).unwrap());
        assert!(matches!(
            dir.add_faculty("A", "B", "ab", "a@b.com", "pw", "pw", 4),
            Err(DirectoryError::Model(_))
        ));
        assert!(matches!(
            dir.add_faculty("A", "B", "ab", "a@b.com", "pw", "px", 2),
            Err(DirectoryError::PasswordMismatch)
        ));
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn test_remove_through_cursor() {
        let mut dir = directory();
        assert!(dir.remove_faculty(&id("fmeadow")));
        assert!(!dir.remove_faculty(&id("fmeadow")));
        assert!(!dir.remove_faculty(&id("nobody")));
        let rows = dir.faculty_directory();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], "bbrewer");
        assert!(dir.get(&id("bbrewer")).is_some());
    }

    #[test]
    fn test_assign_catalog_courses() {
        use crate::catalog::CourseCatalog;
        use registrar_model::{
            course::CourseInfo, ids::CourseKey, meeting::MeetingTime, schedule::ScheduleError,
        };

        let mut catalog = CourseCatalog::new();
        for (section, days) in [("001", "MW"), ("002", "TH"), ("003", "F")] {
            let meeting = MeetingTime::from_record(days, 1330, 1445).unwrap();
            let info = CourseInfo::new("CSC216", "Software Dev", section, 3, meeting).unwrap();
            catalog.add_course(Course::new(info, None, 10).unwrap()).unwrap();
        }
        let mut dir = directory();
        let witt = id("awitt");

        for section in ["001", "002", "003"] {
            let course = catalog.get_mut(&CourseKey::new("CSC216", section)).unwrap();
            assert!(dir.assign_course(&witt, course).unwrap());
        }
        assert!(dir.get(&witt).unwrap().is_overloaded());
        let first = CourseKey::new("CSC216", "001");
        assert_eq!(
            catalog.get(&first).unwrap().instructor().map(|i| i.as_str()),
            Some("awitt")
        );

        let course = catalog.get_mut(&first).unwrap();
        assert!(matches!(
            dir.assign_course(&id("fmeadow"), course),
            Err(DirectoryError::Schedule(ScheduleError::AssignedToOther { .. }))
        ));
        assert!(!dir.assign_course(&id("nobody"), course).unwrap());

        assert!(dir.unassign_course(&witt, course));
        assert!(!dir.unassign_course(&witt, course));
        assert_eq!(course.instructor(), None);
        assert!(!dir.get(&witt).unwrap().is_overloaded());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("faculty.txt");
        directory().save(&path).unwrap();

        let mut loaded = FacultyDirectory::new();
        loaded.load_from_path(&path).unwrap();
        assert_eq!(loaded.faculty_directory(), directory().faculty_directory());
        assert_eq!(loaded.get(&id("awitt")).unwrap().max_courses(), 2);

        loaded.new_directory();
        assert!(loaded.is_empty());
    }
}
