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

//! The student directory.
//!
//! Students are kept sorted by last name, first name and id, and no two
//! students share an id. The directory doubles as the enrollment notifier
//! for course rolls: a student promoted off a waitlist gets the course on
//! their schedule.

use crate::{
    error::DirectoryError,
    password::confirm_password,
    records::{RecordReader, StudentRecordReader, save_records},
};
use registrar_collections::{BoundedList, SequentialList};
use registrar_model::{
    course::CourseInfo,
    ids::StudentId,
    roll::EnrollmentNotifier,
    user::{MAX_STUDENT_CREDITS, MIN_STUDENT_CREDITS, Student, UserProfile},
};
use std::path::Path;
use tracing::{info, warn};

#[derive(Clone, Debug, Default)]
pub struct StudentDirectory {
    students: BoundedList<Student>,
}

impl StudentDirectory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every student.
    pub fn new_directory(&mut self) {
        info!(removed = self.students.len(), "cleared student directory");
        self.students.clear();
    }

    /// Replaces the directory with the students read from `path`.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DirectoryError> {
        let path = path.as_ref();
        self.students = StudentRecordReader.from_path(path)?;
        info!(?path, students = self.students.len(), "loaded student directory");
        Ok(())
    }

    /// Registers a new student.
    ///
    /// `password` and `repeat` must match; the stored password is their
    /// hash. A `max_credits` outside the allowed range falls back to the
    /// maximum. Returns `false` if a student with `id` already exists.
    #[allow(clippy::too_many_arguments)]
    pub fn add_student(
        &mut self,
        first_name: &str,
        last_name: &str,
        id: &str,
        email: &str,
        password: &str,
        repeat: &str,
        max_credits: u8,
    ) -> Result<bool, DirectoryError> {
        let hash = confirm_password(password, repeat)?;
        let id: StudentId = id.parse()?;
        if self.position(&id).is_some() {
            return Ok(false);
        }
        let max_credits = if (MIN_STUDENT_CREDITS..=MAX_STUDENT_CREDITS).contains(&max_credits) {
            max_credits
        } else {
            MAX_STUDENT_CREDITS
        };
        let profile = UserProfile::new(first_name, last_name, id, email, hash)?;
        let student = Student::new(profile, max_credits)?;
        let key = student.id().clone();
        self.students.insert_sorted(student)?;
        info!(student = %key, "added student");
        Ok(true)
    }

    /// Removes the student with `id`. Returns `false` if there is none.
    pub fn remove_student(&mut self, id: &StudentId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let removed = self.students.remove(index).is_ok();
        if removed {
            info!(student = %id, "removed student");
        }
        removed
    }

    pub fn get(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: &StudentId) -> Option<&mut Student> {
        let index = self.position(id)?;
        self.students.get_mut(index).ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// First name, last name and id of every student.
    pub fn student_directory(&self) -> Vec<[String; 3]> {
        self.students
            .iter()
            .map(|s| {
                let profile = s.profile();
                [
                    profile.first_name().to_string(),
                    profile.last_name().to_string(),
                    s.id().to_string(),
                ]
            })
            .collect()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DirectoryError> {
        save_records(path, &self.students)?;
        Ok(())
    }

    fn position(&self, id: &StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }
}

impl EnrollmentNotifier<StudentId, CourseInfo> for StudentDirectory {
    fn notify_enrolled(&mut self, participant: &StudentId, course: &CourseInfo) {
        let Some(student) = self.get_mut(participant) else {
            warn!(
                student = %participant,
                course = %course.key(),
                "promoted student is not in the directory"
            );
            return;
        };
        match student.schedule_mut().add_course(course.clone()) {
            Ok(()) => info!(
                student = %participant,
                course = %course.key(),
                "scheduled promoted course"
            ),
            Err(error) => warn!(
                student = %participant,
                course = %course.key(),
                %error,
                "could not schedule promoted course"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::CourseCatalog, password::hash_password};
    use registrar_model::{
        course::Course,
        ids::{CourseKey, FacultyId},
        meeting::MeetingTime,
        roll::{DropOutcome, Enrollment},
    };

    fn directory() -> StudentDirectory {
        let mut dir = StudentDirectory::new();
        assert!(dir.add_student("Zahir", "King", "zking", "z@king.com", "pw", "pw", 15).unwrap());
        assert!(dir.add_student("Lane", "Berg", "lberg", "l@berg.org", "pw", "pw", 14).unwrap());
        assert!(
            dir.add_student("Dylan", "Nolan", "dnolan", "d@nolan.net", "pw", "pw", 30)
                .unwrap()
        );
        dir
    }

    fn id(raw: &str) -> StudentId {
        raw.parse().unwrap()
    }

    #[test]
    fn test_add_student_sorted_with_hashed_password() {
        let dir = directory();
        let rows = dir.student_directory();
        assert_eq!(rows[0], ["Lane", "Berg", "lberg"].map(String::from));
        assert_eq!(rows[2][2], "dnolan");
        let king = dir.get(&id("zking")).unwrap();
        assert_eq!(king.profile().password(), hash_password("pw"));
        assert_eq!(king.max_credits(), 15);
    }

    #[test]
    fn test_out_of_range_credits_default_to_max() {
        let dir = directory();
        assert_eq!(dir.get(&id("dnolan")).unwrap().max_credits(), MAX_STUDENT_CREDITS);
    }

    #[test]
    fn test_add_student_rejections() {
        let mut dir = directory();
        assert!(!dir.add_student("Other", "King", "zking", "o@king.com", "pw", "pw", 15).unwrap());
        assert!(matches!(
            dir.add_student("A", "B", "ab", "a@b.com", "pw", "px", 15),
            Err(DirectoryError::PasswordMismatch)
        ));
        assert!(matches!(
            dir.add_student("A", "B", "ab", "a@b.com", "", "", 15),
            Err(DirectoryError::InvalidPassword)
        ));
        assert!(matches!(
            dir.add_student("A", "B", "ab", "no-at.com", "pw", "pw", 15),
            Err(DirectoryError::Model(_))
        ));
        assert!(matches!(
            dir.add_student("A", "B", "", "a@b.com", "pw", "pw", 15),
            Err(DirectoryError::Model(_))
        ));
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn test_remove_student() {
        let mut dir = directory();
        assert!(dir.remove_student(&id("lberg")));
        assert!(!dir.remove_student(&id("lberg")));
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_save_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("students.txt");
        directory().save(&path).unwrap();

        let mut loaded = StudentDirectory::new();
        loaded.load_from_path(&path).unwrap();
        assert_eq!(loaded.student_directory(), directory().student_directory());
        assert_eq!(
            loaded.get(&id("lberg")).unwrap().profile().password(),
            hash_password("pw")
        );

        loaded.new_directory();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_promotion_lands_on_schedule() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let mut students = StudentDirectory::new();
        let mut catalog = CourseCatalog::new();
        let meeting = MeetingTime::from_record("MW", 1330, 1445).unwrap();
        let info = CourseInfo::new("CSC216", "Software Development", "001", 3, meeting).unwrap();
        let course = Course::new(info, Some(FacultyId::new("sesmith5").unwrap()), 10).unwrap();
        assert!(catalog.add_course(course).unwrap());
        let key = CourseKey::new("CSC216", "001");

        for n in 0..11 {
            let raw = format!("s{n:02}");
            students
                .add_student("First", "Last", &raw, "s@ncsu.edu", "pw", "pw", 18)
                .unwrap();
            let course = catalog.get_mut(&key).unwrap();
            let info = course.info().clone();
            let outcome = course.roll_mut().enroll(id(&raw)).unwrap();
            if outcome == Enrollment::Enrolled {
                students.get_mut(&id(&raw)).unwrap().schedule_mut().add_course(info).unwrap();
            }
        }

        let roll = catalog.get_mut(&key).unwrap().roll_mut();
        assert_eq!(roll.number_on_waitlist(), 1);
        let outcome = roll.drop(&id("s00"), &mut students).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Dropped {
                participant: id("s00"),
                promoted: Some(id("s10")),
            }
        );
        assert!(students.get(&id("s10")).unwrap().schedule().contains(&key));
        assert_eq!(roll.number_on_waitlist(), 0);
    }

    #[test]
    fn test_unknown_promoted_student_is_ignored() {
        let mut students = directory();
        let meeting = MeetingTime::Arranged;
        let info = CourseInfo::new("CSC217", "Lab", "211", 1, meeting).unwrap();
        students.notify_enrolled(&id("ghost"), &info);
        assert!(students.iter().all(|s| s.schedule().is_empty()));
    }
}
