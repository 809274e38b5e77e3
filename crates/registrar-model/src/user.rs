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

//! Students and faculty.
//!
//! Both share a [`UserProfile`]: names, a tagged id, an email address and a
//! password hash. The hash is opaque here; directories compute it.

use crate::{
    course::{Course, CourseInfo},
    error::ModelError,
    ids::{CourseKey, FacultyId, FacultyTag, Id, StudentId, StudentTag},
    schedule::{FacultySchedule, Schedule, ScheduleError},
};

pub const MIN_STUDENT_CREDITS: u8 = 3;
pub const MAX_STUDENT_CREDITS: u8 = 18;
pub const MIN_FACULTY_COURSES: u8 = 1;
pub const MAX_FACULTY_COURSES: u8 = 3;

/// Identity fields shared by every kind of user.
pub struct UserProfile<T> {
    first_name: String,
    last_name: String,
    id: Id<T>,
    email: String,
    password: String,
}

impl<T> UserProfile<T> {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        id: Id<T>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let mut profile = Self {
            first_name: String::new(),
            last_name: String::new(),
            id,
            email: String::new(),
            password: String::new(),
        };
        profile.set_first_name(first_name)?;
        profile.set_last_name(last_name)?;
        profile.set_email(email)?;
        profile.set_password(password)?;
        Ok(profile)
    }

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[inline]
    pub fn id(&self) -> &Id<T> {
        &self.id
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), ModelError> {
        let first_name = first_name.into();
        if !is_record_field(&first_name) {
            return Err(ModelError::InvalidFirstName);
        }
        self.first_name = first_name;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), ModelError> {
        let last_name = last_name.into();
        if !is_record_field(&last_name) {
            return Err(ModelError::InvalidLastName);
        }
        self.last_name = last_name;
        Ok(())
    }

    /// Accepts an address with an `@` followed, somewhere later, by a `.`.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ModelError> {
        let email = email.into();
        if !is_record_field(&email) {
            return Err(ModelError::InvalidEmail);
        }
        match (email.find('@'), email.rfind('.')) {
            (Some(at), Some(dot)) if dot > at => {}
            _ => return Err(ModelError::InvalidEmail),
        }
        self.email = email;
        Ok(())
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> Result<(), ModelError> {
        let password = password.into();
        if !is_record_field(&password) {
            return Err(ModelError::InvalidPassword);
        }
        self.password = password;
        Ok(())
    }

    /// `first,last,id,email,password` as written to record files.
    fn record_prefix(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.first_name, self.last_name, self.id, self.email, self.password
        )
    }
}

/// Non-empty and free of the record separator.
#[inline]
fn is_record_field(value: &str) -> bool {
    !value.is_empty() && !value.contains(',')
}

impl<T> Clone for UserProfile<T> {
    fn clone(&self) -> Self {
        Self {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            id: self.id.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl<T> std::fmt::Debug for UserProfile<T>
where
    T: crate::ids::IdTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserProfile")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// A student and their schedule.
///
/// Students order by last name, first name, then id; two students are equal
/// when all three match.
#[derive(Clone, Debug)]
pub struct Student {
    profile: UserProfile<StudentTag>,
    max_credits: u8,
    schedule: Schedule,
}

impl Student {
    pub fn new(profile: UserProfile<StudentTag>, max_credits: u8) -> Result<Self, ModelError> {
        let mut student = Self {
            profile,
            max_credits: MAX_STUDENT_CREDITS,
            schedule: Schedule::new(),
        };
        student.set_max_credits(max_credits)?;
        Ok(student)
    }

    /// Creates a student allowed the maximum of 18 credits.
    #[inline]
    pub fn with_default_credits(profile: UserProfile<StudentTag>) -> Self {
        Self {
            profile,
            max_credits: MAX_STUDENT_CREDITS,
            schedule: Schedule::new(),
        }
    }

    #[inline]
    pub fn profile(&self) -> &UserProfile<StudentTag> {
        &self.profile
    }

    #[inline]
    pub fn profile_mut(&mut self) -> &mut UserProfile<StudentTag> {
        &mut self.profile
    }

    #[inline]
    pub fn id(&self) -> &StudentId {
        self.profile.id()
    }

    #[inline]
    pub fn max_credits(&self) -> u8 {
        self.max_credits
    }

    pub fn set_max_credits(&mut self, max_credits: u8) -> Result<(), ModelError> {
        if !(MIN_STUDENT_CREDITS..=MAX_STUDENT_CREDITS).contains(&max_credits) {
            return Err(ModelError::InvalidMaxCredits);
        }
        self.max_credits = max_credits;
        Ok(())
    }

    #[inline]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    #[inline]
    pub fn schedule_mut(&mut self) -> &mut Schedule {
        &mut self.schedule
    }

    /// Returns `true` if the schedule admits `course` and the credit total
    /// stays within this student's maximum.
    pub fn can_add(&self, course: &CourseInfo) -> bool {
        self.schedule.can_add(course)
            && self.schedule.credits() + u32::from(course.credits()) <= u32::from(self.max_credits)
    }

    /// `first,last,id,email,password,max_credits`.
    pub fn to_record(&self) -> String {
        format!("{},{}", self.profile.record_prefix(), self.max_credits)
    }

    fn sort_key(&self) -> (&str, &str, &StudentId) {
        (
            self.profile.last_name(),
            self.profile.first_name(),
            self.profile.id(),
        )
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Student {}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_record())
    }
}

/// A faculty member and the sections they teach. Faculty compare equal
/// when their ids match.
#[derive(Clone, Debug)]
pub struct Faculty {
    profile: UserProfile<FacultyTag>,
    max_courses: u8,
    schedule: FacultySchedule,
}

impl Faculty {
    pub fn new(profile: UserProfile<FacultyTag>, max_courses: u8) -> Result<Self, ModelError> {
        let mut faculty = Self {
            profile,
            max_courses: MIN_FACULTY_COURSES,
            schedule: FacultySchedule::new(),
        };
        faculty.set_max_courses(max_courses)?;
        Ok(faculty)
    }

    #[inline]
    pub fn profile(&self) -> &UserProfile<FacultyTag> {
        &self.profile
    }

    #[inline]
    pub fn profile_mut(&mut self) -> &mut UserProfile<FacultyTag> {
        &mut self.profile
    }

    #[inline]
    pub fn id(&self) -> &FacultyId {
        self.profile.id()
    }

    #[inline]
    pub fn max_courses(&self) -> u8 {
        self.max_courses
    }

    pub fn set_max_courses(&mut self, max_courses: u8) -> Result<(), ModelError> {
        if !(MIN_FACULTY_COURSES..=MAX_FACULTY_COURSES).contains(&max_courses) {
            return Err(ModelError::InvalidMaxCourses);
        }
        self.max_courses = max_courses;
        Ok(())
    }

    #[inline]
    pub fn schedule(&self) -> &FacultySchedule {
        &self.schedule
    }

    /// Returns `true` if more sections are assigned than `max_courses`.
    #[inline]
    pub fn is_overloaded(&self) -> bool {
        self.schedule.len() > usize::from(self.max_courses)
    }

    /// Assigns `course` to this faculty member and records them as its
    /// instructor.
    ///
    /// Fails if another instructor teaches the course, if it is already
    /// assigned here, or if it conflicts with an assigned section.
    pub fn assign_course(&mut self, course: &mut Course) -> Result<(), ScheduleError> {
        if let Some(instructor) = course.instructor().filter(|i| *i != self.id()) {
            return Err(ScheduleError::AssignedToOther {
                course: course.key().to_string(),
                instructor: instructor.to_string(),
            });
        }
        self.schedule.assign(course.info().clone())?;
        course.set_instructor(Some(self.id().clone()));
        Ok(())
    }

    /// Removes `course` from this faculty member's sections and clears its
    /// instructor. Returns `false` if it was not assigned here.
    pub fn unassign_course(&mut self, course: &mut Course) -> bool {
        if self.schedule.unassign(&course.key()).is_none() {
            return false;
        }
        if course.instructor() == Some(self.id()) {
            course.set_instructor(None);
        }
        true
    }

    /// Drops every assignment and returns the keys of the sections that were
    /// assigned; their courses still name this instructor until the caller
    /// clears them.
    pub fn reset_schedule(&mut self) -> Vec<CourseKey> {
        self.schedule.reset()
    }

    /// `first,last,id,email,password,max_courses`.
    pub fn to_record(&self) -> String {
        format!("{},{}", self.profile.record_prefix(), self.max_courses)
    }
}

impl PartialEq for Faculty {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Faculty {}

impl std::fmt::Display for Faculty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::MeetingTime;

    fn profile<T>(first: &str, last: &str, id: &str) -> UserProfile<T> {
        UserProfile::new(first, last, Id::new(id).unwrap(), "x@ncsu.edu", "hash").unwrap()
    }

    fn course(name: &str, credits: u8, days: &str, start: u16, end: u16) -> CourseInfo {
        CourseInfo::new(
            name,
            "Title",
            "001",
            credits,
            MeetingTime::from_record(days, start, end).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_profile_validation() {
        let id = || StudentId::new("zking").unwrap();
        assert_eq!(
            UserProfile::new("", "King", id(), "z@ncsu.edu", "pw").unwrap_err(),
            ModelError::InvalidFirstName
        );
        assert_eq!(
            UserProfile::new("Zahir", "", id(), "z@ncsu.edu", "pw").unwrap_err(),
            ModelError::InvalidLastName
        );
        for email in ["", "zncsu.edu", "z@ncsuedu", "z.king@ncsu", "a,b@ncsu.edu"] {
            assert_eq!(
                UserProfile::new("Zahir", "King", id(), email, "pw").unwrap_err(),
                ModelError::InvalidEmail,
                "{}",
                email
            );
        }
        assert_eq!(
            UserProfile::new("Zahir", "King", id(), "z@ncsu.edu", "").unwrap_err(),
            ModelError::InvalidPassword
        );
        assert!(UserProfile::new("Zahir", "King", id(), "z.king@ncsu.edu", "pw").is_ok());
    }

    #[test]
    fn test_student_credits() {
        assert_eq!(
            Student::new(profile("A", "B", "ab"), 2).unwrap_err(),
            ModelError::InvalidMaxCredits
        );
        assert_eq!(
            Student::new(profile("A", "B", "ab"), 19).unwrap_err(),
            ModelError::InvalidMaxCredits
        );
        let student = Student::with_default_credits(profile("A", "B", "ab"));
        assert_eq!(student.max_credits(), 18);
        assert_eq!(student.to_record(), "A,B,ab,x@ncsu.edu,hash,18");
    }

    #[test]
    fn test_student_ordering() {
        let mut students = vec![
            Student::with_default_credits(profile("Zoe", "Adams", "za2")),
            Student::with_default_credits(profile("Amy", "Baker", "ab")),
            Student::with_default_credits(profile("Zoe", "Adams", "za1")),
        ];
        students.sort();
        let ids: Vec<&str> = students.iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, vec!["za1", "za2", "ab"]);
    }

    #[test]
    fn test_can_add_respects_credit_limit() {
        let mut student = Student::new(profile("A", "B", "ab"), 6).unwrap();
        let a = course("CSC216", 4, "MW", 900, 1000);
        let b = course("CSC226", 3, "TH", 900, 1000);
        let c = course("CSC217", 1, "TH", 1100, 1200);
        assert!(student.can_add(&a));
        student.schedule_mut().add_course(a.clone()).unwrap();
        assert!(!student.can_add(&b));
        assert!(student.can_add(&c));
        assert!(!student.can_add(&a));
    }

    #[test]
    fn test_faculty() {
        assert_eq!(
            Faculty::new(profile("A", "B", "fab"), 0).unwrap_err(),
            ModelError::InvalidMaxCourses
        );
        assert_eq!(
            Faculty::new(profile("A", "B", "fab"), 4).unwrap_err(),
            ModelError::InvalidMaxCourses
        );
        let faculty = Faculty::new(profile("A", "B", "fab"), 2).unwrap();
        assert_eq!(faculty.to_record(), "A,B,fab,x@ncsu.edu,hash,2");
        let other = Faculty::new(profile("C", "D", "fab"), 3).unwrap();
        assert_eq!(faculty, other);
    }

    fn section(name: &str, section: &str, days: &str, start: u16, end: u16) -> Course {
        let meeting = MeetingTime::from_record(days, start, end).unwrap();
        let info = CourseInfo::new(name, "Title", section, 3, meeting).unwrap();
        Course::new(info, None, 10).unwrap()
    }

    #[test]
    fn test_faculty_overload_boundary() {
        let mut faculty = Faculty::new(profile("A", "B", "fab"), 2).unwrap();
        let mut a = section("CSC216", "001", "MW", 900, 1015);
        let mut b = section("CSC216", "002", "TH", 900, 1015);
        let mut c = section("CSC316", "001", "MW", 1100, 1215);

        faculty.assign_course(&mut a).unwrap();
        faculty.assign_course(&mut b).unwrap();
        assert_eq!(faculty.schedule().len(), 2);
        assert!(!faculty.is_overloaded());

        faculty.assign_course(&mut c).unwrap();
        assert!(faculty.is_overloaded());

        assert!(faculty.unassign_course(&mut c));
        assert!(!faculty.is_overloaded());
        assert_eq!(c.instructor(), None);
        assert_eq!(a.instructor(), Some(faculty.id()));
    }

    #[test]
    fn test_faculty_assignment_rejections() {
        let mut first = Faculty::new(profile("A", "B", "fab"), 3).unwrap();
        let mut second = Faculty::new(profile("C", "D", "fcd"), 3).unwrap();
        let mut course = section("CSC216", "001", "MW", 900, 1015);
        first.assign_course(&mut course).unwrap();

        assert_eq!(
            second.assign_course(&mut course),
            Err(ScheduleError::AssignedToOther {
                course: "CSC216-001".to_string(),
                instructor: "fab".to_string(),
            })
        );
        assert!(second.schedule().is_empty());
        assert!(!second.unassign_course(&mut course));
        assert_eq!(course.instructor().map(|i| i.as_str()), Some("fab"));

        assert_eq!(
            first.assign_course(&mut course),
            Err(ScheduleError::AlreadyAssigned("CSC216-001".to_string()))
        );
        let mut clash = section("CSC226", "001", "W", 1015, 1100);
        assert_eq!(
            first.assign_course(&mut clash),
            Err(ScheduleError::Conflict(crate::meeting::ConflictError))
        );
        assert_eq!(clash.instructor(), None);

        assert_eq!(first.reset_schedule(), vec![CourseKey::new("CSC216", "001")]);
        assert!(first.schedule().is_empty());
    }

    #[test]
    fn test_debug_hides_password() {
        let p: UserProfile<StudentTag> = profile("A", "B", "ab");
        let debug = format!("{:?}", p);
        assert!(debug.contains("StudentId(ab)"));
        assert!(!debug.contains("hash"));
    }
}
