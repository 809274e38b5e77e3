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

//! Course offerings.

use crate::{
    error::ModelError,
    ids::{CourseKey, FacultyId, StudentId},
    meeting::{Conflict, MeetingTime},
    policy::EnrollmentPolicy,
    roll::EnrollmentRoll,
    validator::CourseNameValidator,
};

pub const MIN_NAME_LENGTH: usize = 4;
pub const MAX_NAME_LENGTH: usize = 8;
pub const SECTION_LENGTH: usize = 3;
pub const MIN_CREDITS: u8 = 1;
pub const MAX_CREDITS: u8 = 5;

/// The descriptive part of a course: what it is and when it meets.
///
/// Schedules keep copies of it, and it is the course reference an
/// [`EnrollmentRoll`] hands to its notifier on promotion.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CourseInfo {
    name: String,
    title: String,
    section: String,
    credits: u8,
    meeting: MeetingTime,
}

impl CourseInfo {
    /// Validates and bundles the descriptive fields of a course.
    ///
    /// The name must be 4 to 8 characters long and accepted by
    /// [`CourseNameValidator`], the title non-empty, the section exactly
    /// three digits and the credits within `1..=5`.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: u8,
        meeting: MeetingTime,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let title = title.into();
        let section = section.into();
        validate_name(&name)?;
        validate_title(&title)?;
        validate_section(&section)?;
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
            return Err(ModelError::InvalidCredits);
        }
        Ok(Self {
            name,
            title,
            section,
            credits,
            meeting,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn section(&self) -> &str {
        &self.section
    }

    #[inline]
    pub fn credits(&self) -> u8 {
        self.credits
    }

    #[inline]
    pub fn meeting(&self) -> &MeetingTime {
        &self.meeting
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ModelError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn key(&self) -> CourseKey {
        CourseKey::new(self.name.clone(), self.section.clone())
    }

    /// Returns `true` if `key` names this offering.
    #[inline]
    pub fn matches(&self, key: &CourseKey) -> bool {
        self.name == key.name && self.section == key.section
    }

    /// Two offerings of the same course are duplicates regardless of section.
    #[inline]
    pub fn is_duplicate(&self, other: &CourseInfo) -> bool {
        self.name == other.name
    }
}

impl Conflict for CourseInfo {
    #[inline]
    fn meeting_time(&self) -> &MeetingTime {
        &self.meeting
    }
}

impl std::fmt::Display for CourseInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {}", self.name, self.section, self.title)
    }
}

fn validate_name(name: &str) -> Result<(), ModelError> {
    let len = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
        return Err(ModelError::InvalidCourseName);
    }
    match CourseNameValidator::new().is_valid(name) {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(ModelError::InvalidCourseName),
    }
}

fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.is_empty() || title.contains(',') {
        return Err(ModelError::InvalidTitle);
    }
    Ok(())
}

fn validate_section(section: &str) -> Result<(), ModelError> {
    if section.len() != SECTION_LENGTH || !section.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ModelError::InvalidSection);
    }
    Ok(())
}

/// A course offering with its instructor and enrollment roll.
///
/// Courses compare and order by name, then section.
#[derive(Clone, Debug)]
pub struct Course {
    roll: EnrollmentRoll<StudentId, CourseInfo>,
    instructor: Option<FacultyId>,
}

impl Course {
    /// Creates a course whose roll seats `capacity` students under the
    /// default [`EnrollmentPolicy`].
    pub fn new(
        info: CourseInfo,
        instructor: Option<FacultyId>,
        capacity: usize,
    ) -> Result<Self, ModelError> {
        Self::with_policy(info, instructor, capacity, EnrollmentPolicy::default())
    }

    pub fn with_policy(
        info: CourseInfo,
        instructor: Option<FacultyId>,
        capacity: usize,
        policy: EnrollmentPolicy,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            roll: EnrollmentRoll::with_policy(info, capacity, policy)?,
            instructor,
        })
    }

    #[inline]
    pub fn info(&self) -> &CourseInfo {
        self.roll.course()
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.info().name()
    }

    #[inline]
    pub fn title(&self) -> &str {
        self.info().title()
    }

    #[inline]
    pub fn section(&self) -> &str {
        self.info().section()
    }

    #[inline]
    pub fn credits(&self) -> u8 {
        self.info().credits()
    }

    #[inline]
    pub fn meeting(&self) -> &MeetingTime {
        self.info().meeting()
    }

    #[inline]
    pub fn key(&self) -> CourseKey {
        self.info().key()
    }

    #[inline]
    pub fn instructor(&self) -> Option<&FacultyId> {
        self.instructor.as_ref()
    }

    #[inline]
    pub fn set_instructor(&mut self, instructor: Option<FacultyId>) {
        self.instructor = instructor;
    }

    #[inline]
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ModelError> {
        self.roll.course_mut().set_title(title)
    }

    #[inline]
    pub fn roll(&self) -> &EnrollmentRoll<StudentId, CourseInfo> {
        &self.roll
    }

    #[inline]
    pub fn roll_mut(&mut self) -> &mut EnrollmentRoll<StudentId, CourseInfo> {
        &mut self.roll
    }

    /// Renders the course as one comma-separated record:
    /// `name,title,section,credits,instructor,capacity,days[,start,end]`.
    ///
    /// Arranged courses omit the times; a course without an instructor
    /// leaves that field empty.
    pub fn to_record(&self) -> String {
        let info = self.info();
        let instructor = self.instructor.as_ref().map_or("", |id| id.as_str());
        let mut record = format!(
            "{},{},{},{},{},{},{}",
            info.name,
            info.title,
            info.section,
            info.credits,
            instructor,
            self.roll.capacity(),
            info.meeting.days_symbols()
        );
        if !info.meeting.is_arranged() {
            record.push_str(&format!(
                ",{},{}",
                info.meeting.start_hhmm(),
                info.meeting.end_hhmm()
            ));
        }
        record
    }

    /// Name, section, title, meeting and open seats.
    pub fn short_display(&self) -> [String; 5] {
        [
            self.name().to_string(),
            self.section().to_string(),
            self.title().to_string(),
            self.meeting().to_string(),
            self.roll.open_seats().to_string(),
        ]
    }

    /// Name, section, title, credits, instructor, meeting and an empty
    /// column reserved for UI use.
    pub fn long_display(&self) -> [String; 7] {
        [
            self.name().to_string(),
            self.section().to_string(),
            self.title().to_string(),
            self.credits().to_string(),
            self.instructor
                .as_ref()
                .map_or_else(String::new, |id| id.to_string()),
            self.meeting().to_string(),
            String::new(),
        ]
    }
}

impl Conflict for Course {
    #[inline]
    fn meeting_time(&self) -> &MeetingTime {
        self.meeting()
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.section() == other.section()
    }
}

impl Eq for Course {}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Course {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name()
            .cmp(other.name())
            .then_with(|| self.section().cmp(other.section()))
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::ConflictError;

    fn info(name: &str, section: &str, days: &str, start: u16, end: u16) -> CourseInfo {
        CourseInfo::new(
            name,
            "Software Development Fundamentals",
            section,
            3,
            MeetingTime::from_record(days, start, end).unwrap(),
        )
        .unwrap()
    }

    fn course(name: &str, section: &str) -> Course {
        Course::new(
            info(name, section, "MW", 1330, 1445),
            Some(FacultyId::new("sesmith5").unwrap()),
            10,
        )
        .unwrap()
    }

    #[test]
    fn test_info_validation() {
        let meeting = MeetingTime::Arranged;
        assert_eq!(
            CourseInfo::new("CS1", "T", "001", 3, meeting).unwrap_err(),
            ModelError::InvalidCourseName
        );
        assert_eq!(
            CourseInfo::new("CSCA2160", "T", "001", 3, meeting).unwrap_err(),
            ModelError::InvalidCourseName
        );
        assert_eq!(
            CourseInfo::new("CSC216", "", "001", 3, meeting).unwrap_err(),
            ModelError::InvalidTitle
        );
        assert_eq!(
            CourseInfo::new("CSC216", "T", "01", 3, meeting).unwrap_err(),
            ModelError::InvalidSection
        );
        assert_eq!(
            CourseInfo::new("CSC216", "T", "0a1", 3, meeting).unwrap_err(),
            ModelError::InvalidSection
        );
        assert_eq!(
            CourseInfo::new("CSC216", "T", "001", 0, meeting).unwrap_err(),
            ModelError::InvalidCredits
        );
        assert_eq!(
            CourseInfo::new("CSC216", "T", "001", 6, meeting).unwrap_err(),
            ModelError::InvalidCredits
        );
        assert!(CourseInfo::new("MA141H", "T", "001", 5, meeting).is_ok());
    }

    #[test]
    fn test_capacity_validated_by_roll() {
        let result = Course::new(info("CSC216", "001", "A", 0, 0), None, 5);
        assert!(matches!(result, Err(ModelError::Roll(_))));
    }

    #[test]
    fn test_record_rendering() {
        let scheduled = course("CSC216", "001");
        assert_eq!(
            scheduled.to_record(),
            "CSC216,Software Development Fundamentals,001,3,sesmith5,10,MW,1330,1445"
        );

        let arranged = Course::new(info("CSC217", "211", "A", 0, 0), None, 10).unwrap();
        assert_eq!(
            arranged.to_record(),
            "CSC217,Software Development Fundamentals,211,3,,10,A"
        );
    }

    #[test]
    fn test_display_rows() {
        let mut course = course("CSC216", "001");
        course
            .roll_mut()
            .enroll(StudentId::new("s1").unwrap())
            .unwrap();
        assert_eq!(
            course.short_display(),
            [
                "CSC216",
                "001",
                "Software Development Fundamentals",
                "MW 1:30PM-2:45PM",
                "9"
            ]
        );
        assert_eq!(course.long_display()[3], "3");
        assert_eq!(course.long_display()[4], "sesmith5");
        assert_eq!(course.long_display()[6], "");
    }

    #[test]
    fn test_ordering_by_name_then_section() {
        let mut courses = vec![
            course("CSC216", "002"),
            course("CSC116", "001"),
            course("CSC216", "001"),
        ];
        courses.sort();
        let keys: Vec<String> = courses.iter().map(|c| c.key().to_string()).collect();
        assert_eq!(keys, vec!["CSC116-001", "CSC216-001", "CSC216-002"]);
        assert_eq!(course("CSC216", "001"), course("CSC216", "001"));
    }

    #[test]
    fn test_duplicate_and_conflict() {
        let a = info("CSC216", "001", "MW", 1330, 1445);
        let b = info("CSC216", "002", "TH", 800, 915);
        let c = info("CSC226", "001", "W", 1400, 1500);
        assert!(a.is_duplicate(&b));
        assert!(!a.is_duplicate(&c));
        assert_eq!(a.check_conflict(&b), Ok(()));
        assert_eq!(a.check_conflict(&c), Err(ConflictError));
        assert!(a.matches(&CourseKey::new("CSC216", "001")));
    }

    #[test]
    fn test_set_title() {
        let mut course = course("CSC216", "001");
        course.set_title("Programming Concepts").unwrap();
        assert_eq!(course.title(), "Programming Concepts");
        assert_eq!(course.set_title(""), Err(ModelError::InvalidTitle));
    }
}
