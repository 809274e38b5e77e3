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

//! Flat-file records for courses, students and faculty.
//!
//! Every record is one line of comma-separated fields:
//!
//! ```text
//! course:   name,title,section,credits,instructor,capacity,days[,start,end]
//! student:  first,last,id,email,password_hash,max_credits
//! faculty:  first,last,id,email,password_hash,max_courses
//! ```
//!
//! Times are military `HHMM`; an arranged course carries the day symbol `A`
//! and no times. An empty instructor field means no instructor is assigned.
//!
//! Readers accept any `BufRead`, file path, raw reader or string slice. A
//! line that fails to parse, or that repeats a record already read, is
//! skipped with a warning; only I/O failures abort the whole read.

use registrar_collections::{BoundedList, CursorList, SequentialList};
use registrar_model::{
    course::{Course, CourseInfo},
    error::ModelError,
    ids::{FacultyId, Id, StudentId},
    meeting::{ARRANGED_SYMBOL, MeetingTime},
    policy::EnrollmentPolicy,
    user::{Faculty, Student, UserProfile},
};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
    str::FromStr,
};
use tracing::{debug, warn};

/// The error type for reading and writing records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },
    #[error("could not parse field `{field}` from '{value}'")]
    ParseField { field: &'static str, value: String },
    #[error("unexpected data after the last field")]
    TrailingData,
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Splits a record line into named fields.
struct Fields<'a> {
    parts: std::str::Split<'a, char>,
}

impl<'a> Fields<'a> {
    #[inline]
    fn new(line: &'a str) -> Self {
        Self {
            parts: line.split(','),
        }
    }

    #[inline]
    fn next_str(&mut self, field: &'static str) -> Result<&'a str, RecordError> {
        self.parts.next().ok_or(RecordError::MissingField { field })
    }

    fn next_parsed<T>(&mut self, field: &'static str) -> Result<T, RecordError>
    where
        T: FromStr,
    {
        let raw = self.next_str(field)?;
        raw.trim().parse().map_err(|_| RecordError::ParseField {
            field,
            value: raw.to_string(),
        })
    }

    #[inline]
    fn finish(mut self) -> Result<(), RecordError> {
        match self.parts.next() {
            None => Ok(()),
            Some(_) => Err(RecordError::TrailingData),
        }
    }
}

/// Reads one kind of record into a collection.
///
/// Implementors parse single lines and decide which parsed records are
/// duplicates; the provided methods handle the input plumbing.
pub trait RecordReader {
    type Record;
    type Output: Default;

    /// Parses one line into a record.
    fn parse_record(&self, line: &str) -> Result<Self::Record, RecordError>;

    /// Adds `record` to `output`. Returns `false` if it duplicates a record
    /// already read.
    fn accept(&self, output: &mut Self::Output, record: Self::Record) -> bool;

    /// Reads records from a type implementing `BufRead`.
    fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Self::Output, RecordError> {
        let mut output = Self::Output::default();
        let (mut read, mut skipped) = (0usize, 0usize);
        for (number, line) in rdr.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match self.parse_record(&line) {
                Ok(record) => {
                    if self.accept(&mut output, record) {
                        read += 1;
                    } else {
                        skipped += 1;
                        warn!(line = number + 1, "skipping duplicate record");
                    }
                }
                Err(error) => {
                    skipped += 1;
                    warn!(line = number + 1, %error, "skipping invalid record");
                }
            }
        }
        debug!(read, skipped, "finished reading records");
        Ok(output)
    }

    /// Reads records from a file path.
    #[inline]
    fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Self::Output, RecordError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Reads records from a generic reader.
    #[inline]
    fn from_reader<R: Read>(&self, r: R) -> Result<Self::Output, RecordError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Reads records from a string slice.
    #[inline]
    fn from_str(&self, s: &str) -> Result<Self::Output, RecordError> {
        self.from_reader(s.as_bytes())
    }
}

/// Reads course records into a list sorted by name and section.
///
/// A second offering with the same name and section is a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseRecordReader {
    policy: EnrollmentPolicy,
}

impl CourseRecordReader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates capacities against `policy` instead of the default one.
    #[inline]
    pub fn with_policy(policy: EnrollmentPolicy) -> Self {
        Self { policy }
    }
}

impl RecordReader for CourseRecordReader {
    type Record = Course;
    type Output = BoundedList<Course>;

    fn parse_record(&self, line: &str) -> Result<Course, RecordError> {
        let mut fields = Fields::new(line);
        let name = fields.next_str("name")?;
        let title = fields.next_str("title")?;
        let section = fields.next_str("section")?;
        let credits: u8 = fields.next_parsed("credits")?;
        let instructor = match fields.next_str("instructor")? {
            "" => None,
            id => Some(FacultyId::new(id).map_err(|_| ModelError::InvalidInstructorId)?),
        };
        let capacity: usize = fields.next_parsed("capacity")?;
        let days = fields.next_str("days")?;
        let meeting = if days == ARRANGED_SYMBOL {
            MeetingTime::Arranged
        } else {
            let start: u16 = fields.next_parsed("start")?;
            let end: u16 = fields.next_parsed("end")?;
            MeetingTime::from_record(days, start, end)?
        };
        fields.finish()?;

        let info = CourseInfo::new(name, title, section, credits, meeting)?;
        Ok(Course::with_policy(info, instructor, capacity, self.policy)?)
    }

    fn accept(&self, output: &mut BoundedList<Course>, course: Course) -> bool {
        output.insert_sorted(course).is_ok()
    }
}

/// Parses the five identity fields shared by student and faculty records.
fn parse_profile<T>(fields: &mut Fields<'_>) -> Result<UserProfile<T>, RecordError> {
    let first = fields.next_str("first name")?;
    let last = fields.next_str("last name")?;
    let id = Id::new(fields.next_str("id")?)?;
    let email = fields.next_str("email")?;
    let password = fields.next_str("password")?;
    Ok(UserProfile::new(first, last, id, email, password)?)
}

/// Reads student records into a list sorted by last name, first name and id.
///
/// A second record with an id already read is a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StudentRecordReader;

impl RecordReader for StudentRecordReader {
    type Record = Student;
    type Output = BoundedList<Student>;

    fn parse_record(&self, line: &str) -> Result<Student, RecordError> {
        let mut fields = Fields::new(line);
        let profile = parse_profile(&mut fields)?;
        let max_credits: u8 = fields.next_parsed("max credits")?;
        fields.finish()?;
        Ok(Student::new(profile, max_credits)?)
    }

    fn accept(&self, output: &mut BoundedList<Student>, student: Student) -> bool {
        if contains_student(output, student.id()) {
            return false;
        }
        output.insert_sorted(student).is_ok()
    }
}

fn contains_student(students: &BoundedList<Student>, id: &StudentId) -> bool {
    students.iter().any(|s| s.id() == id)
}

/// Reads faculty records in file order.
///
/// A second record with an id already read is a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FacultyRecordReader;

impl RecordReader for FacultyRecordReader {
    type Record = Faculty;
    type Output = CursorList<Faculty>;

    fn parse_record(&self, line: &str) -> Result<Faculty, RecordError> {
        let mut fields = Fields::new(line);
        let profile = parse_profile(&mut fields)?;
        let max_courses: u8 = fields.next_parsed("max courses")?;
        fields.finish()?;
        Ok(Faculty::new(profile, max_courses)?)
    }

    fn accept(&self, output: &mut CursorList<Faculty>, faculty: Faculty) -> bool {
        output.push_back(faculty).is_ok()
    }
}

/// Something that renders as one record line.
pub trait ToRecord {
    fn to_record(&self) -> String;
}

impl ToRecord for Course {
    #[inline]
    fn to_record(&self) -> String {
        Course::to_record(self)
    }
}

impl ToRecord for Student {
    #[inline]
    fn to_record(&self) -> String {
        Student::to_record(self)
    }
}

impl ToRecord for Faculty {
    #[inline]
    fn to_record(&self) -> String {
        Faculty::to_record(self)
    }
}

/// Writes one record per line.
pub fn write_records<'a, W, T, I>(mut writer: W, records: I) -> Result<(), RecordError>
where
    W: Write,
    T: ToRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for record in records {
        writeln!(writer, "{}", record.to_record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes one record per line.
pub fn save_records<'a, P, T, I>(path: P, records: I) -> Result<(), RecordError>
where
    P: AsRef<Path>,
    T: ToRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let path = path.as_ref();
    debug!(?path, "saving records");
    let file = File::create(path)?;
    write_records(BufWriter::new(file), records)
}
