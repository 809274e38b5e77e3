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

//! Meeting times and the scheduling-conflict check.
//!
//! A meeting is either arranged (no fixed days or times) or held on a set of
//! weekdays during one closed interval of minutes-of-day. Two meetings
//! conflict when they share a weekday and their intervals overlap; touching
//! endpoints overlap, so a class ending at 10:00 conflicts with one starting
//! at 10:00.
//!
//! Record files store times in military `HHMM` form (`1330` for 1:30 PM).
//! [`MeetingTime::from_record`] and the `*_hhmm` accessors convert between
//! that form and minutes.

use crate::error::ModelError;
use registrar_core::math::interval::ClosedInterval;

/// Minutes in a day; valid minute values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Symbol for an arranged meeting in record files.
pub const ARRANGED_SYMBOL: &str = "A";

/// A class day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Returns the record symbol: `M`, `T`, `W`, `H` or `F`.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'H',
            Weekday::Friday => 'F',
        }
    }

    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'M' => Some(Weekday::Monday),
            'T' => Some(Weekday::Tuesday),
            'W' => Some(Weekday::Wednesday),
            'H' => Some(Weekday::Thursday),
            'F' => Some(Weekday::Friday),
            _ => None,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A set of weekdays, each present at most once.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Weekdays(u8);

impl Weekdays {
    #[inline]
    pub const fn empty() -> Self {
        Weekdays(0)
    }

    /// Parses a day string such as `"MWF"`.
    ///
    /// Fails on an empty string, an unknown symbol or a repeated day.
    pub fn parse(days: &str) -> Result<Self, ModelError> {
        let mut set = Weekdays::empty();
        for symbol in days.chars() {
            let day = Weekday::from_symbol(symbol).ok_or(ModelError::InvalidMeeting)?;
            if !set.insert(day) {
                return Err(ModelError::InvalidMeeting);
            }
        }
        if set.is_empty() {
            return Err(ModelError::InvalidMeeting);
        }
        Ok(set)
    }

    /// Adds `day`; returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, day: Weekday) -> bool {
        let fresh = !self.contains(day);
        self.0 |= day.bit();
        fresh
    }

    #[inline]
    pub const fn contains(&self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if both sets hold some common day.
    #[inline]
    pub const fn intersects(&self, other: Weekdays) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterates the days Monday to Friday.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for Weekdays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Weekdays::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl std::fmt::Debug for Weekdays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Weekdays({})", self)
    }
}

impl std::fmt::Display for Weekdays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for day in self.iter() {
            write!(f, "{}", day.symbol())?;
        }
        Ok(())
    }
}

/// Converts a military `HHMM` time to minutes-of-day.
///
/// Returns `None` unless `HH < 24` and `MM < 60`.
#[inline]
pub fn hhmm_to_minutes(hhmm: u16) -> Option<u16> {
    let (hours, minutes) = (hhmm / 100, hhmm % 100);
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

/// Converts minutes-of-day to military `HHMM`.
#[inline]
pub const fn minutes_to_hhmm(minutes: u16) -> u16 {
    (minutes / 60) * 100 + minutes % 60
}

/// When an activity meets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MeetingTime {
    /// No fixed days or times.
    Arranged,
    /// Held on `days` during `interval` (minutes-of-day, both ends included).
    Scheduled {
        days: Weekdays,
        interval: ClosedInterval<u16>,
    },
}

impl MeetingTime {
    /// Creates a scheduled meeting from minutes-of-day.
    ///
    /// Fails if `days` is empty, `start > end` or `end` lies past the last
    /// minute of the day.
    pub fn scheduled(days: Weekdays, start: u16, end: u16) -> Result<Self, ModelError> {
        if days.is_empty() || end >= MINUTES_PER_DAY {
            return Err(ModelError::InvalidMeeting);
        }
        let interval = ClosedInterval::try_new(start, end).ok_or(ModelError::InvalidMeeting)?;
        Ok(MeetingTime::Scheduled { days, interval })
    }

    /// Builds a meeting from its record form: a day string (`"A"` for
    /// arranged) and military start and end times.
    ///
    /// Arranged meetings must carry `0` for both times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use registrar_model::meeting::MeetingTime;
    /// let m = MeetingTime::from_record("MW", 1330, 1445).unwrap();
    /// assert_eq!(m.to_string(), "MW 1:30PM-2:45PM");
    /// assert_eq!(MeetingTime::from_record("A", 0, 0).unwrap(), MeetingTime::Arranged);
    /// assert!(MeetingTime::from_record("A", 800, 0).is_err());
    /// ```
    pub fn from_record(days: &str, start_hhmm: u16, end_hhmm: u16) -> Result<Self, ModelError> {
        if days == ARRANGED_SYMBOL {
            return match (start_hhmm, end_hhmm) {
                (0, 0) => Ok(MeetingTime::Arranged),
                _ => Err(ModelError::InvalidMeeting),
            };
        }
        let days = Weekdays::parse(days)?;
        let start = hhmm_to_minutes(start_hhmm).ok_or(ModelError::InvalidMeeting)?;
        let end = hhmm_to_minutes(end_hhmm).ok_or(ModelError::InvalidMeeting)?;
        Self::scheduled(days, start, end)
    }

    #[inline]
    pub const fn is_arranged(&self) -> bool {
        matches!(self, MeetingTime::Arranged)
    }

    /// Returns the meeting days; empty when arranged.
    #[inline]
    pub const fn days(&self) -> Weekdays {
        match self {
            MeetingTime::Arranged => Weekdays::empty(),
            MeetingTime::Scheduled { days, .. } => *days,
        }
    }

    #[inline]
    pub const fn interval(&self) -> Option<ClosedInterval<u16>> {
        match self {
            MeetingTime::Arranged => None,
            MeetingTime::Scheduled { interval, .. } => Some(*interval),
        }
    }

    /// Returns the day string used in records: `"A"` or the day symbols.
    pub fn days_symbols(&self) -> String {
        match self {
            MeetingTime::Arranged => ARRANGED_SYMBOL.to_string(),
            MeetingTime::Scheduled { days, .. } => days.to_string(),
        }
    }

    /// Start time in military form; `0` when arranged.
    #[inline]
    pub fn start_hhmm(&self) -> u16 {
        self.interval()
            .map_or(0, |interval| minutes_to_hhmm(interval.start()))
    }

    /// End time in military form; `0` when arranged.
    #[inline]
    pub fn end_hhmm(&self) -> u16 {
        self.interval()
            .map_or(0, |interval| minutes_to_hhmm(interval.end()))
    }

    /// Returns `true` if `a` and `b` meet on a common day at overlapping times.
    ///
    /// Two arranged meetings never conflict, and an arranged meeting has no
    /// days to share with a scheduled one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use registrar_model::meeting::MeetingTime;
    /// let a = MeetingTime::from_record("MW", 1330, 1445).unwrap();
    /// let b = MeetingTime::from_record("W", 1445, 1530).unwrap();
    /// let c = MeetingTime::from_record("TH", 1330, 1445).unwrap();
    /// assert!(MeetingTime::conflicts(&a, &b));
    /// assert!(!MeetingTime::conflicts(&a, &c));
    /// ```
    pub fn conflicts(a: &MeetingTime, b: &MeetingTime) -> bool {
        match (a, b) {
            (
                MeetingTime::Scheduled {
                    days: days_a,
                    interval: interval_a,
                },
                MeetingTime::Scheduled {
                    days: days_b,
                    interval: interval_b,
                },
            ) => days_a.intersects(*days_b) && interval_a.overlaps(*interval_b),
            _ => false,
        }
    }
}

/// Formats minutes-of-day as a 12-hour clock time, e.g. `1:30PM`.
fn clock_time(minutes: u16) -> String {
    let (hour, minute) = (minutes / 60, minutes % 60);
    let period = if hour < 12 { "AM" } else { "PM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}{}", hour, minute, period)
}

impl std::fmt::Display for MeetingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingTime::Arranged => write!(f, "Arranged"),
            MeetingTime::Scheduled { days, interval } => write!(
                f,
                "{} {}-{}",
                days,
                clock_time(interval.start()),
                clock_time(interval.end())
            ),
        }
    }
}

/// Two activities could not both be attended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the activities meet at overlapping times")]
pub struct ConflictError;

/// Something that meets at a [`MeetingTime`] and can clash with another.
pub trait Conflict {
    fn meeting_time(&self) -> &MeetingTime;

    /// Fails with [`ConflictError`] if `self` and `other` meet on a common
    /// day at overlapping times.
    fn check_conflict<C>(&self, other: &C) -> Result<(), ConflictError>
    where
        C: Conflict + ?Sized,
    {
        if MeetingTime::conflicts(self.meeting_time(), other.meeting_time()) {
            Err(ConflictError)
        } else {
            Ok(())
        }
    }
}

impl Conflict for MeetingTime {
    #[inline]
    fn meeting_time(&self) -> &MeetingTime {
        self
    }
}
