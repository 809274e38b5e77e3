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

use num_traits::PrimInt;
use std::cmp::{max, min};

/// A closed interval `[start, end]` where both bounds belong to the interval.
///
/// Meeting times use closed intervals: two activities that touch at a single
/// minute (one ends at 10:00, the next starts at 10:00) are considered to
/// overlap.
///
/// # Invariants
/// `start` must always be less than or equal to `end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use registrar_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(540, 600);
    /// assert_eq!(iv.start(), 540);
    /// assert_eq!(iv.end(), 600);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `ClosedInterval` if `start <= end`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use registrar_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates the degenerate interval `[value, value]`.
    #[inline]
    pub fn point(value: T) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Returns the start bound (inclusive).
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the end bound (inclusive).
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// Written out case by case this is: `self` covers `other`, `other`
    /// covers `self`, `self` starts first and reaches `other.start`, or
    /// `other` starts first and reaches `self.start`. All four cases
    /// collapse into `max(starts) <= min(ends)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use registrar_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.overlaps(ClosedInterval::new(5, 15)));
    /// assert!(a.overlaps(ClosedInterval::new(10, 20))); // touching
    /// assert!(!a.overlaps(ClosedInterval::new(11, 20)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        max(self.start, other.start) <= min(self.end, other.end)
    }
}

impl<T> Default for ClosedInterval<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self::point(T::zero())
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for ClosedInterval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<ClosedInterval<T>> for std::ops::RangeInclusive<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.start..=iv.end
    }
}
