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

//! Course enrollment rolls.
//!
//! An [`EnrollmentRoll`] seats participants on a capacity-bounded roster and
//! queues the overflow on a short waitlist. When a rostered participant
//! drops, the head of the waitlist takes the freed seat and the roll reports
//! the promotion through an [`EnrollmentNotifier`], so whoever tracks
//! schedules can record the new enrollment.
//!
//! A participant is in at most one of roster and waitlist, and at most once.

use crate::policy::EnrollmentPolicy;
use registrar_collections::{
    BoundedLinkedList, ContainerError, LinkedQueue, Queue, SequentialList,
    linked_list::Iter as RosterIter,
};
use tracing::debug;

/// Errors returned by roll operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error(
        "invalid enrollment capacity {requested}: must lie within {min}..={max} and hold the {enrolled} enrolled"
    )]
    InvalidCapacity {
        requested: usize,
        min: usize,
        max: usize,
        enrolled: usize,
    },
    #[error("invalid enrollment policy: {0}")]
    InvalidPolicy(&'static str),
    #[error("participant is already enrolled or waitlisted")]
    AlreadyEnrolled,
    #[error("roster and waitlist are both full")]
    RollFull,
    #[error(transparent)]
    Container(#[from] ContainerError),
}

/// Where [`EnrollmentRoll::enroll`] placed a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrollment {
    Enrolled,
    Waitlisted,
}

impl std::fmt::Display for Enrollment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Enrollment::Enrolled => write!(f, "Enrolled"),
            Enrollment::Waitlisted => write!(f, "Waitlisted"),
        }
    }
}

/// What [`EnrollmentRoll::drop`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome<P> {
    /// The participant left the roster; `promoted` moved up from the waitlist.
    Dropped { participant: P, promoted: Option<P> },
    /// The participant left the waitlist.
    LeftWaitlist { participant: P },
    /// The participant was neither enrolled nor waitlisted.
    NotFound,
}

/// Receives promotions from the waitlist onto the roster.
pub trait EnrollmentNotifier<P, C> {
    /// Called exactly once per promotion, after `participant` was seated.
    fn notify_enrolled(&mut self, participant: &P, course: &C);
}

impl<P, C, F> EnrollmentNotifier<P, C> for F
where
    F: FnMut(&P, &C),
{
    #[inline]
    fn notify_enrolled(&mut self, participant: &P, course: &C) {
        self(participant, course)
    }
}

/// A notifier that ignores every promotion.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoopNotifier;

impl<P, C> EnrollmentNotifier<P, C> for NoopNotifier {
    #[inline(always)]
    fn notify_enrolled(&mut self, _participant: &P, _course: &C) {}
}

/// The roster and waitlist of one course.
#[derive(Clone, Debug)]
pub struct EnrollmentRoll<P, C> {
    course: C,
    roster: BoundedLinkedList<P>,
    waitlist: LinkedQueue<P>,
    policy: EnrollmentPolicy,
}

impl<P, C> EnrollmentRoll<P, C>
where
    P: PartialEq,
{
    /// Creates a roll under the default [`EnrollmentPolicy`].
    ///
    /// Fails with [`RollError::InvalidCapacity`] if `capacity` lies outside
    /// `10..=250`.
    #[inline]
    pub fn new(course: C, capacity: usize) -> Result<Self, RollError> {
        Self::with_policy(course, capacity, EnrollmentPolicy::default())
    }

    /// Creates a roll whose capacity bounds and waitlist size come from `policy`.
    ///
    /// Fails with [`RollError::InvalidPolicy`] if `policy` does not validate.
    pub fn with_policy(
        course: C,
        capacity: usize,
        policy: EnrollmentPolicy,
    ) -> Result<Self, RollError> {
        if let Some(reason) = policy.violation() {
            return Err(RollError::InvalidPolicy(reason));
        }
        if !policy.admits(capacity) {
            return Err(Self::invalid_capacity(&policy, capacity, 0));
        }
        Ok(Self {
            course,
            roster: BoundedLinkedList::new(capacity),
            waitlist: LinkedQueue::new(policy.waitlist_capacity),
            policy,
        })
    }

    fn invalid_capacity(policy: &EnrollmentPolicy, requested: usize, enrolled: usize) -> RollError {
        RollError::InvalidCapacity {
            requested,
            min: policy.min_enrollment,
            max: policy.max_enrollment,
            enrolled,
        }
    }

    #[inline]
    pub fn course(&self) -> &C {
        &self.course
    }

    #[inline]
    pub fn course_mut(&mut self) -> &mut C {
        &mut self.course
    }

    #[inline]
    pub fn policy(&self) -> &EnrollmentPolicy {
        &self.policy
    }

    /// Number of roster seats.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.roster.capacity()
    }

    /// Changes the number of roster seats.
    ///
    /// Fails if `capacity` is outside the policy bounds or below the number
    /// of enrolled participants. Raising the capacity does not pull anyone
    /// off the waitlist.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), RollError> {
        let enrolled = self.roster.len();
        if !self.policy.admits(capacity) || capacity < enrolled {
            return Err(Self::invalid_capacity(&self.policy, capacity, enrolled));
        }
        self.roster.set_capacity(capacity)?;
        Ok(())
    }

    #[inline]
    pub fn open_seats(&self) -> usize {
        self.roster.capacity() - self.roster.len()
    }

    #[inline]
    pub fn number_enrolled(&self) -> usize {
        self.roster.len()
    }

    #[inline]
    pub fn number_on_waitlist(&self) -> usize {
        self.waitlist.len()
    }

    /// Enrolled participants in enrollment order.
    #[inline]
    pub fn roster(&self) -> RosterIter<'_, P> {
        self.roster.iter()
    }

    /// Waitlisted participants, next in line first.
    #[inline]
    pub fn waitlist(&self) -> RosterIter<'_, P> {
        self.waitlist.iter()
    }
}

impl<P, C> EnrollmentRoll<P, C>
where
    P: PartialEq + Clone + std::fmt::Debug,
    C: std::fmt::Debug,
{
    #[inline]
    pub fn is_enrolled(&self, participant: &P) -> bool {
        self.roster.contains(participant)
    }

    #[inline]
    pub fn is_waitlisted(&self, participant: &P) -> bool {
        self.waitlist.contains(participant)
    }

    /// Returns `true` if [`Self::enroll`] would accept `participant`.
    pub fn can_enroll(&self, participant: &P) -> bool {
        if self.is_enrolled(participant) || self.is_waitlisted(participant) {
            return false;
        }
        !self.roster.is_full() || self.waitlist.len() < self.waitlist.capacity()
    }

    /// Seats `participant`, or waitlists it when every seat is taken.
    ///
    /// Fails with [`RollError::AlreadyEnrolled`] if the participant is on the
    /// roster or the waitlist, and with [`RollError::RollFull`] if both are
    /// full.
    pub fn enroll(&mut self, participant: P) -> Result<Enrollment, RollError> {
        if self.is_enrolled(&participant) || self.is_waitlisted(&participant) {
            return Err(RollError::AlreadyEnrolled);
        }

        if !self.roster.is_full() {
            debug!(?participant, course = ?self.course, "enrolled");
            self.roster.push_back(participant)?;
            return Ok(Enrollment::Enrolled);
        }

        if self.waitlist.len() >= self.waitlist.capacity() {
            debug!(?participant, course = ?self.course, "roll full");
            return Err(RollError::RollFull);
        }
        debug!(
            ?participant,
            course = ?self.course,
            position = self.waitlist.len(),
            "waitlisted"
        );
        self.waitlist.enqueue(participant)?;
        Ok(Enrollment::Waitlisted)
    }

    /// Removes `participant` from the roll.
    ///
    /// Dropping a rostered participant seats the head of the waitlist, if
    /// any, and reports it to `notifier` exactly once. Dropping a participant
    /// who is on neither list is a no-op that returns
    /// [`DropOutcome::NotFound`].
    pub fn drop<N>(
        &mut self,
        participant: &P,
        notifier: &mut N,
    ) -> Result<DropOutcome<P>, RollError>
    where
        N: EnrollmentNotifier<P, C> + ?Sized,
    {
        if let Some(index) = self.roster.index_of(participant) {
            let dropped = self.roster.remove(index)?;
            let promoted = match self.waitlist.dequeue() {
                Ok(next) => {
                    self.roster.push_back(next.clone())?;
                    debug!(participant = ?next, course = ?self.course, "promoted from waitlist");
                    notifier.notify_enrolled(&next, &self.course);
                    Some(next)
                }
                Err(_) => None,
            };
            debug!(participant = ?dropped, course = ?self.course, "dropped");
            return Ok(DropOutcome::Dropped {
                participant: dropped,
                promoted,
            });
        }

        if self.waitlist.remove_element(participant) {
            debug!(?participant, course = ?self.course, "left waitlist");
            return Ok(DropOutcome::LeftWaitlist {
                participant: participant.clone(),
            });
        }

        Ok(DropOutcome::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const COURSE: &str = "CSC216-001";

    fn roll(capacity: usize) -> EnrollmentRoll<u32, &'static str> {
        EnrollmentRoll::new(COURSE, capacity).unwrap()
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(matches!(
            EnrollmentRoll::<u32, _>::new(COURSE, 9),
            Err(RollError::InvalidCapacity { requested: 9, min: 10, max: 250, enrolled: 0 })
        ));
        assert!(EnrollmentRoll::<u32, _>::new(COURSE, 251).is_err());
        assert!(EnrollmentRoll::<u32, _>::new(COURSE, 10).is_ok());
        assert!(EnrollmentRoll::<u32, _>::new(COURSE, 250).is_ok());
    }

    #[test]
    fn test_ten_seats_ten_waitlist_then_full() {
        let mut roll = roll(10);
        for p in 0..10 {
            assert_eq!(roll.enroll(p), Ok(Enrollment::Enrolled));
        }
        assert_eq!(roll.open_seats(), 0);
        for p in 10..20 {
            assert!(roll.can_enroll(&p));
            assert_eq!(roll.enroll(p), Ok(Enrollment::Waitlisted));
        }
        assert_eq!(roll.number_on_waitlist(), 10);
        assert!(!roll.can_enroll(&20));
        assert_eq!(roll.enroll(20), Err(RollError::RollFull));
        assert_eq!(roll.number_enrolled(), 10);
        assert_eq!(roll.number_on_waitlist(), 10);
    }

    #[test]
    fn test_enroll_twice_fails() {
        let mut roll = roll(10);
        for p in 0..11 {
            roll.enroll(p).unwrap();
        }
        assert_eq!(roll.enroll(3), Err(RollError::AlreadyEnrolled));
        assert_eq!(roll.enroll(10), Err(RollError::AlreadyEnrolled));
        assert!(!roll.can_enroll(&3));
        assert!(!roll.can_enroll(&10));
    }

    #[test]
    fn test_drop_promotes_waitlist_head_and_notifies_once() {
        let mut roll = roll(10);
        for p in 0..13 {
            roll.enroll(p).unwrap();
        }

        let mut seen = Vec::new();
        let mut notifier = |p: &u32, c: &&str| seen.push((*p, c.to_string()));
        let outcome = roll.drop(&4, &mut notifier).unwrap();

        assert_eq!(
            outcome,
            DropOutcome::Dropped {
                participant: 4,
                promoted: Some(10)
            }
        );
        assert_eq!(seen, vec![(10, COURSE.to_string())]);
        assert!(roll.is_enrolled(&10));
        assert!(!roll.is_waitlisted(&10));
        assert_eq!(roll.waitlist().copied().collect::<Vec<_>>(), vec![11, 12]);
        assert_eq!(roll.roster().last(), Some(&10));
        assert_eq!(roll.open_seats(), 0);
    }

    #[test]
    fn test_drop_without_waitlist_frees_seat() {
        let mut roll = roll(10);
        roll.enroll(1).unwrap();
        let mut calls = 0;
        let outcome = roll.drop(&1, &mut |_: &u32, _: &&str| calls += 1).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Dropped {
                participant: 1,
                promoted: None
            }
        );
        assert_eq!(calls, 0);
        assert_eq!(roll.open_seats(), 10);
    }

    #[test]
    fn test_drop_from_waitlist_does_not_notify() {
        let mut roll = roll(10);
        for p in 0..12 {
            roll.enroll(p).unwrap();
        }
        let mut calls = 0;
        let outcome = roll.drop(&10, &mut |_: &u32, _: &&str| calls += 1).unwrap();
        assert_eq!(outcome, DropOutcome::LeftWaitlist { participant: 10 });
        assert_eq!(calls, 0);
        assert_eq!(roll.waitlist().copied().collect::<Vec<_>>(), vec![11]);
        assert_eq!(roll.number_enrolled(), 10);
    }

    #[test]
    fn test_drop_absent_is_idempotent_no_op() {
        let mut roll = roll(10);
        roll.enroll(1).unwrap();
        assert_eq!(roll.drop(&7, &mut NoopNotifier), Ok(DropOutcome::NotFound));
        assert_eq!(roll.drop(&7, &mut NoopNotifier), Ok(DropOutcome::NotFound));
        assert_eq!(roll.number_enrolled(), 1);

        roll.drop(&1, &mut NoopNotifier).unwrap();
        assert_eq!(roll.drop(&1, &mut NoopNotifier), Ok(DropOutcome::NotFound));
    }

    #[test]
    fn test_set_capacity() {
        let mut roll = roll(20);
        for p in 0..15 {
            roll.enroll(p).unwrap();
        }
        assert!(matches!(
            roll.set_capacity(12),
            Err(RollError::InvalidCapacity { requested: 12, enrolled: 15, .. })
        ));
        assert!(roll.set_capacity(251).is_err());
        roll.set_capacity(15).unwrap();
        assert_eq!(roll.enroll(99), Ok(Enrollment::Waitlisted));
        roll.set_capacity(30).unwrap();
        assert_eq!(roll.capacity(), 30);
        assert_eq!(roll.open_seats(), 15);
        assert_eq!(roll.number_on_waitlist(), 1);
    }

    #[test]
    fn test_custom_policy() {
        let policy = EnrollmentPolicy {
            min_enrollment: 1,
            max_enrollment: 5,
            waitlist_capacity: 1,
        };
        let mut roll = EnrollmentRoll::with_policy("LAB", 1, policy).unwrap();
        assert_eq!(roll.enroll('a'), Ok(Enrollment::Enrolled));
        assert_eq!(roll.enroll('b'), Ok(Enrollment::Waitlisted));
        assert_eq!(roll.enroll('c'), Err(RollError::RollFull));
        assert!(EnrollmentRoll::<char, _>::with_policy("LAB", 6, policy).is_err());
    }

    #[test]
    fn test_policy_is_validated() {
        let zero_minimum = EnrollmentPolicy {
            min_enrollment: 0,
            max_enrollment: 5,
            waitlist_capacity: 1,
        };
        assert_eq!(
            EnrollmentRoll::<char, _>::with_policy("LAB", 0, zero_minimum).err(),
            Some(RollError::InvalidPolicy("minimum enrollment must be positive"))
        );
        let inverted = EnrollmentPolicy {
            min_enrollment: 8,
            max_enrollment: 4,
            waitlist_capacity: 1,
        };
        assert!(matches!(
            EnrollmentRoll::<char, _>::with_policy("LAB", 6, inverted),
            Err(RollError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_dyn_notifier() {
        struct Recorder(Vec<u32>);
        impl EnrollmentNotifier<u32, &'static str> for Recorder {
            fn notify_enrolled(&mut self, participant: &u32, _course: &&'static str) {
                self.0.push(*participant);
            }
        }

        let mut roll = roll(10);
        for p in 0..11 {
            roll.enroll(p).unwrap();
        }
        let mut recorder = Recorder(Vec::new());
        let notifier: &mut dyn EnrollmentNotifier<u32, &'static str> = &mut recorder;
        roll.drop(&0, notifier).unwrap();
        assert_eq!(recorder.0, vec![10]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Enroll(u8),
        Drop(u8),
    }

    proptest! {
        #[test]
        fn prop_participant_in_at_most_one_list(
            ops in proptest::collection::vec(
                prop_oneof![
                    (0u8..40).prop_map(Op::Enroll),
                    (0u8..40).prop_map(Op::Drop),
                ],
                0..120,
            )
        ) {
            let mut roll: EnrollmentRoll<u8, ()> = EnrollmentRoll::new((), 10).unwrap();
            let mut promotions = 0usize;
            for op in ops {
                match op {
                    Op::Enroll(p) => {
                        let could = roll.can_enroll(&p);
                        prop_assert_eq!(roll.enroll(p).is_ok(), could);
                    }
                    Op::Drop(p) => {
                        let before = promotions;
                        let outcome = roll.drop(&p, &mut |_: &u8, _: &()| promotions += 1).unwrap();
                        if let DropOutcome::Dropped { promoted, .. } = outcome {
                            prop_assert_eq!(promotions - before, usize::from(promoted.is_some()));
                        } else {
                            prop_assert_eq!(promotions, before);
                        }
                    }
                }
                let roster: Vec<u8> = roll.roster().copied().collect();
                let waitlist: Vec<u8> = roll.waitlist().copied().collect();
                prop_assert!(roster.len() <= roll.capacity());
                prop_assert!(waitlist.len() <= 10);
                prop_assert!(waitlist.is_empty() || roll.open_seats() == 0);
                for p in &roster {
                    prop_assert!(!waitlist.contains(p));
                }
            }
        }
    }
}
