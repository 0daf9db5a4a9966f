//! Single-day greedy assignment.
//!
//! Walks one day's class slots in chronological order and fills each
//! with at most one lesson. Ties between equally eligible candidates
//! are broken uniformly at random; a slot nobody can take is recorded
//! as unfilled and the pass moves on without backtracking.
//!
//! # Algorithm
//!
//! For each class slot:
//! 1. Collect teachers whose window contains the slot start, who are
//!    under their daily quota, and who are free for the slot.
//! 2. Shuffle them.
//! 3. For each candidate in shuffled order: draw one free classroom
//!    and one qualified subject, both uniformly. If the room cannot
//!    host the subject's type, move to the next candidate. No second
//!    draw for the same teacher.
//! 4. First compatible draw wins; book the teacher and the room and
//!    bump the teacher's daily count.
//!
//! # Reference
//! de Werra (1985), "An Introduction to Timetabling"

use rand::seq::SliceRandom;
use rand::Rng;

use super::AvailabilityTracker;
use crate::catalogue::Catalogue;
use crate::models::{
    Day, GeneratedTimetable, Teacher, TimeSlot, TimetableEntry, UnfilledReason, UnfilledSlot,
};

/// Schedules the class slots of single days against shared run state.
#[derive(Debug, Clone, Copy)]
pub struct DayScheduler<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> DayScheduler<'a> {
    /// Creates a scheduler over the given catalogue.
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// Fills one day's class slots, appending lessons and gaps to the
    /// timetable and bookings to the tracker.
    pub fn schedule_day<R: Rng>(
        &self,
        day: Day,
        tracker: &mut AvailabilityTracker,
        timetable: &mut GeneratedTimetable,
        rng: &mut R,
    ) {
        for slot in self.catalogue.class_slots_on(day) {
            match self.fill_slot(day, slot, tracker, rng) {
                Ok(entry) => timetable.add_entry(entry),
                Err(reason) => timetable.add_unfilled(UnfilledSlot {
                    day,
                    slot_id: slot.id.clone(),
                    reason,
                }),
            }
        }
    }

    /// Attempts to place one lesson into a slot.
    fn fill_slot<R: Rng>(
        &self,
        day: Day,
        slot: &TimeSlot,
        tracker: &mut AvailabilityTracker,
        rng: &mut R,
    ) -> Result<TimetableEntry, UnfilledReason> {
        let mut eligible: Vec<&Teacher> = self
            .catalogue
            .teachers
            .iter()
            .filter(|t| {
                t.window_contains(slot.start_time)
                    && tracker.teacher_daily_count(&t.id, day) < t.lectures_per_day
                    && tracker.is_teacher_free(&t.id, day, &slot.id)
            })
            .collect();
        if eligible.is_empty() {
            return Err(UnfilledReason::NoEligibleTeacher);
        }
        eligible.shuffle(rng);

        // The free set cannot change while we walk candidates; nothing
        // is booked until a lesson is committed.
        let free_rooms: Vec<_> = self
            .catalogue
            .classrooms
            .iter()
            .filter(|c| tracker.is_classroom_free(&c.id, day, &slot.id))
            .collect();
        if free_rooms.is_empty() {
            return Err(UnfilledReason::NoFreeClassroom);
        }

        for teacher in eligible {
            if teacher.subjects.is_empty() {
                continue;
            }

            // One room draw and one subject draw per candidate; a type
            // mismatch abandons the candidate rather than redrawing.
            let classroom = free_rooms[rng.random_range(0..free_rooms.len())];
            let subject_id = &teacher.subjects[rng.random_range(0..teacher.subjects.len())];
            let subject = match self.catalogue.subject(subject_id) {
                Some(s) => s,
                None => continue,
            };
            if !classroom.suits(subject.subject_type) {
                continue;
            }

            tracker.book_teacher(&teacher.id, day, &slot.id);
            tracker.book_classroom(&classroom.id, day, &slot.id);
            tracker.increment_daily_count(&teacher.id, day);
            return Ok(TimetableEntry::lesson(
                day,
                &slot.id,
                subject_id,
                &teacher.id,
                &classroom.id,
            ));
        }

        Err(UnfilledReason::NoCompatibleAssignment)
    }
}
