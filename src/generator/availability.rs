//! Per-run booking state.
//!
//! Tracks which teachers and classrooms are already committed for each
//! slot, and how many lessons each teacher has on each day. State only
//! ever grows during a run; a new run starts from a fresh tracker.

use std::collections::{HashMap, HashSet};

use crate::models::Day;

/// Booking state for one generation run.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityTracker {
    /// Occupied (day, slot) pairs per teacher ID.
    teacher_bookings: HashMap<String, HashSet<(Day, String)>>,
    /// Occupied (day, slot) pairs per classroom ID.
    classroom_bookings: HashMap<String, HashSet<(Day, String)>>,
    /// Lessons assigned so far per (teacher ID, day).
    daily_lectures: HashMap<(String, Day), u32>,
}

impl AvailabilityTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a teacher has no booking for the given slot.
    pub fn is_teacher_free(&self, teacher_id: &str, day: Day, slot_id: &str) -> bool {
        !Self::occupied(&self.teacher_bookings, teacher_id, day, slot_id)
    }

    /// Whether a classroom has no booking for the given slot.
    pub fn is_classroom_free(&self, classroom_id: &str, day: Day, slot_id: &str) -> bool {
        !Self::occupied(&self.classroom_bookings, classroom_id, day, slot_id)
    }

    /// Lessons assigned to a teacher on a day so far.
    pub fn teacher_daily_count(&self, teacher_id: &str, day: Day) -> u32 {
        self.daily_lectures
            .get(&(teacher_id.to_string(), day))
            .copied()
            .unwrap_or(0)
    }

    /// Marks a teacher as occupied for a slot.
    pub fn book_teacher(&mut self, teacher_id: &str, day: Day, slot_id: &str) {
        self.teacher_bookings
            .entry(teacher_id.to_string())
            .or_default()
            .insert((day, slot_id.to_string()));
    }

    /// Marks a classroom as occupied for a slot.
    pub fn book_classroom(&mut self, classroom_id: &str, day: Day, slot_id: &str) {
        self.classroom_bookings
            .entry(classroom_id.to_string())
            .or_default()
            .insert((day, slot_id.to_string()));
    }

    /// Counts one more lesson for a teacher on a day.
    pub fn increment_daily_count(&mut self, teacher_id: &str, day: Day) {
        *self
            .daily_lectures
            .entry((teacher_id.to_string(), day))
            .or_insert(0) += 1;
    }

    fn occupied(
        bookings: &HashMap<String, HashSet<(Day, String)>>,
        id: &str,
        day: Day,
        slot_id: &str,
    ) -> bool {
        bookings
            .get(id)
            .map(|slots| slots.contains(&(day, slot_id.to_string())))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tracker_is_all_free() {
        let tracker = AvailabilityTracker::new();
        assert!(tracker.is_teacher_free("T1", Day::Monday, "S1"));
        assert!(tracker.is_classroom_free("R1", Day::Monday, "S1"));
        assert_eq!(tracker.teacher_daily_count("T1", Day::Monday), 0);
    }

    #[test]
    fn test_book_teacher_is_slot_scoped() {
        let mut tracker = AvailabilityTracker::new();
        tracker.book_teacher("T1", Day::Monday, "S1");

        assert!(!tracker.is_teacher_free("T1", Day::Monday, "S1"));
        // Other slots, days, and teachers are unaffected
        assert!(tracker.is_teacher_free("T1", Day::Monday, "S2"));
        assert!(tracker.is_teacher_free("T1", Day::Tuesday, "S1"));
        assert!(tracker.is_teacher_free("T2", Day::Monday, "S1"));
    }

    #[test]
    fn test_book_classroom_is_slot_scoped() {
        let mut tracker = AvailabilityTracker::new();
        tracker.book_classroom("R1", Day::Friday, "S3");

        assert!(!tracker.is_classroom_free("R1", Day::Friday, "S3"));
        assert!(tracker.is_classroom_free("R1", Day::Friday, "S4"));
        assert!(tracker.is_classroom_free("R2", Day::Friday, "S3"));
    }

    #[test]
    fn test_daily_count_accumulates_per_day() {
        let mut tracker = AvailabilityTracker::new();
        tracker.increment_daily_count("T1", Day::Monday);
        tracker.increment_daily_count("T1", Day::Monday);
        tracker.increment_daily_count("T1", Day::Tuesday);

        assert_eq!(tracker.teacher_daily_count("T1", Day::Monday), 2);
        assert_eq!(tracker.teacher_daily_count("T1", Day::Tuesday), 1);
        assert_eq!(tracker.teacher_daily_count("T1", Day::Wednesday), 0);
        assert_eq!(tracker.teacher_daily_count("T2", Day::Monday), 0);
    }

    #[test]
    fn test_teacher_and_classroom_bookings_independent() {
        let mut tracker = AvailabilityTracker::new();
        tracker.book_teacher("X", Day::Monday, "S1");
        assert!(tracker.is_classroom_free("X", Day::Monday, "S1"));
    }
}
