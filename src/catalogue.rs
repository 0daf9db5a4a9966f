//! Catalogue: the read-only input snapshot for one generation run.
//!
//! Bundles everything a run needs so the generator can work from a
//! single borrowed value with no global state. Slots are kept sorted
//! by day and start time; the generator's slot iteration order is the
//! catalogue's order.

use serde::{Deserialize, Serialize};

use crate::models::{Classroom, Day, Subject, Teacher, TimeSlot};

/// The complete input to a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    /// All offered subjects.
    pub subjects: Vec<Subject>,
    /// All teachers.
    pub teachers: Vec<Teacher>,
    /// All classrooms.
    pub classrooms: Vec<Classroom>,
    /// The weekly slot grid, sorted by day then start time.
    /// The constructors keep this order.
    pub slots: Vec<TimeSlot>,
}

impl Catalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalogue from complete lists, sorting the slot grid.
    pub fn from_parts(
        subjects: Vec<Subject>,
        teachers: Vec<Teacher>,
        classrooms: Vec<Classroom>,
        mut slots: Vec<TimeSlot>,
    ) -> Self {
        slots.sort_by_key(|s| (s.day, s.start_time, s.end_time));
        Self {
            subjects,
            teachers,
            classrooms,
            slots,
        }
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a classroom.
    pub fn with_classroom(mut self, classroom: Classroom) -> Self {
        self.classrooms.push(classroom);
        self
    }

    /// Adds a time slot, keeping the grid sorted.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.push(slot);
        self.slots.sort_by_key(|s| (s.day, s.start_time, s.end_time));
        self
    }

    /// Finds a subject by code.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Finds a teacher by ID.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Finds a classroom by ID.
    pub fn classroom(&self, id: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    /// All class slots (non-breaks), in grid order.
    pub fn class_slots(&self) -> Vec<&TimeSlot> {
        self.slots.iter().filter(|s| !s.is_break).collect()
    }

    /// Class slots of one day, in chronological order.
    pub fn class_slots_on(&self, day: Day) -> Vec<&TimeSlot> {
        self.slots
            .iter()
            .filter(|s| !s.is_break && s.day == day)
            .collect()
    }

    /// All break slots, in grid order.
    pub fn break_slots(&self) -> Vec<&TimeSlot> {
        self.slots.iter().filter(|s| s.is_break).collect()
    }

    /// Number of class slots in the week.
    pub fn class_slot_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_break).count()
    }
}
