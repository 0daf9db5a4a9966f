//! Timetable (solution) model.
//!
//! A generated timetable is a complete set of per-slot entries for one
//! week: breaks carried over from the grid, and lessons binding a
//! subject, a teacher, and a classroom to a class slot. Class slots the
//! generator could not fill are listed alongside the entries rather
//! than silently dropped.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Day;

/// Store-assigned timetable identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimetableId(pub i64);

impl fmt::Display for TimetableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted timetable record.
///
/// At most one timetable is active at a time; stores flip the flag
/// atomically when a timetable is activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Store-assigned identifier.
    pub id: TimetableId,
    /// Human-readable name (e.g. "Fall 2026, week 36").
    pub name: String,
    /// Whether this is the timetable currently in effect.
    pub is_active: bool,
    /// When the timetable was generated.
    pub created_at: DateTime<Utc>,
}

/// What occupies a slot in a timetable.
///
/// A lesson always carries all three of subject, teacher, and
/// classroom; there is no partially assigned state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// The slot is a break; no one is assigned.
    Break,
    /// A subject taught by a teacher in a classroom.
    Lesson {
        /// Assigned subject code.
        subject_id: String,
        /// Assigned teacher ID.
        teacher_id: String,
        /// Assigned classroom ID.
        classroom_id: String,
    },
}

/// One cell of a timetable: what happens in one slot on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Day of the slot.
    pub day: Day,
    /// ID of the occupied time slot.
    pub slot_id: String,
    /// Break or lesson.
    pub kind: EntryKind,
}

impl TimetableEntry {
    /// Creates a break entry for a slot.
    pub fn break_at(day: Day, slot_id: impl Into<String>) -> Self {
        Self {
            day,
            slot_id: slot_id.into(),
            kind: EntryKind::Break,
        }
    }

    /// Creates a lesson entry.
    pub fn lesson(
        day: Day,
        slot_id: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        classroom_id: impl Into<String>,
    ) -> Self {
        Self {
            day,
            slot_id: slot_id.into(),
            kind: EntryKind::Lesson {
                subject_id: subject_id.into(),
                teacher_id: teacher_id.into(),
                classroom_id: classroom_id.into(),
            },
        }
    }

    /// Whether this entry is a break.
    #[inline]
    pub fn is_break(&self) -> bool {
        matches!(self.kind, EntryKind::Break)
    }

    /// The assigned subject, if this entry is a lesson.
    pub fn subject_id(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Lesson { subject_id, .. } => Some(subject_id),
            EntryKind::Break => None,
        }
    }

    /// The assigned teacher, if this entry is a lesson.
    pub fn teacher_id(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Lesson { teacher_id, .. } => Some(teacher_id),
            EntryKind::Break => None,
        }
    }

    /// The assigned classroom, if this entry is a lesson.
    pub fn classroom_id(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Lesson { classroom_id, .. } => Some(classroom_id),
            EntryKind::Break => None,
        }
    }
}

impl fmt::Display for TimetableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EntryKind::Break => write!(f, "{} {} - BREAK", self.day, self.slot_id),
            EntryKind::Lesson {
                subject_id,
                teacher_id,
                classroom_id,
            } => write!(
                f,
                "{} {} - {} ({} in {})",
                self.day, self.slot_id, subject_id, teacher_id, classroom_id
            ),
        }
    }
}

/// Why a class slot was left without a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnfilledReason {
    /// No teacher was inside its window, under quota, and unbooked.
    NoEligibleTeacher,
    /// Every classroom was already occupied for the slot.
    NoFreeClassroom,
    /// Candidates existed but no drawn pairing was compatible.
    NoCompatibleAssignment,
}

/// A class slot the generator left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfilledSlot {
    /// Day of the gap.
    pub day: Day,
    /// ID of the empty slot.
    pub slot_id: String,
    /// Why no lesson was placed.
    pub reason: UnfilledReason,
}

/// The outcome of one generation run.
///
/// Holds the full entry list plus any class slots that could not be
/// filled. Not yet persisted; hand it to a store to assign an ID and
/// make it active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTimetable {
    /// Requested timetable name.
    pub name: String,
    /// When the run happened.
    pub created_at: DateTime<Utc>,
    /// All entries, breaks first, then lessons in day and slot order.
    pub entries: Vec<TimetableEntry>,
    /// Class slots left without a lesson.
    pub unfilled: Vec<UnfilledSlot>,
}

impl GeneratedTimetable {
    /// Creates an empty result with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
            entries: Vec::new(),
            unfilled: Vec::new(),
        }
    }

    /// Adds an entry.
    pub fn add_entry(&mut self, entry: TimetableEntry) {
        self.entries.push(entry);
    }

    /// Records a class slot that could not be filled.
    pub fn add_unfilled(&mut self, gap: UnfilledSlot) {
        self.unfilled.push(gap);
    }

    /// Whether every class slot received a lesson.
    pub fn is_complete(&self) -> bool {
        self.unfilled.is_empty()
    }

    /// Number of lesson entries.
    pub fn lesson_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_break()).count()
    }

    /// Number of break entries.
    pub fn break_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_break()).count()
    }

    /// Total number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// All entries on a given day.
    pub fn entries_on(&self, day: Day) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// The entry occupying a slot, if any.
    pub fn entry_at(&self, day: Day, slot_id: &str) -> Option<&TimetableEntry> {
        self.entries
            .iter()
            .find(|e| e.day == day && e.slot_id == slot_id)
    }

    /// All lessons taught by a given teacher.
    pub fn lessons_for_teacher(&self, teacher_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher_id() == Some(teacher_id))
            .collect()
    }

    /// All lessons held in a given classroom.
    pub fn lessons_for_classroom(&self, classroom_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.classroom_id() == Some(classroom_id))
            .collect()
    }
}
