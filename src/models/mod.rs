//! Timetabling domain models.
//!
//! Core data types for the weekly scheduling problem and its solution:
//! the inputs (subjects, teachers, classrooms, the slot grid) and the
//! outputs (timetables and their entries).

mod classroom;
mod slot;
mod subject;
mod teacher;
mod timetable;

pub use classroom::{Classroom, RoomType};
pub use slot::{BreakType, Day, TimeSlot};
pub use subject::{Subject, SubjectType};
pub use teacher::Teacher;
pub use timetable::{
    EntryKind, GeneratedTimetable, Timetable, TimetableEntry, TimetableId, UnfilledReason,
    UnfilledSlot,
};
