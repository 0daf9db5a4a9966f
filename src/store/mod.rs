//! Timetable persistence boundary.
//!
//! The engine hands a finished [`GeneratedTimetable`] to a store and
//! never writes anywhere itself. Stores own ID assignment and the
//! single-active-timetable rule: activation flips are atomic, so a
//! reader never observes zero or two active timetables.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::{GeneratedTimetable, Timetable, TimetableEntry, TimetableId};

/// Errors from timetable stores.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No timetable with the given ID exists.
    #[error("timetable {0} not found")]
    NotFound(TimetableId),
    /// The write would violate an entry uniqueness rule.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Persistence contract for timetables.
///
/// Within one stored timetable, no two lessons may share a
/// (day, slot, teacher) or a (day, slot, classroom) combination; a
/// write that would break this is rejected wholesale.
pub trait TimetableStore {
    /// Persists a generation result and makes it the single active
    /// timetable. Atomic: on success the new timetable is stored and
    /// active and every other timetable is inactive; on failure
    /// nothing changed.
    fn replace_active(&self, generated: &GeneratedTimetable) -> Result<Timetable, StoreError>;

    /// Makes an existing timetable the single active one.
    fn activate(&self, id: TimetableId) -> Result<Timetable, StoreError>;

    /// The currently active timetable, if any.
    fn active(&self) -> Result<Option<Timetable>, StoreError>;

    /// Fetches one timetable by ID.
    fn timetable(&self, id: TimetableId) -> Result<Timetable, StoreError>;

    /// The entries of one timetable.
    fn entries(&self, id: TimetableId) -> Result<Vec<TimetableEntry>, StoreError>;

    /// All stored timetables, newest first.
    fn list(&self) -> Result<Vec<Timetable>, StoreError>;

    /// Deletes a timetable together with its entries.
    fn remove(&self, id: TimetableId) -> Result<(), StoreError>;
}
