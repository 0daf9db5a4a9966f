//! In-memory timetable store.
//!
//! Reference [`TimetableStore`] implementation backed by a `RwLock`.
//! Suitable for tests and local use; every operation takes the lock
//! once, so each is atomic with respect to concurrent readers.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use log::info;

use super::{StoreError, TimetableStore};
use crate::models::{GeneratedTimetable, Timetable, TimetableEntry, TimetableId};

/// Shared in-memory store.
///
/// Clones share the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<StoreData>>,
}

#[derive(Debug)]
struct StoreData {
    timetables: Vec<Timetable>,
    entries: HashMap<TimetableId, Vec<TimetableEntry>>,
    next_id: i64,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            timetables: Vec::new(),
            entries: HashMap::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored timetables.
    pub fn timetable_count(&self) -> usize {
        self.data.read().unwrap().timetables.len()
    }

    /// Removes all timetables and entries.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.timetables.clear();
        data.entries.clear();
        data.next_id = 1;
    }
}

/// Rejects entry lists that would break the per-slot uniqueness rules.
fn check_entry_uniqueness(entries: &[TimetableEntry]) -> Result<(), StoreError> {
    let mut teacher_slots = HashSet::new();
    let mut classroom_slots = HashSet::new();

    for entry in entries {
        if let Some(teacher_id) = entry.teacher_id() {
            if !teacher_slots.insert((entry.day, entry.slot_id.as_str(), teacher_id)) {
                return Err(StoreError::Conflict(format!(
                    "teacher '{}' booked twice for {} slot '{}'",
                    teacher_id, entry.day, entry.slot_id
                )));
            }
        }
        if let Some(classroom_id) = entry.classroom_id() {
            if !classroom_slots.insert((entry.day, entry.slot_id.as_str(), classroom_id)) {
                return Err(StoreError::Conflict(format!(
                    "classroom '{}' booked twice for {} slot '{}'",
                    classroom_id, entry.day, entry.slot_id
                )));
            }
        }
    }

    Ok(())
}

impl TimetableStore for MemoryStore {
    fn replace_active(&self, generated: &GeneratedTimetable) -> Result<Timetable, StoreError> {
        // Checked before taking the write lock; a rejected write leaves
        // the store untouched.
        check_entry_uniqueness(&generated.entries)?;

        let mut data = self.data.write().unwrap();
        let id = TimetableId(data.next_id);
        data.next_id += 1;

        for t in &mut data.timetables {
            t.is_active = false;
        }

        let timetable = Timetable {
            id,
            name: generated.name.clone(),
            is_active: true,
            created_at: generated.created_at,
        };
        data.timetables.push(timetable.clone());
        data.entries.insert(id, generated.entries.clone());

        info!(
            "stored timetable {} '{}' with {} entries and activated it",
            id,
            timetable.name,
            generated.entries.len()
        );
        Ok(timetable)
    }

    fn activate(&self, id: TimetableId) -> Result<Timetable, StoreError> {
        let mut data = self.data.write().unwrap();
        if !data.timetables.iter().any(|t| t.id == id) {
            return Err(StoreError::NotFound(id));
        }

        let mut activated = None;
        for t in &mut data.timetables {
            t.is_active = t.id == id;
            if t.is_active {
                activated = Some(t.clone());
            }
        }

        info!("activated timetable {id}");
        activated.ok_or(StoreError::NotFound(id))
    }

    fn active(&self) -> Result<Option<Timetable>, StoreError> {
        let data = self.data.read().unwrap();
        Ok(data.timetables.iter().find(|t| t.is_active).cloned())
    }

    fn timetable(&self, id: TimetableId) -> Result<Timetable, StoreError> {
        let data = self.data.read().unwrap();
        data.timetables
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn entries(&self, id: TimetableId) -> Result<Vec<TimetableEntry>, StoreError> {
        let data = self.data.read().unwrap();
        data.entries
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<Timetable>, StoreError> {
        let data = self.data.read().unwrap();
        let mut timetables = data.timetables.clone();
        timetables.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(timetables)
    }

    fn remove(&self, id: TimetableId) -> Result<(), StoreError> {
        let mut data = self.data.write().unwrap();
        let before = data.timetables.len();
        data.timetables.retain(|t| t.id != id);
        if data.timetables.len() == before {
            return Err(StoreError::NotFound(id));
        }
        data.entries.remove(&id);

        info!("removed timetable {id}");
        Ok(())
    }
}
