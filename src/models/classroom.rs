//! Classroom model.

use serde::{Deserialize, Serialize};

use super::SubjectType;

/// What kinds of subjects a classroom can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// Lecture room; hosts theory subjects only.
    Theory,
    /// Lab; hosts practical subjects only.
    Practical,
    /// General-purpose room; hosts any subject.
    Both,
}

impl RoomType {
    /// Whether a room of this type can host a subject of the given type.
    #[inline]
    pub fn suits(self, subject_type: SubjectType) -> bool {
        match self {
            RoomType::Both => true,
            RoomType::Theory => subject_type == SubjectType::Theory,
            RoomType::Practical => subject_type == SubjectType::Practical,
        }
    }
}

/// A classroom that lessons can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique room number (e.g. "A-204").
    pub id: String,
    /// Seats available. Informational; not consulted during generation.
    pub capacity: u32,
    /// What kinds of subjects this room can host.
    pub room_type: RoomType,
}

impl Classroom {
    /// Creates a new classroom with the given room number.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            capacity: 0,
            room_type,
        }
    }

    /// Sets the seat count.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this room can host a subject of the given type.
    #[inline]
    pub fn suits(&self, subject_type: SubjectType) -> bool {
        self.room_type.suits(subject_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_builder() {
        let room = Classroom::new("A-204", RoomType::Theory).with_capacity(60);
        assert_eq!(room.id, "A-204");
        assert_eq!(room.capacity, 60);
        assert_eq!(room.room_type, RoomType::Theory);
    }

    #[test]
    fn test_theory_room_suitability() {
        let room = Classroom::new("T1", RoomType::Theory);
        assert!(room.suits(SubjectType::Theory));
        assert!(!room.suits(SubjectType::Practical));
    }

    #[test]
    fn test_practical_room_suitability() {
        let room = Classroom::new("L1", RoomType::Practical);
        assert!(!room.suits(SubjectType::Theory));
        assert!(room.suits(SubjectType::Practical));
    }

    #[test]
    fn test_both_room_suits_everything() {
        let room = Classroom::new("G1", RoomType::Both);
        assert!(room.suits(SubjectType::Theory));
        assert!(room.suits(SubjectType::Practical));
    }
}
