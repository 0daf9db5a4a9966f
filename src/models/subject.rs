//! Subject model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a subject's delivery mode.
///
/// Determines which classrooms can host the subject (see
/// [`RoomType::suits`](super::RoomType::suits)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectType {
    /// Lecture-style subject.
    Theory,
    /// Lab-style subject.
    Practical,
}

/// A subject offered in the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject code (e.g. "CS101").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Delivery mode (theory or practical).
    pub subject_type: SubjectType,
    /// Credit hours. Informational; not consulted during generation.
    pub credits: u32,
}

impl Subject {
    /// Creates a new subject with the given code.
    pub fn new(id: impl Into<String>, subject_type: SubjectType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subject_type,
            credits: 0,
        }
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit hours.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectType::Theory => write!(f, "Theory"),
            SubjectType::Practical => write!(f, "Practical"),
        }
    }
}
