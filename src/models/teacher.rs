//! Teacher model.
//!
//! A teacher brings a set of qualified subjects, a daily working window,
//! and a per-day lecture quota. The working window bounds when a lesson
//! may *start*; the quota bounds how many lessons the teacher gives on
//! any single day.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A teacher who can be assigned to lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Contact email, if known.
    pub email: Option<String>,
    /// Subject codes this teacher is qualified to teach.
    pub subjects: Vec<String>,
    /// Earliest time of day a lesson may start (inclusive).
    pub start_time: NaiveTime,
    /// Latest time of day a lesson may start (inclusive).
    pub end_time: NaiveTime,
    /// Maximum lessons on any single day.
    pub lectures_per_day: u32,
    /// Maximum back-to-back lessons. Stored for record keeping only;
    /// generation does not enforce it.
    pub max_continuous_lectures: u32,
}

impl Teacher {
    /// Creates a new teacher with the given working window.
    ///
    /// Defaults: 4 lectures per day, 2 continuous lectures, no subjects.
    pub fn new(id: impl Into<String>, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: None,
            subjects: Vec::new(),
            start_time,
            end_time,
            lectures_per_day: 4,
            max_continuous_lectures: 2,
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds a qualified subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }

    /// Replaces the qualified subject list.
    pub fn with_subjects(mut self, subject_ids: Vec<String>) -> Self {
        self.subjects = subject_ids;
        self
    }

    /// Sets the daily lecture quota.
    pub fn with_daily_limit(mut self, lectures_per_day: u32) -> Self {
        self.lectures_per_day = lectures_per_day;
        self
    }

    /// Sets the continuous lecture limit.
    pub fn with_continuous_limit(mut self, max_continuous: u32) -> Self {
        self.max_continuous_lectures = max_continuous;
        self
    }

    /// Whether a lesson starting at `time` falls inside the working window.
    ///
    /// Both bounds are inclusive: a lesson may start exactly at
    /// `start_time` or exactly at `end_time`, even if the slot itself
    /// runs past the window's end.
    #[inline]
    pub fn window_contains(&self, time: NaiveTime) -> bool {
        self.start_time <= time && time <= self.end_time
    }

    /// Whether this teacher is qualified for the given subject.
    pub fn is_qualified_for(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_id)
    }

    /// Whether this teacher has any qualified subjects.
    #[inline]
    pub fn has_subjects(&self) -> bool {
        !self.subjects.is_empty()
    }
}
