//! Week grid: days, breaks, and time slots.
//!
//! The scheduling week is a fixed Monday through Saturday grid. Each
//! [`TimeSlot`] is a contiguous interval on one day, flagged either as
//! a class slot (assignable) or a break (materialized as-is).

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the scheduling week.
///
/// Sunday is not part of the grid. The derived ordering follows the
/// week: Monday first, Saturday last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All scheduling days in week order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        };
        write!(f, "{name}")
    }
}

/// Kind of break a slot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakType {
    /// Short recess between lessons.
    Short,
    /// Long break (e.g. lunch).
    Long,
}

/// One interval of the weekly grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Day this slot belongs to.
    pub day: Day,
    /// Interval start.
    pub start_time: NaiveTime,
    /// Interval end.
    pub end_time: NaiveTime,
    /// Whether this slot is a break rather than a class slot.
    pub is_break: bool,
    /// Break kind; only meaningful when `is_break` is set.
    pub break_type: Option<BreakType>,
}

impl TimeSlot {
    /// Creates a new class slot.
    pub fn new(
        id: impl Into<String>,
        day: Day,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            day,
            start_time,
            end_time,
            is_break: false,
            break_type: None,
        }
    }

    /// Marks this slot as a break of the given kind.
    pub fn with_break(mut self, break_type: BreakType) -> Self {
        self.is_break = true;
        self.break_type = Some(break_type);
        self
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_day_week_order() {
        assert_eq!(Day::ALL.len(), 6);
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::ALL[5], Day::Saturday);
        assert!(Day::Monday < Day::Tuesday);
        assert!(Day::Friday < Day::Saturday);
    }

    #[test]
    fn test_day_display() {
        assert_eq!(Day::Monday.to_string(), "Monday");
        assert_eq!(Day::Saturday.to_string(), "Saturday");
    }

    #[test]
    fn test_class_slot_builder() {
        let slot = TimeSlot::new("S1", Day::Monday, t(9, 0), t(10, 0));
        assert_eq!(slot.id, "S1");
        assert_eq!(slot.day, Day::Monday);
        assert!(!slot.is_break);
        assert!(slot.break_type.is_none());
    }

    #[test]
    fn test_break_slot_builder() {
        let slot = TimeSlot::new("B1", Day::Monday, t(10, 0), t(10, 15))
            .with_break(BreakType::Short);
        assert!(slot.is_break);
        assert_eq!(slot.break_type, Some(BreakType::Short));
    }

    #[test]
    fn test_slot_display() {
        let slot = TimeSlot::new("S1", Day::Wednesday, t(9, 0), t(10, 30));
        assert_eq!(slot.to_string(), "Wednesday 09:00-10:30");
    }

    #[test]
    fn test_break_type_serialized_lowercase() {
        let json = serde_json::to_string(&BreakType::Long).unwrap();
        assert_eq!(json, "\"long\"");
    }
}
