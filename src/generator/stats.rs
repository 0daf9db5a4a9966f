//! Timetable coverage metrics.
//!
//! Computes summary indicators from a generation result and the
//! catalogue it was produced from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|------------|
//! | Fill Rate | Lessons placed / class slots in the grid |
//! | Lessons by Teacher | How many lessons each teacher gives |
//! | Lessons by Day | How the week's load is distributed |
//! | Lessons by Classroom | How often each room is used |

use std::collections::HashMap;

use crate::catalogue::Catalogue;
use crate::models::{Day, EntryKind, GeneratedTimetable};

/// Coverage indicators for one generated timetable.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Class slots in the catalogue's grid.
    pub class_slot_count: usize,
    /// Lessons actually placed.
    pub lesson_count: usize,
    /// Break entries materialized.
    pub break_count: usize,
    /// Class slots left empty.
    pub unfilled_count: usize,
    /// Lessons placed over class slots available (0.0..1.0).
    pub fill_rate: f64,
    /// Lesson count per teacher ID.
    pub lessons_by_teacher: HashMap<String, usize>,
    /// Lesson count per day.
    pub lessons_by_day: HashMap<Day, usize>,
    /// Lesson count per classroom ID.
    pub lessons_by_classroom: HashMap<String, usize>,
}

impl TimetableKpi {
    /// Computes coverage metrics for a generation result.
    pub fn calculate(timetable: &GeneratedTimetable, catalogue: &Catalogue) -> Self {
        let class_slot_count = catalogue.class_slot_count();
        let mut lesson_count = 0;
        let mut break_count = 0;
        let mut lessons_by_teacher: HashMap<String, usize> = HashMap::new();
        let mut lessons_by_day: HashMap<Day, usize> = HashMap::new();
        let mut lessons_by_classroom: HashMap<String, usize> = HashMap::new();

        for entry in &timetable.entries {
            match &entry.kind {
                EntryKind::Break => break_count += 1,
                EntryKind::Lesson {
                    teacher_id,
                    classroom_id,
                    ..
                } => {
                    lesson_count += 1;
                    *lessons_by_teacher.entry(teacher_id.clone()).or_insert(0) += 1;
                    *lessons_by_day.entry(entry.day).or_insert(0) += 1;
                    *lessons_by_classroom
                        .entry(classroom_id.clone())
                        .or_insert(0) += 1;
                }
            }
        }

        let fill_rate = if class_slot_count == 0 {
            1.0
        } else {
            lesson_count as f64 / class_slot_count as f64
        };

        Self {
            class_slot_count,
            lesson_count,
            break_count,
            unfilled_count: timetable.unfilled.len(),
            fill_rate,
            lessons_by_teacher,
            lessons_by_day,
            lessons_by_classroom,
        }
    }

    /// Whether coverage reaches the given minimum fill rate.
    pub fn meets_fill_rate(&self, min_fill_rate: f64) -> bool {
        self.fill_rate >= min_fill_rate
    }
}
