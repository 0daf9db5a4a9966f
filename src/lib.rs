//! Weekly class timetable generation.
//!
//! Builds conflict-free weekly timetables from a catalogue of subjects,
//! teachers, classrooms, and time slots. A single randomized greedy pass
//! assigns one subject, teacher, and classroom to each class slot while
//! honoring teacher working windows, daily lecture quotas, and classroom
//! type suitability. Break slots pass through unassigned.
//!
//! # Modules
//!
//! - **`models`**: domain types (`Subject`, `Teacher`, `Classroom`,
//!   `TimeSlot`, `TimetableEntry`, `GeneratedTimetable`)
//! - **`catalogue`**: the full input set handed to the generator
//! - **`validation`**: input integrity checks and advisory warnings
//! - **`generator`**: the randomized greedy scheduler and its KPIs
//! - **`store`**: persistence trait plus the in-memory reference store
//! - **`service`**: generate-then-persist workflow
//!
//! # Design
//!
//! Generation is a single pass with no backtracking: slots are visited
//! day by day in chronological order and each receives at most one
//! lesson. Randomness in the teacher shuffle and the room and subject
//! draws is the only source of variety between runs; pass a seeded RNG
//! to reproduce a run exactly. Persistence sits behind the
//! [`store::TimetableStore`] trait, so the generator itself never
//! touches storage.
//!
//! # References
//!
//! - de Werra (1985), "An Introduction to Timetabling"
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

pub mod catalogue;
pub mod generator;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;
