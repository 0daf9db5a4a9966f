//! Catalogue validation.
//!
//! Checks the structural integrity of a catalogue before generation.
//! Detects:
//! - Empty input categories
//! - Teachers with no qualified subjects
//! - Duplicate IDs
//! - Qualifications referencing unknown subjects
//! - Slots sharing a day and time range, or with inverted ranges
//!
//! Advisory conditions that do not block generation are reported
//! separately by [`catalogue_warnings`].

use std::collections::HashSet;

use crate::catalogue::Catalogue;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The catalogue has no teachers.
    NoTeachers,
    /// The catalogue has no subjects.
    NoSubjects,
    /// The catalogue has no classrooms.
    NoClassrooms,
    /// The catalogue has no class slots.
    NoTimeSlots,
    /// A teacher has no qualified subjects.
    TeacherWithoutSubjects,
    /// Two entities of the same category share an ID.
    DuplicateId,
    /// A teacher qualification references a subject that doesn't exist.
    UnknownSubject,
    /// Two slots share the same day and time range.
    DuplicateSlot,
    /// A slot or working window ends before it starts.
    InvertedTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A non-blocking observation about the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueWarning {
    /// Warning category.
    pub kind: CatalogueWarningKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of advisory warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueWarningKind {
    /// No class slot lies fully inside a teacher's working window.
    TeacherOutsideSlots,
    /// No classroom can host a subject's type.
    SubjectWithoutClassroom,
}

/// Validates a catalogue before generation.
///
/// Checks:
/// 1. Teachers, subjects, classrooms, and class slots are all non-empty
///    (a grid made only of breaks counts as having no class slots).
/// 2. Every teacher has at least one qualified subject.
/// 3. No duplicate IDs within a category.
/// 4. Every qualification points at an existing subject.
/// 5. No two slots share a day and time range; no inverted ranges.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalogue(catalogue: &Catalogue) -> ValidationResult {
    let mut errors = Vec::new();

    if catalogue.teachers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTeachers,
            "No teachers found. Please add teachers first.",
        ));
    }
    if catalogue.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoSubjects,
            "No subjects found. Please add subjects first.",
        ));
    }
    if catalogue.classrooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoClassrooms,
            "No classrooms found. Please add classrooms first.",
        ));
    }
    if catalogue.class_slots().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTimeSlots,
            "No time slots found. Please add time slots first.",
        ));
    }

    for teacher in &catalogue.teachers {
        if !teacher.has_subjects() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TeacherWithoutSubjects,
                format!("Teacher '{}' has no subjects assigned.", teacher.id),
            ));
        }
        if teacher.end_time < teacher.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedTimeRange,
                format!("Teacher '{}' has end time before start time", teacher.id),
            ));
        }
    }

    // Duplicate IDs per category
    let mut subject_ids = HashSet::new();
    for s in &catalogue.subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
    }
    let mut teacher_ids = HashSet::new();
    for t in &catalogue.teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }
    let mut classroom_ids = HashSet::new();
    for c in &catalogue.classrooms {
        if !classroom_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom ID: {}", c.id),
            ));
        }
    }
    let mut slot_ids = HashSet::new();
    for s in &catalogue.slots {
        if !slot_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate time slot ID: {}", s.id),
            ));
        }
    }

    // Qualification references
    for teacher in &catalogue.teachers {
        for subject_id in &teacher.subjects {
            if !subject_ids.contains(subject_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!(
                        "Teacher '{}' references unknown subject '{}'",
                        teacher.id, subject_id
                    ),
                ));
            }
        }
    }

    // Slot grid integrity
    let mut ranges = HashSet::new();
    for slot in &catalogue.slots {
        if slot.end_time <= slot.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedTimeRange,
                format!("Time slot '{}' ends at or before it starts", slot.id),
            ));
        }
        if !ranges.insert((slot.day, slot.start_time, slot.end_time)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!("Duplicate time slot: {slot}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports advisory conditions that make a poor timetable likely.
///
/// - A teacher whose working window fully contains no class slot.
///   The containment test is strict (slot start and end both within
///   the window), so a teacher may draw a warning yet still pick up
///   slots that merely start inside the window.
/// - A subject no classroom can host.
///
/// Warnings never block generation.
pub fn catalogue_warnings(catalogue: &Catalogue) -> Vec<CatalogueWarning> {
    let mut warnings = Vec::new();

    if !catalogue.slots.is_empty() {
        for teacher in &catalogue.teachers {
            let available = catalogue
                .class_slots()
                .iter()
                .filter(|s| {
                    s.start_time >= teacher.start_time && s.end_time <= teacher.end_time
                })
                .count();
            if available == 0 {
                warnings.push(CatalogueWarning {
                    kind: CatalogueWarningKind::TeacherOutsideSlots,
                    message: format!(
                        "Teacher '{}' has no available time slots within their working hours",
                        teacher.id
                    ),
                });
            }
        }
    }

    if !catalogue.classrooms.is_empty() {
        for subject in &catalogue.subjects {
            let suitable = catalogue
                .classrooms
                .iter()
                .filter(|c| c.suits(subject.subject_type))
                .count();
            if suitable == 0 {
                warnings.push(CatalogueWarning {
                    kind: CatalogueWarningKind::SubjectWithoutClassroom,
                    message: format!(
                        "No suitable classrooms found for {} subject '{}'",
                        subject.subject_type, subject.id
                    ),
                });
            }
        }
    }

    warnings
}
