//! Generate-then-persist workflow.
//!
//! Ties the generator to a [`TimetableStore`]: one call validates the
//! catalogue, generates a fresh timetable, stores it, and makes it the
//! active one. On any failure the store is left as it was.

use log::info;
use rand::Rng;

use crate::catalogue::Catalogue;
use crate::generator::{GenerateError, TimetableGenerator};
use crate::models::Timetable;
use crate::store::TimetableStore;

/// Generates a timetable from the catalogue and activates it.
///
/// Seeds the generator from operating system entropy. The previously
/// active timetable, if any, is deactivated but kept in the store.
pub fn generate_and_activate<S: TimetableStore>(
    store: &S,
    catalogue: &Catalogue,
    name: impl Into<String>,
) -> Result<Timetable, GenerateError> {
    generate_and_activate_with_rng(store, catalogue, name, &mut rand::rng())
}

/// Same as [`generate_and_activate`] with a caller-supplied RNG.
pub fn generate_and_activate_with_rng<S: TimetableStore, R: Rng>(
    store: &S,
    catalogue: &Catalogue,
    name: impl Into<String>,
    rng: &mut R,
) -> Result<Timetable, GenerateError> {
    let generated = TimetableGenerator::new().generate_with_rng(catalogue, name, rng)?;
    let timetable = store.replace_active(&generated)?;

    info!(
        "timetable {} '{}' is now active",
        timetable.id, timetable.name
    );
    Ok(timetable)
}
