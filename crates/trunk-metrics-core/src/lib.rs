//! Core types and equations for single-photo tree trunk measurement.
//!
//! This crate is intentionally small and purely numeric. It does *not*
//! depend on any image codec or processing backend: it holds the species
//! coefficient table, the allometric projection formulas, and the rounded
//! measurement types exchanged with callers.

mod allometry;
mod logger;
mod measurement;
mod species;

pub use allometry::{canopy_m, girth_cm, height_m};
pub use measurement::{round_to_tenth, HealthStatus, TrunkMeasurement};
pub use species::{
    CoefficientExport, SpeciesCoefficients, SpeciesTable, SpeciesTableExport, DEFAULT_SPECIES,
};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
