//! Allometric projections from trunk diameter.
//!
//! All projections are power laws `metric = a * dbh ^ b` with per-species
//! coefficients. `dbh_cm` is always non-negative (it derives from a circle
//! radius), so real-valued exponentiation is well defined.

use crate::species::SpeciesCoefficients;

/// Girth (circumference) in centimeters from diameter in centimeters.
pub fn girth_cm(dbh_cm: f64) -> f64 {
    std::f64::consts::PI * dbh_cm
}

/// Estimated tree height in meters.
pub fn height_m(coeffs: &SpeciesCoefficients, dbh_cm: f64) -> f64 {
    coeffs.height_a * dbh_cm.powf(coeffs.height_b)
}

/// Estimated canopy spread in meters.
pub fn canopy_m(coeffs: &SpeciesCoefficients, dbh_cm: f64) -> f64 {
    coeffs.canopy_a * dbh_cm.powf(coeffs.canopy_b)
}
