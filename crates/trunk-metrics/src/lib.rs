//! Tree trunk measurement estimation from a single photograph.
//!
//! This crate provides:
//! - the end-to-end [`TrunkEstimator`]: image decode, edge/contour
//!   silhouette extraction, minimum-enclosing-circle diameter estimate,
//!   and species-specific allometric height/canopy projection
//! - stable re-exports of the `trunk-metrics-core` domain types
//!
//! ## Quickstart
//!
//! ```no_run
//! use trunk_metrics::{SpeciesTable, TrunkEstimator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let estimator = TrunkEstimator::new(SpeciesTable::builtin());
//! let m = estimator.estimate("trunk.jpg", Some("Oak"))?;
//! println!("dbh {} cm, height {} m", m.dbh_cm, m.height_m);
//! # Ok(())
//! # }
//! ```
//!
//! ## Calibration
//!
//! The pixel-to-centimeter scale is the placeholder constant
//! [`SCALE_CM_PER_PIXEL`] and must be calibrated externally (known
//! reference object or camera geometry) before the outputs mean anything
//! physically. Override it per estimator via [`EstimatorParams`].
//!
//! ## API map
//! - `trunk_metrics::core`: species table, measurements, allometry.
//! - [`preprocess`]: grayscale / blur / Canny stages.
//! - [`contour`]: external contour extraction and selection.
//! - [`enclosing`]: minimum enclosing circle.

pub use trunk_metrics_core as core;

pub use trunk_metrics_core::{
    init_with_level, HealthStatus, SpeciesCoefficients, SpeciesTable, SpeciesTableExport,
    TrunkMeasurement, DEFAULT_SPECIES,
};

#[cfg(feature = "tracing")]
pub use trunk_metrics_core::init_tracing;

mod error;
mod estimator;
mod params;

pub mod contour;
pub mod enclosing;
pub mod preprocess;

pub use error::EstimateError;
pub use estimator::TrunkEstimator;
pub use params::{EstimatorParams, SCALE_CM_PER_PIXEL};
