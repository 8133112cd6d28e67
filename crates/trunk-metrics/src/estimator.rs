use std::path::Path;

use image::GrayImage;

use trunk_metrics_core::{HealthStatus, SpeciesTable, TrunkMeasurement, DEFAULT_SPECIES};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::contour::{contour_area, external_contours, largest_contour};
use crate::enclosing::{contour_points, min_enclosing_circle};
use crate::error::EstimateError;
use crate::params::EstimatorParams;
use crate::preprocess::{blur, detect_edges, to_grayscale};

/// Single-photo trunk measurement estimator.
///
/// Holds an immutable species table and pipeline parameters; `estimate` is
/// a pure function of its inputs (aside from reading the image file), so a
/// shared `&TrunkEstimator` may serve concurrent callers. There is no
/// caching, no retry, and no state retained between calls.
pub struct TrunkEstimator {
    params: EstimatorParams,
    species: SpeciesTable,
}

impl TrunkEstimator {
    pub fn new(species: SpeciesTable) -> Self {
        Self {
            params: EstimatorParams::default(),
            species,
        }
    }

    pub fn with_params(species: SpeciesTable, params: EstimatorParams) -> Self {
        Self { params, species }
    }

    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    pub fn species(&self) -> &SpeciesTable {
        &self.species
    }

    /// Whether the estimator is initialized and ready: the species table is
    /// loaded with its fallback entry.
    pub fn is_ready(&self) -> bool {
        self.species.is_ready()
    }

    /// Readiness report for hosting layers.
    pub fn health(&self) -> HealthStatus {
        HealthStatus::healthy("trunk-metrics")
    }

    /// Estimate trunk measurements from an image file.
    ///
    /// `species` of `None` selects the `"Default"` coefficients; unknown
    /// names also fall back to `"Default"` (exact, case-sensitive match).
    /// Any failure is terminal and reported immediately; no partial result
    /// is ever returned.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self), fields(species = species.unwrap_or(DEFAULT_SPECIES)))
    )]
    pub fn estimate(
        &self,
        image_path: impl AsRef<Path> + std::fmt::Debug,
        species: Option<&str>,
    ) -> Result<TrunkMeasurement, EstimateError> {
        let path = image_path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(EstimateError::MissingInput);
        }
        if !path.exists() {
            return Err(EstimateError::NotFound(path.to_path_buf()));
        }

        let img = image::open(path)?;
        log::debug!(
            "loaded {} ({}x{})",
            path.display(),
            img.width(),
            img.height()
        );
        self.estimate_decoded(&to_grayscale(&img), species)
    }

    /// Estimate trunk measurements from an already-decoded grayscale image.
    ///
    /// This is the pipeline behind [`estimate`](Self::estimate), exposed so
    /// hosting layers holding in-memory frames can skip the filesystem.
    pub fn estimate_decoded(
        &self,
        gray: &GrayImage,
        species: Option<&str>,
    ) -> Result<TrunkMeasurement, EstimateError> {
        let blurred = blur(gray, self.params.blur_sigma());
        let edges = detect_edges(&blurred, self.params.canny_low, self.params.canny_high);

        let contours = external_contours(&edges);
        if contours.is_empty() {
            return Err(EstimateError::NoTrunkDetected);
        }
        // NoTrunkDetected is raised only for *zero* contours; a degenerate
        // best contour still yields a (zero-diameter) measurement.
        let trunk = largest_contour(&contours).ok_or(EstimateError::NoTrunkDetected)?;
        log::debug!(
            "{} external contours, trunk candidate area {:.1} px^2",
            contours.len(),
            contour_area(trunk)
        );

        let circle = min_enclosing_circle(&contour_points(&trunk.points))
            .ok_or(EstimateError::NoTrunkDetected)?;
        let dbh_cm = circle.diameter() * self.params.scale_cm_per_pixel;

        let name = species.unwrap_or(DEFAULT_SPECIES);
        let coeffs = self.species.resolve(name);
        let measurement = TrunkMeasurement::from_dbh(dbh_cm, &coeffs);
        log::info!(
            "trunk diameter {:.1} px -> dbh {} cm (species {name:?})",
            circle.diameter(),
            measurement.dbh_cm
        );
        Ok(measurement)
    }
}
