use std::path::PathBuf;

/// Errors returned by the trunk estimator.
///
/// Every failure is terminal for its request: nothing is retried and no
/// partial measurement is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum EstimateError {
    #[error("no image path provided")]
    MissingInput,

    #[error("image not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("no trunk contour found in image")]
    NoTrunkDetected,
}

impl EstimateError {
    /// Stable machine-readable kind, for hosting layers that map errors to
    /// client-facing statuses.
    pub fn kind(&self) -> &'static str {
        match self {
            EstimateError::MissingInput => "missing_input",
            EstimateError::NotFound(_) => "not_found",
            EstimateError::Decode(_) => "decode_error",
            EstimateError::NoTrunkDetected => "no_trunk_detected",
        }
    }
}
