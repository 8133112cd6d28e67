use serde::{Deserialize, Serialize};

/// Pixel-to-centimeter scale placeholder, in cm per pixel.
///
/// This value has no physical grounding: it must be calibrated against a
/// known reference object in frame or the camera geometry (distance, focal
/// length). It is kept as a named, overridable constant because its value
/// linearly rescales every downstream output.
pub const SCALE_CM_PER_PIXEL: f64 = 0.1;

/// Configuration for the trunk estimator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EstimatorParams {
    /// Pixel-to-centimeter conversion, cm per pixel. See [`SCALE_CM_PER_PIXEL`].
    pub scale_cm_per_pixel: f64,
    /// Side of the square Gaussian smoothing kernel, in pixels. Must be odd.
    pub blur_kernel: u32,
    /// Lower Canny hysteresis threshold on the 8-bit intensity scale.
    pub canny_low: f32,
    /// Upper Canny hysteresis threshold on the 8-bit intensity scale.
    pub canny_high: f32,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            scale_cm_per_pixel: SCALE_CM_PER_PIXEL,
            blur_kernel: 5,
            canny_low: 100.0,
            canny_high: 200.0,
        }
    }
}

impl EstimatorParams {
    /// Gaussian sigma derived from the kernel size, the OpenCV way:
    /// `0.3 * ((k - 1) * 0.5 - 1) + 0.8`, giving 1.1 for the 5x5 kernel.
    pub fn blur_sigma(&self) -> f32 {
        let k = self.blur_kernel as f32;
        0.3 * ((k - 1.0) * 0.5 - 1.0) + 0.8
    }
}
