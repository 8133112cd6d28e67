//! Image preprocessing stages: luminance conversion, noise suppression,
//! edge detection.

use image::{DynamicImage, GrayImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

/// Convert to 8-bit single-channel luminance (standard RGB weighting).
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Gaussian smoothing to suppress high-frequency noise ahead of edge
/// detection.
pub fn blur(img: &GrayImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(img, sigma)
}

/// Canny edge detection with fixed hysteresis thresholds. Pixels above
/// `high` are edges, pixels between `low` and `high` are edges only when
/// connected to a strong edge, the rest are discarded.
pub fn detect_edges(img: &GrayImage, low: f32, high: f32) -> GrayImage {
    canny(img, low, high)
}
