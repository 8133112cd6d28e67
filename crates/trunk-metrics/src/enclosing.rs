//! Exact minimum enclosing circle of a point set (Welzl's algorithm,
//! iterative move-to-front form with a support set of at most three points).
//!
//! The trunk silhouette contour is handed to [`min_enclosing_circle`]; the
//! circle's diameter in pixels is the raw trunk width estimate.

use imageproc::point::Point;
use nalgebra::Point2;

/// Slack applied to containment checks so points on the boundary are not
/// re-processed due to floating-point noise.
const CONTAINS_EPS: f64 = 1e-10;

/// Circle in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnclosingCircle {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl EnclosingCircle {
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    fn contains(&self, p: &Point2<f64>) -> bool {
        nalgebra::distance(&self.center, p) <= self.radius + CONTAINS_EPS * (1.0 + self.radius)
    }
}

/// Convert integer contour points to `Point2<f64>` for circle fitting.
pub fn contour_points(points: &[Point<i32>]) -> Vec<Point2<f64>> {
    points
        .iter()
        .map(|p| Point2::new(p.x as f64, p.y as f64))
        .collect()
}

/// Smallest circle containing every input point. Returns `None` for an
/// empty set; a single point yields a zero-radius circle.
///
/// Runs in expected linear time after a deterministic pseudo-random
/// permutation of the input (fixed seed, so results are reproducible).
pub fn min_enclosing_circle(points: &[Point2<f64>]) -> Option<EnclosingCircle> {
    if points.is_empty() {
        return None;
    }
    let mut pts = points.to_vec();
    shuffle(&mut pts);

    let mut circle = circle_from_two(&pts[0], &pts[0]);
    for i in 1..pts.len() {
        if !circle.contains(&pts[i]) {
            circle = with_one_on_boundary(&pts[..i], &pts[i]);
        }
    }
    Some(circle)
}

/// Smallest circle over `pts` with `q` known to lie on the boundary.
fn with_one_on_boundary(pts: &[Point2<f64>], q: &Point2<f64>) -> EnclosingCircle {
    let mut circle = circle_from_two(&pts[0], q);
    for j in 1..pts.len() {
        if !circle.contains(&pts[j]) {
            circle = with_two_on_boundary(&pts[..j], &pts[j], q);
        }
    }
    circle
}

/// Smallest circle over `pts` with `q1` and `q2` on the boundary.
fn with_two_on_boundary(pts: &[Point2<f64>], q1: &Point2<f64>, q2: &Point2<f64>) -> EnclosingCircle {
    let mut circle = circle_from_two(q1, q2);
    for p in pts {
        if !circle.contains(p) {
            circle = circle_from_three(p, q1, q2);
        }
    }
    circle
}

/// Circle with the segment `ab` as diameter.
fn circle_from_two(a: &Point2<f64>, b: &Point2<f64>) -> EnclosingCircle {
    let center = nalgebra::center(a, b);
    EnclosingCircle {
        center,
        radius: nalgebra::distance(&center, a),
    }
}

/// Circumcircle of three points; collinear triples fall back to the widest
/// two-point circle.
fn circle_from_three(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> EnclosingCircle {
    let bx = b.x - a.x;
    let by = b.y - a.y;
    let cx = c.x - a.x;
    let cy = c.y - a.y;
    let d = 2.0 * (bx * cy - by * cx);
    if d.abs() < f64::EPSILON {
        let ab = circle_from_two(a, b);
        let ac = circle_from_two(a, c);
        let bc = circle_from_two(b, c);
        let mut widest = ab;
        for candidate in [ac, bc] {
            if candidate.radius > widest.radius {
                widest = candidate;
            }
        }
        return widest;
    }
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (cy * b2 - by * c2) / d;
    let uy = (bx * c2 - cx * b2) / d;
    let center = Point2::new(a.x + ux, a.y + uy);
    EnclosingCircle {
        center,
        radius: nalgebra::distance(&center, a),
    }
}

/// Deterministic Fisher-Yates shuffle (xorshift64, fixed seed).
fn shuffle(pts: &mut [Point2<f64>]) {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    for i in (1..pts.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = (state % (i as u64 + 1)) as usize;
        pts.swap(i, j);
    }
}
