//! External contour extraction from a binary edge map, and selection of the
//! trunk silhouette candidate.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType, Contour};

/// Trace external-only contours: outermost boundaries of connected edge
/// regions, with nested and hole contours discarded.
pub fn external_contours(edges: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .collect()
}

/// Enclosed polygon area of a traced contour (shoelace formula).
///
/// Degenerate contours (fewer than three points) enclose zero area.
pub fn contour_area(contour: &Contour<i32>) -> f64 {
    let pts = &contour.points;
    if pts.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0i64;
    for i in 0..pts.len() {
        let p = pts[i];
        let q = pts[(i + 1) % pts.len()];
        twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    (twice_area.abs() as f64) / 2.0
}

/// Pick the contour with the maximum enclosed area, assumed to be the trunk
/// silhouette. Ties keep the first contour encountered.
pub fn largest_contour(contours: &[Contour<i32>]) -> Option<&Contour<i32>> {
    let mut best: Option<(&Contour<i32>, f64)> = None;
    for c in contours {
        let area = contour_area(c);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((c, area)),
        }
    }
    best.map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    fn binary_with_rects(rects: &[Rect]) -> GrayImage {
        let mut img = GrayImage::from_pixel(128, 128, Luma([0]));
        for r in rects {
            draw_filled_rect_mut(&mut img, *r, Luma([255]));
        }
        img
    }

    #[test]
    fn empty_edge_map_yields_no_contours() {
        let img = GrayImage::from_pixel(32, 32, Luma([0]));
        assert!(external_contours(&img).is_empty());
    }

    #[test]
    fn solid_block_yields_one_external_contour() {
        let img = binary_with_rects(&[Rect::at(10, 10).of_size(20, 20)]);
        let contours = external_contours(&img);
        assert_eq!(contours.len(), 1);
    }

    #[test]
    fn hole_contours_are_discarded() {
        // Solid block with a punched-out interior: the hole boundary must
        // not appear among external contours.
        let mut img = binary_with_rects(&[Rect::at(10, 10).of_size(40, 40)]);
        draw_filled_rect_mut(&mut img, Rect::at(22, 22).of_size(16, 16), Luma([0]));
        let contours = external_contours(&img);
        assert_eq!(contours.len(), 1);
    }

    #[test]
    fn largest_contour_picks_biggest_block() {
        let img = binary_with_rects(&[
            Rect::at(5, 5).of_size(8, 8),
            Rect::at(40, 40).of_size(50, 50),
            Rect::at(100, 5).of_size(12, 12),
        ]);
        let contours = external_contours(&img);
        assert_eq!(contours.len(), 3);
        let best = largest_contour(&contours).unwrap();
        let area = contour_area(best);
        // Traced boundary of a 50x50 block encloses ~49x49.
        assert!(area > 2000.0, "picked area {area}");
    }

    #[test]
    fn shoelace_area_of_unit_square() {
        use imageproc::point::Point;
        let contour = Contour {
            points: vec![
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10),
            ],
            border_type: BorderType::Outer,
            parent: None,
        };
        assert_eq!(contour_area(&contour), 100.0);
    }

    #[test]
    fn degenerate_contours_have_zero_area() {
        use imageproc::point::Point;
        let contour = Contour {
            points: vec![Point::new(3, 4), Point::new(5, 4)],
            border_type: BorderType::Outer,
            parent: None,
        };
        assert_eq!(contour_area(&contour), 0.0);
        assert!(largest_contour(&[]).is_none());
    }
}
