//! Parametric ellipse outlines.
//!
//! The boundary is approximated by a closed polygon: `n` points spaced evenly
//! in the parametric angle, each rounded to the nearest pixel, joined by
//! Bresenham lines.

use std::f64::consts::TAU;

use crate::error::{Error, Result};
use crate::geometry::{LineSegment, Point, PointF};
use crate::pixels::PixelSequence;

use super::line::LinePixels;

/// Smallest number of segments that still forms a closed polygon.
pub const MIN_SEGMENTS: usize = 3;

fn check_radius(axis: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRadius { axis, value })
    }
}

/// Parametric point of the ellipse at `angle`, rounded to a pixel.
fn ellipse_vertex(center: Point, radius_x: f64, radius_y: f64, angle: f64) -> Point {
    let c = PointF::from(center);
    PointF::new(c.x + radius_x * angle.cos(), c.y + radius_y * angle.sin()).round()
}

/// Sample the ellipse outline as `segment_count` line segments.
///
/// Segment `i` runs from the vertex at angle `i * 2π / n` to the vertex at
/// `(i + 1) * 2π / n`. The last segment ends exactly where the first starts.
///
/// # Errors
///
/// [`Error::InvalidRadius`] if a radius is not a finite value above zero,
/// [`Error::InvalidSegmentCount`] if `segment_count` is below
/// [`MIN_SEGMENTS`].
pub fn sample_ellipse(
    center: Point,
    radius_x: f64,
    radius_y: f64,
    segment_count: usize,
) -> Result<Vec<LineSegment>> {
    check_radius("x", radius_x)?;
    check_radius("y", radius_y)?;
    if segment_count < MIN_SEGMENTS {
        return Err(Error::InvalidSegmentCount(segment_count));
    }

    let step = TAU / segment_count as f64;
    let vertices: Vec<Point> = (0..segment_count)
        .map(|i| ellipse_vertex(center, radius_x, radius_y, i as f64 * step))
        .collect();

    let segments: Vec<LineSegment> = (0..segment_count)
        .map(|i| LineSegment::new(vertices[i], vertices[(i + 1) % segment_count]))
        .collect();

    tracing::debug!(
        %center,
        radius_x,
        radius_y,
        segment_count,
        "sampled ellipse"
    );
    Ok(segments)
}

/// Rasterize the ellipse outline into a single closed pixel path.
///
/// Segments are drawn in order; the joint pixel shared by consecutive segments
/// is emitted once. The path ends back on its first pixel.
///
/// # Errors
///
/// Same as [`sample_ellipse`].
pub fn rasterize_ellipse(
    center: Point,
    radius_x: f64,
    radius_y: f64,
    segment_count: usize,
) -> Result<PixelSequence> {
    let segments = sample_ellipse(center, radius_x, radius_y, segment_count)?;
    let mut pixels = PixelSequence::single(segments[0].start);
    for segment in &segments {
        pixels.append_joined(LinePixels::new(segment.start, segment.end));
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_segments() {
        let segs = sample_ellipse(Point::ORIGIN, 10.0, 5.0, 4).unwrap();
        assert_eq!(
            segs,
            vec![
                LineSegment::from_coords(10, 0, 0, 5),
                LineSegment::from_coords(0, 5, -10, 0),
                LineSegment::from_coords(-10, 0, 0, -5),
                LineSegment::from_coords(0, -5, 10, 0),
            ]
        );
    }

    #[test]
    fn test_closed_loop() {
        let segs = sample_ellipse(Point::new(100, 80), 30.0, 60.0, 100).unwrap();
        assert_eq!(segs.len(), 100);
        assert_eq!(segs[99].end, segs[0].start);
        for pair in segs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_vertices_on_ellipse() {
        let (rx, ry) = (40.0, 25.0);
        for seg in sample_ellipse(Point::ORIGIN, rx, ry, 64).unwrap() {
            let x = f64::from(seg.start.x);
            let y = f64::from(seg.start.y);
            // Rounding moves a vertex at most half a pixel on each axis.
            let r = (x / rx).powi(2) + (y / ry).powi(2);
            assert!((r - 1.0).abs() < 0.1, "vertex {} off the ellipse ({r})", seg.start);
        }
    }

    #[test]
    fn test_rejects_bad_radius() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                sample_ellipse(Point::ORIGIN, bad, 5.0, 10),
                Err(Error::InvalidRadius { axis: "x", .. })
            ));
            assert!(matches!(
                sample_ellipse(Point::ORIGIN, 5.0, bad, 10),
                Err(Error::InvalidRadius { axis: "y", .. })
            ));
        }
    }

    #[test]
    fn test_rejects_few_segments() {
        for n in 0..MIN_SEGMENTS {
            assert!(matches!(
                sample_ellipse(Point::ORIGIN, 5.0, 5.0, n),
                Err(Error::InvalidSegmentCount(c)) if c == n
            ));
        }
        assert!(sample_ellipse(Point::ORIGIN, 5.0, 5.0, MIN_SEGMENTS).is_ok());
    }

    #[test]
    fn test_rasterized_path_closed_and_connected() {
        let seq = rasterize_ellipse(Point::new(50, 50), 20.0, 10.0, 60).unwrap();
        assert_eq!(seq.first(), seq.last());
        assert!(seq.is_eight_connected());
    }

    #[test]
    fn test_tiny_ellipse_collapses() {
        let seq = rasterize_ellipse(Point::new(3, 3), 0.1, 0.1, 8).unwrap();
        assert_eq!(seq.as_slice(), &[Point::new(3, 3)]);
    }
}
