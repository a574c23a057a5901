//! Geometric primitives for rasterization.
//!
//! Integer [`Point`]s address pixels; real-valued [`PointF`]s carry curve
//! evaluation results until they are rounded onto the pixel grid.

use std::fmt;

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance, the number of king moves between two pixels.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u32 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx.max(dy).min(u64::from(u32::MAX)) as u32
    }

    /// True if `other` is one of the eight neighbours of this pixel.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev(other) == 1
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl PointF {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    /// Round to the nearest pixel, halves away from zero.
    ///
    /// Coordinates beyond the `i32` range saturate.
    #[must_use]
    pub fn round(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<(f64, f64)> for PointF {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSegment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// True when both endpoints are the same pixel.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_adjacency() {
        let p = Point::new(3, 3);
        assert!(p.is_adjacent(Point::new(4, 4)));
        assert!(p.is_adjacent(Point::new(3, 2)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(5, 3)));
    }

    #[test]
    fn test_chebyshev_extremes() {
        let a = Point::new(i32::MIN, 0);
        let b = Point::new(i32::MAX, 0);
        assert_eq!(a.chebyshev(b), u32::MAX);
    }

    #[test]
    fn test_pointf_distance() {
        let p1 = PointF::new(0.0, 0.0);
        let p2 = PointF::new(3.0, 4.0);
        assert!((p1.distance(p2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_pointf_lerp() {
        let mid = PointF::new(0.0, 0.0).lerp(PointF::new(10.0, 10.0), 0.5);
        assert_eq!(mid, PointF::new(5.0, 5.0));
    }

    #[test]
    fn test_pointf_round() {
        assert_eq!(PointF::new(2.5, -2.5).round(), Point::new(3, -3));
        assert_eq!(PointF::new(1.49, 7.51).round(), Point::new(1, 8));
        assert_eq!(PointF::new(-0.0, 6.1e-17).round(), Point::ORIGIN);
    }

    #[test]
    fn test_segment_degenerate() {
        assert!(LineSegment::from_coords(1, 1, 1, 1).is_degenerate());
        assert!(!LineSegment::from_coords(1, 1, 2, 1).is_degenerate());
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(-1, 2).to_string(), "(-1, 2)");
    }
}
