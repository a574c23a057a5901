//! Bresenham line rasterization.
//!
//! The decision variable `d` tracks twice the signed distance between the
//! ideal line and the midpoint of the two candidate pixels, so every step uses
//! only integer additions. Direction handling covers all eight octants by
//! driving the loop along the dominant axis and stepping each axis by its sign.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use std::iter::FusedIterator;

use crate::geometry::{LineSegment, Point};
use crate::pixels::PixelSequence;

/// Lazy iterator over the pixels of a Bresenham line.
///
/// Yields `max(dx, dy) + 1` pixels from `start` to `end`, both inclusive.
/// Arithmetic is carried out in `i64`, so any two `i32` endpoints are valid.
#[derive(Debug, Clone)]
pub struct LinePixels {
    x: i64,
    y: i64,
    sx: i64,
    sy: i64,
    /// Twice the minor-axis delta.
    inc: i64,
    /// Twice the major-axis delta.
    dec: i64,
    d: i64,
    /// Pixels left to emit.
    remaining: u64,
    steep: bool,
}

impl LinePixels {
    /// Prepare the pixels between two endpoints.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let (x1, y1) = (i64::from(start.x), i64::from(start.y));
        let (x2, y2) = (i64::from(end.x), i64::from(end.y));
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let steep = dy > dx;
        let (major, minor) = if steep { (dy, dx) } else { (dx, dy) };

        Self {
            x: x1,
            y: y1,
            sx: (x2 - x1).signum(),
            sy: (y2 - y1).signum(),
            inc: 2 * minor,
            dec: 2 * major,
            d: 2 * minor - major,
            remaining: major as u64 + 1,
            steep,
        }
    }
}

impl Iterator for LinePixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let pixel = Point::new(self.x as i32, self.y as i32);

        if self.remaining > 0 {
            if self.steep {
                if self.d > 0 {
                    self.x += self.sx;
                    self.d -= self.dec;
                }
                self.y += self.sy;
            } else {
                if self.d > 0 {
                    self.y += self.sy;
                    self.d -= self.dec;
                }
                self.x += self.sx;
            }
            self.d += self.inc;
        }

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(self.remaining).ok())
    }
}

impl ExactSizeIterator for LinePixels {}

impl FusedIterator for LinePixels {}

/// Rasterize the line between two pixels.
///
/// The result always starts at `start`, ends at `end` and is 8-connected.
/// Identical endpoints yield a single pixel.
///
/// # Example
///
/// ```
/// use raster_shapes::geometry::Point;
/// use raster_shapes::raster::rasterize_line;
///
/// let pixels = rasterize_line(Point::new(0, 0), Point::new(4, 2));
/// assert_eq!(
///     pixels.as_slice(),
///     &[
///         Point::new(0, 0),
///         Point::new(1, 0),
///         Point::new(2, 1),
///         Point::new(3, 1),
///         Point::new(4, 2),
///     ]
/// );
/// ```
#[must_use]
pub fn rasterize_line(start: Point, end: Point) -> PixelSequence {
    let mut pixels = LinePixels::new(start, end);
    // The first pixel always exists; the iterator yields at least one.
    let first = pixels.next().unwrap_or(start);
    tracing::trace!(%start, %end, len = pixels.len() + 1, "rasterize line");
    PixelSequence::collect_nonempty(first, pixels)
}

/// Rasterize a [`LineSegment`].
#[must_use]
pub fn rasterize_segment(segment: LineSegment) -> PixelSequence {
    rasterize_line(segment.start, segment.end)
}
