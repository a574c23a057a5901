//! Axis-aligned rectangle outlines.

use crate::geometry::{LineSegment, Point};
use crate::pixels::PixelSequence;

use super::line::{rasterize_segment, LinePixels};

/// The four edges of the rectangle spanned by two opposite corners.
///
/// With `x = min(x1, x2)`, `y = min(y1, y2)`, `w = |x2 - x1|` and
/// `h = |y2 - y1|`, the edges are, in order: top `(x,y)-(x+w,y)`, left
/// `(x,y)-(x,y+h)`, right `(x+w,y)-(x+w,y+h)` and bottom `(x,y+h)-(x+w,y+h)`.
#[must_use]
pub fn rectangle_edges(corner1: Point, corner2: Point) -> [LineSegment; 4] {
    let left = corner1.x.min(corner2.x);
    let top = corner1.y.min(corner2.y);
    let right = corner1.x.max(corner2.x);
    let bottom = corner1.y.max(corner2.y);

    [
        LineSegment::from_coords(left, top, right, top),
        LineSegment::from_coords(left, top, left, bottom),
        LineSegment::from_coords(right, top, right, bottom),
        LineSegment::from_coords(left, bottom, right, bottom),
    ]
}

/// Rasterize a rectangle outline.
///
/// Pixels come edge by edge in [`rectangle_edges`] order; a pixel shared by
/// two edges (a corner, or a whole edge when the rectangle is flat) is emitted
/// only the first time. A zero-size rectangle yields its single pixel.
#[must_use]
pub fn rasterize_rectangle(corner1: Point, corner2: Point) -> PixelSequence {
    let [first, rest @ ..] = rectangle_edges(corner1, corner2);
    let mut pixels = rasterize_segment(first);
    for edge in rest {
        pixels.append_unique(LinePixels::new(edge.start, edge.end));
    }
    tracing::trace!(%corner1, %corner2, len = pixels.len(), "rasterize rectangle");
    pixels
}
