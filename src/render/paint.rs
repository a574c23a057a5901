//! Paint implementations for generator output.

use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{LineSegment, Point};
use crate::pixels::PixelSequence;
use crate::raster::LinePixels;
use crate::shape::Shape;

/// Things that can be painted onto a framebuffer.
pub trait Paint {
    /// Paint onto `fb`, returning the number of pixels that landed inside it.
    fn paint(&self, fb: &mut Framebuffer, color: Rgba) -> usize;
}

impl Paint for PixelSequence {
    fn paint(&self, fb: &mut Framebuffer, color: Rgba) -> usize {
        self.iter().filter(|&&p| fb.plot(p, color)).count()
    }
}

impl Paint for LineSegment {
    fn paint(&self, fb: &mut Framebuffer, color: Rgba) -> usize {
        LinePixels::new(self.start, self.end).filter(|&p| fb.plot(p, color)).count()
    }
}

/// Rasterize `shape` with `config` and paint it.
///
/// # Errors
///
/// Propagates the generator's configuration errors; nothing is painted then.
pub fn draw_shape(
    fb: &mut Framebuffer,
    shape: &Shape,
    config: &RasterConfig,
    color: Rgba,
) -> Result<usize> {
    let pixels = shape.rasterize(config)?;
    Ok(pixels.paint(fb, color))
}

/// Draw a filled disc marking a clicked control point.
///
/// Uses the midpoint circle algorithm; a radius of zero or less paints just
/// the center pixel. Any `i32` center is accepted and clipped to the buffer.
pub fn draw_marker(fb: &mut Framebuffer, center: Point, radius: i32, color: Rgba) {
    if radius <= 0 {
        fb.plot(center, color);
        return;
    }

    // Span ends can leave the i32 range near its limits
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let mut x = i64::from(radius);
    let mut y = 0i64;
    let mut err = 1 - x;

    while x >= y {
        // Horizontal spans for each octant pair
        draw_span(fb, cx - x, cx + x, cy + y, color);
        draw_span(fb, cx - x, cx + x, cy - y, color);
        draw_span(fb, cx - y, cx + y, cy + x, color);
        draw_span(fb, cx - y, cx + y, cy - x, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Fill `x1..=x2` on row `y`, clipped to the buffer before iterating.
#[inline]
fn draw_span(fb: &mut Framebuffer, x1: i64, x2: i64, y: i64, color: Rgba) {
    let Ok(y) = u32::try_from(y) else { return };
    if y >= fb.height() {
        return;
    }
    let x1 = x1.max(0);
    let x2 = x2.min(i64::from(fb.width()) - 1);
    for x in x1..=x2 {
        if let Ok(x) = u32::try_from(x) {
            fb.set_pixel(x, y, color);
        }
    }
}
