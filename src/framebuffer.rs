//! In-memory pixel buffer the generators' output is painted onto.
//!
//! Stands in for the display surface: a row-major RGBA buffer with
//! bounds-checked access. Coordinates outside the buffer are clipped silently,
//! since generators happily produce pixels beyond any particular canvas.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Row-major RGBA framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions, cleared to
    /// transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_shapes::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(512, 512).unwrap();
    /// assert_eq!(fb.width(), 512);
    /// assert_eq!(fb.height(), 512);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;
        Ok(Self { width, height, pixels: vec![0; size] })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Paint a signed pixel coordinate, returning `false` if it was clipped.
    pub fn plot(&mut self, p: Point, color: Rgba) -> bool {
        match (u32::try_from(p.x), u32::try_from(p.y)) {
            (Ok(x), Ok(y)) if x < self.width && y < self.height => {
                self.set_pixel(x, y, color);
                true
            }
            _ => false,
        }
    }

    /// Color at a signed pixel coordinate, `None` when off the buffer.
    #[must_use]
    pub fn color_at(&self, p: Point) -> Option<Rgba> {
        let x = u32::try_from(p.x).ok()?;
        let y = u32::try_from(p.y).ok()?;
        self.get_pixel(x, y)
    }

    /// Number of pixels holding exactly `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels.chunks_exact(4).filter(|c| *c == rgba).count()
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.count_color(Rgba::TRANSPARENT), 5000);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::RED));
            }
        }
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));

        // Out of bounds
        fb.set_pixel(10, 0, Rgba::BLUE);
        assert_eq!(fb.get_pixel(100, 100), None);
        assert_eq!(fb.count_color(Rgba::BLUE), 1);
    }

    #[test]
    fn test_plot_clips() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        assert!(fb.plot(Point::new(3, 0), Rgba::WHITE));
        assert!(!fb.plot(Point::new(-1, 0), Rgba::WHITE));
        assert!(!fb.plot(Point::new(0, 4), Rgba::WHITE));
        assert_eq!(fb.color_at(Point::new(3, 0)), Some(Rgba::WHITE));
        assert_eq!(fb.color_at(Point::new(-1, 0)), None);
        assert_eq!(fb.count_color(Rgba::WHITE), 1);
    }
}
