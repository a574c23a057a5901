//! Terminal output encoder (ASCII/Unicode).
//!
//! Renders framebuffers to terminal-compatible text output.
//! Supports two rendering modes:
//! - ASCII: Uses characters like ` .:-=+*#%@` for grayscale
//! - Unicode: Uses half-block characters (▀ ▄ █) for 2x vertical resolution
//!
//! When the framebuffer is downscaled, each character cell takes the
//! brightest pixel it covers, so one-pixel-wide outlines stay visible.

use crate::framebuffer::Framebuffer;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[default]
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    UnicodeHalfBlock,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    height: Option<u32>,
    invert: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Luma above which a half-block cell half counts as lit.
    const HALF_BLOCK_THRESHOLD: f32 = 0.5;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), width: None, height: None, invert: false }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    /// If not set, uses framebuffer width (capped at 80).
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Set the target height in characters/lines.
    /// If not set, calculates from width to preserve aspect ratio.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height.max(1));
        self
    }

    /// Invert the output (light on dark vs dark on light).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a framebuffer to a string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(fb),
            TerminalMode::UnicodeHalfBlock => self.render_half_block(fb),
        }
    }

    /// Render using ASCII grayscale characters.
    fn render_ascii(&self, fb: &Framebuffer) -> String {
        let (target_w, target_h) = self.compute_dimensions(fb, 2.0);
        let mut output = String::with_capacity((target_w + 1) as usize * target_h as usize);

        for y in 0..target_h {
            for x in 0..target_w {
                let luma = self.cell_luma(fb, (x, target_w), (y, target_h));
                output.push(Self::ASCII_RAMP[Self::luma_to_index(luma)]);
            }
            output.push('\n');
        }

        output
    }

    /// Render using Unicode half-block characters.
    /// Each character covers two vertically stacked cells.
    fn render_half_block(&self, fb: &Framebuffer) -> String {
        let (target_w, target_h) = self.compute_dimensions(fb, 1.0);
        // Round up to even height for half-blocks
        let target_h = (target_h + 1) & !1;
        let mut output = String::with_capacity((target_w * 3 + 1) as usize * (target_h / 2) as usize);

        for y in (0..target_h).step_by(2) {
            for x in 0..target_w {
                let top = self.cell_luma(fb, (x, target_w), (y, target_h)) > Self::HALF_BLOCK_THRESHOLD;
                let bottom =
                    self.cell_luma(fb, (x, target_w), (y + 1, target_h)) > Self::HALF_BLOCK_THRESHOLD;
                output.push(match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            output.push('\n');
        }

        output
    }

    /// Compute target dimensions preserving aspect ratio.
    /// `char_aspect` is the approximate height/width ratio of a character cell.
    fn compute_dimensions(&self, fb: &Framebuffer, char_aspect: f32) -> (u32, u32) {
        let fb_aspect = fb.width() as f32 / fb.height() as f32;

        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => {
                let h = (w as f32 / fb_aspect / char_aspect).round() as u32;
                (w, h.max(1))
            }
            (None, Some(h)) => {
                let w = (h as f32 * fb_aspect * char_aspect).round() as u32;
                (w.max(1), h)
            }
            (None, None) => {
                // Default to 80 characters wide
                let w = 80u32.min(fb.width());
                let h = (w as f32 / fb_aspect / char_aspect).round() as u32;
                (w, h.max(1))
            }
        }
    }

    /// Pixel span `[start, end)` covered by cell `i` of `n` along an axis of
    /// `len` pixels. Never empty.
    fn cell_span(i: u32, n: u32, len: u32) -> (u32, u32) {
        let start = (u64::from(i) * u64::from(len) / u64::from(n)) as u32;
        let end = (u64::from(i + 1) * u64::from(len) / u64::from(n)) as u32;
        let start = start.min(len - 1);
        (start, end.max(start + 1).min(len))
    }

    /// Brightest luminance (0.0-1.0) inside a character cell.
    fn cell_luma(&self, fb: &Framebuffer, (x, w): (u32, u32), (y, h): (u32, u32)) -> f32 {
        let (x0, x1) = Self::cell_span(x, w, fb.width());
        let (y0, y1) = Self::cell_span(y, h, fb.height());

        let mut max = 0.0f32;
        let mut min = 1.0f32;
        for py in y0..y1 {
            for px in x0..x1 {
                if let Some(pixel) = fb.get_pixel(px, py) {
                    let luma = pixel.luminance() / 255.0;
                    max = max.max(luma);
                    min = min.min(luma);
                }
            }
        }

        // Inverted output keeps dark strokes on a light canvas visible.
        if self.invert {
            1.0 - min
        } else {
            max
        }
    }

    /// Convert luminance (0.0-1.0) to ASCII ramp index.
    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }

    /// Write output directly to stdout.
    pub fn print(&self, fb: &Framebuffer) {
        print!("{}", self.render(fb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_ascii_render_basic() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(5).render(&fb);

        // Should be filled with '@' (brightest ASCII char)
        assert!(output.contains('@'));
        assert!(!output.contains(' '));
    }

    #[test]
    fn test_ascii_render_black() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);

        let output = TerminalEncoder::new().width(5).render(&fb);

        for ch in output.chars() {
            if ch != '\n' {
                assert_eq!(ch, ' ');
            }
        }
    }

    #[test]
    fn test_thin_line_survives_downscale() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);
        for x in 0..100 {
            fb.set_pixel(x, 37, Rgba::WHITE);
        }

        let output = TerminalEncoder::new().width(10).height(10).render(&fb);
        let lit_rows = output.lines().filter(|l| l.contains('@')).count();
        assert_eq!(lit_rows, 1);
        assert_eq!(output.lines().nth(3), Some("@@@@@@@@@@"));
    }

    #[test]
    fn test_half_block() {
        let mut fb = Framebuffer::new(4, 4).expect("framebuffer creation should succeed");
        fb.clear(Rgba::BLACK);
        fb.set_pixel(0, 0, Rgba::WHITE);
        fb.set_pixel(1, 1, Rgba::WHITE);
        fb.set_pixel(2, 0, Rgba::WHITE);
        fb.set_pixel(2, 1, Rgba::WHITE);

        let output =
            TerminalEncoder::new().mode(TerminalMode::UnicodeHalfBlock).width(4).height(4).render(&fb);
        assert_eq!(output.lines().next(), Some("▀▄█ "));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_invert_mode() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        let output = TerminalEncoder::new().width(5).invert(true).render(&fb);

        // White inverted should be dark (space)
        for ch in output.chars() {
            if ch != '\n' {
                assert_eq!(ch, ' ');
            }
        }
    }

    #[test]
    fn test_aspect_ratio_preservation() {
        let fb = Framebuffer::new(200, 100).expect("framebuffer creation should succeed");

        let output = TerminalEncoder::new().width(40).render(&fb);
        let lines: Vec<&str> = output.lines().collect();

        // 200:100 = 2:1 aspect ratio
        // With char_aspect of 2.0, 40 width should give ~10 height
        assert!(lines.len() <= 12);
        assert!(lines.len() >= 8);
    }

    #[test]
    fn test_custom_dimensions() {
        let fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");

        let output = TerminalEncoder::new().width(20).height(10).render(&fb);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].len(), 20);
    }

    #[test]
    fn test_upscale_small_buffer() {
        let mut fb = Framebuffer::new(2, 2).expect("framebuffer creation should succeed");
        fb.set_pixel(1, 1, Rgba::WHITE);

        let output = TerminalEncoder::new().width(4).height(4).render(&fb);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["    ", "    ", "  @@", "  @@"]);
    }

    #[test]
    fn test_default_width_capped_at_80() {
        let fb = Framebuffer::new(1000, 100).expect("framebuffer creation should succeed");

        let output = TerminalEncoder::new().render(&fb);
        let first_line = output.lines().next().expect("iterator should have next element");

        assert!(first_line.len() <= 80);
    }
}
