//! # raster-shapes
//!
//! Integer-exact rasterization of the primitive shapes of an interactive
//! drawing tool: straight lines, axis-aligned rectangles, ellipses, and
//! quadratic and cubic Bezier curves.
//!
//! Generators are pure functions from control points to an ordered
//! [`PixelSequence`](pixels::PixelSequence). Painting that sequence onto a
//! [`Framebuffer`](framebuffer::Framebuffer), or anywhere else, is a separate
//! step.
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_shapes::prelude::*;
//!
//! let config = RasterConfig::default();
//! let clicks = ControlPointSet::new(ShapeKind::Line, [Point::new(0, 0), Point::new(4, 2)])?;
//! let pixels = Shape::from_control_points(&clicks, &config).rasterize(&config)?;
//! assert_eq!(pixels.len(), 5);
//!
//! let mut fb = Framebuffer::new(8, 8)?;
//! pixels.paint(&mut fb, Rgba::WHITE);
//! assert_eq!(fb.get_pixel(2, 1), Some(Rgba::WHITE));
//! # Ok::<(), raster_shapes::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: rasterize independent shapes concurrently with rayon
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Farin, G. (2002). *Curves and Surfaces for CAGD*. Morgan Kaufmann.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (pixel and real-valued points, segments).
pub mod geometry;

/// Ordered pixel sequences produced by the generators.
pub mod pixels;

/// Shape generators (line, rectangle, ellipse, Bezier).
pub mod raster;

/// Shape kinds, control point sets and the rasterization facade.
pub mod shape;

/// Generator configuration.
pub mod config;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Color types.
pub mod color;

/// In-memory framebuffer for painting pixels.
pub mod framebuffer;

/// Painting generator output onto a framebuffer.
pub mod render;

/// Output encoders (terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-shapes operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_shapes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::RasterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{LineSegment, Point, PointF};
    pub use crate::pixels::PixelSequence;
    pub use crate::raster::{
        cubic_point, quadratic_point, rasterize_curve, rasterize_ellipse, rasterize_line,
        rasterize_rectangle, sample_curve, sample_ellipse, BezierCurve,
    };
    pub use crate::render::{draw_marker, draw_shape, Paint};
    pub use crate::shape::{rasterize_batch, ControlPointSet, Shape, ShapeKind};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_core_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Shape>();
        assert_send_sync::<PixelSequence>();
        assert_send_sync::<RasterConfig>();
        assert_send_sync::<Error>();
    }
}
