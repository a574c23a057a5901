//! Shape generators.
//!
//! Each generator is a pure function from control points (and configuration)
//! to an ordered [`PixelSequence`](crate::pixels::PixelSequence). Nothing here
//! touches a framebuffer; painting lives in [`crate::render`].
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer decision-variable stepping, all octants
//! - **Rectangle**: four Bresenham edges from two opposite corners
//! - **Parametric Ellipse**: closed polygon over an even angle sweep
//! - **Bezier**: Bernstein-form evaluation of quadratic and cubic curves
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Farin, G. (2002). *Curves and Surfaces for CAGD*. Morgan Kaufmann.

pub mod bezier;
pub mod ellipse;
pub mod line;
pub mod rect;

pub use bezier::{
    cubic_point, quadratic_point, rasterize_curve, sample_curve, BezierCurve, CurveSamples,
};
pub use ellipse::{rasterize_ellipse, sample_ellipse};
pub use line::{rasterize_line, rasterize_segment, LinePixels};
pub use rect::{rasterize_rectangle, rectangle_edges};
