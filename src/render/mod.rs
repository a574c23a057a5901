//! Painting generator output onto a framebuffer.
//!
//! Generation and painting are kept apart: generators in [`crate::raster`]
//! return pixel sequences, and this module writes them to a
//! [`Framebuffer`](crate::framebuffer::Framebuffer)
//! in emission order. A caller that wants incremental display can paint a
//! sequence pixel by pixel instead.
//!
//! # Algorithms
//!
//! - **Midpoint Circle**: filled control-point markers
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod paint;

pub use paint::{draw_marker, draw_shape, Paint};
