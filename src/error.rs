//! Error types for raster-shapes operations.

use std::io;
use thiserror::Error;

use crate::shape::ShapeKind;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster-shapes operations.
///
/// Every variant except [`Error::Io`] is a configuration error: the caller
/// violated an input contract and no partial output was produced.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (config file reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A shape received the wrong number of control points.
    #[error("{shape} requires exactly {expected} control points, got {actual}")]
    ControlPointCount {
        /// Shape the points were supplied for.
        shape: ShapeKind,
        /// Number of points the shape requires.
        expected: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Ellipse radius is zero, negative or not finite.
    #[error("Invalid {axis} radius: {value} (must be a finite value > 0)")]
    InvalidRadius {
        /// Which radius was rejected ("x" or "y").
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Ellipse segment count too small to form a closed polygon.
    #[error("Invalid segment count: {0} (must be > 2)")]
    InvalidSegmentCount(usize),

    /// Curve sample count of zero.
    #[error("Invalid sample count: {0} (must be > 0)")]
    InvalidSampleCount(usize),

    /// Curve parameter outside `[0, 1]` (or NaN).
    #[error("Curve parameter t = {0} is outside [0, 1]")]
    ParameterOutOfRange(f64),

    /// Configuration file could not be found or read.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration file could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line of the failure (0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_control_point_count_display() {
        let err = Error::ControlPointCount {
            shape: ShapeKind::QuadraticBezier,
            expected: 3,
            actual: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("quadratic"));
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_radius_display() {
        let err = Error::InvalidRadius { axis: "y", value: -2.0 };
        assert!(err.to_string().contains("y radius"));
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
