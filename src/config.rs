//! Rasterization configuration.
//!
//! Generator parameters the caller would otherwise have to prompt for: ellipse
//! radii, ellipse segment count and curve sample density. Loaded from YAML with
//! per-field defaults; missing fields fall back to the values below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::raster::ellipse::MIN_SEGMENTS;

/// Parameters shared by all shape generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Number of line segments approximating an ellipse.
    #[serde(default = "default_ellipse_segments")]
    pub ellipse_segments: usize,

    /// Number of parameter samples taken along a Bezier curve.
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,

    /// Horizontal ellipse radius in pixels.
    #[serde(default = "default_radius_x")]
    pub ellipse_radius_x: f64,

    /// Vertical ellipse radius in pixels.
    #[serde(default = "default_radius_y")]
    pub ellipse_radius_y: f64,

    /// Canvas width in pixels.
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_canvas_size")]
    pub height: u32,
}

fn default_ellipse_segments() -> usize {
    100
}
fn default_curve_samples() -> usize {
    1000
}
fn default_radius_x() -> f64 {
    30.0
}
fn default_radius_y() -> f64 {
    60.0
}
fn default_canvas_size() -> u32 {
    512
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            ellipse_segments: default_ellipse_segments(),
            curve_samples: default_curve_samples(),
            ellipse_radius_x: default_radius_x(),
            ellipse_radius_y: default_radius_y(),
            width: default_canvas_size(),
            height: default_canvas_size(),
        }
    }
}

impl RasterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        tracing::debug!(path = %path.display(), "loading raster config");
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "using default raster config");
                Self::default()
            }
        }
    }

    /// Resolve the configuration for a run.
    ///
    /// A path the user named explicitly must load; any failure is returned.
    /// Without one, `fallback` is read if it exists and defaults are used
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is given and cannot be read or parsed.
    pub fn resolve(explicit: Option<&Path>, fallback: impl AsRef<Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if fallback.as_ref().exists() => Ok(Self::load_or_default(fallback)),
            None => Ok(Self::default()),
        }
    }

    /// Check every parameter the generators will reject, so a bad config
    /// fails at load time rather than on the first draw.
    ///
    /// # Errors
    ///
    /// The same errors the generators would report.
    pub fn validate(&self) -> Result<()> {
        for (axis, value) in [("x", self.ellipse_radius_x), ("y", self.ellipse_radius_y)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidRadius { axis, value });
            }
        }
        if self.ellipse_segments < MIN_SEGMENTS {
            return Err(Error::InvalidSegmentCount(self.ellipse_segments));
        }
        if self.curve_samples == 0 {
            return Err(Error::InvalidSampleCount(0));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }
        Ok(())
    }
}
