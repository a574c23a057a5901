//! Shape requests: which generator to run and with which control points.
//!
//! The interactive side of a drawing tool collects clicks into a
//! [`ControlPointSet`]; once the set holds the number of points the selected
//! [`ShapeKind`] needs, it is turned into a [`Shape`] and rasterized once.

use std::fmt;
use std::str::FromStr;

use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, PointF};
use crate::pixels::PixelSequence;
use crate::raster::{rasterize_curve, rasterize_ellipse, rasterize_line, rasterize_rectangle, BezierCurve};

/// The primitive shapes the toolkit can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Straight line between two points.
    Line,
    /// Axis-aligned rectangle from two opposite corners.
    Rectangle,
    /// Ellipse around a center point; radii come from configuration.
    Ellipse,
    /// Quadratic Bezier curve through three control points.
    QuadraticBezier,
    /// Cubic Bezier curve through four control points.
    CubicBezier,
}

impl ShapeKind {
    /// All shape kinds.
    pub const ALL: [Self; 5] =
        [Self::Line, Self::Rectangle, Self::Ellipse, Self::QuadraticBezier, Self::CubicBezier];

    /// Number of clicked points the shape needs.
    #[must_use]
    pub const fn required_points(self) -> usize {
        match self {
            Self::Ellipse => 1,
            Self::Line | Self::Rectangle => 2,
            Self::QuadraticBezier => 3,
            Self::CubicBezier => 4,
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::QuadraticBezier => "quadratic",
            Self::CubicBezier => "cubic",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "rect" | "rectangle" => Ok(Self::Rectangle),
            "ellipse" | "oval" => Ok(Self::Ellipse),
            "quadratic" | "quad" => Ok(Self::QuadraticBezier),
            "cubic" => Ok(Self::CubicBezier),
            other => Err(format!("unknown shape '{other}'")),
        }
    }
}

/// Clicked points for one shape, validated against the count it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPointSet {
    kind: ShapeKind,
    points: Vec<Point>,
}

impl ControlPointSet {
    /// Validate `points` for `kind`.
    ///
    /// # Errors
    ///
    /// [`Error::ControlPointCount`] unless exactly
    /// [`ShapeKind::required_points`] points are given.
    pub fn new(kind: ShapeKind, points: impl Into<Vec<Point>>) -> Result<Self> {
        let points = points.into();
        let expected = kind.required_points();
        if points.len() != expected {
            return Err(Error::ControlPointCount { shape: kind, expected, actual: points.len() });
        }
        Ok(Self { kind, points })
    }

    /// The shape these points are for.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The points in click order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// A fully specified shape, ready to rasterize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Line between two pixels.
    Line {
        /// First endpoint.
        from: Point,
        /// Second endpoint.
        to: Point,
    },
    /// Rectangle outline spanned by two opposite corners.
    Rectangle {
        /// One corner.
        corner1: Point,
        /// The opposite corner.
        corner2: Point,
    },
    /// Ellipse outline.
    Ellipse {
        /// Center pixel.
        center: Point,
        /// Horizontal radius.
        radius_x: f64,
        /// Vertical radius.
        radius_y: f64,
    },
    /// Quadratic or cubic Bezier curve.
    Bezier(BezierCurve),
}

impl Shape {
    /// Build the shape for a complete control point set. Ellipse radii are
    /// taken from `config`.
    #[must_use]
    pub fn from_control_points(set: &ControlPointSet, config: &RasterConfig) -> Self {
        let p = set.points();
        let f = |i: usize| PointF::from(p[i]);
        match set.kind() {
            ShapeKind::Line => Self::Line { from: p[0], to: p[1] },
            ShapeKind::Rectangle => Self::Rectangle { corner1: p[0], corner2: p[1] },
            ShapeKind::Ellipse => Self::Ellipse {
                center: p[0],
                radius_x: config.ellipse_radius_x,
                radius_y: config.ellipse_radius_y,
            },
            ShapeKind::QuadraticBezier => Self::Bezier(BezierCurve::Quadratic([f(0), f(1), f(2)])),
            ShapeKind::CubicBezier => {
                Self::Bezier(BezierCurve::Cubic([f(0), f(1), f(2), f(3)]))
            }
        }
    }

    /// The kind of this shape.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Line { .. } => ShapeKind::Line,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Ellipse { .. } => ShapeKind::Ellipse,
            Self::Bezier(curve) => curve.kind(),
        }
    }

    /// Run the matching generator.
    ///
    /// `config` supplies the ellipse segment count and curve sample count.
    ///
    /// # Errors
    ///
    /// Propagates the generator's configuration errors.
    pub fn rasterize(&self, config: &RasterConfig) -> Result<PixelSequence> {
        let pixels = match *self {
            Self::Line { from, to } => rasterize_line(from, to),
            Self::Rectangle { corner1, corner2 } => rasterize_rectangle(corner1, corner2),
            Self::Ellipse { center, radius_x, radius_y } => {
                rasterize_ellipse(center, radius_x, radius_y, config.ellipse_segments)?
            }
            Self::Bezier(ref curve) => rasterize_curve(curve, config.curve_samples)?,
        };
        tracing::debug!(kind = %self.kind(), pixels = pixels.len(), "rasterized shape");
        Ok(pixels)
    }
}

/// Rasterize independent shapes, in parallel when the `parallel` feature is
/// enabled. Results are returned in input order.
pub fn rasterize_batch(shapes: &[Shape], config: &RasterConfig) -> Vec<Result<PixelSequence>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        shapes.par_iter().map(|s| s.rasterize(config)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        shapes.iter().map(|s| s.rasterize(config)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_points() {
        assert_eq!(ShapeKind::Line.required_points(), 2);
        assert_eq!(ShapeKind::Rectangle.required_points(), 2);
        assert_eq!(ShapeKind::Ellipse.required_points(), 1);
        assert_eq!(ShapeKind::QuadraticBezier.required_points(), 3);
        assert_eq!(ShapeKind::CubicBezier.required_points(), 4);
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>(), Ok(kind));
        }
        assert!("triangle".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_quadratic_needs_exactly_three() {
        let four = vec![Point::ORIGIN; 4];
        let err = ControlPointSet::new(ShapeKind::QuadraticBezier, four).unwrap_err();
        assert!(matches!(err, Error::ControlPointCount { expected: 3, actual: 4, .. }));
        assert!(ControlPointSet::new(ShapeKind::QuadraticBezier, vec![Point::ORIGIN; 3]).is_ok());
    }

    #[test]
    fn test_ellipse_uses_config_radii() {
        let config = RasterConfig { ellipse_radius_x: 12.0, ellipse_radius_y: 4.0, ..RasterConfig::default() };
        let set = ControlPointSet::new(ShapeKind::Ellipse, vec![Point::new(50, 50)]).unwrap();
        let shape = Shape::from_control_points(&set, &config);
        assert_eq!(
            shape,
            Shape::Ellipse { center: Point::new(50, 50), radius_x: 12.0, radius_y: 4.0 }
        );
        let pixels = shape.rasterize(&config).unwrap();
        assert!(pixels.contains(&Point::new(62, 50)));
    }

    #[test]
    fn test_rasterize_line_shape() {
        let set = ControlPointSet::new(ShapeKind::Line, [Point::new(0, 0), Point::new(4, 2)]).unwrap();
        let pixels = Shape::from_control_points(&set, &RasterConfig::default())
            .rasterize(&RasterConfig::default())
            .unwrap();
        assert_eq!(pixels.len(), 5);
    }

    #[test]
    fn test_bad_config_propagates() {
        let config = RasterConfig { ellipse_segments: 2, ..RasterConfig::default() };
        let shape = Shape::Ellipse { center: Point::ORIGIN, radius_x: 5.0, radius_y: 5.0 };
        assert!(matches!(shape.rasterize(&config), Err(Error::InvalidSegmentCount(2))));
    }

    #[test]
    fn test_batch_keeps_order() {
        let config = RasterConfig::default();
        let shapes = [
            Shape::Line { from: Point::ORIGIN, to: Point::new(3, 0) },
            Shape::Ellipse { center: Point::ORIGIN, radius_x: -1.0, radius_y: 1.0 },
            Shape::Rectangle { corner1: Point::ORIGIN, corner2: Point::new(1, 1) },
        ];
        let results = rasterize_batch(&shapes, &config);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 4);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().len(), 4);
    }
}
