//! Quadratic and cubic Bezier curves.
//!
//! Points are evaluated directly from the Bernstein form, which is exact at
//! both ends: `t = 0` returns the first control point and `t = 1` the last,
//! bit for bit.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::geometry::PointF;
use crate::pixels::PixelSequence;
use crate::shape::ShapeKind;

use super::line::LinePixels;

fn check_parameter(t: f64) -> Result<()> {
    if (0.0..=1.0).contains(&t) {
        Ok(())
    } else {
        Err(Error::ParameterOutOfRange(t))
    }
}

fn quadratic_unchecked(p0: PointF, p1: PointF, p2: PointF, t: f64) -> PointF {
    let u = 1.0 - t;
    let (b0, b1, b2) = (u * u, 2.0 * u * t, t * t);
    PointF::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y,
    )
}

fn cubic_unchecked(p0: PointF, p1: PointF, p2: PointF, p3: PointF, t: f64) -> PointF {
    let u = 1.0 - t;
    let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    PointF::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

/// Point on the quadratic curve `(1-t)²p0 + 2(1-t)t·p1 + t²p2`.
///
/// # Errors
///
/// [`Error::ParameterOutOfRange`] if `t` is outside `[0, 1]` or NaN.
pub fn quadratic_point(p0: PointF, p1: PointF, p2: PointF, t: f64) -> Result<PointF> {
    check_parameter(t)?;
    Ok(quadratic_unchecked(p0, p1, p2, t))
}

/// Point on the cubic curve `(1-t)³p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³p3`.
///
/// # Errors
///
/// [`Error::ParameterOutOfRange`] if `t` is outside `[0, 1]` or NaN.
pub fn cubic_point(p0: PointF, p1: PointF, p2: PointF, p3: PointF, t: f64) -> Result<PointF> {
    check_parameter(t)?;
    Ok(cubic_unchecked(p0, p1, p2, p3, t))
}

/// A Bezier curve of degree two or three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BezierCurve {
    /// Three control points.
    Quadratic([PointF; 3]),
    /// Four control points.
    Cubic([PointF; 4]),
}

impl BezierCurve {
    /// Build a curve from its control points: three make a quadratic, four a
    /// cubic.
    ///
    /// # Errors
    ///
    /// [`Error::ControlPointCount`] for any other count.
    pub fn from_points(points: &[PointF]) -> Result<Self> {
        match *points {
            [p0, p1, p2] => Ok(Self::Quadratic([p0, p1, p2])),
            [p0, p1, p2, p3] => Ok(Self::Cubic([p0, p1, p2, p3])),
            _ => Err(Error::ControlPointCount {
                shape: if points.len() < 3 {
                    ShapeKind::QuadraticBezier
                } else {
                    ShapeKind::CubicBezier
                },
                expected: if points.len() < 3 { 3 } else { 4 },
                actual: points.len(),
            }),
        }
    }

    /// The shape kind matching this curve's degree.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Quadratic(_) => ShapeKind::QuadraticBezier,
            Self::Cubic(_) => ShapeKind::CubicBezier,
        }
    }

    /// The control points in order.
    #[must_use]
    pub fn control_points(&self) -> &[PointF] {
        match self {
            Self::Quadratic(p) => p,
            Self::Cubic(p) => p,
        }
    }

    /// Evaluate the curve at `t`.
    ///
    /// # Errors
    ///
    /// [`Error::ParameterOutOfRange`] if `t` is outside `[0, 1]` or NaN.
    pub fn point_at(&self, t: f64) -> Result<PointF> {
        check_parameter(t)?;
        Ok(self.eval(t))
    }

    fn eval(&self, t: f64) -> PointF {
        match *self {
            Self::Quadratic([p0, p1, p2]) => quadratic_unchecked(p0, p1, p2, t),
            Self::Cubic([p0, p1, p2, p3]) => cubic_unchecked(p0, p1, p2, p3, t),
        }
    }

    /// Lazily sample the curve at `sample_count` evenly spaced parameters.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSampleCount`] if `sample_count` is zero.
    pub fn samples(&self, sample_count: usize) -> Result<CurveSamples> {
        if sample_count == 0 {
            return Err(Error::InvalidSampleCount(sample_count));
        }
        Ok(CurveSamples { curve: *self, count: sample_count, next: 0, end: sample_count })
    }
}

/// Lazy iterator over evenly spaced points of a [`BezierCurve`].
///
/// Sample `k` of `n` is taken at `t = k / (n - 1)`, so the first and last
/// samples are the curve's end points. A single sample yields the start point.
/// Clone the iterator (or call [`BezierCurve::samples`] again) to restart.
#[derive(Debug, Clone)]
pub struct CurveSamples {
    curve: BezierCurve,
    count: usize,
    next: usize,
    end: usize,
}

impl CurveSamples {
    fn parameter(&self, k: usize) -> f64 {
        if self.count == 1 {
            0.0
        } else if k + 1 == self.count {
            1.0
        } else {
            k as f64 / (self.count - 1) as f64
        }
    }
}

impl Iterator for CurveSamples {
    type Item = PointF;

    fn next(&mut self) -> Option<PointF> {
        if self.next >= self.end {
            return None;
        }
        let t = self.parameter(self.next);
        self.next += 1;
        Some(self.curve.eval(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for CurveSamples {
    fn next_back(&mut self) -> Option<PointF> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.curve.eval(self.parameter(self.end)))
    }
}

impl ExactSizeIterator for CurveSamples {}

impl FusedIterator for CurveSamples {}

/// Sample the curve defined by `control_points` (3 or 4 of them).
///
/// # Errors
///
/// [`Error::ControlPointCount`] for a count other than 3 or 4,
/// [`Error::InvalidSampleCount`] if `sample_count` is zero.
pub fn sample_curve(control_points: &[PointF], sample_count: usize) -> Result<CurveSamples> {
    BezierCurve::from_points(control_points)?.samples(sample_count)
}

/// Rasterize a curve as a connected pixel path.
///
/// Samples are rounded to pixels and consecutive ones are joined with
/// Bresenham lines, so the result is 8-connected however sparse the sampling.
///
/// # Errors
///
/// [`Error::InvalidSampleCount`] if `sample_count` is zero.
pub fn rasterize_curve(curve: &BezierCurve, sample_count: usize) -> Result<PixelSequence> {
    let mut samples = curve.samples(sample_count)?.map(PointF::round);
    let first = samples.next().unwrap_or_else(|| curve.control_points()[0].round());
    let mut pixels = PixelSequence::single(first);
    let mut prev = first;
    for p in samples {
        if p != prev {
            pixels.append_joined(LinePixels::new(prev, p));
            prev = p;
        }
    }
    tracing::debug!(kind = %curve.kind(), sample_count, len = pixels.len(), "rasterized curve");
    Ok(pixels)
}
