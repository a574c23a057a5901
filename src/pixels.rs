//! Ordered pixel output of the generators.

use std::collections::HashSet;
use std::ops::Deref;

use crate::geometry::Point;

/// Ordered, non-empty sequence of pixels in the order they must be painted.
///
/// Every generator returns one of these. Consecutive duplicates are never
/// stored, so a sequence built from joined segments stays 8-connected without
/// repeating the shared joints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelSequence {
    pixels: Vec<Point>,
}

impl PixelSequence {
    /// A sequence holding a single pixel.
    #[must_use]
    pub fn single(p: Point) -> Self {
        Self { pixels: vec![p] }
    }

    /// Build from a vector, returning `None` when it is empty.
    #[must_use]
    pub fn from_vec(pixels: Vec<Point>) -> Option<Self> {
        if pixels.is_empty() {
            None
        } else {
            Some(Self { pixels })
        }
    }

    /// Build from a non-empty iterator of pixels.
    pub(crate) fn collect_nonempty(first: Point, rest: impl IntoIterator<Item = Point>) -> Self {
        let mut pixels = vec![first];
        pixels.extend(rest);
        Self { pixels }
    }

    /// The pixels as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.pixels
    }

    /// First pixel painted.
    #[must_use]
    pub fn first(&self) -> Point {
        self.pixels[0]
    }

    /// Last pixel painted.
    #[must_use]
    pub fn last(&self) -> Point {
        self.pixels[self.pixels.len() - 1]
    }

    /// Consume into the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Point> {
        self.pixels
    }

    /// True if every pair of consecutive pixels is 8-adjacent.
    #[must_use]
    pub fn is_eight_connected(&self) -> bool {
        self.pixels.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Append pixels, skipping any that repeat the current last pixel.
    pub(crate) fn append_joined(&mut self, more: impl IntoIterator<Item = Point>) {
        for p in more {
            if self.pixels.last() != Some(&p) {
                self.pixels.push(p);
            }
        }
    }

    /// Append pixels not already present anywhere in the sequence.
    pub(crate) fn append_unique(&mut self, more: impl IntoIterator<Item = Point>) {
        let mut seen: HashSet<Point> = self.pixels.iter().copied().collect();
        for p in more {
            if seen.insert(p) {
                self.pixels.push(p);
            }
        }
    }
}

impl Deref for PixelSequence {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.pixels
    }
}

impl IntoIterator for PixelSequence {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelSequence {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}
