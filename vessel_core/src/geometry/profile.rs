//! Lazy profile sampling for [`HeadShape`].

use std::iter::FusedIterator;

use crate::geometry::torispherical::HeadShape;

/// Evenly spaced `(x, y)` samples of the half cross-section, x ascending
/// from the axis (0) to the wall (Da/2).
///
/// Spacing follows linspace semantics: zero points yield nothing, one point
/// yields only the axis, and the last sample sits exactly on the wall.
/// Each y is the exact contour height; only the sample density is a choice.
#[derive(Debug, Clone)]
pub struct ProfilePoints {
    shape: HeadShape,
    num_points: usize,
    front: usize,
    back: usize,
}

impl ProfilePoints {
    pub(crate) fn new(shape: HeadShape, num_points: usize) -> Self {
        ProfilePoints {
            shape,
            num_points,
            front: 0,
            back: num_points,
        }
    }

    /// Total number of samples, independent of iteration progress
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    fn x_at(&self, index: usize) -> f64 {
        let half = self.shape.external_diameter() / 2.0;
        if self.num_points < 2 {
            return 0.0;
        }
        if index == self.num_points - 1 {
            return half;
        }
        let step = half / (self.num_points - 1) as f64;
        index as f64 * step
    }

    fn point_at(&self, index: usize) -> (f64, f64) {
        let x = self.x_at(index);
        (x, self.shape.height_at(x))
    }
}

impl Iterator for ProfilePoints {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = self.point_at(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for ProfilePoints {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point_at(self.back))
    }
}

impl ExactSizeIterator for ProfilePoints {}

impl FusedIterator for ProfilePoints {}
