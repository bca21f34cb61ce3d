//! Output of the adaptive integrator.

use crate::{Float, core::round::round15};

/// Irregularly spaced `(x, y)` points accepted by an adaptive integrator.
///
/// Both vectors always have the same length; the first point is the initial
/// condition. Every stored value is rounded to 15 decimal digits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdaptiveTrace {
    pub x: Vec<Float>,
    pub y: Vec<Float>,
}

impl AdaptiveTrace {
    pub fn new(x0: Float, y0: Float) -> Self {
        let mut trace = Self::default();
        trace.push(x0, y0);
        trace
    }

    /// Append a point, rounding both coordinates.
    pub fn push(&mut self, x: Float, y: Float) {
        self.x.push(round15(x));
        self.y.push(round15(y));
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Last stored point.
    pub fn last(&self) -> Option<(Float, Float)> {
        Some((*self.x.last()?, *self.y.last()?))
    }

    /// Iterate over stored `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
