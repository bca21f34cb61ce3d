//! Labelled output series handed to tabulation and plotting sinks.

use crate::Float;

/// One labelled curve: abscissas, values and a display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub x: Vec<Float>,
    pub y: Vec<Float>,
}

impl Series {
    pub fn new(label: impl Into<String>, x: Vec<Float>, y: Vec<Float>) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Final `(x, y)` point.
    pub fn last(&self) -> Option<(Float, Float)> {
        Some((*self.x.last()?, *self.y.last()?))
    }

    /// Iterate over stored `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
