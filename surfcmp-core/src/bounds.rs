use thiserror::Error;

use crate::{interpolate::Surface, sample::SampleSet};

/// Errors that can occur when computing bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    /// No values were supplied, or one of the supplied sets was empty.
    #[error("cannot compute bounds of an empty set")]
    Empty,
}

/// Axis-aligned bounding box in the X–Y plane.
///
/// Always the union over every compared sample set, so that all datasets are
/// drawn on identical axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Computes the union bounding box of `sets`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Empty`] if `sets` is empty or any set has no
    /// samples.
    pub fn union(sets: &[&SampleSet]) -> Result<Self, BoundsError> {
        if sets.is_empty() || sets.iter().any(|set| set.is_empty()) {
            return Err(BoundsError::Empty);
        }

        let (min_x, max_x) = extent(sets.iter().flat_map(|set| set.x()));
        let (min_y, max_y) = extent(sets.iter().flat_map(|set| set.y()));

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Returns `true` if `(x, y)` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// Global range of function values over all interpolated surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Computes the range spanned by every value of every surface.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Empty`] if there are no values at all.
    pub fn union(surfaces: &[&Surface]) -> Result<Self, BoundsError> {
        if surfaces.iter().all(|surface| surface.values().is_empty()) {
            return Err(BoundsError::Empty);
        }

        let (min, max) = extent(surfaces.iter().flat_map(|surface| surface.values().iter()));
        Ok(Self { min, max })
    }

    /// Width of the range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

fn extent<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
        (min.min(v), max.max(v))
    })
}
