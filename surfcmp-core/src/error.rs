use thiserror::Error;

use crate::{
    accuracy::AccuracyError, bounds::BoundsError, interpolate::InterpolateError,
    read::ReadError,
};

/// Errors that can abort building a [`Comparison`](crate::Comparison).
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load samples")]
    Read(#[from] ReadError),

    #[error("failed to compute bounds")]
    Bounds(#[from] BoundsError),

    #[error("failed to interpolate samples")]
    Interpolate(#[from] InterpolateError),

    #[error("failed to compare surfaces")]
    Accuracy(#[from] AccuracyError),
}
