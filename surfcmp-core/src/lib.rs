//! Core data handling for comparing FEM, spline, and true solutions.
//!
//! The crate implements a single forward pipeline:
//!
//! - [`read`]: parse whitespace-delimited sample files into [`SampleSet`]s
//! - [`Bounds`]: union bounding box of all sample sets
//! - [`Grid`]: unit-step mesh covering the bounding box
//! - [`interpolate_nearest`]: nearest-neighbor resampling onto the grid
//! - [`Comparison`]: the composed result, ready for presentation
//!
//! Supporting modules handle case directories ([`CaseDir`]), splitting a
//! producer log into data files ([`split`]), writing analytic samples
//! ([`write`], [`TestFunction`]), and an accuracy summary ([`Accuracy`]).

mod accuracy;
mod bounds;
mod case;
mod error;
mod function;
mod grid;
mod interpolate;
mod nearest;
mod pipeline;
mod sample;

pub mod read;
pub mod split;
pub mod write;

pub use accuracy::{Accuracy, AccuracyError, Deviation};
pub use bounds::{Bounds, BoundsError, ValueRange};
pub use case::CaseDir;
pub use error::Error;
pub use function::{ParseFunctionError, TestFunction, diagonal_points};
pub use grid::{Grid, STEP, unit_range};
pub use interpolate::{InterpolateError, NearestNeighbor, Surface, interpolate_nearest};
pub use pipeline::Comparison;
pub use sample::{ColumnLengthError, Dataset, PointSet, SampleSet};
