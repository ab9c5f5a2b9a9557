use tracing::{debug, info};

use crate::{
    Error,
    accuracy::Accuracy,
    bounds::{Bounds, ValueRange},
    case::CaseDir,
    grid::Grid,
    interpolate::{Surface, interpolate_nearest},
    sample::{Dataset, SampleSet},
};

/// Everything needed to draw the comparison figures.
///
/// Built once, strictly in order: bounds, grid, one nearest-neighbor surface
/// per dataset, value range, accuracy. The first failing stage aborts.
#[derive(Debug, Clone)]
pub struct Comparison {
    samples: [SampleSet; 3],
    bounds: Bounds,
    grid: Grid,
    surfaces: [Surface; 3],
    value_range: ValueRange,
    accuracy: Accuracy,
}

impl Comparison {
    /// Loads the three files of `case` and builds the comparison.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or any stage fails.
    pub fn load(case: &CaseDir) -> Result<Self, Error> {
        let samples = case.load()?;
        info!(case = %case.description(), "loaded case");
        Self::build(samples)
    }

    /// Builds the comparison from FEM, spline, and true samples, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if any sample set is empty.
    pub fn build(samples: [SampleSet; 3]) -> Result<Self, Error> {
        for dataset in Dataset::ALL {
            debug!(
                dataset = dataset.label(),
                samples = samples[dataset.index()].len(),
                "sample set"
            );
        }

        let [fem, spline, truth] = &samples;
        let bounds = Bounds::union(&[fem, spline, truth])?;

        let grid = Grid::covering(&bounds);
        info!(
            min_x = bounds.min_x,
            max_x = bounds.max_x,
            min_y = bounds.min_y,
            max_y = bounds.max_y,
            nodes = grid.xs().len(),
            "built grid"
        );

        let surfaces = [
            interpolate_nearest(fem, &grid)?,
            interpolate_nearest(spline, &grid)?,
            interpolate_nearest(truth, &grid)?,
        ];

        let [fem_surface, spline_surface, true_surface] = &surfaces;
        let value_range = ValueRange::union(&[fem_surface, spline_surface, true_surface])?;
        let accuracy = Accuracy::against_truth(fem_surface, spline_surface, true_surface)?;
        info!(
            min = value_range.min,
            max = value_range.max,
            fem_max_abs = accuracy.fem.max_abs,
            fem_rms = accuracy.fem.rms,
            spline_max_abs = accuracy.spline.max_abs,
            spline_rms = accuracy.spline.rms,
            "resampled surfaces"
        );

        Ok(Self {
            samples,
            bounds,
            grid,
            surfaces,
            value_range,
            accuracy,
        })
    }

    /// Original scattered samples of `dataset`.
    #[must_use]
    pub fn samples(&self, dataset: Dataset) -> &SampleSet {
        &self.samples[dataset.index()]
    }

    /// Resampled surface of `dataset`.
    #[must_use]
    pub fn surface(&self, dataset: Dataset) -> &Surface {
        &self.surfaces[dataset.index()]
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Global value range over all three surfaces.
    #[must_use]
    pub fn value_range(&self) -> &ValueRange {
        &self.value_range
    }

    #[must_use]
    pub fn accuracy(&self) -> &Accuracy {
        &self.accuracy
    }
}
