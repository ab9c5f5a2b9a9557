use ndarray::{Array2, Zip};
use thiserror::Error;

use crate::{grid::Grid, nearest::KdTree, sample::SampleSet};

/// Errors that can occur when resampling scattered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpolateError {
    #[error("cannot interpolate from an empty sample set")]
    NoSamples,
}

/// Function values on a [`Grid`], one per node.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface(Array2<f64>);

impl Surface {
    /// Wraps an array of values laid out like the grid arrays, `(ny, nx)`.
    #[must_use]
    pub fn new(values: Array2<f64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn values(&self) -> &Array2<f64> {
        &self.0
    }

    /// Shape `(ny, nx)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.0.dim()
    }
}

/// Nearest-neighbor lookup over scattered samples.
///
/// Distances are Euclidean in the X–Y plane. The value returned for a query is
/// always the Z of an existing sample; when several samples are equally close
/// the one listed first wins.
#[derive(Debug, Clone)]
pub struct NearestNeighbor {
    tree: KdTree,
    values: Vec<f64>,
}

impl NearestNeighbor {
    /// Indexes the `(x, y)` locations of `samples`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolateError::NoSamples`] if `samples` is empty.
    pub fn new(samples: &SampleSet) -> Result<Self, InterpolateError> {
        let locations = samples
            .x()
            .iter()
            .zip(samples.y())
            .map(|(&x, &y)| [x, y])
            .collect();
        let tree = KdTree::build(locations).ok_or(InterpolateError::NoSamples)?;

        Ok(Self {
            tree,
            values: samples.z().to_vec(),
        })
    }

    /// Value of the sample nearest to `[x, y]`.
    #[must_use]
    pub fn value_at(&self, point: [f64; 2]) -> f64 {
        self.values[self.tree.nearest(point)]
    }

    /// Evaluates every node of `grid`.
    #[must_use]
    pub fn resample(&self, grid: &Grid) -> Surface {
        let values = Zip::from(grid.xs())
            .and(grid.ys())
            .map_collect(|&x, &y| self.value_at([x, y]));
        Surface(values)
    }
}

/// Resamples scattered `samples` onto `grid` by nearest-neighbor lookup.
///
/// Every node receives a value; there are no coverage holes.
///
/// # Errors
///
/// Returns [`InterpolateError::NoSamples`] if `samples` is empty.
pub fn interpolate_nearest(samples: &SampleSet, grid: &Grid) -> Result<Surface, InterpolateError> {
    Ok(NearestNeighbor::new(samples)?.resample(grid))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::bounds::Bounds;

    #[test]
    fn picks_value_of_closest_sample() {
        let samples = SampleSet::from_rows([[0.0, 0.0, 1.0], [4.0, 0.0, 2.0], [0.0, 4.0, 3.0]]);
        let nn = NearestNeighbor::new(&samples).unwrap();

        assert_eq!(nn.value_at([0.4, 0.1]), 1.0);
        assert_eq!(nn.value_at([3.0, 1.0]), 2.0);
        assert_eq!(nn.value_at([1.0, 3.5]), 3.0);
    }

    #[test]
    fn resampled_grid_matches_shape_and_values() {
        let samples = SampleSet::from_rows([[0.0, 0.0, -1.0], [2.0, 1.0, 5.0]]);
        let grid = Grid::covering(&Bounds::union(&[&samples]).unwrap());

        let surface = interpolate_nearest(&samples, &grid).unwrap();
        assert_eq!(surface.shape(), grid.shape());
        assert_eq!(
            surface.values(),
            &array![[-1.0, -1.0, 5.0], [-1.0, 5.0, 5.0]]
        );
    }

    #[test]
    fn every_value_comes_from_the_samples() {
        let samples = SampleSet::from_rows(
            (0..25).map(|i| {
                let t = f64::from(i) * 0.37;
                [t.sin() * 4.0, t.cos() * 3.0, t * t]
            }),
        );
        let grid = Grid::covering(&Bounds::union(&[&samples]).unwrap());
        let surface = interpolate_nearest(&samples, &grid).unwrap();

        for value in surface.values() {
            assert!(samples.z().contains(value), "{value} is not a sample value");
        }
    }

    #[test]
    fn empty_samples_are_rejected() {
        let err = NearestNeighbor::new(&SampleSet::default()).unwrap_err();
        assert_eq!(err, InterpolateError::NoSamples);
    }
}
