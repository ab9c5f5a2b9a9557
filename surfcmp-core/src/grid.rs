use ndarray::{Array1, Array2};
use tracing::warn;

use crate::bounds::Bounds;

/// Spacing between neighboring grid lines.
///
/// The step is fixed rather than adapted to sample density or domain size.
/// Bounds that are not whole multiples of it leave the upper edge of the data
/// off the grid.
pub const STEP: f64 = 1.0;

/// Values `min, min + STEP, …` strictly below `max + STEP`.
///
/// For bounds on the step lattice both `min` and `max` are included. Values
/// are computed as `min + i * STEP` so no rounding error accumulates.
#[must_use]
pub fn unit_range(min: f64, max: f64) -> Array1<f64> {
    let upper = max + STEP;
    let count = ((upper - min) / STEP).ceil();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    };

    #[allow(clippy::cast_precision_loss)]
    let values = (0..count).map(|i| min + i as f64 * STEP);
    Array1::from_iter(values)
}

/// A rectangular mesh of `(x, y)` coordinates.
///
/// Arrays have shape `(ny, nx)`: the row index follows Y and the column index
/// follows X.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x_axis: Array1<f64>,
    y_axis: Array1<f64>,
    xs: Array2<f64>,
    ys: Array2<f64>,
}

impl Grid {
    /// Builds the outer product of two axes.
    #[must_use]
    pub fn from_axes(x_axis: Array1<f64>, y_axis: Array1<f64>) -> Self {
        let shape = (y_axis.len(), x_axis.len());
        let xs = Array2::from_shape_fn(shape, |(_, i)| x_axis[i]);
        let ys = Array2::from_shape_fn(shape, |(j, _)| y_axis[j]);

        Self {
            x_axis,
            y_axis,
            xs,
            ys,
        }
    }

    /// Builds the unit-step grid covering `bounds`.
    #[must_use]
    pub fn covering(bounds: &Bounds) -> Self {
        let grid = Self::from_axes(
            unit_range(bounds.min_x, bounds.max_x),
            unit_range(bounds.min_y, bounds.max_y),
        );

        let on_lattice = grid.x_axis.iter().next_back() == Some(&bounds.max_x)
            && grid.y_axis.iter().next_back() == Some(&bounds.max_y);
        if !on_lattice {
            warn!(
                max_x = bounds.max_x,
                max_y = bounds.max_y,
                "bounds are off the unit-step lattice; the grid does not end on the data maximum"
            );
        }

        grid
    }

    /// Shape `(ny, nx)` shared by every array of this grid.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.y_axis.len(), self.x_axis.len())
    }

    #[must_use]
    pub fn x_axis(&self) -> &Array1<f64> {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &Array1<f64> {
        &self.y_axis
    }

    /// X coordinate of every node.
    #[must_use]
    pub fn xs(&self) -> &Array2<f64> {
        &self.xs
    }

    /// Y coordinate of every node.
    #[must_use]
    pub fn ys(&self) -> &Array2<f64> {
        &self.ys
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn unit_range_includes_both_ends_on_lattice() {
        assert_eq!(unit_range(0.0, 3.0), array![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(unit_range(-2.0, 1.0), array![-2.0, -1.0, 0.0, 1.0]);
        assert_eq!(unit_range(4.0, 4.0), array![4.0]);
    }

    #[test]
    fn unit_range_stops_below_max_plus_step() {
        // Like `arange(0, 2.5 + 1, 1)`.
        assert_eq!(unit_range(0.0, 2.5), array![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(unit_range(0.0, 0.999_999_9), array![0.0, 1.0]);
        assert_eq!(unit_range(0.5, 2.0), array![0.5, 1.5, 2.5]);
    }

    #[test]
    fn unit_range_of_inverted_bounds_is_empty() {
        assert!(unit_range(5.0, 2.0).is_empty());
        assert!(unit_range(0.0, f64::NAN).is_empty());
    }

    #[test]
    fn covering_grid_uses_xy_indexing() {
        let bounds = Bounds {
            min_x: 0.0,
            max_x: 2.0,
            min_y: 10.0,
            max_y: 11.0,
        };
        let grid = Grid::covering(&bounds);

        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.xs(), &array![[0.0, 1.0, 2.0], [0.0, 1.0, 2.0]]);
        assert_eq!(grid.ys(), &array![[10.0, 10.0, 10.0], [11.0, 11.0, 11.0]]);
    }
}
