use ndarray::Zip;
use thiserror::Error;

use crate::interpolate::Surface;

/// Errors that can occur when comparing two surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccuracyError {
    #[error("surface shapes differ: {candidate:?} vs reference {reference:?}")]
    ShapeMismatch {
        candidate: (usize, usize),
        reference: (usize, usize),
    },
}

/// Pointwise deviation of one surface from another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    /// Largest absolute difference over all nodes.
    pub max_abs: f64,
    /// Root-mean-square difference over all nodes.
    pub rms: f64,
}

impl Deviation {
    /// Measures how far `candidate` is from `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surfaces do not share a shape.
    pub fn between(candidate: &Surface, reference: &Surface) -> Result<Self, AccuracyError> {
        if candidate.shape() != reference.shape() {
            return Err(AccuracyError::ShapeMismatch {
                candidate: candidate.shape(),
                reference: reference.shape(),
            });
        }

        let mut max_abs: f64 = 0.0;
        let mut sum_sq = 0.0;
        Zip::from(candidate.values())
            .and(reference.values())
            .for_each(|&c, &r| {
                let diff = c - r;
                max_abs = max_abs.max(diff.abs());
                sum_sq += diff * diff;
            });

        #[allow(clippy::cast_precision_loss)]
        let count = candidate.values().len() as f64;

        Ok(Self {
            max_abs,
            rms: (sum_sq / count).sqrt(),
        })
    }
}

/// Deviation of each numerical method from the true surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accuracy {
    pub fem: Deviation,
    pub spline: Deviation,
}

impl Accuracy {
    /// Compares the FEM and spline surfaces against the true one.
    ///
    /// # Errors
    ///
    /// Returns an error if any two surfaces differ in shape.
    pub fn against_truth(
        fem: &Surface,
        spline: &Surface,
        truth: &Surface,
    ) -> Result<Self, AccuracyError> {
        Ok(Self {
            fem: Deviation::between(fem, truth)?,
            spline: Deviation::between(spline, truth)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn identical_surfaces_have_zero_deviation() {
        let s = Surface::new(array![[1.0, 2.0], [3.0, 4.0]]);
        let d = Deviation::between(&s, &s).unwrap();
        assert_eq!(d, Deviation { max_abs: 0.0, rms: 0.0 });
    }

    #[test]
    fn deviation_reports_max_and_rms() {
        let candidate = Surface::new(array![[1.0, 2.0], [3.0, 4.0]]);
        let reference = Surface::new(array![[1.0, 1.0], [3.0, 1.0]]);

        let d = Deviation::between(&candidate, &reference).unwrap();
        assert_relative_eq!(d.max_abs, 3.0);
        // Differences 0, 1, 0, 3 -> sqrt(10 / 4).
        assert_relative_eq!(d.rms, 2.5_f64.sqrt());
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let a = Surface::new(array![[1.0, 2.0]]);
        let b = Surface::new(array![[1.0], [2.0]]);
        assert_eq!(
            Deviation::between(&a, &b),
            Err(AccuracyError::ShapeMismatch {
                candidate: (1, 2),
                reference: (2, 1),
            })
        );
    }

    #[test]
    fn accuracy_compares_both_methods_to_truth() {
        let truth = Surface::new(array![[0.0, 0.0]]);
        let fem = Surface::new(array![[0.5, -0.5]]);
        let spline = Surface::new(array![[0.0, 2.0]]);

        let accuracy = Accuracy::against_truth(&fem, &spline, &truth).unwrap();
        assert_relative_eq!(accuracy.fem.max_abs, 0.5);
        assert_relative_eq!(accuracy.fem.rms, 0.5);
        assert_relative_eq!(accuracy.spline.max_abs, 2.0);
        assert_relative_eq!(accuracy.spline.rms, 2.0_f64.sqrt());
    }
}
