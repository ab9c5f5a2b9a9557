use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::sample::{PointSet, SampleSet};

/// Analytic functions of `(x, y)` used to produce reference data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TestFunction {
    /// `sin(x) * cos(y)`
    SinTimesCos,
    /// `sin(x) + cos(y)`
    SinPlusCos,
    /// A constant value everywhere.
    Constant(f64),
}

/// Returned when a function name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown test function `{0}`; expected `sin(x)*cos(y)`, `sin(x)+cos(y)`, or a number")]
pub struct ParseFunctionError(String);

impl TestFunction {
    #[must_use]
    pub fn eval(self, x: f64, y: f64) -> f64 {
        match self {
            Self::SinTimesCos => x.sin() * y.cos(),
            Self::SinPlusCos => x.sin() + y.cos(),
            Self::Constant(value) => value,
        }
    }

    /// Evaluates the function at every point.
    #[must_use]
    pub fn sample(self, points: &PointSet) -> SampleSet {
        SampleSet::from_rows(points.rows().map(|[x, y]| [x, y, self.eval(x, y)]))
    }
}

impl FromStr for TestFunction {
    type Err = ParseFunctionError;

    /// Parses `sin(x)*cos(y)`, `sin(x)+cos(y)` (whitespace ignored), or a
    /// number for a constant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "sin(x)*cos(y)" => Ok(Self::SinTimesCos),
            "sin(x)+cos(y)" => Ok(Self::SinPlusCos),
            other => other
                .parse()
                .map(Self::Constant)
                .map_err(|_| ParseFunctionError(s.to_string())),
        }
    }
}

impl fmt::Display for TestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SinTimesCos => f.write_str("sin(x) * cos(y)"),
            Self::SinPlusCos => f.write_str("sin(x) + cos(y)"),
            Self::Constant(value) => write!(f, "{value}"),
        }
    }
}

/// Points `(i * step, i * step)` for `i` in `0..count`.
#[must_use]
pub fn diagonal_points(count: usize, step: f64) -> PointSet {
    PointSet::from_rows((0..count).map(|i| {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 * step;
        [t, t]
    }))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parses_known_names_ignoring_whitespace() {
        assert_eq!("sin(x) * cos(y)".parse(), Ok(TestFunction::SinTimesCos));
        assert_eq!("sin(x)+cos(y)".parse(), Ok(TestFunction::SinPlusCos));
        assert_eq!(" 5 ".parse(), Ok(TestFunction::Constant(5.0)));
        assert!("tan(x)".parse::<TestFunction>().is_err());
    }

    #[test]
    fn evaluates_each_function() {
        let (x, y) = (0.7, 1.3);
        assert_relative_eq!(TestFunction::SinTimesCos.eval(x, y), x.sin() * y.cos());
        assert_relative_eq!(TestFunction::SinPlusCos.eval(x, y), x.sin() + y.cos());
        assert_relative_eq!(TestFunction::Constant(-2.0).eval(x, y), -2.0);
    }

    #[test]
    fn diagonal_spans_zero_to_ten_by_tenths() {
        let points = diagonal_points(101, 0.1);
        assert_eq!(points.len(), 101);
        assert_eq!(points.rows().next(), Some([0.0, 0.0]));
        let last = points.rows().last().unwrap();
        assert_relative_eq!(last[0], 10.0, epsilon = 1e-12);
        assert_relative_eq!(last[1], 10.0, epsilon = 1e-12);
    }

    #[test]
    fn sample_keeps_locations() {
        let points = diagonal_points(3, 1.0);
        let samples = TestFunction::Constant(4.0).sample(&points);
        assert_eq!(samples.x(), points.x());
        assert_eq!(samples.y(), points.y());
        assert_eq!(samples.z(), [4.0, 4.0, 4.0]);
    }
}
