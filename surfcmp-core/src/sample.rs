use thiserror::Error;

/// One of the three compared solution sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Finite-element method solution.
    Fem,
    /// Smoothing-spline solution.
    Spline,
    /// Analytic (ground-truth) function.
    True,
}

impl Dataset {
    /// All datasets, in load and draw order.
    pub const ALL: [Dataset; 3] = [Dataset::Fem, Dataset::Spline, Dataset::True];

    /// Position of this dataset within [`Dataset::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Fem => 0,
            Self::Spline => 1,
            Self::True => 2,
        }
    }

    /// File name of this dataset inside a case directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Fem => "dataFEM.txt",
            Self::Spline => "dataSpline.txt",
            Self::True => "dataTrue.txt",
        }
    }

    /// Legend label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fem => "FEM",
            Self::Spline => "Spline",
            Self::True => "True",
        }
    }

    /// Header line introducing this dataset in a producer log.
    #[must_use]
    pub fn section_header(self) -> &'static str {
        match self {
            Self::Fem => "FEM solution",
            Self::Spline => "Spline solution",
            Self::True => "True solution",
        }
    }
}

/// Returned when parallel columns do not share one length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("column lengths differ: x has {x}, y has {y}, z has {z}")]
pub struct ColumnLengthError {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

/// Scattered `(x, y, z)` samples stored as three aligned columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl SampleSet {
    /// Creates a sample set from three columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, ColumnLengthError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(ColumnLengthError {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { x, y, z })
    }

    /// Creates a sample set from `[x, y, z]` rows.
    pub fn from_rows(rows: impl IntoIterator<Item = [f64; 3]>) -> Self {
        let mut set = Self::default();
        for [x, y, z] in rows {
            set.x.push(x);
            set.y.push(y);
            set.z.push(z);
        }
        set
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Iterates over the samples as `[x, y, z]` rows.
    pub fn rows(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| [x, y, z])
    }
}

/// Scattered `(x, y)` locations without values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PointSet {
    /// Creates a point set from `[x, y]` rows.
    pub fn from_rows(rows: impl IntoIterator<Item = [f64; 2]>) -> Self {
        let (x, y) = rows.into_iter().map(|[x, y]| (x, y)).unzip();
        Self { x, y }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterates over the points as `[x, y]` rows.
    pub fn rows(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y])
    }
}
