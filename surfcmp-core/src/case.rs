use std::path::{Path, PathBuf};

use crate::{
    read::{ReadError, read_samples_file},
    sample::{Dataset, SampleSet},
};

/// A directory holding the three data files of one test case.
///
/// The directory name usually encodes the test function and the weighting
/// parameter, for example `sin(x) + cos(y)/weights/weight = 5`. The files
/// inside are named by [`Dataset::file_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDir {
    root: PathBuf,
}

impl CaseDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `dataset`.
    #[must_use]
    pub fn path(&self, dataset: Dataset) -> PathBuf {
        self.root.join(dataset.file_name())
    }

    /// Human-readable name of the case, used as a window title.
    #[must_use]
    pub fn description(&self) -> String {
        self.root.display().to_string()
    }

    /// Reads the FEM, spline, and true sample sets, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered reading any of the files.
    pub fn load(&self) -> Result<[SampleSet; 3], ReadError> {
        let [fem, spline, truth] = Dataset::ALL.map(|dataset| self.path(dataset));
        Ok([
            read_samples_file(fem)?,
            read_samples_file(spline)?,
            read_samples_file(truth)?,
        ])
    }
}
