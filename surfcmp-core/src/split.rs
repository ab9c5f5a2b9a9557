//! Splitting a producer log into the data files of a case directory.
//!
//! The program that computes the solutions prints all three to one stream:
//!
//! ```text
//! FEM solution
//! 0.00000000 0.00000000 0.00000000E+000
//! ...
//! Spline solution
//! ...
//! True solution
//! ...
//! ```
//!
//! [`split_sections`] collects the rows under each header and
//! [`write_sections`] writes them to the files named by [`Dataset::file_name`].

use std::{
    fs::{self, File},
    io::{self, BufRead, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{case::CaseDir, sample::Dataset};

/// Errors that can occur while splitting a producer log.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("section `{}` is missing", .0.section_header())]
    MissingSection(Dataset),

    #[error("section `{}` appears more than once", .0.section_header())]
    DuplicateSection(Dataset),

    #[error("failed to read log")]
    Read(#[source] io::Error),

    #[error("failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Data rows of each section, indexed by [`Dataset::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    rows: [Vec<String>; 3],
}

impl Sections {
    /// Rows collected under the header of `dataset`.
    #[must_use]
    pub fn rows(&self, dataset: Dataset) -> &[String] {
        &self.rows[dataset.index()]
    }
}

/// Collects the rows following each section header.
///
/// Lines before the first header are ignored, as are blank lines. Rows are
/// kept verbatim apart from surrounding whitespace.
///
/// # Errors
///
/// Returns an error if the log cannot be read or if any header is missing or
/// repeated.
pub fn split_sections<R: BufRead>(reader: R) -> Result<Sections, SplitError> {
    let mut rows: [Vec<String>; 3] = Default::default();
    let mut seen = [false; 3];
    let mut current: Option<Dataset> = None;

    for line in reader.lines() {
        let line = line.map_err(SplitError::Read)?;
        let line = line.trim();

        if let Some(dataset) = Dataset::ALL
            .into_iter()
            .find(|dataset| dataset.section_header() == line)
        {
            if seen[dataset.index()] {
                return Err(SplitError::DuplicateSection(dataset));
            }
            seen[dataset.index()] = true;
            current = Some(dataset);
            continue;
        }

        if let Some(dataset) = current {
            if !line.is_empty() {
                rows[dataset.index()].push(line.to_string());
            }
        }
    }

    if let Some(dataset) = Dataset::ALL.into_iter().find(|d| !seen[d.index()]) {
        return Err(SplitError::MissingSection(dataset));
    }

    Ok(Sections { rows })
}

/// Writes each section to its file in `case`, creating the directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or any file cannot be written.
pub fn write_sections(sections: &Sections, case: &CaseDir) -> Result<(), SplitError> {
    fs::create_dir_all(case.root()).map_err(|source| SplitError::Write {
        path: case.root().to_path_buf(),
        source,
    })?;

    for dataset in Dataset::ALL {
        let path = case.path(dataset);
        write_rows(&path, sections.rows(dataset))
            .map_err(|source| SplitError::Write { path, source })?;
    }

    Ok(())
}

fn write_rows(path: &Path, rows: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for row in rows {
        writeln!(writer, "{row}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const LOG: &str = "\
Building...
FEM solution
0.00000000 0.00000000 0.00000000E+000
0.10000000 0.10000000 9.93346654E-002

Spline solution
0.00000000 0.00000000 1.00000000E-003
0.10000000 0.10000000 9.90000000E-002
True solution
0.00000000 0.00000000 0.00000000E+000
0.10000000 0.10000000 9.93346654E-002
";

    #[test]
    fn collects_rows_under_each_header() {
        let sections = split_sections(LOG.as_bytes()).unwrap();

        assert_eq!(
            sections.rows(Dataset::Fem),
            [
                "0.00000000 0.00000000 0.00000000E+000",
                "0.10000000 0.10000000 9.93346654E-002",
            ]
        );
        assert_eq!(sections.rows(Dataset::Spline).len(), 2);
        assert_eq!(sections.rows(Dataset::True).len(), 2);
    }

    #[test]
    fn missing_header_is_an_error() {
        let err = split_sections("FEM solution\n1 2 3\nTrue solution\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SplitError::MissingSection(Dataset::Spline)));
    }

    #[test]
    fn repeated_header_is_an_error() {
        let log = "FEM solution\nSpline solution\nFEM solution\nTrue solution\n";
        let err = split_sections(log.as_bytes()).unwrap_err();
        assert!(matches!(err, SplitError::DuplicateSection(Dataset::Fem)));
    }

    #[test]
    fn written_sections_load_as_a_case() {
        let dir = TempDir::new().unwrap();
        let case = CaseDir::new(dir.path().join("sin(x) * cos(y)").join("weight = 1"));

        let sections = split_sections(LOG.as_bytes()).unwrap();
        write_sections(&sections, &case).unwrap();

        let [fem, spline, truth] = case.load().unwrap();
        assert_eq!(fem.x(), [0.0, 0.1]);
        assert_eq!(spline.z(), [1e-3, 0.099]);
        assert_eq!(truth.len(), 2);
    }
}
