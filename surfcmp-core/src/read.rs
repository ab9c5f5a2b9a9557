//! Readers for whitespace-delimited sample files.
//!
//! Each non-empty line holds one sample. Three-column files (`x y z`) load
//! into a [`SampleSet`]; two-column files (`x y`) load into a [`PointSet`].
//! Fields past the expected count are ignored. There are no headers or
//! comments, and a malformed line fails the whole read.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseFloatError,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::sample::{PointSet, SampleSet};

/// Errors that can occur while reading a sample file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open `{}`", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read `{}`", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ReadError>,
    },

    #[error("failed to read line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected {expected} fields, found {found}")]
    MissingField {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number `{field}`")]
    InvalidNumber {
        line: usize,
        field: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Reads `x y z` rows into a [`SampleSet`].
///
/// # Errors
///
/// Returns an error if a line cannot be read, has fewer than three fields, or
/// holds a field that is not a number.
pub fn read_samples<R: BufRead>(reader: R) -> Result<SampleSet, ReadError> {
    let [x, y, z] = read_columns::<3, _>(reader)?;
    Ok(SampleSet::from_rows(
        x.into_iter().zip(y).zip(z).map(|((x, y), z)| [x, y, z]),
    ))
}

/// Reads `x y` rows into a [`PointSet`].
///
/// # Errors
///
/// Returns an error if a line cannot be read, has fewer than two fields, or
/// holds a field that is not a number.
pub fn read_points<R: BufRead>(reader: R) -> Result<PointSet, ReadError> {
    let [x, y] = read_columns::<2, _>(reader)?;
    Ok(PointSet::from_rows(x.into_iter().zip(y).map(|(x, y)| [x, y])))
}

/// Opens `path` and reads it with [`read_samples`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its contents are invalid.
pub fn read_samples_file(path: impl AsRef<Path>) -> Result<SampleSet, ReadError> {
    let path = path.as_ref();
    read_samples(open(path)?).map_err(|source| in_file(path, source))
}

/// Opens `path` and reads it with [`read_points`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its contents are invalid.
pub fn read_points_file(path: impl AsRef<Path>) -> Result<PointSet, ReadError> {
    let path = path.as_ref();
    read_points(open(path)?).map_err(|source| in_file(path, source))
}

fn open(path: &Path) -> Result<BufReader<File>, ReadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn in_file(path: &Path, source: ReadError) -> ReadError {
    ReadError::InFile {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

/// Parses the first `N` fields of every non-empty line into `N` columns.
fn read_columns<const N: usize, R: BufRead>(reader: R) -> Result<[Vec<f64>; N], ReadError> {
    let mut columns: [Vec<f64>; N] = std::array::from_fn(|_| Vec::new());

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| ReadError::Io {
            line: line_number,
            source,
        })?;

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < N {
            return Err(ReadError::MissingField {
                line: line_number,
                expected: N,
                found: fields.len(),
            });
        }

        for (column, field) in columns.iter_mut().zip(&fields) {
            let value = field.parse().map_err(|source| ReadError::InvalidNumber {
                line: line_number,
                field: (*field).to_string(),
                source,
            })?;
            column.push(value);
        }
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_three_aligned_columns() {
        let input = "0.0 0.0 1.5\n1.0 2.0 -3.25e-1\n\n  2 4   6  \n";
        let set = read_samples(input.as_bytes()).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.x(), [0.0, 1.0, 2.0]);
        assert_eq!(set.y(), [0.0, 2.0, 4.0]);
        assert_eq!(set.z(), [1.5, -0.325, 6.0]);
    }

    #[test]
    fn ignores_trailing_fields() {
        let set = read_samples("1 2 3 4 5\n".as_bytes()).unwrap();
        assert_eq!(set.rows().collect::<Vec<_>>(), [[1.0, 2.0, 3.0]]);
    }

    #[test]
    fn reads_point_pairs() {
        let points = read_points("0.5 1.5\n2.5 3.5\n".as_bytes()).unwrap();
        assert_eq!(points.rows().collect::<Vec<_>>(), [[0.5, 1.5], [2.5, 3.5]]);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let set = read_samples("".as_bytes()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn short_line_fails_the_read() {
        let err = read_samples("1 2 3\n4 5\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::MissingField {
                line: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn invalid_number_fails_the_read() {
        let err = read_samples("1 2 three\n".as_bytes()).unwrap_err();
        match err {
            ReadError::InvalidNumber { line, field, .. } => {
                assert_eq!(line, 1);
                assert_eq!(field, "three");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_samples_file("does/not/exist/dataFEM.txt").unwrap_err();
        assert!(matches!(err, ReadError::Open { .. }));
        assert!(err.to_string().contains("dataFEM.txt"));
    }
}
