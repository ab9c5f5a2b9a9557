//! Writers producing sample files in the loader's format.
//!
//! Rows are written as `{x:.8} {y:.8} {z:.8e}`: fixed-point coordinates and a
//! scientific-notation value, separated by single spaces.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::sample::SampleSet;

/// Writes one row per sample.
///
/// # Errors
///
/// Returns any error raised by `writer`.
pub fn write_samples<W: Write>(mut writer: W, samples: &SampleSet) -> io::Result<()> {
    for [x, y, z] in samples.rows() {
        writeln!(writer, "{x:.8} {y:.8} {z:.8e}")?;
    }
    writer.flush()
}

/// Creates (or truncates) `path` and writes `samples` to it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_samples_file(path: impl AsRef<Path>, samples: &SampleSet) -> io::Result<()> {
    let file = File::create(path)?;
    write_samples(BufWriter::new(file), samples)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::read::read_samples;

    #[test]
    fn rows_use_fixed_and_scientific_notation() {
        let samples = SampleSet::from_rows([[0.1, 0.1, 0.0993346653975306], [1.0, 2.0, -250.0]]);
        let mut out = Vec::new();
        write_samples(&mut out, &samples).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "0.10000000 0.10000000 9.93346654e-2\n1.00000000 2.00000000 -2.50000000e2\n"
        );
    }

    #[test]
    fn written_rows_read_back() {
        let samples = SampleSet::from_rows((0..5).map(|i| {
            let t = f64::from(i) * 0.3;
            [t, t, t.sin() * t.cos()]
        }));
        let mut out = Vec::new();
        write_samples(&mut out, &samples).unwrap();

        let back = read_samples(out.as_slice()).unwrap();
        assert_eq!(back.len(), samples.len());
        for (a, b) in back.rows().zip(samples.rows()) {
            assert_relative_eq!(a[0], b[0], epsilon = 1e-8);
            assert_relative_eq!(a[1], b[1], epsilon = 1e-8);
            assert_relative_eq!(a[2], b[2], max_relative = 1e-8);
        }
    }
}
