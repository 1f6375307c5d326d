//! Observation sequence writers.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::IoError;
use crate::format::OutputFormat;

fn wrap(path: &Path, source: std::io::Error) -> IoError {
    IoError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes one observation per line, in sequence order.
pub fn write_lines<T: Display>(path: &Path, values: &[T]) -> Result<(), IoError> {
    let mut out = BufWriter::new(File::create(path).map_err(|e| wrap(path, e))?);
    for v in values {
        writeln!(out, "{v}").map_err(|e| wrap(path, e))?;
    }
    out.flush().map_err(|e| wrap(path, e))
}

/// Writes the two-row semicolon-delimited form.
///
/// Line 1 holds `dates` followed by the timestep indices, line 2 holds
/// `ardata` followed by the observation values.
pub fn write_two_row<T: Display>(path: &Path, values: &[T]) -> Result<(), IoError> {
    let mut out = BufWriter::new(File::create(path).map_err(|e| wrap(path, e))?);
    write!(out, "dates").map_err(|e| wrap(path, e))?;
    for i in 0..values.len() {
        write!(out, ";{i}").map_err(|e| wrap(path, e))?;
    }
    write!(out, "\nardata").map_err(|e| wrap(path, e))?;
    for v in values {
        write!(out, ";{v}").map_err(|e| wrap(path, e))?;
    }
    writeln!(out).map_err(|e| wrap(path, e))?;
    out.flush().map_err(|e| wrap(path, e))
}

/// Writes the two-column CSV form: `dates,ardata` header, then one
/// `index,value` line per observation.
pub fn write_csv<T: Display>(path: &Path, values: &[T]) -> Result<(), IoError> {
    let mut out = BufWriter::new(File::create(path).map_err(|e| wrap(path, e))?);
    writeln!(out, "dates,ardata").map_err(|e| wrap(path, e))?;
    for (i, v) in values.iter().enumerate() {
        writeln!(out, "{i},{v}").map_err(|e| wrap(path, e))?;
    }
    out.flush().map_err(|e| wrap(path, e))
}

/// Writes an observation sequence in the requested format.
pub fn write_observations<T: Display>(
    path: &Path,
    values: &[T],
    format: OutputFormat,
) -> Result<(), IoError> {
    match format {
        OutputFormat::Lines => write_lines(path, values),
        OutputFormat::TwoRow => write_two_row(path, values),
        OutputFormat::Csv => write_csv(path, values),
    }
}
