//! Raw row reader for comma-separated flow files
//!
//! Rows come back exactly as they appear in the file: no header handling and
//! no column-count check, both of which belong to the loader.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::{FlowError, Result};

/// A single record of a delimited file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// One-based line number the record starts on
    pub line: u64,
    pub fields: Vec<String>,
}

/// Reads every record of the comma-separated file at `path`
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|e| FlowError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| read_error(path, e))?;
        let line = record.position().map(csv::Position::line).unwrap_or(0);
        rows.push(RawRow {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn read_error(path: &Path, err: csv::Error) -> FlowError {
    let line = err.position().map(csv::Position::line).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => FlowError::io(path, source),
        _ => FlowError::malformed(path, line, message),
    }
}
