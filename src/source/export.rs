//! JSONL review export source.
//!
//! Each non-blank line is one review object with the same columns the
//! collection query returns (`flds`, `ivl`, `ease`, `reps`, `nid`, `id`).
//! Line order is taken as chronological order.

use crate::model::error::LoadError;
use crate::model::RawReview;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// JSONL export file of review rows.
#[derive(Debug, Clone)]
pub struct ExportSource {
    path: PathBuf,
}

impl ExportSource {
    /// Create a source for the given export path.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the export.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row of the export.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` on read failure and `LoadError::InvalidRow`
    /// for the first line that is not a review object.
    pub fn load(&self) -> Result<Vec<RawReview>, LoadError> {
        parse_rows(File::open(&self.path)?)
    }
}

/// Parse JSONL review rows from any reader.
pub(crate) fn parse_rows(reader: impl Read) -> Result<Vec<RawReview>, LoadError> {
    let mut rows = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = serde_json::from_str(&line).map_err(|e| LoadError::InvalidRow {
            line: index + 1,
            message: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}
