//! Review log sources.
//!
//! This module provides the event store adapters:
//! - Anki collection files (SQLite)
//! - JSONL exports of the same review rows
//! - Unified ReviewSource enum for both

use crate::model::error::LoadError;
use crate::model::RawReview;
use std::path::{Path, PathBuf};

pub mod collection;
pub mod export;

pub use collection::CollectionSource;
pub use export::ExportSource;

/// File extensions treated as JSONL exports.
const EXPORT_EXTENSIONS: [&str; 2] = ["jsonl", "ndjson"];

/// Unified source of review rows.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone)]
pub enum ReviewSource {
    /// Anki `collection.anki2` SQLite file.
    Collection(CollectionSource),
    /// JSONL export.
    Export(ExportSource),
}

impl ReviewSource {
    /// Load every review row, oldest first.
    ///
    /// The full sequence is read once; there is no incremental polling.
    ///
    /// # Errors
    ///
    /// Propagates the variant's `LoadError`.
    pub fn load(&self) -> Result<Vec<RawReview>, LoadError> {
        match self {
            ReviewSource::Collection(c) => c.load(),
            ReviewSource::Export(e) => e.load(),
        }
    }

    /// Path the source reads from.
    pub fn path(&self) -> &Path {
        match self {
            ReviewSource::Collection(c) => c.path(),
            ReviewSource::Export(e) => e.path(),
        }
    }
}

/// Pick the source type from the file extension.
///
/// # Logic:
/// 1. `.jsonl` / `.ndjson` (any case): ExportSource
/// 2. Anything else: CollectionSource
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the file does not exist.
pub fn detect_review_source(path: impl Into<PathBuf>) -> Result<ReviewSource, LoadError> {
    let path = path.into();
    let is_export = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            EXPORT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });

    if is_export {
        Ok(ReviewSource::Export(ExportSource::new(path)?))
    } else {
        Ok(ReviewSource::Collection(CollectionSource::new(path)?))
    }
}
