//! Error types for the ankiviz application.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`LoadError`] - Review store failures (missing file, SQLite, malformed export, no rows)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file and value failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Every error here is a setup error and therefore **fatal**: it is reported to
//! the user and the process exits without retrying. Once the review log is
//! loaded the replay is an in-memory computation over validated data and has no
//! runtime error path.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain error types convert into `AppError` via `From`, so `main` can
/// use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the review log.
    ///
    /// **Recovery**: none. The message names the path and cause.
    #[error("Failed to load review log: {0}")]
    Load(#[from] LoadError),

    /// Configuration file or value is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer, such as a broken pipe while
    /// drawing. Without a working terminal the replay cannot be shown.
    #[error("Terminal error: {0}")]
    Terminal(#[from] crate::view::TuiError),
}

/// Errors encountered when reading review rows from the event store.
///
/// # Recovery Patterns
///
/// - **NotFound**: display the path, exit non-zero
/// - **Sqlite**: the file is not an Anki collection, or the query failed
/// - **InvalidRow**: an export line is not a review object
/// - **Empty**: nothing to replay after filtering
#[derive(Debug, Error)]
pub enum LoadError {
    /// The collection or export file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use ankiviz::model::error::LoadError;
    ///
    /// let err = LoadError::NotFound {
    ///     path: PathBuf::from("/tmp/collection.anki2"),
    /// };
    /// assert!(err.to_string().contains("/tmp/collection.anki2"));
    /// ```
    #[error("Review log not found: {path}")]
    NotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// SQLite failed to open the collection or run the review query.
    ///
    /// Typical causes: the file is not a SQLite database, it is locked by a
    /// running Anki instance, or its schema lacks `revlog`/`cards`/`notes`.
    #[error("Collection query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Generic I/O error reading an export file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of a JSONL export could not be parsed as a review row.
    ///
    /// # Examples
    ///
    /// ```
    /// use ankiviz::model::error::LoadError;
    ///
    /// let err = LoadError::InvalidRow {
    ///     line: 3,
    ///     message: "missing field `ivl`".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    #[error("Invalid review row at line {line}: {message}")]
    InvalidRow {
        /// 1-based line number in the export file.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// No rows left to replay after applying the field-count filter.
    ///
    /// Either the collection has no reviews at all, or none of its notes
    /// have enough fields to belong to the vocabulary deck.
    #[error("No reviews to replay in {path} (notes need at least {min_field_count} fields)")]
    Empty {
        /// Source that was read.
        path: PathBuf,
        /// Threshold that was applied.
        min_field_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_display() {
        let err = LoadError::NotFound {
            path: PathBuf::from("/tmp/missing.anki2"),
        };
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("/tmp/missing.anki2"));
    }

    #[test]
    fn invalid_row_display() {
        let err = LoadError::InvalidRow {
            line: 42,
            message: "expected value".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 42"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn empty_display_mentions_threshold() {
        let err = LoadError::Empty {
            path: PathBuf::from("c.anki2"),
            min_field_count: 25,
        };
        let msg = err.to_string();
        assert!(msg.contains("No reviews"));
        assert!(msg.contains("25"));
    }

    #[test]
    fn load_error_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let load_err: LoadError = io_err.into();
        assert!(load_err.to_string().contains("access denied"));
    }

    #[test]
    fn app_error_from_load_error() {
        let app_err: AppError = LoadError::NotFound {
            path: PathBuf::from("x"),
        }
        .into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to load review log"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = crate::view::TuiError::from(io_err).into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }
}
