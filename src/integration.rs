//! Pure core integration functions.
//!
//! This module turns raw review rows into the positioned event sequence the
//! replay engine consumes. The filtering step is pure and testable without
//! I/O; [`load_events`] is the thin impure wrapper around a source.

use crate::model::error::LoadError;
use crate::model::fields::field_count;
use crate::model::{RawReview, ReviewEvent};
use crate::source::ReviewSource;
use tracing::{info, warn};

/// Result of filtering raw rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEvents {
    /// Kept rows, positioned densely from 0 in load order.
    pub events: Vec<ReviewEvent>,
    /// Number of rows dropped for having too few fields.
    pub dropped: usize,
}

/// Keep rows whose notes have at least `min_field_count` fields.
///
/// Rows from other note types (shorter field lists) belong to unrelated
/// decks and are dropped. Positions are assigned over the kept rows only, so
/// they are contiguous.
pub fn build_events(rows: Vec<RawReview>, min_field_count: usize) -> FilteredEvents {
    let mut events = Vec::with_capacity(rows.len());
    let mut dropped = 0;

    for row in rows {
        if field_count(&row.fields) < min_field_count {
            dropped += 1;
            continue;
        }
        let position = events.len();
        events.push(ReviewEvent::from_raw(row, position));
    }

    FilteredEvents { events, dropped }
}

/// Load and filter the full event sequence from a source.
///
/// # Errors
///
/// Propagates source errors, and returns `LoadError::Empty` when no row
/// survives filtering.
pub fn load_events(
    source: &ReviewSource,
    min_field_count: usize,
) -> Result<Vec<ReviewEvent>, LoadError> {
    let rows = source.load()?;
    let total = rows.len();
    let FilteredEvents { events, dropped } = build_events(rows, min_field_count);

    if dropped > 0 {
        warn!(
            dropped,
            min_field_count, "Skipped reviews of notes with too few fields"
        );
    }

    if events.is_empty() {
        return Err(LoadError::Empty {
            path: source.path().to_path_buf(),
            min_field_count,
        });
    }

    info!(
        path = %source.path().display(),
        total,
        kept = events.len(),
        "Review log loaded"
    );
    Ok(events)
}
