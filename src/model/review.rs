//! Review log records.
//!
//! A [`RawReview`] is one row as it comes out of the event store. A
//! [`ReviewEvent`] is a row that survived filtering and received its position
//! in the replay sequence.

use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Identity of a vocabulary item: the raw, undecoded field blob.
///
/// Two reviews belong to the same item iff their blobs are byte-identical.
/// Backed by `Arc<str>` so the event list, the review index and the view
/// state can all hold the same key without copying the blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReviewKey(Arc<str>);

impl ReviewKey {
    /// Wrap a raw field blob.
    pub fn new(blob: impl Into<Arc<str>>) -> Self {
        Self(blob.into())
    }

    /// The raw blob.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReviewKey {
    fn from(blob: &str) -> Self {
        Self::new(blob)
    }
}

/// One row returned by the event store, before filtering.
///
/// Field names follow the Anki schema so the JSONL export can be
/// deserialized directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawReview {
    /// Note fields joined by the 0x1F separator.
    #[serde(rename = "flds")]
    pub fields: String,
    /// Card interval reported by the scheduler.
    #[serde(rename = "ivl")]
    pub interval: i64,
    /// Answer button pressed for this review.
    pub ease: i64,
    /// Total repetitions of the card.
    pub reps: i64,
    /// Note identifier.
    #[serde(rename = "nid")]
    pub note_id: i64,
    /// Revlog identifier: review time in epoch milliseconds.
    #[serde(rename = "id")]
    pub review_id: i64,
}

/// One historical review, positioned in the replay sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEvent {
    /// Item identity.
    pub key: ReviewKey,
    /// Scheduler interval at the time of the review.
    pub interval: i64,
    /// Answer button pressed.
    pub ease: i64,
    /// Total repetitions of the card.
    pub reps: i64,
    /// Note identifier.
    pub note_id: i64,
    /// Review timestamp, epoch milliseconds.
    pub reviewed_at_ms: i64,
    /// 0-based index in load order.
    pub position: usize,
}

impl ReviewEvent {
    /// Build an event from a raw row at the given sequence position.
    pub fn from_raw(raw: RawReview, position: usize) -> Self {
        Self {
            key: ReviewKey::new(raw.fields),
            interval: raw.interval,
            ease: raw.ease,
            reps: raw.reps,
            note_id: raw.note_id,
            reviewed_at_ms: raw.review_id,
            position,
        }
    }

    /// Review time as a UTC datetime, if the millisecond value is in range.
    pub fn reviewed_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.reviewed_at_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fields: &str, id: i64) -> RawReview {
        RawReview {
            fields: fields.to_string(),
            interval: 4,
            ease: 3,
            reps: 2,
            note_id: 99,
            review_id: id,
        }
    }

    #[test]
    fn keys_with_identical_blobs_are_equal() {
        assert_eq!(ReviewKey::from("a\u{1f}b"), ReviewKey::new("a\u{1f}b".to_string()));
    }

    #[test]
    fn keys_differing_by_one_byte_are_distinct() {
        assert_ne!(ReviewKey::from("a\u{1f}b"), ReviewKey::from("a\u{1f}b "));
    }

    #[test]
    fn from_raw_keeps_all_columns() {
        let event = ReviewEvent::from_raw(raw("x", 1_400_000_000_000), 7);
        assert_eq!(event.key.as_str(), "x");
        assert_eq!(event.interval, 4);
        assert_eq!(event.ease, 3);
        assert_eq!(event.reps, 2);
        assert_eq!(event.note_id, 99);
        assert_eq!(event.reviewed_at_ms, 1_400_000_000_000);
        assert_eq!(event.position, 7);
    }

    #[test]
    fn reviewed_at_converts_epoch_millis() {
        let event = ReviewEvent::from_raw(raw("x", 1_400_000_000_000), 0);
        let at = event.reviewed_at().expect("in range");
        assert_eq!(at.format("%Y-%m-%d").to_string(), "2014-05-13");
    }

    #[test]
    fn raw_review_deserializes_anki_column_names() {
        let json = r#"{"flds":"a","ivl":10,"ease":2,"reps":5,"nid":1,"id":2}"#;
        let row: RawReview = serde_json::from_str(json).unwrap();
        assert_eq!(row, RawReview {
            fields: "a".to_string(),
            interval: 10,
            ease: 2,
            reps: 5,
            note_id: 1,
            review_id: 2,
        });
    }
}
