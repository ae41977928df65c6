//! Anki collection (SQLite) review source.

use crate::model::error::LoadError;
use crate::model::RawReview;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reviews joined with their card and note, oldest first.
///
/// `revlog.id` is the review timestamp in milliseconds, so ordering by it
/// is chronological.
const REVIEW_QUERY: &str = "SELECT notes.flds, cards.ivl, revlog.ease, cards.reps, cards.nid, revlog.id
     FROM revlog
     JOIN cards ON revlog.cid = cards.id
     JOIN notes ON cards.nid = notes.id
     ORDER BY revlog.id";

/// Read-only handle on a `collection.anki2` file.
#[derive(Debug, Clone)]
pub struct CollectionSource {
    path: PathBuf,
}

impl CollectionSource {
    /// Create a source for the given collection path.
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

    /// Path of the collection.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the review query and return every row in revlog order.
    ///
    /// The database is opened read-only so a collection that Anki also has
    /// open is never modified.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Sqlite` if the file cannot be opened as SQLite or
    /// the query fails.
    pub fn load(&self) -> Result<Vec<RawReview>, LoadError> {
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let rows = query_reviews(&conn)?;
        debug!(path = %self.path.display(), rows = rows.len(), "Collection rows read");
        Ok(rows)
    }
}

/// Run the review query on an open connection.
pub(crate) fn query_reviews(conn: &Connection) -> Result<Vec<RawReview>, LoadError> {
    let mut stmt = conn.prepare(REVIEW_QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok(RawReview {
            fields: row.get(0)?,
            interval: row.get(1)?,
            ease: row.get(2)?,
            reps: row.get(3)?,
            note_id: row.get(4)?,
            review_id: row.get(5)?,
        })
    })?;

    let mut reviews = Vec::new();
    for row in rows {
        reviews.push(row?);
    }
    Ok(reviews)
}


#[cfg(test)]
mod tests {
    use super::fixtures::write_collection;
    use super::*;

    #[test]
    fn new_returns_not_found_for_missing_file() {
        let missing = std::env::temp_dir().join("ankiviz_missing_collection_12345.anki2");
        let result = CollectionSource::new(&missing);
        assert!(matches!(result, Err(LoadError::NotFound { path }) if path == missing));
    }

    #[test]
    fn load_returns_rows_in_revlog_order() {
        let path = std::env::temp_dir().join("ankiviz_test_collection_order.anki2");
        // Inserted out of order; the query must sort by revlog id.
        write_collection(&path, &[("b", 300), ("a", 100), ("b", 200)]);

        let rows = CollectionSource::new(&path).unwrap().load().unwrap();
        let _ = std::fs::remove_file(&path);

        let seen: Vec<(&str, i64)> = rows
            .iter()
            .map(|r| (r.fields.as_str(), r.review_id))
            .collect();
        assert_eq!(seen, vec![("a", 100), ("b", 200), ("b", 300)]);
        assert!(rows.iter().all(|r| r.interval == 3 && r.ease == 3 && r.reps == 1));
    }

    #[test]
    fn load_reports_sqlite_error_for_non_database() {
        let path = std::env::temp_dir().join("ankiviz_test_not_a_db.anki2");
        std::fs::write(&path, "definitely not sqlite, just some text padding it out").unwrap();

        let result = CollectionSource::new(&path).unwrap().load();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(LoadError::Sqlite(_))), "got {result:?}");
    }

    #[test]
    fn query_reviews_on_empty_schema_returns_no_rows() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(super::fixtures::SCHEMA).unwrap();
        assert!(query_reviews(&conn).unwrap().is_empty());
    }
}
