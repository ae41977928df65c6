//! Note field decoding.
//!
//! Anki stores all fields of a note in one string separated by the unit
//! separator (0x1F). The vocabulary deck this tool targets uses fixed
//! positions for the parts we display.

/// Field separator used by Anki.
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// Position of the kanji form.
pub const KANJI_INDEX: usize = 2;
/// Position of the hiragana reading.
pub const READING_INDEX: usize = 3;
/// Position of the English translation.
pub const TRANSLATION_INDEX: usize = 4;
/// Position of the combined kanji + reading form.
pub const COMBINED_INDEX: usize = 7;

/// Highest field position the renderer reads.
///
/// Any inclusion threshold must keep rows with more fields than this.
pub const MAX_DISPLAY_INDEX: usize = COMBINED_INDEX;

/// Decoded note fields, borrowing from the blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList<'a> {
    parts: Vec<&'a str>,
}

impl<'a> FieldList<'a> {
    /// Split a blob on the field separator.
    ///
    /// An empty blob decodes to a single empty field, matching how a plain
    /// string split behaves.
    pub fn decode(blob: &'a str) -> Self {
        Self {
            parts: blob.split(FIELD_SEPARATOR).collect(),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false: a decoded blob has at least one field.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Field at `index`, or `""` when the note is shorter.
    pub fn get(&self, index: usize) -> &'a str {
        self.parts.get(index).copied().unwrap_or("")
    }

    /// Kanji form.
    pub fn kanji(&self) -> &'a str {
        self.get(KANJI_INDEX)
    }

    /// Hiragana reading.
    pub fn reading(&self) -> &'a str {
        self.get(READING_INDEX)
    }

    /// English translation.
    pub fn translation(&self) -> &'a str {
        self.get(TRANSLATION_INDEX)
    }

    /// Combined kanji + reading form, used as the display label.
    pub fn combined(&self) -> &'a str {
        self.get(COMBINED_INDEX)
    }
}

/// Count fields without allocating.
pub fn field_count(blob: &str) -> usize {
    blob.matches(FIELD_SEPARATOR).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(parts: &[&str]) -> String {
        parts.join("\u{1f}")
    }

    #[test]
    fn decode_splits_on_unit_separator() {
        let raw = blob(&["0", "1", "日本", "にほん", "Japan", "5", "6", "日本[にほん]"]);
        let fields = FieldList::decode(&raw);
        assert_eq!(fields.len(), 8);
        assert_eq!(fields.kanji(), "日本");
        assert_eq!(fields.reading(), "にほん");
        assert_eq!(fields.translation(), "Japan");
        assert_eq!(fields.combined(), "日本[にほん]");
    }

    #[test]
    fn missing_positions_read_as_empty() {
        let fields = FieldList::decode("only");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(0), "only");
        assert_eq!(fields.translation(), "");
        assert_eq!(fields.combined(), "");
    }

    #[test]
    fn empty_blob_has_one_empty_field() {
        let fields = FieldList::decode("");
        assert_eq!(fields.len(), 1);
        assert!(!fields.is_empty());
    }

    #[test]
    fn trailing_separator_adds_empty_field() {
        assert_eq!(FieldList::decode("a\u{1f}").len(), 2);
    }

    #[test]
    fn field_count_matches_decode() {
        let long = blob(&["x"; 25]);
        for raw in ["", "a", "a\u{1f}b", "\u{1f}\u{1f}", long.as_str()] {
            assert_eq!(field_count(raw), FieldList::decode(raw).len(), "blob {raw:?}");
        }
    }
}
