//! Bulletin records as extracted from a provider payload, and the lines a report is
//! made of.

use std::fmt;

/// Safety ceiling, in characters, on the length of a single extracted record.
///
/// Neither TAFs nor METARs have a published length limit, and producers do not all
/// follow the 69-character line convention, so anything longer is cut to this size.
pub const MAX_RECORD_CHARS: usize = 1024;

/// One raw TAF or METAR, exactly as extracted (minus the enclosing markers).
///
/// The extracted text never exceeds [`MAX_RECORD_CHARS`] characters. A reflowed TAF is
/// longer only by the line breaks inserted after the cut. Records are never modified
/// after extraction. Ordering is lexicographic on the raw text, which groups records by their
/// leading station code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BulletinRecord(String);

impl BulletinRecord {
    /// Wraps `text`, cutting it to [`MAX_RECORD_CHARS`] characters if necessary.
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if let Some((cut, _)) = text.char_indices().nth(MAX_RECORD_CHARS) {
            text.truncate(cut);
        }
        Self(text)
    }

    /// Rewrites the layout of an already cut record. The ceiling is not applied again.
    pub(crate) fn relayout(self, rewrite: impl FnOnce(&str) -> String) -> Self {
        Self(rewrite(&self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for BulletinRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BulletinRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single line of report output. An empty line separates station groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportLine(String);

impl ReportLine {
    pub fn blank() -> Self {
        Self(String::new())
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&BulletinRecord> for ReportLine {
    fn from(record: &BulletinRecord) -> Self {
        Self(record.as_str().to_string())
    }
}

impl From<String> for ReportLine {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
