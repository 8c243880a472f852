//! Core types for etsi-deliverables

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published ETSI document, normalized from a search record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    /// Document identifier, e.g. "ES 201 873-1"
    pub doc_id: String,

    /// Short human-readable title
    pub title: String,

    /// Publication month, `None` when the descriptor carried no parsable date
    pub published_at: Option<DateTime<Utc>>,

    /// Work item id (0 when the server value did not parse)
    #[serde(rename = "wki_id")]
    pub work_item_id: i64,

    /// Absolute download URLs, PDF before archive
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl Deliverable {
    /// Whether `other` supersedes this deliverable
    ///
    /// Only a strictly later publication date supersedes. An unknown date never
    /// supersedes anything and is superseded by any known date.
    pub fn is_superseded_by(&self, other: &Deliverable) -> bool {
        other.published_at > self.published_at
    }
}

/// Entry of the emitted listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Document identifier
    pub doc_id: String,

    /// Reserved; never filled in yet
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub year: String,

    /// Work item id
    pub wki_id: i64,

    /// Short title
    pub title: String,

    /// Download URLs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl From<Deliverable> for Item {
    fn from(d: Deliverable) -> Self {
        Self {
            doc_id: d.doc_id,
            year: String::new(),
            wki_id: d.work_item_id,
            title: d.title,
            files: d.files,
        }
    }
}
