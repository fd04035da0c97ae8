//! Personal record collection: owned records plus a wishlist.
//!
//! The collection lives in a single pretty-printed JSON document that the
//! web front end reads directly, so the field names here are part of that
//! contract (`publishedAt`, `releaseID`, `lastUsedID`).

mod store;

pub use store::{CollectionStore, DEFAULT_COLLECTION_PATH};

use serde::{Deserialize, Serialize};

/// Placeholder used whenever the catalog leaves a field empty.
pub const UNKNOWN: &str = "Unknown";

/// One album entry in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub artist: String,
    pub title: String,
    /// ISO date (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`) or `"Unknown"`
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    /// MusicBrainz release group ID
    #[serde(rename = "releaseID", default, skip_serializing_if = "Option::is_none")]
    pub release_id: Option<String>,
    pub id: i64,
}

impl Record {
    /// Release year: everything before the first `-` of the date.
    pub fn year(&self) -> &str {
        year_of(&self.published_at)
    }
}

/// Extract the year part of a MusicBrainz date string.
pub fn year_of(date: &str) -> &str {
    date.split('-').next().unwrap_or(date)
}

/// Which list of the collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shelf {
    /// Records the user owns
    #[default]
    Records,
    /// Records the user wants
    Wishlist,
}

impl Shelf {
    pub fn from_wishlist_flag(to_wishlist: bool) -> Self {
        if to_wishlist {
            Shelf::Wishlist
        } else {
            Shelf::Records
        }
    }
}

impl std::fmt::Display for Shelf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shelf::Records => write!(f, "records"),
            Shelf::Wishlist => write!(f, "wishlist"),
        }
    }
}

/// Collection bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Highest id ever assigned, -1 for a fresh collection
    #[serde(rename = "lastUsedID")]
    pub last_used_id: i64,
}

impl Default for Metadata {
    fn default() -> Self {
        Self { last_used_id: -1 }
    }
}

/// The whole collection document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub records: Vec<Record>,
    pub wishlist: Vec<Record>,
    pub metadata: Metadata,
}

impl Collection {
    /// All records on one shelf, in insertion order.
    pub fn shelf(&self, shelf: Shelf) -> &[Record] {
        match shelf {
            Shelf::Records => &self.records,
            Shelf::Wishlist => &self.wishlist,
        }
    }

    /// Append a record to a shelf and advance `lastUsedID` past its id.
    pub fn push(&mut self, record: Record, shelf: Shelf) {
        self.metadata.last_used_id = self.metadata.last_used_id.max(record.id);
        match shelf {
            Shelf::Records => self.records.push(record),
            Shelf::Wishlist => self.wishlist.push(record),
        }
    }

    /// Highest id present in either list.
    pub fn max_id(&self) -> Option<i64> {
        self.records
            .iter()
            .chain(self.wishlist.iter())
            .map(|r| r.id)
            .max()
    }

    /// Total number of records across both lists.
    pub fn len(&self) -> usize {
        self.records.len() + self.wishlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
