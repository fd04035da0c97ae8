//! Internal domain models for catalog lookups.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

use crate::collection::UNKNOWN;

/// Placeholder shown for candidates without an artist credit
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Release-group search restricted to primary type "album".
///
/// Each present term becomes an exact-phrase clause; clauses are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseGroupQuery {
    pub artist: Option<String>,
    pub album: Option<String>,
}

impl ReleaseGroupQuery {
    /// Build a query from raw user input. Blank terms count as absent.
    pub fn new(artist: Option<&str>, album: Option<&str>) -> Self {
        fn clean(term: Option<&str>) -> Option<String> {
            term.map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        }

        Self {
            artist: clean(artist),
            album: clean(album),
        }
    }

    /// True when neither an artist nor an album term was given.
    pub fn is_empty(&self) -> bool {
        self.artist.is_none() && self.album.is_none()
    }
}

/// A release group returned by a catalog search, pending disambiguation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRelease {
    /// MusicBrainz release group ID
    pub id: String,
    pub title: Option<String>,
    /// First credited artist
    pub artist_name: Option<String>,
    /// First release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub first_release_date: Option<String>,
}

impl CandidateRelease {
    /// Label for the selection prompt: `"<title> - <artist>"`.
    pub fn display_name(&self) -> String {
        format!(
            "{} - {}",
            self.title.as_deref().unwrap_or(UNKNOWN),
            self.artist_name.as_deref().unwrap_or(UNKNOWN_ARTIST)
        )
    }
}

/// Errors from the catalog and artwork services
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

impl LookupError {
    pub fn write(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::Write {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_trims_and_drops_blank_terms() {
        let query = ReleaseGroupQuery::new(Some("  Queen "), Some("   "));
        assert_eq!(query.artist.as_deref(), Some("Queen"));
        assert_eq!(query.album, None);
        assert!(!query.is_empty());
    }

    #[test]
    fn test_query_without_terms_is_empty() {
        assert!(ReleaseGroupQuery::new(None, None).is_empty());
        assert!(ReleaseGroupQuery::new(Some(""), Some(" ")).is_empty());
    }

    #[test]
    fn test_display_name() {
        let candidate = CandidateRelease {
            id: "rg-1".to_string(),
            title: Some("A Night at the Opera".to_string()),
            artist_name: Some("Queen".to_string()),
            first_release_date: None,
        };
        assert_eq!(candidate.display_name(), "A Night at the Opera - Queen");
    }

    #[test]
    fn test_display_name_placeholders() {
        let candidate = CandidateRelease {
            id: "rg-2".to_string(),
            ..Default::default()
        };
        assert_eq!(candidate.display_name(), "Unknown - Unknown Artist");
    }
}
