//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! We only use the /release-group search endpoint.

use serde::{Deserialize, Serialize};

/// Release group search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseGroupSearchResponse {
    /// Timestamp of the search
    pub created: Option<String>,
    /// Total number of hits (may exceed the returned page)
    #[serde(default)]
    pub count: u32,
    /// Offset of this page
    #[serde(default)]
    pub offset: u32,
    /// Matching release groups, best first
    #[serde(rename = "release-groups", default)]
    pub release_groups: Vec<ReleaseGroup>,
}

/// Release group (e.g., "Abbey Road" across all editions)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    /// MusicBrainz release group ID
    pub id: String,
    /// Search relevance (0-100)
    pub score: Option<u32>,
    /// Title
    pub title: Option<String>,
    /// Primary type (Album, Single, EP, etc.)
    pub primary_type: Option<String>,
    /// Secondary types (Live, Compilation, etc.)
    #[serde(default)]
    pub secondary_types: Vec<String>,
    /// First release date
    pub first_release_date: Option<String>,
    /// Artist credits
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
}

/// Artist credit (can be multiple for collaborations)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistCredit {
    /// The artist
    pub artist: Option<Artist>,
    /// How this artist is credited (may differ from official name)
    pub name: Option<String>,
    /// Join phrase (e.g., " & ", " feat. ")
    pub joinphrase: Option<String>,
}

/// Artist info
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// MusicBrainz artist ID
    pub id: String,
    /// Official artist name
    pub name: String,
    /// Sort name (e.g., "Beatles, The")
    pub sort_name: Option<String>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_release_group_search() {
        let json = r#"{
            "created": "2024-05-01T10:00:00.000Z",
            "count": 1,
            "offset": 0,
            "release-groups": [{
                "id": "8d9f3ab4-d5a8-3a2c-9b4e-4b5fd8d0cc1c",
                "type-id": "f529b476-6e62-324f-b0aa-1f3e33d313fc",
                "score": 100,
                "primary-type-id": "f529b476-6e62-324f-b0aa-1f3e33d313fc",
                "count": 21,
                "title": "A Night at the Opera",
                "first-release-date": "1975-11-21",
                "primary-type": "Album",
                "artist-credit": [{
                    "name": "Queen",
                    "artist": {
                        "id": "0383dadf-2a4e-4d10-a46a-e9e041da8eb3",
                        "name": "Queen",
                        "sort-name": "Queen"
                    }
                }],
                "releases": [{"id": "r-1", "status-id": "x", "title": "A Night at the Opera", "status": "Official"}],
                "tags": [{"count": 3, "name": "rock"}]
            }]
        }"#;

        let response: ReleaseGroupSearchResponse =
            serde_json::from_str(json).expect("Should parse search response");

        assert_eq!(response.count, 1);
        assert_eq!(response.release_groups.len(), 1);

        let group = &response.release_groups[0];
        assert_eq!(group.title.as_deref(), Some("A Night at the Opera"));
        assert_eq!(group.primary_type.as_deref(), Some("Album"));
        assert_eq!(group.first_release_date.as_deref(), Some("1975-11-21"));
        assert_eq!(group.score, Some(100));

        let credit = &group.artist_credit[0];
        assert_eq!(credit.name.as_deref(), Some("Queen"));
        assert_eq!(credit.artist.as_ref().unwrap().sort_name.as_deref(), Some("Queen"));
    }

    #[test]
    fn test_parse_empty_search() {
        let json = r#"{"created": "2024-05-01T10:00:00.000Z", "count": 0, "offset": 0, "release-groups": []}"#;
        let response: ReleaseGroupSearchResponse =
            serde_json::from_str(json).expect("Should parse empty search");
        assert!(response.release_groups.is_empty());
    }

    #[test]
    fn test_parse_minimal_release_group() {
        let json = r#"{"release-groups": [{"id": "rg-1"}]}"#;
        let response: ReleaseGroupSearchResponse =
            serde_json::from_str(json).expect("Should parse minimal release group");

        let group = &response.release_groups[0];
        assert_eq!(group.id, "rg-1");
        assert!(group.title.is_none());
        assert!(group.artist_credit.is_empty());
        assert!(group.secondary_types.is_empty());
    }

    #[test]
    fn test_parse_collaboration() {
        let json = r#"{
            "id": "rg-collab",
            "title": "Hot Space",
            "artist-credit": [
                {"name": "Queen", "joinphrase": " & ", "artist": {"id": "q", "name": "Queen"}},
                {"name": "David Bowie", "artist": {"id": "b", "name": "David Bowie"}}
            ]
        }"#;

        let group: ReleaseGroup = serde_json::from_str(json).expect("Should parse collaboration");
        assert_eq!(group.artist_credit.len(), 2);
        assert_eq!(group.artist_credit[0].joinphrase.as_deref(), Some(" & "));
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{
            "error": "Invalid query",
            "help": "For usage, please see: https://musicbrainz.org/development/mmd"
        }"#;

        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error, "Invalid query");
        assert!(error.help.is_some());
    }
}
