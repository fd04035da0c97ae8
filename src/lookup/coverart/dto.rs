//! Cover Art Archive API Data Transfer Objects
//!
//! The Cover Art Archive (https://coverartarchive.org) provides album artwork
//! for MusicBrainz releases. It's a free service with no API key required.
//!
//! API Reference: https://wiki.musicbrainz.org/Cover_Art_Archive/API

use serde::{Deserialize, Serialize};

/// Cover art listing for a release (or a release group's chosen release)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoverArtResponse {
    /// Array of images for this release
    #[serde(default)]
    pub images: Vec<Image>,
    /// URL of the release on MusicBrainz
    pub release: Option<String>,
}

/// A single cover art image
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    /// Whether this is the front cover
    #[serde(default)]
    pub front: bool,
    /// Whether this is the back cover
    #[serde(default)]
    pub back: bool,
    /// Image types (Front, Back, Booklet, etc.)
    #[serde(default)]
    pub types: Vec<String>,
    /// URL to full-size image
    pub image: String,
    /// Thumbnail URLs
    #[serde(default)]
    pub thumbnails: Thumbnails,
    /// Whether this is approved
    #[serde(default)]
    pub approved: bool,
    /// Edit ID on MusicBrainz
    pub edit: Option<i64>,
    /// Comment about the image
    pub comment: Option<String>,
}

/// Available thumbnail sizes
///
/// The API sends both numeric keys and the legacy `small`/`large` aliases,
/// so each is its own field.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Thumbnails {
    /// 250px thumbnail
    #[serde(rename = "250")]
    pub px250: Option<String>,
    /// 500px thumbnail
    #[serde(rename = "500")]
    pub px500: Option<String>,
    /// 1200px thumbnail (if available)
    #[serde(rename = "1200")]
    pub px1200: Option<String>,
    /// Legacy alias of the 250px thumbnail
    pub small: Option<String>,
    /// Legacy alias of the 500px thumbnail
    pub large: Option<String>,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_cover_art_response() {
        let json = r#"{
            "images": [{
                "approved": true,
                "back": false,
                "comment": "",
                "edit": 17460234,
                "front": true,
                "id": 829521842,
                "image": "http://coverartarchive.org/release/abc/829521842.jpg",
                "thumbnails": {
                    "250": "http://coverartarchive.org/release/abc/829521842-250.jpg",
                    "500": "http://coverartarchive.org/release/abc/829521842-500.jpg",
                    "1200": "http://coverartarchive.org/release/abc/829521842-1200.jpg",
                    "large": "http://coverartarchive.org/release/abc/829521842-500.jpg",
                    "small": "http://coverartarchive.org/release/abc/829521842-250.jpg"
                },
                "types": ["Front"]
            }],
            "release": "https://musicbrainz.org/release/abc"
        }"#;

        let response: CoverArtResponse =
            serde_json::from_str(json).expect("Should parse cover art response");

        assert_eq!(response.images.len(), 1);
        let image = &response.images[0];
        assert!(image.front);
        assert!(!image.back);
        assert_eq!(image.types, vec!["Front"]);
        assert_eq!(image.edit, Some(17460234));
        assert_eq!(image.thumbnails.large, image.thumbnails.px500);
        assert!(image.thumbnails.px1200.is_some());
    }

    #[test]
    fn test_parse_minimal_response() {
        let json = r#"{
            "images": [],
            "release": "https://musicbrainz.org/release/xyz"
        }"#;

        let response: CoverArtResponse =
            serde_json::from_str(json).expect("Should parse empty response");

        assert!(response.images.is_empty());
    }

    #[test]
    fn test_parse_image_without_thumbnails() {
        let json = r#"{
            "images": [{"front": false, "types": ["Back"], "image": "http://example.com/back.jpg"}]
        }"#;

        let response: CoverArtResponse =
            serde_json::from_str(json).expect("Should parse image without thumbnails");

        let image = &response.images[0];
        assert!(!image.front);
        assert!(image.thumbnails.large.is_none());
        assert!(response.release.is_none());
    }
}
