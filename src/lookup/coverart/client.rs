//! Cover Art Archive HTTP client
//!
//! Finds the front cover of a MusicBrainz release group and streams it to disk.
//! No API key required, but please respect their rate limits.
//!
//! API: https://coverartarchive.org

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use super::dto;
use crate::config::CoverArtConfig;
use crate::lookup::domain::LookupError;

/// Default Cover Art Archive root
pub const DEFAULT_BASE_URL: &str = "https://coverartarchive.org";

/// Desired cover art size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverSize {
    /// 250px thumbnail
    Small,
    /// 500px thumbnail (default)
    #[default]
    Medium,
    /// 1200px thumbnail
    Large,
    /// Original full-size image
    Original,
}

/// Cover Art Archive client
pub struct CoverArtClient {
    http_client: reqwest::Client,
    base_url: String,
    size: CoverSize,
}

impl CoverArtClient {
    /// Create a new client
    pub fn new(config: &CoverArtConfig, timeout: Duration) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            size: config.size,
        })
    }

    /// URL of the front cover of a release group, if it has one
    pub async fn front_cover_url(
        &self,
        release_group_id: &str,
    ) -> Result<Option<String>, LookupError> {
        let listing = match self.list_cover_art(release_group_id).await {
            Ok(listing) => listing,
            Err(LookupError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        Ok(pick_front(&listing, self.size))
    }

    /// List all cover art for a release group
    pub async fn list_cover_art(
        &self,
        release_group_id: &str,
    ) -> Result<dto::CoverArtResponse, LookupError> {
        let url = format!(
            "{}/release-group/{}",
            self.base_url,
            urlencoding::encode(release_group_id)
        );

        // The release-group endpoint redirects to a representative release
        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }

        if !status.is_success() {
            return Err(LookupError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::CoverArtResponse>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }

    /// Stream an image to `dest`.
    ///
    /// Bytes go to a `.part` file that is renamed into place once complete;
    /// on failure the partial file is removed and `dest` is left untouched.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<(), LookupError> {
        if let Some(dir) = dest.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| LookupError::write(dir, e))?;
        }

        let part_path = part_path(dest);
        let result = self.download_to(url, &part_path).await;
        if result.is_err() {
            let _ = tokio::fs::remove_file(&part_path).await;
            return result;
        }

        tokio::fs::rename(&part_path, dest)
            .await
            .map_err(|e| LookupError::write(dest, e))
    }

    async fn download_to(&self, url: &str, path: &Path) -> Result<(), LookupError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }

        if !status.is_success() {
            return Err(LookupError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| LookupError::write(path, e))?;

        let mut written = 0usize;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| LookupError::Network(e.to_string()))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| LookupError::write(path, e))?;
            written += chunk.len();
        }
        file.flush().await.map_err(|e| LookupError::write(path, e))?;

        tracing::debug!("Downloaded {} bytes from {}", written, url);
        Ok(())
    }
}

/// Pick the front cover image URL for the requested size.
///
/// An image counts as the front cover when it is flagged `front` or typed
/// `Front`. Falls back to the full-size image when the thumbnail is missing.
pub fn pick_front(listing: &dto::CoverArtResponse, size: CoverSize) -> Option<String> {
    let image = listing
        .images
        .iter()
        .find(|img| img.front || img.types.iter().any(|t| t == "Front"))?;

    let thumbnails = &image.thumbnails;
    let thumbnail = match size {
        CoverSize::Small => thumbnails.small.clone().or_else(|| thumbnails.px250.clone()),
        CoverSize::Medium => thumbnails.large.clone().or_else(|| thumbnails.px500.clone()),
        CoverSize::Large => thumbnails.px1200.clone(),
        CoverSize::Original => None,
    };
    Some(thumbnail.unwrap_or_else(|| image.image.clone()))
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}
