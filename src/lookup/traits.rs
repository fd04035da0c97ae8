//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use vinyls::lookup::traits::CatalogClient;
//!
//! // In production code:
//! async fn count<T: CatalogClient>(client: &T, query: &ReleaseGroupQuery) -> usize {
//!     client.search(query, 100).await.map(|c| c.len()).unwrap_or(0)
//! }
//!
//! // In tests:
//! struct MockCatalog { ... }
//! impl CatalogClient for MockCatalog { ... }
//! ```

use std::path::Path;

use async_trait::async_trait;

use super::domain::{CandidateRelease, LookupError, ReleaseGroupQuery};

/// Resolves artist/album queries to candidate release groups.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search for up to `limit` release groups matching `query`.
    async fn search(
        &self,
        query: &ReleaseGroupQuery,
        limit: u32,
    ) -> Result<Vec<CandidateRelease>, LookupError>;
}

/// Resolves and downloads cover artwork for a release group.
#[async_trait]
pub trait ArtworkResolver: Send + Sync {
    /// Front cover URL, or `None` when there is none or the lookup failed.
    async fn resolve_cover_url(&self, release_group_id: &str) -> Option<String>;

    /// Stream the image at `url` to `dest`.
    async fn download(&self, url: &str, dest: &Path) -> Result<(), LookupError>;
}

// Implement traits for real clients

#[async_trait]
impl CatalogClient for super::musicbrainz::MusicBrainzClient {
    async fn search(
        &self,
        query: &ReleaseGroupQuery,
        limit: u32,
    ) -> Result<Vec<CandidateRelease>, LookupError> {
        self.search_release_groups(query, limit).await
    }
}

#[async_trait]
impl ArtworkResolver for super::coverart::CoverArtClient {
    async fn resolve_cover_url(&self, release_group_id: &str) -> Option<String> {
        match self.front_cover_url(release_group_id).await {
            Ok(url) => {
                if url.is_none() {
                    tracing::info!("No front cover for release group {}", release_group_id);
                }
                url
            }
            Err(e) => {
                tracing::warn!("Cover art lookup for {} failed: {}", release_group_id, e);
                None
            }
        }
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<(), LookupError> {
        self.download(url, dest).await
    }
}
