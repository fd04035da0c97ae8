//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.

use std::time::Duration;

use super::{adapter, dto, query};
use crate::config::MusicBrainzConfig;
use crate::lookup::domain::{CandidateRelease, LookupError, ReleaseGroupQuery};

/// Default MusicBrainz web service root
pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent string - MusicBrainz requires this
fn user_agent(contact: &str) -> String {
    format!("vinyls/{} ( {} )", env!("CARGO_PKG_VERSION"), contact)
}

impl MusicBrainzClient {
    /// Create a new client
    pub fn new(config: &MusicBrainzConfig, timeout: Duration) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent(&config.contact))
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search release groups and return candidates in relevance order
    pub async fn search_release_groups(
        &self,
        query: &ReleaseGroupQuery,
        limit: u32,
    ) -> Result<Vec<CandidateRelease>, LookupError> {
        let response = self.send_search_request(query, limit).await?;
        tracing::debug!(
            total = response.count,
            returned = response.release_groups.len(),
            "MusicBrainz release-group search"
        );
        Ok(adapter::to_candidates(response))
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(
        &self,
        query: &ReleaseGroupQuery,
        limit: u32,
    ) -> Result<dto::ReleaseGroupSearchResponse, LookupError> {
        let url = format!("{}/release-group", self.base_url);
        let lucene = query::to_lucene(query);
        let limit = limit.to_string();
        tracing::info!("Searching MusicBrainz: {}", lucene);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("query", lucene.as_str()),
                ("limit", limit.as_str()),
                ("fmt", "json"),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        {
            return Err(LookupError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(LookupError::ApiError(error.error));
            }
            return Err(LookupError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::ReleaseGroupSearchResponse>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}
