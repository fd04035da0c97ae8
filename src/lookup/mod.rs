//! External metadata lookups: catalog search and cover art.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types the workflow works with
//! - **API DTOs** (`musicbrainz/dto.rs`, `coverart/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Traits** (`traits.rs`) - The seams the workflow depends on
//!
//! The workflow only sees [`CatalogClient`] and [`ArtworkResolver`], so tests
//! substitute mocks and the real clients never leak DTOs.
//!
//! # Usage
//!
//! ```ignore
//! use vinyls::lookup::{CatalogClient, MusicBrainzClient, ReleaseGroupQuery};
//!
//! let client = MusicBrainzClient::new(&config.musicbrainz, config.http.timeout())?;
//! let query = ReleaseGroupQuery::new(Some("Queen"), Some("Jazz"));
//! let candidates = client.search(&query, 100).await?;
//! ```

pub mod coverart;
pub mod domain;
pub mod musicbrainz;
pub mod traits;

pub use coverart::{CoverArtClient, CoverSize};
pub use domain::{CandidateRelease, LookupError, ReleaseGroupQuery};
pub use musicbrainz::MusicBrainzClient;
pub use traits::{ArtworkResolver, CatalogClient};
