//! Search-resolve-persist workflow.
//!
//! One run takes an artist and/or album query through these stages:
//!
//! 1. Validate the query terms
//! 2. Search the catalog for album release groups
//! 3. Let the user pick one candidate
//! 4. Resolve and download its front cover (optional, failures are logged)
//! 5. Append a record to the collection and save it
//! 6. Report a summary
//!
//! Every failure before step 5 leaves the collection document untouched.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;

use crate::collection::{CollectionStore, Record, Shelf, UNKNOWN, year_of};
use crate::lookup::{ArtworkResolver, CandidateRelease, CatalogClient, LookupError, ReleaseGroupQuery};

/// Maximum number of candidates requested from the catalog
pub const SEARCH_LIMIT: u32 = 100;

/// Directory cover images are stored in, relative to the project root
pub const DEFAULT_COVERS_DIR: &str = "public/covers";

/// Picks exactly one candidate, returning its id.
#[async_trait]
pub trait Chooser: Send + Sync {
    async fn choose_one(&self, candidates: &[CandidateRelease]) -> Result<String, SelectionError>;
}

/// Errors from the selection prompt
#[derive(Debug, Clone, thiserror::Error)]
pub enum SelectionError {
    #[error("Selection cancelled")]
    Cancelled,

    #[error("Failed to read selection: {0}")]
    Input(String),
}

/// Errors that abort a workflow run
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Please provide an artist or an album")]
    MissingQuery,

    #[error("No albums found")]
    NoResults,

    #[error("Catalog search failed: {0}")]
    Catalog(#[from] LookupError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Selected release group {0} is not among the candidates")]
    UnknownSelection(String),

    #[error("No record ids left: lastUsedID is already {}", i64::MAX)]
    IdsExhausted,

    #[error("Failed to save collection: {0}")]
    Persist(#[from] crate::error::Error),
}

impl WorkflowError {
    /// Errors the user caused or can shrug off; the CLI exits normally on these.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            WorkflowError::MissingQuery
                | WorkflowError::NoResults
                | WorkflowError::Selection(SelectionError::Cancelled)
        )
    }
}

/// What was added, for the caller to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    pub artist: String,
    pub album: String,
    /// Part of the release date before the first `-`
    pub year: String,
    /// Where the stored cover came from
    #[serde(rename = "coverURL", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub id: i64,
    pub shelf: Shelf,
}

/// Workflow progress, logged at each transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Validated,
    CandidatesFetched,
    Selected,
    ArtworkResolved,
    Persisted,
    Reported,
}

fn enter(stage: Stage) {
    tracing::debug!(?stage, "search workflow");
}

/// Orchestrates catalog search, selection, artwork and persistence.
///
/// Collaborators are passed in so tests can substitute mocks.
pub struct SearchWorkflow<'a> {
    catalog: &'a dyn CatalogClient,
    artwork: &'a dyn ArtworkResolver,
    chooser: &'a dyn Chooser,
    store: CollectionStore,
    covers_dir: PathBuf,
}

impl<'a> SearchWorkflow<'a> {
    pub fn new(
        catalog: &'a dyn CatalogClient,
        artwork: &'a dyn ArtworkResolver,
        chooser: &'a dyn Chooser,
        store: CollectionStore,
    ) -> Self {
        Self {
            catalog,
            artwork,
            chooser,
            store,
            covers_dir: PathBuf::from(DEFAULT_COVERS_DIR),
        }
    }

    /// Store cover images somewhere other than [`DEFAULT_COVERS_DIR`]
    pub fn with_covers_dir(mut self, covers_dir: impl Into<PathBuf>) -> Self {
        self.covers_dir = covers_dir.into();
        self
    }

    /// Search, let the user choose, and add the chosen album to the collection.
    pub async fn run(
        &self,
        artist_query: Option<&str>,
        album_query: Option<&str>,
        to_wishlist: bool,
    ) -> Result<SearchSummary, WorkflowError> {
        let query = ReleaseGroupQuery::new(artist_query, album_query);
        if query.is_empty() {
            return Err(WorkflowError::MissingQuery);
        }
        enter(Stage::Validated);

        let mut collection = self.store.load();

        let candidates = self.catalog.search(&query, SEARCH_LIMIT).await?;
        if candidates.is_empty() {
            tracing::info!("No release groups matched {:?}", query);
            return Err(WorkflowError::NoResults);
        }
        tracing::info!("{} candidate release groups", candidates.len());
        enter(Stage::CandidatesFetched);

        let selected_id = self.chooser.choose_one(&candidates).await?;
        let candidate = candidates
            .iter()
            .find(|c| c.id == selected_id)
            .ok_or(WorkflowError::UnknownSelection(selected_id))?;
        enter(Stage::Selected);

        let id = CollectionStore::next_id(&collection).ok_or(WorkflowError::IdsExhausted)?;
        let record = build_record(candidate, id);

        let cover_url = self.fetch_artwork(&candidate.id, id).await;
        if cover_url.is_some() {
            enter(Stage::ArtworkResolved);
        }

        let shelf = Shelf::from_wishlist_flag(to_wishlist);
        let summary = SearchSummary {
            artist: record.artist.clone(),
            album: record.title.clone(),
            year: year_of(&record.published_at).to_string(),
            cover_url,
            id,
            shelf,
        };

        collection.push(record, shelf);
        collection.metadata.last_used_id = id;
        self.store.save(&collection)?;
        enter(Stage::Persisted);

        tracing::info!(
            "Added \"{} - {}\" to {} as #{}",
            summary.artist,
            summary.album,
            shelf,
            id
        );
        enter(Stage::Reported);
        Ok(summary)
    }

    /// Resolve and download the cover for a new record.
    ///
    /// Returns the source URL only if the image was stored.
    async fn fetch_artwork(&self, release_group_id: &str, id: i64) -> Option<String> {
        let url = self.artwork.resolve_cover_url(release_group_id).await?;
        let dest = cover_path(&self.covers_dir, id);

        match self.artwork.download(&url, &dest).await {
            Ok(()) => {
                tracing::info!("Saved cover art to {:?}", dest);
                Some(url)
            }
            Err(e) => {
                tracing::warn!("Cover art download from {} failed: {}", url, e);
                None
            }
        }
    }
}

/// Map the chosen candidate to a collection record, filling placeholders.
pub fn build_record(candidate: &CandidateRelease, id: i64) -> Record {
    let or_unknown = |value: &Option<String>| value.clone().unwrap_or_else(|| UNKNOWN.to_string());

    Record {
        artist: or_unknown(&candidate.artist_name),
        title: or_unknown(&candidate.title),
        published_at: or_unknown(&candidate.first_release_date),
        release_id: Some(candidate.id.clone()),
        id,
    }
}

/// Cover image location for a record id: `<covers_dir>/<id>.jpg`
pub fn cover_path(covers_dir: &Path, id: i64) -> PathBuf {
    covers_dir.join(format!("{}.jpg", id))
}
