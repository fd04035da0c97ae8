//! JSON-backed collection store.
//!
//! The whole document is read at once and written back at once. There is no
//! locking: two processes saving the same file race and the last writer wins.

use std::path::{Path, PathBuf};

use super::Collection;
use crate::error::{Error, Result, ResultExt};

/// Location of the collection document, relative to the project root
pub const DEFAULT_COLLECTION_PATH: &str = "src/collections.json";

/// Loads and saves the collection document and hands out record ids.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    path: PathBuf,
}

impl CollectionStore {
    /// Create a store backed by the given JSON file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`DEFAULT_COLLECTION_PATH`].
    pub fn default_location() -> Self {
        Self::new(DEFAULT_COLLECTION_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection.
    ///
    /// Returns a fresh collection if the file is missing or can't be parsed.
    /// Logs warnings but doesn't fail.
    pub fn load(&self) -> Collection {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No collection at {:?}, starting a new one", self.path);
                return Collection::default();
            }
            Err(e) => {
                tracing::warn!("Couldn't read collection file {:?}: {}", self.path, e);
                return Collection::default();
            }
        };

        let mut collection: Collection = match serde_json::from_str(&contents) {
            Ok(collection) => collection,
            Err(e) => {
                tracing::warn!("Couldn't parse collection file {:?}: {}", self.path, e);
                return Collection::default();
            }
        };

        // Hand-edited documents may carry ids past the counter
        if let Some(max_id) = collection.max_id()
            && max_id > collection.metadata.last_used_id
        {
            tracing::warn!(
                "lastUsedID {} is behind highest record id {}, raising it",
                collection.metadata.last_used_id,
                max_id
            );
            collection.metadata.last_used_id = max_id;
        }

        tracing::debug!(
            records = collection.records.len(),
            wishlist = collection.wishlist.len(),
            last_used_id = collection.metadata.last_used_id,
            "Loaded collection from {:?}",
            self.path
        );
        collection
    }

    /// Replace the backing document with `collection`.
    ///
    /// Writes to a temp file next to the target and renames it into place,
    /// so readers never observe a half-written document.
    pub fn save(&self, collection: &Collection) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(format!("creating directory {}", dir.display()))?;
        }

        let mut contents = serde_json::to_string_pretty(collection)
            .with_context("serializing collection")?;
        contents.push('\n');

        let temp_path = self.temp_path()?;
        std::fs::write(&temp_path, &contents)
            .with_context(format!("writing {}", temp_path.display()))?;
        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(Error::Io(e).context(format!(
                "replacing {} with {}",
                self.path.display(),
                temp_path.display()
            )));
        }

        tracing::info!(
            "Saved collection to {:?} ({} records, {} wishlist)",
            self.path,
            collection.records.len(),
            collection.wishlist.len()
        );
        Ok(())
    }

    /// The id the next record should get, or `None` once the counter is at `i64::MAX`.
    ///
    /// The caller is responsible for bumping `lastUsedID` once the id is used.
    pub fn next_id(collection: &Collection) -> Option<i64> {
        collection.metadata.last_used_id.checked_add(1)
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| Error::collection(&self.path, "path has no file name"))?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        Ok(self.path.with_file_name(temp_name))
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::default_location()
    }
}
