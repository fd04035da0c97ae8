//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`LookupError`](crate::lookup::LookupError),
//! [`WorkflowError`](crate::workflow::WorkflowError)), while the CLI and
//! `main` use `anyhow` for convenient error propagation.
//!
//! [`Error`] covers the local side of the application: reading and writing
//! the collection document.
//!
//! # Example
//!
//! ```ignore
//! use vinyls::error::{Result, ResultExt};
//!
//! fn write_document(path: &Path, json: &str) -> Result<()> {
//!     std::fs::write(path, json).with_context(format!("writing {}", path.display()))?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Collection document error
    #[error("Collection error for {path}: {message}")]
    Collection { path: PathBuf, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a collection document error.
    pub fn collection(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Collection {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Json(e).context(ctx))
    }
}
