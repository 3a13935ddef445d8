//! Persistence gateway for the roster document.
//!
//! The document is only ever read and written whole. Every load hands back a
//! content [`Version`] that a caller can pass to the next replace to have it
//! refused if someone else wrote in between; without it, the last writer wins.

/// JSON file backend.
pub mod file;
/// In-memory backend.
pub mod memory;
/// Content versions of the stored document.
pub mod version;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use version::Version;

use async_trait::async_trait;
use std::fmt;

use crate::domain::AppData;

/// Errors that can occur when using the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document could not be read, parsed or written.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    /// The document changed since the version the caller loaded.
    #[error("Version mismatch: expected {expected}, found {actual}")]
    VersionMismatch {
        /// Version the caller based its write on.
        expected: Version,
        /// Version currently stored.
        actual: Version,
    },
}

impl StoreError {
    pub(crate) fn unavailable(
        action: &str,
        target: impl fmt::Display,
        err: impl fmt::Display,
    ) -> Self {
        Self::Unavailable(format!("failed to {action} {target}: {err}"))
    }
}

/// A loaded document together with the version it was loaded at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The document.
    pub data: AppData,
    /// Version of the bytes the document was decoded from.
    pub version: Version,
}

/// Whole-document load and replace.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads the full document.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the document is missing, unreadable or corrupt.
    async fn load(&self) -> Result<Snapshot, StoreError>;

    /// Overwrites the full document and returns its new version.
    ///
    /// With `expected` set, the write only happens if the stored document is
    /// still at that version.
    ///
    /// # Errors
    ///
    /// Returns `VersionMismatch` if `expected` is stale, or `Unavailable` if
    /// the write fails. The stored document is unchanged in both cases.
    async fn replace(
        &self,
        data: &AppData,
        expected: Option<&Version>,
    ) -> Result<Version, StoreError>;
}

/// Serializes a document the way it is stored on disk.
pub(crate) fn encode(data: &AppData) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(data).map_err(|e| StoreError::unavailable("encode", "document", e))
}

/// Parses stored bytes into a snapshot.
pub(crate) fn decode(bytes: &[u8], source: impl fmt::Display) -> Result<Snapshot, StoreError> {
    let data =
        serde_json::from_slice(bytes).map_err(|e| StoreError::unavailable("parse", source, e))?;
    Ok(Snapshot {
        data,
        version: Version::of(bytes),
    })
}
