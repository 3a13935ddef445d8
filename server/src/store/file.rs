//! JSON file backend.
//!
//! Writes go to a temp file in the target's directory which is then renamed
//! over the target, so a crash mid-write leaves the previous document intact.

use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::{decode, encode, DocumentStore, Snapshot, StoreError, Version};
use crate::domain::AppData;

/// Document store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Held across check-and-write so two version-checked writers in this
    // process cannot both succeed from the same base.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store for the file at `path`. Nothing is touched yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seeds an empty roster if the file does not exist yet.
    ///
    /// Returns `true` when a new document was written.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the parent directory or the seed document
    /// cannot be created.
    pub async fn ensure_exists(&self) -> Result<bool, StoreError> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| StoreError::unavailable("probe", self.path.display(), e))?
        {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::unavailable("create", parent.display(), e))?;
        }

        self.replace(&AppData::default(), None).await?;
        info!(path = %self.path.display(), "Seeded empty roster document");
        Ok(true)
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, StoreError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::unavailable("read", self.path.display(), e))
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Snapshot, StoreError> {
        let bytes = self.read_bytes().await?;
        let snapshot = decode(&bytes, self.path.display())?;
        debug!(
            members = snapshot.data.members.len(),
            version = %snapshot.version,
            "Loaded roster document"
        );
        Ok(snapshot)
    }

    #[instrument(skip(self, data), fields(path = %self.path.display(), members = data.members.len()))]
    async fn replace(
        &self,
        data: &AppData,
        expected: Option<&Version>,
    ) -> Result<Version, StoreError> {
        let bytes = encode(data)?;
        let version = Version::of(&bytes);

        let _guard = self.write_lock.lock().await;

        if let Some(expected) = expected {
            let actual = Version::of(&self.read_bytes().await?);
            if &actual != expected {
                warn!(%expected, %actual, "Refusing write based on stale document");
                return Err(StoreError::VersionMismatch {
                    expected: expected.clone(),
                    actual,
                });
            }
        }

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .map_err(|e| StoreError::Unavailable(format!("write task aborted: {e}")))??;

        metrics::counter!("taskforce_store_writes_total").increment(1);
        debug!(%version, "Replaced roster document");
        Ok(version)
    }
}

/// Stages `bytes` next to `path`, flushes them, then renames over `path`.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| StoreError::unavailable("stage write in", dir.display(), e))?;
    staged
        .write_all(bytes)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| StoreError::unavailable("write", staged.path().display(), e))?;

    // The staged file is removed on drop if the rename fails.
    staged
        .persist(path)
        .map_err(|e| StoreError::unavailable("replace", path.display(), e.error))?;
    Ok(())
}
