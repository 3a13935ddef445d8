//! In-memory backend.
//!
//! Holds the encoded bytes rather than the parsed document so versions behave
//! exactly as they do for the file backend.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{decode, encode, DocumentStore, Snapshot, StoreError, Version};
use crate::domain::AppData;

/// Document store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bytes: Mutex<Option<Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Creates a store holding `data`.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the document cannot be encoded.
    pub fn new(data: &AppData) -> Result<Self, StoreError> {
        Ok(Self {
            bytes: Mutex::new(Some(encode(data)?)),
            fail_writes: AtomicBool::new(false),
        })
    }

    /// Creates a store with no document; every load fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Makes every following replace fail with `Unavailable`.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Snapshot, StoreError> {
        let guard = self.bytes.lock();
        let bytes = guard
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable("no document in memory store".to_string()))?;
        decode(bytes, "memory document")
    }

    async fn replace(
        &self,
        data: &AppData,
        expected: Option<&Version>,
    ) -> Result<Version, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory store is refusing writes".to_string(),
            ));
        }

        let encoded = encode(data)?;
        let version = Version::of(&encoded);

        let mut guard = self.bytes.lock();
        if let Some(expected) = expected {
            let current = guard.as_deref().ok_or_else(|| {
                StoreError::Unavailable("no document in memory store".to_string())
            })?;
            let actual = Version::of(current);
            if &actual != expected {
                return Err(StoreError::VersionMismatch {
                    expected: expected.clone(),
                    actual,
                });
            }
        }
        *guard = Some(encoded);
        Ok(version)
    }
}
