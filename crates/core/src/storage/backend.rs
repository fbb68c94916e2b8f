use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::errors::CoreError;

/// Fixed namespaced key under which the item collection is persisted.
/// The `v1` suffix is the only schema-version signal the store carries.
pub const STORAGE_KEY: &str = "finman.items.v1";

/// A slot holding the single persisted JSON blob.
///
/// This is the seam that stood for browser local storage in the original
/// product: one key, whole-value reads and writes, nothing else.
pub trait StorageBackend: Send + Sync {
    /// Read the persisted blob. `Ok(None)` means nothing was ever written.
    fn read(&self) -> Result<Option<String>, CoreError>;

    /// Overwrite the persisted blob.
    fn write(&self, payload: &str) -> Result<(), CoreError>;
}

/// File-backed storage: the blob lives in `<dir>/finman.items.v1.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Store the blob under the given directory, named after [`STORAGE_KEY`].
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// The file this backend reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileStorage {
    fn read(&self) -> Result<Option<String>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&self, payload: &str) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory storage. Clones share the same cell, so one handle can be kept
/// aside to inspect what another wrote. Used in tests and embeddings that
/// manage persistence themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    cell: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Result<Option<String>, CoreError> {
        let cell = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(cell.clone())
    }

    fn write(&self, payload: &str) -> Result<(), CoreError> {
        let mut cell = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        *cell = Some(payload.to_string());
        Ok(())
    }
}

/// Storage for contexts with no persistence at all (e.g. a server-side
/// render pass). Reads nothing, discards writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStorage;

impl StorageBackend for NullStorage {
    fn read(&self) -> Result<Option<String>, CoreError> {
        Ok(None)
    }

    fn write(&self, _payload: &str) -> Result<(), CoreError> {
        Ok(())
    }
}
