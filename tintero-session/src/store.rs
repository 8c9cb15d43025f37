use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use crate::state::{PersistedSession, STORAGE_KEY};

/// Errors from reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
    /// The persisted envelope could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable storage for the session envelope.
///
/// Exactly one session is stored; there is no keying beyond the fixed
/// storage name. Writes are last-write-wins, with no locking across
/// processes.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Load the persisted envelope, or `None` when nothing is stored.
    async fn load(&self) -> Result<Option<PersistedSession>, StoreError>;
    /// Persist the envelope, replacing any previous one.
    async fn save(&self, session: &PersistedSession) -> Result<(), StoreError>;
    /// Remove the persisted envelope.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory store. Holds the serialized JSON, so load/save exercises
/// the same round trip the durable backend does.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self) -> Result<Option<PersistedSession>, StoreError> {
        let slot = self.slot.lock().expect("session slot poisoned");
        match slot.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, session: &PersistedSession) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(session)?;
        *self.slot.lock().expect("session slot poisoned") = Some(encoded);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().expect("session slot poisoned") = None;
        Ok(())
    }
}

/// File-backed store, the native analog of the browser's localStorage.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store the session at the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the session under the conventional file name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STORAGE_KEY}.json")))
    }

    /// Where this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileStore {
    async fn load(&self) -> Result<Option<PersistedSession>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, session: &PersistedSession) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(session)?;
        tokio::fs::write(&self.path, encoded).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionState;
    use tintero_core::User;

    fn sample() -> PersistedSession {
        PersistedSession::current(SessionState::authenticated(
            User {
                id: "u1".to_owned(),
                name: "Ana".to_owned(),
                email: "ana@x.com".to_owned(),
            },
            "at".to_owned(),
            "rt".to_owned(),
        ))
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        store.save(&sample()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(sample()));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());
        assert!(store.load().await.unwrap().is_none());

        store.save(&sample()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(sample()));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        // clearing twice is not an error
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn file_store_uses_the_conventional_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());
        assert_eq!(
            store.path().file_name().unwrap().to_str().unwrap(),
            "auth-storage.json"
        );
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());
        tokio::fs::write(store.path(), "not json").await.unwrap();
        assert!(matches!(
            store.load().await.unwrap_err(),
            StoreError::Serialization(_)
        ));
    }
}
