//! File-backed identity repository implementation.
//!
//! Persists the sign-in flag through [`KeyValueStorage`] under the key
//! `isSignedIn`. Only the exact stored string `"true"` reads back as
//! signed in; any other value or absence means signed out.

use std::sync::Arc;

use tokio::sync::Mutex;

use friction_core::error::Result;
use friction_core::identity::IdentityRepository;

use crate::storage::KeyValueStorage;

/// Storage key for the sign-in flag.
const SIGNED_IN_KEY: &str = "isSignedIn";

/// The stored sentinel meaning "signed in". Anything else is signed out.
const SIGNED_IN_VALUE: &str = "true";

/// Identity repository backed by the persistent key-value store.
///
/// The flag is read from storage once at construction and cached; every
/// change updates the cache and is written back immediately. Persist
/// failures are logged and swallowed so a broken disk never breaks the
/// session (the in-memory flag stays authoritative until the process
/// exits).
#[derive(Clone)]
pub struct FileIdentityRepository {
    /// Cached sign-in flag.
    signed_in: Arc<Mutex<bool>>,
    /// Persistent storage backend.
    storage: Arc<KeyValueStorage>,
}

impl FileIdentityRepository {
    /// Creates a repository over `storage`, initializing the flag from
    /// the stored value.
    pub fn new(storage: Arc<KeyValueStorage>) -> Self {
        let signed_in = matches!(
            storage.get(SIGNED_IN_KEY).as_deref(),
            Some(SIGNED_IN_VALUE)
        );

        Self {
            signed_in: Arc::new(Mutex::new(signed_in)),
            storage,
        }
    }
}

#[async_trait::async_trait]
impl IdentityRepository for FileIdentityRepository {
    async fn is_signed_in(&self) -> bool {
        *self.signed_in.lock().await
    }

    async fn set_signed_in(&self, signed_in: bool) -> Result<()> {
        *self.signed_in.lock().await = signed_in;

        let value = if signed_in { SIGNED_IN_VALUE } else { "false" };
        if let Err(err) = self.storage.set(SIGNED_IN_KEY, value) {
            tracing::warn!(
                error = %err,
                "failed to persist sign-in flag, keeping in-memory value"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> Arc<KeyValueStorage> {
        Arc::new(KeyValueStorage::open(dir.path().join("client_state.json")))
    }

    #[tokio::test]
    async fn test_fresh_storage_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileIdentityRepository::new(storage_in(&dir));
        assert!(!repository.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_sign_in_survives_reload() {
        let dir = tempfile::tempdir().unwrap();

        let repository = FileIdentityRepository::new(storage_in(&dir));
        repository.set_signed_in(true).await.unwrap();

        // Simulated reload: new repository over the same storage file
        let reloaded = FileIdentityRepository::new(storage_in(&dir));
        assert!(reloaded.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_sign_out_survives_reload() {
        let dir = tempfile::tempdir().unwrap();

        let repository = FileIdentityRepository::new(storage_in(&dir));
        repository.set_signed_in(true).await.unwrap();
        repository.set_signed_in(false).await.unwrap();

        let reloaded = FileIdentityRepository::new(storage_in(&dir));
        assert!(!reloaded.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_only_the_exact_sentinel_means_signed_in() {
        let dir = tempfile::tempdir().unwrap();

        let storage = storage_in(&dir);
        storage.set(SIGNED_IN_KEY, "TRUE").unwrap();
        assert!(!FileIdentityRepository::new(storage).is_signed_in().await);

        let storage = storage_in(&dir);
        storage.set(SIGNED_IN_KEY, "yes").unwrap();
        assert!(!FileIdentityRepository::new(storage).is_signed_in().await);

        let storage = storage_in(&dir);
        storage.set(SIGNED_IN_KEY, "true").unwrap();
        assert!(FileIdentityRepository::new(storage).is_signed_in().await);
    }
}
