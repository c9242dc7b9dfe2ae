//! Token persistence
//!
//! [`Credentials`] is the handle the API client is constructed with. It
//! reads and writes the access/refresh pair under two fixed keys of the
//! underlying [`KeyValueStore`].

use super::store::{KeyValueStore, MemoryStore};
use crate::error::Result;
use std::sync::Arc;
use tracing::warn;

/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Shared handle over the session store
#[derive(Clone)]
pub struct Credentials {
    store: Arc<dyn KeyValueStore>,
}

impl Credentials {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Credentials that live only as long as this process
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Store both tokens
    pub fn set_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, access)?;
        self.store.set(REFRESH_TOKEN_KEY, refresh)
    }

    /// Replace only the access token (after a manual refresh)
    pub fn set_access_token(&self, access: &str) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, access)
    }

    pub fn get_access_token(&self) -> Result<Option<String>> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    pub fn get_refresh_token(&self) -> Result<Option<String>> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    /// Clear both tokens
    pub fn remove_tokens(&self) -> Result<()> {
        self.store.remove(ACCESS_TOKEN_KEY)?;
        self.store.remove(REFRESH_TOKEN_KEY)
    }

    /// Whether an access token is present. Expiry is not checked.
    pub fn is_authenticated(&self) -> bool {
        match self.get_access_token() {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read access token");
                false
            },
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::auth::store::SqliteStore;
    use tempfile::TempDir;

    #[test]
    fn test_token_round_trip() {
        let credentials = Credentials::in_memory();
        credentials.set_tokens("access-1", "refresh-1").unwrap();

        assert_eq!(credentials.get_access_token().unwrap().as_deref(), Some("access-1"));
        assert_eq!(credentials.get_refresh_token().unwrap().as_deref(), Some("refresh-1"));
        assert!(credentials.is_authenticated());
    }

    #[test]
    fn test_remove_tokens_clears_both_keys() {
        let store = Arc::new(MemoryStore::new());
        let credentials = Credentials::new(store.clone());
        credentials.set_tokens("a", "r").unwrap();

        credentials.remove_tokens().unwrap();

        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(REFRESH_TOKEN_KEY).unwrap(), None);
        assert!(!credentials.is_authenticated());
    }

    #[test]
    fn test_refresh_token_alone_is_not_authenticated() {
        let store = Arc::new(MemoryStore::new());
        store.set(REFRESH_TOKEN_KEY, "r").unwrap();
        let credentials = Credentials::new(store);

        assert!(!credentials.is_authenticated());
    }

    #[test]
    fn test_set_access_token_keeps_refresh() {
        let credentials = Credentials::in_memory();
        credentials.set_tokens("a1", "r1").unwrap();
        credentials.set_access_token("a2").unwrap();

        assert_eq!(credentials.get_access_token().unwrap().as_deref(), Some("a2"));
        assert_eq!(credentials.get_refresh_token().unwrap().as_deref(), Some("r1"));
    }

    #[test]
    fn test_sqlite_backed_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("session.db")).unwrap();
        let credentials = Credentials::new(Arc::new(store));

        credentials.set_tokens("access", "refresh").unwrap();
        assert_eq!(credentials.get_access_token().unwrap().as_deref(), Some("access"));

        credentials.remove_tokens().unwrap();
        assert_eq!(credentials.get_access_token().unwrap(), None);
        assert_eq!(credentials.get_refresh_token().unwrap(), None);
    }
}
