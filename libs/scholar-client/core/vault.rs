use crate::traits::error::Result;
use crate::traits::storage::KeyValueStore;
use std::sync::Arc;
use tracing::debug;

/// Storage key of the access token
pub const ACCESS_TOKEN_KEY: &str = "token";

/// Storage key of the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Access and refresh tokens kept in a `KeyValueStore` under fixed keys
#[derive(Clone)]
pub struct TokenVault {
    store: Arc<dyn KeyValueStore>,
}

impl TokenVault {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn store_access_token(&self, token: &str) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, token)
    }

    /// Store both tokens after a login
    pub fn store_session(&self, access_token: &str, refresh_token: &str) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, access_token)?;
        self.store.set(REFRESH_TOKEN_KEY, refresh_token)
    }

    /// Remove both tokens
    ///
    /// Both removals are attempted even if the first one fails.
    pub fn purge(&self) -> Result<()> {
        debug!("Purging stored tokens");
        let access = self.store.remove(ACCESS_TOKEN_KEY);
        let refresh = self.store.remove(REFRESH_TOKEN_KEY);
        access.and(refresh)
    }

    pub fn has_session(&self) -> bool {
        self.access_token().is_some() || self.refresh_token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::storage::MemoryStore;

    #[test]
    fn test_session_lifecycle() {
        let store = Arc::new(MemoryStore::new());
        let vault = TokenVault::new(store.clone());
        assert!(!vault.has_session());

        vault.store_session("T1", "R1").unwrap();
        assert_eq!(vault.access_token().as_deref(), Some("T1"));
        assert_eq!(vault.refresh_token().as_deref(), Some("R1"));
        assert_eq!(store.get("token").as_deref(), Some("T1"));
        assert_eq!(store.get("refreshToken").as_deref(), Some("R1"));

        vault.store_access_token("T2").unwrap();
        assert_eq!(vault.access_token().as_deref(), Some("T2"));
        assert_eq!(vault.refresh_token().as_deref(), Some("R1"));

        vault.purge().unwrap();
        assert!(!vault.has_session());
        assert_eq!(store.get("token"), None);
        assert_eq!(store.get("refreshToken"), None);
    }

    #[test]
    fn test_empty_values_read_as_absent() {
        let store = Arc::new(MemoryStore::new());
        store.set(ACCESS_TOKEN_KEY, "").unwrap();
        let vault = TokenVault::new(store);
        assert_eq!(vault.access_token(), None);
    }
}
