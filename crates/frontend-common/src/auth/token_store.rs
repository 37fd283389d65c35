//! Session token persistence
//!
//! The token lives in a single key-value slot. In the browser that slot is
//! `localStorage[auth_token]`; native builds and tests use an in-memory slot.

use crate::config::AuthConfig;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::Storage;

/// Token storage errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No window or no localStorage (private mode, non-browser target)
    #[error("Local storage is not available")]
    Unavailable,

    /// The browser refused the write (quota, permissions)
    #[error("Local storage rejected the write: {0}")]
    Rejected(String),
}

/// Single-slot token store
pub trait TokenStore {
    /// Read the stored token
    fn token(&self) -> Option<String>;

    /// Replace the stored token
    fn set_token(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token. Removing an absent token is a no-op.
    fn clear(&self);

    /// Whether a non-empty token is stored
    fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        (**self).set_token(token)
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// End the session held by `store`
pub fn end_session<S: TokenStore + ?Sized>(store: &S) {
    store.clear();
    tracing::info!("logged out");
}

/// Token store backed by browser localStorage
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        Self::storage()
            .ok()?
            .get_item(AuthConfig::TOKEN_KEY)
            .ok()
            .flatten()
    }

    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(AuthConfig::TOKEN_KEY, token)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn clear(&self) {
        match Self::storage() {
            Ok(storage) => {
                if let Err(e) = storage.remove_item(AuthConfig::TOKEN_KEY) {
                    tracing::warn!(error = ?e, "failed to remove auth token");
                }
            }
            Err(e) => tracing::debug!(%e, "no storage to clear"),
        }
    }
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token(), None);
        assert!(!store.is_authenticated());

        store.set_token("tok_1").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok_1"));
        assert!(store.is_authenticated());

        store.set_token("tok_2").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok_2"));

        store.clear();
        assert_eq!(store.token(), None);
        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_end_session_clears_token() {
        let store = MemoryTokenStore::with_token("tok_1");
        end_session(&store);
        assert_eq!(store.token(), None);
        assert!(!store.is_authenticated());

        end_session(&store);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let store = MemoryTokenStore::with_token("");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_shared_store_through_rc() {
        let store = Rc::new(MemoryTokenStore::new());
        let handle = Rc::clone(&store);

        handle.set_token("shared").unwrap();
        assert_eq!(store.token().as_deref(), Some("shared"));
        assert!(handle.is_authenticated());
    }
}
