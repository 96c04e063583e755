//! # Browser `localStorage` token store
//!
//! [`LocalStore`] is the [`TokenStore`] used by the web build. Values live in
//! `window.localStorage`, so the token survives reloads but stays scoped to the
//! browser profile and origin.
//!
//! The handle is a zero-size struct; every call looks the `Storage` object up
//! again because `web_sys::Storage` is not `Send` and the browser caches it
//! anyway. Reads swallow errors (a disabled or sandboxed storage looks like a
//! logged-out session); writes report them so the login flow can show a message.

use crate::errors::StoreError;
use crate::session::TokenStore;

/// `localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl TokenStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = match Self::storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("{}", e);
                return None;
            }
        };
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
