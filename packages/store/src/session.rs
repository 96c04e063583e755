//! # Session: the single persisted auth token
//!
//! The client keeps exactly one piece of durable state: the bearer token handed
//! out by the login endpoint. [`Session`] is the only way the rest of the
//! workspace touches it. Views never reach into storage directly; they are given
//! a `Session` (the UI builds one per platform) and call its three operations.
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`set_token`](Session::set_token) | Persist a token returned by a successful login. |
//! | [`token`](Session::token) | Current token, or `None` when logged out. |
//! | [`clear_token`](Session::clear_token) | Forget the token (logout). |
//!
//! The token is opaque. Nothing here decodes it, checks expiry, or talks to the
//! server; an expired token is only noticed when a request using it fails.
//!
//! ## [`TokenStore`] trait
//!
//! Key/value access to durable client storage. Backends live in sibling
//! modules: [`crate::MemoryStore`] (tests), `FileStore` (native) and
//! `LocalStore` (browser `localStorage`). All of them store the token under
//! [`TOKEN_KEY`].

use crate::errors::StoreError;
use crate::guard::{self, Access};

/// Fixed storage key for the session token.
pub const TOKEN_KEY: &str = "token";

/// Durable string storage for the session token.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read/write/clear access to the session token.
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored token. An empty value counts as logged out.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<(), StoreError> {
        if token.is_empty() {
            return Err(StoreError::EmptyToken);
        }
        self.store.set(TOKEN_KEY, token)?;
        tracing::debug!("session token stored");
        Ok(())
    }

    pub fn clear_token(&self) -> Result<(), StoreError> {
        self.store.remove(TOKEN_KEY)?;
        tracing::debug!("session token cleared");
        Ok(())
    }

    /// Guard decision for a view that requires a token.
    pub fn protected_access(&self) -> Access {
        guard::protected(self.token().as_deref())
    }

    /// Guard decision for the login and signup views.
    pub fn public_access(&self) -> Access {
        guard::public(self.token().as_deref())
    }
}
