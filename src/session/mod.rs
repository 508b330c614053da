// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted client session: access token, refresh token, user record.
//!
//! The session lives only in the [`SessionStore`]. [`Session`] is a typed
//! view over the three keys and never caches what it reads, so a change made
//! through one handle is visible to every other handle on the same store.

pub mod store;

pub use store::{FileStore, MemoryStore, SessionStore, StoreError};

use crate::constants::keys;
use crate::models::UserRecord;
use std::sync::Arc;

/// Typed accessor over the session keys of a store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn access_token(&self) -> Result<Option<String>, StoreError> {
        self.store.get(keys::TOKEN)
    }

    pub fn refresh_token(&self) -> Result<Option<String>, StoreError> {
        self.store.get(keys::REFRESH_TOKEN)
    }

    /// Stored user record. An unparseable record reads as absent.
    pub fn user(&self) -> Result<Option<UserRecord>, StoreError> {
        let Some(raw) = self.store.get(keys::USER)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user record is not valid JSON, ignoring");
                Ok(None)
            }
        }
    }

    /// The caller is authenticated iff an access token is stored.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.access_token(), Ok(Some(_)))
    }

    /// Write a freshly issued session. All three fields are written together.
    pub fn save_login(
        &self,
        access_token: &str,
        refresh_token: &str,
        user: Option<&UserRecord>,
    ) -> Result<(), StoreError> {
        self.store.set(keys::TOKEN, access_token)?;
        self.store.set(keys::REFRESH_TOKEN, refresh_token)?;
        match user {
            Some(user) => self.set_user(user),
            None => self.store.remove(keys::USER),
        }
    }

    /// Replace the access token in place; the other fields are untouched.
    pub fn set_access_token(&self, access_token: &str) -> Result<(), StoreError> {
        self.store.set(keys::TOKEN, access_token)
    }

    pub fn set_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.store.set(keys::USER, &raw)
    }

    /// Remove all three fields, one after another.
    ///
    /// Idempotent. Every removal is attempted even if an earlier one fails;
    /// the first failure is returned.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut first_err = None;
        for key in [keys::TOKEN, keys::REFRESH_TOKEN, keys::USER] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, error = %e, "Failed to remove session field");
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
