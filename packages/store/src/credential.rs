//! # Credential persistence — one token, two scopes
//!
//! The client keeps exactly one string, the bearer token, under the fixed key
//! [`TOKEN_KEY`]. Where it lives depends on the "remember me" choice made at login:
//!
//! | [`StorageScope`] | Web | Native |
//! |------------------|-----|--------|
//! | `Durable` | `localStorage` | `<data_dir>/dineflex/token` |
//! | `Tab` | `sessionStorage` | process memory |
//!
//! All reads and writes go through the [`CredentialStore`] trait, so the session
//! store and the HTTP client work the same against every backend
//! ([`crate::MemoryStore`], [`crate::FileStore`], [`crate::WebStorage`]).
//!
//! ## Both scopes populated
//!
//! [`crate::SessionStore::login`] writes one scope and clears the other, so a
//! context normally holds at most one credential. Storage written by something else
//! can still hold two; [`CredentialStore::current`] then prefers `Tab`, the more
//! recent and narrower choice.
//!
//! ## Error handling
//!
//! Implementations log and swallow write failures. A broken storage degrades to
//! "anonymous" instead of taking the UI down.

use crate::models::Credential;

/// Storage key the credential is kept under.
pub const TOKEN_KEY: &str = "token";

/// Where a credential is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Survives restarts.
    Durable,
    /// Lives as long as the tab (or process).
    Tab,
}

impl StorageScope {
    /// Scope picked by the login form's "remember me" checkbox.
    pub fn from_remember_me(remember: bool) -> Self {
        if remember {
            Self::Durable
        } else {
            Self::Tab
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Durable => Self::Tab,
            Self::Tab => Self::Durable,
        }
    }
}

/// Synchronous key-value access to the persisted credential.
pub trait CredentialStore {
    fn read(&self, scope: StorageScope) -> Option<Credential>;
    fn write(&self, scope: StorageScope, credential: &Credential);
    fn remove(&self, scope: StorageScope);

    /// The active credential, `Tab` first.
    fn current(&self) -> Option<(StorageScope, Credential)> {
        [StorageScope::Tab, StorageScope::Durable]
            .into_iter()
            .find_map(|scope| self.read(scope).map(|credential| (scope, credential)))
    }

    fn clear(&self) {
        self.remove(StorageScope::Tab);
        self.remove(StorageScope::Durable);
    }
}
