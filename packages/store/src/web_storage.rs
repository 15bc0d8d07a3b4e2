//! # Browser storage credential store
//!
//! [`WebStorage`] is the [`CredentialStore`] used on the **web platform**. It maps
//! [`StorageScope::Durable`] to `window.localStorage` and [`StorageScope::Tab`] to
//! `window.sessionStorage`, both under the key [`TOKEN_KEY`].
//!
//! `WebStorage` is a zero-size struct that looks the storage object up on every
//! call. Browsers may deny storage access (private mode, disabled cookies); reads
//! then return `None` and writes log a warning.

use web_sys::Storage;

use crate::credential::{CredentialStore, StorageScope, TOKEN_KEY};
use crate::models::Credential;

/// `localStorage`/`sessionStorage`-backed CredentialStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(scope: StorageScope) -> Option<Storage> {
        let window = web_sys::window()?;
        let storage = match scope {
            StorageScope::Durable => window.local_storage(),
            StorageScope::Tab => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl CredentialStore for WebStorage {
    fn read(&self, scope: StorageScope) -> Option<Credential> {
        let raw = Self::storage(scope)?.get_item(TOKEN_KEY).ok()??;
        Credential::from_stored(&raw)
    }

    fn write(&self, scope: StorageScope, credential: &Credential) {
        let Some(storage) = Self::storage(scope) else {
            tracing::warn!("{:?} storage unavailable, credential not persisted", scope);
            return;
        };
        if storage.set_item(TOKEN_KEY, credential.as_str()).is_err() {
            tracing::warn!("Failed to write credential to {:?} storage", scope);
        }
    }

    fn remove(&self, scope: StorageScope) {
        if let Some(storage) = Self::storage(scope) {
            if storage.remove_item(TOKEN_KEY).is_err() {
                tracing::warn!("Failed to remove credential from {:?} storage", scope);
            }
        }
    }
}
