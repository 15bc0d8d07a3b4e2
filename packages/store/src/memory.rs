use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::credential::{CredentialStore, StorageScope};
use crate::models::Credential;

/// In-memory CredentialStore for testing and as the native tab scope.
///
/// Clones share the same slots, so a session store and an HTTP client built from
/// clones of one `MemoryStore` see each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<StorageScope, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value, bypassing credential parsing. Used to simulate what an
    /// earlier page load left behind.
    pub fn seed(&self, scope: StorageScope, raw: &str) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scope, raw.to_string());
    }
}

impl CredentialStore for MemoryStore {
    fn read(&self, scope: StorageScope) -> Option<Credential> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(&scope).and_then(|raw| Credential::from_stored(raw))
    }

    fn write(&self, scope: StorageScope, credential: &Credential) {
        self.seed(scope, credential.as_str());
    }

    fn remove(&self, scope: StorageScope) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slots() {
        let store = MemoryStore::new();
        let view = store.clone();

        store.write(StorageScope::Durable, &Credential::new("abc"));
        assert_eq!(
            view.read(StorageScope::Durable).map(|c| c.as_str().to_string()),
            Some("abc".to_string())
        );
        assert!(view.read(StorageScope::Tab).is_none());

        view.remove(StorageScope::Durable);
        assert!(store.read(StorageScope::Durable).is_none());
    }

    #[test]
    fn test_blank_seed_reads_as_absent() {
        let store = MemoryStore::new();
        store.seed(StorageScope::Tab, "  ");
        assert!(store.read(StorageScope::Tab).is_none());
    }
}
