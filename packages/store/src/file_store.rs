//! # Filesystem-backed credential store
//!
//! [`FileStore`] is the [`CredentialStore`] used on native platforms. The durable
//! scope is a single file; the tab scope has no native counterpart and lives in
//! process memory, so it is gone when the app exits.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── token      # the durable credential, nothing else
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/dineflex/` |
//! | Linux | `~/.local/share/dineflex/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\dineflex\` |

use std::path::PathBuf;

use crate::credential::{CredentialStore, StorageScope, TOKEN_KEY};
use crate::memory::MemoryStore;
use crate::models::Credential;

/// Filesystem-backed CredentialStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    tab: MemoryStore,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self {
            base,
            tab: MemoryStore::new(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl CredentialStore for FileStore {
    fn read(&self, scope: StorageScope) -> Option<Credential> {
        match scope {
            StorageScope::Tab => self.tab.read(scope),
            StorageScope::Durable => {
                let content = std::fs::read_to_string(self.token_path()).ok()?;
                Credential::from_stored(&content)
            }
        }
    }

    fn write(&self, scope: StorageScope, credential: &Credential) {
        match scope {
            StorageScope::Tab => self.tab.write(scope, credential),
            StorageScope::Durable => {
                if let Err(e) = std::fs::create_dir_all(&self.base) {
                    tracing::warn!("Failed to create {}: {}", self.base.display(), e);
                    return;
                }
                if let Err(e) = std::fs::write(self.token_path(), credential.as_str()) {
                    tracing::warn!("Failed to persist credential: {}", e);
                }
            }
        }
    }

    fn remove(&self, scope: StorageScope) {
        match scope {
            StorageScope::Tab => self.tab.remove(scope),
            StorageScope::Durable => {
                let path = self.token_path();
                if path.exists() {
                    if let Err(e) = std::fs::remove_file(&path) {
                        tracing::warn!("Failed to remove {}: {}", path.display(), e);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dineflex_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_durable_credential_survives_reopen() {
        let dir = temp_base("durable");

        let store = FileStore::new(dir.clone());
        store.write(StorageScope::Durable, &Credential::new("persisted"));

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(
            reopened
                .read(StorageScope::Durable)
                .map(|c| c.as_str().to_string()),
            Some("persisted".to_string())
        );

        reopened.remove(StorageScope::Durable);
        assert!(store.read(StorageScope::Durable).is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_tab_scope_is_not_written_to_disk() {
        let dir = temp_base("tab");

        let store = FileStore::new(dir.clone());
        store.write(StorageScope::Tab, &Credential::new("ephemeral"));
        assert!(store.read(StorageScope::Tab).is_some());
        assert!(!dir.join(TOKEN_KEY).exists());

        // A fresh process has no tab credential
        let reopened = FileStore::new(dir.clone());
        assert!(reopened.read(StorageScope::Tab).is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
