//! # Session store — who is logged in
//!
//! [`SessionStore`] owns the current [`Session`] and the [`CredentialStore`] that
//! persists its credential. The UI keeps one instance in a context signal; nothing
//! else mutates session state.
//!
//! ## States
//!
//! ```text
//!              login / initialize (token found)
//!  Anonymous ───────────────────────────────────▶ Authenticated
//!      ▲                                               │
//!      └─────────────────── logout ────────────────────┘
//! ```
//!
//! There is no "verifying" state. A token is trusted as soon as it exists:
//! [`SessionStore::initialize`] restores a session from storage without asking the
//! server, and nothing checks signatures or expiry client-side. A server that
//! rejects the token with 401 is handled by the caller logging out.

use crate::credential::{CredentialStore, StorageScope};
use crate::models::{Credential, UserInfo};

/// The two authentication states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Anonymous,
    Authenticated,
}

/// An authenticated session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub credential: Credential,
    /// `None` when the session was rehydrated from storage.
    pub user: Option<UserInfo>,
    pub scope: StorageScope,
}

/// Holder of the current authentication state.
#[derive(Clone, Debug)]
pub struct SessionStore<S: CredentialStore> {
    storage: S,
    session: Option<Session>,
}

impl<S: CredentialStore> SessionStore<S> {
    /// Create an anonymous store. Call [`initialize`](Self::initialize) to pick up a
    /// persisted credential.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    /// Rehydrate from storage. Returns whether a session was restored.
    pub fn initialize(&mut self) -> bool {
        match self.storage.current() {
            Some((scope, credential)) => {
                tracing::debug!("Restored session from {:?} storage", scope);
                self.session = Some(Session {
                    credential,
                    user: None,
                    scope,
                });
                true
            }
            None => {
                self.session = None;
                false
            }
        }
    }

    /// Replace the session and persist its credential in `scope`. Any credential in
    /// the other scope is removed.
    ///
    /// The credential is normalised the same way storage reads it back, so the
    /// session always matches `storage.current()`. A blank credential is refused
    /// and leaves the store untouched; returns whether the login took effect.
    pub fn login(
        &mut self,
        credential: Credential,
        user: Option<UserInfo>,
        scope: StorageScope,
    ) -> bool {
        let Some(credential) = Credential::from_stored(credential.as_str()) else {
            tracing::warn!("Refusing to log in with a blank credential");
            return false;
        };
        self.storage.remove(scope.other());
        self.storage.write(scope, &credential);
        tracing::info!(
            "Logged in as {} ({:?} storage)",
            user.as_ref().map_or("unknown user", UserInfo::display_name),
            scope
        );
        self.session = Some(Session {
            credential,
            user,
            scope,
        });
        true
    }

    /// Drop the session and every persisted credential.
    pub fn logout(&mut self) {
        self.storage.clear();
        if self.session.take().is_some() {
            tracing::info!("Logged out");
        }
    }

    pub fn status(&self) -> AuthStatus {
        if self.session.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().and_then(|s| s.user.as_ref())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn user() -> UserInfo {
        UserInfo {
            id: Some("1".to_string()),
            username: Some("diner".to_string()),
            email: Some("user@example.com".to_string()),
        }
    }

    #[test]
    fn test_new_store_is_anonymous() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert_eq!(sessions.status(), AuthStatus::Anonymous);
        assert!(sessions.session().is_none());
    }

    #[test]
    fn test_login_persists_credential() {
        let storage = MemoryStore::new();
        let mut sessions = SessionStore::new(storage.clone());

        sessions.login(Credential::new("tok-1"), Some(user()), StorageScope::Durable);

        assert!(sessions.is_authenticated());
        assert_eq!(sessions.user().map(UserInfo::display_name), Some("diner"));
        assert_eq!(
            storage.read(StorageScope::Durable).map(|c| c.as_str().to_string()),
            Some("tok-1".to_string())
        );
        assert!(storage.read(StorageScope::Tab).is_none());
    }

    #[test]
    fn test_blank_credential_is_refused() {
        let storage = MemoryStore::new();
        let mut sessions = SessionStore::new(storage.clone());

        assert!(!sessions.login(Credential::new(""), Some(user()), StorageScope::Durable));
        assert!(!sessions.login(Credential::new("  "), None, StorageScope::Tab));

        assert!(!sessions.is_authenticated());
        assert!(storage.current().is_none());
    }

    #[test]
    fn test_blank_credential_keeps_existing_session() {
        let storage = MemoryStore::new();
        let mut sessions = SessionStore::new(storage.clone());
        sessions.login(Credential::new("tok-1"), None, StorageScope::Tab);

        assert!(!sessions.login(Credential::new(""), None, StorageScope::Durable));

        assert_eq!(sessions.session().map(|s| s.credential.as_str()), Some("tok-1"));
        assert_eq!(
            storage.current().map(|(_, c)| c.as_str().to_string()),
            Some("tok-1".to_string())
        );
    }

    #[test]
    fn test_padded_credential_matches_storage() {
        let storage = MemoryStore::new();
        let mut sessions = SessionStore::new(storage.clone());

        assert!(sessions.login(Credential::new(" abc "), None, StorageScope::Durable));

        let in_session = sessions.session().map(|s| s.credential.clone());
        let in_storage = storage.current().map(|(_, c)| c);
        assert_eq!(in_session, in_storage);
        assert_eq!(in_session.map(|c| c.as_str().to_string()), Some("abc".to_string()));
    }

    #[test]
    fn test_login_clears_other_scope() {
        let storage = MemoryStore::new();
        storage.seed(StorageScope::Durable, "old-remembered");
        let mut sessions = SessionStore::new(storage.clone());

        sessions.login(Credential::new("fresh"), None, StorageScope::Tab);

        assert!(storage.read(StorageScope::Durable).is_none());
        assert_eq!(
            storage.current().map(|(_, c)| c.as_str().to_string()),
            Some("fresh".to_string())
        );
    }

    #[test]
    fn test_logout_clears_state_and_storage() {
        let storage = MemoryStore::new();
        let mut sessions = SessionStore::new(storage.clone());
        sessions.login(Credential::new("tok-1"), Some(user()), StorageScope::Tab);

        sessions.logout();

        assert_eq!(sessions.status(), AuthStatus::Anonymous);
        assert!(storage.current().is_none());
    }

    #[test]
    fn test_logout_removes_both_scopes() {
        let storage = MemoryStore::new();
        storage.seed(StorageScope::Durable, "a");
        storage.seed(StorageScope::Tab, "b");
        let mut sessions = SessionStore::new(storage.clone());
        assert!(sessions.initialize());

        sessions.logout();

        assert!(storage.read(StorageScope::Durable).is_none());
        assert!(storage.read(StorageScope::Tab).is_none());
    }

    #[test]
    fn test_initialize_rehydrates_without_identity() {
        let storage = MemoryStore::new();
        storage.seed(StorageScope::Durable, "remembered");

        let mut sessions = SessionStore::new(storage);
        assert!(sessions.initialize());

        let session = sessions.session().unwrap();
        assert_eq!(session.credential.as_str(), "remembered");
        assert_eq!(session.scope, StorageScope::Durable);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_initialize_with_empty_storage_stays_anonymous() {
        let storage = MemoryStore::new();
        storage.seed(StorageScope::Durable, "");

        let mut sessions = SessionStore::new(storage);
        assert!(!sessions.initialize());
        assert_eq!(sessions.status(), AuthStatus::Anonymous);
    }
}
