//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the app's single credential storage and hands two
//! contexts built on it to the tree below:
//!
//! - a `Signal<AppSession>` with the current session ([`use_auth`])
//! - the [`AppBackend`] picked from the config ([`use_backend`])
//!
//! Both share one storage value, so a login through the session store is visible
//! to the very next request the backend makes.

use api::{ApiBackend, ApiError, ClientConfig};
use dioxus::prelude::*;
use std::future::Future;

use store::{CredentialStore, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::WebStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStorage = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = store::FileStore;

pub type AppSession = SessionStore<AppStorage>;
pub type AppBackend = ApiBackend<AppStorage>;

/// Create the platform-appropriate credential storage.
///
/// - **Web** (WASM + `web` feature): `localStorage` / `sessionStorage`
/// - **Native**: `<data_dir>/dineflex/` on disk, tab scope in memory
pub fn app_storage() -> AppStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("dineflex");
        store::FileStore::new(base)
    }
}

/// Get the session signal. Writes go through `login`/`logout` on the store.
pub fn use_auth() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Get the backend chosen at startup.
pub fn use_backend() -> AppBackend {
    use_context::<AppBackend>()
}

/// Log `sessions` out if `err` is the server rejecting our credential.
///
/// Returns `true` when the error was a 401 and an authenticated session was
/// dropped. A 401 while anonymous (a failed login) and every other failure leave
/// the store alone.
pub fn expire_session<S: CredentialStore>(sessions: &mut SessionStore<S>, err: &ApiError) -> bool {
    if !err.is_unauthorized() || !sessions.is_authenticated() {
        return false;
    }
    tracing::warn!("Server rejected the stored credential, logging out");
    sessions.logout();
    true
}

/// [`expire_session`] on the context signal. Only writes when it logs out.
pub fn expire_on_unauthorized(auth: &mut Signal<AppSession>, err: &ApiError) -> bool {
    if !err.is_unauthorized() || !auth.peek().is_authenticated() {
        return false;
    }
    expire_session(&mut *auth.write(), err)
}

/// Await `fetch` only for a signed-in user. Anonymous visitors get `None` and the
/// request is never sent.
pub async fn fetch_if_signed_in<T>(signed_in: bool, fetch: impl Future<Output = T>) -> Option<T> {
    if signed_in {
        Some(fetch.await)
    } else {
        None
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let storage = use_hook(app_storage);

    let sessions = use_signal({
        let storage = storage.clone();
        move || {
            let mut sessions = SessionStore::new(storage);
            sessions.initialize();
            sessions
        }
    });
    use_context_provider(|| sessions);
    use_context_provider(move || ApiBackend::from_config(&config, storage));

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                auth.write().logout();
                on_logout.call(());
            },
            "{label}"
        }
    }
}

/// Name of the logged-in user, or nothing when anonymous.
#[component]
pub fn UserBadge() -> Element {
    let auth = use_auth();
    let sessions = auth.read();

    let Some(session) = sessions.session() else {
        return rsx! {};
    };
    let name = session
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Signed in".to_string());

    rsx! {
        span {
            class: "user-badge",
            "{name}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use store::{Credential, MemoryStore, StorageScope};

    fn rejected() -> ApiError {
        ApiError::Server {
            status: 401,
            message: "Token expired".to_string(),
        }
        .context("Failed to fetch bookings")
    }

    fn signed_in(storage: &MemoryStore) -> SessionStore<MemoryStore> {
        let mut sessions = SessionStore::new(storage.clone());
        sessions.login(Credential::new("tok-1"), None, StorageScope::Durable);
        sessions
    }

    #[test]
    fn test_unauthorized_logs_out_and_clears_storage() {
        let storage = MemoryStore::new();
        let mut sessions = signed_in(&storage);

        assert!(expire_session(&mut sessions, &rejected()));
        assert!(!sessions.is_authenticated());
        assert!(storage.current().is_none());
    }

    #[test]
    fn test_unauthorized_while_anonymous_is_ignored() {
        let storage = MemoryStore::new();
        let mut sessions = SessionStore::new(storage.clone());
        let failed_login = ApiError::Server {
            status: 401,
            message: "Invalid credentials".to_string(),
        }
        .context("Login failed");

        assert!(!expire_session(&mut sessions, &failed_login));
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_other_failures_keep_the_session() {
        let storage = MemoryStore::new();
        let mut sessions = signed_in(&storage);

        for err in [
            ApiError::Server {
                status: 403,
                message: "Forbidden".to_string(),
            },
            ApiError::Server {
                status: 500,
                message: "Internal Server Error".to_string(),
            }
            .context("Booking failed"),
            ApiError::Transport("connection refused".to_string()),
        ] {
            assert!(!expire_session(&mut sessions, &err));
        }

        assert!(sessions.is_authenticated());
        assert!(storage.current().is_some());
    }

    #[tokio::test]
    async fn test_anonymous_fetch_is_never_started() {
        let started = AtomicBool::new(false);

        let result = fetch_if_signed_in(false, async {
            started.store(true, Ordering::SeqCst);
            1
        })
        .await;

        assert_eq!(result, None);
        assert!(!started.load(Ordering::SeqCst));

        let result = fetch_if_signed_in(true, async { 2 }).await;
        assert_eq!(result, Some(2));
    }
}
