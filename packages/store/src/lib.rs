pub mod credential;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use credential::{CredentialStore, StorageScope, TOKEN_KEY};
pub use models::{BlankCredential, Credential, UserInfo};
pub use session::{AuthStatus, Session, SessionStore};
