//! # Identity models shared by the session store and the API client
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Credential`] | The opaque bearer token issued by `POST /auth/login` or `POST /auth/register`. Serialises as a bare string. Its `Debug` output never shows the token. |
//! | [`UserInfo`] | Whatever the server tells us about the logged-in user. Every field is optional because a rehydrated session only has a token. |
//!
//! Both types cross the wire via the `api` crate, which re-exports them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque bearer token identifying a logged-in session.
///
/// Deserialising goes through [`Credential::from_stored`], so a blank token on the
/// wire is an error and surrounding whitespace is dropped.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Parse a stored value. Empty or whitespace-only strings are no credential.
    pub fn from_stored(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

/// A token that was empty or whitespace only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankCredential;

impl fmt::Display for BlankCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("credential is blank")
    }
}

impl std::error::Error for BlankCredential {}

impl TryFrom<String> for Credential {
    type Error = BlankCredential;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_stored(&raw).ok_or(BlankCredential)
    }
}

impl From<Credential> for String {
    fn from(credential: Credential) -> Self {
        credential.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// User information returned alongside a credential.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email, then to "Guest".
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Guest")
    }
}
