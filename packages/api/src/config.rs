//! # Client configuration — `dineflex.toml`
//!
//! Selects which [`crate::Backend`] the app talks to and where the REST API lives.
//!
//! ```toml
//! [api]
//! base_url = "https://api.dineflex.ie"
//! backend = "http"     # or "mock" for in-memory fixtures
//! ```
//!
//! All fields have defaults, so a missing or empty file is the production setup:
//! the HTTP backend against [`DEFAULT_BASE_URL`].

use serde::{Deserialize, Serialize};

/// Base URL of the DineFlex REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.dineflex.ie";

/// Top-level configuration stored in `dineflex.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// API section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub backend: BackendKind,
}

/// Which backend implementation to compose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Http,
    Mock,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            backend: BackendKind::default(),
        }
    }
}

impl ClientConfig {
    /// Config pointing the HTTP backend at `base_url`.
    pub fn http(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                backend: BackendKind::Http,
            },
        }
    }

    /// Config selecting the in-memory fixtures.
    pub fn mock() -> Self {
        Self {
            api: ApiConfig {
                backend: BackendKind::Mock,
                ..ApiConfig::default()
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dineflex.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
