//! Error type shared by every backend.

use thiserror::Error;

/// A failed API call. Pages show its `Display` text and nothing else.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("{0}")]
    Decode(String),

    /// A failure annotated with the user-facing action that failed.
    #[error("{action}: {source}")]
    Action {
        action: &'static str,
        #[source]
        source: Box<ApiError>,
    },
}

impl ApiError {
    /// Prefix the error with the action that failed, e.g. `"Login failed"`.
    pub fn context(self, action: &'static str) -> Self {
        Self::Action {
            action,
            source: Box::new(self),
        }
    }

    /// HTTP status of the underlying server error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Action { source, .. } => source.status(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// The message without any action prefixes.
    pub fn root_message(&self) -> String {
        match self {
            Self::Action { source, .. } => source.root_message(),
            other => other.to_string(),
        }
    }

    /// The server rejected our credential.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_prefixes_message() {
        let err = ApiError::Server {
            status: 401,
            message: "Invalid credentials".to_string(),
        }
        .context("Login failed");

        assert_eq!(err.to_string(), "Login failed: Invalid credentials");
        assert_eq!(err.root_message(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_transport_errors_have_no_status() {
        let err = ApiError::Transport("connection refused".to_string())
            .context("Failed to fetch restaurants");
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "Failed to fetch restaurants: connection refused"
        );
    }
}
