use serde::{Deserialize, Serialize};
use store::{Credential, UserInfo};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Credential-bearing result of login and registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: Credential,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::unwrap_payload;

    #[test]
    fn test_auth_response_trims_token() {
        let response: AuthResponse =
            unwrap_payload(r#"{"data": {"token": " tok-1 ", "user": {"username": "diner"}}}"#)
                .unwrap();
        assert_eq!(response.token.as_str(), "tok-1");
        assert_eq!(
            response.user.as_ref().map(UserInfo::display_name),
            Some("diner")
        );
    }

    #[test]
    fn test_blank_token_is_a_decode_error() {
        let err = unwrap_payload::<AuthResponse>(r#"{"token": ""}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = unwrap_payload::<AuthResponse>(r#"{"token": "   "}"#)
            .unwrap_err()
            .context("Login failed");
        assert!(err.to_string().starts_with("Login failed: "));
    }
}
