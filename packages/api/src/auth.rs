//! Authentication calls: `POST /auth/login` and `POST /auth/register`.
//!
//! These only talk to the server. Persisting the returned credential is the
//! session store's job, so a failed call never touches session state.

use store::CredentialStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Log in with email and password.
pub async fn login<S: CredentialStore>(
    http: &HttpClient<S>,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    let body = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    http.post("/auth/login", &body)
        .await
        .map_err(|e| e.context(LOGIN_FAILED))
}

/// Register a new account.
pub async fn register<S: CredentialStore>(
    http: &HttpClient<S>,
    request: &RegisterRequest,
) -> Result<AuthResponse, ApiError> {
    http.post("/auth/register", request)
        .await
        .map_err(|e| e.context(REGISTRATION_FAILED))
}
