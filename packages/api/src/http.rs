//! # HTTP client wrapper
//!
//! [`HttpClient`] is the only place that touches the network. Every API call module
//! goes through it, and it does three things around each request:
//!
//! 1. **Credential**: reads the active credential from the [`CredentialStore`] at
//!    request time and sends it as `Authorization: Bearer <token>`. Anonymous
//!    requests carry no `Authorization` header.
//! 2. **Unwrapping**: the API wraps payloads as `{ "data": ... }`. A 2xx body with a
//!    `data` field yields that field; any other body is the payload itself. An empty
//!    body decodes as JSON `null`.
//! 3. **Errors**: a non-2xx response becomes [`ApiError::Server`] carrying the
//!    status and the server's own message (`message` or `error` field, else the raw
//!    text, else the reason phrase). Transport failures become
//!    [`ApiError::Transport`] with reqwest's text.
//!
//! There is one attempt per call: no retry, no backoff, no timeout beyond what the
//! platform imposes.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::CredentialStore;

use crate::error::ApiError;

/// REST client bound to a base URL and a credential source.
#[derive(Clone, Debug)]
pub struct HttpClient<S> {
    client: reqwest::Client,
    base_url: String,
    credentials: S,
}

impl<S: CredentialStore> HttpClient<S> {
    pub fn new(base_url: impl Into<String>, credentials: S) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, credentials)
    }

    /// Use a preconfigured reqwest client.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        credentials: S,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/restaurants/1`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request with the JSON content type and, when logged in, the bearer
    /// credential.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some((_, credential)) = self.credentials.current() {
            builder = builder.header(AUTHORIZATION, credential.bearer());
        }
        builder
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", path);
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        tracing::debug!("GET {} (with query)", path);
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", path);
        self.send(self.json_request(Method::POST, path, body)).await
    }

    /// [`request`](Self::request) with `body` serialised as JSON.
    pub fn json_request<B>(&self, method: Method, path: &str, body: &B) -> RequestBuilder
    where
        B: Serialize + ?Sized,
    {
        self.request(method, path).json(body)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = server_error(status, &body);
            tracing::debug!("Request failed with {}: {}", status, err);
            return Err(err);
        }
        unwrap_payload(&body)
    }
}

/// Decode a 2xx body, stripping the `{ "data": ... }` envelope when present.
pub fn unwrap_payload<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body)?
    };
    let payload = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    Ok(serde_json::from_value(payload)?)
}

/// Build the error for a non-2xx response, keeping the server's message.
pub fn server_error(status: StatusCode, body: &str) -> ApiError {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
    });
    let message = from_json
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
    ApiError::Server {
        status: status.as_u16(),
        message,
    }
}
