//! # Backend — the seam between pages and data
//!
//! Pages never call the network directly. They hold an [`ApiBackend`] from the UI
//! context and call [`Backend`] methods on it. Two implementations exist:
//!
//! | Implementation | Data source |
//! |----------------|-------------|
//! | [`HttpBackend`] | The DineFlex REST API via [`HttpClient`] and the per-resource call modules |
//! | [`MockBackend`] | In-memory fixtures ([`crate::mock`]) |
//!
//! [`ApiBackend::from_config`] picks one from [`ClientConfig`] when the app is
//! composed. Both return the same error messages (`"Login failed: ..."` etc.), so
//! pages cannot tell them apart.

use std::future::Future;

use store::CredentialStore;

use crate::config::{BackendKind, ClientConfig};
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::mock::MockBackend;
use crate::models::{
    AuthResponse, Booking, BookingRequest, Offer, RegisterRequest, Restaurant, RestaurantId,
};
use crate::{auth, bookings, offers, restaurants};

/// Resource fetch/create capability used by the pages.
pub trait Backend {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn list_restaurants(&self) -> impl Future<Output = Result<Vec<Restaurant>, ApiError>>;
    fn get_restaurant(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Restaurant, ApiError>>;
    fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> impl Future<Output = Result<Booking, ApiError>>;
    fn list_bookings(&self) -> impl Future<Output = Result<Vec<Booking>, ApiError>>;
    fn list_offers(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<Offer>, ApiError>>;
}

/// Network-backed [`Backend`].
#[derive(Clone, Debug)]
pub struct HttpBackend<S> {
    http: HttpClient<S>,
}

impl<S: CredentialStore> HttpBackend<S> {
    pub fn new(http: HttpClient<S>) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient<S> {
        &self.http
    }
}

impl<S: CredentialStore> Backend for HttpBackend<S> {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        auth::login(&self.http, email, password).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        auth::register(&self.http, request).await
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        restaurants::list(&self.http).await
    }

    async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, ApiError> {
        restaurants::get(&self.http, id).await
    }

    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        bookings::create(&self.http, request).await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        bookings::history(&self.http).await
    }

    async fn list_offers(&self, restaurant_id: RestaurantId) -> Result<Vec<Offer>, ApiError> {
        offers::list(&self.http, restaurant_id).await
    }
}

/// The backend chosen at composition time.
#[derive(Clone, Debug)]
pub enum ApiBackend<S> {
    Http(HttpBackend<S>),
    Mock(MockBackend),
}

impl<S: CredentialStore> ApiBackend<S> {
    /// Build the backend named by `config`. `credentials` must share state with the
    /// session store so requests see the current login.
    pub fn from_config(config: &ClientConfig, credentials: S) -> Self {
        match config.api.backend {
            BackendKind::Http => {
                tracing::info!("Using HTTP backend at {}", config.api.base_url);
                Self::Http(HttpBackend::new(HttpClient::new(
                    config.api.base_url.clone(),
                    credentials,
                )))
            }
            BackendKind::Mock => {
                tracing::info!("Using mock backend");
                Self::Mock(MockBackend::new())
            }
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Http(_) => BackendKind::Http,
            Self::Mock(_) => BackendKind::Mock,
        }
    }
}

impl<S: CredentialStore> Backend for ApiBackend<S> {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        match self {
            Self::Http(backend) => backend.login(email, password).await,
            Self::Mock(backend) => backend.login(email, password).await,
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        match self {
            Self::Http(backend) => backend.register(request).await,
            Self::Mock(backend) => backend.register(request).await,
        }
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        match self {
            Self::Http(backend) => backend.list_restaurants().await,
            Self::Mock(backend) => backend.list_restaurants().await,
        }
    }

    async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, ApiError> {
        match self {
            Self::Http(backend) => backend.get_restaurant(id).await,
            Self::Mock(backend) => backend.get_restaurant(id).await,
        }
    }

    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        match self {
            Self::Http(backend) => backend.create_booking(request).await,
            Self::Mock(backend) => backend.create_booking(request).await,
        }
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        match self {
            Self::Http(backend) => backend.list_bookings().await,
            Self::Mock(backend) => backend.list_bookings().await,
        }
    }

    async fn list_offers(&self, restaurant_id: RestaurantId) -> Result<Vec<Offer>, ApiError> {
        match self {
            Self::Http(backend) => backend.list_offers(restaurant_id).await,
            Self::Mock(backend) => backend.list_offers(restaurant_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, SessionStore, StorageScope};

    #[test]
    fn test_from_config_selects_backend() {
        let http = ApiBackend::from_config(&ClientConfig::default(), MemoryStore::new());
        assert_eq!(http.kind(), BackendKind::Http);
        match http {
            ApiBackend::Http(backend) => {
                assert_eq!(backend.http().base_url(), "https://api.dineflex.ie")
            }
            ApiBackend::Mock(_) => panic!("expected HTTP backend"),
        }

        let mock = ApiBackend::from_config(&ClientConfig::mock(), MemoryStore::new());
        assert_eq!(mock.kind(), BackendKind::Mock);
    }

    #[tokio::test]
    async fn test_mock_login_flow_authenticates_session() {
        let storage = MemoryStore::new();
        let backend = ApiBackend::from_config(&ClientConfig::mock(), storage.clone());
        let mut sessions = SessionStore::new(storage.clone());

        let response = backend
            .login("user@example.com", "password123")
            .await
            .unwrap();
        sessions.login(response.token, response.user, StorageScope::Durable);

        assert!(sessions.is_authenticated());
        assert_eq!(
            storage.current().map(|(_, c)| c.as_str().to_string()),
            Some(crate::mock::MOCK_TOKEN.to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_anonymous() {
        let storage = MemoryStore::new();
        let backend = ApiBackend::from_config(&ClientConfig::mock(), storage.clone());
        let mut sessions = SessionStore::new(storage.clone());
        sessions.initialize();

        let result = backend.login("user@example.com", "wrong-password").await;
        if let Ok(response) = &result {
            sessions.login(response.token.clone(), response.user.clone(), StorageScope::Tab);
        }

        let err = result.unwrap_err();
        assert_eq!(err.root_message(), "Invalid credentials");
        assert!(!sessions.is_authenticated());
        assert!(storage.current().is_none());
    }

    #[tokio::test]
    async fn test_http_backend_prefixes_errors() {
        // Nothing listens on port 9 of the loopback interface.
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let backend = HttpBackend::new(HttpClient::with_client(
            client,
            "http://127.0.0.1:9",
            MemoryStore::new(),
        ));

        let err = backend.list_restaurants().await.unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to fetch restaurants: "));
        assert!(matches!(err, ApiError::Action { .. }));
    }
}
