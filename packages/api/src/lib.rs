//! # API crate — talking to the DineFlex booking service
//!
//! Everything the pages need to fetch or create data lives here, behind the
//! [`Backend`] trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | `HttpClient`: base URL, bearer credential from storage, payload unwrapping, error normalisation |
//! | [`auth`], [`restaurants`], [`bookings`], [`offers`] | One thin function per REST operation, each prefixing failures with the action that failed |
//! | [`backend`] | The `Backend` trait, the network-backed `HttpBackend`, and the composition-time `ApiBackend` enum |
//! | [`mock`] | `MockBackend`, in-memory fixtures |
//! | [`config`] | `dineflex.toml`: base URL and backend selection |
//! | [`models`] | Wire shapes: restaurants, offers, bookings, auth payloads |
//!
//! ## Endpoints
//!
//! - **Auth**: `POST /auth/login`, `POST /auth/register`
//! - **Restaurants**: `GET /restaurants`, `GET /restaurants/{id}`
//! - **Bookings**: `POST /bookings`, `GET /bookings`
//! - **Offers**: `GET /offers?restaurantId={id}`

pub mod auth;
pub mod backend;
pub mod bookings;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod models;
pub mod offers;
pub mod restaurants;

pub use backend::{ApiBackend, Backend, HttpBackend};
pub use config::{ApiConfig, BackendKind, ClientConfig};
pub use error::ApiError;
pub use http::HttpClient;
pub use mock::MockBackend;
pub use models::{
    AuthResponse, Booking, BookingId, BookingRequest, Credential, Offer, OfferKind,
    OperatingHours, RegisterRequest, Restaurant, RestaurantId, UserInfo,
};
