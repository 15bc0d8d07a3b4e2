//! Booking calls: `POST /bookings` and `GET /bookings`. Both expect a credential.

use store::CredentialStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Booking, BookingRequest};

pub const CREATE_FAILED: &str = "Failed to create booking";
pub const HISTORY_FAILED: &str = "Failed to fetch booking history";

/// Create a booking for the logged-in user.
pub async fn create<S: CredentialStore>(
    http: &HttpClient<S>,
    request: &BookingRequest,
) -> Result<Booking, ApiError> {
    http.post("/bookings", request)
        .await
        .map_err(|e| e.context(CREATE_FAILED))
}

/// Get the logged-in user's booking history.
pub async fn history<S: CredentialStore>(http: &HttpClient<S>) -> Result<Vec<Booking>, ApiError> {
    http.get("/bookings")
        .await
        .map_err(|e| e.context(HISTORY_FAILED))
}
