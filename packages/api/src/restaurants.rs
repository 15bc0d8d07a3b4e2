//! Restaurant calls: `GET /restaurants` and `GET /restaurants/{id}`.

use store::CredentialStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Restaurant, RestaurantId};

pub const LIST_FAILED: &str = "Failed to fetch restaurants";
pub const DETAILS_FAILED: &str = "Failed to fetch restaurant details";

/// Get the restaurant list.
pub async fn list<S: CredentialStore>(http: &HttpClient<S>) -> Result<Vec<Restaurant>, ApiError> {
    http.get("/restaurants")
        .await
        .map_err(|e| e.context(LIST_FAILED))
}

/// Get a single restaurant.
pub async fn get<S: CredentialStore>(
    http: &HttpClient<S>,
    id: RestaurantId,
) -> Result<Restaurant, ApiError> {
    http.get(&format!("/restaurants/{id}"))
        .await
        .map_err(|e| e.context(DETAILS_FAILED))
}
