//! Offer calls: `GET /offers?restaurantId={id}`.

use store::CredentialStore;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Offer, RestaurantId};

pub const LIST_FAILED: &str = "Failed to fetch offers";

/// Get the offers of one restaurant.
pub async fn list<S: CredentialStore>(
    http: &HttpClient<S>,
    restaurant_id: RestaurantId,
) -> Result<Vec<Offer>, ApiError> {
    http.get_with_query("/offers", &[("restaurantId", restaurant_id)])
        .await
        .map_err(|e| e.context(LIST_FAILED))
}
