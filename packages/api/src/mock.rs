//! # In-memory fixture backend
//!
//! [`MockBackend`] answers every [`Backend`] call from fixtures so the app can run
//! without the REST API. It follows the same rules the server does, as far as the
//! client can observe them:
//!
//! - Only `user@example.com` / `password123` logs in; it gets [`MOCK_TOKEN`].
//!   Anything else fails with 401 "Invalid credentials".
//! - Registration issues a fresh token unless the email is taken (409).
//! - Restaurants are fixed; unknown ids fail with 404 "Restaurant not found".
//! - Offers are derived from each restaurant's early-bird/last-minute flags.
//! - Bookings live in memory, get sequential ids and are listed in creation order.
//!
//! Errors carry the same action prefixes as the HTTP path. Clones share state.

use std::sync::{Arc, Mutex, PoisonError};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, Booking, BookingRequest, Credential, Offer, OfferKind, OperatingHours,
    RegisterRequest, Restaurant, RestaurantId, UserInfo,
};
use crate::{auth, bookings, offers, restaurants};

pub const MOCK_EMAIL: &str = "user@example.com";
pub const MOCK_PASSWORD: &str = "password123";
pub const MOCK_TOKEN: &str = "mock-token-123";

#[derive(Debug, Default)]
struct MockState {
    accounts: Vec<UserInfo>,
    bookings: Vec<Booking>,
}

/// [`Backend`] serving fixtures from memory.
#[derive(Clone, Debug)]
pub struct MockBackend {
    restaurants: Arc<Vec<Restaurant>>,
    state: Arc<Mutex<MockState>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_restaurants(fixture_restaurants())
    }

    pub fn with_restaurants(restaurants: Vec<Restaurant>) -> Self {
        let state = MockState {
            accounts: vec![mock_user()],
            bookings: Vec::new(),
        };
        Self {
            restaurants: Arc::new(restaurants),
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn find(&self, id: RestaurantId) -> Result<&Restaurant, ApiError> {
        self.restaurants
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| rejected(404, "Restaurant not found"))
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MockState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

fn rejected(status: u16, message: &str) -> ApiError {
    ApiError::Server {
        status,
        message: message.to_string(),
    }
}

impl Backend for MockBackend {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        if email.trim() == MOCK_EMAIL && password == MOCK_PASSWORD {
            Ok(AuthResponse {
                token: Credential::new(MOCK_TOKEN),
                user: Some(mock_user()),
            })
        } else {
            Err(rejected(401, "Invalid credentials").context(auth::LOGIN_FAILED))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let email = request.email.trim().to_lowercase();
        self.with_state(|state| {
            let taken = state
                .accounts
                .iter()
                .any(|u| u.email.as_deref() == Some(email.as_str()));
            if taken {
                return Err(rejected(409, "An account with this email already exists")
                    .context(auth::REGISTRATION_FAILED));
            }
            let user = UserInfo {
                id: Some(format!("user-{}", state.accounts.len() + 1)),
                username: Some(request.username.clone()),
                email: Some(email.clone()),
            };
            state.accounts.push(user.clone());
            Ok(AuthResponse {
                token: Credential::new(format!("{MOCK_TOKEN}-{}", state.accounts.len())),
                user: Some(user),
            })
        })
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        Ok(self.restaurants.as_ref().clone())
    }

    async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, ApiError> {
        self.find(id)
            .cloned()
            .map_err(|e| e.context(restaurants::DETAILS_FAILED))
    }

    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        let restaurant = self
            .find(request.restaurant_id)
            .map_err(|e| e.context(bookings::CREATE_FAILED))?;
        if request.guests == 0 {
            return Err(
                rejected(400, "At least one guest is required").context(bookings::CREATE_FAILED)
            );
        }
        let name = restaurant.name.clone();
        Ok(self.with_state(|state| {
            let booking = Booking {
                id: state.bookings.len() as u64 + 1,
                restaurant_id: request.restaurant_id,
                restaurant_name: Some(name),
                date: request.date.clone(),
                time: request.time.clone(),
                guests: request.guests,
                status: Some("confirmed".to_string()),
            };
            state.bookings.push(booking.clone());
            booking
        }))
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        Ok(self.with_state(|state| state.bookings.clone()))
    }

    async fn list_offers(&self, restaurant_id: RestaurantId) -> Result<Vec<Offer>, ApiError> {
        let restaurant = self
            .find(restaurant_id)
            .map_err(|e| e.context(offers::LIST_FAILED))?;
        let mut list = Vec::new();
        if restaurant.has_early_bird {
            list.push(Offer {
                id: restaurant_id * 10 + 1,
                restaurant_id,
                title: "Early Bird Menu".to_string(),
                description: Some("Two courses before 6:30 PM.".to_string()),
                kind: OfferKind::EarlyBird,
                discount_percent: Some(20),
            });
        }
        if restaurant.has_last_minute {
            list.push(Offer {
                id: restaurant_id * 10 + 2,
                restaurant_id,
                title: "Last Minute Table".to_string(),
                description: Some("Book within two hours of sitting down.".to_string()),
                kind: OfferKind::LastMinute,
                discount_percent: Some(15),
            });
        }
        Ok(list)
    }
}

fn mock_user() -> UserInfo {
    UserInfo {
        id: Some("user-123".to_string()),
        username: Some("demo_user".to_string()),
        email: Some(MOCK_EMAIL.to_string()),
    }
}

fn week(weekday: &str, friday: &str, sunday: &str) -> Vec<OperatingHours> {
    [
        ("Monday", weekday),
        ("Tuesday", weekday),
        ("Wednesday", weekday),
        ("Thursday", weekday),
        ("Friday", friday),
        ("Saturday", friday),
        ("Sunday", sunday),
    ]
    .into_iter()
    .map(|(day, hours)| OperatingHours {
        day: day.to_string(),
        hours: hours.to_string(),
    })
    .collect()
}

fn placeholder_images(color: &str, label: &str) -> Vec<String> {
    (1..=3)
        .map(|n| format!("https://placehold.co/600x400/{color}/white?text={label}+{n}"))
        .collect()
}

/// The fixture restaurants.
pub fn fixture_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: 1,
            name: "The Italian Bistro".to_string(),
            description: Some("A cozy place serving authentic Italian dishes.".to_string()),
            location: Some("1234 Italian St, Rome, Italy".to_string()),
            cuisine: Some("Italian".to_string()),
            phone: Some("(123) 456-7890".to_string()),
            price_range: None,
            images: placeholder_images("orange", "Italian+Restaurant"),
            has_early_bird: true,
            has_last_minute: false,
            owner_id: Some("user-123".to_string()),
            operating_hours: week("10:00 AM - 10:00 PM", "10:00 AM - 11:00 PM", "10:00 AM - 9:00 PM"),
        },
        Restaurant {
            id: 2,
            name: "Harbour Seafood".to_string(),
            description: Some("Fresh catch from the pier, grilled or in chowder.".to_string()),
            location: Some("12 Quay Street, Galway".to_string()),
            cuisine: Some("Seafood".to_string()),
            phone: Some("(091) 555-0142".to_string()),
            price_range: Some("€€€".to_string()),
            images: placeholder_images("1e3a8a", "Harbour+Seafood"),
            has_early_bird: false,
            has_last_minute: true,
            owner_id: None,
            operating_hours: week("12:00 PM - 10:00 PM", "12:00 PM - 11:30 PM", "Closed"),
        },
        Restaurant {
            id: 3,
            name: "Spice Route".to_string(),
            description: Some("Regional Indian cooking with a long vegetarian menu.".to_string()),
            location: Some("48 Camden Street, Dublin".to_string()),
            cuisine: Some("Indian".to_string()),
            phone: None,
            price_range: Some("€€".to_string()),
            images: placeholder_images("b45309", "Spice+Route"),
            has_early_bird: true,
            has_last_minute: true,
            owner_id: None,
            operating_hours: week("5:00 PM - 11:00 PM", "5:00 PM - 12:00 AM", "5:00 PM - 10:00 PM"),
        },
        Restaurant {
            id: 4,
            name: "Green Table".to_string(),
            description: None,
            location: Some("3 Oliver Plunkett Street, Cork".to_string()),
            cuisine: Some("Vegan".to_string()),
            phone: Some("(021) 555-0199".to_string()),
            price_range: Some("€".to_string()),
            images: Vec::new(),
            has_early_bird: false,
            has_last_minute: false,
            owner_id: None,
            operating_hours: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_for(restaurant_id: RestaurantId, guests: u32) -> BookingRequest {
        BookingRequest {
            restaurant_id,
            date: "2025-06-01".to_string(),
            time: "19:30".to_string(),
            guests,
        }
    }

    #[tokio::test]
    async fn test_login_with_fixture_credentials() {
        let backend = MockBackend::new();
        let response = backend.login(MOCK_EMAIL, MOCK_PASSWORD).await.unwrap();
        assert_eq!(response.token.as_str(), MOCK_TOKEN);
        assert_eq!(
            response.user.as_ref().and_then(|u| u.email.as_deref()),
            Some(MOCK_EMAIL)
        );
    }

    #[tokio::test]
    async fn test_login_with_other_credentials_fails() {
        let backend = MockBackend::new();

        let err = backend.login(MOCK_EMAIL, "password124").await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed: Invalid credentials");
        assert_eq!(err.status(), Some(401));

        let err = backend
            .login("someone@example.com", MOCK_PASSWORD)
            .await
            .unwrap_err();
        assert_eq!(err.root_message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_register_rejects_taken_email() {
        let backend = MockBackend::new();
        let request = RegisterRequest {
            username: "new_diner".to_string(),
            email: "New@Example.com".to_string(),
            password: "secret123".to_string(),
        };

        let first = backend.register(&request).await.unwrap();
        assert_ne!(first.token.as_str(), MOCK_TOKEN);
        assert_eq!(
            first.user.as_ref().and_then(|u| u.email.as_deref()),
            Some("new@example.com")
        );

        let err = backend.register(&request).await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().starts_with("Registration failed: "));

        let taken = RegisterRequest {
            email: MOCK_EMAIL.to_string(),
            ..request
        };
        assert!(backend.register(&taken).await.is_err());
    }

    #[tokio::test]
    async fn test_get_restaurant() {
        let backend = MockBackend::new();
        let restaurant = backend.get_restaurant(1).await.unwrap();
        assert_eq!(restaurant.name, "The Italian Bistro");
        assert_eq!(restaurant.images.len(), 3);
        assert_eq!(restaurant.operating_hours.len(), 7);

        let err = backend.get_restaurant(99).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch restaurant details: Restaurant not found"
        );
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_bookings_are_listed_in_creation_order() {
        let backend = MockBackend::new();
        let view = backend.clone();

        let first = backend.create_booking(&booking_for(1, 2)).await.unwrap();
        let second = backend.create_booking(&booking_for(3, 4)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.restaurant_name.as_deref(), Some("Spice Route"));

        let history = view.list_bookings().await.unwrap();
        assert_eq!(history, vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_booking_rejects_bad_requests() {
        let backend = MockBackend::new();

        let err = backend.create_booking(&booking_for(42, 2)).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().starts_with("Failed to create booking: "));

        let err = backend.create_booking(&booking_for(1, 0)).await.unwrap_err();
        assert_eq!(err.status(), Some(400));

        assert!(backend.list_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_offers_follow_restaurant_flags() {
        let backend = MockBackend::new();

        let offers = backend.list_offers(1).await.unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].kind, OfferKind::EarlyBird);

        let offers = backend.list_offers(3).await.unwrap();
        assert_eq!(offers.len(), 2);

        assert!(backend.list_offers(4).await.unwrap().is_empty());
        assert!(backend.list_offers(404).await.is_err());
    }
}
