//! Data transfer shapes defined by the DineFlex REST API.
//!
//! Field names follow the wire format (camelCase). These records are read-only for
//! the client: no validation or derived invariants beyond display fallbacks.

mod auth;
mod booking;
mod offer;
mod restaurant;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use booking::{Booking, BookingId, BookingRequest};
pub use offer::{Offer, OfferId, OfferKind};
pub use restaurant::{OperatingHours, Restaurant, RestaurantId};
pub use store::{Credential, UserInfo};
