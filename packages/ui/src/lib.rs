//! This crate contains all shared UI for the workspace.

use std::time::Duration;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod forms;
pub mod views;

mod auth;
pub use auth::{
    app_storage, expire_on_unauthorized, expire_session, fetch_if_signed_in, use_auth,
    use_backend, AppBackend, AppSession, AppStorage, AuthProvider, LogoutButton, UserBadge,
};

mod delay;
pub use delay::sleep;

mod feedback;
pub use feedback::{ErrorBanner, Spinner, SuccessBanner};

mod gallery;
pub use gallery::ImageGallery;

mod navbar;
pub use navbar::Navbar;

mod pagination;
pub use pagination::{Pager, Pagination, PAGE_SIZE};

mod restaurant_card;
pub use restaurant_card::RestaurantCard;

/// How long the registration success message stays up before redirecting.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);
