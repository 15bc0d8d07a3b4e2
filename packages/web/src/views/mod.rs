use api::ApiError;
use dioxus::prelude::*;
use ui::{expire_on_unauthorized, use_auth};

use crate::Route;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod restaurant;
pub use restaurant::RestaurantPage;

mod booking;
pub use booking::BookingPage;

mod booking_confirmation;
pub use booking_confirmation::BookingConfirmation;

mod booking_history;
pub use booking_history::BookingHistory;

mod not_found;
pub use not_found::NotFound;

/// Send anonymous visitors to the login page. Returns whether the page may render.
pub(crate) fn use_require_auth() -> bool {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if !auth.read().is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    let authenticated = auth.read().is_authenticated();
    authenticated
}

/// Log out and go to the login page when `resource` failed with a 401.
/// Pairs with resources gated by [`ui::fetch_if_signed_in`].
pub(crate) fn use_expire_on_unauthorized<T: 'static>(
    resource: Resource<Option<Result<T, ApiError>>>,
) {
    let mut auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if let Some(Some(Err(err))) = &*resource.read() {
            if expire_on_unauthorized(&mut auth, err) {
                nav.replace(Route::Login {});
            }
        }
    });
}
