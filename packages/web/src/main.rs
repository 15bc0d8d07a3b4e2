use api::ClientConfig;
use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, LogoutButton, Navbar, UserBadge};
use views::{
    BookingConfirmation, BookingHistory, BookingPage, Home, Login, NotFound, Register,
    RestaurantPage,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/restaurant/:id")]
        RestaurantPage { id: u64 },
        #[route("/booking/:restaurant_id")]
        BookingPage { restaurant_id: u64 },
        #[route("/booking-confirmation/:id")]
        BookingConfirmation { id: u64 },
        #[route("/booking-history")]
        BookingHistory {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../dineflex.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to production defaults.
fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Navbar around every page.
#[component]
fn Shell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let logged_in = auth.read().is_authenticated();

    rsx! {
        Navbar {
            brand: rsx! {
                Link { to: Route::Home {}, "DineFlex" }
            },
            if logged_in {
                Link { to: Route::BookingHistory {}, "My bookings" }
                UserBadge {}
                LogoutButton {
                    class: "link-button",
                    on_logout: move |_| {
                        nav.replace(Route::Login {});
                    },
                }
            } else {
                Link { to: Route::Login {}, "Login" }
                Link { to: Route::Register {}, "Register" }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
