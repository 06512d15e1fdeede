//! Dioxus fullstack application entry point.
//!
//! The root `App` component installs the theme and modal contexts once and
//! hands everything else to the router.

use dioxus::prelude::*;

pub mod api;
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod modal;
pub mod pages;
pub mod sidebar;
pub mod theme;

use modal::use_modal_provider;
use pages::{Dashboard, Networks, Settings};
use theme::use_theme_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Theme: localStorage preference + data-theme attribute
    use_theme_provider();

    // Modal registry shared by every page
    use_modal_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/networks")]
    Networks {},
    #[route("/settings")]
    Settings {},
}
