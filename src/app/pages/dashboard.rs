//! Dashboard page component.
//!
//! Short overview of what is being monitored.

use dioxus::prelude::*;

use crate::app::api::NetworksResponse;
use crate::app::components::Layout;
use crate::app::Route;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let networks = use_resource(|| async {
        crate::app::api::fetch_json::<NetworksResponse>("/api/networks")
            .await
            .ok()
    });

    let count = networks
        .read()
        .clone()
        .flatten()
        .map(|r| r.networks.len());

    rsx! {
        Layout { title: "Dashboard".to_string(),
            section { class: "cards",
                article { class: "card",
                    h2 { "Networks" }
                    if let Some(n) = count {
                        p { class: "stat", "{n}" }
                    } else {
                        p { aria_busy: "true", "Loading..." }
                    }
                    Link { to: Route::Networks {}, "Manage networks" }
                }
            }
        }
    }
}
