//! Networks page component.
//!
//! Lists monitored networks; each row opens the server-rendered delete
//! confirmation in a modal.

use dioxus::prelude::*;

use crate::app::api::{FetchError, NetworksResponse};
use crate::app::components::{Layout, NetworkDeleteModal};
use crate::app::modal::use_modals;

/// Networks page component.
#[component]
pub fn Networks() -> Element {
    let modals = use_modals();

    let networks = use_resource(|| async {
        crate::app::api::fetch_json::<NetworksResponse>("/api/networks").await
    });

    let body = match &*networks.read() {
        // SSR has no fetch; the client resolves the resource after hydration
        None | Some(Err(FetchError::Unavailable)) => rsx! {
            article { aria_busy: "true", "Loading networks..." }
        },
        Some(Err(e)) => rsx! {
            article { class: "card card-error", "Could not load networks: {e}" }
        },
        Some(Ok(response)) if response.networks.is_empty() => rsx! {
            article { class: "card", "No networks are being monitored." }
        },
        Some(Ok(response)) => {
            let rows = response.networks.iter().map(|network| {
                let network_id = network.id.clone();
                rsx! {
                    tr { key: "{network.id}",
                        td { "{network.name}" }
                        td { class: "mono", "{network.cidr}" }
                        td { class: "text-right",
                            button {
                                r#type: "button",
                                class: "btn btn-danger btn-sm",
                                onclick: move |_| modals.confirm_network_delete(network_id.clone()),
                                "Delete"
                            }
                        }
                    }
                }
            });

            rsx! {
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Range" }
                            th {}
                        }
                    }
                    tbody { {rows} }
                }
            }
        }
    };

    rsx! {
        Layout { title: "Networks".to_string(),
            section {
                p { class: "text-muted", "Networks scanned for devices." }
                {body}
            }
            NetworkDeleteModal {}
        }
    }
}
