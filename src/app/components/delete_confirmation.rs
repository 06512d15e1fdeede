//! Delete confirmation fragment.
//!
//! Rendered on the server by `/api/network-delete-modal/{id}` and injected
//! verbatim into the delete modal, so it carries no component handlers. The
//! cancel button is wired by id once injected; the delete button is a plain
//! form post.

use dioxus::prelude::*;

use crate::app::api::NetworkEntry;
use crate::app::modal::{NETWORK_DELETE_CANCEL_ID, NETWORK_DELETE_MODAL_ID};

#[component]
pub fn DeleteConfirmation(network: NetworkEntry) -> Element {
    let action = format!("/networks/{}/delete", urlencoding::encode(&network.id));

    rsx! {
        div { class: "delete-confirmation",
            h3 { "Delete network" }
            p {
                "Stop monitoring "
                strong { "{network.name}" }
                if !network.cidr.is_empty() {
                    " ({network.cidr})"
                }
                "? Devices discovered on it will no longer be tracked."
            }
            div { class: "modal-actions",
                button {
                    id: NETWORK_DELETE_CANCEL_ID,
                    r#type: "button",
                    class: "btn btn-ghost",
                    "data-modal-dismiss": NETWORK_DELETE_MODAL_ID,
                    "Cancel"
                }
                form { method: "post", action: "{action}",
                    button { r#type: "submit", class: "btn btn-danger", "Delete" }
                }
            }
        }
    }
}
