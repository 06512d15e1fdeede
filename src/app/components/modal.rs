//! Modal overlay components.

use dioxus::prelude::*;

use crate::app::modal::{
    use_modals, ModalPhase, NETWORK_DELETE_CONTENT_ID, NETWORK_DELETE_MODAL_ID,
};

/// Modal markup for a given phase. Stateless; see [`Modal`] for the wired version.
#[component]
pub fn ModalFrame(
    id: String,
    phase: ModalPhase,
    /// Called when the backdrop is clicked
    on_dismiss: EventHandler<()>,
    children: Element,
) -> Element {
    let showing = phase.is_showing();
    let display = phase.display();

    rsx! {
        div {
            id: "{id}",
            class: if showing { "modal show" } else { "modal" },
            style: "display: {display}",
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": if phase.is_displayed() { "false" } else { "true" },
            div {
                class: "modal-backdrop",
                onclick: move |_| on_dismiss.call(()),
            }
            div { class: if showing { "modal-content show" } else { "modal-content" },
                {children}
            }
        }
    }
}

/// A modal registered under `id` while mounted; shown and closed through the modal context.
#[component]
pub fn Modal(id: String, children: Element) -> Element {
    let modals = use_modals();

    let register_id = id.clone();
    use_effect(move || modals.register(&register_id));
    let unregister_id = id.clone();
    use_drop(move || modals.unregister(&unregister_id));

    let phase = modals.phase(&id);
    let dismiss_id = id.clone();

    rsx! {
        ModalFrame {
            id,
            phase,
            on_dismiss: move |_| modals.close(&dismiss_id),
            {children}
        }
    }
}

/// Container for the server-rendered delete confirmation.
#[component]
pub fn NetworkDeleteModal() -> Element {
    let modals = use_modals();
    let content = modals.delete_content().unwrap_or_default();

    rsx! {
        Modal { id: NETWORK_DELETE_MODAL_ID.to_string(),
            div {
                id: NETWORK_DELETE_CONTENT_ID,
                dangerous_inner_html: "{content}",
            }
        }
    }
}
