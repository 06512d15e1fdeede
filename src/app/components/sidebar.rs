//! Collapsible navigation sidebar.

use dioxus::prelude::*;

use crate::app::sidebar::{SidebarState, NAV_DELAY, NAV_ITEMS, NavItem};
use crate::app::Route;
use crate::timer::sleep;

/// One navigation entry.
#[component]
pub fn NavEntry(item: NavItem, active: bool, on_select: EventHandler<&'static str>) -> Element {
    let href = crate::app::sidebar::href_for_page(item.page);
    let page = item.page;

    rsx! {
        li {
            a {
                href: "{href}",
                class: if active { "nav-item active" } else { "nav-item" },
                "data-page": page,
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    evt.stop_propagation();
                    on_select.call(page);
                },
                "{item.label}"
            }
        }
    }
}

/// Sidebar panel. Selecting an entry highlights it, then navigates after [`NAV_DELAY`].
#[component]
pub fn SidebarPanel(state: Signal<SidebarState>) -> Element {
    let navigator = use_navigator();
    let mut state = state;
    let collapsed = state.read().collapsed;

    let select = move |page: &'static str| {
        let href = state.write().select(page);
        spawn(async move {
            sleep(NAV_DELAY).await;
            match href.parse::<Route>() {
                Ok(route) => {
                    navigator.push(route);
                }
                Err(_) => tracing::warn!("No route for {}", href),
            }
        });
    };

    rsx! {
        aside {
            id: "sidebar",
            class: if collapsed { "sidebar collapsed" } else { "sidebar" },
            div { class: "sidebar-brand", strong { "reconYa" } }
            nav {
                ul {
                    for item in NAV_ITEMS.iter().copied() {
                        NavEntry {
                            key: "{item.page}",
                            item,
                            active: state.read().is_active(item.page),
                            on_select: select,
                        }
                    }
                }
            }
        }
    }
}

/// Button flipping the sidebar between collapsed and expanded.
#[component]
pub fn SidebarToggle(state: Signal<SidebarState>) -> Element {
    let mut state = state;
    let collapsed = state.read().collapsed;

    rsx! {
        button {
            id: "sidebarToggle",
            r#type: "button",
            class: "sidebar-toggle",
            title: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                state.write().toggle();
            },
            "\u{2630}"
        }
    }
}
