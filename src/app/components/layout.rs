//! Layout component wrapping all pages: sidebar, header and main content.

use dioxus::prelude::*;

use super::sidebar::{SidebarPanel, SidebarToggle};
use super::theme::ThemeToggle;
use crate::app::sidebar::use_sidebar;
use crate::app::Route;

const MAIN_CSS: Asset = asset!("/public/main.css");

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab and header)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
///
/// Each page mounts its own layout, so sidebar state starts over on every
/// navigation.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("RECONYA_VERSION");
    let git_sha = env!("RECONYA_GIT_SHA");
    let full_title = format!("{} - reconYa", props.title);

    let route = use_route::<Route>();
    let sidebar = use_sidebar(&route.to_string());
    let margin = sidebar.read().main_margin();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SidebarPanel { state: sidebar }
        div {
            id: "main-content",
            class: "main-content",
            style: "margin-left: {margin}",
            header { class: "topbar",
                SidebarToggle { state: sidebar }
                h1 { class: "topbar-title", "{props.title}" }
                ThemeToggle {}
            }
            main { class: "page",
                {props.children}
            }
            footer { class: "page-footer",
                small { class: "text-muted", "reconYa v{version} ({git_sha})" }
            }
        }
    }
}
