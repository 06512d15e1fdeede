//! Settings page component.
//!
//! Appearance settings and build information.

use dioxus::prelude::*;

use crate::app::components::{Layout, ThemePicker};
use crate::app::theme::use_theme;

/// Settings page component.
#[component]
pub fn Settings() -> Element {
    let theme = use_theme();
    let current = theme.current().label();
    let version = env!("RECONYA_VERSION");
    let git_sha = env!("RECONYA_GIT_SHA");

    rsx! {
        Layout { title: "Settings".to_string(),
            section {
                h2 { "Appearance" }
                p { "Current theme: " strong { "{current}" } }
                ThemePicker {}
                p {
                    small { class: "text-muted",
                        "Your choice is saved in this browser. Preview switches the page only."
                    }
                }
            }

            section {
                h2 { "About" }
                table {
                    tbody {
                        tr {
                            td { "Version" }
                            td { class: "mono", "{version}" }
                        }
                        tr {
                            td { "Commit" }
                            td { class: "mono", "{git_sha}" }
                        }
                    }
                }
            }
        }
    }
}
