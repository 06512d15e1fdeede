//! Theme toggle and picker components.

use dioxus::prelude::*;

use crate::app::theme::{use_theme, IconVisibility, Theme, THEME_TOGGLE_ID};

/// Sun/moon icon pair.
#[component]
pub fn ThemeIcons(icons: IconVisibility) -> Element {
    rsx! {
        span {
            id: "sunIcon",
            class: if icons.sun_hidden { "theme-icon hidden" } else { "theme-icon" },
            "\u{2600}"
        }
        span {
            id: "moonIcon",
            class: if icons.moon_hidden { "theme-icon hidden" } else { "theme-icon" },
            "\u{263E}"
        }
    }
}

/// Header button that flips light/dark.
///
/// The click handler is bound by the theme context (see
/// [`ThemeContext::setup_toggle`](crate::app::theme::ThemeContext::setup_toggle)),
/// which rebinds whenever this button mounts.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    use_effect(move || theme.setup_toggle());

    let icons = theme.state().icons;

    rsx! {
        button {
            id: THEME_TOGGLE_ID,
            r#type: "button",
            class: "theme-toggle",
            title: "Toggle theme",
            ThemeIcons { icons }
        }
    }
}

/// Explicit light/dark selection plus a non-saving preview, for the settings page.
#[component]
pub fn ThemePicker() -> Element {
    let theme = use_theme();
    let current = theme.current();

    rsx! {
        div { class: "theme-picker",
            for option in [Theme::Light, Theme::Dark] {
                button {
                    r#type: "button",
                    class: if option == current { "btn btn-primary" } else { "btn btn-ghost" },
                    onclick: move |_| theme.apply(option),
                    {option.label()}
                }
            }
            button {
                r#type: "button",
                class: "btn btn-ghost",
                title: "Switch the page theme without saving it",
                onclick: move |_| theme.force_switch(),
                "Preview other theme"
            }
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn light_icons_hide_sun() {
        let html = dioxus::ssr::render_element(rsx! {
            ThemeIcons { icons: IconVisibility::for_theme(Theme::Light) }
        });
        assert!(html.contains(r#"id="sunIcon" class="theme-icon hidden""#));
        assert!(html.contains(r#"id="moonIcon" class="theme-icon""#));
    }

    #[test]
    fn dark_icons_hide_moon() {
        let html = dioxus::ssr::render_element(rsx! {
            ThemeIcons { icons: IconVisibility::for_theme(Theme::Dark) }
        });
        assert!(html.contains(r#"id="sunIcon" class="theme-icon""#));
        assert!(html.contains(r#"id="moonIcon" class="theme-icon hidden""#));
    }
}
