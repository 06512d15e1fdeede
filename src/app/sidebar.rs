//! Collapsible navigation sidebar state.

use std::time::Duration;

use dioxus::prelude::*;

/// Pause between marking an entry active and navigating, so the highlight renders
pub const NAV_DELAY: Duration = Duration::from_millis(100);

/// Main content margin next to the expanded sidebar
pub const EXPANDED_MARGIN: &str = "16rem";
pub const COLLAPSED_MARGIN: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Logical page id, rendered as `data-page`
    pub page: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        page: "home",
        label: "Dashboard",
    },
    NavItem {
        page: "networks",
        label: "Networks",
    },
    NavItem {
        page: "settings",
        label: "Settings",
    },
];

/// `/` is "home"; anything else is the path without its leading slash.
pub fn page_for_path(path: &str) -> &str {
    if path == "/" {
        "home"
    } else {
        path.strip_prefix('/').unwrap_or(path)
    }
}

/// Inverse of [`page_for_path`].
pub fn href_for_page(page: &str) -> String {
    if page == "home" {
        "/".to_string()
    } else {
        format!("/{}", page)
    }
}

/// Sidebar state for one page load. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub collapsed: bool,
    active: Option<String>,
}

impl SidebarState {
    /// Expanded, with the entry matching `path` (if any) active.
    pub fn for_path(path: &str, items: &[NavItem]) -> Self {
        let page = page_for_path(path);
        let active = items
            .iter()
            .find(|item| item.page == page)
            .map(|item| item.page.to_string());

        Self {
            collapsed: false,
            active,
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    pub fn main_margin(&self) -> &'static str {
        if self.collapsed {
            COLLAPSED_MARGIN
        } else {
            EXPANDED_MARGIN
        }
    }

    pub fn is_active(&self, page: &str) -> bool {
        self.active.as_deref() == Some(page)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Mark `page` as the only active entry and return where to navigate.
    pub fn select(&mut self, page: &str) -> String {
        self.active = Some(page.to_string());
        href_for_page(page)
    }
}

/// Sidebar state for the current mount, derived from the URL path.
pub fn use_sidebar(path: &str) -> Signal<SidebarState> {
    let path = path.to_string();
    use_signal(move || SidebarState::for_path(&path, NAV_ITEMS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_home() {
        assert_eq!(page_for_path("/"), "home");
        assert_eq!(page_for_path("/networks"), "networks");
        assert_eq!(page_for_path("/networks/lan"), "networks/lan");
    }

    #[test]
    fn hrefs_map_home_to_root() {
        assert_eq!(href_for_page("home"), "/");
        assert_eq!(href_for_page("settings"), "/settings");
    }

    #[test]
    fn networks_path_marks_only_networks_active() {
        let state = SidebarState::for_path("/networks", NAV_ITEMS);

        assert!(state.is_active("networks"));
        for item in NAV_ITEMS.iter().filter(|i| i.page != "networks") {
            assert!(!state.is_active(item.page), "{} should be inactive", item.page);
        }
    }

    #[test]
    fn unknown_path_marks_nothing_active() {
        let state = SidebarState::for_path("/reports", NAV_ITEMS);
        assert_eq!(state.active(), None);
    }

    #[test]
    fn load_starts_expanded() {
        let state = SidebarState::for_path("/", NAV_ITEMS);
        assert!(!state.collapsed);
        assert_eq!(state.main_margin(), EXPANDED_MARGIN);
        assert!(state.is_active("home"));
    }

    #[test]
    fn toggle_twice_restores_state_and_margin() {
        let mut state = SidebarState::for_path("/networks", NAV_ITEMS);
        let original = state.clone();

        assert!(state.toggle());
        assert_eq!(state.main_margin(), COLLAPSED_MARGIN);
        assert!(!state.toggle());

        assert_eq!(state, original);
        assert_eq!(state.main_margin(), EXPANDED_MARGIN);
    }

    #[test]
    fn select_moves_active_marker() {
        let mut state = SidebarState::for_path("/", NAV_ITEMS);

        assert_eq!(state.select("settings"), "/settings");
        assert!(state.is_active("settings"));
        assert!(!state.is_active("home"));

        assert_eq!(state.select("home"), "/");
        assert!(state.is_active("home"));
    }
}
