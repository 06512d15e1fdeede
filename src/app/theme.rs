//! Light/dark theme with localStorage persistence.
//!
//! [`ThemeController`] holds the document-facing theme state and owns the
//! preference store; [`ThemeContext`] wraps it in a signal for components and
//! mirrors the state onto `<html data-theme>` in the browser.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::core::{current_scope_id, Runtime, ScopeId};
use dioxus::prelude::*;

/// localStorage key holding the preference
pub const STORAGE_KEY: &str = "theme";

/// Id of the header control that toggles the theme
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything but "light" is dark.
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

/// Which of the sun/moon icons are hidden.
///
/// The sun is shown in dark mode (click for light), the moon in light mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconVisibility {
    pub sun_hidden: bool,
    pub moon_hidden: bool,
}

impl IconVisibility {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                sun_hidden: true,
                moon_hidden: false,
            },
            Theme::Dark => Self {
                sun_hidden: false,
                moon_hidden: true,
            },
        }
    }
}

/// Theme state as reflected into the page.
///
/// `attribute` is the `data-theme` value; `icons` only follow it through
/// [`ThemeController::apply`], so a forced switch leaves them behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub attribute: Theme,
    pub icons: IconVisibility,
}

impl ThemeState {
    fn of(theme: Theme) -> Self {
        Self {
            attribute: theme,
            icons: IconVisibility::for_theme(theme),
        }
    }
}

/// Key/value store backing the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Browser localStorage (empty outside the browser).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    #[cfg(target_arch = "wasm32")]
    fn load(&self, key: &str) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn save(&mut self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&mut self, _key: &str, _value: &str) {}
}

/// In-memory store, used for SSR and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Theme state plus the store it persists to.
#[derive(Clone, Debug)]
pub struct ThemeController<S> {
    state: ThemeState,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Dark, nothing read or written yet.
    pub fn new(store: S) -> Self {
        Self {
            state: ThemeState::of(Theme::default()),
            store,
        }
    }

    /// Read the saved preference (dark when absent) and apply it.
    pub fn init(&mut self) -> Theme {
        let saved = self
            .store
            .load(STORAGE_KEY)
            .map(|v| Theme::parse(&v))
            .unwrap_or_default();
        self.apply(saved);
        saved
    }

    /// Set the attribute, sync the icons and persist.
    pub fn apply(&mut self, theme: Theme) {
        self.state = ThemeState::of(theme);
        self.store.save(STORAGE_KEY, theme.as_str());
    }

    /// Flip the current attribute and apply the result.
    pub fn toggle(&mut self) -> Theme {
        let next = self.state.attribute.flipped();
        self.apply(next);
        next
    }

    /// Flip the attribute only. Icons and the saved preference stay as they were.
    pub fn force_switch(&mut self) -> Theme {
        self.state.attribute = self.state.attribute.flipped();
        self.state.attribute
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Scope of the provider; listeners outside the runtime re-enter here
    scope: ScopeId,
    controller: Signal<ThemeController<LocalStorage>>,
    #[cfg(target_arch = "wasm32")]
    toggle_binding: Signal<Option<super::dom::ClickBinding>>,
}

impl ThemeContext {
    /// Current state (subscribes the caller)
    pub fn state(&self) -> ThemeState {
        self.controller.read().state()
    }

    pub fn current(&self) -> Theme {
        self.state().attribute
    }

    /// Load the saved preference, apply it and wire the toggle control.
    pub fn init(&self) {
        let mut controller = self.controller;
        let theme = controller.write().init();
        tracing::debug!("Theme initialized: {}", theme.as_str());
        self.sync_document();
        self.setup_toggle();
    }

    pub fn apply(&self, theme: Theme) {
        let mut controller = self.controller;
        controller.write().apply(theme);
        self.sync_document();
    }

    pub fn toggle(&self) {
        let mut controller = self.controller;
        controller.write().toggle();
        self.sync_document();
    }

    /// Preview the other theme without saving it.
    pub fn force_switch(&self) {
        let mut controller = self.controller;
        controller.write().force_switch();
        self.sync_document();
    }

    /// Toggle from a DOM listener, which runs without the Dioxus runtime on the stack.
    pub fn toggle_from_listener(&self, runtime: &Rc<Runtime>) {
        runtime.in_scope(self.scope, || self.toggle());
    }

    /// Bind the toggle handler to `#themeToggle`, waiting for it to mount.
    ///
    /// A new binding replaces the previous one.
    pub fn setup_toggle(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let ctx = *self;
            spawn(async move {
                use crate::retry::{retry_lookup, LATE_MOUNT};

                let Some(toggle) = retry_lookup("theme toggle button", &LATE_MOUNT, || {
                    super::dom::html_element_by_id(THEME_TOGGLE_ID)
                })
                .await
                else {
                    return;
                };

                let runtime = Runtime::current();
                let mut slot = ctx.toggle_binding;
                // Clear first so the old binding's drop can't unset the new handler
                slot.set(None);
                slot.set(Some(super::dom::ClickBinding::new(toggle, move || {
                    ctx.toggle_from_listener(&runtime)
                })));
            });
        }
    }

    fn sync_document(&self) {
        #[cfg(target_arch = "wasm32")]
        super::dom::set_document_theme(self.controller.peek().state().attribute.as_str());
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() -> ThemeContext {
    let controller = use_signal(|| ThemeController::new(LocalStorage));

    let ctx = ThemeContext {
        scope: current_scope_id(),
        controller,
        #[cfg(target_arch = "wasm32")]
        toggle_binding: use_signal(|| None),
    };
    use_context_provider(|| ctx);

    // Client-side only: load from localStorage and apply
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || ctx.init());
    }

    ctx
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
