//! Modal dialogs and the network delete confirmation flow.
//!
//! Every mounted [`Modal`](crate::app::components::Modal) registers under its
//! id. Showing or closing runs through a small phase machine so the CSS
//! enter/exit transitions get a frame to start; each transition bumps an
//! epoch, and a delayed step only lands if no newer transition happened.

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::{current_scope_id, Runtime, ScopeId};
use dioxus::prelude::*;
use thiserror::Error;

use crate::app::api::FetchError;
use crate::timer::sleep;

/// Delay between display and the `show` class (lets the enter transition run)
pub const SHOW_DELAY: Duration = Duration::from_millis(10);

/// Delay between dropping `show` and hiding (lets the exit transition finish)
pub const HIDE_DELAY: Duration = Duration::from_millis(200);

pub const NETWORK_DELETE_MODAL_ID: &str = "networkDeleteModal";
pub const NETWORK_DELETE_CONTENT_ID: &str = "network-delete-modal-content";
/// Cancel button inside the server-rendered confirmation fragment
pub const NETWORK_DELETE_CANCEL_ID: &str = "network-delete-cancel";

pub const DELETE_LOAD_FAILED: &str = "Failed to load delete confirmation. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Hidden,
    /// Displayed, `show` not applied yet
    Entering,
    /// Displayed with `show` on the root and content
    Shown,
    /// `show` removed, still displayed until the exit transition ends
    Leaving,
}

impl ModalPhase {
    pub fn is_displayed(self) -> bool {
        self != ModalPhase::Hidden
    }

    pub fn is_showing(self) -> bool {
        self == ModalPhase::Shown
    }

    /// Inline `display` value
    pub fn display(self) -> &'static str {
        if self.is_displayed() {
            "flex"
        } else {
            "none"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ModalState {
    pub phase: ModalPhase,
    epoch: u64,
}

/// Mounted modals by id.
#[derive(Clone, Debug, Default)]
pub struct ModalRegistry {
    modals: HashMap<String, ModalState>,
}

impl ModalRegistry {
    pub fn register(&mut self, id: &str) {
        self.modals.entry(id.to_string()).or_default();
    }

    pub fn unregister(&mut self, id: &str) {
        self.modals.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modals.contains_key(id)
    }

    pub fn phase(&self, id: &str) -> Option<ModalPhase> {
        self.modals.get(id).map(|m| m.phase)
    }

    /// Display the modal. Returns the epoch to hand to [`Self::finish_show`],
    /// or `None` when no such modal is mounted.
    pub fn begin_show(&mut self, id: &str) -> Option<u64> {
        let modal = self.modals.get_mut(id)?;
        modal.epoch += 1;
        modal.phase = ModalPhase::Entering;
        Some(modal.epoch)
    }

    /// Apply `show`. False if a newer transition superseded this one.
    pub fn finish_show(&mut self, id: &str, epoch: u64) -> bool {
        match self.modals.get_mut(id) {
            Some(modal) if modal.epoch == epoch && modal.phase == ModalPhase::Entering => {
                modal.phase = ModalPhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Drop `show`, keeping the modal displayed for the exit transition.
    pub fn begin_close(&mut self, id: &str) -> Option<u64> {
        let modal = self.modals.get_mut(id)?;
        modal.epoch += 1;
        if modal.phase.is_displayed() {
            modal.phase = ModalPhase::Leaving;
        }
        Some(modal.epoch)
    }

    /// Hide. False if a newer transition superseded this one.
    pub fn finish_close(&mut self, id: &str, epoch: u64) -> bool {
        match self.modals.get_mut(id) {
            Some(modal) if modal.epoch == epoch => {
                modal.phase = ModalPhase::Hidden;
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Delete confirmation flow
// =============================================================================

#[derive(Debug, Error)]
pub enum DeleteModalError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("modal content element not found")]
    ContainerMissing,
}

/// Source of server-rendered markup.
#[async_trait(?Send)]
pub trait FragmentClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Browser fetch.
pub struct BrowserClient;

#[async_trait(?Send)]
impl FragmentClient for BrowserClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        crate::app::api::fetch_text(url).await
    }
}

/// Blocking user-facing notification.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert` in the browser, a log line elsewhere.
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        super::dom::alert(message);
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("alert: {}", message);
    }
}

/// Where the confirmation markup goes.
pub trait DeleteModalHost {
    /// Put `html` in the confirmation container. False if it isn't mounted.
    fn inject(&self, html: String) -> bool;
    fn open(&self);
}

pub fn delete_modal_url(network_id: &str) -> String {
    format!(
        "/api/network-delete-modal/{}",
        urlencoding::encode(network_id)
    )
}

/// Fetch the delete confirmation for `network_id` and open it.
///
/// Failures are logged and surfaced through one alert; nothing is injected
/// and the modal stays closed.
pub async fn confirm_network_delete<C, N, H>(client: &C, notifier: &N, host: &H, network_id: &str)
where
    C: FragmentClient + ?Sized,
    N: Notifier + ?Sized,
    H: DeleteModalHost + ?Sized,
{
    let url = delete_modal_url(network_id);
    let error = match client.get_text(&url).await {
        Ok(html) => {
            tracing::info!("Network delete modal HTML received");
            if host.inject(html) {
                host.open();
                return;
            }
            DeleteModalError::ContainerMissing
        }
        Err(e) => e.into(),
    };

    tracing::error!("Failed to load network delete modal for {}: {}", network_id, error);
    notifier.alert(DELETE_LOAD_FAILED);
}

// =============================================================================
// Context
// =============================================================================

/// Global modal state shared via context
#[derive(Clone, Copy)]
pub struct ModalContext {
    /// Scope of the provider; listeners outside the runtime re-enter here
    scope: ScopeId,
    registry: Signal<ModalRegistry>,
    /// Markup for the delete confirmation container
    delete_content: Signal<Option<String>>,
    #[cfg(target_arch = "wasm32")]
    dismiss_binding: Signal<Option<super::dom::ClickBinding>>,
}

impl ModalContext {
    pub fn phase(&self, id: &str) -> ModalPhase {
        self.registry.read().phase(id).unwrap_or_default()
    }

    pub fn delete_content(&self) -> Option<String> {
        self.delete_content.read().clone()
    }

    pub fn register(&self, id: &str) {
        let mut registry = self.registry;
        registry.write().register(id);
    }

    /// Drop a modal from the registry. Unmounting the delete modal also drops
    /// its injected markup, so a later mount starts empty.
    pub fn unregister(&self, id: &str) {
        let mut registry = self.registry;
        registry.write().unregister(id);
        if id == NETWORK_DELETE_MODAL_ID {
            self.clear_delete_content();
        }
    }

    /// Show a modal by id. Unknown ids are ignored.
    pub fn show(&self, id: &str) {
        let mut registry = self.registry;
        let Some(epoch) = registry.write().begin_show(id) else {
            tracing::debug!("show_modal: no modal mounted as {}", id);
            return;
        };

        let id = id.to_string();
        spawn(async move {
            sleep(SHOW_DELAY).await;
            registry.write().finish_show(&id, epoch);
        });
    }

    /// Close a modal by id. Unknown ids are ignored.
    pub fn close(&self, id: &str) {
        let mut registry = self.registry;
        let Some(epoch) = registry.write().begin_close(id) else {
            tracing::debug!("close_modal: no modal mounted as {}", id);
            return;
        };

        let ctx = *self;
        let id = id.to_string();
        spawn(async move {
            sleep(HIDE_DELAY).await;
            if registry.write().finish_close(&id, epoch) && id == NETWORK_DELETE_MODAL_ID {
                ctx.clear_delete_content();
            }
        });
    }

    /// Fetch and open the delete confirmation for a network (fire-and-forget).
    pub fn confirm_network_delete(&self, network_id: String) {
        let ctx = *self;
        spawn(async move {
            confirm_network_delete(&BrowserClient, &BrowserNotifier, &ctx, &network_id).await;
        });
    }

    /// Close the delete modal from a DOM listener.
    ///
    /// Raw `web_sys` callbacks run without the Dioxus runtime on the stack, and
    /// [`Self::close`] spawns; `runtime` must be captured while it was current.
    pub fn dismiss_from_listener(&self, runtime: &Rc<Runtime>) {
        runtime.in_scope(self.scope, || self.close(NETWORK_DELETE_MODAL_ID));
    }

    fn clear_delete_content(&self) {
        let mut content = self.delete_content;
        content.set(None);
        #[cfg(target_arch = "wasm32")]
        {
            let mut binding = self.dismiss_binding;
            binding.set(None);
        }
    }

    /// Injected markup has no component handlers; wire its cancel button once it renders.
    #[cfg(target_arch = "wasm32")]
    fn bind_dismiss(&self) {
        let ctx = *self;
        spawn(async move {
            use crate::retry::{retry_lookup, LATE_MOUNT};

            let Some(cancel) = retry_lookup("delete confirmation cancel button", &LATE_MOUNT, || {
                super::dom::html_element_by_id(NETWORK_DELETE_CANCEL_ID)
            })
            .await
            else {
                return;
            };

            let runtime = Runtime::current();
            let mut slot = ctx.dismiss_binding;
            slot.set(None);
            slot.set(Some(super::dom::ClickBinding::new(cancel, move || {
                ctx.dismiss_from_listener(&runtime)
            })));
        });
    }
}

impl DeleteModalHost for ModalContext {
    fn inject(&self, html: String) -> bool {
        if !self.registry.peek().contains(NETWORK_DELETE_MODAL_ID) {
            return false;
        }
        let mut content = self.delete_content;
        content.set(Some(html));
        #[cfg(target_arch = "wasm32")]
        self.bind_dismiss();
        true
    }

    fn open(&self) {
        self.show(NETWORK_DELETE_MODAL_ID);
    }
}

/// Initialize modal context provider - call once at app root
pub fn use_modal_provider() -> ModalContext {
    let ctx = ModalContext {
        scope: current_scope_id(),
        registry: use_signal(ModalRegistry::default),
        delete_content: use_signal(|| None),
        #[cfg(target_arch = "wasm32")]
        dismiss_binding: use_signal(|| None),
    };
    use_context_provider(|| ctx)
}

/// Get modal context - use in any component
pub fn use_modals() -> ModalContext {
    use_context::<ModalContext>()
}
