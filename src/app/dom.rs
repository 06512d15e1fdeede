//! Thin `web_sys` helpers for the few places that touch the document directly.
//!
//! Everything here is browser-only; the module is compiled for wasm32 only.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Look up an element by id.
pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Set `data-theme` on the document element.
pub fn set_document_theme(theme: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

/// Blocking user-facing alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// A click handler installed on an element outside the component tree.
///
/// Uses the element's `onclick` slot, so installing a new binding replaces
/// the previous one instead of stacking listeners. Dropping the binding
/// clears the slot and releases the closure.
pub struct ClickBinding {
    element: HtmlElement,
    _onclick: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl ClickBinding {
    pub fn new(element: HtmlElement, mut handler: impl FnMut() + 'static) -> Self {
        let onclick = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            handler();
        }) as Box<dyn FnMut(_)>);
        element.set_onclick(Some(onclick.as_ref().unchecked_ref()));

        Self {
            element,
            _onclick: onclick,
        }
    }
}

impl Drop for ClickBinding {
    fn drop(&mut self) {
        self.element.set_onclick(None);
    }
}
