//! Client-side API functions for fetching data.
//!
//! Browser builds go through `window.fetch`; SSR builds get stubs that
//! return [`FetchError::Unavailable`] (they should never be called there).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Network Types
// =============================================================================

/// A monitored network as exposed by `/api/networks`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cidr: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworksResponse {
    pub networks: Vec<NetworkEntry>,
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("no browser window")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("fetch is only available in browser")]
    Unavailable,
}

// =============================================================================
// Client-side fetch helpers (for use in effects/resources)
// =============================================================================

/// GET a URL and return the body as text (client-side only).
///
/// Any non-2xx status is an error carrying the status code and text.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Network("Not a Response".to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
        });
    }

    let text = JsFuture::from(resp.text().map_err(|e| FetchError::Body(format!("{:?}", e)))?)
        .await
        .map_err(|e| FetchError::Body(format!("{:?}", e)))?;

    text.as_string()
        .ok_or_else(|| FetchError::Body("body is not a string".to_string()))
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_text(_url: &str) -> Result<String, FetchError> {
    Err(FetchError::Unavailable)
}

/// GET a URL and decode the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = fetch_text(url).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
