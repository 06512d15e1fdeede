//! HTTP surface for the admin UI.
//!
//! - `GET  /api/networks` - monitored networks as JSON
//! - `GET  /api/network-delete-modal/{network_id}` - delete confirmation fragment
//! - `POST /networks/{network_id}/delete` - delete action, redirects to the list
//!
//! Everything else falls through to the Dioxus fullstack router.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use dioxus::prelude::*;
use tokio::sync::RwLock;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::app::api::{NetworkEntry, NetworksResponse};
use crate::app::components::DeleteConfirmation;
use crate::app::App;

/// Shared server state
#[derive(Clone, Default)]
pub struct AppState {
    pub networks: Arc<RwLock<Vec<NetworkEntry>>>,
}

impl AppState {
    pub fn new(networks: Vec<NetworkEntry>) -> Self {
        Self {
            networks: Arc::new(RwLock::new(networks)),
        }
    }

    async fn find(&self, network_id: &str) -> Option<NetworkEntry> {
        self.networks
            .read()
            .await
            .iter()
            .find(|n| n.id == network_id)
            .cloned()
    }
}

/// GET /api/networks
pub async fn networks_handler(State(state): State<AppState>) -> impl IntoResponse {
    let networks = state.networks.read().await.clone();
    Json(NetworksResponse { networks })
}

/// GET /api/network-delete-modal/{network_id} - HTML fragment for the delete modal
pub async fn network_delete_modal_handler(
    State(state): State<AppState>,
    Path(network_id): Path<String>,
) -> impl IntoResponse {
    let Some(network) = state.find(&network_id).await else {
        tracing::debug!("Delete modal requested for unknown network {}", network_id);
        return (StatusCode::NOT_FOUND, "Network not found").into_response();
    };

    let html = dioxus::ssr::render_element(rsx! { DeleteConfirmation { network } });
    Html(html).into_response()
}

/// POST /networks/{network_id}/delete
pub async fn network_delete_handler(
    State(state): State<AppState>,
    Path(network_id): Path<String>,
) -> impl IntoResponse {
    let removed = {
        let mut networks = state.networks.write().await;
        let before = networks.len();
        networks.retain(|n| n.id != network_id);
        networks.len() != before
    };

    if !removed {
        return (StatusCode::NOT_FOUND, "Network not found").into_response();
    }

    tracing::info!("Deleted network {}", network_id);
    Redirect::to("/networks").into_response()
}

/// Routes owned by the server (no Dioxus rendering context required).
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/networks", get(networks_handler))
        .route(
            "/api/network-delete-modal/{network_id}",
            get(network_delete_modal_handler),
        )
        .route("/networks/{network_id}/delete", post(network_delete_handler))
        .with_state(state)
}

/// Full application router: API routes, then the Dioxus app, plus middleware.
pub fn app_router(state: AppState) -> Router {
    api_router(state)
        .merge(dioxus::server::router(App))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
