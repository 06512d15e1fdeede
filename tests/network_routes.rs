#![cfg(feature = "server")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Network Route Tests
//!
//! Drives the server-owned routes the admin UI talks to:
//! - GET  /api/networks
//! - GET  /api/network-delete-modal/{network_id}
//! - POST /networks/{network_id}/delete
//!
//! Run with: cargo test --test network_routes

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use reconya_web::app::api::NetworkEntry;
use reconya_web::server::{api_router, AppState};

fn seeded_state() -> AppState {
    AppState::new(vec![
        NetworkEntry {
            id: "lan".to_string(),
            name: "Office LAN".to_string(),
            cidr: "192.168.1.0/24".to_string(),
        },
        NetworkEntry {
            id: "lab net".to_string(),
            name: "Lab <5GHz>".to_string(),
            cidr: String::new(),
        },
    ])
}

/// Helper to make a request and return status, headers and body as string
async fn send(
    app: &Router,
    method: Method,
    path: &str,
) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, headers, String::from_utf8_lossy(&body).to_string())
}

#[tokio::test]
async fn test_networks_listing_returns_seeded_entries() {
    let app = api_router(seeded_state());

    let (status, headers, body) = send(&app, Method::GET, "/api/networks").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json")));

    let json: Value = serde_json::from_str(&body).unwrap();
    let networks = json["networks"].as_array().expect("networks array");
    assert_eq!(networks.len(), 2);
    assert_eq!(networks[0]["id"], "lan");
    assert_eq!(networks[0]["cidr"], "192.168.1.0/24");
}

#[tokio::test]
async fn test_delete_modal_fragment_for_known_network() {
    let app = api_router(seeded_state());

    let (status, headers, body) =
        send(&app, Method::GET, "/api/network-delete-modal/lan").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));
    assert!(body.contains("Office LAN"));
    assert!(body.contains("192.168.1.0/24"));
    assert!(body.contains(r#"id="network-delete-cancel""#));
    assert!(body.contains(r#"action="/networks/lan/delete""#));
    assert!(
        !body.contains("<html"),
        "fragment must not be a full document"
    );
}

#[tokio::test]
async fn test_delete_modal_fragment_decodes_and_escapes() {
    let app = api_router(seeded_state());

    let (status, _, body) =
        send(&app, Method::GET, "/api/network-delete-modal/lab%20net").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Lab &lt;5GHz&gt;"));
    assert!(body.contains(r#"action="/networks/lab%20net/delete""#));
}

#[tokio::test]
async fn test_delete_modal_fragment_unknown_network_is_404() {
    let app = api_router(seeded_state());

    let (status, _, body) =
        send(&app, Method::GET, "/api/network-delete-modal/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Network not found");
}

#[tokio::test]
async fn test_delete_action_removes_network_and_redirects() {
    let state = seeded_state();
    let app = api_router(state.clone());

    let (status, headers, _) = send(&app, Method::POST, "/networks/lan/delete").await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        headers.get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/networks")
    );

    let remaining: Vec<String> = state
        .networks
        .read()
        .await
        .iter()
        .map(|n| n.id.clone())
        .collect();
    assert_eq!(remaining, vec!["lab net".to_string()]);

    // The fragment is gone with it
    let (status, _, _) = send(&app, Method::GET, "/api/network-delete-modal/lan").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_action_unknown_network_is_404() {
    let state = seeded_state();
    let app = api_router(state.clone());

    let (status, _, _) = send(&app, Method::POST, "/networks/missing/delete").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(state.networks.read().await.len(), 2);
}

#[tokio::test]
async fn test_delete_action_rejects_get() {
    let app = api_router(seeded_state());

    let (status, _, _) = send(&app, Method::GET, "/networks/lan/delete").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
