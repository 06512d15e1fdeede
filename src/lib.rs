//! Reconya admin web UI.
//!
//! Dioxus fullstack front end for the network reconnaissance dashboard:
//! - Modal controller with server-rendered delete confirmations
//! - Collapsible sidebar with active-page highlighting
//! - Persisted light/dark theme
//! - axum server hosting the fragment and network endpoints

pub mod app;
pub mod retry;
pub mod timer;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
