//! Async delays that work in the browser and on the server.

use std::time::Duration;

/// Sleep for `duration` on the browser event loop.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Sleep for `duration` on the tokio runtime.
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// No timer without a runtime; resolves immediately.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
pub async fn sleep(_duration: Duration) {}
