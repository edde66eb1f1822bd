//! REST client for the parking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>` so callers can distinguish a
//! transport failure (no usable response) from an application failure (HTTP
//! error status carrying a `message` body). Neither variant panics; the
//! orchestration layer in `sync` turns both into toasts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{BookRequest, HistoryResponse, MutationResponse, ReleaseRequest, StatusResponse};

/// Base path of the backend REST surface.
pub const BASE_PATH: &str = "/api";

/// A failed API call, carrying the text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was obtained or the body could not be decoded.
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a failure status and a display message.
    #[error("{message}")]
    Api { status: u16, message: String },
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{BASE_PATH}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("Request failed ({status})")
}

/// Fetch the full slot list and counters from `GET /api/parking/status`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn fetch_status() -> Result<StatusResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/parking/status"))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_stub())
    }
}

/// Fetch the activity history from `GET /api/parking/history`.
///
/// Entries arrive oldest-to-newest; ordering is a display concern.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn fetch_history() -> Result<HistoryResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/parking/history"))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_stub())
    }
}

/// Book a slot via `POST /api/parking/book`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status (e.g.
/// the slot is occupied or the vehicle is already parked elsewhere).
pub async fn book_slot(request: &BookRequest) -> Result<MutationResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/parking/book"))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(server_stub())
    }
}

/// Release a slot via `POST /api/parking/release`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn release_slot(request: &ReleaseRequest) -> Result<MutationResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/parking/release"))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(server_stub())
    }
}

/// Decode a response body, mapping non-2xx statuses to [`ApiError::Api`]
/// with the server's `message` when one is present.
#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !resp.ok() {
        let message = resp
            .json::<super::types::ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| request_failed_message(status));
        return Err(ApiError::Api { status, message });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}
