//! The single HTTP exchange with the chat endpoint.
//!
//! Client-side (csr): a real `POST` via `gloo-net`.
//! Native builds (tests, tooling): no transport, every call fails as a
//! network error.
//!
//! ERROR HANDLING
//! ==============
//! Serialization and transport failures both surface as
//! `ExchangeError::Network`; the HTTP status and body are classified by
//! `reply_from_response`.

#![allow(clippy::unused_async)]

use super::types::{ChatRequest, ExchangeError};

/// Send the conversation to `endpoint` and return the assistant's reply text.
///
/// The body is serialized here, at call time, so later changes to the
/// conversation never leak into a request already on the wire. No timeout or
/// retry is applied beyond what the browser's fetch does.
///
/// # Errors
///
/// See [`ExchangeError`].
pub async fn post_chat(endpoint: &str, request: &ChatRequest) -> Result<String, ExchangeError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| ExchangeError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;
        let status = resp.status();
        if !resp.ok() {
            return Err(ExchangeError::Status(status));
        }
        let body = resp.text().await.map_err(|e| ExchangeError::Network(e.to_string()))?;
        super::types::reply_from_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, request);
        Err(ExchangeError::Network("not available outside the browser".to_owned()))
    }
}
