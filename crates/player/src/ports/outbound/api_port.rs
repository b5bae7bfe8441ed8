//! API Port - Typed HTTP boundary
//!
//! `ApiPort` is generic over request/response types and therefore not
//! object-safe. Adapters implement [`super::RawApiPort`] instead and the
//! application layer wraps it (see `application::api::Api`).

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors produced by the HTTP boundary
///
/// Any non-success status is reported as `HttpError`; the body is kept for
/// logging only and never interpreted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request could not be sent or no response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    /// GET and decode the response body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    /// POST a JSON body, ignoring whatever the server answers with
    async fn post_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>;

    /// PUT a JSON body, ignoring whatever the server answers with
    async fn put_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
