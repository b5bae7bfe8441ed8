//! HTTP adapter for the location collection
//!
//! `ApiAdapter` implements `RawApiPort` with `reqwest` on desktop and
//! `gloo-net` (browser `fetch`) on wasm. Paths passed in are appended to the
//! configured base URL verbatim, query string included.
//!
//! No timeout is configured: a hung request only stalls the task awaiting it.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a response body, treating an empty body as JSON `null`
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::ParseError(e.to_string()))
}

// =============================================================================
// Desktop (reqwest)
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
async fn read_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
    if !status.is_success() {
        return Err(ApiError::HttpError {
            status: status.as_u16(),
            message: text,
        });
    }
    Ok(text)
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        parse_body(&read_body(response).await?)
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_body(response).await.map(|_| ())
    }

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_body(response).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_body(response).await.map(|_| ())
    }
}

// =============================================================================
// WASM (gloo-net)
// =============================================================================

#[cfg(target_arch = "wasm32")]
async fn read_body(response: gloo_net::http::Response) -> Result<String, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::HttpError {
            status: response.status(),
            message: text,
        });
    }
    Ok(text)
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = gloo_net::http::Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        parse_body(&read_body(response).await?)
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        let response = gloo_net::http::Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_body(response).await.map(|_| ())
    }

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        let response = gloo_net::http::Request::put(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_body(response).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = gloo_net::http::Request::delete(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_body(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let adapter = ApiAdapter::new("https://example.test/");
        assert_eq!(adapter.url("/lokasi?id=1"), "https://example.test/lokasi?id=1");
    }

    #[test]
    fn empty_body_parses_as_null() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("  \n").unwrap(), Value::Null);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(parse_body("<html>"), Err(ApiError::ParseError(_))));
    }
}
