//! Shared HTTP plumbing for upstream calls.
//!
//! Sends a prepared [`RequestBuilder`], logs the exchange and maps every
//! failure (transport, status, body) onto [`FfStalkError::RetrievalFailure`]
//! with the underlying message preserved.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{FfStalkError, FfStalkResult};
use crate::utils::excerpt::body_excerpt;

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// Send the request and return the response body as text.
    ///
    /// Non-2xx responses are failures; their body is only logged.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        url: &str,
    ) -> FfStalkResult<String> {
        log::debug!("[upstream] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            log::debug!("[upstream] Request failed: {e}");
            FfStalkError::RetrievalFailure(e.to_string())
        })?;

        let status = response.status();
        log::debug!("[upstream] Response Status: {}", status.as_u16());

        if let Err(e) = response.error_for_status_ref().map(|_| ()) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[upstream] HTTP {}: {}", status.as_u16(), body_excerpt(&body));
            return Err(FfStalkError::RetrievalFailure(e.to_string()));
        }

        let text = response.text().await.map_err(|e| {
            FfStalkError::RetrievalFailure(format!("Failed to read response body: {e}"))
        })?;

        log::debug!("[upstream] Response Body: {} bytes", text.len());

        Ok(text)
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> FfStalkResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[upstream] JSON parse failed: {e}");
            log::error!("[upstream] Raw response: {}", body_excerpt(response_text));
            FfStalkError::RetrievalFailure(e.to_string())
        })
    }
}
