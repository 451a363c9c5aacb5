//! Shared HTTP request flow
//!
//! Every endpoint goes through [`HttpUtils::execute_request`]: send, log, read the body,
//! and turn non-2xx answers into a [`RemoteError`]. Endpoint code only builds the
//! `RequestBuilder` and decides how to decode the body.

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{RemoteError, Result};

/// Maximum number of characters of a response body written to the log.
const LOG_BODY_LIMIT: usize = 256;

/// Error body shape used by the backend. Only `message` is consulted.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a request and returns `(status, body)` for 2xx responses.
    ///
    /// # Arguments
    /// * `request_builder` - fully configured request (URL, query, body)
    /// * `method_name` - HTTP verb, for logging
    /// * `path` - request path, for logging
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            log::error!("{method_name} {path} failed: {e}");
            RemoteError::transport(e.to_string())
        })?;

        let status_code = response.status().as_u16();
        log::debug!("{method_name} {path} -> {status_code}");

        let body = response.text().await.map_err(|e| {
            RemoteError::transport(format!("Failed to read response body: {e}"))
        })?;

        if !(200..300).contains(&status_code) {
            let error = RemoteError::from_status(status_code, error_message(status_code, &body));
            if error.is_expected() {
                log::warn!("{method_name} {path} rejected ({status_code}): {}", error.message);
            } else {
                log::error!("{method_name} {path} failed ({status_code}): {}", error.message);
            }
            return Err(error);
        }

        log::debug!("Response Body: {}", truncate_for_log(&body));
        Ok((status_code, body))
    }

    /// Decodes a JSON body.
    pub fn parse_json<T>(status: u16, body: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(body));
            RemoteError::decode(status, e)
        })
    }
}

/// Resolves the message for a non-2xx response.
///
/// Prefers the server's `message` field, then the transport-level description
/// of the status. [`RemoteError`] supplies the generic fallback for blanks.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {status}"))
}

/// Truncates a body so large payloads do not flood the log.
fn truncate_for_log(s: &str) -> String {
    let total = s.chars().count();
    if total <= LOG_BODY_LIMIT {
        s.to_string()
    } else {
        let head: String = s.chars().take(LOG_BODY_LIMIT).collect();
        format!("{head}... [truncated, total {total} chars]")
    }
}
