//! Shared HTTP plumbing for the live provider clients.

use domainscope_core::{ResearchError, Result};
use serde::de::DeserializeOwned;

/// Default request timeout applied to live provider clients
pub(crate) const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Build the shared reqwest client for a live provider
pub(crate) fn build_client(timeout: std::time::Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("domainscope/", env!("CARGO_PKG_VERSION")))
        .gzip(true)
        .build()
        .unwrap_or_default()
}

/// Map a transport-level reqwest error onto the error taxonomy
pub(crate) fn transport_error(err: &reqwest::Error) -> ResearchError {
    if err.is_timeout() {
        ResearchError::Timeout(DEFAULT_TIMEOUT.as_secs())
    } else if err.is_connect() {
        ResearchError::Connection(err.to_string())
    } else {
        ResearchError::Http(err.to_string())
    }
}

/// Read a JSON body from a provider response, mapping non-2xx statuses
/// onto the error taxonomy
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| ResearchError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(ResearchError::Json)
    } else {
        read_error(status.as_u16(), response).await
    }
}

/// Convert an error response to a `ResearchError`
async fn read_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
    let body = response.text().await.unwrap_or_default();

    // Try to parse an error message from JSON
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.as_str().map(String::from).or_else(|| {
                    e.get("message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                }))
        })
        .unwrap_or(body);

    match status {
        401 | 403 => Err(ResearchError::Unauthorized),
        _ => Err(ResearchError::Api {
            code: status,
            message,
        }),
    }
}
