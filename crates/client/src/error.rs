//! Error taxonomy for the shop API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the shop API.
///
/// Three classes, per call-site contract: transport failure, non-2xx
/// status, and malformed response shape. Callers treat all three the same
/// way - log and surface a static message - so no further structure is
/// carried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    ///
    /// `body` holds the response text for POST/DELETE requests and is empty
    /// for GET requests.
    #[error("{method} {path} failed: {status}{}", body_suffix(.body))]
    Status {
        method: &'static str,
        path: String,
        status: StatusCode,
        body: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" {body}")
    }
}
