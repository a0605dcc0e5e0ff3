/// Error types for list fetching and message handling
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a list document could not be fetched
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Neither a window nor a worker scope is available to call `fetch` on
    #[error("no global scope with fetch available")]
    NoGlobalScope,

    /// The request could not be built
    #[error("invalid request for {url}: {reason}")]
    InvalidRequest { url: String, reason: String },

    /// The request was rejected (offline, DNS failure, blocked...)
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// The response body could not be read as text
    #[error("unreadable body from {url}: {reason}")]
    Body { url: String, reason: String },
}

/// Why an inbound runtime message could not be handled
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MessageError {
    #[error("malformed message: {0}")]
    Malformed(String),

    #[error("failed to encode response: {0}")]
    Encode(String),
}

/// Render a thrown JS value for log output
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
