//! Error types for the todo API client.
//!
//! # Design
//! `TodoApiError` is the only error callers of an operation ever see. It is a
//! closed set: `Network` when no response arrived, `ItemNotFound` for 404,
//! `Unknown` carrying the raw status otherwise.
//! `TransportError` stays on the transport side of the seam and is folded into
//! `Network` by the response mapper. `RequestError` is what a `build_*` method
//! reports when it cannot produce a request; the client folds it into a
//! `TodoApiError` without sending anything. `ConfigError` is returned only
//! while constructing a client.

use thiserror::Error;

/// Errors delivered by `TodoApiClient` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoApiError {
    /// No response was received: connection refused, DNS failure, timeout,
    /// or a request body that could not be encoded.
    #[error("network error: no response received")]
    Network,

    /// The server returned 404.
    #[error("item not found")]
    ItemNotFound,

    /// Any other non-success status, or a success status whose body could
    /// not be decoded into the expected shape.
    #[error("unknown error (HTTP {code})")]
    Unknown { code: u16 },
}

pub type Result<T> = std::result::Result<T, TodoApiError>;

/// Failure reported by a `Transport` when no HTTP response was obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("connection failed: {0}")]
    Connection(String),
}

/// Failure to build a request. Nothing has been sent when this is returned.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The id would not survive as a single URL path segment: `""`, `"."` and
    /// `".."` are removed or resolved by URL normalization.
    #[error("task id {0:?} cannot be used as a URL path segment")]
    UnaddressableId(String),
}

/// Errors raised while building a client from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load client configuration: {0}")]
    Extract(#[from] figment::Error),

    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
