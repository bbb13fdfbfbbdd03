//! Async API client for the todo service.
//!
//! # Overview
//! Lists, fetches, creates, updates and deletes tasks over a JSON REST API
//! and reports every outcome as `Result<T, TodoApiError>`. Callers never see
//! transport errors: a missing response is `Network`, a 404 is
//! `ItemNotFound`, and any other failure status is `Unknown { code }`.
//!
//! # Design
//! - `TodoApiClient` holds only a base URL and a `Transport`; it is cheap to
//!   clone and safe to share.
//! - Each operation is `build_*` (a plain `HttpRequest`), then
//!   `Transport::perform`, then [`mapper::map_outcome`], which is the single
//!   place that turns a status and body into a result. A request that cannot
//!   be built is never sent and goes through [`mapper::map_request_error`].
//! - The base URL is parsed when the client is constructed, so a malformed one
//!   is a `ConfigError` rather than a `Network` error on every call.
//! - `ReqwestTransport` is the production transport. `stub::StubTransport`
//!   (behind the `test-utils` feature) answers from an in-memory route table.
//! - `spawn_*` methods deliver results through a completion callback instead
//!   of a future.

pub mod callback;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod mapper;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod stub;

pub use client::TodoApiClient;
pub use config::ClientConfig;
pub use error::{ConfigError, RequestError, Result, TodoApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Outcome, ReqwestTransport, Transport};
pub use types::{NewTask, Task};
