//! In-process `Transport` for tests.
//!
//! Routes are keyed by method and URL path. Each stubbed route answers every
//! matching request with the same status and body, or with a transport
//! failure. Requests without a stub get a 501 so a missing stub never looks
//! like a 404. Every request performed is recorded for later assertions.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Outcome, Transport};

#[derive(Debug, Clone)]
enum Stub {
    Respond { status: u16, body: Vec<u8> },
    Fail,
}

#[derive(Debug, Default)]
struct Inner {
    routes: Mutex<HashMap<(HttpMethod, String), Stub>>,
    requests: Mutex<Vec<HttpRequest>>,
}

/// Cloneable stub; clones share routes and the request log.
#[derive(Debug, Clone, Default)]
pub struct StubTransport {
    inner: Arc<Inner>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `status` and `body`.
    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: impl Into<Vec<u8>>) {
        self.inner.routes.lock().unwrap().insert(
            (method, path.to_string()),
            Stub::Respond {
                status,
                body: body.into(),
            },
        );
    }

    /// Make `method path` fail as if the connection could not be made.
    pub fn fail(&self, method: HttpMethod, path: &str) {
        self.inner
            .routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Stub::Fail);
    }

    /// All requests performed so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.lock().unwrap().clone()
    }
}

fn path_of(url: &str) -> String {
    url::Url::parse(url)
        .map(|parsed| parsed.path().to_string())
        .unwrap_or_else(|_| url.to_string())
}

#[async_trait]
impl Transport for StubTransport {
    async fn perform(&self, request: HttpRequest) -> Outcome {
        let key = (request.method, path_of(&request.url));
        let stub = self.inner.routes.lock().unwrap().get(&key).cloned();
        self.inner.requests.lock().unwrap().push(request);

        match stub {
            Some(Stub::Respond { status, body }) => Ok(HttpResponse { status, body }),
            Some(Stub::Fail) => Err(TransportError::Connection(format!(
                "stubbed failure for {} {}",
                key.0, key.1
            ))),
            None => Ok(HttpResponse::new(501, Vec::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn routes_by_method_and_path() {
        let stub = StubTransport::new();
        stub.respond(HttpMethod::Get, "/todos", 200, "[]");

        let response = stub.perform(get("http://localhost/todos")).await.unwrap();
        assert_eq!(response, HttpResponse::new(200, "[]"));

        let missing = stub.perform(get("http://localhost/todos/1")).await.unwrap();
        assert_eq!(missing.status, 501);
        assert_eq!(stub.requests().len(), 2);
    }

    #[tokio::test]
    async fn failure_stub_returns_transport_error() {
        let stub = StubTransport::new();
        stub.fail(HttpMethod::Get, "/todos");
        let err = stub.perform(get("http://localhost/todos")).await.unwrap_err();
        assert!(matches!(err, TransportError::Connection(_)));
    }
}
