//! Request builders and async operations for the todo API.
//!
//! # Design
//! `TodoApiClient` holds a parsed base URL and a transport and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and an async method that sends it
//! through the transport and runs the outcome through [`map_outcome`]. The
//! builders stay public so the exact bytes that go on the wire can be
//! inspected.
//!
//! Task ids are opaque strings. Each one fills exactly one path segment and is
//! percent-encoded there, so `/`, `?` or `#` in an id never reach another
//! resource.

use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ConfigError, RequestError, Result};
use crate::http::{HttpMethod, HttpRequest, ReqwestTransport, Transport};
use crate::mapper::{map_outcome, map_request_error, ResponseBody};
use crate::types::{NewTask, Task};

const JSON: &str = "application/json";

/// Async client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoApiClient<T = ReqwestTransport> {
    transport: T,
    base_url: Url,
}

impl TodoApiClient<ReqwestTransport> {
    /// Client for `base_url` using a default reqwest transport.
    pub fn new(base_url: &str) -> std::result::Result<Self, ConfigError> {
        Self::with_transport(base_url, ReqwestTransport::new())
    }

    /// Build a reqwest-backed client from `config`.
    pub fn from_config(config: &ClientConfig) -> std::result::Result<Self, ConfigError> {
        let transport = match config.timeout() {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
            None => ReqwestTransport::new(),
        };
        Self::with_transport(&config.base_url, transport)
    }
}

impl<T: Transport> TodoApiClient<T> {
    /// Fails with `InvalidBaseUrl` unless `base_url` is an absolute URL that
    /// can have a path appended.
    pub fn with_transport(base_url: &str, transport: T) -> std::result::Result<Self, ConfigError> {
        let invalid = |source: url::ParseError| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        };
        let parsed = Url::parse(base_url).map_err(invalid)?;
        if parsed.cannot_be_a_base() {
            return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(Self {
            transport,
            base_url: parsed,
        })
    }

    /// The base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_get_all_tasks(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.todos_url(), None)
    }

    pub fn build_get_task_by_id(&self, id: &str) -> std::result::Result<HttpRequest, RequestError> {
        Ok(self.request(HttpMethod::Get, self.task_url(id)?, None))
    }

    pub fn build_add_task_to_user(
        &self,
        user_id: &str,
        title: &str,
        completed: bool,
    ) -> std::result::Result<HttpRequest, RequestError> {
        let body = serde_json::to_vec(&NewTask::new(user_id, title, completed))?;
        Ok(self.request(HttpMethod::Post, self.todos_url(), Some(body)))
    }

    pub fn build_update_task(&self, task: &Task) -> std::result::Result<HttpRequest, RequestError> {
        let url = self.task_url(&task.id)?;
        let body = serde_json::to_vec(task)?;
        Ok(self.request(HttpMethod::Put, url, Some(body)))
    }

    pub fn build_delete_task_by_id(&self, id: &str) -> std::result::Result<HttpRequest, RequestError> {
        Ok(self.request(HttpMethod::Delete, self.task_url(id)?, None))
    }

    pub async fn get_all_tasks(&self) -> Result<Vec<Task>> {
        self.execute(Ok(self.build_get_all_tasks())).await
    }

    pub async fn get_task_by_id(&self, id: &str) -> Result<Task> {
        self.execute(self.build_get_task_by_id(id)).await
    }

    pub async fn add_task_to_user(&self, user_id: &str, title: &str, completed: bool) -> Result<Task> {
        self.execute(self.build_add_task_to_user(user_id, title, completed))
            .await
    }

    /// Replace a task on the server with `task`, matched by its id.
    pub async fn update_task(&self, task: &Task) -> Result<Task> {
        self.execute(self.build_update_task(task)).await
    }

    pub async fn delete_task_by_id(&self, id: &str) -> Result<()> {
        self.execute(self.build_delete_task_by_id(id)).await
    }

    fn todos_url(&self) -> Url {
        let mut url = self.base_url.clone();
        // Only fails for cannot-be-a-base URLs, which `with_transport` rejects.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("todos");
        }
        url
    }

    fn task_url(&self, id: &str) -> std::result::Result<Url, RequestError> {
        if matches!(id, "" | "." | "..") {
            return Err(RequestError::UnaddressableId(id.to_string()));
        }
        let mut url = self.todos_url();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        Ok(url)
    }

    fn request(&self, method: HttpMethod, url: Url, body: Option<Vec<u8>>) -> HttpRequest {
        HttpRequest {
            method,
            url: url.into(),
            headers: vec![
                ("Content-Type".to_string(), JSON.to_string()),
                ("Accept".to_string(), JSON.to_string()),
            ],
            body,
        }
    }

    async fn execute<R: ResponseBody>(
        &self,
        request: std::result::Result<HttpRequest, RequestError>,
    ) -> Result<R> {
        let request = request.map_err(|err| map_request_error(&err))?;
        debug!(method = %request.method, url = %request.url, "sending request");
        let outcome = self.transport.perform(request).await;
        if let Ok(response) = &outcome {
            debug!(status = response.status, "received response");
        }
        map_outcome(&outcome)
    }
}
