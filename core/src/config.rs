//! Client configuration.
//!
//! The library never reads files or the environment on its own. Callers start
//! from [`ClientConfig::figment`], merge whatever providers they use, and
//! extract with [`ClientConfig::from_figment`].
//!
//! ```ignore
//! use figment::providers::{Format, Toml};
//! use todo_client::{ClientConfig, TodoApiClient};
//!
//! let config = ClientConfig::from_figment(
//!     ClientConfig::figment().merge(Toml::file("todo-client.toml")),
//! )?;
//! let client = TodoApiClient::from_config(&config)?;
//! ```

use std::time::Duration;

use figment::{providers::Serialized, Figment};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Root of the todo service; `/todos` is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout applied by the HTTP transport. `None` leaves
    /// requests unbounded.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// A figment seeded with the defaults, ready for callers to merge into.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ClientConfig::default()))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
