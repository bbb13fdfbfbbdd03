use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::Task;

/// Mock server configuration.
///
/// Loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. Environment variables with the `MOCK_SERVER_` prefix
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON array of tasks to preload.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_file: None,
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Env::prefixed("MOCK_SERVER_"))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::figment()
            .extract()
            .context("failed to load mock server configuration")
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Tasks from `seed_file`, or none when it is unset.
    pub fn seed_tasks(&self) -> anyhow::Result<Vec<Task>> {
        match &self.seed_file {
            Some(path) => read_tasks(path),
            None => Ok(Vec::new()),
        }
    }
}

fn read_tasks(path: &Path) -> anyhow::Result<Vec<Task>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("seed file {} is not a JSON task array", path.display()))
}
