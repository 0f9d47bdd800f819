use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub user: UserProfile,
}

/// Settings for the API server (`serve` subcommand).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the API server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Settings for blog persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    /// Defaults to `blogs.db` under the platform data directory.
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

/// Settings for the dashboard client (`ui` subcommand).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API server (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for the authenticated `/user` endpoint.
    /// Falls back to the `BLOGDESK_API_TOKEN` environment variable.
    #[serde(default)]
    pub token: Option<String>,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Identity returned by the `/user` endpoint for authenticated callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_user_name")]
    pub name: String,
    #[serde(default = "default_user_email")]
    pub email: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_user_name() -> String {
    "admin".to_string()
}

fn default_user_email() -> String {
    "admin@example.com".to_string()
}

impl StorageConfig {
    /// Resolve the database path, falling back to the platform data directory.
    pub fn db_path(&self) -> PathBuf {
        match &self.db_path {
            Some(path) => path.clone(),
            None => {
                let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
                data_dir.join("blogdesk").join("blogs.db")
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            email: default_user_email(),
        }
    }
}
