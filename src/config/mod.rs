//! Application configuration.
//!
//! Loaded from a TOML file under the platform config directory, with serde
//! defaults for every field so a missing file yields a working setup.

mod credentials;
mod loader;
mod types;

pub use credentials::{resolve_api_token, SecureString, API_TOKEN_ENV};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, ServerConfig, StorageConfig, UserProfile};
