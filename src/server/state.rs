use std::sync::Arc;

use crate::config::{resolve_api_token, Config, SecureString, UserProfile};
use crate::store::BlogStore;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
    pub auth: AuthSettings,
}

/// Credentials and identity for the `/user` endpoint.
#[derive(Clone)]
pub struct AuthSettings {
    /// Accepted bearer token. `None` means every caller is rejected.
    pub token: Option<SecureString>,
    pub profile: UserProfile,
}

impl AuthSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            token: resolve_api_token(&config.api),
            profile: config.user.clone(),
        }
    }

    /// Check a presented bearer token against the configured one.
    pub fn accepts(&self, presented: Option<&str>) -> bool {
        match (&self.token, presented) {
            (Some(expected), Some(given)) => expected.expose() == given,
            _ => false,
        }
    }
}

impl AppState {
    pub fn new(store: Arc<dyn BlogStore>, auth: AuthSettings) -> Self {
        Self { store, auth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_with(token: Option<&str>) -> AuthSettings {
        AuthSettings {
            token: token.map(|t| SecureString::new(t.to_string())),
            profile: UserProfile::default(),
        }
    }

    #[test]
    fn matching_token_is_accepted() {
        let auth = auth_with(Some("secret"));
        assert!(auth.accepts(Some("secret")));
    }

    #[test]
    fn wrong_or_missing_token_is_rejected() {
        let auth = auth_with(Some("secret"));
        assert!(!auth.accepts(Some("other")));
        assert!(!auth.accepts(None));
    }

    #[test]
    fn unconfigured_server_rejects_everyone() {
        let auth = auth_with(None);
        assert!(!auth.accepts(Some("anything")));
        assert!(!auth.accepts(None));
    }
}
