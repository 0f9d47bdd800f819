//! Typed HTTP client for the blog API.
//!
//! Used by the dashboard to synchronize its cached collection with the
//! server. Every call enforces the configured total timeout on top of the
//! connect timeout baked into the underlying client.

mod error;

pub use error::ClientError;

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tokio::time::timeout;

use crate::config::{resolve_api_token, ApiConfig, SecureString, UserProfile};
use crate::store::{BlogDraft, BlogPost};

#[derive(Clone)]
pub struct BlogApiClient {
    client: Client,
    base_url: String,
    token: Option<SecureString>,
    request_timeout: Duration,
}

impl BlogApiClient {
    pub fn new(api: &ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds as u64))
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            token: resolve_api_token(api),
            request_timeout: Duration::from_secs(api.timeout_seconds as u64),
        })
    }

    /// Fetch the full collection.
    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>, ClientError> {
        let response = self.send(Method::GET, "/api/blogs", None).await?;
        response.json().await.map_err(ClientError::Decode)
    }

    /// Create a post and return the stored record.
    pub async fn create_blog(&self, draft: &BlogDraft) -> Result<BlogPost, ClientError> {
        let response = self.send(Method::POST, "/api/blogs", Some(draft)).await?;
        response.json().await.map_err(ClientError::Decode)
    }

    /// Replace title/content of an existing post.
    pub async fn update_blog(&self, id: i64, draft: &BlogDraft) -> Result<BlogPost, ClientError> {
        let path = format!("/api/blogs/{}", id);
        let response = self.send(Method::PUT, &path, Some(draft)).await?;
        response.json().await.map_err(ClientError::Decode)
    }

    /// Delete a post.
    pub async fn delete_blog(&self, id: i64) -> Result<(), ClientError> {
        let path = format!("/api/blogs/{}", id);
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }

    /// Fetch the authenticated caller's identity.
    pub async fn current_user(&self) -> Result<UserProfile, ClientError> {
        let response = self.send(Method::GET, "/user", None).await?;
        response.json().await.map_err(ClientError::Decode)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&BlogDraft>,
    ) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, &url);
        builder = self.apply_auth(builder);
        if let Some(draft) = body {
            builder = builder.json(draft);
        }

        let result = timeout(self.request_timeout, builder.send()).await;
        let response = match result {
            Ok(sent) => sent.map_err(ClientError::Transport)?,
            Err(_) => {
                return Err(ClientError::Timeout {
                    duration: self.request_timeout.as_secs(),
                })
            }
        };

        Self::check_status(response).await
    }

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token.expose())),
            None => builder,
        }
    }

    /// Surface non-2xx responses as typed errors, extracting the server's
    /// error message when the body follows the API's error envelope.
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")?
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| canned_reason(status));

        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

fn canned_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}
