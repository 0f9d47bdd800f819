use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::error::StoreError;

/// A persisted blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique identifier, assigned by the store on creation.
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Set on insert, immutable thereafter.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

/// Request payload shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
}

impl BlogDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields are required non-empty (after trimming).
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Validation { field: "title" });
        }
        if self.content.trim().is_empty() {
            return Err(StoreError::Validation { field: "content" });
        }
        Ok(())
    }
}
