//! Persistent blog storage.
//!
//! The store owns the authoritative collection of blog posts. Clients hold
//! only a disposable cached copy and rebuild it by re-fetching the full list
//! after every mutation.

mod blog;
mod error;
mod schema;
mod sqlite;

pub use blog::{BlogDraft, BlogPost};
pub use error::StoreError;
pub use sqlite::SqliteBlogStore;

/// Contract for blog post persistence.
///
/// Implementations must assign unique, never-reused ids on create and keep
/// `created_at` immutable after insert.
pub trait BlogStore: Send + Sync {
    /// Return all posts in insertion (id) order.
    fn list_all(&self) -> Result<Vec<BlogPost>, StoreError>;

    /// Fetch a single post by id.
    fn get(&self, id: i64) -> Result<BlogPost, StoreError>;

    /// Validate the draft, assign a fresh id and timestamps, persist, and
    /// return the new record.
    fn create(&self, draft: &BlogDraft) -> Result<BlogPost, StoreError>;

    /// Replace title/content of an existing record and refresh `updated_at`.
    /// The id never changes.
    fn update(&self, id: i64, draft: &BlogDraft) -> Result<BlogPost, StoreError>;

    /// Remove a record permanently. Deleting an unknown (or already deleted)
    /// id is `StoreError::NotFound`.
    fn delete(&self, id: i64) -> Result<(), StoreError>;
}
