//! SQLite-backed blog store.
//!
//! A single serialized connection behind a mutex. Every operation runs a
//! handful of point queries, so the lock is held only briefly.

use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};

use crate::store::blog::{BlogDraft, BlogPost};
use crate::store::error::StoreError;
use crate::store::schema::init_schema;
use crate::store::BlogStore;

pub struct SqliteBlogStore {
    conn: Mutex<Connection>,
}

impl SqliteBlogStore {
    /// Open or create the database at `path`, initializing the schema.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_schema(&conn)?;
        tracing::debug!("Opened blog database at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn fetch(conn: &Connection, id: i64) -> Result<BlogPost, StoreError> {
        conn.query_row(
            "SELECT id, title, content, created_at, updated_at FROM blogs WHERE id = ?1",
            params![id],
            row_to_post,
        )
        .optional()?
        .ok_or(StoreError::NotFound { id })
    }
}

impl BlogStore for SqliteBlogStore {
    fn list_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare("SELECT id, title, content, created_at, updated_at FROM blogs ORDER BY id")?;
        let rows = stmt.query_map([], row_to_post)?;

        let mut posts = Vec::new();
        for row in rows {
            posts.push(row?);
        }
        Ok(posts)
    }

    fn get(&self, id: i64) -> Result<BlogPost, StoreError> {
        let conn = self.conn.lock();
        Self::fetch(&conn, id)
    }

    fn create(&self, draft: &BlogDraft) -> Result<BlogPost, StoreError> {
        draft.validate()?;

        let now = Utc::now();
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO blogs (title, content, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.title,
                draft.content,
                now.to_rfc3339(),
                now.to_rfc3339()
            ],
        )?;
        let id = conn.last_insert_rowid();
        Self::fetch(&conn, id)
    }

    fn update(&self, id: i64, draft: &BlogDraft) -> Result<BlogPost, StoreError> {
        draft.validate()?;

        let now = Utc::now();
        let conn = self.conn.lock();
        let changed = conn.execute(
            "UPDATE blogs SET title = ?1, content = ?2, updated_at = ?3 WHERE id = ?4",
            params![draft.title, draft.content, now.to_rfc3339(), id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound { id });
        }
        Self::fetch(&conn, id)
    }

    fn delete(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn.lock();
        let changed = conn.execute("DELETE FROM blogs WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}

fn row_to_post(row: &rusqlite::Row<'_>) -> rusqlite::Result<BlogPost> {
    Ok(BlogPost {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created_at: parse_timestamp(row.get(3)?, 3)?,
        updated_at: parse_timestamp(row.get(4)?, 4)?,
    })
}

fn parse_timestamp(raw: String, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
