//! SQLite schema for blog storage.
//!
//! Initialized once on open. AUTOINCREMENT keeps deleted ids from being
//! reused for the lifetime of the database file.

use rusqlite::{Connection, Result};

/// Initialize the database schema.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS blogs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        -- Query by creation date (for sorting/filtering)
        CREATE INDEX IF NOT EXISTS idx_blogs_created_at ON blogs(created_at);
        "#,
    )
}
