//! SQLite storage for movies and reviews.
//!
//! There is no connection pool: every request opens its own connection with
//! [`Database::connect`], does one unit of work and drops it. Foreign keys are
//! switched on per connection because SQLite leaves them off by default, and
//! the review cascade depends on them.

use rusqlite::Connection;
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    release_date TEXT,
    director TEXT,
    genre TEXT,
    poster_url TEXT
);
CREATE INDEX IF NOT EXISTS ix_movies_title ON movies (title);

CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    movie_id INTEGER NOT NULL REFERENCES movies (id) ON DELETE CASCADE,
    author TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    sentiment TEXT
);
CREATE INDEX IF NOT EXISTS ix_reviews_movie_id ON reviews (movie_id);
";

/// Handle to the database file, shared with handlers as `web::Data<Database>`.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection with foreign key enforcement enabled.
    pub fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Creates both tables if they do not exist yet. Safe to call on every startup.
    pub fn init(&self) -> rusqlite::Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)
    }
}
