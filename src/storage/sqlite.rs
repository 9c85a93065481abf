//! SQLite backend built on [`crate::database::Database`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::params;

use super::BookmarkStore;
use crate::database::Database;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

const STORED_KEY: &str = "stored_at";

/// Stores one row per bookmark, ordered by `position`.
pub struct SqliteStore {
    db: Database,
    location: String,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Io(format!("Failed to create data directory: {}", e))
                })?;
            }
        }
        Ok(Self {
            db: Database::open(&path)?,
            location: path.as_ref().display().to_string(),
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            db: Database::open_in_memory()?,
            location: ":memory:".to_string(),
        })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Whether any save has ever completed against this database.
    fn has_stored(&self) -> Result<bool, StoreError> {
        let count: i64 = self.db.connection().query_row(
            "SELECT COUNT(*) FROM collection_meta WHERE key = ?1",
            params![STORED_KEY],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn parse_row(
        id: String,
        title: String,
        url: String,
        category: String,
        tags: String,
        color: Option<String>,
        created_at: String,
    ) -> Result<Bookmark, StoreError> {
        let tags: Vec<String> = serde_json::from_str(&tags)
            .map_err(|e| StoreError::Corrupt(format!("tags of bookmark {}: {}", id, e)))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| StoreError::Corrupt(format!("createdAt of bookmark {}: {}", id, e)))?
            .with_timezone(&Utc);
        Ok(Bookmark {
            id,
            title,
            url,
            category,
            tags,
            color,
            created_at,
        })
    }
}

impl BookmarkStore for SqliteStore {
    fn load(&self) -> Result<Option<Vec<Bookmark>>, StoreError> {
        if !self.has_stored()? {
            return Ok(None);
        }

        let mut stmt = self.db.connection().prepare(
            "SELECT id, title, url, category, tags, color, created_at \
             FROM bookmarks ORDER BY position",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?;

        let mut results = Vec::new();
        for row in rows {
            let (id, title, url, category, tags, color, created_at) = row?;
            results.push(Self::parse_row(id, title, url, category, tags, color, created_at)?);
        }
        Ok(Some(results))
    }

    /// Replaces every row inside one transaction.
    fn save(&mut self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        let tx = self.db.connection_mut().transaction()?;
        tx.execute("DELETE FROM bookmarks", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO bookmarks (id, title, url, category, tags, color, created_at, position) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for (position, b) in bookmarks.iter().enumerate() {
                let tags = serde_json::to_string(&b.tags)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                insert.execute(params![
                    b.id,
                    b.title,
                    b.url,
                    b.category,
                    tags,
                    b.color,
                    b.created_at.to_rfc3339(),
                    position as i64,
                ])?;
            }
        }
        tx.execute(
            "INSERT OR REPLACE INTO collection_meta (key, value) VALUES (?1, ?2)",
            params![STORED_KEY, Utc::now().to_rfc3339()],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.location)
    }
}
