//! In-process backend for tests and embedders that persist elsewhere.

use super::BookmarkStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// Keeps the "persisted" collection in memory and counts saves.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    stored: Option<Vec<Bookmark>>,
    save_count: usize,
}

impl MemoryStore {
    /// An empty store; the first load reports nothing stored.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `bookmarks`.
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            stored: Some(bookmarks),
            save_count: 0,
        }
    }

    pub fn stored(&self) -> Option<&[Bookmark]> {
        self.stored.as_deref()
    }

    /// Number of `save` calls since construction.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl BookmarkStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Bookmark>>, StoreError> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        self.stored = Some(bookmarks.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
