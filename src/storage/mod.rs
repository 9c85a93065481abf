//! Storage port for the bookmark collection.
//!
//! The controller only sees [`BookmarkStore`]; the concrete backend is chosen
//! at startup from the settings. Every backend persists the whole collection
//! on each save.

pub mod json_file;
pub mod memory;
pub mod sqlite;

use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Durable home of the bookmark collection.
pub trait BookmarkStore {
    /// Reads the stored collection.
    ///
    /// Returns `Ok(None)` when nothing has ever been stored, and
    /// `Err(StoreError::Corrupt)` when stored data cannot be parsed.
    fn load(&self) -> Result<Option<Vec<Bookmark>>, StoreError>;

    /// Overwrites the stored collection with `bookmarks`.
    fn save(&mut self, bookmarks: &[Bookmark]) -> Result<(), StoreError>;

    /// Short backend name for logs.
    fn describe(&self) -> String;
}

impl<S: BookmarkStore + ?Sized> BookmarkStore for Box<S> {
    fn load(&self) -> Result<Option<Vec<Bookmark>>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        (**self).save(bookmarks)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
