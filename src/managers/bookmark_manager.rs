//! Bookmark Manager for NexusLinks.
//!
//! Implements `BookmarkManagerTrait`: owns the bookmark collection, applies
//! add/delete/tag mutations, and flushes the whole collection to the injected
//! [`BookmarkStore`] after every change.

use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use super::view::derive_view;
use crate::storage::BookmarkStore;
use crate::types::bookmark::{seed_bookmarks, Bookmark, BookmarkDraft, ViewQuery};
use crate::types::errors::{BookmarkError, FormError, StoreError};

/// Trait defining bookmark collection operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, draft: BookmarkDraft) -> Result<Bookmark, BookmarkError>;
    /// Returns `Ok(false)` when no bookmark has the id.
    fn delete_bookmark(&mut self, id: &str) -> Result<bool, BookmarkError>;
    /// Replaces the tag list wholesale. Returns `Ok(false)` when no bookmark has the id.
    fn update_tags(&mut self, id: &str, tags: Vec<String>) -> Result<bool, BookmarkError>;
    fn add_tag(&mut self, id: &str, tag: &str) -> Result<bool, BookmarkError>;
    fn remove_tag(&mut self, id: &str, tag: &str) -> Result<bool, BookmarkError>;
    fn get_bookmark(&self, id: &str) -> Option<&Bookmark>;
    fn list_bookmarks(&self) -> &[Bookmark];
    fn view(&self, query: &ViewQuery) -> Vec<Bookmark>;
    fn bookmark_count(&self) -> usize;
}

/// Bookmark collection backed by a [`BookmarkStore`].
pub struct BookmarkManager<S: BookmarkStore> {
    bookmarks: Vec<Bookmark>,
    store: S,
}

impl<S: BookmarkStore> BookmarkManager<S> {
    /// Loads the collection from `store`.
    ///
    /// When the store holds nothing, starts from the two seed bookmarks and
    /// writes them back immediately. Corrupt data is returned as an error and
    /// the store is left untouched.
    pub fn load(mut store: S) -> Result<Self, StoreError> {
        let bookmarks = match store.load()? {
            Some(bookmarks) => {
                info!("Loaded {} bookmarks from {}", bookmarks.len(), store.describe());
                bookmarks
            }
            None => {
                info!("No stored bookmarks in {}, using seed set", store.describe());
                let seed = seed_bookmarks(Utc::now());
                store.save(&seed)?;
                seed
            }
        };
        Ok(Self { bookmarks, store })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }

    /// Flushes the collection. The in-memory change stays even if this fails.
    fn persist(&mut self) -> Result<(), BookmarkError> {
        self.store.save(&self.bookmarks).map_err(|e| {
            warn!("Failed to persist {} bookmarks: {}", self.bookmarks.len(), e);
            BookmarkError::Store(e)
        })
    }
}

impl<S: BookmarkStore> BookmarkManagerTrait for BookmarkManager<S> {
    /// Appends a new bookmark with a fresh UUID and the current time.
    fn add_bookmark(&mut self, draft: BookmarkDraft) -> Result<Bookmark, BookmarkError> {
        let bookmark = draft.into_bookmark(Uuid::new_v4().to_string(), Utc::now());
        debug!("Adding bookmark {} ({})", bookmark.id, bookmark.url);
        self.bookmarks.push(bookmark.clone());
        self.persist()?;
        Ok(bookmark)
    }

    fn delete_bookmark(&mut self, id: &str) -> Result<bool, BookmarkError> {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        if self.bookmarks.len() == before {
            debug!("Delete of unknown bookmark {} ignored", id);
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn update_tags(&mut self, id: &str, tags: Vec<String>) -> Result<bool, BookmarkError> {
        let Some(index) = self.position(id) else {
            debug!("Tag update for unknown bookmark {} ignored", id);
            return Ok(false);
        };
        self.bookmarks[index].tags = tags;
        self.persist()?;
        Ok(true)
    }

    /// Appends one trimmed tag. Blank input is rejected with `FormError::EmptyTag`.
    fn add_tag(&mut self, id: &str, tag: &str) -> Result<bool, BookmarkError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(FormError::EmptyTag.into());
        }
        let Some(bookmark) = self.get_bookmark(id) else {
            return Ok(false);
        };
        let mut tags = bookmark.tags.clone();
        tags.push(tag.to_string());
        self.update_tags(id, tags)
    }

    /// Removes every tag equal to `tag`.
    fn remove_tag(&mut self, id: &str, tag: &str) -> Result<bool, BookmarkError> {
        let Some(bookmark) = self.get_bookmark(id) else {
            return Ok(false);
        };
        let tags = bookmark.tags.iter().filter(|t| *t != tag).cloned().collect();
        self.update_tags(id, tags)
    }

    fn get_bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Collection order, i.e. insertion order.
    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn view(&self, query: &ViewQuery) -> Vec<Bookmark> {
        derive_view(&self.bookmarks, query)
    }

    fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }
}
