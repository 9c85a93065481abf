//! Input collection for new bookmarks and per-card tag editing.
//!
//! The add panel is an explicit [`FormState`] machine; field validation
//! happens here so the collection never sees a bookmark without a title or url.

use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::types::bookmark::{Bookmark, BookmarkDraft, CATEGORIES, DEFAULT_COLOR};
use crate::types::errors::{BookmarkError, FormError};

/// Visibility of the add-bookmark panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open,
}

/// Trims `raw` and rejects it if nothing is left.
pub fn normalize_tag(raw: &str) -> Result<String, FormError> {
    let tag = raw.trim();
    if tag.is_empty() {
        Err(FormError::EmptyTag)
    } else {
        Ok(tag.to_string())
    }
}

/// The add-bookmark form.
#[derive(Debug, Clone)]
pub struct AddBookmarkForm {
    state: FormState,
    categories: Vec<String>,
    pub title: String,
    pub url: String,
    pub category: String,
    pub color: String,
    pub tag_input: String,
    tags: Vec<String>,
}

impl Default for AddBookmarkForm {
    fn default() -> Self {
        Self::new(CATEGORIES.iter().map(|c| c.to_string()).collect())
    }
}

impl AddBookmarkForm {
    /// Creates a closed form; the category starts at the first entry of `categories`.
    pub fn new(categories: Vec<String>) -> Self {
        let category = categories.first().cloned().unwrap_or_default();
        Self {
            state: FormState::Closed,
            categories,
            title: String::new(),
            url: String::new(),
            category,
            color: DEFAULT_COLOR.to_string(),
            tag_input: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == FormState::Open
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Closed -> Open.
    pub fn open(&mut self) {
        self.state = FormState::Open;
    }

    /// Open -> Closed. Field values are kept for the next open.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    /// Commits the pending tag input (the Enter key in the tag field).
    ///
    /// On rejection the pending input is left as typed.
    pub fn commit_tag(&mut self) -> Result<(), FormError> {
        let tag = normalize_tag(&self.tag_input)?;
        self.tags.push(tag);
        self.tag_input.clear();
        Ok(())
    }

    /// Removes every pending tag equal to `tag`.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Validates the fields and produces a draft.
    ///
    /// On success the title, url, tags and color are reset (the category is
    /// kept) and the form closes. On failure nothing changes.
    pub fn submit(&mut self) -> Result<BookmarkDraft, FormError> {
        if self.state != FormState::Open {
            return Err(FormError::NotOpen);
        }
        if self.title.trim().is_empty() {
            return Err(FormError::MissingField("title"));
        }
        if self.url.trim().is_empty() {
            return Err(FormError::MissingField("url"));
        }

        let draft = BookmarkDraft {
            title: std::mem::take(&mut self.title),
            url: std::mem::take(&mut self.url),
            category: self.category.clone(),
            tags: std::mem::take(&mut self.tags),
            color: Some(std::mem::replace(&mut self.color, DEFAULT_COLOR.to_string())),
        };
        self.state = FormState::Closed;
        Ok(draft)
    }

    /// Submits the form straight into a bookmark collection.
    pub fn submit_to<M: BookmarkManagerTrait>(
        &mut self,
        manager: &mut M,
    ) -> Result<Bookmark, BookmarkError> {
        let draft = self.submit()?;
        manager.add_bookmark(draft)
    }
}

/// Tag editing controls on a single bookmark card.
#[derive(Debug, Clone, Default)]
pub struct TagEditor {
    editing: bool,
    pub input: String,
}

impl TagEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Flips the editing toggle.
    pub fn toggle(&mut self) {
        self.editing = !self.editing;
    }

    /// Appends the pending input to bookmark `id`, clearing it on success.
    pub fn commit<M: BookmarkManagerTrait>(
        &mut self,
        manager: &mut M,
        id: &str,
    ) -> Result<bool, BookmarkError> {
        let tag = normalize_tag(&self.input)?;
        let applied = manager.add_tag(id, &tag)?;
        self.input.clear();
        Ok(applied)
    }

    /// Removes tag `tag` from bookmark `id`.
    pub fn remove<M: BookmarkManagerTrait>(
        &self,
        manager: &mut M,
        id: &str,
        tag: &str,
    ) -> Result<bool, BookmarkError> {
        manager.remove_tag(id, tag)
    }
}
