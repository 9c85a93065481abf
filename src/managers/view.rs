//! Derived bookmark view: category filter, search, then sort.
//!
//! [`derive_view`] is a pure function of the collection and a [`ViewQuery`].
//! [`ViewCache`] memoizes the last result keyed by a hash of all inputs.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::bookmark::{Bookmark, SortBy, ViewQuery};

/// Computes the filtered, searched and sorted view of `bookmarks`.
///
/// Returns a fresh vector; the input slice is never reordered.
pub fn derive_view(bookmarks: &[Bookmark], query: &ViewQuery) -> Vec<Bookmark> {
    let needle = query.search.to_lowercase();

    let mut view: Vec<Bookmark> = bookmarks
        .iter()
        .filter(|b| query.category.matches(b))
        .filter(|b| needle.is_empty() || matches_search(b, &needle))
        .cloned()
        .collect();

    sort_bookmarks(&mut view, query.sort_by);
    view
}

/// Case-insensitive substring match on title, url, or any tag.
///
/// `needle` must already be lowercased.
pub fn matches_search(bookmark: &Bookmark, needle: &str) -> bool {
    bookmark.title.to_lowercase().contains(needle)
        || bookmark.url.to_lowercase().contains(needle)
        || bookmark
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Stable sort in place.
pub fn sort_bookmarks(bookmarks: &mut [Bookmark], sort_by: SortBy) {
    match sort_by {
        SortBy::Date => bookmarks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Title => bookmarks.sort_by(|a, b| locale_compare(&a.title, &b.title)),
    }
}

/// Collation-style ordering in three levels: base letters ignoring accents
/// and case, then accents (unaccented first), then case (lowercase first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| b.cmp(a))
}

/// Lowercased NFD form with combining marks stripped: "Éclair" -> "eclair".
fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Hash of everything the derived view depends on.
pub fn view_key(bookmarks: &[Bookmark], query: &ViewQuery) -> u64 {
    let mut hasher = DefaultHasher::new();
    bookmarks.hash(&mut hasher);
    query.hash(&mut hasher);
    hasher.finish()
}

/// Single-entry memo of [`derive_view`].
#[derive(Debug, Default)]
pub struct ViewCache {
    key: Option<u64>,
    view: Vec<Bookmark>,
    hits: u64,
    misses: u64,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached view when the inputs hash to the last key,
    /// recomputing otherwise.
    pub fn get_or_derive(&mut self, bookmarks: &[Bookmark], query: &ViewQuery) -> &[Bookmark] {
        let key = view_key(bookmarks, query);
        if self.key == Some(key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.view = derive_view(bookmarks, query);
            self.key = Some(key);
        }
        &self.view
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.view.clear();
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
