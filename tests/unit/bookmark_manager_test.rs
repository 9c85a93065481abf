//! Unit tests for the BookmarkManager public API.
//!
//! These exercise the collection operations through `BookmarkManagerTrait`,
//! using `MemoryStore` so persistence side effects can be observed.

use chrono::{Duration, Utc};
use nexuslinks::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use nexuslinks::storage::{BookmarkStore, MemoryStore};
use nexuslinks::types::bookmark::{
    seed_bookmarks, Bookmark, BookmarkDraft, CategoryFilter, SortBy, ViewQuery,
};
use nexuslinks::types::errors::{BookmarkError, FormError, StoreError};

fn draft(title: &str, url: &str, category: &str, tags: &[&str]) -> BookmarkDraft {
    BookmarkDraft {
        title: title.to_string(),
        url: url.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        color: Some("#10b981".to_string()),
    }
}

/// Manager over an empty memory store: starts from the seed set.
fn seeded() -> BookmarkManager<MemoryStore> {
    BookmarkManager::load(MemoryStore::new()).unwrap()
}

/// Manager over a store that already holds an empty collection.
fn empty() -> BookmarkManager<MemoryStore> {
    BookmarkManager::load(MemoryStore::with_bookmarks(Vec::new())).unwrap()
}

#[test]
fn test_load_without_stored_data_uses_seed_and_persists_it() {
    let mgr = seeded();

    let titles: Vec<&str> = mgr.list_bookmarks().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["GitHub", "Stack Overflow"]);
    assert_eq!(mgr.store().save_count(), 1);
    assert_eq!(mgr.store().stored().unwrap(), mgr.list_bookmarks());
}

#[test]
fn test_load_with_stored_data_skips_seed() {
    let stored = vec![seed_bookmarks(Utc::now()).remove(1)];
    let mgr = BookmarkManager::load(MemoryStore::with_bookmarks(stored.clone())).unwrap();

    assert_eq!(mgr.list_bookmarks(), stored.as_slice());
    assert_eq!(mgr.store().save_count(), 0);
}

#[test]
fn test_load_keeps_an_empty_collection_empty() {
    let mgr = empty();
    assert_eq!(mgr.bookmark_count(), 0);
}

#[test]
fn test_add_generates_id_and_timestamp() {
    let mut mgr = empty();
    let before = Utc::now();

    let added = mgr
        .add_bookmark(draft("Rust", "https://rust-lang.org", "Learning", &["lang"]))
        .unwrap();

    assert!(!added.id.is_empty());
    assert!(added.created_at >= before);
    assert_eq!(added.title, "Rust");
    assert_eq!(added.url, "https://rust-lang.org");
    assert_eq!(added.category, "Learning");
    assert_eq!(added.tags, vec!["lang".to_string()]);
    assert_eq!(added.color.as_deref(), Some("#10b981"));

    let matching: Vec<&Bookmark> = mgr.list_bookmarks().iter().filter(|b| b.id == added.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(mgr.store().save_count(), 1);
}

#[test]
fn test_add_appends_in_collection_order() {
    let mut mgr = seeded();
    let added = mgr
        .add_bookmark(draft("Docs", "https://docs.rs", "Work", &[]))
        .unwrap();
    assert_eq!(mgr.list_bookmarks().last().unwrap().id, added.id);
    assert_eq!(mgr.bookmark_count(), 3);
}

#[test]
fn test_add_does_not_validate_fields() {
    let mut mgr = empty();
    let added = mgr.add_bookmark(draft("", "", "Elsewhere", &[])).unwrap();
    assert_eq!(added.category, "Elsewhere");
}

#[test]
fn test_delete_is_idempotent() {
    let mut mgr = seeded();

    assert!(mgr.delete_bookmark("1").unwrap());
    let after_first = mgr.list_bookmarks().to_vec();
    let saves_after_first = mgr.store().save_count();

    assert!(!mgr.delete_bookmark("1").unwrap());
    assert_eq!(mgr.list_bookmarks(), after_first.as_slice());
    assert_eq!(mgr.store().save_count(), saves_after_first);
}

#[test]
fn test_delete_unknown_id_leaves_collection_unchanged() {
    let mut mgr = seeded();
    let before = mgr.list_bookmarks().to_vec();
    assert!(!mgr.delete_bookmark("missing").unwrap());
    assert_eq!(mgr.list_bookmarks(), before.as_slice());
}

#[test]
fn test_update_tags_with_empty_list_clears_only_tags() {
    let mut mgr = seeded();
    let before = mgr.get_bookmark("1").unwrap().clone();

    assert!(mgr.update_tags("1", Vec::new()).unwrap());

    let after = mgr.get_bookmark("1").unwrap();
    assert!(after.tags.is_empty());
    assert_eq!(after.id, before.id);
    assert_eq!(after.title, before.title);
    assert_eq!(after.url, before.url);
    assert_eq!(after.category, before.category);
    assert_eq!(after.color, before.color);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn test_update_tags_unknown_id_is_noop() {
    let mut mgr = seeded();
    let saves = mgr.store().save_count();
    assert!(!mgr.update_tags("missing", vec!["x".into()]).unwrap());
    assert_eq!(mgr.store().save_count(), saves);
}

#[test]
fn test_update_tags_persists() {
    let mut mgr = seeded();
    mgr.update_tags("2", vec!["q&a".into(), "q&a".into()]).unwrap();
    let stored = mgr.store().stored().unwrap();
    let persisted = stored.iter().find(|b| b.id == "2").unwrap();
    assert_eq!(persisted.tags, vec!["q&a".to_string(), "q&a".to_string()]);
}

#[test]
fn test_add_tag_trims_and_appends() {
    let mut mgr = seeded();
    assert!(mgr.add_tag("1", "  rust  ").unwrap());
    assert_eq!(
        mgr.get_bookmark("1").unwrap().tags,
        vec!["development".to_string(), "code".to_string(), "rust".to_string()]
    );
}

#[test]
fn test_add_tag_rejects_blank_input() {
    let mut mgr = seeded();
    let err = mgr.add_tag("1", "   ").unwrap_err();
    assert!(matches!(err, BookmarkError::Invalid(FormError::EmptyTag)));
    assert_eq!(mgr.get_bookmark("1").unwrap().tags.len(), 2);
}

#[test]
fn test_remove_tag_drops_every_matching_occurrence() {
    let mut mgr = seeded();
    mgr.update_tags("1", vec!["a".into(), "b".into(), "a".into()]).unwrap();

    assert!(mgr.remove_tag("1", "a").unwrap());
    assert_eq!(mgr.get_bookmark("1").unwrap().tags, vec!["b".to_string()]);
}

#[test]
fn test_view_filters_by_category() {
    let hour_ago = Utc::now() - Duration::hours(1);
    let mut mgr = BookmarkManager::load(MemoryStore::with_bookmarks(seed_bookmarks(hour_ago))).unwrap();
    mgr.add_bookmark(draft("Jira", "https://jira.example", "Work", &[]))
        .unwrap();

    let query = ViewQuery::new(CategoryFilter::Only("Work".into()), "", SortBy::Date);
    let view = mgr.view(&query);

    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|b| b.category == "Work"));
    // newest first
    assert_eq!(view[0].title, "Jira");
}

/// Store whose saves always fail.
struct BrokenStore;

impl BookmarkStore for BrokenStore {
    fn load(&self) -> Result<Option<Vec<Bookmark>>, StoreError> {
        Ok(Some(Vec::new()))
    }

    fn save(&mut self, _bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        Err(StoreError::Io("read-only".to_string()))
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

#[test]
fn test_failed_save_keeps_in_memory_change() {
    let mut mgr = BookmarkManager::load(BrokenStore).unwrap();

    let err = mgr
        .add_bookmark(draft("Rust", "https://rust-lang.org", "Learning", &[]))
        .unwrap_err();

    assert!(matches!(err, BookmarkError::Store(StoreError::Io(_))));
    assert_eq!(mgr.bookmark_count(), 1);
}
