//! Property-based tests for bookmark collection operations.

#[path = "../common/mod.rs"]
mod common;

use chrono::Utc;
use common::{arb_collection, arb_draft, arb_tags};
use nexuslinks::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use nexuslinks::storage::MemoryStore;
use nexuslinks::types::bookmark::{CategoryFilter, SortBy, ViewQuery};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    /// Adding a draft yields exactly one matching entry with a fresh id and
    /// a timestamp no earlier than the call.
    #[test]
    fn add_inserts_exactly_one_matching_bookmark(
        existing in arb_collection(6),
        draft in arb_draft(),
    ) {
        let mut manager = BookmarkManager::load(MemoryStore::with_bookmarks(existing.clone())).unwrap();
        let before = Utc::now();

        let added = manager.add_bookmark(draft.clone()).unwrap();

        prop_assert!(existing.iter().all(|b| b.id != added.id));
        prop_assert!(added.created_at >= before);
        let matches: Vec<_> = manager.list_bookmarks().iter().filter(|b| b.id == added.id).collect();
        prop_assert_eq!(matches.len(), 1);
        let stored = matches[0];
        prop_assert_eq!(&stored.title, &draft.title);
        prop_assert_eq!(&stored.url, &draft.url);
        prop_assert_eq!(&stored.category, &draft.category);
        prop_assert_eq!(&stored.tags, &draft.tags);
        prop_assert_eq!(&stored.color, &draft.color);
        prop_assert_eq!(manager.bookmark_count(), existing.len() + 1);
    }

    /// Adding a bookmark then searching by its title finds it.
    #[test]
    fn add_then_search_by_title_finds_it(draft in arb_draft()) {
        let mut manager = BookmarkManager::load(MemoryStore::new()).unwrap();
        let added = manager.add_bookmark(draft.clone()).unwrap();

        let query = ViewQuery::new(CategoryFilter::All, draft.title.to_uppercase(), SortBy::Date);
        let found = manager.view(&query).iter().any(|b| b.id == added.id);
        prop_assert!(found, "search for '{}' should find {}", draft.title, added.id);
    }

    /// Deleting twice leaves the same state as deleting once.
    #[test]
    fn delete_is_idempotent(items in arb_collection(8), pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let id = items[pick.index(items.len())].id.clone();
        let mut manager = BookmarkManager::load(MemoryStore::with_bookmarks(items.clone())).unwrap();

        prop_assert!(manager.delete_bookmark(&id).unwrap());
        let once = manager.list_bookmarks().to_vec();
        prop_assert!(!manager.delete_bookmark(&id).unwrap());
        prop_assert_eq!(manager.list_bookmarks(), once.as_slice());
        prop_assert_eq!(once.len(), items.len() - 1);
    }

    /// Tag replacement touches only the tags of the targeted bookmark.
    #[test]
    fn update_tags_changes_only_tags(
        items in arb_collection(8),
        pick in any::<prop::sample::Index>(),
        tags in arb_tags(),
    ) {
        prop_assume!(!items.is_empty());
        let target = pick.index(items.len());
        let id = items[target].id.clone();
        let mut manager = BookmarkManager::load(MemoryStore::with_bookmarks(items.clone())).unwrap();

        prop_assert!(manager.update_tags(&id, tags.clone()).unwrap());

        for (i, (before, after)) in items.iter().zip(manager.list_bookmarks()).enumerate() {
            if i == target {
                let mut expected = before.clone();
                expected.tags = tags.clone();
                prop_assert_eq!(after, &expected);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}
