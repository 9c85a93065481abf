//! Property-based round-trip tests for the storage backends.

#[path = "../common/mod.rs"]
mod common;

use common::arb_collection;
use nexuslinks::storage::{BookmarkStore, JsonFileStore, SqliteStore};
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Save(Load()) followed by Load() reproduces the collection field by field.
    #[test]
    fn json_store_roundtrip(items in arb_collection(10)) {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("bookmarks.json"));

        store.save(&items).unwrap();
        let loaded = store.load().unwrap().unwrap();
        store.save(&loaded).unwrap();

        prop_assert_eq!(store.load().unwrap().unwrap(), items);
    }

    #[test]
    fn sqlite_store_roundtrip(items in arb_collection(10)) {
        let mut store = SqliteStore::open_in_memory().unwrap();

        store.save(&items).unwrap();
        let loaded = store.load().unwrap().unwrap();
        store.save(&loaded).unwrap();

        prop_assert_eq!(store.load().unwrap().unwrap(), items);
    }
}
