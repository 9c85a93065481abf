//! Property-based tests for AppSettings serialization round-trip.

use nexuslinks::types::bookmark::SortBy;
use nexuslinks::types::settings::{AppSettings, StorageBackend, StorageSettings, ViewSettings};
use proptest::prelude::*;

fn arb_settings() -> impl Strategy<Value = AppSettings> {
    (
        prop_oneof![Just(StorageBackend::Json), Just(StorageBackend::Sqlite)],
        proptest::option::of("[a-zA-Z0-9/._-]{1,40}"),
        prop_oneof![Just(SortBy::Date), Just(SortBy::Title)],
        prop_oneof![Just("all".to_string()), "[A-Z][a-z]{2,10}"],
    )
        .prop_map(|(backend, path, default_sort, default_category)| AppSettings {
            storage: StorageSettings { backend, path },
            view: ViewSettings {
                default_sort,
                default_category,
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }
}
