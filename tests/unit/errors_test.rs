use nexuslinks::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Io("disk full".to_string()).to_string(),
        "Bookmark store I/O error: disk full"
    );
    assert_eq!(
        StoreError::Serialization("bad float".to_string()).to_string(),
        "Bookmark store serialization error: bad float"
    );
    assert_eq!(
        StoreError::Database("locked".to_string()).to_string(),
        "Bookmark database error: locked"
    );
    assert_eq!(
        StoreError::Corrupt("expected value at line 1".to_string()).to_string(),
        "Stored bookmarks are corrupt: expected value at line 1"
    );
}

#[test]
fn store_error_from_rusqlite() {
    let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, StoreError::Database(_)));
}

// === FormError Tests ===

#[test]
fn form_error_display_variants() {
    assert_eq!(
        FormError::MissingField("title").to_string(),
        "Missing required field: title"
    );
    assert_eq!(FormError::EmptyTag.to_string(), "Tag cannot be empty");
    assert_eq!(FormError::NotOpen.to_string(), "Form is not open");
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_wraps_form_and_store_errors() {
    let invalid: BookmarkError = FormError::EmptyTag.into();
    assert_eq!(invalid.to_string(), "Invalid bookmark input: Tag cannot be empty");

    let store: BookmarkError = StoreError::Io("gone".to_string()).into();
    assert_eq!(store.to_string(), "Bookmark store I/O error: gone");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("view.nope".to_string()).to_string(),
        "Invalid settings key: view.nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("42".to_string()).to_string(),
        "Invalid settings value: 42"
    );
}

// === AppError Tests ===

#[test]
fn app_error_exposes_source() {
    use std::error::Error;

    let err: AppError = StoreError::Corrupt("truncated".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Failed to open bookmark store: Stored bookmarks are corrupt: truncated"
    );
    assert!(err.source().is_some());

    let err: AppError = SettingsError::IoError("denied".to_string()).into();
    assert!(err.to_string().starts_with("Failed to load settings"));
}

#[test]
fn errors_are_boxable() {
    let err: Box<dyn std::error::Error> = Box::new(FormError::NotOpen);
    assert!(err.source().is_none());
}
