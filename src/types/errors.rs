use std::fmt;

// === StoreError ===

/// Errors raised by a bookmark storage backend.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io(String),
    /// The collection could not be serialized.
    Serialization(String),
    /// A SQLite operation failed.
    Database(String),
    /// Stored data exists but could not be parsed as a bookmark collection.
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Bookmark store I/O error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Bookmark store serialization error: {}", msg)
            }
            StoreError::Database(msg) => write!(f, "Bookmark database error: {}", msg),
            StoreError::Corrupt(msg) => write!(f, "Stored bookmarks are corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

// === FormError ===

/// Errors raised while collecting bookmark input from a form.
#[derive(Debug, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left blank.
    MissingField(&'static str),
    /// A tag was empty after trimming.
    EmptyTag,
    /// The form was submitted while closed.
    NotOpen,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "Missing required field: {}", field),
            FormError::EmptyTag => write!(f, "Tag cannot be empty"),
            FormError::NotOpen => write!(f, "Form is not open"),
        }
    }
}

impl std::error::Error for FormError {}

// === BookmarkError ===

/// Errors related to bookmark collection operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// The input was rejected before touching the collection.
    Invalid(FormError),
    /// The mutation was applied in memory but could not be persisted.
    Store(StoreError),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::Invalid(e) => write!(f, "Invalid bookmark input: {}", e),
            BookmarkError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BookmarkError {}

impl From<FormError> for BookmarkError {
    fn from(e: FormError) -> Self {
        BookmarkError::Invalid(e)
    }
}

impl From<StoreError> for BookmarkError {
    fn from(e: StoreError) -> Self {
        BookmarkError::Store(e)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === AppError ===

/// Errors that prevent the application from starting.
#[derive(Debug)]
pub enum AppError {
    Settings(SettingsError),
    Store(StoreError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Settings(e) => write!(f, "Failed to load settings: {}", e),
            AppError::Store(e) => write!(f, "Failed to open bookmark store: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Settings(e) => Some(e),
            AppError::Store(e) => Some(e),
        }
    }
}

impl From<SettingsError> for AppError {
    fn from(e: SettingsError) -> Self {
        AppError::Settings(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}
