use serde::{Deserialize, Serialize};

use super::bookmark::{ALL_CATEGORIES, SortBy};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub view: ViewSettings,
}

/// Where and how the bookmark collection is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Explicit file path for the collection. `None` means the platform data dir.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Json,
            path: None,
        }
    }
}

/// Storage engine selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Json,
    Sqlite,
}

impl StorageBackend {
    /// Default file name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            StorageBackend::Json => "bookmarks.json",
            StorageBackend::Sqlite => "bookmarks.db",
        }
    }
}

/// Initial filter and sort state of the bookmark view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewSettings {
    pub default_sort: SortBy,
    pub default_category: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            default_sort: SortBy::Date,
            default_category: ALL_CATEGORIES.to_string(),
        }
    }
}
