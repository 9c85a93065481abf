//! JSON file backend: the collection is a single JSON array on disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::BookmarkStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// Stores the collection as a pretty-printed JSON array.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "bookmarks.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookmarkStore for JsonFileStore {
    /// A missing or blank file counts as "nothing stored".
    fn load(&self) -> Result<Option<Vec<Bookmark>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Io(format!("Failed to read {}: {}", self.path.display(), e)))?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let bookmarks: Vec<Bookmark> = serde_json::from_str(&content).map_err(|e| {
            StoreError::Corrupt(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(Some(bookmarks))
    }

    /// Writes to a sibling temp file, then renames it over the target.
    fn save(&mut self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Io(format!("Failed to create data directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(bookmarks)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp = self.temp_path();
        fs::write(&tmp, json)
            .map_err(|e| StoreError::Io(format!("Failed to write {}: {}", tmp.display(), e)))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Io(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            )));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}
