use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accent color used when a bookmark carries none.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Fixed category labels offered for filtering and creation.
pub const CATEGORIES: [&str; 5] = ["Work", "Personal", "Shopping", "Social", "Learning"];

/// Wire value of the "no category filter" sentinel.
pub const ALL_CATEGORIES: &str = "all";

/// Represents a saved bookmark.
///
/// Serialized with camelCase keys so the stored collection keeps the
/// `{id, title, url, category, tags, color?, createdAt}` layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Returns the accent color, falling back to [`DEFAULT_COLOR`].
    pub fn accent_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }
}

/// A bookmark as submitted by the add form, before an id and timestamp exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl BookmarkDraft {
    /// Stamps the draft with an id and creation time.
    pub fn into_bookmark(self, id: String, created_at: DateTime<Utc>) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            category: self.category,
            tags: self.tags,
            color: self.color,
            created_at,
        }
    }
}

/// Category selection applied to the derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses the wire form, where `"all"` is the sentinel for no filtering.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => bookmark.category == *category,
        }
    }
}

/// Sort order of the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most recently created first.
    #[default]
    Date,
    /// Alphabetical by title.
    Title,
}

impl SortBy {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "date" => Some(SortBy::Date),
            "title" => Some(SortBy::Title),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Date => "date",
            SortBy::Title => "title",
        }
    }
}

/// The four-input key of the derived view, minus the collection itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ViewQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort_by: SortBy,
}

impl ViewQuery {
    pub fn new(category: CategoryFilter, search: impl Into<String>, sort_by: SortBy) -> Self {
        Self {
            category,
            search: search.into(),
            sort_by,
        }
    }
}

/// The two example bookmarks used when nothing has been stored yet.
pub fn seed_bookmarks(now: DateTime<Utc>) -> Vec<Bookmark> {
    vec![
        Bookmark {
            id: "1".to_string(),
            title: "GitHub".to_string(),
            url: "https://github.com".to_string(),
            category: "Work".to_string(),
            tags: vec!["development".to_string(), "code".to_string()],
            color: Some("#2563eb".to_string()),
            created_at: now,
        },
        Bookmark {
            id: "2".to_string(),
            title: "Stack Overflow".to_string(),
            url: "https://stackoverflow.com".to_string(),
            category: "Learning".to_string(),
            tags: vec!["programming".to_string(), "help".to_string()],
            color: Some("#f59e0b".to_string()),
            created_at: now,
        },
    ]
}
