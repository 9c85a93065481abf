//! App Core for NexusLinks.
//!
//! Central struct holding the settings engine, the bookmark collection and
//! the UI-facing state: view filters, the add form, and the view cache.

use log::info;

use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::form_manager::AddBookmarkForm;
use crate::managers::view::ViewCache;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{BookmarkStore, JsonFileStore, SqliteStore};
use crate::types::bookmark::{Bookmark, CategoryFilter, SortBy, ViewQuery};
use crate::types::errors::AppError;
use crate::types::settings::{AppSettings, StorageBackend};

/// Store handle selected at runtime from the settings.
pub type DynStore = Box<dyn BookmarkStore>;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub bookmarks: BookmarkManager<DynStore>,
    pub add_form: AddBookmarkForm,
    query: ViewQuery,
    view_cache: ViewCache,
}

impl App {
    /// Loads settings from `settings_path` (or the platform default), opens
    /// the configured store and loads the collection.
    pub fn new(settings_path: Option<String>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.load()?;
        let store = open_store(&settings_engine, &settings)?;
        Self::with_store(settings_engine, store)
    }

    /// Builds the app around an already opened store.
    pub fn with_store(settings_engine: SettingsEngine, store: DynStore) -> Result<Self, AppError> {
        let view = &settings_engine.get_settings().view;
        let query = ViewQuery::new(
            CategoryFilter::parse(&view.default_category),
            "",
            view.default_sort,
        );
        let bookmarks = BookmarkManager::load(store)?;
        info!(
            "NexusLinks ready with {} bookmarks ({})",
            bookmarks.bookmark_count(),
            bookmarks.store().describe()
        );

        Ok(Self {
            settings_engine,
            bookmarks,
            add_form: AddBookmarkForm::default(),
            query,
            view_cache: ViewCache::new(),
        })
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.query.sort_by = sort_by;
    }

    /// The derived view for the current filters, served from the cache when
    /// neither the collection nor the filters changed.
    pub fn visible_bookmarks(&mut self) -> &[Bookmark] {
        self.view_cache
            .get_or_derive(self.bookmarks.list_bookmarks(), &self.query)
    }

    pub fn view_cache(&self) -> &ViewCache {
        &self.view_cache
    }
}

/// Opens the backend named in the settings at the resolved storage path.
pub fn open_store(engine: &SettingsEngine, settings: &AppSettings) -> Result<DynStore, AppError> {
    let path = engine.storage_path();
    info!("Opening {:?} store at {}", settings.storage.backend, path.display());
    let store: DynStore = match settings.storage.backend {
        StorageBackend::Json => Box::new(JsonFileStore::new(path)),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(path)?),
    };
    Ok(store)
}
