//! RPC method handler for the NexusLinks JSON-RPC protocol.
//!
//! Kept separate from `rpc_server.rs` so it can be unit-tested directly.
//! `handle_method` dispatches a method call to the bookmark collection,
//! the view state, or the settings engine held by [`App`].

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::managers::form_manager::normalize_tag;
use crate::services::favicon::favicon_url;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::bookmark::{BookmarkDraft, CategoryFilter, SortBy, CATEGORIES, DEFAULT_COLOR};

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(|v| v.as_str())
}

fn required_str<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    str_param(params, name).ok_or_else(|| format!("missing {}", name))
}

/// Like `required_str`, but blank values are rejected as missing.
fn required_text<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    let value = required_str(params, name)?;
    if value.trim().is_empty() {
        return Err(format!("missing {}", name));
    }
    Ok(value)
}

fn tags_param(params: &Value) -> Result<Vec<String>, String> {
    match params.get("tags") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| {
                v.as_str()
                    .map(|s| s.to_string())
                    .ok_or_else(|| "invalid tags: expected an array of strings".to_string())
            })
            .collect(),
        Some(_) => Err("invalid tags: expected an array of strings".to_string()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Bookmarks ───
        "bookmark.add" => {
            let title = required_text(params, "title")?;
            let url = required_text(params, "url")?;
            let category = str_param(params, "category").unwrap_or(CATEGORIES[0]);
            let color = str_param(params, "color").unwrap_or(DEFAULT_COLOR);
            let mut tags = Vec::new();
            for raw in tags_param(params)? {
                tags.push(normalize_tag(&raw).map_err(|e| e.to_string())?);
            }
            let draft = BookmarkDraft {
                title: title.to_string(),
                url: url.to_string(),
                category: category.to_string(),
                tags,
                color: Some(color.to_string()),
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let bookmark = a.bookmarks.add_bookmark(draft).map_err(|e| e.to_string())?;
            to_json(&bookmark)
        }
        "bookmark.get" => {
            let id = required_str(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            match a.bookmarks.get_bookmark(id) {
                Some(b) => to_json(b),
                None => Ok(Value::Null),
            }
        }
        "bookmark.delete" => {
            let id = required_str(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a.bookmarks.delete_bookmark(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "removed": removed}))
        }
        "bookmark.update_tags" => {
            let id = required_str(params, "id")?;
            let tags = tags_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let updated = a.bookmarks.update_tags(id, tags).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "updated": updated}))
        }
        "bookmark.add_tag" => {
            let id = required_str(params, "id")?;
            let tag = required_str(params, "tag")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let updated = a.bookmarks.add_tag(id, tag).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "updated": updated}))
        }
        "bookmark.remove_tag" => {
            let id = required_str(params, "id")?;
            let tag = required_str(params, "tag")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let updated = a.bookmarks.remove_tag(id, tag).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "updated": updated}))
        }
        "bookmark.view" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if let Some(category) = str_param(params, "category") {
                a.set_category(CategoryFilter::parse(category));
            }
            if let Some(search) = str_param(params, "search") {
                a.set_search(search);
            }
            if let Some(sort) = str_param(params, "sort_by") {
                let sort_by = SortBy::parse(sort)
                    .ok_or_else(|| format!("invalid sort_by: {} (expected date or title)", sort))?;
                a.set_sort(sort_by);
            }
            let query = json!({
                "category": a.query().category.as_str(),
                "search": a.query().search,
                "sort_by": a.query().sort_by.as_str(),
            });
            let items = to_json(&a.visible_bookmarks())?;
            Ok(json!({"query": query, "items": items, "total": a.bookmarks.bookmark_count()}))
        }
        "bookmark.count" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"count": a.bookmarks.bookmark_count()}))
        }

        // ─── Categories & presentation ───
        "category.list" => Ok(json!(CATEGORIES)),
        "favicon.url" => {
            let url = required_str(params, "url")?;
            Ok(json!({"favicon": favicon_url(url)}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(a.settings_engine.get_settings())
        }
        "settings.set" => {
            let key = required_str(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
