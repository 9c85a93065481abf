//! NexusLinks: a small bookmark manager.
//!
//! Bookmarks are added, tagged, filtered, sorted and deleted through
//! [`managers::bookmark_manager::BookmarkManager`]; the whole collection is
//! written to a [`storage::BookmarkStore`] after every change.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
