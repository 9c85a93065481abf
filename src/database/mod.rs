//! NexusLinks database layer.
//!
//! Provides SQLite connection management and schema migrations used by
//! [`crate::storage::sqlite::SqliteStore`].
//!
//! # Usage
//!
//! ```no_run
//! use nexuslinks::database::Database;
//!
//! let db = Database::open("bookmarks.db").expect("failed to open database");
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
