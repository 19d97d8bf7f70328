//! Store collaborator
//!
//! The collection lives in an external store (a SQLite database written by
//! the collection manager, or exported CSV/Parquet tables). This module only
//! reads it, in bulk, once at startup.

#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod files;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
pub use files::FileStore;

use crate::error::StoreError;
use crate::records::{PlantEvent, PlantRecord};
use std::path::Path;

/// Bulk reader for the two record streams the analytics need
pub trait PlantStore {
    /// Every plant, in store order
    fn load_plants(&self) -> Result<Vec<PlantRecord>, StoreError>;

    /// Every event of every type, ordered by plant then date
    fn load_events(&self) -> Result<Vec<PlantEvent>, StoreError>;
}

/// Open the store at `path`
///
/// `.db` / `.sqlite` / `.sqlite3` files open the SQLite store; a directory
/// opens the table-file store.
pub fn open_store(path: &Path) -> Result<Box<dyn PlantStore>, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }

    if path.is_dir() {
        return Ok(Box::new(FileStore::open(path)?));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        #[cfg(feature = "sqlite")]
        "db" | "sqlite" | "sqlite3" => Ok(Box::new(SqliteStore::open(path)?)),
        other => Err(StoreError::UnsupportedFormat(format!(
            "{} (extension '{}')",
            path.display(),
            other
        ))),
    }
}

/// Blank text in an optional column means "no value"
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}
