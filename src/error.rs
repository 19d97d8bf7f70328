//! Error types
//!
//! `StoreError` is fatal (the collection cannot be analysed without its base
//! records). `IntegrityIssue` describes a problem with a single record; it is
//! collected and logged, never propagated.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported store format: {0}")]
    UnsupportedFormat(String),

    #[error("schema mismatch in '{table}': {detail}")]
    Schema { table: String, detail: String },

    #[cfg(feature = "sqlite")]
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("polars: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn schema(table: &str, detail: impl ToString) -> Self {
        StoreError::Schema {
            table: table.to_string(),
            detail: detail.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    #[error("plant {plant_id}: unparseable {field} '{value}'")]
    MalformedDate {
        plant_id: i64,
        field: &'static str,
        value: String,
    },

    #[error("plant {plant_id}: death date {death_date} precedes birth date {birth_date}")]
    NegativeLifespan {
        plant_id: i64,
        birth_date: String,
        death_date: String,
    },

    #[error("plant {plant_id}: status '{status}' does not match its death date/cause")]
    StatusMismatch { plant_id: i64, status: String },

    #[error("event references unknown plant {plant_id}")]
    OrphanEvent { plant_id: i64 },
}

impl IntegrityIssue {
    pub fn plant_id(&self) -> i64 {
        match self {
            IntegrityIssue::MalformedDate { plant_id, .. }
            | IntegrityIssue::NegativeLifespan { plant_id, .. }
            | IntegrityIssue::StatusMismatch { plant_id, .. }
            | IntegrityIssue::OrphanEvent { plant_id } => *plant_id,
        }
    }
}
