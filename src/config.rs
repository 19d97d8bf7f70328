//! Environment configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `SUCCULENT_STORE` | `db/succulentum.db` |
//! | `WATERING_EVENT_TYPE` | `watering` |
//! | `PORT` | `8050` |
//!
//! Missing or unparseable values fall back to the default.

use crate::metrics::{DeriveOptions, DEFAULT_WATERING_EVENT};
use std::path::PathBuf;

pub const DEFAULT_STORE: &str = "db/succulentum.db";
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub watering_event_type: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE),
            watering_event_type: DEFAULT_WATERING_EVENT.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the process env)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_path = set("SUCCULENT_STORE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE));

        let watering_event_type = set("WATERING_EVENT_TYPE")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_WATERING_EVENT.to_string());

        let port = match set("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            store_path,
            watering_event_type,
            port,
        }
    }

    pub fn derive_options(&self) -> DeriveOptions {
        DeriveOptions {
            watering_event_type: self.watering_event_type.clone(),
        }
    }
}
