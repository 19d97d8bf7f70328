//! Succulent Collection Analytics
//!
//! Analytics pipeline over a personal succulent collection:
//! - `metrics/`: derived per-plant metrics (watering interval, lifespan, death month)
//! - `filters/`: cascading name → genus → species → variety facet resolution
//! - `summary`: headline statistics for a filtered record set
//! - `insight/`: randomly chosen statistical lens rendered as one sentence
//!
//! Loading (`store/`, `data`) happens once at startup; everything after that
//! works on `PlantView`s borrowed from the immutable collection.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod filters;
pub mod insight;
pub mod metrics;
pub mod records;
pub mod store;
pub mod summary;
pub mod utils;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use charts::{chart_set, ChartSet};
pub use config::AppConfig;
pub use data::PlantCollection;
pub use error::{IntegrityIssue, StoreError};
pub use export::to_dataframe;
pub use filters::{
    describe, describe_text, Facet, FacetOption, FacetOptions, FilterResolver, FilterSelection,
    Resolution, Trigger,
};
pub use insight::{Insight, InsightGenerator, Lens};
pub use metrics::{derive, derive_with, Derivation, DeriveOptions};
pub use records::{EnrichedPlant, LifeStatus, PlantEvent, PlantRecord};
pub use store::{open_store, PlantStore};
pub use summary::{summarize, Summary, NO_DATA};
pub use utils::PlantView;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
