//! Collection Loading
//!
//! Reads the base records from a store once, derives the metric columns and
//! keeps the result as the immutable collection every request filters.

use crate::error::IntegrityIssue;
use crate::metrics::{derive_with, DeriveOptions};
use crate::records::{EnrichedPlant, PlantEvent, PlantRecord};
use crate::store::PlantStore;
use crate::utils::PlantView;
use anyhow::{Context, Result};

/// Enriched plants plus the integrity report of the load that produced them
#[derive(Debug, Clone, Default)]
pub struct PlantCollection {
    plants: Vec<EnrichedPlant>,
    issues: Vec<IntegrityIssue>,
}

impl PlantCollection {
    /// Load and enrich everything in `store`
    ///
    /// Fails only when the base records cannot be read; per-record problems
    /// end up in `issues()`.
    pub fn load(store: &dyn PlantStore, options: &DeriveOptions) -> Result<Self> {
        let plants = store
            .load_plants()
            .context("Failed to load plants")?;
        let events = store
            .load_events()
            .context("Failed to load plant events")?;

        tracing::info!("Plants: {}", plants.len());
        tracing::info!("Events: {}", events.len());

        let collection = Self::from_records(&plants, &events, options);

        if !collection.issues.is_empty() {
            tracing::warn!(
                "{} integrity issue(s) in the collection, affected metrics left empty",
                collection.issues.len()
            );
        }

        Ok(collection)
    }

    pub fn from_records(
        plants: &[PlantRecord],
        events: &[PlantEvent],
        options: &DeriveOptions,
    ) -> Self {
        let derived = derive_with(plants, events, options);
        Self {
            plants: derived.plants,
            issues: derived.issues,
        }
    }

    /// The whole collection as a record set
    pub fn view(&self) -> PlantView<'_> {
        PlantView::from_slice(&self.plants)
    }

    pub fn plants(&self) -> &[EnrichedPlant] {
        &self.plants
    }

    pub fn issues(&self) -> &[IntegrityIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
