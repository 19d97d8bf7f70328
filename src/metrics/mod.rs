//! Metric Deriver
//!
//! Turns raw plant + event records into enriched records carrying
//! `watering_interval`, `lifespan_days` and `death_month`. Pure transform:
//! one output row per input plant, same order, and identical input always
//! produces identical output.
//!
//! A bad record never aborts the pass. Its metric stays absent and the
//! problem is returned as an `IntegrityIssue` (and logged).

pub mod lifespan;
pub mod watering;

pub use lifespan::{lifespan_metrics, LifespanMetrics};
pub use watering::{watering_interval, WateringLog};

use crate::error::IntegrityIssue;
use crate::records::{EnrichedPlant, PlantEvent, PlantRecord};
use crate::utils::parse_timestamp;
use rustc_hash::FxHashMap;

/// Event type counted as a watering unless configured otherwise
pub const DEFAULT_WATERING_EVENT: &str = "watering";

#[derive(Debug, Clone)]
pub struct DeriveOptions {
    pub watering_event_type: String,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            watering_event_type: DEFAULT_WATERING_EVENT.to_string(),
        }
    }
}

/// Enriched plants plus every integrity issue met along the way
#[derive(Debug, Clone, Default)]
pub struct Derivation {
    pub plants: Vec<EnrichedPlant>,
    pub issues: Vec<IntegrityIssue>,
}

/// Derive metrics with default options, logging issues at warn level
pub fn derive(plants: &[PlantRecord], events: &[PlantEvent]) -> Vec<EnrichedPlant> {
    derive_with(plants, events, &DeriveOptions::default()).plants
}

/// Derive metrics and return the integrity report alongside
pub fn derive_with(
    plants: &[PlantRecord],
    events: &[PlantEvent],
    options: &DeriveOptions,
) -> Derivation {
    let mut issues = Vec::new();

    let mut waterings: FxHashMap<i64, WateringLog> = FxHashMap::default();
    let mut watering_counts: FxHashMap<i64, usize> = FxHashMap::default();
    let mut event_counts: FxHashMap<i64, usize> = FxHashMap::default();

    for plant in plants {
        event_counts.insert(plant.id, 0);
    }

    for event in events {
        match event_counts.get_mut(&event.plant_id) {
            Some(count) => *count += 1,
            None => {
                issues.push(IntegrityIssue::OrphanEvent { plant_id: event.plant_id });
                continue;
            }
        }

        if event.event_type != options.watering_event_type {
            continue;
        }

        *watering_counts.entry(event.plant_id).or_insert(0) += 1;

        match parse_timestamp(&event.event_date) {
            Some(ts) => waterings.entry(event.plant_id).or_default().push(ts),
            None => issues.push(IntegrityIssue::MalformedDate {
                plant_id: event.plant_id,
                field: "event_date",
                value: event.event_date.clone(),
            }),
        }
    }

    let enriched = plants
        .iter()
        .map(|record| {
            let interval = waterings
                .get_mut(&record.id)
                .and_then(watering_interval);

            let LifespanMetrics {
                lifespan_days,
                death_month,
                issues: record_issues,
            } = lifespan_metrics(record);
            issues.extend(record_issues);

            EnrichedPlant {
                record: record.clone(),
                watering_interval: interval,
                lifespan_days,
                death_month,
                watering_count: watering_counts.get(&record.id).copied().unwrap_or(0),
                total_events: event_counts.get(&record.id).copied().unwrap_or(0),
            }
        })
        .collect();

    for issue in &issues {
        tracing::warn!(plant_id = issue.plant_id(), "{}", issue);
    }

    Derivation {
        plants: enriched,
        issues,
    }
}
