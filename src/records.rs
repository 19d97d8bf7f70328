//! Plant and Event Records
//!
//! Raw records exactly as the store hands them over (date columns stay raw
//! text so one malformed value only affects its own record), plus the
//! enriched record carrying the derived metric columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Life status of a plant
///
/// The collection database records statuses in Russian (`живое` /
/// `погибло`); both those and `alive` / `dead` are accepted. Anything else is
/// kept verbatim in `Other` so it still counts towards totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LifeStatus {
    #[default]
    Alive,
    Dead,
    Other(String),
}

impl LifeStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "alive" | "живое" => LifeStatus::Alive,
            "dead" | "погибло" => LifeStatus::Dead,
            _ => LifeStatus::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LifeStatus::Alive => "alive",
            LifeStatus::Dead => "dead",
            LifeStatus::Other(s) => s,
        }
    }
}

impl From<String> for LifeStatus {
    fn from(raw: String) -> Self {
        LifeStatus::parse(&raw)
    }
}

impl From<LifeStatus> for String {
    fn from(status: LifeStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for LifeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the `plants` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub id: i64,
    pub collection_id: Option<i64>,
    pub folder_id: Option<i64>,
    pub owner_id: Option<i64>,
    pub name: String,
    pub genus: Option<String>,
    pub species: Option<String>,
    pub variety: Option<String>,
    pub description: Option<String>,
    pub birth_date: Option<String>,
    pub life_status: LifeStatus,
    pub death_date: Option<String>,
    pub death_cause: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl PlantRecord {
    /// Alive plant with the given taxonomy and no dates
    pub fn new(id: i64, name: &str, genus: &str, species: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            genus: Some(genus.to_string()),
            species: Some(species.to_string()),
            ..Default::default()
        }
    }

    pub fn with_variety(mut self, variety: &str) -> Self {
        self.variety = Some(variety.to_string());
        self
    }

    pub fn born(mut self, birth_date: &str) -> Self {
        self.birth_date = Some(birth_date.to_string());
        self
    }

    /// Mark as dead on `death_date` from `cause`
    pub fn died(mut self, death_date: &str, cause: &str) -> Self {
        self.life_status = LifeStatus::Dead;
        self.death_date = Some(death_date.to_string());
        self.death_cause = Some(cause.to_string());
        self
    }
}

/// One row of the `plant_events` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantEvent {
    pub plant_id: i64,
    pub event_type: String,
    pub event_date: String,
}

impl PlantEvent {
    pub fn new(plant_id: i64, event_type: &str, event_date: &str) -> Self {
        Self {
            plant_id,
            event_type: event_type.to_string(),
            event_date: event_date.to_string(),
        }
    }
}

/// Plant record plus derived metrics (recomputed on every load, never stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPlant {
    #[serde(flatten)]
    pub record: PlantRecord,
    /// Mean days between consecutive waterings (needs >= 2 waterings)
    pub watering_interval: Option<f64>,
    /// Days from birth to death (dead plants only)
    pub lifespan_days: Option<i64>,
    /// Calendar month of death, 1-12 (dead plants only)
    pub death_month: Option<u32>,
    pub watering_count: usize,
    pub total_events: usize,
}

impl EnrichedPlant {
    pub fn is_alive(&self) -> bool {
        self.record.life_status == LifeStatus::Alive
    }

    pub fn is_dead(&self) -> bool {
        self.record.life_status == LifeStatus::Dead
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn genus(&self) -> Option<&str> {
        self.record.genus.as_deref()
    }

    pub fn species(&self) -> Option<&str> {
        self.record.species.as_deref()
    }

    pub fn variety(&self) -> Option<&str> {
        self.record.variety.as_deref()
    }

    pub fn death_cause(&self) -> Option<&str> {
        self.record.death_cause.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_status_parse() {
        assert_eq!(LifeStatus::parse("alive"), LifeStatus::Alive);
        assert_eq!(LifeStatus::parse(" Dead "), LifeStatus::Dead);
        assert_eq!(
            LifeStatus::parse("dormant"),
            LifeStatus::Other("dormant".to_string())
        );
        assert_eq!(LifeStatus::parse("живое"), LifeStatus::Alive);
        assert_eq!(LifeStatus::parse("Погибло"), LifeStatus::Dead);
    }

    #[test]
    fn test_life_status_serde_as_string() {
        let json = serde_json::to_string(&LifeStatus::Dead).unwrap();
        assert_eq!(json, "\"dead\"");

        let status: LifeStatus = serde_json::from_str("\"gifted\"").unwrap();
        assert_eq!(status, LifeStatus::Other("gifted".to_string()));
    }

    #[test]
    fn test_builder_sets_death_fields() {
        let plant = PlantRecord::new(1, "Lola", "Echeveria", "elegans")
            .born("2020-01-01")
            .died("2021-07-01", "rot");

        assert_eq!(plant.life_status, LifeStatus::Dead);
        assert_eq!(plant.death_date.as_deref(), Some("2021-07-01"));
        assert_eq!(plant.death_cause.as_deref(), Some("rot"));
        assert!(plant.variety.is_none());
    }
}
