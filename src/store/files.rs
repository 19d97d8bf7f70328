//! Table-file store
//!
//! A directory holding `plants` and `plant_events` exported as Parquet or
//! CSV (`plants.parquet` is preferred over `plants.csv` when both exist).
//! Loaded with Polars, then flattened into typed records.

use super::{non_blank, PlantStore};
use crate::error::StoreError;
use crate::records::{LifeStatus, PlantEvent, PlantRecord};
use polars::prelude::*;
use std::path::{Path, PathBuf};

const PLANT_COLUMNS: [&str; 9] = [
    "id",
    "name",
    "genus",
    "species",
    "variety",
    "birth_date",
    "life_status",
    "death_date",
    "death_cause",
];

const EVENT_COLUMNS: [&str; 3] = ["plant_id", "event_type", "event_date"];

pub struct FileStore {
    plants_path: PathBuf,
    events_path: PathBuf,
}

impl FileStore {
    /// Locate both tables inside `dir`
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        let plants_path = locate_table(dir, "plants")?;
        let events_path = locate_table(dir, "plant_events")?;

        tracing::debug!(
            "File store: {} / {}",
            plants_path.display(),
            events_path.display()
        );

        Ok(Self {
            plants_path,
            events_path,
        })
    }
}

impl PlantStore for FileStore {
    fn load_plants(&self) -> Result<Vec<PlantRecord>, StoreError> {
        let df = read_table(&self.plants_path)?;
        require_columns(&df, "plants", &PLANT_COLUMNS)?;

        let ids = int_column(&df, "id")?;
        let collection_ids = int_column(&df, "collection_id")?;
        let folder_ids = int_column(&df, "folder_id")?;
        let owner_ids = int_column(&df, "owner_id")?;
        let names = text_column(&df, "name")?;
        let genera = text_column(&df, "genus")?;
        let species = text_column(&df, "species")?;
        let varieties = text_column(&df, "variety")?;
        let descriptions = text_column(&df, "description")?;
        let births = text_column(&df, "birth_date")?;
        let statuses = text_column(&df, "life_status")?;
        let deaths = text_column(&df, "death_date")?;
        let causes = text_column(&df, "death_cause")?;
        let created = text_column(&df, "created_at")?;
        let updated = text_column(&df, "updated_at")?;

        let mut plants = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let id = ids[i]
                .ok_or_else(|| StoreError::schema("plants", format!("null id at row {}", i)))?;

            plants.push(PlantRecord {
                id,
                collection_id: collection_ids[i],
                folder_id: folder_ids[i],
                owner_id: owner_ids[i],
                name: names[i].clone().unwrap_or_default(),
                genus: non_blank(genera[i].clone()),
                species: non_blank(species[i].clone()),
                variety: non_blank(varieties[i].clone()),
                description: descriptions[i].clone(),
                birth_date: non_blank(births[i].clone()),
                life_status: LifeStatus::parse(statuses[i].as_deref().unwrap_or_default()),
                death_date: non_blank(deaths[i].clone()),
                death_cause: non_blank(causes[i].clone()),
                created_at: created[i].clone(),
                updated_at: updated[i].clone(),
            });
        }

        Ok(plants)
    }

    fn load_events(&self) -> Result<Vec<PlantEvent>, StoreError> {
        let df = read_table(&self.events_path)?;
        require_columns(&df, "plant_events", &EVENT_COLUMNS)?;

        let plant_ids = int_column(&df, "plant_id")?;
        let types = text_column(&df, "event_type")?;
        let dates = text_column(&df, "event_date")?;

        let mut events = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let Some(plant_id) = plant_ids[i] else {
                tracing::warn!("plant_events row {} has no plant_id, skipped", i);
                continue;
            };
            events.push(PlantEvent {
                plant_id,
                event_type: types[i].clone().unwrap_or_default(),
                event_date: dates[i].clone().unwrap_or_default(),
            });
        }

        Ok(events)
    }
}

fn locate_table(dir: &Path, stem: &str) -> Result<PathBuf, StoreError> {
    ["parquet", "csv"]
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|p| p.is_file())
        .ok_or_else(|| StoreError::NotFound(dir.join(format!("{}.{{parquet,csv}}", stem))))
}

fn read_table(path: &Path) -> Result<DataFrame, StoreError> {
    let is_parquet = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));

    let df = if is_parquet {
        LazyFrame::scan_parquet(path, Default::default())?.collect()?
    } else {
        CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?
    };

    Ok(df)
}

fn require_columns(df: &DataFrame, table: &str, required: &[&str]) -> Result<(), StoreError> {
    let present = df.get_column_names();
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !present.iter().any(|c| c.as_str() == *name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(StoreError::schema(
            table,
            format!("missing column(s): {}", missing.join(", ")),
        ))
    }
}

/// Column values as text; an absent optional column reads as all-null
fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, StoreError> {
    let Ok(column) = df.column(name) else {
        return Ok(vec![None; df.height()]);
    };
    let cast = column.cast(&DataType::String)?;
    Ok(cast.str()?.into_iter().map(|v| v.map(str::to_string)).collect())
}

fn int_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>, StoreError> {
    let Ok(column) = df.column(name) else {
        return Ok(vec![None; df.height()]);
    };
    let cast = column.cast(&DataType::Int64)?;
    Ok(cast.i64()?.into_iter().collect())
}
