//! SQLite store
//!
//! Read-only connection to the collection database (`plants` and
//! `plant_events` tables). A missing table or column surfaces as
//! `StoreError::Schema` so startup fails loudly instead of analysing an empty
//! collection.

use super::{non_blank, PlantStore};
use crate::error::StoreError;
use crate::records::{LifeStatus, PlantEvent, PlantRecord};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row};
use std::path::Path;

const PLANTS_QUERY: &str = "
    SELECT id, collection_id, folder_id, owner_id,
           name, genus, species, variety, description,
           birth_date, life_status, death_date, death_cause,
           created_at, updated_at
    FROM plants
    ORDER BY id";

const EVENTS_QUERY: &str = "
    SELECT plant_id, event_type, event_date
    FROM plant_events
    ORDER BY plant_id, event_date";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a read-only connection to the database at `path`
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        tracing::debug!("Opened SQLite store {}", path.display());

        Ok(Self { conn })
    }

    /// Wrap an already open connection (in-memory databases in tests)
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl PlantStore for SqliteStore {
    fn load_plants(&self) -> Result<Vec<PlantRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(PLANTS_QUERY)
            .map_err(|e| StoreError::schema("plants", e))?;

        let rows = stmt.query_map([], |row| {
            Ok(PlantRecord {
                id: row.get("id")?,
                collection_id: row.get("collection_id")?,
                folder_id: row.get("folder_id")?,
                owner_id: row.get("owner_id")?,
                name: text(row, "name")?.unwrap_or_default(),
                genus: non_blank(text(row, "genus")?),
                species: non_blank(text(row, "species")?),
                variety: non_blank(text(row, "variety")?),
                description: text(row, "description")?,
                birth_date: non_blank(text(row, "birth_date")?),
                life_status: LifeStatus::parse(&text(row, "life_status")?.unwrap_or_default()),
                death_date: non_blank(text(row, "death_date")?),
                death_cause: non_blank(text(row, "death_cause")?),
                created_at: text(row, "created_at")?,
                updated_at: text(row, "updated_at")?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    fn load_events(&self) -> Result<Vec<PlantEvent>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(EVENTS_QUERY)
            .map_err(|e| StoreError::schema("plant_events", e))?;

        let rows = stmt.query_map([], |row| {
            Ok(PlantEvent {
                plant_id: row.get("plant_id")?,
                event_type: text(row, "event_type")?.unwrap_or_default(),
                event_date: text(row, "event_date")?.unwrap_or_default(),
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }
}

/// Column as text, whatever affinity SQLite stored it with
fn text(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<String>> {
    let value = match row.get_ref(column)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(sql: &str) -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(sql).unwrap();
        SqliteStore::from_connection(conn)
    }

    const SCHEMA: &str = "
        CREATE TABLE plants (
            id INTEGER PRIMARY KEY, collection_id INTEGER, folder_id INTEGER, owner_id INTEGER,
            name TEXT NOT NULL, genus TEXT, species TEXT, variety TEXT, description TEXT,
            birth_date TEXT, life_status TEXT, death_date TEXT, death_cause TEXT,
            created_at TEXT, updated_at TEXT
        );
        CREATE TABLE plant_events (
            event_id INTEGER PRIMARY KEY, plant_id INTEGER, event_type TEXT, event_date TEXT
        );";

    #[test]
    fn test_load_plants_and_events() {
        let store = store_with(&format!(
            "{SCHEMA}
            INSERT INTO plants (id, collection_id, name, genus, species, variety, birth_date, life_status, death_date, death_cause)
            VALUES (1, 10, 'Lola', 'Echeveria', 'elegans', '', '2020-01-01', 'dead', '2021-07-01', 'rot'),
                   (2, 10, 'Tom', 'Haworthia', 'attenuata', 'Zebra', '2021-02-02', 'alive', NULL, NULL);
            INSERT INTO plant_events (plant_id, event_type, event_date)
            VALUES (2, 'watering', '2024-01-04'), (2, 'watering', '2024-01-01');"
        ));

        let plants = store.load_plants().unwrap();
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].life_status, LifeStatus::Dead);
        assert_eq!(plants[0].variety, None); // blank -> absent
        assert_eq!(plants[0].collection_id, Some(10));
        assert_eq!(plants[1].variety.as_deref(), Some("Zebra"));
        assert_eq!(plants[1].death_date, None);

        let events = store.load_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_date, "2024-01-01");
    }

    #[test]
    fn test_missing_table_is_schema_error() {
        let store = store_with("CREATE TABLE plants (id INTEGER, name TEXT);");
        let err = store.load_plants().unwrap_err();
        assert!(matches!(err, StoreError::Schema { ref table, .. } if table == "plants"));

        let err = store.load_events().unwrap_err();
        assert!(matches!(err, StoreError::Schema { ref table, .. } if table == "plant_events"));
    }

    #[test]
    fn test_collection_database_status_words() {
        use crate::data::PlantCollection;
        use crate::metrics::DeriveOptions;
        use crate::summary::summarize;

        let store = store_with(&format!(
            "{SCHEMA}
            INSERT INTO plants (id, name, genus, species, birth_date, life_status, death_date, death_cause)
            VALUES (1, 'Лола', 'Echeveria', 'elegans', '2020-01-01', 'погибло', '2021-07-01', 'гниль'),
                   (2, 'Том', 'Haworthia', 'attenuata', '2021-02-02', 'живое', NULL, NULL);
            INSERT INTO plant_events (plant_id, event_type, event_date)
            VALUES (2, 'полив', '2024-01-01'), (2, 'полив', '2024-01-04');"
        ));
        let options = DeriveOptions {
            watering_event_type: "полив".to_string(),
        };

        let collection = PlantCollection::load(&store, &options).unwrap();
        let summary = summarize(&collection.view());

        assert_eq!((summary.total, summary.alive, summary.dead), (2, 1, 1));
        assert_eq!(summary.avg_lifespan_text, "1y 6m");
        assert_eq!(summary.avg_watering_text, "3.0 days");
        assert_eq!(summary.top_death_cause.as_deref(), Some("гниль"));
    }
}
