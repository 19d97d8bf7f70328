//! DataFrame export
//!
//! The enriched/filtered record set as a Polars `DataFrame`: the plant
//! schema followed by the derived metric columns. Absent values become
//! nulls.

use crate::records::PlantRecord;
use crate::utils::PlantView;
use polars::prelude::*;

pub fn to_dataframe(view: &PlantView) -> PolarsResult<DataFrame> {
    let ids: Vec<i64> = view.iter().map(|p| p.record.id).collect();
    let collection_ids: Vec<Option<i64>> = view.iter().map(|p| p.record.collection_id).collect();
    let folder_ids: Vec<Option<i64>> = view.iter().map(|p| p.record.folder_id).collect();
    let owner_ids: Vec<Option<i64>> = view.iter().map(|p| p.record.owner_id).collect();
    let names: Vec<String> = view.iter().map(|p| p.record.name.clone()).collect();
    let statuses: Vec<String> = view.iter().map(|p| p.record.life_status.to_string()).collect();

    let intervals: Vec<Option<f64>> = view.iter().map(|p| p.watering_interval).collect();
    let lifespans: Vec<Option<i64>> = view.iter().map(|p| p.lifespan_days).collect();
    let months: Vec<Option<u32>> = view.iter().map(|p| p.death_month).collect();
    let watering_counts: Vec<u32> = view.iter().map(|p| p.watering_count as u32).collect();
    let event_counts: Vec<u32> = view.iter().map(|p| p.total_events as u32).collect();

    df!(
        "id" => ids,
        "collection_id" => collection_ids,
        "folder_id" => folder_ids,
        "owner_id" => owner_ids,
        "name" => names,
        "genus" => text(view, |r| r.genus.as_ref()),
        "species" => text(view, |r| r.species.as_ref()),
        "variety" => text(view, |r| r.variety.as_ref()),
        "description" => text(view, |r| r.description.as_ref()),
        "birth_date" => text(view, |r| r.birth_date.as_ref()),
        "life_status" => statuses,
        "death_date" => text(view, |r| r.death_date.as_ref()),
        "death_cause" => text(view, |r| r.death_cause.as_ref()),
        "created_at" => text(view, |r| r.created_at.as_ref()),
        "updated_at" => text(view, |r| r.updated_at.as_ref()),
        "watering_interval" => intervals,
        "lifespan_days" => lifespans,
        "death_month" => months,
        "watering_count" => watering_counts,
        "total_events" => event_counts
    )
}

fn text<F>(view: &PlantView, field: F) -> Vec<Option<String>>
where
    F: Fn(&PlantRecord) -> Option<&String>,
{
    view.iter().map(|p| field(&p.record).cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::derive;
    use crate::records::PlantEvent;

    #[test]
    fn test_export_schema_and_nulls() {
        let plants = derive(
            &[
                PlantRecord::new(1, "Lola", "Echeveria", "elegans")
                    .born("2020-01-01")
                    .died("2021-07-01", "rot"),
                PlantRecord::new(2, "Tom", "Haworthia", "attenuata").with_variety("Zebra"),
            ],
            &[
                PlantEvent::new(2, "watering", "2024-01-01"),
                PlantEvent::new(2, "watering", "2024-01-05"),
            ],
        );

        let df = to_dataframe(&PlantView::from_slice(&plants)).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 20);

        let lifespan = df.column("lifespan_days").unwrap().i64().unwrap();
        assert_eq!(lifespan.get(0), Some(547));
        assert_eq!(lifespan.get(1), None);

        let interval = df.column("watering_interval").unwrap().f64().unwrap();
        assert_eq!(interval.get(1), Some(4.0));

        let variety = df.column("variety").unwrap().str().unwrap();
        assert_eq!(variety.get(0), None);
        assert_eq!(variety.get(1), Some("Zebra"));
    }

    #[test]
    fn test_export_empty_view() {
        let df = to_dataframe(&PlantView::default()).unwrap();
        assert_eq!(df.height(), 0);
        assert!(df.column("death_month").is_ok());
    }
}
