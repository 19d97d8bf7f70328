//! Lifespan and death month
//!
//! Both are defined for dead plants only. Each date is parsed on its own so
//! a bad birth date still leaves the death month usable.

use crate::error::IntegrityIssue;
use crate::records::{LifeStatus, PlantRecord};
use crate::utils::parse_timestamp;
use chrono::{Datelike, NaiveDateTime};

/// Lifespan-related metrics for one plant, plus anything wrong with its dates
#[derive(Debug, Default)]
pub struct LifespanMetrics {
    pub lifespan_days: Option<i64>,
    pub death_month: Option<u32>,
    pub issues: Vec<IntegrityIssue>,
}

pub fn lifespan_metrics(record: &PlantRecord) -> LifespanMetrics {
    let mut out = LifespanMetrics::default();

    let has_death_fields = record.death_date.is_some() || record.death_cause.is_some();
    let is_dead = record.life_status == LifeStatus::Dead;

    // death_date / death_cause are expected iff the plant is dead
    if is_dead != has_death_fields
        || (is_dead && (record.death_date.is_none() || record.death_cause.is_none()))
    {
        out.issues.push(IntegrityIssue::StatusMismatch {
            plant_id: record.id,
            status: record.life_status.to_string(),
        });
    }

    if !is_dead {
        return out;
    }

    let death = parse_field(record, "death_date", record.death_date.as_deref(), &mut out.issues);
    let birth = parse_field(record, "birth_date", record.birth_date.as_deref(), &mut out.issues);

    out.death_month = death.map(|d| d.month());

    if let (Some(birth), Some(death)) = (birth, death) {
        if death < birth {
            out.issues.push(IntegrityIssue::NegativeLifespan {
                plant_id: record.id,
                birth_date: record.birth_date.clone().unwrap_or_default(),
                death_date: record.death_date.clone().unwrap_or_default(),
            });
        } else {
            out.lifespan_days = Some((death - birth).num_days());
        }
    }

    out
}

fn parse_field(
    record: &PlantRecord,
    field: &'static str,
    raw: Option<&str>,
    issues: &mut Vec<IntegrityIssue>,
) -> Option<NaiveDateTime> {
    let raw = raw?;
    let parsed = parse_timestamp(raw);
    if parsed.is_none() {
        issues.push(IntegrityIssue::MalformedDate {
            plant_id: record.id,
            field,
            value: raw.to_string(),
        });
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifespan_547_days() {
        let plant = PlantRecord::new(1, "Lola", "Echeveria", "elegans")
            .born("2020-01-01")
            .died("2021-07-01", "rot");

        let m = lifespan_metrics(&plant);
        assert_eq!(m.lifespan_days, Some(547));
        assert_eq!(m.death_month, Some(7));
        assert!(m.issues.is_empty());
    }

    #[test]
    fn test_alive_plant_has_no_lifespan() {
        let plant = PlantRecord::new(1, "Lola", "Echeveria", "elegans").born("2015-03-01");
        let m = lifespan_metrics(&plant);
        assert!(m.lifespan_days.is_none());
        assert!(m.death_month.is_none());
        assert!(m.issues.is_empty());
    }

    #[test]
    fn test_negative_lifespan_reported_not_fatal() {
        let plant = PlantRecord::new(7, "Backwards", "Aloe", "vera")
            .born("2022-05-10")
            .died("2022-01-01", "frost");

        let m = lifespan_metrics(&plant);
        assert!(m.lifespan_days.is_none());
        assert_eq!(m.death_month, Some(1));
        assert!(matches!(
            m.issues.as_slice(),
            [IntegrityIssue::NegativeLifespan { plant_id: 7, .. }]
        ));
    }

    #[test]
    fn test_malformed_birth_keeps_death_month() {
        let plant = PlantRecord::new(3, "Odd", "Aloe", "vera")
            .born("someday")
            .died("2023-11-20", "pests");

        let m = lifespan_metrics(&plant);
        assert!(m.lifespan_days.is_none());
        assert_eq!(m.death_month, Some(11));
        assert_eq!(m.issues.len(), 1);
    }

    #[test]
    fn test_status_mismatch_flagged() {
        let mut plant = PlantRecord::new(4, "Ghost", "Aloe", "vera");
        plant.death_cause = Some("rot".to_string());

        let m = lifespan_metrics(&plant);
        assert!(matches!(
            m.issues.as_slice(),
            [IntegrityIssue::StatusMismatch { plant_id: 4, .. }]
        ));
    }
}
