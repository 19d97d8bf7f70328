//! Aggregate Summarizer
//!
//! Headline statistics for a filtered record set. Stateless: the same view
//! always yields the same `Summary`.

use crate::utils::PlantView;
use serde::Serialize;

/// Rendered in place of a statistic that has no data behind it
pub const NO_DATA: &str = "No data";

const DAYS_PER_YEAR: f64 = 365.0;
const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub alive: usize,
    pub dead: usize,

    /// Mean lifespan of dead plants with a known lifespan
    pub avg_lifespan_days: Option<f64>,
    pub avg_lifespan_text: String,

    /// Mean over every plant with a defined interval
    pub avg_watering_interval: Option<f64>,
    pub avg_watering_text: String,

    pub top_death_cause: Option<String>,
    pub top_death_cause_text: String,
}

impl Summary {
    /// Dominant cause cut to `max` characters for compact display
    pub fn short_cause(&self, max: usize) -> String {
        let text = &self.top_death_cause_text;
        if text.chars().count() > max {
            let head: String = text.chars().take(max).collect();
            format!("{}...", head)
        } else {
            text.clone()
        }
    }
}

pub fn summarize(view: &PlantView) -> Summary {
    let dead = view.dead();

    let avg_lifespan_days = dead.mean_of(|p| p.lifespan_days.map(|d| d as f64));
    let avg_watering_interval = view.mean_of(|p| p.watering_interval);

    // ties resolve to the smallest cause
    let top_death_cause = dead
        .most_frequent(|p| p.death_cause())
        .map(|(cause, _)| cause.to_string());

    Summary {
        total: view.len(),
        alive: view.alive().len(),
        dead: dead.len(),
        avg_lifespan_text: avg_lifespan_days
            .map(format_lifespan)
            .unwrap_or_else(|| NO_DATA.to_string()),
        avg_lifespan_days,
        avg_watering_text: avg_watering_interval
            .map(|d| format!("{:.1} days", d))
            .unwrap_or_else(|| NO_DATA.to_string()),
        avg_watering_interval,
        top_death_cause_text: top_death_cause
            .clone()
            .unwrap_or_else(|| NO_DATA.to_string()),
        top_death_cause,
    }
}

/// Days as `"{y}y {m}m"`, or `"{m} months"` under a year
pub fn format_lifespan(days: f64) -> String {
    let years = (days / DAYS_PER_YEAR).floor() as i64;
    let months = (days.rem_euclid(DAYS_PER_YEAR) / DAYS_PER_MONTH).floor() as i64;

    if years > 0 {
        format!("{}y {}m", years, months)
    } else {
        format!("{} months", months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{EnrichedPlant, LifeStatus, PlantRecord};

    fn plant(id: i64, cause: Option<&str>, lifespan: Option<i64>, interval: Option<f64>) -> EnrichedPlant {
        let mut record = PlantRecord::new(id, "p", "Aloe", "vera");
        if let Some(cause) = cause {
            record = record.died("2023-01-01", cause);
        }
        EnrichedPlant {
            record,
            watering_interval: interval,
            lifespan_days: lifespan,
            death_month: None,
            watering_count: 0,
            total_events: 0,
        }
    }

    #[test]
    fn test_counts_and_other_status() {
        let mut odd = plant(3, None, None, None);
        odd.record.life_status = LifeStatus::Other("gifted".to_string());
        let plants = vec![plant(1, None, None, None), plant(2, Some("rot"), Some(100), None), odd];

        let summary = summarize(&PlantView::from_slice(&plants));
        assert_eq!(summary.total, 3);
        assert_eq!(summary.alive, 1);
        assert_eq!(summary.dead, 1);
    }

    #[test]
    fn test_empty_view_is_no_data() {
        let summary = summarize(&PlantView::default());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_lifespan_text, NO_DATA);
        assert_eq!(summary.avg_watering_text, NO_DATA);
        assert_eq!(summary.top_death_cause_text, NO_DATA);
        assert!(summary.avg_lifespan_days.is_none());
    }

    #[test]
    fn test_averages_skip_absent() {
        let plants = vec![
            plant(1, None, None, Some(4.0)),
            plant(2, None, None, None),
            plant(3, Some("rot"), Some(400), Some(7.0)),
            plant(4, Some("frost"), None, None),
        ];
        let summary = summarize(&PlantView::from_slice(&plants));

        assert_eq!(summary.avg_watering_text, "5.5 days");
        assert_eq!(summary.avg_lifespan_days, Some(400.0));
        assert_eq!(summary.avg_lifespan_text, "1y 1m");
    }

    #[test]
    fn test_format_lifespan() {
        assert_eq!(format_lifespan(547.0), "1y 6m");
        assert_eq!(format_lifespan(95.0), "3 months");
        assert_eq!(format_lifespan(10.0), "0 months");
        assert_eq!(format_lifespan(730.0), "2y 0m");
    }

    #[test]
    fn test_top_cause_tie_is_stable() {
        let plants = vec![
            plant(1, Some("B"), None, None),
            plant(2, Some("A"), None, None),
            plant(3, Some("B"), None, None),
            plant(4, Some("A"), None, None),
        ];
        let first = summarize(&PlantView::from_slice(&plants));
        for _ in 0..10 {
            let again = summarize(&PlantView::from_slice(&plants));
            assert_eq!(again.top_death_cause, first.top_death_cause);
        }
        assert_eq!(first.top_death_cause.as_deref(), Some("A"));
    }

    #[test]
    fn test_short_cause() {
        let plants = vec![plant(1, Some("root rot after overwatering"), None, None)];
        let summary = summarize(&PlantView::from_slice(&plants));
        assert_eq!(summary.short_cause(15), "root rot after ...");
        assert_eq!(summary.short_cause(100), "root rot after overwatering");
    }
}
