//! Chart series
//!
//! Chart-ready numbers for the rendering collaborator. Drawing (colours,
//! layout, widgets) is not done here; every series only carries values,
//! labels and a title.

use crate::utils::{PlantView, MONTH_ABBREVIATIONS};
use serde::Serialize;

/// Genera shown in the watering chart when none are selected
pub const TOP_GENERA: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortalitySeries {
    pub title: String,
    pub alive: usize,
    pub dead: usize,
    /// Dead share of alive + dead, absent when both are zero
    pub dead_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalitySeries {
    pub title: String,
    pub labels: Vec<String>,
    /// Deaths per calendar month, January first, zero-filled
    pub counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CauseCount {
    pub cause: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CausesSeries {
    pub title: String,
    pub causes: Vec<CauseCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cohort {
    Alive,
    Dead,
}

/// Intervals of one genus/cohort pair (one box in a box plot)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WateringBox {
    pub genus: String,
    pub cohort: Cohort,
    pub label: String,
    pub intervals: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WateringSeries {
    pub title: String,
    pub boxes: Vec<WateringBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub mortality: MortalitySeries,
    pub seasonality: SeasonalitySeries,
    pub causes: CausesSeries,
    pub watering: WateringSeries,
}

pub fn chart_set(view: &PlantView, selected_genera: &[String]) -> ChartSet {
    ChartSet {
        mortality: mortality(view),
        seasonality: seasonality(view),
        causes: death_causes(view),
        watering: watering_distribution(view, selected_genera),
    }
}

pub fn mortality(view: &PlantView) -> MortalitySeries {
    let alive = view.alive().len();
    let dead = view.dead().len();
    let total = alive + dead;

    let dead_percent = (total > 0).then(|| dead as f64 / total as f64 * 100.0);
    let title = match dead_percent {
        Some(pct) => format!("Plant mortality: {}/{} ({:.1}%)", dead, total, pct),
        None => "Plant mortality".to_string(),
    };

    MortalitySeries {
        title,
        alive,
        dead,
        dead_percent,
    }
}

pub fn seasonality(view: &PlantView) -> SeasonalitySeries {
    let mut counts = vec![0usize; 12];
    for month in view.dead().iter().filter_map(|p| p.death_month) {
        if (1..=12).contains(&month) {
            counts[month as usize - 1] += 1;
        }
    }

    SeasonalitySeries {
        title: "Deaths by month".to_string(),
        labels: MONTH_ABBREVIATIONS.iter().map(|m| m.to_string()).collect(),
        counts,
    }
}

/// Death causes by frequency (ties in cause order)
pub fn death_causes(view: &PlantView) -> CausesSeries {
    let mut causes: Vec<CauseCount> = view
        .dead()
        .count_by(|p| p.death_cause())
        .into_iter()
        .map(|(cause, count)| CauseCount {
            cause: cause.to_string(),
            count,
        })
        .collect();
    causes.sort_by(|a, b| b.count.cmp(&a.count));

    CausesSeries {
        title: "Causes of death".to_string(),
        causes,
    }
}

/// Watering intervals per genus, alive and dead apart
///
/// Uses the selected genera in selection order, else the `TOP_GENERA` most
/// common genera in the view. Boxes without data are left out.
pub fn watering_distribution(view: &PlantView, selected_genera: &[String]) -> WateringSeries {
    let (genera, title): (Vec<String>, String) = if selected_genera.is_empty() {
        (
            top_genera(view, TOP_GENERA),
            format!("Watering intervals: top {} genera", TOP_GENERA),
        )
    } else {
        let title = match selected_genera {
            [only] => format!("Watering intervals: {}", only),
            many => format!("Watering intervals: {} genera", many.len()),
        };
        (selected_genera.to_vec(), title)
    };

    let mut boxes = Vec::new();
    for genus in &genera {
        let plants = view.filter(|p| p.genus() == Some(genus.as_str()));

        for (cohort, cohort_view, suffix) in [
            (Cohort::Alive, plants.alive(), "alive"),
            (Cohort::Dead, plants.dead(), "dead"),
        ] {
            let intervals: Vec<f64> = cohort_view.iter().filter_map(|p| p.watering_interval).collect();
            if !intervals.is_empty() {
                boxes.push(WateringBox {
                    genus: genus.clone(),
                    cohort,
                    label: format!("{} - {}", genus, suffix),
                    intervals,
                });
            }
        }
    }

    WateringSeries { title, boxes }
}

/// The `n` genera with the most plants (ties in genus order)
pub fn top_genera(view: &PlantView, n: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = view.count_by(|p| p.genus()).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(n).map(|(g, _)| g.to_string()).collect()
}
