use super::pick_selected;
use crate::insight::types::{Insight, Lens};
use crate::records::EnrichedPlant;
use crate::utils::{month_name, PlantView};
use rand::Rng;

/// Month with the most deaths
///
/// A selected genus with deaths of its own replaces the overall answer.
pub fn seasonality_insight<R: Rng + ?Sized>(
    view: &PlantView,
    genera: &[String],
    rng: &mut R,
) -> Option<Insight> {
    let dead = view.filter(|p| p.is_dead() && p.death_month.is_some());
    let (worst_month, worst_count) = dead.most_frequent(|p| p.death_month)?;

    if let Some(genus) = pick_selected(&dead, genera, EnrichedPlant::genus, rng) {
        let genus_dead = dead.filter(|p| p.genus() == Some(genus.as_str()));
        if let Some((month, _)) = genus_dead.most_frequent(|p| p.death_month) {
            let text = format!(
                "Plants of genus {} most often die in {}",
                genus,
                display_month(month)
            );
            return Some(Insight::for_genus(Lens::Seasonality, &genus, text));
        }
    }

    let text = format!(
        "Most plants die in {} ({} cases)",
        display_month(worst_month),
        worst_count
    );
    Some(Insight::overall(Lens::Seasonality, text))
}

fn display_month(month: u32) -> String {
    month_name(month)
        .map(str::to_string)
        .unwrap_or_else(|| format!("month {}", month))
}
