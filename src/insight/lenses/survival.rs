use crate::insight::types::{Insight, Lens};
use crate::utils::PlantView;

/// Genera need this many plants to be compared
const MIN_GENUS_PLANTS: usize = 3;

/// Smallest survival-rate gap (percentage points) worth reporting
const MATERIALITY_GAP: f64 = 10.0;

struct GenusSurvival<'a> {
    genus: &'a str,
    rate: f64,
    count: usize,
}

/// Best- vs worst-surviving genus across the view
pub fn survival_insight(view: &PlantView) -> Option<Insight> {
    let mut stats: Vec<GenusSurvival> = view
        .group_by(|p| p.genus())
        .into_iter()
        .filter(|(_, plants)| plants.len() >= MIN_GENUS_PLANTS)
        .map(|(genus, plants)| GenusSurvival {
            genus,
            rate: plants.alive().len() as f64 / plants.len() as f64 * 100.0,
            count: plants.len(),
        })
        .collect();

    if stats.len() < 2 {
        return None;
    }

    // stable: equal rates keep genus order
    stats.sort_by(|a, b| b.rate.total_cmp(&a.rate));

    let best = stats.first()?;
    let worst = stats.last()?;

    if best.genus == worst.genus
        || best.count < MIN_GENUS_PLANTS
        || worst.count < MIN_GENUS_PLANTS
        || (best.rate - worst.rate).abs() < MATERIALITY_GAP
    {
        return None;
    }

    let text = format!(
        "Plants of genus {} survive best ({:.1}%), while {} fare worst ({:.1}%)",
        best.genus, best.rate, worst.genus, worst.rate
    );
    Some(Insight::for_genus(Lens::SurvivalComparison, best.genus, text))
}
