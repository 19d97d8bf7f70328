use super::{select_group, Group, GENUS_TIERS};
use crate::insight::types::{Insight, Lens};
use crate::utils::PlantView;
use rand::Rng;

/// Average watering interval of a genus, or of the whole view
pub fn watering_insight<R: Rng + ?Sized>(
    view: &PlantView,
    genera: &[String],
    rng: &mut R,
) -> Option<Insight> {
    let with_data = view.filter(|p| p.watering_interval.is_some());
    if with_data.is_empty() {
        return None;
    }

    let group = select_group(&with_data, genera, &[], &GENUS_TIERS, rng);
    let interval = group.view().mean_of(|p| p.watering_interval)?;

    let insight = match &group {
        Group::Genus(g, _) => Insight::for_genus(
            Lens::Watering,
            g,
            format!("Plants of genus {} are watered every {:.1} days", g, interval),
        ),
        // no species tier for this lens
        Group::Species(_, _) | Group::Overall(_) => Insight::overall(
            Lens::Watering,
            format!("Average watering interval: {:.1} days", interval),
        ),
    };
    Some(insight)
}
