use super::{select_group, Group, TAXON_TIERS};
use crate::insight::types::{Insight, Lens};
use crate::records::EnrichedPlant;
use crate::utils::PlantView;
use rand::Rng;

/// Average lifespan in years of dead plants, for the most specific group
/// that has data
pub fn lifespan_insight<R: Rng + ?Sized>(
    view: &PlantView,
    genera: &[String],
    species: &[String],
    rng: &mut R,
) -> Option<Insight> {
    let dead = view.filter(|p| p.is_dead() && p.lifespan_days.is_some());
    if dead.is_empty() {
        return None;
    }

    let group = select_group(&dead, genera, species, &TAXON_TIERS, rng);
    let years = group.view().mean_of(lifespan_years)?;

    let insight = match &group {
        Group::Species(s, _) => Insight::for_species(
            Lens::Lifespan,
            s,
            format!("Plants of species {} live {:.1} years on average", s, years),
        ),
        Group::Genus(g, _) => Insight::for_genus(
            Lens::Lifespan,
            g,
            format!("Plants of genus {} live {:.1} years on average", g, years),
        ),
        Group::Overall(_) => Insight::overall(
            Lens::Lifespan,
            format!("Average plant lifespan: {:.1} years", years),
        ),
    };
    Some(insight)
}

/// Lifespan in years, rounded to one decimal per plant before averaging
fn lifespan_years(plant: &EnrichedPlant) -> Option<f64> {
    plant
        .lifespan_days
        .map(|days| (days as f64 / 365.0 * 10.0).round() / 10.0)
}
