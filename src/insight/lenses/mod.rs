//! Insight lenses
//!
//! Each lens narrows the view to the records it can use, picks a group via
//! the fallback tiers and renders one sentence. A lens with nothing to say
//! returns `None`.

pub mod death_cause;
pub mod lifespan;
pub mod seasonality;
pub mod survival;
pub mod watering;

pub use death_cause::death_cause_insight;
pub use lifespan::lifespan_insight;
pub use seasonality::seasonality_insight;
pub use survival::survival_insight;
pub use watering::watering_insight;

use crate::records::EnrichedPlant;
use crate::utils::PlantView;
use rand::seq::SliceRandom;
use rand::Rng;

/// Fallback tier policy
///
/// Tiers run in order: a selected species, a selected genus, any species
/// with `species_min` records, any genus with `genus_min` records, then the
/// whole view. Disabled tiers are skipped.
pub(crate) struct Tiers {
    pub selected_species: bool,
    pub species_min: Option<usize>,
    pub genus_min: usize,
}

/// Lifespan and death-cause lenses
pub(crate) const TAXON_TIERS: Tiers = Tiers {
    selected_species: true,
    species_min: Some(2),
    genus_min: 3,
};

/// Watering lens: genus level only
pub(crate) const GENUS_TIERS: Tiers = Tiers {
    selected_species: false,
    species_min: None,
    genus_min: 2,
};

/// Group chosen by the tiers, with its records
pub(crate) enum Group<'a> {
    Species(String, PlantView<'a>),
    Genus(String, PlantView<'a>),
    Overall(PlantView<'a>),
}

impl<'a> Group<'a> {
    pub fn view(&self) -> &PlantView<'a> {
        match self {
            Group::Species(_, view) | Group::Genus(_, view) | Group::Overall(view) => view,
        }
    }
}

/// Walk the tiers over `data` until one yields a candidate
pub(crate) fn select_group<'a, R: Rng + ?Sized>(
    data: &PlantView<'a>,
    genera: &[String],
    species: &[String],
    tiers: &Tiers,
    rng: &mut R,
) -> Group<'a> {
    if tiers.selected_species {
        if let Some(s) = pick_selected(data, species, EnrichedPlant::species, rng) {
            let view = data.filter(|p| p.species() == Some(s.as_str()));
            return Group::Species(s, view);
        }
    }

    if let Some(g) = pick_selected(data, genera, EnrichedPlant::genus, rng) {
        let view = data.filter(|p| p.genus() == Some(g.as_str()));
        return Group::Genus(g, view);
    }

    if let Some(min) = tiers.species_min {
        if let Some(s) = pick_frequent(data, min, EnrichedPlant::species, rng) {
            let view = data.filter(|p| p.species() == Some(s.as_str()));
            return Group::Species(s, view);
        }
    }

    if let Some(g) = pick_frequent(data, tiers.genus_min, EnrichedPlant::genus, rng) {
        let view = data.filter(|p| p.genus() == Some(g.as_str()));
        return Group::Genus(g, view);
    }

    Group::Overall(data.clone())
}

/// Random selected value that has at least one record in `data`
pub(crate) fn pick_selected<R, F>(
    data: &PlantView,
    selected: &[String],
    key: F,
    rng: &mut R,
) -> Option<String>
where
    R: Rng + ?Sized,
    F: Fn(&EnrichedPlant) -> Option<&str>,
{
    let valid: Vec<&String> = selected
        .iter()
        .filter(|v| data.iter().any(|p| key(p) == Some(v.as_str())))
        .collect();
    valid.choose(rng).map(|v| v.to_string())
}

/// Random key with at least `min` records, candidates in key order
fn pick_frequent<R, F>(data: &PlantView, min: usize, key: F, rng: &mut R) -> Option<String>
where
    R: Rng + ?Sized,
    F: Fn(&EnrichedPlant) -> Option<&str>,
{
    let valid: Vec<&str> = data
        .count_by(|p| key(p))
        .into_iter()
        .filter(|(_, count)| *count >= min)
        .map(|(k, _)| k)
        .collect();
    valid.choose(rng).map(|v| v.to_string())
}
