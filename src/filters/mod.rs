//! Filter Facets
//!
//! Four facets narrow the collection: a free-text name substring plus
//! genus / species / variety value sets. They form the dependency chain
//! name → genus → species → variety; a facet's options depend only on the
//! facets before it.
//!
//! - `resolver`: per-facet option lists and trigger handling
//! - `description`: active-filter tags for the UI shell

pub mod description;
pub mod resolver;

pub use description::{describe, describe_text, NO_ACTIVE_FILTERS};
pub use resolver::{FacetOption, FacetOptions, FilterResolver, Resolution, NONE_LABEL};

use crate::records::EnrichedPlant;
use crate::utils::PlantView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Name,
    Genus,
    Species,
    Variety,
}

impl Facet {
    /// Dependency order
    pub const CHAIN: [Facet; 4] = [Facet::Name, Facet::Genus, Facet::Species, Facet::Variety];

    fn position(self) -> usize {
        match self {
            Facet::Name => 0,
            Facet::Genus => 1,
            Facet::Species => 2,
            Facet::Variety => 3,
        }
    }
}

/// Current filter state
///
/// Empty name or an empty value list means "no constraint". In `varieties`
/// the empty string stands for "no variety".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub name: String,
    pub genera: Vec<String>,
    pub species: Vec<String>,
    pub varieties: Vec<String>,
}

impl FilterSelection {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_genera(mut self, genera: &[&str]) -> Self {
        self.genera = genera.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_species(mut self, species: &[&str]) -> Self {
        self.species = species.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_varieties(mut self, varieties: &[&str]) -> Self {
        self.varieties = varieties.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.genera.is_empty()
            && self.species.is_empty()
            && self.varieties.is_empty()
    }

    /// All four facets at once: the record set statistics are computed on
    pub fn apply<'a>(&self, view: &PlantView<'a>) -> PlantView<'a> {
        let matcher = Matcher::new(self, Facet::CHAIN.len());
        view.filter(|p| matcher.matches(p))
    }

    /// Only the facets strictly before `facet` in the chain
    pub fn apply_upstream_of<'a>(&self, view: &PlantView<'a>, facet: Facet) -> PlantView<'a> {
        let matcher = Matcher::new(self, facet.position());
        view.filter(|p| matcher.matches(p))
    }
}

/// Selection compiled once per pass (lowercased needle, active facet count)
struct Matcher<'s> {
    selection: &'s FilterSelection,
    needle: Option<String>,
    facets: usize,
}

impl<'s> Matcher<'s> {
    fn new(selection: &'s FilterSelection, facets: usize) -> Self {
        let name = &selection.name;
        Self {
            selection,
            needle: (!name.trim().is_empty()).then(|| name.to_lowercase()),
            facets,
        }
    }

    fn matches(&self, plant: &EnrichedPlant) -> bool {
        Facet::CHAIN[..self.facets]
            .iter()
            .all(|facet| self.matches_facet(plant, *facet))
    }

    fn matches_facet(&self, plant: &EnrichedPlant, facet: Facet) -> bool {
        let sel = self.selection;
        match facet {
            Facet::Name => match &self.needle {
                Some(needle) => plant.name().to_lowercase().contains(needle.as_str()),
                None => true,
            },
            Facet::Genus => in_set(&sel.genera, plant.genus()),
            Facet::Species => in_set(&sel.species, plant.species()),
            Facet::Variety => {
                sel.varieties.is_empty()
                    || sel
                        .varieties
                        .iter()
                        .any(|v| v.as_str() == plant.variety().unwrap_or(""))
            }
        }
    }
}

fn in_set(values: &[String], value: Option<&str>) -> bool {
    if values.is_empty() {
        return true;
    }
    match value {
        Some(v) => values.iter().any(|s| s == v),
        None => false,
    }
}

/// Inputs the UI shell can send
///
/// Serialized as `{"trigger": "genus_filter", "value": [...]}`; signals
/// carry no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "trigger", content = "value", rename_all = "snake_case")]
pub enum Trigger {
    NameFilter(String),
    GenusFilter(Vec<String>),
    SpeciesFilter(Vec<String>),
    VarietyFilter(Vec<String>),
    Reset,
    RequestNewInsight,
}
