//! Filter Resolver
//!
//! Pure replacement for the reactive facet callbacks: given the base record
//! set and the current selection, compute every facet's reachable options.
//! Options are sorted by codepoint; the absent variety sorts first and is
//! shown as `(none)`.
//!
//! Stale downstream selections are NOT pruned here. The fresh option lists
//! are returned and the shell reconciles (see `FacetOptions::prune`); only an
//! explicit reset clears the selection.

use super::{Facet, FilterSelection, Trigger};
use crate::utils::PlantView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Label of the "no variety" option (its value is the empty string)
pub const NONE_LABEL: &str = "(none)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub label: String,
    pub value: String,
}

impl FacetOption {
    fn plain(value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub names: Vec<FacetOption>,
    pub genus: Vec<FacetOption>,
    pub species: Vec<FacetOption>,
    pub variety: Vec<FacetOption>,
}

impl FacetOptions {
    /// Drop selected values that are no longer offered
    ///
    /// The name substring is free text and is kept as is.
    pub fn prune(&self, selection: &FilterSelection) -> FilterSelection {
        fn keep(values: &[String], options: &[FacetOption]) -> Vec<String> {
            values
                .iter()
                .filter(|v| options.iter().any(|o| &o.value == *v))
                .cloned()
                .collect()
        }

        FilterSelection {
            name: selection.name.clone(),
            genera: keep(&selection.genera, &self.genus),
            species: keep(&selection.species, &self.species),
            varieties: keep(&selection.varieties, &self.variety),
        }
    }
}

/// Outcome of one resolution pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub selection: FilterSelection,
    pub options: FacetOptions,
    /// A reset signal was honoured
    pub reset: bool,
    /// The insight should be recomputed for the new state
    pub regenerate_insight: bool,
}

pub struct FilterResolver<'a> {
    base: PlantView<'a>,
}

impl<'a> FilterResolver<'a> {
    pub fn new(base: PlantView<'a>) -> Self {
        Self { base }
    }

    /// Every plant name; the name facet has no upstream
    pub fn name_options(&self) -> Vec<FacetOption> {
        self.base
            .distinct(|p| p.name())
            .into_iter()
            .filter(|n| !n.is_empty())
            .map(FacetOption::plain)
            .collect()
    }

    pub fn genus_options(&self, selection: &FilterSelection) -> Vec<FacetOption> {
        let upstream = selection.apply_upstream_of(&self.base, Facet::Genus);
        upstream
            .distinct(|p| p.genus())
            .into_iter()
            .flatten()
            .map(FacetOption::plain)
            .collect()
    }

    pub fn species_options(&self, selection: &FilterSelection) -> Vec<FacetOption> {
        let upstream = selection.apply_upstream_of(&self.base, Facet::Species);
        upstream
            .distinct(|p| p.species())
            .into_iter()
            .flatten()
            .map(FacetOption::plain)
            .collect()
    }

    pub fn variety_options(&self, selection: &FilterSelection) -> Vec<FacetOption> {
        let upstream = selection.apply_upstream_of(&self.base, Facet::Variety);
        // None < Some(_), so the placeholder comes first
        let varieties: BTreeSet<Option<&str>> = upstream.distinct(|p| p.variety());
        varieties
            .into_iter()
            .map(|v| match v {
                Some(v) => FacetOption::plain(v),
                None => FacetOption {
                    label: NONE_LABEL.to_string(),
                    value: String::new(),
                },
            })
            .collect()
    }

    pub fn options(&self, selection: &FilterSelection) -> FacetOptions {
        FacetOptions {
            names: self.name_options(),
            genus: self.genus_options(selection),
            species: self.species_options(selection),
            variety: self.variety_options(selection),
        }
    }

    /// Apply one batch of concurrently signalled triggers
    ///
    /// A reset anywhere in the batch wins over everything else. Otherwise each
    /// facet takes the last value sent for it.
    pub fn resolve(&self, current: &FilterSelection, triggers: &[Trigger]) -> Resolution {
        if triggers.iter().any(|t| matches!(t, Trigger::Reset)) {
            let selection = FilterSelection::default();
            return Resolution {
                options: self.options(&selection),
                selection,
                reset: true,
                regenerate_insight: true,
            };
        }

        let mut selection = current.clone();
        let mut insight_requested = false;

        for trigger in triggers {
            match trigger {
                Trigger::NameFilter(name) => selection.name = name.clone(),
                Trigger::GenusFilter(values) => selection.genera = values.clone(),
                Trigger::SpeciesFilter(values) => selection.species = values.clone(),
                Trigger::VarietyFilter(values) => selection.varieties = values.clone(),
                Trigger::RequestNewInsight => insight_requested = true,
                Trigger::Reset => {}
            }
        }

        Resolution {
            options: self.options(&selection),
            regenerate_insight: insight_requested || selection != *current,
            selection,
            reset: false,
        }
    }
}
