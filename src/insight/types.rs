use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistical viewpoint an insight is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lens {
    Lifespan,
    DeathCause,
    Watering,
    Seasonality,
    SurvivalComparison,
}

impl Lens {
    pub const ALL: [Lens; 5] = [
        Lens::Lifespan,
        Lens::DeathCause,
        Lens::Watering,
        Lens::Seasonality,
        Lens::SurvivalComparison,
    ];

    /// Lenses eligible for the current selection
    ///
    /// The cross-genus comparison only runs on a collection not narrowed by
    /// genus or species.
    pub fn candidates(genera: &[String], species: &[String]) -> &'static [Lens] {
        if genera.is_empty() && species.is_empty() {
            &Self::ALL
        } else {
            &Self::ALL[..4]
        }
    }
}

/// One rendered observation plus the taxon it was computed against
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub lens: Lens,
    pub text: String,
    pub genus: Option<String>,
    pub species: Option<String>,
}

impl Insight {
    pub(crate) fn overall(lens: Lens, text: String) -> Self {
        Self {
            lens,
            text,
            genus: None,
            species: None,
        }
    }

    pub(crate) fn for_genus(lens: Lens, genus: &str, text: String) -> Self {
        Self {
            lens,
            text,
            genus: Some(genus.to_string()),
            species: None,
        }
    }

    pub(crate) fn for_species(lens: Lens, species: &str, text: String) -> Self {
        Self {
            lens,
            text,
            genus: None,
            species: Some(species.to_string()),
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
