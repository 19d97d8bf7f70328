use super::lenses::{
    death_cause_insight, lifespan_insight, seasonality_insight, survival_insight, watering_insight,
};
use super::types::{Insight, Lens};
use crate::utils::PlantView;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks a lens at random and renders its insight
///
/// All randomness (lens choice and in-lens group choice) comes from the
/// injected `rng`, so a seeded source makes output reproducible.
pub struct InsightGenerator<R> {
    rng: R,
}

impl InsightGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> InsightGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform choice among the lenses eligible for this selection
    pub fn choose_lens(&mut self, genera: &[String], species: &[String]) -> Lens {
        let candidates = Lens::candidates(genera, species);
        candidates[self.rng.gen_range(0..candidates.len())]
    }

    /// Insight for `view` under the active genus/species selection
    ///
    /// `None` means "insufficient data": the chosen lens had nothing to say.
    /// No other lens is tried.
    pub fn generate(
        &mut self,
        view: &PlantView,
        genera: &[String],
        species: &[String],
    ) -> Option<Insight> {
        if view.is_empty() {
            return None;
        }

        let lens = self.choose_lens(genera, species);
        tracing::debug!(?lens, plants = view.len(), "Generating insight");

        self.generate_with_lens(lens, view, genera, species)
    }

    /// Run one specific lens
    pub fn generate_with_lens(
        &mut self,
        lens: Lens,
        view: &PlantView,
        genera: &[String],
        species: &[String],
    ) -> Option<Insight> {
        let rng = &mut self.rng;
        match lens {
            Lens::Lifespan => lifespan_insight(view, genera, species, rng),
            Lens::DeathCause => death_cause_insight(view, genera, species, rng),
            Lens::Watering => watering_insight(view, genera, rng),
            Lens::Seasonality => seasonality_insight(view, genera, rng),
            Lens::SurvivalComparison => survival_insight(view),
        }
    }
}
