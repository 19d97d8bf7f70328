use super::{select_group, Group, TAXON_TIERS};
use crate::insight::types::{Insight, Lens};
use crate::utils::PlantView;
use rand::Rng;

/// Most frequent death cause (ties to the alphabetically first cause)
pub fn death_cause_insight<R: Rng + ?Sized>(
    view: &PlantView,
    genera: &[String],
    species: &[String],
    rng: &mut R,
) -> Option<Insight> {
    let dead = view.filter(|p| p.is_dead() && p.death_cause().is_some());
    if dead.is_empty() {
        return None;
    }

    let group = select_group(&dead, genera, species, &TAXON_TIERS, rng);
    let (cause, _) = group.view().most_frequent(|p| p.death_cause())?;

    let insight = match &group {
        Group::Species(s, _) => Insight::for_species(
            Lens::DeathCause,
            s,
            format!("The most common cause of death for {} is {}", s, cause),
        ),
        Group::Genus(g, _) => Insight::for_genus(
            Lens::DeathCause,
            g,
            format!("The most common cause of death for plants of genus {} is {}", g, cause),
        ),
        Group::Overall(_) => Insight::overall(
            Lens::DeathCause,
            format!("The most common cause of plant death is {}", cause),
        ),
    };
    Some(insight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{EnrichedPlant, PlantRecord};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dead(id: i64, genus: &str, species: &str, cause: &str) -> EnrichedPlant {
        EnrichedPlant {
            record: PlantRecord::new(id, "p", genus, species).died("2023-05-01", cause),
            watering_interval: None,
            lifespan_days: None,
            death_month: Some(5),
            watering_count: 0,
            total_events: 0,
        }
    }

    #[test]
    fn test_selected_genus_mode() {
        let plants = vec![
            dead(1, "Aloe", "vera", "rot"),
            dead(2, "Aloe", "striata", "frost"),
            dead(3, "Aloe", "arborescens", "rot"),
            dead(4, "Sedum", "acre", "pests"),
        ];
        let mut rng = StdRng::seed_from_u64(11);
        let genera = vec!["Aloe".to_string()];
        let insight =
            death_cause_insight(&PlantView::from_slice(&plants), &genera, &[], &mut rng).unwrap();

        assert_eq!(
            insight.text,
            "The most common cause of death for plants of genus Aloe is rot"
        );
        assert_eq!(insight.genus.as_deref(), Some("Aloe"));
    }

    #[test]
    fn test_overall_tie_is_deterministic() {
        let plants = vec![dead(1, "Aloe", "vera", "rot"), dead(2, "Sedum", "acre", "frost")];
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let insight =
                death_cause_insight(&PlantView::from_slice(&plants), &[], &[], &mut rng).unwrap();
            assert_eq!(insight.text, "The most common cause of plant death is frost");
        }
    }

    #[test]
    fn test_no_causes() {
        let mut plant = dead(1, "Aloe", "vera", "rot");
        plant.record.death_cause = None;
        let plants = vec![plant];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(death_cause_insight(&PlantView::from_slice(&plants), &[], &[], &mut rng).is_none());
    }
}
