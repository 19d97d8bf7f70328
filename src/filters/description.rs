//! Active-filter tags
//!
//! One tag per active facet, at most three values spelled out.

use super::resolver::NONE_LABEL;
use super::FilterSelection;

pub const NO_ACTIVE_FILTERS: &str = "No active filters";

const SHOWN_VALUES: usize = 3;

/// Tags for the active facets, in chain order (empty when nothing is active)
pub fn describe(selection: &FilterSelection) -> Vec<String> {
    let mut tags = Vec::new();

    let name = selection.name.trim();
    if !name.is_empty() {
        tags.push(format!("Name: {}", name));
    }
    if !selection.genera.is_empty() {
        tags.push(format!("Genera: {}", list(&selection.genera)));
    }
    if !selection.species.is_empty() {
        tags.push(format!("Species: {}", list(&selection.species)));
    }
    if !selection.varieties.is_empty() {
        tags.push(format!("Varieties: {}", list(&selection.varieties)));
    }

    tags
}

/// Tags joined with ` | `, or the no-filter line
pub fn describe_text(selection: &FilterSelection) -> String {
    let tags = describe(selection);
    if tags.is_empty() {
        NO_ACTIVE_FILTERS.to_string()
    } else {
        tags.join(" | ")
    }
}

fn list(values: &[String]) -> String {
    let shown: Vec<&str> = values
        .iter()
        .take(SHOWN_VALUES)
        .map(|v| if v.is_empty() { NONE_LABEL } else { v.as_str() })
        .collect();

    let mut text = shown.join(", ");
    if values.len() > SHOWN_VALUES {
        text.push_str(&format!(" (+{})", values.len() - SHOWN_VALUES));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters() {
        assert!(describe(&FilterSelection::default()).is_empty());
        assert_eq!(describe_text(&FilterSelection::default()), NO_ACTIVE_FILTERS);
    }

    #[test]
    fn test_overflow_count() {
        let sel = FilterSelection::default()
            .with_name("lo")
            .with_genera(&["Aloe", "Echeveria", "Haworthia", "Sedum", "Crassula"]);

        assert_eq!(
            describe(&sel),
            vec![
                "Name: lo".to_string(),
                "Genera: Aloe, Echeveria, Haworthia (+2)".to_string()
            ]
        );
    }

    #[test]
    fn test_none_variety_label() {
        let sel = FilterSelection::default().with_varieties(&["", "Zebra"]);
        assert_eq!(describe_text(&sel), "Varieties: (none), Zebra");
    }
}
