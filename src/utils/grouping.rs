//! In-memory record-set view
//!
//! A `PlantView` is an ordered list of references into the immutable base
//! collection. Every filter or group-by allocates a new view; the base rows
//! are never touched, so one loaded collection can serve any number of
//! requests.
//!
//! Group keys are kept in `BTreeMap`/`BTreeSet` so iteration order (and with
//! it every tie-break downstream) is stable across runs.

use crate::records::EnrichedPlant;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct PlantView<'a> {
    rows: Vec<&'a EnrichedPlant>,
}

impl<'a> PlantView<'a> {
    pub fn new(rows: Vec<&'a EnrichedPlant>) -> Self {
        Self { rows }
    }

    pub fn from_slice(plants: &'a [EnrichedPlant]) -> Self {
        Self {
            rows: plants.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a EnrichedPlant> + '_ {
        self.rows.iter().copied()
    }

    /// Rows matching `predicate`, in the original order
    pub fn filter<F>(&self, predicate: F) -> PlantView<'a>
    where
        F: Fn(&EnrichedPlant) -> bool,
    {
        PlantView {
            rows: self.rows.iter().copied().filter(|p| predicate(*p)).collect(),
        }
    }

    pub fn alive(&self) -> PlantView<'a> {
        self.filter(EnrichedPlant::is_alive)
    }

    pub fn dead(&self) -> PlantView<'a> {
        self.filter(EnrichedPlant::is_dead)
    }

    /// Split rows by key; rows whose key is absent are dropped
    pub fn group_by<K, F>(&self, key: F) -> BTreeMap<K, PlantView<'a>>
    where
        K: Ord,
        F: Fn(&'a EnrichedPlant) -> Option<K>,
    {
        let mut groups: BTreeMap<K, PlantView<'a>> = BTreeMap::new();
        for plant in self.iter() {
            if let Some(k) = key(plant) {
                groups.entry(k).or_default().rows.push(plant);
            }
        }
        groups
    }

    /// Row count per key; rows whose key is absent are dropped
    pub fn count_by<K, F>(&self, key: F) -> BTreeMap<K, usize>
    where
        K: Ord,
        F: Fn(&'a EnrichedPlant) -> Option<K>,
    {
        let mut counts: BTreeMap<K, usize> = BTreeMap::new();
        for plant in self.iter() {
            if let Some(k) = key(plant) {
                *counts.entry(k).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Sorted distinct keys
    pub fn distinct<K, F>(&self, key: F) -> BTreeSet<K>
    where
        K: Ord,
        F: Fn(&'a EnrichedPlant) -> K,
    {
        self.iter().map(key).collect()
    }

    /// Arithmetic mean over the rows where `value` is present
    pub fn mean_of<F>(&self, value: F) -> Option<f64>
    where
        F: Fn(&EnrichedPlant) -> Option<f64>,
    {
        let (sum, n) = self
            .iter()
            .filter_map(value)
            .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));

        if n == 0 {
            None
        } else {
            Some(sum / n as f64)
        }
    }

    /// Most frequent key and its count
    ///
    /// Ties go to the smallest key, so the answer never depends on row order.
    pub fn most_frequent<K, F>(&self, key: F) -> Option<(K, usize)>
    where
        K: Ord + Clone,
        F: Fn(&'a EnrichedPlant) -> Option<K>,
    {
        let mut best: Option<(K, usize)> = None;
        for (k, count) in self.count_by(key) {
            let better = match &best {
                Some((_, best_count)) => count > *best_count,
                None => true,
            };
            if better {
                best = Some((k, count));
            }
        }
        best
    }

    /// Owned copies of the rows (for serialization at the edges)
    pub fn to_records(&self) -> Vec<EnrichedPlant> {
        self.iter().cloned().collect()
    }
}

impl<'a> FromIterator<&'a EnrichedPlant> for PlantView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a EnrichedPlant>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
