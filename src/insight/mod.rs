//! Insight Generator
//!
//! One data-backed sentence about the filtered collection, drawn from a
//! randomly chosen lens with fallback tiers when the preferred grouping is
//! too sparse.

pub mod generator;
pub mod lenses;
pub mod types;

pub use generator::InsightGenerator;
pub use types::{Insight, Lens};
