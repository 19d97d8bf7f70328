//! Shared utilities
//!
//! - Dates: lenient timestamp parsing, month labels
//! - Grouping: the in-memory record-set view used by every component

pub mod dates;
pub mod grouping;

pub use dates::{month_name, parse_timestamp, MONTH_ABBREVIATIONS, MONTH_NAMES};
pub use grouping::PlantView;
