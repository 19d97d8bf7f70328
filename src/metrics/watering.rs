//! Watering interval
//!
//! Mean of the whole-day gaps between consecutive waterings of one plant.

use chrono::NaiveDateTime;
use smallvec::SmallVec;

/// Watering timestamps of one plant (most plants have well under 32)
pub type WateringLog = SmallVec<[NaiveDateTime; 32]>;

/// Mean gap in days between consecutive waterings
///
/// Sorts `log` in place. Returns `None` with fewer than two waterings; a
/// single watering says nothing about frequency, so it is not reported as 0.
pub fn watering_interval(log: &mut WateringLog) -> Option<f64> {
    if log.len() < 2 {
        return None;
    }

    log.sort_unstable();

    let total_days: i64 = log
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .sum();

    Some(total_days as f64 / (log.len() - 1) as f64)
}
