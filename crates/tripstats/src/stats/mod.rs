//! The four aggregation routines. Each consumes a [`TripTable`](crate::table::TripTable)
//! read-only and fails with [`Error::NoData`](crate::error::Error::NoData)
//! when the filtered table is empty.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{DurationStats, duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{BirthYearStats, UserStats, user_stats};

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value with its count.
///
/// Tie-break: among values sharing the maximum count, the one whose first
/// occurrence has the smallest row index wins, so the result is stable in
/// table iteration order.
pub(crate) fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (row, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((row, 0));
        entry.1 += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.1.cmp(&b.1.1).then(b.1.0.cmp(&a.1.0)))
        .map(|(value, (_, count))| (value, count))
}
