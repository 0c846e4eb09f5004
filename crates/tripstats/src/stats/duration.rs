//! Total and average trip duration.

use crate::error::{Error, Result};
use crate::table::TripTable;

/// Sum and arithmetic mean of the trip-duration column, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub trips: usize,
}

pub fn duration_stats(table: &TripTable) -> Result<DurationStats> {
    let trips = table.num_rows();
    if trips == 0 {
        return Err(Error::NoData);
    }
    // Null durations contribute nothing to the sum; the mean is taken over
    // all rows.
    let total_seconds: f64 = table.durations().iter().flatten().sum();
    Ok(DurationStats {
        total_seconds,
        mean_seconds: total_seconds / trips as f64,
        trips,
    })
}
