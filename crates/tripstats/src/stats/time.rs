//! Most frequent times of travel.

use crate::error::{Error, Result};
use crate::stats::mode;
use crate::table::TripTable;

/// Most common start month, day of week, and hour. Month is 1-12, day is
/// 0-6 with Monday as 0, hour is 0-23.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

pub fn time_stats(table: &TripTable) -> Result<TimeStats> {
    if table.is_empty() {
        return Err(Error::NoData);
    }
    let (month, _) = mode(table.months().iter().flatten()).ok_or(Error::NoData)?;
    let (day, _) = mode(table.days().iter().flatten()).ok_or(Error::NoData)?;
    let (hour, _) = mode(table.hours().iter().flatten()).ok_or(Error::NoData)?;
    Ok(TimeStats { month, day, hour })
}
