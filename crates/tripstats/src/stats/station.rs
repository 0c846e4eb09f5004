//! Most popular stations and trip.

use crate::error::{Error, Result};
use crate::stats::mode;
use crate::table::TripTable;

/// Most common start station, end station, and ordered (start, end) pair,
/// each with its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub start_count: usize,
    pub end_station: String,
    pub end_count: usize,
    pub trip: (String, String),
    pub trip_count: usize,
}

pub fn station_stats(table: &TripTable) -> Result<StationStats> {
    if table.is_empty() {
        return Err(Error::NoData);
    }

    let (start_station, start_count) =
        mode(table.start_stations().iter().flatten()).ok_or(Error::NoData)?;
    let (end_station, end_count) =
        mode(table.end_stations().iter().flatten()).ok_or(Error::NoData)?;

    // Group by the ordered station pair; rows with a missing station on
    // either end don't form a pair.
    let pairs = table
        .start_stations()
        .iter()
        .zip(table.end_stations().iter())
        .filter_map(|(start, end)| Some((start?, end?)));
    let ((trip_start, trip_end), trip_count) = mode(pairs).ok_or(Error::NoData)?;

    Ok(StationStats {
        start_station: start_station.to_string(),
        start_count,
        end_station: end_station.to_string(),
        end_count,
        trip: (trip_start.to_string(), trip_end.to_string()),
        trip_count,
    })
}
