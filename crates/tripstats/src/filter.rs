//! Month/day filter selections.
//!
//! The canonical internal representation is integer indices: months are
//! 1-12 (only 1-6 are selectable, matching the published datasets) and days
//! are 0-6 with Monday as 0. User input is trimmed and ASCII-lowercased,
//! then looked up against full English names; "all" means no filter on that
//! axis. Abbreviations and partial names are rejected.

use crate::error::{Error, Result};

/// Month names indexed by month number - 1.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day names indexed by days from Monday.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Highest selectable month (the datasets cover January through June).
pub const MAX_FILTER_MONTH: u32 = 6;

/// A (month, day) narrowing of which trips are analyzed. `None` on an axis
/// means "all".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl FilterSelection {
    /// No filtering on either axis.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(month: Option<u32>, day: Option<u32>) -> Self {
        Self { month, day }
    }
}

/// Parse a month filter: "all" or a full month name January through June.
pub fn parse_month(input: &str) -> Result<Option<u32>> {
    let normalized = input.trim().to_ascii_lowercase();
    if normalized == "all" {
        return Ok(None);
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(&normalized))
        .map(|idx| idx as u32 + 1)
        .filter(|&month| month <= MAX_FILTER_MONTH)
        .map(Some)
        .ok_or_else(|| Error::InvalidSelection {
            input: input.trim().to_string(),
            expected: "'all' or a month name from january to june",
        })
}

/// Parse a day filter: "all" or a full weekday name.
pub fn parse_day(input: &str) -> Result<Option<u32>> {
    let normalized = input.trim().to_ascii_lowercase();
    if normalized == "all" {
        return Ok(None);
    }
    DAY_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(&normalized))
        .map(|idx| Some(idx as u32))
        .ok_or_else(|| Error::InvalidSelection {
            input: input.trim().to_string(),
            expected: "'all' or a day name from monday to sunday",
        })
}

/// Display name for a 1-12 month index.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("unknown")
}

/// Display name for a 0-6 day index (Monday = 0).
pub fn day_name(day: u32) -> &'static str {
    DAY_NAMES.get(day as usize).copied().unwrap_or("unknown")
}
