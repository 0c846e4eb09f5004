//! In-memory trip table handed from the loader to the aggregation routines.

use arrow_array::{Array, Float64Array, RecordBatch, StringArray, UInt32Array};

use crate::error::{Error, Result};

/// Column names forming the external contract with the published CSV files,
/// plus the derived columns the loader appends.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    pub const MONTH: &str = "month";
    pub const DAY_OF_WEEK: &str = "day_of_week";
    pub const HOUR: &str = "hour";

    pub const REQUIRED: [&str; 5] = [
        START_TIME,
        START_STATION,
        END_STATION,
        TRIP_DURATION,
        USER_TYPE,
    ];
}

/// Which optional columns the source schema carries, decided once at load
/// time so report routines don't re-probe the schema.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchemaCaps {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// Filtered trip records as typed arrow arrays.
///
/// Built fresh by the loader for each session iteration; the aggregation
/// routines only read from it. Row order matches the source file.
#[derive(Clone, Debug)]
pub struct TripTable {
    months: UInt32Array,
    days: UInt32Array,
    hours: UInt32Array,
    start_stations: StringArray,
    end_stations: StringArray,
    durations: Float64Array,
    user_types: StringArray,
    genders: Option<StringArray>,
    birth_years: Option<Float64Array>,
    caps: SchemaCaps,
}

pub(crate) fn typed_column<'a, T: 'static>(
    batch: &'a RecordBatch,
    name: &'static str,
) -> Result<&'a T> {
    batch
        .column_by_name(name)
        .ok_or(Error::MissingColumn { column: name })?
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| {
            Error::Csv(arrow_schema::ArrowError::CastError(format!(
                "column '{name}' has unexpected type"
            )))
        })
}

impl TripTable {
    /// Extract the typed column views from a fully-derived, filtered batch.
    pub(crate) fn from_batch(batch: &RecordBatch, caps: SchemaCaps) -> Result<TripTable> {
        let genders = if caps.has_gender {
            Some(typed_column::<StringArray>(batch, columns::GENDER)?.clone())
        } else {
            None
        };
        let birth_years = if caps.has_birth_year {
            Some(typed_column::<Float64Array>(batch, columns::BIRTH_YEAR)?.clone())
        } else {
            None
        };
        Ok(TripTable {
            months: typed_column::<UInt32Array>(batch, columns::MONTH)?.clone(),
            days: typed_column::<UInt32Array>(batch, columns::DAY_OF_WEEK)?.clone(),
            hours: typed_column::<UInt32Array>(batch, columns::HOUR)?.clone(),
            start_stations: typed_column::<StringArray>(batch, columns::START_STATION)?.clone(),
            end_stations: typed_column::<StringArray>(batch, columns::END_STATION)?.clone(),
            durations: typed_column::<Float64Array>(batch, columns::TRIP_DURATION)?.clone(),
            user_types: typed_column::<StringArray>(batch, columns::USER_TYPE)?.clone(),
            genders,
            birth_years,
            caps,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn caps(&self) -> SchemaCaps {
        self.caps
    }

    /// Start month per trip, 1-12.
    pub fn months(&self) -> &UInt32Array {
        &self.months
    }

    /// Start day of week per trip, 0-6 with Monday as 0.
    pub fn days(&self) -> &UInt32Array {
        &self.days
    }

    /// Start hour per trip, 0-23.
    pub fn hours(&self) -> &UInt32Array {
        &self.hours
    }

    pub fn start_stations(&self) -> &StringArray {
        &self.start_stations
    }

    pub fn end_stations(&self) -> &StringArray {
        &self.end_stations
    }

    /// Trip duration in seconds.
    pub fn durations(&self) -> &Float64Array {
        &self.durations
    }

    pub fn user_types(&self) -> &StringArray {
        &self.user_types
    }

    pub fn genders(&self) -> Option<&StringArray> {
        self.genders.as_ref()
    }

    pub fn birth_years(&self) -> Option<&Float64Array> {
        self.birth_years.as_ref()
    }
}
