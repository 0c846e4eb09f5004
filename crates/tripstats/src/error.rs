use std::path::PathBuf;

/// Error types for dataset loading and aggregation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// User input outside the closed month/day/city vocabulary; recovered
    /// by re-prompting at the boundary, never fatal.
    #[error("invalid selection '{input}': expected {expected}")]
    InvalidSelection { input: String, expected: &'static str },

    /// The source file for the requested city could not be read.
    #[error("trip data for {city} unavailable at {path}: {source}")]
    DataUnavailable {
        city: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// A Start Time value could not be parsed.
    #[error("malformed start timestamp '{value}' at row {row}")]
    MalformedTimestamp { value: String, row: usize },

    /// A required column is missing from the source schema.
    #[error("source data is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// The filtered table has no rows to aggregate.
    #[error("no trips match the selected filters")]
    NoData,

    /// CSV decode error from arrow.
    #[error("CSV decode error: {0}")]
    Csv(#[from] arrow_schema::ArrowError),
}

/// Result type for tripstats operations
pub type Result<T> = std::result::Result<T, Error>;
