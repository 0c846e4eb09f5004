//! Bikeshare trip-log loading and descriptive statistics.
//!
//! The loader reads one city's CSV into an arrow-backed [`TripTable`] with
//! the calendar fields (month, day of week, start hour) derived up front,
//! applies the month/day [`FilterSelection`], and hands the table to four
//! independent, read-only aggregation routines in [`stats`].

pub mod city;
pub mod error;
pub mod filter;
pub mod loader;
pub mod stats;
pub mod table;

pub use city::{City, CityCatalog};
pub use error::{Error, Result};
pub use filter::FilterSelection;
pub use loader::load_trips;
pub use table::{SchemaCaps, TripTable};
