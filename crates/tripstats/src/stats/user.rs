//! User demographics.

use std::collections::HashMap;

use arrow_array::StringArray;

use crate::error::{Error, Result};
use crate::stats::mode;
use crate::table::TripTable;

/// Earliest, most recent, and most common birth year, truncated to whole
/// years after aggregation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Counts per user type, plus the optional gender and birth-year sections
/// for source schemas that carry them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

/// Occurrence counts sorted by descending count, then name. Empty cells are
/// upstream missing-value placeholders and are skipped.
fn value_counts(values: &StringArray) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values.iter().flatten() {
        if !value.is_empty() {
            *counts.entry(value).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

fn birth_year_stats(years: impl Iterator<Item = f64>) -> Option<BirthYearStats> {
    let years: Vec<f64> = years.filter(|year| year.is_finite()).collect();
    if years.is_empty() {
        return None;
    }
    let earliest = years.iter().copied().fold(f64::INFINITY, f64::min);
    let most_recent = years.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Mode over the raw fractional values; truncation happens last.
    let (most_common_bits, _) = mode(years.iter().map(|year| year.to_bits()))?;
    Some(BirthYearStats {
        earliest: earliest as i64,
        most_recent: most_recent as i64,
        most_common: f64::from_bits(most_common_bits) as i64,
    })
}

pub fn user_stats(table: &TripTable) -> Result<UserStats> {
    if table.is_empty() {
        return Err(Error::NoData);
    }

    let user_types = value_counts(table.user_types());
    let genders = table.genders().map(value_counts);
    let birth_years = table
        .birth_years()
        .and_then(|years| birth_year_stats(years.iter().flatten()));

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::{City, CityCatalog};
    use crate::filter::FilterSelection;
    use crate::loader::load_trips;
    use std::path::Path;

    fn fixture_table(dir: &Path, header: &str, rows: &str) -> TripTable {
        std::fs::write(
            dir.join(City::Chicago.file_name()),
            format!("{header}\n{rows}"),
        )
        .unwrap();
        load_trips(
            &CityCatalog::new(dir),
            City::Chicago,
            &FilterSelection::all(),
        )
        .unwrap()
    }

    const FULL_HEADER: &str =
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

    #[test]
    fn counts_user_types_and_genders() {
        let dir = tempfile::tempdir().unwrap();
        let table = fixture_table(
            dir.path(),
            FULL_HEADER,
            "0,2017-01-02 08:00:00,2017-01-02 08:10:00,100,A,B,Subscriber,Male,1980.0\n\
             1,2017-01-02 08:30:00,2017-01-02 08:40:00,200,A,B,Subscriber,Female,1990.0\n\
             2,2017-01-03 09:00:00,2017-01-03 09:30:00,300,C,D,Customer,,\n",
        );
        let stats = user_stats(&table).unwrap();
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
        // The empty gender cell is skipped
        assert_eq!(
            stats.genders,
            Some(vec![("Female".to_string(), 1), ("Male".to_string(), 1)])
        );
    }

    #[test]
    fn birth_year_aggregates_then_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let table = fixture_table(
            dir.path(),
            FULL_HEADER,
            "0,2017-01-02 08:00:00,2017-01-02 08:10:00,100,A,B,Subscriber,Male,1980.0\n\
             1,2017-01-02 08:30:00,2017-01-02 08:40:00,200,A,B,Subscriber,Female,1990.0\n\
             2,2017-01-03 09:00:00,2017-01-03 09:30:00,300,C,D,Customer,Male,1990.0\n\
             3,2017-01-04 10:00:00,2017-01-04 10:30:00,400,C,D,Customer,Female,2001.0\n",
        );
        let stats = user_stats(&table).unwrap();
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: 1980,
                most_recent: 2001,
                most_common: 1990,
            })
        );
    }

    #[test]
    fn schema_without_optional_columns_skips_those_sections() {
        let dir = tempfile::tempdir().unwrap();
        let table = fixture_table(
            dir.path(),
            ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type",
            "0,2017-01-02 08:00:00,2017-01-02 08:10:00,100,A,B,Subscriber\n",
        );
        let stats = user_stats(&table).unwrap();
        assert_eq!(stats.user_types, vec![("Subscriber".to_string(), 1)]);
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn all_null_birth_years_omit_the_section() {
        let dir = tempfile::tempdir().unwrap();
        let table = fixture_table(
            dir.path(),
            FULL_HEADER,
            "0,2017-01-02 08:00:00,2017-01-02 08:10:00,100,A,B,Subscriber,Male,\n",
        );
        let stats = user_stats(&table).unwrap();
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn empty_table_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let table = fixture_table(dir.path(), FULL_HEADER, "");
        assert!(matches!(user_stats(&table), Err(Error::NoData)));
    }
}
