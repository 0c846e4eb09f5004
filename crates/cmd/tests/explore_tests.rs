//! End-to-end tests over fixture datasets: load, aggregate, render.

use std::path::Path;

use tripstats::filter::parse_month;
use tripstats::stats::{duration_stats, station_stats, time_stats, user_stats};
use tripstats::{City, CityCatalog, Error, FilterSelection, load_trips};

const FULL_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
const BARE_HEADER: &str = ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

/// Two January trips (Monday, stations A -> B, durations 100 and 200) and
/// two February trips.
const FOUR_TRIPS: &str = "\
0,2017-01-02 08:00:00,2017-01-02 08:10:00,100,A,B,Subscriber,Male,1980.0
1,2017-01-02 09:00:00,2017-01-02 09:10:00,200,A,B,Customer,Female,1990.0
2,2017-02-01 10:00:00,2017-02-01 10:30:00,300,C,D,Subscriber,Male,1980.0
3,2017-02-03 11:00:00,2017-02-03 11:45:00,400,C,D,Subscriber,Female,1990.0
";

fn write_fixture(dir: &Path, city: City, header: &str, rows: &str) -> CityCatalog {
    std::fs::write(dir.join(city.file_name()), format!("{header}\n{rows}")).unwrap();
    CityCatalog::new(dir)
}

#[test]
fn january_filter_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_fixture(dir.path(), City::Chicago, FULL_HEADER, FOUR_TRIPS);
    let selection = FilterSelection::new(parse_month("january").unwrap(), None);
    let table = load_trips(&catalog, City::Chicago, &selection).unwrap();
    assert_eq!(table.num_rows(), 2);

    let time = time_stats(&table).unwrap();
    assert_eq!(
        cmd::report::render_time_stats(&time),
        "Most Common Month: January\n\
         Most Common Day of Week: Monday\n\
         Most Common Start Hour: 8\n"
    );

    let station = station_stats(&table).unwrap();
    assert_eq!(station.start_station, "A");
    assert_eq!(station.end_station, "B");
    assert_eq!(station.trip, ("A".to_string(), "B".to_string()));

    let duration = duration_stats(&table).unwrap();
    assert_eq!(duration.total_seconds, 300.0);
    assert_eq!(duration.mean_seconds, 150.0);
}

#[test]
fn schema_without_birth_year_skips_that_section() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_fixture(
        dir.path(),
        City::Washington,
        BARE_HEADER,
        "0,2017-03-06 07:00:00,2017-03-06 07:20:00,1200,E,F,Subscriber\n\
         1,2017-03-07 18:00:00,2017-03-07 18:25:00,1500,E,F,Customer\n",
    );
    let table = load_trips(&catalog, City::Washington, &FilterSelection::all()).unwrap();
    let stats = user_stats(&table).unwrap();
    let rendered = cmd::report::render_user_stats(&stats);
    assert!(rendered.contains("User Types:\n"));
    assert!(!rendered.contains("Gender Counts"));
    assert!(!rendered.contains("Year of Birth"));
}

#[test]
fn run_once_reports_a_full_iteration() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_fixture(dir.path(), City::Chicago, FULL_HEADER, FOUR_TRIPS);
    cmd::session::run_once(&catalog, City::Chicago, &FilterSelection::all(), true).unwrap();
}

#[test]
fn run_once_with_no_matching_trips_is_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_fixture(dir.path(), City::Chicago, FULL_HEADER, FOUR_TRIPS);
    let selection = FilterSelection::new(parse_month("june").unwrap(), None);
    let err = cmd::session::run_once(&catalog, City::Chicago, &selection, false).unwrap_err();
    assert!(matches!(err, Error::NoData));
}

#[test]
fn run_once_surfaces_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CityCatalog::new(dir.path());
    let err = cmd::session::run_once(
        &catalog,
        City::NewYorkCity,
        &FilterSelection::all(),
        false,
    )
    .unwrap_err();
    assert!(matches!(err, Error::DataUnavailable { .. }));
}
