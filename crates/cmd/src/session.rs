//! Session controller: prompt for filters, load, report, offer restart.
//!
//! Invalid selections are recovered by re-prompting; data errors abort the
//! iteration with a message and fall through to the restart prompt, so no
//! error ever kills the process without a user-visible explanation.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use diagnostics::log_info;
use tripstats::{City, CityCatalog, Error, FilterSelection, load_trips};
use tripstats::filter::{parse_day, parse_month};
use tripstats::stats::{duration_stats, station_stats, time_stats, user_stats};

use crate::report;

const SEPARATOR_WIDTH: usize = 40;

/// Run the interactive prompt-report-restart loop.
pub fn run_interactive(catalog: &CityCatalog, verbose: bool) -> Result<()> {
    println!("Hello! Let's explore some US bikeshare data!");
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(city) = prompt_city(&mut input)? else {
            break;
        };
        let Some(month) = prompt_month(&mut input)? else {
            break;
        };
        let Some(day) = prompt_day(&mut input)? else {
            break;
        };
        print_separator();

        let selection = FilterSelection::new(month, day);
        report_iteration(catalog, city, &selection, verbose);

        match prompt(&mut input, "\nWould you like to restart? Enter yes or no: ")? {
            Some(answer) if answer.eq_ignore_ascii_case("yes") => continue,
            _ => break,
        }
    }
    Ok(())
}

/// Run a single non-interactive iteration; data errors propagate out.
pub fn run_once(
    catalog: &CityCatalog,
    city: City,
    selection: &FilterSelection,
    verbose: bool,
) -> tripstats::Result<()> {
    let table = load_trips(catalog, city, selection)?;
    if verbose {
        println!(
            "Loaded {} matching trips for {} from {}.",
            table.num_rows(),
            city,
            catalog.data_dir().display()
        );
    }
    if table.is_empty() {
        return Err(Error::NoData);
    }
    let city_name = city.name();
    let rows = table.num_rows();
    log_info!("reporting on {rows} trips for {city_name}", rows: rows, city_name: city_name);

    let started = Instant::now();
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    print!("{}", report::render_time_stats(&time_stats(&table)?));
    finish_section(started);

    let started = Instant::now();
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    print!("{}", report::render_station_stats(&station_stats(&table)?));
    finish_section(started);

    let started = Instant::now();
    println!("\nCalculating Trip Duration...\n");
    print!("{}", report::render_duration_stats(&duration_stats(&table)?));
    finish_section(started);

    let started = Instant::now();
    println!("\nCalculating User Stats...\n");
    print!("{}", report::render_user_stats(&user_stats(&table)?));
    finish_section(started);

    Ok(())
}

/// One iteration inside the interactive loop: report data errors instead of
/// propagating them.
fn report_iteration(catalog: &CityCatalog, city: City, selection: &FilterSelection, verbose: bool) {
    match run_once(catalog, city, selection, verbose) {
        Ok(()) => {}
        Err(Error::NoData) => println!("\nNo trips match the selected filters."),
        Err(err) => println!("\nError: {err}"),
    }
}

fn finish_section(started: Instant) {
    println!("\nThis took {:.2} seconds.", started.elapsed().as_secs_f64());
    print_separator();
}

fn print_separator() {
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

/// Print `text` and read one trimmed line; `None` means stdin was closed.
fn prompt<R: BufRead>(input: &mut R, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Re-prompt until `parse` accepts the input or stdin closes.
fn prompt_selection<R, T, F>(input: &mut R, text: &str, parse: F) -> io::Result<Option<T>>
where
    R: BufRead,
    F: Fn(&str) -> tripstats::Result<T>,
{
    loop {
        let Some(line) = prompt(input, text)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(Error::InvalidSelection { expected, .. }) => {
                println!("Invalid input. Please enter {expected}.");
            }
            Err(err) => println!("Invalid input: {err}"),
        }
    }
}

fn city_prompt() -> String {
    let names: Vec<&str> = City::ALL.iter().map(|city| city.name()).collect();
    format!("Please enter the city name ({}): ", names.join(", "))
}

fn prompt_city<R: BufRead>(input: &mut R) -> io::Result<Option<City>> {
    prompt_selection(input, &city_prompt(), City::parse)
}

fn prompt_month<R: BufRead>(input: &mut R) -> io::Result<Option<Option<u32>>> {
    prompt_selection(
        input,
        "Please enter the month (all, january, february, ... , june): ",
        parse_month,
    )
}

fn prompt_day<R: BufRead>(input: &mut R) -> io::Result<Option<Option<u32>>> {
    prompt_selection(
        input,
        "Please enter the day of the week (all, monday, tuesday, ... sunday): ",
        parse_day,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_prompt_lists_every_supported_city() {
        let prompt = city_prompt();
        for city in City::ALL {
            assert!(prompt.contains(city.name()));
        }
    }
}
