use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tripstats::{City, CityCatalog, FilterSelection};
use tripstats::filter::{parse_day, parse_month};

#[derive(Parser)]
#[command(author, version, about = "Explore US bikeshare trip data", long_about = None)]
#[command(name = "bikeshare")]
struct Cli {
    /// Directory containing the city CSV files
    /// (chicago.csv, new_york_city.csv, washington.csv)
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Analyze this city once and exit instead of prompting interactively
    #[arg(long)]
    city: Option<String>,

    /// Month filter for --city mode: "all" or january..june
    #[arg(long, default_value = "all")]
    month: String,

    /// Day filter for --city mode: "all" or monday..sunday
    #[arg(long, default_value = "all")]
    day: String,

    /// Enable verbose output, including loaded row counts
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    diagnostics::init_diagnostics();
    let cli = Cli::parse();
    let catalog = CityCatalog::new(cli.data_dir);

    match cli.city {
        Some(city) => {
            let city = City::parse(&city)?;
            let selection =
                FilterSelection::new(parse_month(&cli.month)?, parse_day(&cli.day)?);
            cmd::session::run_once(&catalog, city, &selection, cli.verbose)?;
        }
        None => cmd::session::run_interactive(&catalog, cli.verbose)?,
    }
    Ok(())
}
