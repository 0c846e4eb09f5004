//! Text rendering for the four report sections.

use tripstats::filter::{day_name, month_name};
use tripstats::stats::{DurationStats, StationStats, TimeStats, UserStats};

pub fn render_time_stats(stats: &TimeStats) -> String {
    format!(
        "Most Common Month: {}\n\
         Most Common Day of Week: {}\n\
         Most Common Start Hour: {}\n",
        month_name(stats.month),
        day_name(stats.day),
        stats.hour
    )
}

pub fn render_station_stats(stats: &StationStats) -> String {
    format!(
        "Most Commonly Used Start Station: {}\n\
         Most Commonly Used End Station: {}\n\
         Most Frequent Combination of Start Station and End Station: {} -> {}\n",
        stats.start_station, stats.end_station, stats.trip.0, stats.trip.1
    )
}

pub fn render_duration_stats(stats: &DurationStats) -> String {
    format!(
        "Total Travel Time: {:.0} seconds\n\
         Mean Travel Time: {:.2} seconds\n",
        stats.total_seconds, stats.mean_seconds
    )
}

pub fn render_user_stats(stats: &UserStats) -> String {
    let mut out = String::from("User Types:\n");
    for (user_type, count) in &stats.user_types {
        out.push_str(&format!("  {user_type}: {count}\n"));
    }

    if let Some(genders) = &stats.genders {
        out.push_str("\nGender Counts:\n");
        for (gender, count) in genders {
            out.push_str(&format!("  {gender}: {count}\n"));
        }
    }

    if let Some(birth_years) = &stats.birth_years {
        out.push_str(&format!(
            "\nEarliest Year of Birth: {}\n\
             Most Recent Year of Birth: {}\n\
             Most Common Year of Birth: {}\n",
            birth_years.earliest, birth_years.most_recent, birth_years.most_common
        ));
    }

    out
}
