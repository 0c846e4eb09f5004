use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The closed set of cities with published trip logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Parse a user-entered city name. Input is trimmed and lowercased
    /// before matching the full name.
    pub fn parse(input: &str) -> Result<City> {
        match input.trim().to_ascii_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(Error::InvalidSelection {
                input: input.trim().to_string(),
                expected: "one of: chicago, new york city, washington",
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of this city's dataset inside the catalog directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps each supported city to its CSV file under a data directory.
///
/// Passed explicitly into the loader so there is no ambient global
/// city-to-path state.
#[derive(Clone, Debug)]
pub struct CityCatalog {
    data_dir: PathBuf,
}

impl CityCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}
