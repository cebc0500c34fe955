use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::Day;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Year {year} is in the future (current year is {current})")]
    FutureYear { year: i32, current: i32 },
    #[error("Invalid day: {0}")]
    InvalidDay(Day),
    #[error("Invalid year: {0}")]
    InvalidYear(i32),
    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request for day {day} failed: {source}")]
    Http {
        day: Day,
        #[source]
        source: reqwest::Error,
    },
    /// The site answered, but not with a puzzle input (expired session, day
    /// not found, server trouble). Nothing is written in that case.
    #[error("Day {day} returned HTTP {status}")]
    Status { day: Day, status: StatusCode },
    #[error("Could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to download input for days {failed:?}")]
    Incomplete { failed: Vec<Day> },
}
