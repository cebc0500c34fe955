use chrono::NaiveDate;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::error::FetchError;
use crate::types::Day;

pub const FIRST_DAY: Day = 1;
pub const LAST_DAY: Day = 25;

pub fn puzzle_days() -> RangeInclusive<Day> {
    FIRST_DAY..=LAST_DAY
}

/// Puzzles unlock on December `day` of the event year.
pub fn unlock_date(year: i32, day: Day) -> Result<NaiveDate, FetchError> {
    if !puzzle_days().contains(&day) {
        return Err(FetchError::InvalidDay(day));
    }
    NaiveDate::from_ymd_opt(year, 12, day).ok_or(FetchError::InvalidYear(year))
}

pub fn is_unlocked(year: i32, day: Day, today: NaiveDate) -> Result<bool, FetchError> {
    Ok(unlock_date(year, day)? <= today)
}

pub fn input_path(input_dir: &Path, day: Day) -> PathBuf {
    input_dir.join(format!("day{}.txt", day))
}

pub fn input_url(base_url: &str, year: i32, day: Day) -> String {
    format!("{}/{}/day/{}/input", base_url.trim_end_matches('/'), year, day)
}
