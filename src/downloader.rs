use chrono::{Datelike, Local, NaiveDate};
use futures::future::join_all;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::{debug, error, info};

use crate::api::{build_client, fetch_day_input};
use crate::config::Config;
use crate::error::FetchError;
use crate::types::{Day, DayOutcome, DownloadPlan, DownloadReport};
use crate::utils::{input_path, is_unlocked, puzzle_days};

pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Fetches every unlocked puzzle input of `config.year` that is not on disk
/// yet, all days at once.
pub struct Downloader {
    config: Config,
    base_url: String,
    input_dir: PathBuf,
    timeout: Option<Duration>,
}

impl Downloader {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            base_url: DEFAULT_BASE_URL.to_string(),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run(&self) -> Result<DownloadReport, FetchError> {
        let today = Local::now().date_naive();
        self.run_on(today).await
    }

    /// Runs against a fixed `today`. The date is used for every day's unlock
    /// check, so one run never sees the clock move.
    ///
    /// A failing day does not stop the others: its error lands in the report
    /// as `DayOutcome::Failed`. Only a future year or an unusable input
    /// directory abort the run.
    pub async fn run_on(&self, today: NaiveDate) -> Result<DownloadReport, FetchError> {
        let year = self.config.year;
        if year > today.year() {
            return Err(FetchError::FutureYear {
                year,
                current: today.year(),
            });
        }

        let plan = self.plan(today)?;
        info!(
            year,
            to_fetch = plan.to_fetch.len(),
            existing = plan.existing.len(),
            locked = plan.locked.len(),
            "Planned input downloads"
        );

        let mut outcomes: Vec<(Day, DayOutcome)> = Vec::with_capacity(puzzle_days().count());
        for &day in &plan.existing {
            debug!(day, "Input already exists");
            outcomes.push((day, DayOutcome::Existing));
        }
        for &day in &plan.locked {
            debug!(day, "Puzzle not unlocked yet");
            outcomes.push((day, DayOutcome::Locked));
        }

        if !plan.to_fetch.is_empty() {
            fs::create_dir_all(&self.input_dir)
                .await
                .map_err(|source| FetchError::Io {
                    path: self.input_dir.clone(),
                    source,
                })?;

            let client = build_client(self.timeout)?;
            let client = &client;
            let downloads = plan
                .to_fetch
                .iter()
                .map(|&day| async move { (day, self.download_day(client, day).await) });

            for (day, result) in join_all(downloads).await {
                let outcome = match result {
                    Ok(bytes) => DayOutcome::Fetched { bytes },
                    Err(e) => {
                        error!(day, "Download failed: {}", e);
                        DayOutcome::Failed(e)
                    }
                };
                outcomes.push((day, outcome));
            }
        }

        Ok(DownloadReport::new(outcomes))
    }

    /// A file on disk always wins: an existing day is never reported as
    /// locked.
    pub fn plan(&self, today: NaiveDate) -> Result<DownloadPlan, FetchError> {
        let mut plan = DownloadPlan::default();

        for day in puzzle_days() {
            if input_path(&self.input_dir, day).exists() {
                plan.existing.push(day);
            } else if !is_unlocked(self.config.year, day, today)? {
                plan.locked.push(day);
            } else {
                plan.to_fetch.push(day);
            }
        }

        Ok(plan)
    }

    async fn download_day(&self, client: &Client, day: Day) -> Result<usize, FetchError> {
        let input = fetch_day_input(
            client,
            &self.base_url,
            self.config.year,
            day,
            &self.config.session_id,
        )
        .await?;

        let path = input_path(&self.input_dir, day);
        save_input(&path, &input).await?;

        info!(day, bytes = input.len(), "Saved {}", path.display());
        Ok(input.len())
    }
}

/// `path` only ever appears complete: the body goes to a sibling `.tmp` file
/// that is renamed into place once fully written.
async fn save_input(path: &Path, input: &str) -> Result<(), FetchError> {
    let tmp_path = tmp_path(path);

    if let Err(source) = fs::write(&tmp_path, input).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(FetchError::Io {
            path: tmp_path,
            source,
        });
    }

    fs::rename(&tmp_path, path)
        .await
        .map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
