use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_OPTIONS_PATH: &str = "options.json";

#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub year: i32,
    pub session_id: String,
}

// Keep the session cookie out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("year", &self.year)
            .field("session_id", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Options must contain `year` and `session_id`")
    }
}

pub fn options_path() -> PathBuf {
    env::var("AOC_OPTIONS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OPTIONS_PATH))
}

pub fn load() -> Result<Config> {
    let mut config = load_from(options_path())?;

    if let Ok(session_id) = env::var("AOC_SESSION") {
        config.session_id = session_id;
    }

    Ok(config)
}

pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options from {}", path.display()))?;

    Config::from_json(&raw).with_context(|| format!("Invalid options in {}", path.display()))
}

pub fn request_timeout() -> Result<Option<Duration>> {
    match env::var("AOC_TIMEOUT_SECS") {
        Ok(secs) => parse_timeout(&secs).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_timeout(secs: &str) -> Result<Duration> {
    let secs: u64 = secs
        .trim()
        .parse()
        .with_context(|| format!("AOC_TIMEOUT_SECS must be a whole number, got {:?}", secs))?;
    Ok(Duration::from_secs(secs))
}
