use reqwest::{Client, header};
use std::time::Duration;

use crate::error::FetchError;
use crate::types::Day;
use crate::utils::input_url;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// One client per run; every day's request goes through it.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, FetchError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(FetchError::Client)
}

pub async fn fetch_day_input(
    client: &Client,
    base_url: &str,
    year: i32,
    day: Day,
    session_id: &str,
) -> Result<String, FetchError> {
    let response = client
        .get(input_url(base_url, year, day))
        .header(header::COOKIE, format!("session={}", session_id))
        .send()
        .await
        .map_err(|source| FetchError::Http { day, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { day, status });
    }

    response
        .text()
        .await
        .map_err(|source| FetchError::Http { day, source })
}
