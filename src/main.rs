use anyhow::Result;
use tracing_subscriber::EnvFilter;

use aoc_fetch::{Downloader, config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = config::load()?;
    let timeout = config::request_timeout()?;

    let mut downloader = Downloader::new(config);
    if let Some(timeout) = timeout {
        downloader = downloader.with_timeout(timeout);
    }

    tracing::info!("Fetching puzzle inputs for {}.", downloader.config().year);

    let report = downloader.run().await.inspect_err(|e| {
        tracing::error!("download error: {:?}", e);
    })?;

    tracing::info!(
        fetched = report.fetched(),
        skipped = report.skipped(),
        failed = report.failures(),
        "Done."
    );

    report.into_result()?;

    Ok(())
}
