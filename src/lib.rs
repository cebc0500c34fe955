pub mod api;
pub mod config;
pub mod downloader;
pub mod error;
pub mod types;
pub mod utils;

pub use config::Config;
pub use downloader::Downloader;
pub use error::FetchError;
pub use types::*;
