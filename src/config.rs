//! Command-line arguments, environment and logging setup.

use std::path::PathBuf;

use clap::Parser;

use crate::downloader::extractors::{ExtractorConfig, ExtractorMode};
use crate::downloader::utils::resolve_cookies_path;

/// Cookie jar looked up when `COOKIES_PATH` is not set
pub const DEFAULT_COOKIES_PATH: &str = "cookies.txt";

/// Env var holding the tracing filter
pub const LOG_ENV: &str = "YOUTUBE_INFO_LOG";

/// Command-line arguments for youtube-info
#[derive(Parser, Debug)]
#[command(name = "youtube-info")]
#[command(about = "Print the formats of a YouTube video as one JSON line")]
#[command(version)]
pub struct Args {
    /// YouTube video URL. Options go before it; anything after the first URL
    /// argument, dashes included, is taken as another URL argument.
    #[arg(value_name = "URL", allow_hyphen_values = true)]
    pub urls: Vec<String>,

    /// Netscape cookie file passed to yt-dlp when it exists
    #[arg(long = "cookies", env = "COOKIES_PATH", default_value = DEFAULT_COOKIES_PATH)]
    pub cookies: PathBuf,

    /// How to run yt-dlp
    #[arg(long, value_enum, env = "YTDLP_EXTRACTOR", default_value_t = ExtractorMode::Auto)]
    pub extractor: ExtractorMode,

    /// Classify a saved yt-dlp info JSON instead of running yt-dlp
    #[arg(long, value_name = "FILE")]
    pub info_json: Option<PathBuf>,
}

impl Args {
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig::default()
            .with_mode(self.extractor)
            .with_cookies_path(resolve_cookies_path(&self.cookies))
    }
}

/// Initialize tracing on stderr, `warn` unless `YOUTUBE_INFO_LOG` says otherwise
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
