// InfoExtractor trait and common types

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

use crate::downloader::errors::DownloadError;
use crate::downloader::models::ExtractionResult;

/// Extraction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExtractorMode {
    /// Python module yt_dlp
    Python,
    /// CLI binary yt-dlp
    Cli,
    /// Python if the module is installed, CLI otherwise
    #[default]
    Auto,
}

impl fmt::Display for ExtractorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Cli => write!(f, "cli"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Configuration for info extraction
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Extraction mode (Python, CLI, or Auto)
    pub mode: ExtractorMode,
    /// Suppress yt-dlp's own progress output
    pub quiet: bool,
    /// Suppress yt-dlp warnings
    pub no_warnings: bool,
    /// Path to cookies.txt file, only set when the file exists
    pub cookies_path: Option<PathBuf>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            mode: ExtractorMode::Auto,
            quiet: true,
            no_warnings: true,
            cookies_path: None,
        }
    }
}

impl ExtractorConfig {
    pub fn with_cookies_path(mut self, path: Option<PathBuf>) -> Self {
        self.cookies_path = path;
        self
    }

    pub fn with_mode(mut self, mode: ExtractorMode) -> Self {
        self.mode = mode;
        self
    }

    /// yt-dlp arguments shared by the Python and CLI extractors
    pub fn ytdlp_args(&self, url: &str) -> Vec<String> {
        let mut args = vec![
            "--dump-json".to_string(),
            "--skip-download".to_string(),
            "--no-playlist".to_string(),
        ];

        if self.quiet {
            args.push("--quiet".to_string());
        }
        if self.no_warnings {
            args.push("--no-warnings".to_string());
        }

        if let Some(path) = &self.cookies_path {
            args.push("--cookies".to_string());
            args.push(path.to_string_lossy().to_string());
        }

        // Keep a URL starting with '-' from being read as an option
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }
}

/// Decode the info object yt-dlp prints with `--dump-json`
///
/// Empty output and a bare `null` both mean the extractor found nothing.
pub fn parse_info_json(stdout: &[u8]) -> Result<ExtractionResult, DownloadError> {
    let json_str = String::from_utf8_lossy(stdout);
    let trimmed = json_str.trim();
    if trimmed.is_empty() {
        return Err(DownloadError::NoResult);
    }

    let info: Option<ExtractionResult> = serde_json::from_str(trimmed)
        .map_err(|e| DownloadError::Parse(format!("Invalid JSON: {}", e)))?;

    info.ok_or(DownloadError::NoResult)
}

/// Trait for info extractors
#[async_trait]
pub trait InfoExtractor: Send + Sync {
    /// Name of the extractor (for logging)
    fn name(&self) -> &'static str;

    /// Check if this extractor is available
    async fn is_available(&self) -> bool;

    /// Extract video info with formats
    async fn extract(
        &self,
        url: &str,
        config: &ExtractorConfig,
    ) -> Result<ExtractionResult, DownloadError>;
}
