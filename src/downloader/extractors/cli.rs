// CLI InfoExtractor - uses native `yt-dlp` binary
//
// Used when the Python module is not importable, e.g. a standalone
// yt-dlp download or a Homebrew install.

use async_trait::async_trait;
use tokio::process::Command as TokioCommand;
use tokio::sync::OnceCell;

use super::traits::{parse_info_json, ExtractorConfig, InfoExtractor};
use crate::downloader::errors::DownloadError;
use crate::downloader::models::ExtractionResult;
use crate::downloader::utils::{run_output, runs_ok};

/// CLI-based info extractor using yt-dlp binary
pub struct CliInfoExtractor {
    /// Resolved on first use
    ytdlp_path: OnceCell<String>,
}

impl CliInfoExtractor {
    pub fn new() -> Self {
        Self {
            ytdlp_path: OnceCell::new(),
        }
    }

    pub fn with_binary(path: impl Into<String>) -> Self {
        Self {
            ytdlp_path: OnceCell::from(path.into()),
        }
    }

    async fn ytdlp_path(&self) -> &str {
        self.ytdlp_path.get_or_init(Self::find_ytdlp).await
    }

    /// Find yt-dlp binary
    async fn find_ytdlp() -> String {
        let common_paths = [
            "/opt/homebrew/bin/yt-dlp", // Homebrew on Apple Silicon
            "/usr/local/bin/yt-dlp",    // Homebrew on Intel Mac
            "/usr/bin/yt-dlp",          // System installation
        ];

        for path in common_paths {
            if tokio::fs::metadata(path).await.is_ok() {
                return path.to_string();
            }
        }

        if let Ok(output) = TokioCommand::new("which").arg("yt-dlp").output().await {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout);
                let trimmed = path.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }

        "yt-dlp".to_string()
    }
}

impl Default for CliInfoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InfoExtractor for CliInfoExtractor {
    fn name(&self) -> &'static str {
        "cli-yt-dlp"
    }

    async fn is_available(&self) -> bool {
        runs_ok(self.ytdlp_path().await, &["--version"]).await
    }

    async fn extract(
        &self,
        url: &str,
        config: &ExtractorConfig,
    ) -> Result<ExtractionResult, DownloadError> {
        let ytdlp_path = self.ytdlp_path().await;
        let args = config.ytdlp_args(url);
        tracing::debug!(
            target: "extractor::cli",
            "running: {} {}",
            ytdlp_path,
            args.join(" ")
        );

        let output = run_output(ytdlp_path, &args).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::info!(target: "extractor::cli", status = %output.status, "yt-dlp failed");
            return Err(DownloadError::Extraction(stderr.trim().to_string()));
        }

        parse_info_json(&output.stdout)
    }
}
