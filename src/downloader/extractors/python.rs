// Python InfoExtractor - uses `python3 -m yt_dlp`
//
// Closest to embedding the yt_dlp library directly. Requires Python 3 with
// the yt_dlp module installed.

use async_trait::async_trait;
use tokio::sync::OnceCell;

use super::traits::{parse_info_json, ExtractorConfig, InfoExtractor};
use crate::downloader::errors::DownloadError;
use crate::downloader::models::ExtractionResult;
use crate::downloader::utils::{run_output, runs_ok};

/// Python-based info extractor using yt_dlp module
pub struct PythonInfoExtractor {
    /// Resolved on first use
    python_cmd: OnceCell<String>,
}

impl PythonInfoExtractor {
    pub fn new() -> Self {
        Self {
            python_cmd: OnceCell::new(),
        }
    }

    pub fn with_interpreter(python_cmd: impl Into<String>) -> Self {
        Self {
            python_cmd: OnceCell::from(python_cmd.into()),
        }
    }

    async fn python_cmd(&self) -> &str {
        self.python_cmd.get_or_init(Self::find_python).await
    }

    /// Find Python interpreter
    async fn find_python() -> String {
        // Allow override via environment variable
        if let Ok(custom) = std::env::var("YTDLP_PYTHON") {
            return custom;
        }

        let candidates = ["python3", "/opt/homebrew/bin/python3", "/usr/local/bin/python3"];

        for cmd in candidates {
            if runs_ok(cmd, &["--version"]).await {
                return cmd.to_string();
            }
        }

        "python3".to_string()
    }

    /// Check if yt_dlp module is installed
    async fn has_ytdlp_module(&self) -> bool {
        runs_ok(self.python_cmd().await, &["-c", "import yt_dlp"]).await
    }

    fn build_args(&self, url: &str, config: &ExtractorConfig) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "yt_dlp".to_string()];
        args.extend(config.ytdlp_args(url));
        args
    }
}

impl Default for PythonInfoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InfoExtractor for PythonInfoExtractor {
    fn name(&self) -> &'static str {
        "python-yt-dlp"
    }

    async fn is_available(&self) -> bool {
        self.has_ytdlp_module().await
    }

    async fn extract(
        &self,
        url: &str,
        config: &ExtractorConfig,
    ) -> Result<ExtractionResult, DownloadError> {
        let python_cmd = self.python_cmd().await;
        let args = self.build_args(url, config);
        tracing::debug!(
            target: "extractor::python",
            "running: {} {}",
            python_cmd,
            args.join(" ")
        );

        let output = run_output(python_cmd, &args).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::info!(target: "extractor::python", status = %output.status, "yt_dlp failed");
            return Err(DownloadError::Extraction(stderr.trim().to_string()));
        }

        parse_info_json(&output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_run_module() {
        let extractor = PythonInfoExtractor::with_interpreter("python3");
        let args = extractor.build_args("https://youtu.be/abc", &ExtractorConfig::default());
        assert_eq!(&args[..3], &["-m", "yt_dlp", "--dump-json"]);
        assert_eq!(args.last().unwrap(), "https://youtu.be/abc");
    }

    #[tokio::test]
    async fn test_missing_interpreter_is_unavailable() {
        let extractor = PythonInfoExtractor::with_interpreter("no-such-python-xyz");
        assert!(!extractor.is_available().await);
    }

    #[tokio::test]
    async fn test_explicit_interpreter_skips_discovery() {
        let extractor = PythonInfoExtractor::with_interpreter("/opt/py/bin/python3");
        assert_eq!(extractor.python_cmd().await, "/opt/py/bin/python3");
    }
}
