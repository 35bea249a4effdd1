// Helper functions for extractor implementations

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

use crate::downloader::errors::DownloadError;

/// Run a command to completion and collect its output. No timeout is applied.
pub async fn run_output(program: &str, args: &[String]) -> Result<std::process::Output, DownloadError> {
    TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                DownloadError::ToolNotFound(format!("{} ({})", program, e))
            }
            _ => DownloadError::Execution(format!("Failed to start {}: {}", program, e)),
        })
}

/// Check that a program runs and exits successfully with the given args
pub async fn runs_ok(program: &str, args: &[&str]) -> bool {
    match TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await
    {
        Ok(status) => status.success(),
        Err(_) => false,
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Cookie file to hand to yt-dlp, or None when it does not exist
pub fn resolve_cookies_path(candidate: &Path) -> Option<PathBuf> {
    let path = expand_home(candidate);
    if path.is_file() {
        tracing::debug!(path = %path.display(), "using cookie file");
        Some(path)
    } else {
        tracing::debug!(path = %path.display(), "cookie file not found, continuing without");
        None
    }
}
