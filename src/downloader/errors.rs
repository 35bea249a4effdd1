// Error types for the metadata shim

use thiserror::Error;

use super::diagnostics::sanitize_message;
use super::models::ErrorResult;

#[derive(Debug, Error)]
pub enum DownloadError {
    /// No positional argument was given
    #[error("No URL provided")]
    NoUrl,

    /// More than one positional argument was given
    #[error("Expected a single URL argument")]
    TooManyArguments,

    /// Flags could not be parsed
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// URL argument is empty or whitespace
    #[error("Empty URL provided")]
    EmptyUrl,

    /// URL does not look like a YouTube video link
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    /// yt-dlp or python not found in system
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Child process could not be run to completion
    #[error("Execution error: {0}")]
    Execution(String),

    /// yt-dlp ran and reported a failure
    #[error("{0}")]
    Extraction(String),

    /// Failed to parse yt-dlp JSON output
    #[error("Parse error: {0}")]
    Parse(String),

    /// yt-dlp succeeded but returned no info object
    #[error("No video information found")]
    NoResult,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DownloadError {
    /// Build the payload printed on stdout for this failure.
    ///
    /// `url` is the argument as the caller passed it; it is echoed only for
    /// failures that concern a specific URL.
    pub fn to_error_result(&self, url: Option<&str>) -> ErrorResult {
        let url = url.map(str::to_string);
        match self {
            Self::NoUrl | Self::TooManyArguments | Self::EmptyUrl => {
                ErrorResult::new(self.to_string())
            }
            Self::InvalidArguments(msg) => {
                ErrorResult::new("Invalid arguments").with_details(msg.trim())
            }
            Self::InvalidUrl(_) => ErrorResult::new("Invalid YouTube URL").with_url(url),
            Self::NoResult => ErrorResult::new(self.to_string()).with_url(url),
            Self::Extraction(msg) => ErrorResult::new("Failed to extract video info")
                .with_details(sanitize_message(msg))
                .with_url(url),
            Self::ToolNotFound(_) | Self::Execution(_) | Self::Parse(_) | Self::Io(_) => {
                ErrorResult::new("Failed to extract video info")
                    .with_details(sanitize_message(&self.to_string()))
                    .with_url(url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_url_payload_has_only_error() {
        let payload = DownloadError::NoUrl.to_error_result(None);
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"error":"No URL provided"}"#);
    }

    #[test]
    fn test_invalid_url_echoes_url() {
        let payload = DownloadError::InvalidUrl("https://vimeo.com/1".to_string())
            .to_error_result(Some("https://vimeo.com/1"));
        assert_eq!(payload.error, "Invalid YouTube URL");
        assert_eq!(payload.url.as_deref(), Some("https://vimeo.com/1"));
        assert!(payload.details.is_none());
    }

    #[test]
    fn test_extraction_details_are_sanitized() {
        let err = DownloadError::Extraction(
            "ERROR: [youtube] abc: Video unavailable. This video has been removed\n".to_string(),
        );
        let payload = err.to_error_result(Some("https://youtu.be/abc"));
        assert_eq!(payload.error, "Failed to extract video info");
        assert_eq!(
            payload.details.as_deref(),
            Some("This video is unavailable. It might be private or deleted.")
        );
        assert_eq!(payload.url.as_deref(), Some("https://youtu.be/abc"));
    }

    #[test]
    fn test_tool_not_found_is_reported_as_extraction_failure() {
        let err = DownloadError::ToolNotFound("yt-dlp binary not found".to_string());
        let payload = err.to_error_result(Some("https://youtu.be/abc"));
        assert_eq!(payload.error, "Failed to extract video info");
        assert_eq!(
            payload.details.as_deref(),
            Some("Tool not found: yt-dlp binary not found")
        );
    }

    #[test]
    fn test_no_result_keeps_url() {
        let payload = DownloadError::NoResult.to_error_result(Some("https://youtu.be/abc"));
        assert_eq!(payload.error, "No video information found");
        assert_eq!(payload.url.as_deref(), Some("https://youtu.be/abc"));
    }
}
