// Saved info JSON - reads what `yt-dlp --dump-json` (or --write-info-json)
// produced earlier instead of contacting YouTube.

use async_trait::async_trait;
use std::path::PathBuf;

use super::traits::{parse_info_json, ExtractorConfig, InfoExtractor};
use crate::downloader::errors::DownloadError;
use crate::downloader::models::ExtractionResult;

pub struct InfoJsonExtractor {
    path: PathBuf,
}

impl InfoJsonExtractor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl InfoExtractor for InfoJsonExtractor {
    fn name(&self) -> &'static str {
        "info-json"
    }

    async fn is_available(&self) -> bool {
        tokio::fs::metadata(&self.path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    async fn extract(
        &self,
        url: &str,
        _config: &ExtractorConfig,
    ) -> Result<ExtractionResult, DownloadError> {
        tracing::debug!(
            target: "extractor::info_json",
            path = %self.path.display(),
            url,
            "loading saved info"
        );
        let bytes = tokio::fs::read(&self.path).await?;
        parse_info_json(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_saved_dump() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title":"Saved","formats":[{{"format_id":"140","ext":"m4a","acodec":"mp4a.40.2","vcodec":"none"}}]}}"#
        )
        .unwrap();

        let extractor = InfoJsonExtractor::new(file.path());
        assert!(extractor.is_available().await);

        let info = extractor
            .extract("https://youtu.be/abc", &ExtractorConfig::default())
            .await
            .unwrap();
        assert_eq!(info.title.as_deref(), Some("Saved"));
        assert_eq!(info.formats.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = InfoJsonExtractor::new(dir.path().join("nope.json"));
        assert!(!extractor.is_available().await);
        let err = extractor
            .extract("https://youtu.be/abc", &ExtractorConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DownloadError::Io(_)));
    }
}
