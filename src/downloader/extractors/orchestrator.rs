// InfoExtractor Orchestrator - picks the Python or CLI extractor
//
// Selection happens once, up front, by availability. A failed extraction
// is final; the other mode is not tried afterwards.

use async_trait::async_trait;

use super::cli::CliInfoExtractor;
use super::python::PythonInfoExtractor;
use super::traits::{ExtractorConfig, ExtractorMode, InfoExtractor};
use crate::downloader::errors::DownloadError;
use crate::downloader::models::ExtractionResult;

/// Orchestrator that manages Python and CLI extractors
pub struct InfoExtractorOrchestrator {
    python: Box<dyn InfoExtractor>,
    cli: Box<dyn InfoExtractor>,
}

impl InfoExtractorOrchestrator {
    pub fn new() -> Self {
        Self::with_extractors(
            Box::new(PythonInfoExtractor::new()),
            Box::new(CliInfoExtractor::new()),
        )
    }

    pub fn with_extractors(python: Box<dyn InfoExtractor>, cli: Box<dyn InfoExtractor>) -> Self {
        Self { python, cli }
    }

    /// Resolve `Auto` to a concrete mode
    pub async fn resolve_mode(&self, mode: ExtractorMode) -> ExtractorMode {
        match mode {
            ExtractorMode::Auto => {
                if self.python.is_available().await {
                    ExtractorMode::Python
                } else {
                    ExtractorMode::Cli
                }
            }
            explicit => explicit,
        }
    }

    async fn select(&self, mode: ExtractorMode) -> &dyn InfoExtractor {
        match self.resolve_mode(mode).await {
            ExtractorMode::Python => self.python.as_ref(),
            _ => self.cli.as_ref(),
        }
    }
}

impl Default for InfoExtractorOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InfoExtractor for InfoExtractorOrchestrator {
    fn name(&self) -> &'static str {
        "orchestrator"
    }

    async fn is_available(&self) -> bool {
        self.python.is_available().await || self.cli.is_available().await
    }

    async fn extract(
        &self,
        url: &str,
        config: &ExtractorConfig,
    ) -> Result<ExtractionResult, DownloadError> {
        let extractor = self.select(config.mode).await;
        tracing::debug!(
            target: "extractor",
            mode = %config.mode,
            selected = extractor.name(),
            "extracting"
        );
        extractor.extract(url, config).await
    }
}
