// Pipeline: argument -> validation -> extraction -> classification
//
// Every failure is folded into the returned ShimOutput; nothing here
// panics or aborts the process.

use super::errors::DownloadError;
use super::extractors::{ExtractorConfig, InfoExtractor};
use super::format_selector::FormatSelector;
use super::models::{ClassifiedOutput, ShimOutput};
use super::validator;
use crate::report::{Stage, StatusNotice, StatusSink};

/// Pick the single URL out of the positional arguments
pub fn single_url(urls: &[String]) -> Result<&str, DownloadError> {
    match urls {
        [] => Err(DownloadError::NoUrl),
        [url] => Ok(url.as_str()),
        _ => Err(DownloadError::TooManyArguments),
    }
}

/// Validate, extract and classify one URL
pub async fn process(
    url: &str,
    config: &ExtractorConfig,
    extractor: &dyn InfoExtractor,
    status: &mut dyn StatusSink,
) -> Result<ClassifiedOutput, DownloadError> {
    status.notify(StatusNotice::new(Stage::ProcessingUrl).with_url(url));
    let url = validator::validate(url)?;

    status.notify(StatusNotice::new(Stage::ExtractingInfo).with_url(url));
    let info = extractor.extract(url, config).await?;

    status.notify(StatusNotice::new(Stage::ProcessingFormats).with_count(info.formats.len()));
    let buckets = FormatSelector::classify(&info.formats);
    tracing::debug!(
        video_audio = buckets.video_audio_formats.len(),
        video_only = buckets.video_only_formats.len(),
        audio_only = buckets.audio_only_formats.len(),
        dropped = info.formats.len() - buckets.len(),
        "classified formats"
    );

    let output = ClassifiedOutput::new(url, &info, buckets);
    status.notify(StatusNotice::new(Stage::Success).with_url(url));
    Ok(output)
}

/// Run one invocation and produce what goes on stdout
pub async fn run(
    urls: &[String],
    config: &ExtractorConfig,
    extractor: &dyn InfoExtractor,
    status: &mut dyn StatusSink,
) -> ShimOutput {
    let url = match single_url(urls) {
        Ok(url) => url,
        Err(e) => return ShimOutput::Failure(e.to_error_result(None)),
    };

    match process(url, config, extractor, status).await {
        Ok(output) => ShimOutput::Success(output),
        Err(e) => {
            tracing::info!(url, error = %e, "request failed");
            ShimOutput::Failure(e.to_error_result(Some(url)))
        }
    }
}
