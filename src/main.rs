use std::io;

use clap::error::ErrorKind;
use clap::Parser;

use youtube_info_lib::config::{self, Args};
use youtube_info_lib::downloader::extractors::{InfoExtractorOrchestrator, InfoJsonExtractor};
use youtube_info_lib::downloader::{DownloadError, InfoExtractor, ShimOutput};
use youtube_info_lib::report::{write_primary, JsonLinesStatus};

fn emit(output: &ShimOutput) {
    let stdout = io::stdout();
    if let Err(e) = write_primary(&mut stdout.lock(), output) {
        tracing::error!("failed to write result: {}", e);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    config::init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            let err = DownloadError::InvalidArguments(e.to_string());
            emit(&ShimOutput::Failure(err.to_error_result(None)));
            return;
        }
    };

    let extractor_config = args.extractor_config();
    let extractor: Box<dyn InfoExtractor> = match &args.info_json {
        Some(path) => Box::new(InfoJsonExtractor::new(path)),
        None => Box::new(InfoExtractorOrchestrator::new()),
    };
    tracing::debug!(
        extractor = extractor.name(),
        mode = %extractor_config.mode,
        cookies = ?extractor_config.cookies_path,
        "starting"
    );

    let mut status = JsonLinesStatus::stderr();
    let output = youtube_info_lib::run(&args.urls, &extractor_config, extractor.as_ref(), &mut status).await;
    emit(&output);
}
