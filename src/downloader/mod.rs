// Downloader module - yt-dlp metadata extraction and format bucketing

pub mod diagnostics;
pub mod errors;
pub mod extractors;
pub mod format_selector;
pub mod models;
pub mod orchestrator;
pub mod utils;
pub mod validator;

pub use errors::DownloadError;
pub use extractors::{ExtractorConfig, ExtractorMode, InfoExtractor};
pub use format_selector::FormatSelector;
pub use models::{ClassifiedOutput, ErrorResult, ExtractionResult, FormatDescriptor, ShimOutput};
