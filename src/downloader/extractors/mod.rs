// InfoExtractor module - turns a URL into yt-dlp's info object
//
// Provides three sources:
// - Python mode: `python3 -m yt_dlp`
// - CLI mode: native `yt-dlp` binary
// - Info JSON: a dump saved by an earlier yt-dlp run
//
// The Orchestrator picks Python or CLI by availability unless a mode is
// configured explicitly.

mod cli;
mod info_json;
mod orchestrator;
mod python;
mod traits;

pub use cli::CliInfoExtractor;
pub use info_json::InfoJsonExtractor;
pub use orchestrator::InfoExtractorOrchestrator;
pub use python::PythonInfoExtractor;
pub use traits::{parse_info_json, ExtractorConfig, ExtractorMode, InfoExtractor};
