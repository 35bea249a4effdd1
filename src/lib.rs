pub mod config;
pub mod downloader;
pub mod report;

pub use downloader::orchestrator::{process, run};
