//! Output streams.
//!
//! The primary stream (stdout) carries exactly one JSON object per run. Status
//! notices go to the diagnostic stream (stderr) as JSON lines so a caller that
//! only parses stdout never sees them.

use std::io::{self, Write};

use serde::Serialize;

use crate::downloader::models::ShimOutput;

/// Progress stages reported on the diagnostic stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ProcessingUrl,
    ExtractingInfo,
    ProcessingFormats,
    Success,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProcessingUrl => "Processing URL",
            Self::ExtractingInfo => "Extracting video info",
            Self::ProcessingFormats => "Processing formats",
            Self::Success => "Success",
        }
    }
}

/// One diagnostic line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusNotice {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl StatusNotice {
    pub fn new(stage: Stage) -> Self {
        Self {
            status: stage.as_str(),
            url: None,
            count: None,
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Receiver for progress notices
pub trait StatusSink {
    fn notify(&mut self, notice: StatusNotice);
}

/// Collects notices in memory
impl StatusSink for Vec<StatusNotice> {
    fn notify(&mut self, notice: StatusNotice) {
        self.push(notice);
    }
}

/// Writes notices as JSON lines, normally to stderr
pub struct JsonLinesStatus<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesStatus<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonLinesStatus<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> StatusSink for JsonLinesStatus<W> {
    fn notify(&mut self, notice: StatusNotice) {
        let written = serde_json::to_writer(&mut self.out, &notice)
            .map_err(io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"))
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            tracing::warn!("failed to write status line: {}", e);
        }
    }
}

/// Write the single result line to the primary stream
pub fn write_primary<W: Write>(out: &mut W, output: &ShimOutput) -> io::Result<()> {
    serde_json::to_writer(&mut *out, output)?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::models::ErrorResult;

    #[test]
    fn test_status_lines_are_json() {
        let mut sink = JsonLinesStatus::new(Vec::<u8>::new());
        sink.notify(StatusNotice::new(Stage::ProcessingUrl).with_url("https://youtu.be/a"));
        sink.notify(StatusNotice::new(Stage::ProcessingFormats).with_count(3));
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"status":"Processing URL","url":"https://youtu.be/a"}"#,
                r#"{"status":"Processing formats","count":3}"#,
            ]
        );
    }

    #[test]
    fn test_primary_is_single_line() {
        let mut out = Vec::new();
        let payload = ShimOutput::from(
            ErrorResult::new("Failed to extract video info").with_details("line one\nline two"),
        );
        write_primary(&mut out, &payload).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\n').count(), 1);
        assert!(text.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed["details"], "line one\nline two");
    }
}
