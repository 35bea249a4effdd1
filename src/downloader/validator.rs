// URL validation - checks that a string looks like a YouTube video link
//
// Patterns are anchored at the start only, so anything after a valid
// prefix (extra query params, fragments, garbage) is accepted.

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::DownloadError;

lazy_static! {
    static ref YOUTUBE_PATTERNS: Vec<Regex> = [
        r"^(https?://)?(www\.)?youtube\.com/watch\?v=[\w-]+",
        r"^(https?://)?(www\.)?youtube\.com/v/[\w-]+",
        r"^(https?://)?(www\.)?youtu\.be/[\w-]+",
        r"^(https?://)?(www\.)?youtube\.com/embed/[\w-]+",
        r"^(https?://)?(www\.)?youtube\.com/shorts/[\w-]+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// Check whether `url` has one of the recognized YouTube shapes
pub fn is_valid(url: &str) -> bool {
    validate(url).is_ok()
}

/// Like [`is_valid`], but says why the URL was rejected
pub fn validate(url: &str) -> Result<&str, DownloadError> {
    if url.trim().is_empty() {
        return Err(DownloadError::EmptyUrl);
    }

    if YOUTUBE_PATTERNS.iter().any(|re| re.is_match(url)) {
        Ok(url)
    } else {
        Err(DownloadError::InvalidUrl(url.to_string()))
    }
}
