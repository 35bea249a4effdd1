// Common data models for the metadata shim

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Title used when the extractor does not report one
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Codec field of a yt-dlp format
///
/// yt-dlp writes the literal `"none"` when a format carries no stream of
/// that kind. A missing field is kept apart from that sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Codec {
    /// The `"none"` sentinel: no stream of this kind
    Absent,
    /// A named codec (avc1, vp9, mp4a, opus, ...)
    Named(String),
    /// Field missing or null
    #[default]
    Unspecified,
}

impl Codec {
    const SENTINEL: &'static str = "none";

    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some(Self::SENTINEL) => Self::Absent,
            Some(name) => Self::Named(name.to_string()),
            None => Self::Unspecified,
        }
    }

    /// Anything other than the `"none"` sentinel counts as a stream
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Absent => Some(Self::SENTINEL),
            Self::Named(name) => Some(name.as_str()),
            Self::Unspecified => None,
        }
    }
}

impl Serialize for Codec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Codec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(Self::from_field(value.as_deref()))
    }
}

/// Accepts integers and floats (yt-dlp sometimes estimates sizes as floats)
fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64().or_else(|| {
            v.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        })
    }))
}

/// Drops zero dimensions so they read as "not known"
fn positive_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(lenient_u64(deserializer)?
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok()))
}

/// Strings or numbers, whatever yt-dlp used for the field
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

/// One downloadable variant as reported by yt-dlp
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatDescriptor {
    /// Format ID (e.g., "137", "140")
    #[serde(default, deserialize_with = "lenient_string")]
    pub format_id: String,
    /// File extension (mp4, webm, m4a)
    #[serde(default, deserialize_with = "lenient_string")]
    pub ext: String,
    /// Direct media URL, signed and short-lived
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "positive_u32")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "positive_u32")]
    pub height: Option<u32>,
    #[serde(default)]
    pub acodec: Codec,
    #[serde(default)]
    pub vcodec: Codec,
    /// File size in bytes
    #[serde(default, deserialize_with = "lenient_u64")]
    pub filesize: Option<u64>,
    /// Approximate file size (when exact is unknown)
    #[serde(default, deserialize_with = "lenient_u64")]
    pub filesize_approx: Option<u64>,
    /// Audio bitrate in kbps
    #[serde(default)]
    pub abr: Option<f64>,
    /// Total bitrate in kbps
    #[serde(default)]
    pub tbr: Option<f64>,
    #[serde(default)]
    pub fps: Option<f64>,
    /// Format note (e.g., "1080p", "tiny")
    #[serde(default)]
    pub format_note: Option<String>,
}

impl FormatDescriptor {
    /// Get effective file size (exact or approximate)
    pub fn effective_size(&self) -> Option<u64> {
        self.filesize.or(self.filesize_approx)
    }

    pub fn has_dimensions(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    /// "HEIGHTxWIDTH", height first
    pub fn resolution(&self) -> Option<String> {
        match (self.height, self.width) {
            (Some(h), Some(w)) => Some(format!("{}x{}", h, w)),
            _ => None,
        }
    }
}

/// Top-level yt-dlp info object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub filesize_approx: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub formats: Vec<FormatDescriptor>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<FormatDescriptor>, D::Error> {
    Ok(Option::<Vec<FormatDescriptor>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ExtractionResult {
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }
}

/// Combined audio+video format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoAudioFormat {
    pub format_id: String,
    pub ext: String,
    pub url: String,
    pub filesize: Option<u64>,
    pub resolution: String,
    pub fps: Option<f64>,
    pub vcodec: Codec,
    pub acodec: Codec,
}

/// Video stream without audio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoOnlyFormat {
    pub format_id: String,
    pub ext: String,
    pub url: String,
    pub filesize: Option<u64>,
    pub resolution: String,
    pub fps: Option<f64>,
    pub vcodec: Codec,
}

/// Audio stream without video
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioOnlyFormat {
    pub format_id: String,
    pub ext: String,
    pub url: String,
    pub filesize: Option<u64>,
    pub abr: Option<f64>,
    pub acodec: Codec,
}

/// The three buckets, each in extractor order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormatBuckets {
    pub video_audio_formats: Vec<VideoAudioFormat>,
    pub video_only_formats: Vec<VideoOnlyFormat>,
    pub audio_only_formats: Vec<AudioOnlyFormat>,
}

impl FormatBuckets {
    pub fn len(&self) -> usize {
        self.video_audio_formats.len() + self.video_only_formats.len() + self.audio_only_formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Successful result printed on stdout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedOutput {
    pub title: String,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    pub filesize_approx: Option<u64>,
    pub view_count: Option<u64>,
    pub url: String,
    /// Suggested file name for a merged download
    pub video_filename: String,
    #[serde(flatten)]
    pub formats: FormatBuckets,
}

impl ClassifiedOutput {
    pub fn new(url: &str, info: &ExtractionResult, formats: FormatBuckets) -> Self {
        let title = info.title_or_default().to_string();
        Self {
            video_filename: video_filename(&title),
            title,
            thumbnail: info.thumbnail.clone(),
            duration: info.duration,
            filesize_approx: info.filesize_approx,
            view_count: info.view_count,
            url: url.to_string(),
            formats,
        }
    }
}

/// Title with spaces replaced by underscores, plus `.mp4`
pub fn video_filename(title: &str) -> String {
    format!("{}.mp4", title.replace(' ', "_"))
}

/// Failure result printed on stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            url: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }
}

/// Whatever a single invocation prints on stdout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShimOutput {
    Success(ClassifiedOutput),
    Failure(ErrorResult),
}

impl ShimOutput {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<ErrorResult> for ShimOutput {
    fn from(err: ErrorResult) -> Self {
        Self::Failure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codec_sentinel_and_missing_are_distinct() {
        let f: FormatDescriptor = serde_json::from_value(json!({
            "format_id": "140",
            "ext": "m4a",
            "url": "https://example.invalid/a",
            "vcodec": "none",
            "acodec": null
        }))
        .unwrap();
        assert_eq!(f.vcodec, Codec::Absent);
        assert_eq!(f.acodec, Codec::Unspecified);
        assert!(f.acodec.is_present());
        assert!(!f.vcodec.is_present());
    }

    #[test]
    fn test_codec_serializes_back() {
        let value = serde_json::to_value(vec![
            Codec::Absent,
            Codec::Named("opus".to_string()),
            Codec::Unspecified,
        ])
        .unwrap();
        assert_eq!(value, json!(["none", "opus", null]));
    }

    #[test]
    fn test_lenient_numbers() {
        let f: FormatDescriptor = serde_json::from_value(json!({
            "format_id": 18,
            "ext": "mp4",
            "width": 640,
            "height": 0,
            "filesize_approx": 1234.7
        }))
        .unwrap();
        assert_eq!(f.format_id, "18");
        assert_eq!(f.width, Some(640));
        assert_eq!(f.height, None);
        assert_eq!(f.filesize_approx, Some(1234));
        assert!(!f.has_dimensions());
    }

    #[test]
    fn test_descriptor_metadata_fields() {
        let f: FormatDescriptor = serde_json::from_value(json!({
            "format_id": "sb0",
            "ext": "mhtml",
            "tbr": 0.1,
            "format_note": "storyboard",
            "protocol": "mhtml"
        }))
        .unwrap();
        assert_eq!(f.tbr, Some(0.1));
        assert_eq!(f.format_note.as_deref(), Some("storyboard"));
    }

    #[test]
    fn test_effective_size_prefers_exact() {
        let f = FormatDescriptor {
            filesize: Some(10),
            filesize_approx: Some(20),
            ..Default::default()
        };
        assert_eq!(f.effective_size(), Some(10));

        let f = FormatDescriptor {
            filesize_approx: Some(20),
            ..Default::default()
        };
        assert_eq!(f.effective_size(), Some(20));
        assert_eq!(FormatDescriptor::default().effective_size(), None);
    }

    #[test]
    fn test_resolution_is_height_first() {
        let f = FormatDescriptor {
            width: Some(1920),
            height: Some(1080),
            ..Default::default()
        };
        assert_eq!(f.resolution().as_deref(), Some("1080x1920"));
    }

    #[test]
    fn test_extraction_result_defaults() {
        let info: ExtractionResult =
            serde_json::from_value(json!({ "formats": null, "view_count": 42 })).unwrap();
        assert_eq!(info.title_or_default(), UNKNOWN_TITLE);
        assert!(info.formats.is_empty());
        assert_eq!(info.view_count, Some(42));
    }

    #[test]
    fn test_video_filename() {
        assert_eq!(video_filename("My cool video"), "My_cool_video.mp4");
    }

    #[test]
    fn test_classified_output_shape() {
        let info = ExtractionResult {
            title: Some("A B".to_string()),
            duration: Some(12.0),
            ..Default::default()
        };
        let out = ClassifiedOutput::new("https://youtu.be/x", &info, FormatBuckets::default());
        let value = serde_json::to_value(ShimOutput::Success(out)).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "A B",
                "thumbnail": null,
                "duration": 12.0,
                "filesize_approx": null,
                "view_count": null,
                "url": "https://youtu.be/x",
                "video_filename": "A_B.mp4",
                "video_audio_formats": [],
                "video_only_formats": [],
                "audio_only_formats": []
            })
        );
    }
}
