// FormatSelector - sorts raw yt-dlp formats into three buckets
//
// Rules, first match wins, no match drops the format:
// 1. mp4 with both dimensions and both streams -> video + audio
// 2. mp4 with both dimensions, video but no audio -> video only
// 3. any container, audio but no video -> audio only
//
// Non-mp4 video-only formats (webm/vp9) fall through every rule and are
// dropped.

use super::models::{
    AudioOnlyFormat, FormatBuckets, FormatDescriptor, VideoAudioFormat, VideoOnlyFormat,
};

const MP4: &str = "mp4";

/// Bucket a single format falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    VideoAudio,
    VideoOnly,
    AudioOnly,
}

pub struct FormatSelector;

impl FormatSelector {
    /// Decide which bucket `format` belongs to, if any
    pub fn kind_of(format: &FormatDescriptor) -> Option<FormatKind> {
        let mp4_with_dimensions = format.ext == MP4 && format.has_dimensions();

        if mp4_with_dimensions && format.acodec.is_present() && format.vcodec.is_present() {
            Some(FormatKind::VideoAudio)
        } else if mp4_with_dimensions && format.vcodec.is_present() && format.acodec.is_absent() {
            Some(FormatKind::VideoOnly)
        } else if format.acodec.is_present() && format.vcodec.is_absent() {
            Some(FormatKind::AudioOnly)
        } else {
            None
        }
    }

    /// Build the three buckets, keeping extractor order inside each
    pub fn classify(formats: &[FormatDescriptor]) -> FormatBuckets {
        let mut buckets = FormatBuckets::default();

        for f in formats {
            match Self::kind_of(f) {
                Some(FormatKind::VideoAudio) => {
                    buckets.video_audio_formats.push(VideoAudioFormat {
                        format_id: f.format_id.clone(),
                        ext: f.ext.clone(),
                        url: f.url.clone(),
                        filesize: f.effective_size(),
                        resolution: f.resolution().unwrap_or_default(),
                        fps: f.fps,
                        vcodec: f.vcodec.clone(),
                        acodec: f.acodec.clone(),
                    })
                }
                Some(FormatKind::VideoOnly) => buckets.video_only_formats.push(VideoOnlyFormat {
                    format_id: f.format_id.clone(),
                    ext: f.ext.clone(),
                    url: f.url.clone(),
                    filesize: f.effective_size(),
                    resolution: f.resolution().unwrap_or_default(),
                    fps: f.fps,
                    vcodec: f.vcodec.clone(),
                }),
                Some(FormatKind::AudioOnly) => buckets.audio_only_formats.push(AudioOnlyFormat {
                    format_id: f.format_id.clone(),
                    ext: f.ext.clone(),
                    url: f.url.clone(),
                    filesize: f.effective_size(),
                    abr: f.abr,
                    acodec: f.acodec.clone(),
                }),
                None => {
                    tracing::debug!(
                        format_id = %f.format_id,
                        ext = %f.ext,
                        note = f.format_note.as_deref().unwrap_or(""),
                        tbr = ?f.tbr,
                        "format matches no bucket, dropping"
                    );
                }
            }
        }

        buckets
    }
}
