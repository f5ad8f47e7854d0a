//! Media engine interface and the ffmpeg/ffprobe implementation.
//!
//! The converter only needs two operations from the media stack: probe a
//! file's container/stream metadata, and encode a file with a given quality
//! parameter. Both sit behind [`MediaEngine`] so the walker, heuristic and
//! orchestrator are testable with a fake engine instead of real tools.

use serde::Deserialize;
use shared_utils::logging::log_external_tool;
use shared_utils::{Result, VidConvertError};
use std::path::Path;
use std::process::Command;
use std::time::Instant;

/// Raw ffprobe output for one file.
///
/// Numeric format fields arrive as JSON strings (`"duration": "120.5"`);
/// they are kept as strings here and parsed by the probe adapter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeData {
    #[serde(default)]
    pub format: FormatData,
    #[serde(default)]
    pub streams: Vec<StreamData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatData {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub bit_rate: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamData {
    #[serde(default)]
    pub codec_type: String,
    #[serde(default)]
    pub codec_name: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Encoder settings for one transcode.
#[derive(Debug, Clone)]
pub struct EncodeSettings {
    pub video_codec: String,
    pub rate_control: String,
    pub quality: i64,
    pub audio_codec: String,
}

impl EncodeSettings {
    /// Hardware H.264 with constant-quantizer rate control and AAC audio.
    pub fn constqp_h264(quality: i64) -> Self {
        Self {
            video_codec: "h264_nvenc".to_string(),
            rate_control: "constqp".to_string(),
            quality,
            audio_codec: "aac".to_string(),
        }
    }
}

/// Narrow seam over the external media tools.
pub trait MediaEngine {
    /// Inspect container and stream metadata without decoding.
    fn probe(&self, path: &Path) -> Result<ProbeData>;

    /// Transcode `input` to `output` with the given settings.
    fn encode(&self, input: &Path, output: &Path, settings: &EncodeSettings) -> Result<()>;
}

/// The real engine: `ffprobe` and `ffmpeg` subprocesses with captured output.
#[derive(Debug, Default)]
pub struct FfmpegEngine;

impl FfmpegEngine {
    pub fn new() -> Self {
        Self
    }
}

impl MediaEngine for FfmpegEngine {
    fn probe(&self, path: &Path) -> Result<ProbeData> {
        let path_str = path.to_string_lossy();
        let args = [
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
            "--",
            path_str.as_ref(),
        ];

        let start = Instant::now();
        let output = Command::new("ffprobe")
            .args(args)
            .output()
            .map_err(|e| VidConvertError::ProbeFailed(format!("failed to run ffprobe: {}", e)))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        log_external_tool(
            "ffprobe",
            &args,
            stderr.trim(),
            output.status.code(),
            start.elapsed(),
        );

        if !output.status.success() {
            let detail = if stderr.trim().is_empty() {
                format!(
                    "ffprobe could not read {} (exit code: {:?})",
                    path.display(),
                    output.status.code()
                )
            } else {
                format!("{}: {}", path.display(), stderr.trim())
            };
            return Err(VidConvertError::ProbeFailed(detail));
        }

        let json = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&json)
            .map_err(|e| VidConvertError::ProbeFailed(format!("{}: {}", path.display(), e)))
    }

    fn encode(&self, input: &Path, output: &Path, settings: &EncodeSettings) -> Result<()> {
        let input_str = input.to_string_lossy();
        let output_str = output.to_string_lossy();
        let quality = settings.quality.to_string();
        let args = [
            "-y",
            "-i",
            input_str.as_ref(),
            "-c:v",
            settings.video_codec.as_str(),
            "-rc",
            settings.rate_control.as_str(),
            "-crf",
            quality.as_str(),
            "-c:a",
            settings.audio_codec.as_str(),
            output_str.as_ref(),
        ];

        let start = Instant::now();
        let result = Command::new("ffmpeg")
            .args(args)
            .output()
            .map_err(|e| VidConvertError::EncodeFailed(format!("failed to run ffmpeg: {}", e)))?;

        let stderr = String::from_utf8_lossy(&result.stderr);
        log_external_tool(
            "ffmpeg",
            &args,
            stderr.trim(),
            result.status.code(),
            start.elapsed(),
        );

        if !result.status.success() {
            return Err(VidConvertError::EncodeFailed(stderr.trim().to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_data_parses_ffprobe_json() {
        let json = r#"{
            "streams": [
                {"codec_type": "video", "codec_name": "h264", "width": 1920, "height": 1080},
                {"codec_type": "audio", "codec_name": "aac"}
            ],
            "format": {"duration": "120.500000", "size": "104857600", "bit_rate": "4000000"}
        }"#;

        let data: ProbeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.streams.len(), 2);
        assert_eq!(data.streams[0].codec_type, "video");
        assert_eq!(data.streams[0].width, Some(1920));
        assert_eq!(data.streams[1].codec_name, "aac");
        assert_eq!(data.format.duration.as_deref(), Some("120.500000"));
        assert_eq!(data.format.size.as_deref(), Some("104857600"));
    }

    #[test]
    fn test_probe_data_tolerates_missing_fields() {
        let data: ProbeData = serde_json::from_str("{}").unwrap();
        assert!(data.streams.is_empty());
        assert!(data.format.duration.is_none());

        let data: ProbeData =
            serde_json::from_str(r#"{"streams": [{"codec_type": "data"}]}"#).unwrap();
        assert_eq!(data.streams[0].codec_type, "data");
        assert!(data.streams[0].width.is_none());
    }

    #[test]
    fn test_constqp_h264_settings() {
        let settings = EncodeSettings::constqp_h264(15);
        assert_eq!(settings.video_codec, "h264_nvenc");
        assert_eq!(settings.rate_control, "constqp");
        assert_eq!(settings.quality, 15);
        assert_eq!(settings.audio_codec, "aac");
    }
}
