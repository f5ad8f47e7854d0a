//! Probe adapter: engine output to per-file metadata.

use crate::engine::{MediaEngine, StreamData};
use shared_utils::{FileSize, Result, VidConvertError};
use std::path::{Path, PathBuf};

/// Metadata for one input file, produced once by [`probe_file`] and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub file_path: PathBuf,
    pub duration_seconds: f64,
    pub size_bytes: u64,
    pub human_size: String,
    pub video_codec: String,
    pub audio_codec: String,
    pub width: u32,
    pub height: u32,
    pub bitrate_bps: u64,
}

fn find_stream<'a>(streams: &'a [StreamData], codec_type: &str) -> Option<&'a StreamData> {
    streams.iter().find(|s| s.codec_type == codec_type)
}

/// Probe one file and build its [`FileMetadata`].
///
/// Fails with a missing-stream error naming the file when no video stream is
/// present; the audio check runs only after the video check passes. Engine
/// failures (unreadable file, bad JSON) pass through as probe errors.
pub fn probe_file(engine: &dyn MediaEngine, path: &Path) -> Result<FileMetadata> {
    let data = engine.probe(path)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let video = find_stream(&data.streams, "video")
        .ok_or_else(|| VidConvertError::MissingVideoStream(file_name.clone()))?;
    let audio = find_stream(&data.streams, "audio")
        .ok_or_else(|| VidConvertError::MissingAudioStream(file_name))?;

    let duration_seconds = data
        .format
        .duration
        .as_deref()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0);
    let size_bytes = data
        .format
        .size
        .as_deref()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);
    let bitrate_bps = data
        .format
        .bit_rate
        .as_deref()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);

    Ok(FileMetadata {
        file_path: path.to_path_buf(),
        duration_seconds,
        size_bytes,
        human_size: FileSize::new(size_bytes).human(),
        video_codec: video.codec_name.clone(),
        audio_codec: audio.codec_name.clone(),
        width: video.width.unwrap_or(0),
        height: video.height.unwrap_or(0),
        bitrate_bps,
    })
}
