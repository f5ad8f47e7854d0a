//! External tools detection.

/// Check whether `ffmpeg` is on the PATH.
pub fn ffmpeg_available() -> bool {
    which::which("ffmpeg").is_ok()
}

/// Check whether `ffprobe` is on the PATH.
pub fn ffprobe_available() -> bool {
    which::which("ffprobe").is_ok()
}
