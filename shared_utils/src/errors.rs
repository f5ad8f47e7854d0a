use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidConvertError {
    #[error("No video stream found in {0}")]
    MissingVideoStream(String),

    #[error("No audio stream found in {0}")]
    MissingAudioStream(String),

    #[error("FFprobe failed: {0}")]
    ProbeFailed(String),

    #[error("FFmpeg failed: {0}")]
    EncodeFailed(String),

    #[error("Cannot derive a quality parameter from '{0}'")]
    QualityParam(String),

    #[error("The entered directory does not exist: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VidConvertError>;
