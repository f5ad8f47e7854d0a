//! vid_convert - Batch video extension converter
//!
//! Walks a directory tree, probes every file with the input extension and
//! re-encodes it to the output extension with a quality parameter derived
//! from the file's size, bitrate and duration. The media work is delegated
//! to ffmpeg/ffprobe behind the [`engine::MediaEngine`] trait.
//!
//! ```rust,ignore
//! use vid_convert::{convert_tree, ConvertOptions, FfmpegEngine};
//! use std::path::Path;
//!
//! let engine = FfmpegEngine::new();
//! let result = convert_tree(&engine, Path::new("."), &ConvertOptions::default())?;
//! println!("{} converted, {} failed", result.succeeded, result.failed);
//! ```

pub mod convert;
pub mod engine;
pub mod probe;
pub mod quality;
pub mod walker;


pub use convert::{convert_tree, ConvertOptions};
pub use engine::{EncodeSettings, FfmpegEngine, MediaEngine, ProbeData};
pub use probe::{probe_file, FileMetadata};
pub use quality::quality_param;
pub use walker::{DirWalker, WalkedDir, EXCLUDED_DIRS};

pub use shared_utils::errors::{Result, VidConvertError};
