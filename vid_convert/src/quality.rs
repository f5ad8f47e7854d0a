//! Quality parameter heuristic.
//!
//! Maps probed metadata to the integer quantizer handed to the encoder. The
//! arithmetic below is load-bearing for compatibility with existing
//! conversions and is reproduced exactly, including the textual truncation
//! step and the distinct clamp constants.

use crate::probe::FileMetadata;
use shared_utils::{Result, VidConvertError};

/// Files under 50 MiB always get parameter 0 (no compression).
pub const SMALL_FILE_THRESHOLD_BYTES: u64 = 52_428_800;

/// Characters kept from the textual form of the raw product.
const QUALITY_SLICE_LEN: usize = 2;

const QUALITY_OFFSET: i64 = 10;

// The threshold and the clamp value are intentionally different constants.
const CLAMP_THRESHOLD: i64 = 31;
const CLAMP_VALUE: i64 = 30;

/// Compute the constant-quantizer parameter for one file.
///
/// Steps: ceiling the duration (size and bitrate are already integral),
/// return 0 for files under the 50 MiB threshold, otherwise form
/// `0.5 * (bitrate/1000) * (duration/100) * (size/1000)`, render it as a
/// decimal string, parse the first two characters back to an integer and
/// subtract 10. Results above 31 clamp to 30.
///
/// The two-character truncation operates on the textual form, not on the
/// number: a raw product under 10 renders as `"5.24..."` and its slice
/// `"5."` does not parse, which is an error that aborts the run rather than
/// a per-file failure.
pub fn quality_param(meta: &FileMetadata) -> Result<i64> {
    let size = meta.size_bytes;
    let duration = meta.duration_seconds.ceil();
    let bitrate = meta.bitrate_bps;

    if size < SMALL_FILE_THRESHOLD_BYTES {
        return Ok(0);
    }

    let raw = 0.5 * (bitrate as f64 / 1000.0) * (duration / 100.0) * (size as f64 / 1000.0);

    // {:?} keeps a trailing ".0" on integral values.
    let text = format!("{:?}", raw);
    let slice: String = text.chars().take(QUALITY_SLICE_LEN).collect();
    let value = slice
        .parse::<i64>()
        .map_err(|_| VidConvertError::QualityParam(slice))?
        - QUALITY_OFFSET;

    if value > CLAMP_THRESHOLD {
        Ok(CLAMP_VALUE)
    } else {
        Ok(value)
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;

    proptest! {
        #[test]
        fn prop_below_threshold_is_always_zero(
            size in 0u64..SMALL_FILE_THRESHOLD_BYTES,
            duration in 0.0f64..1_000_000.0,
            bitrate in 0u64..100_000_000,
        ) {
            let meta = FileMetadata {
                file_path: PathBuf::from("any.ts"),
                duration_seconds: duration,
                size_bytes: size,
                human_size: String::new(),
                video_codec: String::new(),
                audio_codec: String::new(),
                width: 0,
                height: 0,
                bitrate_bps: bitrate,
            };
            prop_assert_eq!(quality_param(&meta).unwrap(), 0);
        }

        #[test]
        fn prop_result_never_exceeds_thirty_one(
            size in SMALL_FILE_THRESHOLD_BYTES..u64::MAX / 2,
            duration in 0.0f64..1_000_000.0,
            bitrate in 0u64..1_000_000_000,
        ) {
            let meta = FileMetadata {
                file_path: PathBuf::from("any.ts"),
                duration_seconds: duration,
                size_bytes: size,
                human_size: String::new(),
                video_codec: String::new(),
                audio_codec: String::new(),
                width: 0,
                height: 0,
                bitrate_bps: bitrate,
            };
            if let Ok(value) = quality_param(&meta) {
                prop_assert!(value <= 31, "got {}", value);
            }
        }
    }
}
