//! File converter orchestrator.
//!
//! Drives the walker over the tree and processes each candidate file in
//! sequence: probe, compute the quality parameter, transcode, tally. One
//! file finishes before the next begins; one directory's tally prints before
//! the next directory is read.

use crate::engine::{EncodeSettings, MediaEngine};
use crate::probe::{probe_file, FileMetadata};
use crate::quality::quality_param;
use crate::walker::DirWalker;
use shared_utils::{colors, print_directory_tally, print_summary_report, BatchResult, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Input extension without the leading dot, e.g. `ts`.
    pub input_ext: String,
    /// Output extension without the leading dot, e.g. `mp4`.
    pub output_ext: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input_ext: "ts".to_string(),
            output_ext: "mp4".to_string(),
        }
    }
}

/// Swap the trailing input extension for the output extension.
fn output_path(input: &Path, input_ext: &str, output_ext: &str) -> PathBuf {
    let name = input.file_name().map(|n| n.to_string_lossy().into_owned());
    match name {
        Some(name) => {
            let suffix = format!(".{}", input_ext);
            let stem = name.strip_suffix(&suffix).unwrap_or(&name);
            input.with_file_name(format!("{}.{}", stem, output_ext))
        }
        None => input.to_path_buf(),
    }
}

fn print_file_line(meta: &FileMetadata) {
    let name = meta
        .file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!(
        " - {} {} | {} {} | {} {} | {} {}",
        colors::warning().apply_to("File:"),
        colors::info().apply_to(name),
        colors::warning().apply_to("Size:"),
        meta.human_size,
        colors::warning().apply_to("Width:"),
        meta.width,
        colors::warning().apply_to("Height:"),
        meta.height
    );
}

/// Outcome of one candidate file.
enum FileOutcome {
    Converted(FileMetadata),
    Failed(String),
}

/// Probe, compute and transcode one candidate file.
///
/// Probe and encode errors are echoed and become a [`FileOutcome::Failed`];
/// only the quality-parameter error propagates.
fn process_file(engine: &dyn MediaEngine, input: &Path, output: &Path) -> Result<FileOutcome> {
    let meta = match probe_file(engine, input) {
        Ok(meta) => meta,
        Err(e) => {
            colors::print_error(&e.to_string());
            return Ok(FileOutcome::Failed(e.to_string()));
        }
    };

    print_file_line(&meta);

    let quality = quality_param(&meta)?;
    debug!(file = %input.display(), quality, "Computed quality parameter");

    let settings = EncodeSettings::constqp_h264(quality);
    match engine.encode(input, output, &settings) {
        Ok(()) => Ok(FileOutcome::Converted(meta)),
        Err(e) => {
            colors::print_error(&e.to_string());
            Ok(FileOutcome::Failed(e.to_string()))
        }
    }
}

/// Convert every candidate file under `root`, directory by directory.
///
/// Prints the per-directory tally as each directory finishes and the
/// run-level summary at the end. Per-file errors are recovered (the file is
/// counted failed and the batch continues); an unusable quality slice aborts
/// the run.
pub fn convert_tree(
    engine: &dyn MediaEngine,
    root: &Path,
    options: &ConvertOptions,
) -> Result<BatchResult> {
    info!(
        root = %root.display(),
        input_ext = %options.input_ext,
        output_ext = %options.output_ext,
        "Starting conversion run"
    );

    let start = Instant::now();
    let mut run = BatchResult::new();
    let mut input_bytes: u64 = 0;
    let mut output_bytes: u64 = 0;

    for walked in DirWalker::new(root, &options.input_ext) {
        let mut dir_result = BatchResult::new();

        for file in &walked.candidates {
            let output = output_path(file, &options.input_ext, &options.output_ext);

            match process_file(engine, file, &output)? {
                FileOutcome::Converted(meta) => {
                    dir_result.success();
                    input_bytes += meta.size_bytes;
                    output_bytes += std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
                }
                FileOutcome::Failed(message) => {
                    dir_result.fail(file.clone(), message);
                }
            }
        }

        print_directory_tally(&dir_result);
        run.merge(&dir_result);
    }

    print_summary_report(&run, start.elapsed(), input_bytes, output_bytes, "Conversion");

    Ok(run)
}
