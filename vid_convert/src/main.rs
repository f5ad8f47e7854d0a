use clap::Parser;
use shared_utils::logging::{init_logging, LogConfig};
use shared_utils::{colors, prompt, tools, VidConvertError};
use std::path::PathBuf;
use tracing::info;

use vid_convert::{convert_tree, ConvertOptions, FfmpegEngine};

#[derive(Parser)]
#[command(name = "vid_convert")]
#[command(version, about = "Converts video files from one extension to any other extension", long_about = None)]
struct Cli {
    /// Extension of the input files (without the leading dot)
    #[arg(short, long, default_value = "ts")]
    input: String,

    /// Extension of the output files (without the leading dot)
    #[arg(short, long, default_value = "mp4")]
    output: String,
}

/// Show the current directory and let the user pick a different traversal
/// root. A path that does not exist aborts the run.
fn ask_path() -> anyhow::Result<PathBuf> {
    let mut path = std::env::current_dir()?;
    println!(
        "{} {}",
        colors::info().apply_to("Current directory:"),
        colors::number().apply_to(path.display())
    );

    if prompt::confirm("Do you want to change the directory?", false)? {
        let entered = prompt::read_line("Enter the directory:")?;
        path = PathBuf::from(entered);

        if !path.exists() {
            colors::print_error("The entered directory does not exist");
            return Err(VidConvertError::InvalidDirectory(path).into());
        }
    }

    println!();
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    let _ = init_logging("vid_convert", LogConfig::default());

    let cli = Cli::parse();

    if !tools::ffmpeg_available() || !tools::ffprobe_available() {
        eprintln!("❌ Error: ffmpeg and ffprobe are required but were not found on PATH");
        std::process::exit(1);
    }

    let root = ask_path()?;

    info!(
        root = %root.display(),
        input = %cli.input,
        output = %cli.output,
        "🎬 Batch conversion starting"
    );

    let engine = FfmpegEngine::new();
    let options = ConvertOptions {
        input_ext: cli.input,
        output_ext: cli.output,
    };

    convert_tree(&engine, &root, &options)?;

    Ok(())
}
