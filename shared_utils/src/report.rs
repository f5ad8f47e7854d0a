//! Report Module
//!
//! Console reporting for conversion runs: the per-directory tally printed as
//! the walk advances, and the run-level summary printed at the end.

use crate::batch::BatchResult;
use crate::colors;
use crate::types::FileSize;
use std::time::Duration;

/// Print the tally for one finished directory, followed by a blank
/// separator line.
pub fn print_directory_tally(result: &BatchResult) {
    println!(
        "{} {} {} {} {}\n",
        colors::success().apply_to("Processed:"),
        result.succeeded,
        colors::dim().apply_to("|"),
        colors::error().apply_to("Failed:"),
        result.failed
    );
}

pub fn print_summary_report(
    result: &BatchResult,
    duration: Duration,
    input_bytes: u64,
    output_bytes: u64,
    operation_name: &str,
) {
    let reduction = if input_bytes > 0 {
        (1.0 - output_bytes as f64 / input_bytes as f64) * 100.0
    } else {
        0.0
    };

    println!();
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!(
        "║                        📊 {} Summary Report                        ║",
        operation_name
    );
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!(
        "║  📁 Files Processed:    {:>10}                                         ║",
        result.total
    );
    println!(
        "║  ✅ Succeeded:          {:>10}                                         ║",
        result.succeeded
    );
    println!(
        "║  ❌ Failed:             {:>10}                                         ║",
        result.failed
    );
    println!(
        "║  📈 Success Rate:       {:>9.1}%                                         ║",
        result.success_rate()
    );
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!(
        "║  💾 Input Size:         {:>10}                                         ║",
        FileSize::new(input_bytes).human()
    );
    println!(
        "║  💾 Output Size:        {:>10}                                         ║",
        FileSize::new(output_bytes).human()
    );
    println!(
        "║  📉 Size Reduction:     {:>9.1}%                                         ║",
        reduction
    );
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!(
        "║  ⏱️  Total Time:         {:>10}                                         ║",
        format_duration(duration)
    );
    if result.total > 0 {
        let avg_time = duration.as_secs_f64() / result.total as f64;
        println!(
            "║  ⏱️  Avg Time/File:      {:>9.2}s                                         ║",
            avg_time
        );
    }
    println!("╚══════════════════════════════════════════════════════════════════════════════╝");

    if !result.errors.is_empty() {
        println!();
        println!("{}", colors::error().apply_to("❌ Errors encountered:"));
        for (path, error) in &result.errors {
            println!("   {} → {}", path.display(), error);
        }
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}
