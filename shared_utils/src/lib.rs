//! Shared utilities for the vid_convert tool
//!
//! This crate provides the infrastructure the converter binary builds on:
//! - Unified error type and `Result` alias
//! - Logging setup (tracing, file + stderr layers)
//! - Terminal color palette
//! - Batch counters and console reporting
//! - Type-safe file size with human-readable formatting
//! - Interactive yes/no and line prompts
//! - External tools detection

pub mod batch;
pub mod colors;
pub mod errors;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod tools;
pub mod types;

pub use batch::BatchResult;
pub use errors::{Result, VidConvertError};
pub use report::{print_directory_tally, print_summary_report};
pub use types::FileSize;
