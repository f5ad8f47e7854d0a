//! Type-Safe Wrappers Module
//!
//! ## Modules
//! - `file_size`: type-safe file size with human-readable formatting

pub mod file_size;

// Re-exports for convenience
pub use file_size::FileSize;
