//! FileSize Type-Safe Wrapper
//!
//! Type-safe file size with the human-readable formatting used across the
//! tool's console output.

use std::fmt;

/// Ordered unit ladder for [`FileSize::human`]. The ladder intentionally
/// stops at TB: a value that is still >= 1024 after the last division is
/// reported in TB anyway.
pub const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

// ============================================================================
// FileSize Newtype
// ============================================================================

/// Type-safe file size (bytes).
///
/// # Examples
/// ```
/// use shared_utils::types::file_size::FileSize;
///
/// let size = FileSize::new(1024 * 1024); // 1MB
/// assert_eq!(size.bytes(), 1048576);
/// assert_eq!(size.human(), "1.00 MB");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileSize(u64);

impl FileSize {
    /// Zero size
    pub const ZERO: FileSize = FileSize(0);

    /// Create a file size from raw bytes
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Raw byte count
    #[inline]
    pub const fn bytes(&self) -> u64 {
        self.0
    }

    /// Check whether the size is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Format with two decimals and the first unit that brings the value
    /// under 1024.
    ///
    /// Divides at most four times (B through GB); a value that is still
    /// >= 1024 once TB is reached is formatted as TB without further
    /// division, so there is no PB unit.
    pub fn human(&self) -> String {
        let mut value = self.0 as f64;
        for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
            if value < 1024.0 {
                return format!("{:.2} {}", value, unit);
            }
            value /= 1024.0;
        }
        format!("{:.2} {}", value, SIZE_UNITS[SIZE_UNITS.len() - 1])
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileSize({} = {})", self.0, self.human())
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.human())
    }
}

impl Default for FileSize {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.0
    }
}

// ============================================================================
// Tests
// ============================================================================
