//! Detection errors.

use std::io;

use thiserror::Error;

/// Why a source could not be classified.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The underlying read (or open) failed.
    #[error("failed to read bytes from file: {0}")]
    Read(#[from] io::Error),

    /// The source ended before the 4-byte prefix was available, so no signature could be checked.
    #[error("failed to determine file format: malformed file (read {read} of 4 bytes)")]
    InsufficientData { read: usize },

    /// A full prefix was read and compared, and nothing matched.
    #[error("unknown format")]
    UnknownFormat,
}

impl DetectError {
    /// True for [`DetectError::Read`] and [`DetectError::InsufficientData`]: the prefix
    /// could not be evaluated at all.
    #[inline]
    pub fn is_read_failure(&self) -> bool {
        matches!(self, DetectError::Read(_) | DetectError::InsufficientData { .. })
    }

    #[inline]
    pub fn is_unknown_format(&self) -> bool {
        matches!(self, DetectError::UnknownFormat)
    }
}
