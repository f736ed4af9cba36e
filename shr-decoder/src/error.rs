//! Error types for SHR decoding.

use thiserror::Error;

/// Errors that can occur while decoding a raw SHR graphic dump.
///
/// Truncation is the only failure mode: every field in the format has a fixed
/// width and every index derived from a field is range-safe by masking, so any
/// input long enough to contain all three regions decodes without error. No
/// semantic validation of color plausibility is performed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is too short to contain the pixel plane, scanline control
    /// table and palette table.
    #[error("Truncated input: need at least {required} bytes, got {actual}")]
    TruncatedInput {
        /// Minimum number of bytes a raw dump must contain.
        required: usize,
        /// Number of bytes actually supplied.
        actual: usize,
    },
}
