//! Error types for lane codec encoding/decoding operations.

use thiserror::Error;

/// Errors that can occur during lane codec operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LanePackError {
    /// The output buffer is too small for the operation.
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    OutputTooSmall {
        /// The number of bytes the operation requires.
        needed: usize,
        /// The number of bytes the caller provided.
        available: usize,
    },

    /// The encoded stream ends before the decoder's cursor.
    #[error("encoded stream truncated: need {needed} bytes, have {available}")]
    TruncatedStream {
        /// The stream length the decoder needs to reach.
        needed: usize,
        /// The stream length the caller provided.
        available: usize,
    },
}
