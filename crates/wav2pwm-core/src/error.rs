//! Error types for the conversion pipeline.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while parsing or validating the input container.
///
/// All variants are terminal for a run. Nothing past header validation can
/// fail, so an input is either rejected here or converted completely.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// Buffer shorter than the canonical header, or a declared payload
    /// length that overruns the buffer.
    #[error("truncated container: {len} byte file")]
    TruncatedContainer {
        /// Observed buffer length in bytes.
        len: usize,
    },

    /// The format marker at bytes 8..12 is not `WAVE`.
    #[error("not a WAV container (missing WAVE marker)")]
    MalformedContainer,

    /// A WAV file, but not mono/22050 Hz/16-bit.
    #[error(
        "unsupported format: channels={channels}, sample_rate={sample_rate}, \
         bits_per_sample={bits_per_sample} (need 1/22050/16)"
    )]
    UnsupportedFormat {
        /// Channel count from the header.
        channels: u16,
        /// Sample rate from the header.
        sample_rate: u32,
        /// Bits per sample from the header.
        bits_per_sample: u16,
    },
}
