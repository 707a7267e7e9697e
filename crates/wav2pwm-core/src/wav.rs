//! Fixed-offset WAV container parsing.
//!
//! The converter accepts exactly one input shape: the canonical 44-byte
//! uncompressed PCM layout with the sample payload starting at byte 44.
//! Fields are decoded as explicit little-endian reads at fixed offsets with
//! bounds checks up front; nothing walks the chunk list and nothing aliases
//! the buffer as a struct.

use crate::error::{ConvertError, ConvertResult};

/// Required channel count.
pub const REQUIRED_CHANNELS: u16 = 1;
/// The single supported sample rate in Hz.
pub const REQUIRED_SAMPLE_RATE: u32 = 22_050;
/// Required bits per sample.
pub const REQUIRED_BITS_PER_SAMPLE: u16 = 16;

/// Canonical header length; the payload starts immediately after.
pub const HEADER_LEN: usize = 44;

const FORMAT_MARKER: &[u8; 4] = b"WAVE";
const OFFSET_FORMAT: usize = 8;
const OFFSET_CHANNELS: usize = 22;
const OFFSET_SAMPLE_RATE: usize = 24;
const OFFSET_BYTE_RATE: usize = 28;
const OFFSET_BITS_PER_SAMPLE: usize = 34;
const OFFSET_DATA_LEN: usize = 40;

/// Parsed WAV header fields.
///
/// Created once from the file buffer and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second of payload.
    pub byte_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Payload length in bytes, as declared by the header.
    pub data_len: u32,
    /// Byte offset of the payload within the file buffer.
    pub data_offset: usize,
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

impl WavHeader {
    /// Parses the fixed-offset header fields from a file buffer.
    ///
    /// # Returns
    /// The header, or [`ConvertError::TruncatedContainer`] for a buffer
    /// shorter than [`HEADER_LEN`], or [`ConvertError::MalformedContainer`]
    /// when the `WAVE` marker is missing.
    pub fn parse(bytes: &[u8]) -> ConvertResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(ConvertError::TruncatedContainer { len: bytes.len() });
        }
        if &bytes[OFFSET_FORMAT..OFFSET_FORMAT + 4] != FORMAT_MARKER {
            return Err(ConvertError::MalformedContainer);
        }

        Ok(Self {
            channels: read_u16(bytes, OFFSET_CHANNELS),
            sample_rate: read_u32(bytes, OFFSET_SAMPLE_RATE),
            byte_rate: read_u32(bytes, OFFSET_BYTE_RATE),
            bits_per_sample: read_u16(bytes, OFFSET_BITS_PER_SAMPLE),
            data_len: read_u32(bytes, OFFSET_DATA_LEN),
            data_offset: HEADER_LEN,
        })
    }

    /// Checks the fixed input contract: mono, 22050 Hz, 16-bit.
    ///
    /// The contract is fixed because the output period constant is derived
    /// from a single target sample rate and a single hardware clock.
    pub fn validate(&self) -> ConvertResult<()> {
        if self.channels != REQUIRED_CHANNELS
            || self.sample_rate != REQUIRED_SAMPLE_RATE
            || self.bits_per_sample != REQUIRED_BITS_PER_SAMPLE
        {
            return Err(ConvertError::UnsupportedFormat {
                channels: self.channels,
                sample_rate: self.sample_rate,
                bits_per_sample: self.bits_per_sample,
            });
        }
        Ok(())
    }

    /// Returns the payload byte slice, borrowed from the file buffer.
    ///
    /// Fails with [`ConvertError::TruncatedContainer`] when the declared
    /// payload length overruns the buffer.
    pub fn payload<'a>(&self, bytes: &'a [u8]) -> ConvertResult<&'a [u8]> {
        let end = self.data_offset + self.data_len as usize;
        if end > bytes.len() {
            return Err(ConvertError::TruncatedContainer { len: bytes.len() });
        }
        Ok(&bytes[self.data_offset..end])
    }
}

/// Decodes a payload slice as signed 16-bit little-endian samples.
///
/// A trailing odd byte is ignored: the payload is consumed as complete
/// two-byte frames only.
pub fn samples(payload: &[u8]) -> impl Iterator<Item = i16> + '_ {
    payload
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
}
