//! One-pass conversion pipeline.

use serde::Serialize;

use crate::encode::{encode_table, total_elements, OutputMode};
use crate::error::ConvertResult;
use crate::wav::{self, WavHeader};

/// Everything a caller needs to report a completed conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    /// Channel count from the container header.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second of payload.
    pub byte_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Payload length in bytes.
    pub data_len: u32,
    /// Payload length in samples.
    pub sample_count: usize,
    /// Element count written in the table prologue.
    pub total_elements: u32,
}

/// A rendered table plus its reporting summary.
#[derive(Debug)]
pub struct Conversion {
    /// The complete C header, ready to be written as a single artifact.
    pub table: Vec<u8>,
    /// Header fields and element counts for reporting.
    pub summary: ConversionSummary,
}

/// Runs the whole pipeline over a loaded WAV file buffer.
///
/// Parse and validate first, then quantize, synthesize the fade ramps, and
/// render the table. The table is assembled in memory, so a failing run
/// never leaves a partial artifact behind.
///
/// # Arguments
/// * `bytes` - The entire input file
/// * `mode` - Hardware drive style for the emitted pairs
/// * `symbol` - Sanitized C identifier keying the include guard and array
pub fn convert(bytes: &[u8], mode: OutputMode, symbol: &str) -> ConvertResult<Conversion> {
    let header = WavHeader::parse(bytes)?;
    header.validate()?;
    let payload = header.payload(bytes)?;
    let samples: Vec<i16> = wav::samples(payload).collect();

    // Roughly 12 bytes per rendered pair.
    let mut table = Vec::with_capacity(total_elements(samples.len()) as usize * 12);
    encode_table(&mut table, symbol, mode, &samples).expect("writing to Vec should not fail");

    Ok(Conversion {
        table,
        summary: ConversionSummary {
            channels: header.channels,
            sample_rate: header.sample_rate,
            byte_rate: header.byte_rate,
            bits_per_sample: header.bits_per_sample,
            data_len: header.data_len,
            sample_count: samples.len(),
            total_elements: total_elements(samples.len()),
        },
    })
}
