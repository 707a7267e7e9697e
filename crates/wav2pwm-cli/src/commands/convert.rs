//! Convert command implementation
//!
//! Loads a WAV file, runs the conversion pipeline, and writes the generated
//! C header next to the input (or at an explicit output path). The table is
//! rendered fully in memory before the output file is created, so a failed
//! run leaves nothing behind.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wav2pwm_core::{convert, sanitize_symbol, ConversionSummary, OutputMode};

/// Machine-readable conversion report for `--json` output.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    target: &'a str,
    input: String,
    output: String,
    #[serde(flatten)]
    summary: &'a ConversionSummary,
}

fn target_name(mode: OutputMode) -> &'static str {
    match mode {
        OutputMode::DualPhase => "PIO",
        OutputMode::DualChannel => "PWM",
    }
}

/// Run the convert command
///
/// # Arguments
/// * `mode` - Hardware drive style selected on the command line
/// * `input` - Path to the input WAV file
/// * `out` - Output path override (default: input with extension `.h`)
/// * `json` - Print a machine-readable report instead of text
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(mode: OutputMode, input: &Path, out: Option<&Path>, json: bool) -> Result<ExitCode> {
    let bytes = std::fs::read(input)
        .with_context(|| format!("failed to read input file: {}", input.display()))?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("input path has no usable file name: {}", input.display()))?;
    let symbol = sanitize_symbol(stem);

    let output = out
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("h"));

    let conversion = convert(&bytes, mode, &symbol).map_err(|e| {
        eprintln!("{} {}: {}", "error:".red().bold(), input.display(), e);
        anyhow::anyhow!("{}", e)
    })?;

    std::fs::write(&output, &conversion.table)
        .with_context(|| format!("failed to write output file: {}", output.display()))?;

    let target = target_name(mode);
    if json {
        let report = JsonReport {
            target,
            input: input.display().to_string(),
            output: output.display().to_string(),
            summary: &conversion.summary,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    } else {
        let summary = &conversion.summary;
        println!("Output Format: {target}");
        println!("File: {}", input.display());
        println!("Channels: {}", summary.channels);
        println!("Sample Rate: {}", summary.sample_rate);
        println!("Byte Rate: {}", summary.byte_rate);
        println!("Bits Per Sample: {}", summary.bits_per_sample);
        println!("Data Size: {}", summary.data_len);
        println!("Samples: {}", summary.sample_count);
        println!("Output file: {}", output.display());
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a canonical WAV buffer around the given samples.
    fn wav_fixture(channels: u16, sample_rate: u32, bits: u16, samples: &[i16]) -> Vec<u8> {
        let mut pcm = Vec::with_capacity(samples.len() * 2);
        for &sample in samples {
            pcm.extend_from_slice(&sample.to_le_bytes());
        }

        let data_len = pcm.len() as u32;
        let block_align = channels * (bits / 8);
        let byte_rate = sample_rate * block_align as u32;

        let mut buf = Vec::with_capacity(44 + pcm.len());
        buf.extend_from_slice(b"RIFF");
        buf.extend_from_slice(&(36 + data_len).to_le_bytes());
        buf.extend_from_slice(b"WAVE");
        buf.extend_from_slice(b"fmt ");
        buf.extend_from_slice(&16u32.to_le_bytes());
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&channels.to_le_bytes());
        buf.extend_from_slice(&sample_rate.to_le_bytes());
        buf.extend_from_slice(&byte_rate.to_le_bytes());
        buf.extend_from_slice(&block_align.to_le_bytes());
        buf.extend_from_slice(&bits.to_le_bytes());
        buf.extend_from_slice(b"data");
        buf.extend_from_slice(&data_len.to_le_bytes());
        buf.extend_from_slice(&pcm);
        buf
    }

    #[test]
    fn convert_writes_header_next_to_input() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("beep.wav");
        std::fs::write(&input, wav_fixture(1, 22050, 16, &[0; 32])).unwrap();

        let code = run(OutputMode::DualPhase, &input, None, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let header = std::fs::read_to_string(tmp.path().join("beep.h")).unwrap();
        assert!(header.starts_with("#ifndef __beep_WAV_H"));
        assert!(header.contains("// Data intended for PIO SM hardware option."));
    }

    #[test]
    fn convert_honors_output_override() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("tone.wav");
        let output = tmp.path().join("sounds").join("tone_table.h");
        std::fs::create_dir(tmp.path().join("sounds")).unwrap();
        std::fs::write(&input, wav_fixture(1, 22050, 16, &[100; 8])).unwrap();

        run(OutputMode::DualChannel, &input, Some(&output), false).unwrap();

        assert!(output.exists());
        assert!(!tmp.path().join("tone.h").exists());
    }

    #[test]
    fn convert_sanitizes_symbol_from_stem() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("alarm-01.wav");
        std::fs::write(&input, wav_fixture(1, 22050, 16, &[0; 4])).unwrap();

        run(OutputMode::DualPhase, &input, None, false).unwrap();

        let header = std::fs::read_to_string(tmp.path().join("alarm-01.h")).unwrap();
        assert!(header.contains("const unsigned short alarm_01_WAV[]="));
    }

    #[test]
    fn convert_rejects_malformed_input_without_output() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("junk.wav");
        let mut bytes = wav_fixture(1, 22050, 16, &[0; 4]);
        bytes[8..12].copy_from_slice(b"JUNK");
        std::fs::write(&input, bytes).unwrap();

        assert!(run(OutputMode::DualPhase, &input, None, false).is_err());
        assert!(!tmp.path().join("junk.h").exists());
    }

    #[test]
    fn convert_rejects_stereo_input_without_output() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("stereo.wav");
        std::fs::write(&input, wav_fixture(2, 22050, 16, &[0; 8])).unwrap();

        assert!(run(OutputMode::DualPhase, &input, None, false).is_err());
        assert!(!tmp.path().join("stereo.h").exists());
    }

    #[test]
    fn convert_fails_on_missing_input() {
        let result = run(
            OutputMode::DualPhase,
            Path::new("/nonexistent/missing.wav"),
            None,
            false,
        );
        assert!(result.is_err());
    }
}
