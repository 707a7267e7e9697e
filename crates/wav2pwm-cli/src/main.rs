//! wav2pwm - WAV to PWM/PIO duty-cycle table converter
//!
//! Converts a mono 16-bit 22050 Hz WAV file into a C header containing a
//! mark/space duty-cycle table, ready for DMA playback on an RP2040 PIO
//! state machine or PWM slice.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

// Use modules from the library crate
use wav2pwm_cli::commands;
use wav2pwm_core::OutputMode;

/// wav2pwm - Duty-Cycle Table Generator for RP2040 Audio
#[derive(Parser)]
#[command(name = "wav2pwm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Hardware audio option to produce output for
    #[arg(value_enum, ignore_case = true)]
    target: HardwareTarget,

    /// Path and filename of the input WAV file
    input: PathBuf,

    /// Output file path (default: input with extension replaced by .h)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Output a machine-readable JSON report instead of text
    #[arg(long)]
    json: bool,
}

/// Hardware target for the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HardwareTarget {
    /// Mark/space complement pairs for a PIO state machine
    #[value(name = "PIO")]
    Pio,
    /// Identical left/right duty-cycle values for PWM slices
    #[value(name = "PWM")]
    Pwm,
}

impl From<HardwareTarget> for OutputMode {
    fn from(target: HardwareTarget) -> Self {
        match target {
            HardwareTarget::Pio => OutputMode::DualPhase,
            HardwareTarget::Pwm => OutputMode::DualChannel,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::convert::run(
        cli.target.into(),
        &cli.input,
        cli.out.as_deref(),
        cli.json,
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
