//! wav2pwm conversion core.
//!
//! This crate turns a mono 16-bit 22050 Hz WAV file into a quantized
//! mark/space duty-cycle table, rendered as a C header holding one
//! `const unsigned short` array. The table can be streamed straight to an
//! RP2040 PIO state machine or PWM slice via DMA with no runtime
//! computation.
//!
//! # Overview
//!
//! The pipeline is a single linear pass:
//!
//! 1. [`wav`] - fixed-offset container parsing and format validation
//! 2. [`quantize`] - per-sample mapping to a duty-cycle count in
//!    `[1, PWM_PERIOD]`
//! 3. [`fade`] - linear entry/exit ramps so playback never jumps between
//!    the idle line level and a loud sample
//! 4. [`encode`] - textual table rendering with a length prologue and a
//!    zero/zero terminator pair
//!
//! # Determinism
//!
//! Conversion is pure: the same input bytes and output mode always produce
//! byte-identical tables. All validation happens before any output is
//! rendered, so a rejected input leaves no artifact behind.
//!
//! # Example
//!
//! ```ignore
//! use wav2pwm_core::{convert, OutputMode};
//!
//! let bytes = std::fs::read("alarm.wav")?;
//! let conversion = convert(&bytes, OutputMode::DualPhase, "ALARM")?;
//! std::fs::write("alarm.h", &conversion.table)?;
//! println!("{} elements", conversion.summary.total_elements);
//! ```

pub mod convert;
pub mod encode;
pub mod error;
pub mod fade;
pub mod quantize;
pub mod wav;

// Re-export main types at crate root
pub use convert::{convert, Conversion, ConversionSummary};
pub use encode::{sanitize_symbol, total_elements, OutputMode};
pub use error::{ConvertError, ConvertResult};
pub use fade::FADE_LEN;
pub use quantize::{quantize, PWM_PERIOD};
