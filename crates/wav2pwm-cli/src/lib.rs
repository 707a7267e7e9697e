//! wav2pwm CLI library.
//!
//! This crate provides the command implementations behind the `wav2pwm`
//! binary: loading the input WAV, running the conversion pipeline from
//! `wav2pwm-core`, and writing the generated C header.

pub mod commands;
