//! C header table rendering.
//!
//! The output artifact is a C include file holding one
//! `const unsigned short` array: a two-word length prologue, the fade-in
//! ramp, one pair per payload sample, the fade-out ramp, and a terminating
//! zero pair the player treats as the idle sentinel. Values are uppercase
//! unpadded hex; the prologue words are zero-padded to four digits. Line
//! wrapping is purely cosmetic and matches the reference converter.

use std::io::{self, Write};

use crate::fade::{fade_in_levels, fade_out_levels, FADE_LEN};
use crate::quantize::{quantize, PWM_PERIOD};

/// Hardware drive style for the emitted value pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Single-wire PIO drive: each entry is a mark count and its complement.
    DualPhase,
    /// PWM slice drive: both entries carry the same duty-cycle count.
    DualChannel,
}

impl OutputMode {
    fn comment(self) -> &'static str {
        match self {
            OutputMode::DualPhase => "// Data intended for PIO SM hardware option.",
            OutputMode::DualChannel => "// Data intended for PWM hardware option.",
        }
    }
}

/// Derives a C identifier from an input file stem.
///
/// Every non-alphanumeric character becomes `_`, and a leading digit gets a
/// `_` prefix so the include guard and array name stay valid C.
pub fn sanitize_symbol(stem: &str) -> String {
    let mut symbol = String::with_capacity(stem.len() + 1);
    if stem.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        symbol.push('_');
    }
    for c in stem.chars() {
        symbol.push(if c.is_ascii_alphanumeric() { c } else { '_' });
    }
    symbol
}

/// Element count written in the table prologue: the length prefix itself,
/// one element per payload sample, and both fade ramps' pairs.
pub fn total_elements(sample_count: usize) -> u32 {
    (1 + sample_count + 4 * FADE_LEN) as u32
}

/// Renders the complete table for `samples` into `out`.
///
/// Emission order: include guard and mode comment, length prologue, fade-in
/// ramp, payload pairs, fade-out ramp, zero/zero terminator, guard closure.
/// Fade-in pairs put the accumulator in the second position, fade-out pairs
/// in the first; the swap mirrors the reference converter and is kept for
/// player compatibility.
pub fn encode_table<W: Write>(
    out: &mut W,
    symbol: &str,
    mode: OutputMode,
    samples: &[i16],
) -> io::Result<()> {
    let total = total_elements(samples.len());

    writeln!(out, "#ifndef __{symbol}_WAV_H")?;
    writeln!(out, "#define __{symbol}_WAV_H")?;
    writeln!(out, "{}", mode.comment())?;
    writeln!(out, "const unsigned short {symbol}_WAV[]=")?;
    writeln!(out, "{{ 0x{:04X},0x{:04X},", total & 0xFFFF, total >> 16)?;

    // Entry ramp toward the first sample's duty cycle. Degenerate empty
    // payloads ramp to the minimum legal count instead.
    let first = samples.first().copied().map(quantize).unwrap_or(1);
    for (i, &space) in fade_in_levels(first).iter().enumerate() {
        let mark = PWM_PERIOD - space;
        match mode {
            OutputMode::DualPhase => write!(out, "0x{mark:X},0x{space:X},")?,
            OutputMode::DualChannel => write!(out, "0x{mark:X},0x{mark:X},")?,
        }
        if (i + 2) % 6 == 0 {
            writeln!(out)?;
        }
    }
    write!(out, "\n\n")?;

    let mut last = first;
    for (i, value) in samples.iter().map(|&s| quantize(s)).enumerate() {
        let space = PWM_PERIOD - value;
        match mode {
            OutputMode::DualPhase => write!(out, "0x{value:X},0x{space:X},")?,
            OutputMode::DualChannel => write!(out, "0x{value:X},0x{value:X},")?,
        }
        if (2 * i + 2) % 12 == 0 {
            writeln!(out)?;
        }
        last = value;
    }
    write!(out, "\n\n")?;

    // Exit ramp from the last sample's duty cycle down to idle.
    for (i, &mark) in fade_out_levels(last).iter().enumerate() {
        let space = PWM_PERIOD - mark;
        match mode {
            OutputMode::DualPhase => write!(out, "0x{mark:X},0x{space:X},")?,
            OutputMode::DualChannel => write!(out, "0x{mark:X},0x{mark:X},")?,
        }
        if (i + 2) % 6 == 0 {
            writeln!(out)?;
        }
    }

    write!(out, "\n\n0x00,0x00\n}};\n#endif\n")?;
    Ok(())
}
