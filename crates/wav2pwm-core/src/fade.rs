//! Fade ramp synthesis.
//!
//! The hardware idles with the output line at true zero, while a silent
//! sample sits at a 50%-on duty cycle. Jumping between those two levels
//! produces an audible click, so the table opens and closes with a short
//! linear ramp bridging the idle level and the first/last real sample.

use crate::quantize::PWM_PERIOD;

/// Number of steps in each fade ramp.
pub const FADE_LEN: usize = (PWM_PERIOD / 10) as usize;

/// Space-level sequence for the fade-in ramp.
///
/// The accumulator starts at the full period and steps down by
/// `target / FADE_LEN`, emitting before each decrement, so the mark level
/// ramps from 0 up to `target`, the first payload sample's duty cycle.
/// Single-precision accumulation keeps truncation drift invisible over the
/// ramp length. Sequential by construction.
pub fn fade_in_levels(target: u16) -> Vec<u16> {
    let step = f32::from(target) / FADE_LEN as f32;
    let mut level = f32::from(PWM_PERIOD);
    let mut out = Vec::with_capacity(FADE_LEN);
    for _ in 0..FADE_LEN {
        out.push(level as u16);
        level -= step;
    }
    out
}

/// Mark-level sequence for the fade-out ramp.
///
/// The accumulator starts at the last payload sample's duty cycle and steps
/// down toward 0, decrementing before each emit. The emit order matches the
/// reference table layout bit for bit.
pub fn fade_out_levels(from: u16) -> Vec<u16> {
    let step = f32::from(from) / FADE_LEN as f32;
    let mut level = f32::from(from);
    let mut out = Vec::with_capacity(FADE_LEN);
    for _ in 0..FADE_LEN {
        level -= step;
        out.push(level as u16);
    }
    out
}
