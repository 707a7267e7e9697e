//! Sample quantization to hardware duty-cycle counts.

use crate::wav::REQUIRED_SAMPLE_RATE;

/// RP2040 system clock frequency in Hz.
pub const SYSTEM_CLOCK_HZ: u32 = 125_000_000;

/// One sample period in system-clock ticks: 5668 at 22050 Hz.
///
/// Derived once from the clock and the single supported sample rate; every
/// duty-cycle count in the table sums with its complement to this value.
pub const PWM_PERIOD: u16 = (SYSTEM_CLOCK_HZ / REQUIRED_SAMPLE_RATE) as u16;

/// Maps a signed 16-bit sample to a duty-cycle count in `[1, PWM_PERIOD)`.
///
/// The sample is shifted by +32768 into `[0, 65535]`, then scaled by
/// `PWM_PERIOD / 65536` with truncating integer division. A scaled result
/// of 0 is forced to 1: the zero pair is reserved as the idle/terminator
/// sentinel for the consuming hardware, so no sample may encode as 0.
///
/// Stateless and pure; the same sample always maps to the same count.
pub fn quantize(sample: i16) -> u16 {
    let shifted = (i32::from(sample) + 32768) as u32;
    let count = (u32::from(PWM_PERIOD) * shifted / 65536) as u16;
    if count == 0 {
        1
    } else {
        count
    }
}
