//! Utility functions.
//!
//! Fixed-point helpers and range mapping shared by the oscillator, the
//! envelope and the control path.

pub mod fix15;

use fix15::Fix15;

/// Full-scale reading of a 12-bit ADC.
pub const ADC_MAX: i32 = 4095;

/// Linearly maps `x` from `in_min..=in_max` to `out_min..=out_max`.
///
/// Returns `out_min` if the input range is empty.
#[inline]
pub fn scale(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }

    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Maps a 12-bit knob reading to a shape parameter between `0.1` and `0.9`.
///
/// The outer tenths are left out so the knob never reaches the dull and the
/// harsh extremes.
#[inline]
pub fn knob_to_shape(reading: u16) -> Fix15 {
    let reading = (reading as i32).min(ADC_MAX);
    let thousandths = scale(reading, 0, ADC_MAX, 100, 900);

    fix15::div(fix15::from_int(thousandths), fix15::from_int(1000))
}

/// Checks a raw DAC code against `0..=max`. Out-of-range codes yield `None`
/// and are meant to be dropped, not written.
#[inline]
pub fn dac_code(code: i32, max: u16) -> Option<u16> {
    u16::try_from(code).ok().filter(|code| *code <= max)
}
