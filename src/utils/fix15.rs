//! Signed fixed-point arithmetic with 15 fractional bits.
//!
//! Values are stored in a plain `i32`, so `1.0` is `32768`. Products and
//! quotients go through 64-bit intermediates and are truncated back, which
//! keeps everything usable on cores without an FPU.

// Based on code by rabbiabe (dsf-oscillator-pico)

pub type Fix15 = i32;

pub const FRACTIONAL_BITS: u32 = 15;

pub const ZERO: Fix15 = 0;
pub const ONE: Fix15 = 1 << FRACTIONAL_BITS;
pub const HALF: Fix15 = ONE >> 1;
pub const TWO: Fix15 = ONE << 1;
pub const TEN: Fix15 = 10 << FRACTIONAL_BITS;

#[inline]
pub const fn mul(a: Fix15, b: Fix15) -> Fix15 {
    ((a as i64 * b as i64) >> FRACTIONAL_BITS) as Fix15
}

/// Product of two wide fixed-point values. Used where intermediates may
/// exceed the 32-bit range.
#[inline]
pub const fn mul_wide(a: i64, b: i64) -> i64 {
    (a * b) >> FRACTIONAL_BITS
}

/// Quotient `a / b`. The caller guarantees `b != 0`.
#[inline]
pub const fn div(a: Fix15, b: Fix15) -> Fix15 {
    (((a as i64) << FRACTIONAL_BITS) / b as i64) as Fix15
}

/// Quotient `a / b` without narrowing the result. The caller guarantees
/// `b != 0`.
#[inline]
pub const fn div_wide(a: i64, b: i64) -> i64 {
    (a << FRACTIONAL_BITS) / b
}

#[inline]
pub const fn from_int(value: i32) -> Fix15 {
    value << FRACTIONAL_BITS
}

#[inline]
pub const fn to_int(value: Fix15) -> i32 {
    value >> FRACTIONAL_BITS
}

/// Converts from floating point, truncating towards zero.
///
/// Meant for table construction and the control path only.
#[inline]
pub fn from_float(value: f32) -> Fix15 {
    (value * ONE as f32) as Fix15
}

#[inline]
pub fn to_float(value: Fix15) -> f32 {
    value as f32 / ONE as f32
}
