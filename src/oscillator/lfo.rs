//! Sine LFO for sweeping the shape parameter.
//!
//! Runs off the same phase accumulator scheme as the main oscillator, so it
//! can be advanced from the sample tick at no extra cost.

use crate::resources::sine::LUT_SINE_BITS;
use crate::resources::{sine_table, Table};
use crate::utils::fix15::{self, Fix15};

/// Slowest supported rate, in millihertz.
pub const LFO_RATE_MIN: u32 = 100;

/// Fastest supported rate, in millihertz.
pub const LFO_RATE_MAX: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct Lfo {
    tick_rate: u32,
    phase: u32,
    step: u32,
    table: &'static Table,
}

impl Lfo {
    /// Creates an LFO advanced `tick_rate` times per second.
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_rate: tick_rate.max(1),
            phase: 0,
            step: 0,
            table: sine_table(),
        }
    }

    pub fn init(&mut self) {
        self.phase = 0;
        self.step = 0;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.phase = 0;
    }

    /// Sets the rate in millihertz, clamped to `LFO_RATE_MIN..=LFO_RATE_MAX`.
    pub fn set_rate(&mut self, millihertz: u32) {
        let millihertz = millihertz.clamp(LFO_RATE_MIN, LFO_RATE_MAX) as u64;
        let step = (millihertz << 32) / (self.tick_rate as u64 * 1000);
        self.step = step.min(u32::MAX as u64) as u32;
    }

    /// Advances one tick and returns the current value scaled by `depth`.
    #[inline]
    pub fn process(&mut self, depth: Fix15) -> Fix15 {
        self.phase = self.phase.wrapping_add(self.step);
        fix15::mul(self.table[(self.phase >> (32 - LUT_SINE_BITS)) as usize], depth)
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }
}
