//! Discrete summation formula oscillator.
//!
//! Renders Moorer's closed form of an infinite harmonic series whose partials
//! fall off geometrically with the shape parameter `a`:
//!
//! ```text
//!            (1 - a²) · sin(θc)
//! y = ---------------------------
//!       (1 + a²) - 2a · cos(θm)
//! ```
//!
//! `θc` and `θm` come from two 32-bit phase accumulators whose top 8 bits
//! index a 256-entry table. Everything per sample is integer arithmetic, so
//! [`DsfOscillator::next_sample`] is safe to call from a timer interrupt.

// Based on code by rabbiabe (dsf-oscillator-pico)

use crate::config::SynthConfig;
use crate::resources::normalize::{LUT_NORMALIZE, LUT_NORMALIZE_SIZE};
use crate::resources::sine::LUT_SINE_BITS;
use crate::resources::{cosine_table, sine_table, Table};
use crate::utils::fix15::{self, Fix15, ONE, TWO};

/// Largest usable shape parameter, `0.99` in Q15.
///
/// The denominator has a removable singularity at `a = 1`. In Q15 it already
/// truncates to zero a little above `0.994`, so the ceiling sits below that.
pub const PARAM_A_MAX: Fix15 = 32440;

const PHASE_SHIFT: u32 = 32 - LUT_SINE_BITS;

/// Unit of the frequencies passed to the oscillator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Q15 hertz.
    #[default]
    Hertz,

    /// Q15 tenths of a hertz, for finer modulator ratios.
    DeciHertz,
}

impl Resolution {
    #[inline]
    fn divisor(self) -> u64 {
        match self {
            Self::Hertz => 1,
            Self::DeciHertz => 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DsfOscillator {
    sample_rate: u32,
    resolution: Resolution,

    carrier_frequency: Fix15,
    modulator_frequency: Fix15,

    // Phase increments per sample.
    carrier_step: u32,
    modulator_step: u32,

    // Phase state, wrapping modulo 2^32.
    carrier_phase: u32,
    modulator_phase: u32,

    sine: &'static Table,
    cosine: &'static Table,

    // Maps the bipolar sample onto the unsigned DAC range.
    half_dac: Fix15,

    normalize: bool,
}

impl DsfOscillator {
    pub fn new(config: &SynthConfig) -> Self {
        let dac_max = config.dac_max() as i32;

        Self {
            sample_rate: config.sample_rate.max(1),
            resolution: Resolution::Hertz,
            carrier_frequency: 0,
            modulator_frequency: 0,
            carrier_step: 0,
            modulator_step: 0,
            carrier_phase: 0,
            modulator_phase: 0,
            sine: sine_table(),
            cosine: cosine_table(),
            half_dac: dac_max << (fix15::FRACTIONAL_BITS - 1),
            normalize: config.normalize,
        }
    }

    pub fn init(&mut self) {
        self.carrier_frequency = 0;
        self.modulator_frequency = 0;
        self.carrier_step = 0;
        self.modulator_step = 0;
        self.reset_phase();
    }

    #[inline]
    pub fn reset_phase(&mut self) {
        self.carrier_phase = 0;
        self.modulator_phase = 0;
    }

    /// Selects the unit of subsequent frequency updates. Steps already set
    /// are kept.
    #[inline]
    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
    }

    /// Sets carrier and modulator frequencies. With `reset` both phases
    /// restart from zero, otherwise they continue where they are.
    pub fn set_frequencies(&mut self, carrier: Fix15, modulator: Fix15, reset: bool) {
        self.carrier_frequency = carrier;
        self.carrier_step = self.phase_step(carrier);
        self.set_modulator_frequency(modulator, reset);
    }

    /// Sets the modulator frequency alone, leaving the carrier untouched.
    pub fn set_modulator_frequency(&mut self, modulator: Fix15, reset: bool) {
        self.modulator_frequency = modulator;
        self.modulator_step = self.phase_step(modulator);

        if reset {
            self.reset_phase();
        }
    }

    #[inline]
    pub fn set_normalize(&mut self, normalize: bool) {
        self.normalize = normalize;
    }

    /// Renders one sample for the shape parameter `param_a` and advances both
    /// phases.
    ///
    /// `param_a` is clamped to `0..=PARAM_A_MAX`. The result is a DAC code
    /// centered on half of full scale. It can leave the DAC range for large
    /// `a` unless normalization is on.
    #[inline]
    pub fn next_sample(&mut self, param_a: Fix15) -> i32 {
        let a = clamp_shape(param_a);
        let a_squared = fix15::mul(a, a);

        let sine = self.sine[(self.carrier_phase >> PHASE_SHIFT) as usize];
        let cosine = self.cosine[(self.modulator_phase >> PHASE_SHIFT) as usize];

        let numerator = fix15::mul(ONE - a_squared, sine);
        let denominator = dsf_denominator(a, cosine);
        let mut sample = fix15::div_wide(numerator as i64, denominator as i64);

        if self.normalize {
            sample = fix15::mul_wide(sample, normalization_gain(a) as i64);
        }

        let half_dac = self.half_dac as i64;
        let code = (fix15::mul_wide(sample, half_dac) + half_dac) >> fix15::FRACTIONAL_BITS;

        self.carrier_phase = self.carrier_phase.wrapping_add(self.carrier_step);
        self.modulator_phase = self.modulator_phase.wrapping_add(self.modulator_step);

        code.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    #[inline]
    fn phase_step(&self, frequency: Fix15) -> u32 {
        phase_step(
            frequency,
            self.sample_rate as u64 * self.resolution.divisor(),
        )
    }

    #[inline]
    pub fn carrier_frequency(&self) -> Fix15 {
        self.carrier_frequency
    }

    #[inline]
    pub fn modulator_frequency(&self) -> Fix15 {
        self.modulator_frequency
    }

    #[inline]
    pub fn carrier_step(&self) -> u32 {
        self.carrier_step
    }

    #[inline]
    pub fn modulator_step(&self) -> u32 {
        self.modulator_step
    }

    #[inline]
    pub fn carrier_phase(&self) -> u32 {
        self.carrier_phase
    }

    #[inline]
    pub fn modulator_phase(&self) -> u32 {
        self.modulator_phase
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[inline]
    pub fn normalize(&self) -> bool {
        self.normalize
    }
}

/// Restricts the shape parameter to `0..=PARAM_A_MAX`.
#[inline]
pub fn clamp_shape(param_a: Fix15) -> Fix15 {
    param_a.clamp(0, PARAM_A_MAX)
}

/// `(1 + a²) - 2a · cos`, strictly positive for every clamped `a`.
#[inline]
pub fn dsf_denominator(a: Fix15, cosine: Fix15) -> Fix15 {
    let a_squared = fix15::mul(a, a);
    (ONE + a_squared) - fix15::mul(fix15::mul(TWO, a), cosine)
}

/// Phase increment for `frequency` (Q15) at `denominator` samples per unit of
/// frequency: `frequency · 2^32 / denominator`.
///
/// Negative frequencies give a zero step. Frequencies at or above the sample
/// rate saturate.
#[inline]
pub fn phase_step(frequency: Fix15, denominator: u64) -> u32 {
    let frequency = frequency.max(0) as u64;
    let step = (frequency << (32 - fix15::FRACTIONAL_BITS)) / denominator.max(1);

    step.min(u32::MAX as u64) as u32
}

/// Gain compensating the peak level of the current shape parameter.
#[inline]
pub fn normalization_gain(a: Fix15) -> Fix15 {
    let bucket = ((clamp_shape(a) as usize) * LUT_NORMALIZE_SIZE) >> fix15::FRACTIONAL_BITS;
    LUT_NORMALIZE[bucket.min(LUT_NORMALIZE_SIZE - 1)]
}
