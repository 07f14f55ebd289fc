//! Envelope driving the shape parameter of the DSF oscillator.
//!
//! A linear attack/decay/sustain ramp advanced once per sample tick. Rates
//! are sub-sampling factors: with a rate of `n` the level moves by one step
//! every `n` ticks. They are read again on every tick, so a knob turned mid
//! ramp takes effect immediately without rescaling the ticks already counted.

// Based on code by rabbiabe (dsf-oscillator-pico)

use crate::utils::fix15::{Fix15, ONE};

/// Level increment per active tick.
pub const ENVELOPE_STEP: Fix15 = 32;

/// Peak level, `1.0` in Q15.
pub const ENVELOPE_MAX: Fix15 = ONE;

/// Ticks from zero to peak at an attack rate of `1`.
pub const ATTACK_TICKS: u32 = (ENVELOPE_MAX / ENVELOPE_STEP) as u32;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeMode {
    #[default]
    Attack,
    Decay,
    Sustain,
    Release,
}

/// Live envelope controls, re-read on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeParameters {
    /// Ticks per attack step. `0` is treated as `1`.
    pub attack_rate: u16,

    /// Ticks per decay step. `0` is treated as `1`.
    pub decay_rate: u16,

    /// Ticks per release step. `0` is treated as `1`.
    pub release_rate: u16,

    /// Level held after the decay, clamped to `0..=ENVELOPE_MAX`.
    pub sustain_level: Fix15,

    /// Output the level itself instead of its complement.
    pub invert: bool,
}

impl Default for EnvelopeParameters {
    fn default() -> Self {
        Self {
            attack_rate: 1,
            decay_rate: 1,
            release_rate: 1,
            sustain_level: ONE / 2,
            invert: false,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Envelope {
    mode: EnvelopeMode,
    level: Fix15,
    step_counter: u32,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.mode = EnvelopeMode::Attack;
        self.level = 0;
        self.step_counter = 0;
    }

    /// Restarts the attack from zero.
    pub fn trigger(&mut self) {
        self.init();
    }

    /// Starts ramping back to zero from the current level.
    pub fn release(&mut self) {
        self.mode = EnvelopeMode::Release;
        self.step_counter = 0;
    }

    /// Advances one tick and returns the shape parameter.
    #[inline]
    pub fn process(&mut self, parameters: &EnvelopeParameters) -> Fix15 {
        let sustain_level = parameters.sustain_level.clamp(0, ENVELOPE_MAX);

        match self.mode {
            EnvelopeMode::Attack => {
                if self.advance(parameters.attack_rate) {
                    self.level = (self.level + ENVELOPE_STEP).min(ENVELOPE_MAX);
                }
                if self.level >= ENVELOPE_MAX {
                    self.enter(EnvelopeMode::Decay);
                }
            }
            EnvelopeMode::Decay => {
                if self.advance(parameters.decay_rate) {
                    self.level -= ENVELOPE_STEP;
                }
                if self.level <= sustain_level {
                    self.level = sustain_level;
                    self.enter(EnvelopeMode::Sustain);
                }
            }
            EnvelopeMode::Sustain => {
                self.level = sustain_level;
            }
            EnvelopeMode::Release => {
                if self.level > 0 && self.advance(parameters.release_rate) {
                    self.level = (self.level - ENVELOPE_STEP).max(0);
                }
            }
        }

        self.shape(parameters.invert)
    }

    /// Shape parameter for the current level.
    #[inline]
    pub fn shape(&self, invert: bool) -> Fix15 {
        if invert {
            self.level
        } else {
            ENVELOPE_MAX - self.level
        }
    }

    #[inline]
    pub fn mode(&self) -> EnvelopeMode {
        self.mode
    }

    #[inline]
    pub fn level(&self) -> Fix15 {
        self.level
    }

    /// True once a release has run down to zero.
    #[inline]
    pub fn done(&self) -> bool {
        self.mode == EnvelopeMode::Release && self.level == 0
    }

    // Counts a tick, true on every `rate`-th one starting with the first.
    #[inline]
    fn advance(&mut self, rate: u16) -> bool {
        let due = self.step_counter % rate.max(1) as u32 == 0;
        self.step_counter = self.step_counter.wrapping_add(1);
        due
    }

    #[inline]
    fn enter(&mut self, mode: EnvelopeMode) {
        self.mode = mode;
        self.step_counter = 0;
    }
}
