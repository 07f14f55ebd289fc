//! Synthesizer configuration.

use core::time::Duration;

use thiserror::Error;

/// Widest DAC supported. Output codes are handed out as `u16`.
pub const MAX_DAC_BIT_DEPTH: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("sample rate must be non-zero")]
    ZeroSampleRate,

    #[error("unsupported DAC bit depth {0}, expected 1 to 16")]
    DacBitDepth(u8),
}

/// What happens to a sounding note when its key is released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NoteOffPolicy {
    /// Output stops on the next tick.
    #[default]
    Gate,

    /// The envelope ramps back to zero at the release rate, then output stops.
    Release,
}

/// Fixed parameters of the synthesizer, set once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthConfig {
    /// Rate of the sample tick in Hz. Default is `40000`.
    pub sample_rate: u32,

    /// Resolution of the output DAC in bits. Default is `12`.
    pub dac_bit_depth: u8,

    /// Send note frequencies in tenths of a hertz where they fit. Default is
    /// `true`.
    pub fine_tuning: bool,

    /// Compensate the loudness change caused by the shape parameter. Default
    /// is `false`.
    pub normalize: bool,

    /// Note-off behaviour. Default is [`NoteOffPolicy::Gate`].
    pub note_off: NoteOffPolicy,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: 40000,
            dac_bit_depth: 12,
            fine_tuning: true,
            normalize: false,
            note_off: NoteOffPolicy::Gate,
        }
    }
}

impl SynthConfig {
    /// Creates a validated configuration with defaults for everything but
    /// the sample rate and DAC depth.
    pub fn new(sample_rate: u32, dac_bit_depth: u8) -> Result<Self, ConfigError> {
        let config = Self {
            sample_rate,
            dac_bit_depth,
            ..Self::default()
        };
        config.validate()?;

        Ok(config)
    }

    pub fn with_fine_tuning(mut self, fine_tuning: bool) -> Self {
        self.fine_tuning = fine_tuning;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_note_off(mut self, note_off: NoteOffPolicy) -> Self {
        self.note_off = note_off;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }

        if self.dac_bit_depth == 0 || self.dac_bit_depth > MAX_DAC_BIT_DEPTH {
            return Err(ConfigError::DacBitDepth(self.dac_bit_depth));
        }

        Ok(())
    }

    /// Largest code the DAC accepts.
    #[inline]
    pub fn dac_max(&self) -> u16 {
        let bits = self.dac_bit_depth.clamp(1, MAX_DAC_BIT_DEPTH);
        ((1u32 << bits) - 1) as u16
    }

    /// Interval between two sample ticks. Every tick has to finish within it.
    pub fn sample_period(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.sample_rate.max(1) as u64)
    }
}
