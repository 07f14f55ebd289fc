//! State shared between the control context and the sample tick.
//!
//! [`SynthControls`] is written only by the control side (MIDI handling,
//! knobs, buttons) and read only by the tick, which makes it a lock-free
//! single-producer/single-consumer channel built from plain atomics. A note-on
//! publishes frequencies first, then bumps the note generation and finally
//! raises the gate, all with release ordering. The tick loads the gate and the
//! generation with acquire ordering, so a gate it sees raised never comes with
//! half-written frequencies.
//!
//! All methods take `&self`, so a single instance can live in a `static`.

use core::sync::atomic::{AtomicBool, AtomicI32, AtomicU16, AtomicU32, AtomicU8, Ordering};

use crate::envelope::EnvelopeParameters;
use crate::oscillator::dsf_oscillator::Resolution;
use crate::utils::fix15::{Fix15, ONE};

/// Where the tick takes the shape parameter from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSource {
    /// The manual shape value, typically a knob.
    #[default]
    Manual,

    /// The envelope generator.
    Envelope,
}

impl ShapeSource {
    const fn to_u8(self) -> u8 {
        match self {
            Self::Manual => 0,
            Self::Envelope => 1,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Envelope,
            _ => Self::Manual,
        }
    }
}

/// The most recent note message.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoteState {
    pub active: bool,
    pub command: u8,
    pub note: u8,
    pub velocity: u8,
}

/// A frequency update as seen by the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyCommand {
    pub carrier: Fix15,
    pub modulator: Fix15,
    pub resolution: Resolution,
    pub reset: bool,
}

#[derive(Debug)]
pub struct SynthControls {
    // Note gate, plus counters bumped on every note-on and every retune.
    active: AtomicBool,
    note_generation: AtomicU32,
    tune_generation: AtomicU32,

    command: AtomicU8,
    note: AtomicU8,
    velocity: AtomicU8,

    carrier: AtomicI32,
    modulator: AtomicI32,
    fine: AtomicBool,
    reset: AtomicBool,

    // Shape parameter.
    shape_source: AtomicU8,
    shape: AtomicI32,
    normalize: AtomicBool,
    normalize_generation: AtomicU32,

    // Envelope.
    attack_rate: AtomicU16,
    decay_rate: AtomicU16,
    release_rate: AtomicU16,
    sustain_level: AtomicI32,
    invert: AtomicBool,

    // LFO on the shape parameter.
    lfo_enabled: AtomicBool,
    lfo_rate: AtomicU32,
    lfo_depth: AtomicI32,
}

impl Default for SynthControls {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthControls {
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            note_generation: AtomicU32::new(0),
            tune_generation: AtomicU32::new(0),
            command: AtomicU8::new(0),
            note: AtomicU8::new(0),
            velocity: AtomicU8::new(0),
            carrier: AtomicI32::new(0),
            modulator: AtomicI32::new(0),
            fine: AtomicBool::new(false),
            reset: AtomicBool::new(true),
            shape_source: AtomicU8::new(ShapeSource::Manual.to_u8()),
            shape: AtomicI32::new(ONE / 2),
            normalize: AtomicBool::new(false),
            normalize_generation: AtomicU32::new(0),
            attack_rate: AtomicU16::new(1),
            decay_rate: AtomicU16::new(1),
            release_rate: AtomicU16::new(1),
            sustain_level: AtomicI32::new(ONE / 2),
            invert: AtomicBool::new(false),
            lfo_enabled: AtomicBool::new(false),
            lfo_rate: AtomicU32::new(1000),
            lfo_depth: AtomicI32::new(ONE / 10),
        }
    }

    // Control side.

    /// Publishes a note-on. The gate is raised last.
    pub fn note_on(&self, note: u8, velocity: u8, frequencies: FrequencyCommand) {
        self.command.store(0x90, Ordering::Relaxed);
        self.note.store(note, Ordering::Relaxed);
        self.velocity.store(velocity, Ordering::Relaxed);
        self.store_frequencies(&frequencies);
        self.note_generation.fetch_add(1, Ordering::Release);
        self.active.store(true, Ordering::Release);
    }

    /// Lowers the gate if `note` is the sounding note. Returns whether it was.
    pub fn note_off(&self, note: u8, velocity: u8) -> bool {
        if !self.active.load(Ordering::Relaxed) || self.note.load(Ordering::Relaxed) != note {
            return false;
        }

        self.command.store(0x80, Ordering::Relaxed);
        self.velocity.store(velocity, Ordering::Relaxed);
        self.active.store(false, Ordering::Release);

        true
    }

    /// Retunes the sounding note without retriggering it. Phases continue
    /// and the reset flag of `frequencies` is ignored.
    pub fn retune(&self, frequencies: &FrequencyCommand) {
        self.carrier.store(frequencies.carrier, Ordering::Relaxed);
        self.modulator.store(frequencies.modulator, Ordering::Relaxed);
        self.fine.store(
            frequencies.resolution == Resolution::DeciHertz,
            Ordering::Relaxed,
        );
        self.tune_generation.fetch_add(1, Ordering::Release);
    }

    pub fn set_shape_source(&self, source: ShapeSource) {
        self.shape_source.store(source.to_u8(), Ordering::Relaxed);
    }

    pub fn set_shape(&self, shape: Fix15) {
        self.shape.store(shape, Ordering::Relaxed);
    }

    /// Overrides the normalization set in the configuration. Until this is
    /// called the voice keeps its configured value.
    pub fn set_normalize(&self, normalize: bool) {
        self.normalize.store(normalize, Ordering::Relaxed);
        self.normalize_generation.fetch_add(1, Ordering::Release);
    }

    pub fn set_envelope(&self, parameters: &EnvelopeParameters) {
        self.attack_rate.store(parameters.attack_rate, Ordering::Relaxed);
        self.decay_rate.store(parameters.decay_rate, Ordering::Relaxed);
        self.release_rate.store(parameters.release_rate, Ordering::Relaxed);
        self.sustain_level.store(parameters.sustain_level, Ordering::Relaxed);
        self.invert.store(parameters.invert, Ordering::Relaxed);
    }

    pub fn set_attack_rate(&self, rate: u16) {
        self.attack_rate.store(rate, Ordering::Relaxed);
    }

    pub fn set_decay_rate(&self, rate: u16) {
        self.decay_rate.store(rate, Ordering::Relaxed);
    }

    pub fn set_invert(&self, invert: bool) {
        self.invert.store(invert, Ordering::Relaxed);
    }

    pub fn set_lfo(&self, enabled: bool, millihertz: u32, depth: Fix15) {
        self.lfo_rate.store(millihertz, Ordering::Relaxed);
        self.lfo_depth.store(depth, Ordering::Relaxed);
        self.lfo_enabled.store(enabled, Ordering::Relaxed);
    }

    // Tick side.

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    #[inline]
    pub fn note_generation(&self) -> u32 {
        self.note_generation.load(Ordering::Acquire)
    }

    #[inline]
    pub fn tune_generation(&self) -> u32 {
        self.tune_generation.load(Ordering::Acquire)
    }

    /// Frequencies of the latest update. Only meaningful after a generation
    /// counter has been observed to change.
    #[inline]
    pub fn frequencies(&self) -> FrequencyCommand {
        FrequencyCommand {
            carrier: self.carrier.load(Ordering::Relaxed),
            modulator: self.modulator.load(Ordering::Relaxed),
            resolution: if self.fine.load(Ordering::Relaxed) {
                Resolution::DeciHertz
            } else {
                Resolution::Hertz
            },
            reset: self.reset.load(Ordering::Relaxed),
        }
    }

    #[inline]
    pub fn shape_source(&self) -> ShapeSource {
        ShapeSource::from_u8(self.shape_source.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn shape(&self) -> Fix15 {
        self.shape.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn normalize(&self) -> bool {
        self.normalize.load(Ordering::Relaxed)
    }

    /// Bumped on every [`SynthControls::set_normalize`].
    #[inline]
    pub fn normalize_generation(&self) -> u32 {
        self.normalize_generation.load(Ordering::Acquire)
    }

    #[inline]
    pub fn envelope(&self) -> EnvelopeParameters {
        EnvelopeParameters {
            attack_rate: self.attack_rate.load(Ordering::Relaxed),
            decay_rate: self.decay_rate.load(Ordering::Relaxed),
            release_rate: self.release_rate.load(Ordering::Relaxed),
            sustain_level: self.sustain_level.load(Ordering::Relaxed),
            invert: self.invert.load(Ordering::Relaxed),
        }
    }

    #[inline]
    pub fn lfo_enabled(&self) -> bool {
        self.lfo_enabled.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lfo_rate(&self) -> u32 {
        self.lfo_rate.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lfo_depth(&self) -> Fix15 {
        self.lfo_depth.load(Ordering::Relaxed)
    }

    /// Snapshot of the latest note message.
    pub fn note(&self) -> NoteState {
        NoteState {
            active: self.active.load(Ordering::Acquire),
            command: self.command.load(Ordering::Relaxed),
            note: self.note.load(Ordering::Relaxed),
            velocity: self.velocity.load(Ordering::Relaxed),
        }
    }

    fn store_frequencies(&self, frequencies: &FrequencyCommand) {
        self.carrier.store(frequencies.carrier, Ordering::Relaxed);
        self.modulator.store(frequencies.modulator, Ordering::Relaxed);
        self.fine.store(
            frequencies.resolution == Resolution::DeciHertz,
            Ordering::Relaxed,
        );
        self.reset.store(frequencies.reset, Ordering::Relaxed);
    }
}
