//! MIDI input for the monophonic voice.
//!
//! Turns raw channel messages into frequency commands on [`SynthControls`].
//! The channel nibble is ignored, so the voice answers on all channels.

// Based on code by rabbiabe (dsf-oscillator-pico)

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::config::SynthConfig;
use crate::controls::{FrequencyCommand, SynthControls};
use crate::oscillator::dsf_oscillator::Resolution;
use crate::resources::note_frequency_table;
use crate::utils::fix15::{self, Fix15, HALF, ONE, TEN, TWO};

/// `√2` in Q15, for inharmonic modulator ratios.
pub const ROOT_2: Fix15 = 46340;

/// Pitch bend range in semitones, up and down.
pub const PITCH_BEND_RANGE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    NoteOff { note: u8, velocity: u8 },
    NoteOn { note: u8, velocity: u8 },

    /// Signed bend amount in the range from `-8192` to `8191`.
    PitchBend { value: i16 },

    /// Anything the voice does not react to.
    Other { status: u8 },
}

impl MidiMessage {
    /// Parses a single channel message. Returns `None` for running status
    /// and truncated messages.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let (&status, data) = bytes.split_first()?;

        if status & 0x80 == 0 {
            return None;
        }

        match status & 0xF0 {
            0x80 => {
                let (note, velocity) = data_bytes(data)?;
                Some(Self::NoteOff { note, velocity })
            }
            0x90 => {
                let (note, velocity) = data_bytes(data)?;
                if velocity == 0 {
                    Some(Self::NoteOff { note, velocity })
                } else {
                    Some(Self::NoteOn { note, velocity })
                }
            }
            0xE0 => {
                let (lsb, msb) = data_bytes(data)?;
                let value = ((msb as i16) << 7 | lsb as i16) - 8192;
                Some(Self::PitchBend { value })
            }
            _ => Some(Self::Other { status }),
        }
    }
}

#[inline]
fn data_bytes(data: &[u8]) -> Option<(u8, u8)> {
    match data {
        [first, second, ..] => Some((first & 0x7F, second & 0x7F)),
        _ => None,
    }
}

/// Equal-tempered frequency of a MIDI note in Q15 Hz.
#[inline]
pub fn note_to_frequency(note: u8) -> Fix15 {
    note_frequency_table()[(note & 0x7F) as usize]
}

/// Frequency ratio for a pitch bend value, in Q15.
pub fn bend_to_ratio(value: i16) -> Fix15 {
    let semitones = value as f32 / 8192.0 * PITCH_BEND_RANGE;
    fix15::from_float(2.0f32.powf(semitones / 12.0))
}

/// Octave of the modulator relative to the carrier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModulatorOctave {
    /// One octave below the carrier.
    Down,

    /// One octave above the carrier.
    #[default]
    Up,
}

impl ModulatorOctave {
    /// Picks the octave from a 12-bit switch or knob reading.
    pub fn from_knob(reading: u16) -> Self {
        if reading < 2048 {
            Self::Down
        } else {
            Self::Up
        }
    }

    #[inline]
    pub fn ratio(self) -> Fix15 {
        match self {
            Self::Down => HALF,
            Self::Up => TWO,
        }
    }
}

/// How a note frequency maps to the modulator frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteMapping {
    pub octave: ModulatorOctave,

    /// Keep the modulator on an octave of the carrier. When off it is detuned
    /// by a factor of `√2`, giving inharmonic spectra.
    pub harmonic: bool,
}

impl Default for NoteMapping {
    fn default() -> Self {
        Self {
            octave: ModulatorOctave::Up,
            harmonic: true,
        }
    }
}

impl NoteMapping {
    #[inline]
    pub fn modulator(&self, carrier: Fix15) -> Fix15 {
        let detune = if self.harmonic { ONE } else { ROOT_2 };
        fix15::mul(carrier, fix15::mul(self.octave.ratio(), detune))
    }
}

/// Control-side MIDI handler.
#[derive(Debug, Clone)]
pub struct NoteInput {
    mapping: NoteMapping,
    fine_tuning: bool,
    bend: Fix15,
}

impl NoteInput {
    pub fn new(config: &SynthConfig) -> Self {
        Self {
            mapping: NoteMapping::default(),
            fine_tuning: config.fine_tuning,
            bend: ONE,
        }
    }

    /// Frequency command for `note` under the current mapping and bend.
    ///
    /// With fine tuning the frequencies go out in tenths of a hertz, unless
    /// that would overflow Q15.
    pub fn frequencies(&self, note: u8) -> FrequencyCommand {
        let carrier = fix15::mul(note_to_frequency(note), self.bend);
        let modulator = self.mapping.modulator(carrier);

        let fits = |frequency: Fix15| frequency as i64 * 10 <= i32::MAX as i64;

        if self.fine_tuning && fits(carrier) && fits(modulator) {
            FrequencyCommand {
                carrier: fix15::mul(carrier, TEN),
                modulator: fix15::mul(modulator, TEN),
                resolution: Resolution::DeciHertz,
                reset: true,
            }
        } else {
            FrequencyCommand {
                carrier,
                modulator,
                resolution: Resolution::Hertz,
                reset: true,
            }
        }
    }

    #[inline]
    pub fn mapping(&self) -> NoteMapping {
        self.mapping
    }

    /// Changes the modulator mapping, retuning a sounding note in place.
    pub fn set_mapping(&mut self, mapping: NoteMapping, controls: &SynthControls) {
        self.mapping = mapping;
        log::debug!("Modulator mapping: {:?}", mapping);
        self.retune(controls);
    }

    /// Parses and handles one raw message.
    pub fn handle_bytes(&mut self, bytes: &[u8], controls: &SynthControls) {
        match MidiMessage::parse(bytes) {
            Some(message) => self.handle(message, controls),
            None => log::trace!("Dropping malformed MIDI message {:02x?}", bytes),
        }
    }

    pub fn handle(&mut self, message: MidiMessage, controls: &SynthControls) {
        match message {
            MidiMessage::NoteOn { note, velocity } => {
                let frequencies = self.frequencies(note);
                controls.note_on(note, velocity, frequencies);
                log::info!(
                    "Note on: {} (carrier {} Hz, modulator {} Hz)",
                    note,
                    fix15::to_float(frequencies.carrier),
                    fix15::to_float(frequencies.modulator),
                );
            }
            MidiMessage::NoteOff { note, velocity } => {
                if controls.note_off(note, velocity) {
                    log::info!("Note off: {}", note);
                } else {
                    log::debug!("Ignoring note off for {}, not sounding", note);
                }
            }
            MidiMessage::PitchBend { value } => {
                self.bend = bend_to_ratio(value);
                log::debug!("Pitch bend: {}", value);
                self.retune(controls);
            }
            MidiMessage::Other { status } => {
                log::trace!("Ignoring MIDI status {:#04x}", status);
            }
        }
    }

    fn retune(&self, controls: &SynthControls) {
        let state = controls.note();
        if state.active {
            controls.retune(&self.frequencies(state.note));
        }
    }
}
