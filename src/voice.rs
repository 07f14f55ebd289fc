//! The monophonic voice, rendered one sample per timer tick.
//!
//! [`Voice`] owns the oscillator, envelope and LFO and is only ever touched
//! by the tick. It learns about notes and knob changes by reading
//! [`SynthControls`], which the control side writes. A tick does a bounded
//! amount of integer work, never allocates and never blocks, so it fits in a
//! timer interrupt with a deadline of one sample period.

use core::time::Duration;

use crate::config::{NoteOffPolicy, SynthConfig};
use crate::controls::{FrequencyCommand, ShapeSource, SynthControls};
use crate::envelope::{Envelope, EnvelopeMode};
use crate::oscillator::dsf_oscillator::DsfOscillator;
use crate::oscillator::lfo::Lfo;
use crate::utils::dac_code;

/// Output device accepting one code per tick.
pub trait Dac {
    fn set_input_code(&mut self, code: u16);
}

impl<F: FnMut(u16)> Dac for F {
    fn set_input_code(&mut self, code: u16) {
        self(code)
    }
}

#[derive(Debug, Clone)]
pub struct Voice {
    oscillator: DsfOscillator,
    envelope: Envelope,
    lfo: Lfo,

    note_off: NoteOffPolicy,
    dac_max: u16,

    // Last generations seen on the controls.
    note_generation: u32,
    tune_generation: u32,
    normalize_generation: u32,
    lfo_rate: u32,

    // Cleared by `init` to reload the published frequencies.
    frequencies_loaded: bool,
    pending_trigger: bool,
    sounding: bool,
}

impl Voice {
    pub fn new(config: &SynthConfig) -> Self {
        Self {
            oscillator: DsfOscillator::new(config),
            envelope: Envelope::new(),
            lfo: Lfo::new(config.sample_rate),
            note_off: config.note_off,
            dac_max: config.dac_max(),
            note_generation: 0,
            tune_generation: 0,
            normalize_generation: 0,
            lfo_rate: 0,
            frequencies_loaded: true,
            pending_trigger: false,
            sounding: false,
        }
    }

    pub fn init(&mut self) {
        self.oscillator.init();
        self.envelope.init();
        self.lfo.init();
        self.lfo_rate = 0;
        self.frequencies_loaded = false;
        self.pending_trigger = false;
        self.sounding = false;
    }

    /// Renders one tick.
    ///
    /// Returns the DAC code to write, or `None` when the voice is silent or
    /// the sample fell outside the DAC range.
    pub fn tick(&mut self, controls: &SynthControls) -> Option<u16> {
        // The gate is read first. A note-on raises it after bumping the
        // generation, so a raised gate always comes with its frequencies.
        let gate = controls.is_active();
        self.poll_frequencies(controls);

        if gate {
            if self.pending_trigger {
                self.pending_trigger = false;
                self.envelope.trigger();
                self.lfo.reset();
            }
            self.sounding = true;
        } else if self.sounding {
            match self.note_off {
                NoteOffPolicy::Gate => self.sounding = false,
                NoteOffPolicy::Release => {
                    if self.envelope.mode() != EnvelopeMode::Release {
                        self.envelope.release();
                    }
                }
            }
        }

        if !self.sounding {
            return None;
        }

        let envelope_shape = self.envelope.process(&controls.envelope());
        if self.envelope.done() {
            self.sounding = false;
            return None;
        }

        let mut shape = match controls.shape_source() {
            ShapeSource::Manual => controls.shape(),
            ShapeSource::Envelope => envelope_shape,
        };

        if controls.lfo_enabled() {
            let rate = controls.lfo_rate();
            if rate != self.lfo_rate {
                self.lfo.set_rate(rate);
                self.lfo_rate = rate;
            }
            shape = shape.saturating_add(self.lfo.process(controls.lfo_depth()));
        }

        // The configured value holds until the control side overrides it.
        let normalize_generation = controls.normalize_generation();
        if normalize_generation != self.normalize_generation {
            self.normalize_generation = normalize_generation;
            self.oscillator.set_normalize(controls.normalize());
        }

        let code = self.oscillator.next_sample(shape);

        dac_code(code, self.dac_max)
    }

    /// Renders one tick and writes the result, if any, to `dac`. Returns
    /// whether a code was written.
    pub fn tick_into<D: Dac>(&mut self, controls: &SynthControls, dac: &mut D) -> bool {
        match self.tick(controls) {
            Some(code) => {
                dac.set_input_code(code);
                true
            }
            None => false,
        }
    }

    /// Renders consecutive ticks into `out`.
    pub fn render(&mut self, controls: &SynthControls, out: &mut [Option<u16>]) {
        for sample in out.iter_mut() {
            *sample = self.tick(controls);
        }
    }

    fn poll_frequencies(&mut self, controls: &SynthControls) {
        let note_generation = controls.note_generation();
        if note_generation != self.note_generation || !self.frequencies_loaded {
            self.note_generation = note_generation;
            self.frequencies_loaded = true;
            // Covers any retune published before this note-on.
            self.tune_generation = controls.tune_generation();

            let frequencies = controls.frequencies();
            self.oscillator.set_resolution(frequencies.resolution);
            self.oscillator.set_frequencies(
                frequencies.carrier,
                frequencies.modulator,
                frequencies.reset,
            );
            self.pending_trigger = true;
            return;
        }

        let tune_generation = controls.tune_generation();
        if tune_generation != self.tune_generation {
            self.tune_generation = tune_generation;
            self.retune(controls.frequencies());
        }
    }

    fn retune(&mut self, frequencies: FrequencyCommand) {
        if frequencies.resolution == self.oscillator.resolution()
            && frequencies.carrier == self.oscillator.carrier_frequency()
        {
            self.oscillator
                .set_modulator_frequency(frequencies.modulator, false);
        } else {
            self.oscillator.set_resolution(frequencies.resolution);
            self.oscillator
                .set_frequencies(frequencies.carrier, frequencies.modulator, false);
        }
    }

    #[inline]
    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    #[inline]
    pub fn oscillator(&self) -> &DsfOscillator {
        &self.oscillator
    }

    #[inline]
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// The recurring sample task: a voice bound to its controls and output.
///
/// Call [`SampleTask::run`] from a timer firing every
/// [`SampleTask::period`]. It runs for the lifetime of the program; stopping
/// a note is done through the controls, not by cancelling the task.
#[derive(Debug)]
pub struct SampleTask<'a, D: Dac> {
    voice: Voice,
    controls: &'a SynthControls,
    dac: D,
    period: Duration,
}

impl<'a, D: Dac> SampleTask<'a, D> {
    pub fn new(config: &SynthConfig, controls: &'a SynthControls, dac: D) -> Self {
        Self {
            voice: Voice::new(config),
            controls,
            dac,
            period: config.sample_period(),
        }
    }

    /// One timer callback. Returns whether a code was written.
    #[inline]
    pub fn run(&mut self) -> bool {
        self.voice.tick_into(self.controls, &mut self.dac)
    }

    /// Deadline of a single run.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    #[inline]
    pub fn dac(&self) -> &D {
        &self.dac
    }
}
