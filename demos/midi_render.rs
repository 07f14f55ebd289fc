//! Renders a short MIDI sequence through the voice into a WAV file.
//!
//! The sequence is fed from a control thread while the sample tick runs on
//! the main thread, the same split as between a MIDI callback and a timer
//! interrupt on hardware. Both meet only in the shared `SynthControls`.

use std::sync::mpsc;
use std::thread;

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use dsf_oscillator::envelope::EnvelopeParameters;
use dsf_oscillator::midi::{ModulatorOctave, NoteInput, NoteMapping};
use dsf_oscillator::utils::fix15::ONE;
use dsf_oscillator::{NoteOffPolicy, ShapeSource, SynthConfig, SynthControls, Voice};

const SAMPLE_RATE: u32 = 40000;
const DAC_BIT_DEPTH: u8 = 12;

static CONTROLS: SynthControls = SynthControls::new();

/// (tick, message) pairs.
const SEQUENCE: &[(usize, [u8; 3])] = &[
    (0, [0x90, 45, 100]),
    (16000, [0x80, 45, 0]),
    (20000, [0x90, 52, 100]),
    (28000, [0xE0, 0x00, 0x60]),
    (36000, [0xE0, 0x00, 0x40]),
    (44000, [0x80, 52, 0]),
    (52000, [0x90, 57, 90]),
    (72000, [0x90, 57, 0]),
];

const LENGTH: usize = 80000;
const CONTROL_INTERVAL: usize = 400;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let config = SynthConfig::new(SAMPLE_RATE, DAC_BIT_DEPTH)
        .unwrap()
        .with_normalize(true)
        .with_note_off(NoteOffPolicy::Release);

    CONTROLS.set_shape_source(ShapeSource::Envelope);
    CONTROLS.set_envelope(&EnvelopeParameters {
        attack_rate: 4,
        decay_rate: 12,
        release_rate: 6,
        sustain_level: ONE / 3,
        invert: false,
    });

    let (clock, ticks) = mpsc::channel::<usize>();
    let (done, handled) = mpsc::channel::<()>();

    let control = thread::spawn(move || {
        let mut input = NoteInput::new(&config);
        input.set_mapping(
            NoteMapping {
                octave: ModulatorOctave::Up,
                harmonic: true,
            },
            &CONTROLS,
        );

        let mut events = SEQUENCE.iter().peekable();
        for tick in ticks {
            while let Some((at, message)) = events.next_if(|(at, _)| *at <= tick) {
                log::debug!("Tick {}: {:02x?}", at, message);
                input.handle_bytes(message, &CONTROLS);
            }
            done.send(()).ok();
        }
    });

    let mut voice = Voice::new(&config);
    log::info!("Sample period: {:?}", config.sample_period());

    let half = config.dac_max() / 2;
    let mut samples = Vec::with_capacity(LENGTH);
    let mut sounding = 0;

    for tick in 0..LENGTH {
        // Let the control thread catch up with the clock before rendering.
        if tick % CONTROL_INTERVAL == 0 {
            clock.send(tick).unwrap();
            handled.recv().unwrap();
        }

        let code = voice.tick(&CONTROLS);
        if code.is_some() {
            sounding += 1;
        }
        samples.push(code.unwrap_or(half));
    }
    drop(clock);
    control.join().unwrap();

    log::info!("Rendered {} sounding ticks out of {}", sounding, LENGTH);

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    std::fs::create_dir_all("out").ok();
    let mut writer = WavWriter::create("out/midi_render.wav", spec).unwrap();

    // Center on zero and widen the 12-bit codes to half of the 16-bit range.
    let shift = 15 - DAC_BIT_DEPTH as u32;
    for code in samples {
        let sample = (code as i32 - half as i32) << shift;
        writer.write_sample(sample as i16).unwrap();
    }
    writer.finalize().unwrap();
}
