//! Tests for the oscillators

mod modulation;

use dsf_oscillator::oscillator::dsf_oscillator::*;
use dsf_oscillator::oscillator::lfo::Lfo;
use dsf_oscillator::resources::{cosine_table, sine_table};
use dsf_oscillator::utils::fix15::{self, ONE};
use dsf_oscillator::SynthConfig;

use wav_writer::SAMPLE_RATE;

const DAC_BIT_DEPTH: u8 = 12;

fn config() -> SynthConfig {
    SynthConfig::new(SAMPLE_RATE, DAC_BIT_DEPTH).unwrap()
}

fn expected_sine_code(sine: i32) -> i32 {
    let half_dac = fix15::from_float(4095.0 / 2.0);
    fix15::to_int(fix15::mul(sine, half_dac) + half_dac)
}

#[test]
fn plain_sine_at_zero_shape() {
    let mut osc = DsfOscillator::new(&config());
    osc.set_frequencies(fix15::from_int(440), fix15::from_int(440), true);

    let step = osc.carrier_step();
    assert_eq!(step, ((440u64 << 32) / 40000) as u32);

    let sine = sine_table();
    for n in 0..10u32 {
        let index = (step.wrapping_mul(n) >> 24) as usize;
        assert_eq!(osc.next_sample(0), expected_sine_code(sine[index]));
    }
}

#[test]
fn zero_shape_ignores_modulator() {
    let mut a = DsfOscillator::new(&config());
    let mut b = DsfOscillator::new(&config());
    a.set_frequencies(fix15::from_int(220), fix15::from_int(110), true);
    b.set_frequencies(fix15::from_int(220), fix15::from_int(1234), true);

    for _ in 0..1000 {
        assert_eq!(a.next_sample(0), b.next_sample(0));
    }
}

#[test]
fn denominator_positive_over_whole_range() {
    let cosine = cosine_table();
    let mut distinct = cosine.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    for a in 0..=PARAM_A_MAX {
        for &c in distinct.iter() {
            assert!(dsf_denominator(a, c) > 0, "a = {a}, cos = {c}");
        }
    }
}

#[test]
fn shape_clamp_is_idempotent() {
    assert_eq!(clamp_shape(-1), 0);
    assert_eq!(clamp_shape(i32::MIN), 0);
    assert_eq!(clamp_shape(ONE), PARAM_A_MAX);
    assert_eq!(clamp_shape(PARAM_A_MAX + 1), PARAM_A_MAX);
    assert_eq!(clamp_shape(clamp_shape(ONE * 3)), PARAM_A_MAX);
    assert!(PARAM_A_MAX < ONE);

    let render = |shape: i32| {
        let mut osc = DsfOscillator::new(&config());
        osc.set_frequencies(fix15::from_int(330), fix15::from_int(660), true);
        (0..500).map(|_| osc.next_sample(shape)).collect::<Vec<_>>()
    };

    assert_eq!(render(ONE), render(PARAM_A_MAX));
    assert_eq!(render(i32::MAX), render(PARAM_A_MAX));
    assert_eq!(render(-ONE), render(0));
    assert_eq!(render(-1), render(0));
}

#[test]
fn phase_wraps_with_accumulator() {
    let mut osc = DsfOscillator::new(&config());
    osc.set_frequencies(fix15::from_int(7919), fix15::from_int(3001), true);

    let carrier_step = osc.carrier_step();
    let modulator_step = osc.modulator_step();
    let mut carrier = 0u32;
    let mut modulator = 0u32;

    // Several full wraps of both accumulators.
    for _ in 0..100_000 {
        assert_eq!(osc.carrier_phase(), carrier);
        assert_eq!(osc.modulator_phase(), modulator);
        osc.next_sample(ONE / 2);
        carrier = carrier.wrapping_add(carrier_step);
        modulator = modulator.wrapping_add(modulator_step);
    }
}

#[test]
fn table_index_continues_across_wrap() {
    let mut osc = DsfOscillator::new(&config());
    // One table entry per sample.
    let frequency = fix15::div(fix15::from_int(SAMPLE_RATE as i32), fix15::from_int(256));
    osc.set_frequencies(frequency, 0, true);
    assert_eq!(osc.carrier_step(), 1 << 24);

    let sine = sine_table();
    for n in 0..600usize {
        assert_eq!(osc.next_sample(0), expected_sine_code(sine[n % 256]));
    }
}

#[test]
fn reset_only_when_requested() {
    let mut osc = DsfOscillator::new(&config());
    osc.set_frequencies(fix15::from_int(440), fix15::from_int(880), true);
    for _ in 0..37 {
        osc.next_sample(ONE / 4);
    }
    let carrier_phase = osc.carrier_phase();
    let carrier_step = osc.carrier_step();
    assert_ne!(carrier_phase, 0);

    osc.set_frequencies(fix15::from_int(440), fix15::from_int(660), false);
    assert_eq!(osc.carrier_phase(), carrier_phase);
    assert_eq!(osc.carrier_step(), carrier_step);
    assert_eq!(osc.modulator_frequency(), fix15::from_int(660));

    osc.set_frequencies(fix15::from_int(440), fix15::from_int(660), true);
    assert_eq!(osc.carrier_phase(), 0);
    assert_eq!(osc.modulator_phase(), 0);
}

#[test]
fn modulator_only_update_keeps_carrier() {
    let mut osc = DsfOscillator::new(&config());
    osc.set_frequencies(fix15::from_int(200), fix15::from_int(400), true);
    for _ in 0..10 {
        osc.next_sample(ONE / 2);
    }
    let carrier_step = osc.carrier_step();
    let carrier_phase = osc.carrier_phase();

    osc.set_modulator_frequency(fix15::from_int(300), false);
    assert_eq!(osc.carrier_step(), carrier_step);
    assert_eq!(osc.carrier_phase(), carrier_phase);
    assert_eq!(osc.carrier_frequency(), fix15::from_int(200));
    assert_eq!(osc.modulator_step(), ((300u64 << 32) / 40000) as u32);
}

#[test]
fn deci_hertz_resolution_matches_hertz() {
    let mut coarse = DsfOscillator::new(&config());
    let mut fine = DsfOscillator::new(&config());
    fine.set_resolution(Resolution::DeciHertz);

    coarse.set_frequencies(fix15::from_int(440), fix15::from_int(220), true);
    fine.set_frequencies(fix15::from_int(4400), fix15::from_int(2200), true);
    assert_eq!(coarse.carrier_step(), fine.carrier_step());
    assert_eq!(coarse.modulator_step(), fine.modulator_step());

    // A tenth of a hertz is representable in steps.
    fine.set_modulator_frequency(fix15::from_int(2201), false);
    assert!(fine.modulator_step() > coarse.modulator_step());
}

#[test]
fn negative_frequency_gives_zero_step() {
    assert_eq!(phase_step(-fix15::from_int(100), 40000), 0);
    assert_eq!(phase_step(0, 40000), 0);
    assert_eq!(phase_step(fix15::from_int(20000), 40000), 1 << 31);
    assert_eq!(phase_step(fix15::from_int(30000), 1), u32::MAX);
}

#[test]
fn normalized_output_stays_in_dac_range() {
    let config = config().with_normalize(true);
    let mut osc = DsfOscillator::new(&config);
    assert!(osc.normalize());
    osc.set_frequencies(fix15::from_int(97), fix15::from_int(97), true);

    let mut a = 0;
    while a <= ONE {
        for _ in 0..SAMPLE_RATE / 97 + 1 {
            let code = osc.next_sample(a);
            assert!((0..=4095).contains(&code), "a = {a}, code = {code}");
        }
        a += 64;
    }
}

#[test]
fn normalization_gain_decreases_with_shape() {
    let mut previous = normalization_gain(0);
    assert!(previous <= ONE);

    let mut a = 0;
    while a <= PARAM_A_MAX {
        let gain = normalization_gain(a);
        assert!(gain <= previous);
        assert!(gain > 0);
        previous = gain;
        a += 100;
    }
}

#[test]
fn unnormalized_output_can_exceed_dac_range() {
    let mut osc = DsfOscillator::new(&config());
    osc.set_frequencies(fix15::from_int(100), 0, true);

    // Modulator pinned at cos = 1, carrier sweeping through the sine peak.
    let peak = (0..SAMPLE_RATE / 100)
        .map(|_| osc.next_sample(ONE))
        .max()
        .unwrap();
    assert!(peak > 4095);
}

#[test]
fn lfo_rate_and_depth() {
    let mut lfo = Lfo::new(100);
    lfo.set_rate(1000);
    assert_eq!(lfo.step(), ((1000u64 << 32) / 100_000) as u32);

    let values = (0..100).map(|_| lfo.process(ONE / 10)).collect::<Vec<_>>();
    let max = *values.iter().max().unwrap();
    let min = *values.iter().min().unwrap();
    assert!(max <= ONE / 10 && max > ONE / 11);
    assert!(min >= -ONE / 10 && min < -ONE / 11);

    lfo.set_rate(0);
    assert_eq!(lfo.step(), ((100u64 << 32) / 100_000) as u32);
}

#[test]
fn dsf_shape_sweep() {
    let duration = 2;
    let ticks = SAMPLE_RATE as usize * duration;

    let mut osc = DsfOscillator::new(&config().with_normalize(true));
    osc.set_frequencies(fix15::from_int(110), fix15::from_int(220), true);

    let mut wav_data = Vec::with_capacity(ticks);
    for n in 0..ticks {
        let shape = fix15::from_float(modulation::ramp_up(n, ticks));
        wav_data.push(u16::try_from(osc.next_sample(shape)).ok());
    }

    assert!(wav_data.iter().all(Option::is_some));
    wav_writer::write("oscillator/dsf_sweep.wav", &wav_data, DAC_BIT_DEPTH).ok();
}

#[test]
fn dsf_inharmonic_wobble() {
    let duration = 2;
    let ticks = SAMPLE_RATE as usize * duration;

    let mut osc = DsfOscillator::new(&config().with_normalize(true));
    osc.set_frequencies(fix15::from_int(110), fix15::from_float(110.0 * 1.414), true);

    let mut wav_data = Vec::with_capacity(ticks);
    for n in 0..ticks {
        let shape = fix15::from_float(0.5 + 0.4 * modulation::triangle(n, ticks, 4.0));
        wav_data.push(u16::try_from(osc.next_sample(shape)).ok());
    }

    wav_writer::write("oscillator/dsf_inharmonic.wav", &wav_data, DAC_BIT_DEPTH).ok();
}
