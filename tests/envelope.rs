//! Tests for the envelope

use dsf_oscillator::envelope::*;
use dsf_oscillator::utils::fix15::ONE;

fn parameters(attack_rate: u16, decay_rate: u16, sustain_level: i32) -> EnvelopeParameters {
    EnvelopeParameters {
        attack_rate,
        decay_rate,
        release_rate: 1,
        sustain_level,
        invert: true,
    }
}

#[test]
fn attack_reaches_decay_after_exact_tick_count() {
    let parameters = parameters(1, 1, ONE / 2);
    let mut envelope = Envelope::new();
    envelope.trigger();

    assert_eq!(ATTACK_TICKS, (ENVELOPE_MAX / ENVELOPE_STEP) as u32);

    for tick in 1..ATTACK_TICKS {
        envelope.process(&parameters);
        assert_eq!(envelope.mode(), EnvelopeMode::Attack, "tick {tick}");
    }

    envelope.process(&parameters);
    assert_eq!(envelope.mode(), EnvelopeMode::Decay);
    assert_eq!(envelope.level(), ENVELOPE_MAX);

    // No second transition into decay from later ticks.
    let mut transitions = 0;
    let mut previous = envelope.mode();
    for _ in 0..10 * ATTACK_TICKS {
        envelope.process(&parameters);
        if envelope.mode() != previous {
            transitions += 1;
            assert_ne!(envelope.mode(), EnvelopeMode::Decay);
            assert_ne!(envelope.mode(), EnvelopeMode::Attack);
        }
        previous = envelope.mode();
    }
    assert_eq!(transitions, 1);
}

#[test]
fn slower_attack_rate_stretches_attack() {
    let parameters = parameters(3, 1, 0);
    let mut envelope = Envelope::new();
    envelope.trigger();

    let mut ticks = 0;
    while envelope.mode() == EnvelopeMode::Attack {
        envelope.process(&parameters);
        ticks += 1;
    }

    // The first step lands on tick one, every later one three ticks apart.
    assert_eq!(ticks, 3 * (ATTACK_TICKS - 1) + 1);
}

#[test]
fn level_is_monotonic_per_stage() {
    let parameters = parameters(2, 5, ONE / 4);
    let mut envelope = Envelope::new();
    envelope.trigger();

    let mut previous = envelope.level();
    while envelope.mode() == EnvelopeMode::Attack {
        envelope.process(&parameters);
        assert!(envelope.level() >= previous);
        previous = envelope.level();
    }

    while envelope.mode() == EnvelopeMode::Decay {
        envelope.process(&parameters);
        assert!(envelope.level() <= previous);
        previous = envelope.level();
    }

    assert_eq!(envelope.mode(), EnvelopeMode::Sustain);
    assert_eq!(envelope.level(), ONE / 4);
}

#[test]
fn level_stays_in_unit_range() {
    let parameters = parameters(1, 1, ONE * 2);
    let mut envelope = Envelope::new();
    envelope.trigger();

    for _ in 0..5 * ATTACK_TICKS {
        let shape = envelope.process(&parameters);
        assert!((0..=ONE).contains(&envelope.level()));
        assert!((0..=ONE).contains(&shape));
    }

    // Sustain above the peak is clamped to it.
    assert_eq!(envelope.mode(), EnvelopeMode::Sustain);
    assert_eq!(envelope.level(), ENVELOPE_MAX);
}

#[test]
fn sustain_follows_live_level() {
    let mut parameters = parameters(1, 1, ONE / 2);
    let mut envelope = Envelope::new();
    envelope.trigger();

    while envelope.mode() != EnvelopeMode::Sustain {
        envelope.process(&parameters);
    }
    assert_eq!(envelope.level(), ONE / 2);

    for _ in 0..1000 {
        envelope.process(&parameters);
    }
    assert_eq!(envelope.level(), ONE / 2);

    parameters.sustain_level = ONE / 8;
    envelope.process(&parameters);
    assert_eq!(envelope.level(), ONE / 8);
}

#[test]
fn invert_selects_level_or_complement() {
    let mut parameters = parameters(1, 1, ONE / 2);
    let mut envelope = Envelope::new();
    envelope.trigger();

    for _ in 0..100 {
        envelope.process(&parameters);
    }
    let level = envelope.level();
    assert_eq!(envelope.shape(true), level);
    assert_eq!(envelope.shape(false), ONE - level);

    parameters.invert = false;
    let shape = envelope.process(&parameters);
    assert_eq!(shape, ONE - envelope.level());
}

#[test]
fn zero_rate_counts_as_one() {
    let slow = parameters(0, 0, 0);
    let fast = parameters(1, 1, 0);
    let mut a = Envelope::new();
    let mut b = Envelope::new();
    a.trigger();
    b.trigger();

    for _ in 0..3 * ATTACK_TICKS {
        assert_eq!(a.process(&slow), b.process(&fast));
        assert_eq!(a.mode(), b.mode());
    }
}

#[test]
fn rate_change_applies_mid_ramp() {
    let mut parameters = parameters(1, 1, 0);
    let mut envelope = Envelope::new();
    envelope.trigger();

    for _ in 0..100 {
        envelope.process(&parameters);
    }
    assert_eq!(envelope.level(), 100 * ENVELOPE_STEP);

    // Counter is at 100, so with a rate of 7 the next step falls on 105.
    parameters.attack_rate = 7;
    for _ in 0..5 {
        envelope.process(&parameters);
    }
    assert_eq!(envelope.level(), 100 * ENVELOPE_STEP);
    envelope.process(&parameters);
    assert_eq!(envelope.level(), 101 * ENVELOPE_STEP);
}

#[test]
fn release_ramps_to_zero() {
    let mut parameters = parameters(1, 1, ONE / 2);
    parameters.release_rate = 2;
    let mut envelope = Envelope::new();
    envelope.trigger();

    while envelope.mode() != EnvelopeMode::Sustain {
        envelope.process(&parameters);
    }

    envelope.release();
    assert_eq!(envelope.mode(), EnvelopeMode::Release);
    assert!(!envelope.done());

    let mut previous = envelope.level();
    let mut ticks = 0;
    while !envelope.done() {
        envelope.process(&parameters);
        assert!(envelope.level() <= previous);
        previous = envelope.level();
        ticks += 1;
    }

    let steps = (ONE / 2 / ENVELOPE_STEP) as u32;
    assert_eq!(ticks, 2 * (steps - 1) + 1);
    assert_eq!(envelope.level(), 0);

    // Stays done.
    envelope.process(&parameters);
    assert!(envelope.done());
}

#[test]
fn trigger_restarts_attack() {
    let parameters = parameters(1, 1, ONE / 2);
    let mut envelope = Envelope::new();
    envelope.trigger();

    for _ in 0..2000 {
        envelope.process(&parameters);
    }
    envelope.trigger();
    assert_eq!(envelope.mode(), EnvelopeMode::Attack);
    assert_eq!(envelope.level(), 0);

    envelope.process(&parameters);
    assert_eq!(envelope.level(), ENVELOPE_STEP);
}
