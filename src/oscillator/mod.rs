//! Oscillators.

pub mod dsf_oscillator;
pub mod lfo;
