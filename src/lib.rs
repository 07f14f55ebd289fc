#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controls;
pub mod envelope;
pub mod midi;
pub mod oscillator;
pub mod resources;
pub mod utils;
pub mod voice;

pub use config::{ConfigError, NoteOffPolicy, SynthConfig};
pub use controls::{ShapeSource, SynthControls};
pub use oscillator::dsf_oscillator::DsfOscillator;
pub use utils::fix15::Fix15;
pub use voice::{Dac, SampleTask, Voice};
