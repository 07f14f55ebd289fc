//! Resources definitions.
//!
//! The floating-point tables are converted to fixed point exactly once, on
//! first use, and shared by every oscillator and LFO afterwards.

pub mod midi;
pub mod normalize;
pub mod sine;

use spin::Once;

use crate::utils::fix15::{self, Fix15};
use sine::{LUT_COSINE_F, LUT_SINE_F, LUT_SINE_SIZE};

pub type Table = [Fix15; LUT_SINE_SIZE];

static SINE_TABLE: Once<Table> = Once::new();
static COSINE_TABLE: Once<Table> = Once::new();
static NOTE_FREQUENCY_TABLE: Once<[Fix15; 128]> = Once::new();

/// One sine cycle in Q15.
pub fn sine_table() -> &'static Table {
    SINE_TABLE.call_once(|| LUT_SINE_F.map(fix15::from_float))
}

/// One cosine cycle in Q15.
pub fn cosine_table() -> &'static Table {
    COSINE_TABLE.call_once(|| LUT_COSINE_F.map(fix15::from_float))
}

/// Note frequencies in Q15 Hz, indexed by MIDI note number.
pub fn note_frequency_table() -> &'static [Fix15; 128] {
    NOTE_FREQUENCY_TABLE.call_once(|| midi::LUT_NOTE_FREQUENCY_HZ.map(fix15::from_float))
}
